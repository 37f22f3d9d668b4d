//! Organization catalog - the fixed list of charities a donation can support.
//!
//! The table is static reference data: it is compiled in, read-only, and shared by
//! every session.

use crate::errors::{Error, Result};

/// A charity that donations can be directed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Organization {
    /// Display name, also the key used in donation records
    pub name: &'static str,
    /// Where the organization works
    pub region: &'static str,
    /// Area of focus
    pub focus: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// Number of organizations pre-selected when a donor picks none.
pub const DEFAULT_SELECTION: usize = 3;

static ORGANIZATIONS: [Organization; 6] = [
    Organization {
        name: "Room to Read",
        region: "Global",
        focus: "Girls' education and literacy",
        description: "Working in 17 countries to transform millions of lives through education",
    },
    Organization {
        name: "Malala Fund",
        region: "Global",
        focus: "Girls' education advocacy",
        description: "Advocating for 12 years of free, safe, quality education for every girl",
    },
    Organization {
        name: "Teach for All",
        region: "Global",
        focus: "Teacher training and leadership",
        description: "Developing collective leadership to ensure all children can fulfill their potential",
    },
    Organization {
        name: "Save the Children",
        region: "Conflict Zones",
        focus: "Emergency education",
        description: "Providing education in emergencies and conflict-affected areas",
    },
    Organization {
        name: "World Vision Education",
        region: "Sub-Saharan Africa",
        focus: "Community-based education",
        description: "Building schools and training teachers in underserved communities",
    },
    Organization {
        name: "UNICEF Education",
        region: "Global",
        focus: "Universal education access",
        description: "Working to ensure every child has access to quality education",
    },
];

/// Returns every organization in catalog order.
#[must_use]
pub fn all_organizations() -> &'static [Organization] {
    &ORGANIZATIONS
}

/// Names of the organizations selected by default.
#[must_use]
pub fn default_selection() -> Vec<String> {
    ORGANIZATIONS
        .iter()
        .take(DEFAULT_SELECTION)
        .map(|org| org.name.to_string())
        .collect()
}

/// Looks up an organization by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn find_organization(name: &str) -> Option<&'static Organization> {
    let wanted = name.trim();
    ORGANIZATIONS
        .iter()
        .find(|org| org.name.eq_ignore_ascii_case(wanted))
}

/// Resolves user-supplied names to canonical catalog names.
///
/// An empty selection falls back to [`default_selection`]. Duplicates are dropped and
/// the first-seen order is kept.
pub fn resolve_selection<S: AsRef<str>>(names: &[S]) -> Result<Vec<String>> {
    if names.is_empty() {
        return Ok(default_selection());
    }

    let mut resolved: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let org = find_organization(name.as_ref()).ok_or_else(|| Error::UnknownOrganization {
            name: name.as_ref().trim().to_string(),
        })?;
        if !resolved.iter().any(|existing| existing == org.name) {
            resolved.push(org.name.to_string());
        }
    }
    Ok(resolved)
}

/// Splits a comma-separated list as typed into a slash command option.
#[must_use]
pub fn parse_selection(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_catalog_has_six_organizations() {
        assert_eq!(all_organizations().len(), 6);
        assert_eq!(all_organizations()[0].name, "Room to Read");
    }

    #[test]
    fn test_default_selection_is_first_three() {
        assert_eq!(
            default_selection(),
            vec!["Room to Read", "Malala Fund", "Teach for All"]
        );
    }

    #[test]
    fn test_find_organization_case_insensitive() {
        let org = find_organization("  unicef education ").unwrap();
        assert_eq!(org.name, "UNICEF Education");
        assert_eq!(org.region, "Global");
        assert!(find_organization("Nonexistent Charity").is_none());
    }

    #[test]
    fn test_resolve_selection_dedupes_and_keeps_order() {
        let resolved =
            resolve_selection(&["save the children", "Room to Read", "Save the Children"])
                .unwrap();
        assert_eq!(resolved, vec!["Save the Children", "Room to Read"]);
    }

    #[test]
    fn test_resolve_selection_empty_uses_default() {
        let resolved = resolve_selection::<&str>(&[]).unwrap();
        assert_eq!(resolved.len(), DEFAULT_SELECTION);
    }

    #[test]
    fn test_resolve_selection_unknown_name() {
        let result = resolve_selection(&["Room to Read", "Bogus Trust"]);
        assert!(matches!(
            result,
            Err(Error::UnknownOrganization { name }) if name == "Bogus Trust"
        ));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            parse_selection("Malala Fund, ,Teach for All ,"),
            vec!["Malala Fund", "Teach for All"]
        );
        assert!(parse_selection("   ").is_empty());
    }
}

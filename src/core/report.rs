//! Report generation business logic.
//!
//! Read-only views over a session: the donor leaderboard and the donation history with
//! its total impact, plus the currency formatting shared by every view. Nothing here
//! mutates state.

use crate::core::donation::DonationRecord;

/// Name under which the current donor appears on the leaderboard.
pub const YOU: &str = "You";

/// One row on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Donor display name
    pub name: String,
    /// Total given, whole dollars
    pub amount: u64,
}

impl LeaderboardEntry {
    fn new(name: &str, amount: u64) -> Self {
        Self {
            name: name.to_string(),
            amount,
        }
    }
}

/// Top donors from previous galas, shown alongside the current donor.
#[must_use]
pub fn sample_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::new("Anonymous Benefactor", 50_000),
        LeaderboardEntry::new("The Whitmore Family Trust", 35_000),
        LeaderboardEntry::new("Literacy Forward Foundation", 25_000),
        LeaderboardEntry::new("Dr. Elena Marsh", 20_000),
    ]
}

/// Adds the current donor as [`YOU`] and sorts by amount, largest first.
///
/// The sort is stable: donors with equal amounts keep their input order, so the
/// current donor ranks below an existing donor with the same total.
#[must_use]
pub fn leaderboard(sample: &[LeaderboardEntry], your_total: u64) -> Vec<LeaderboardEntry> {
    let mut rows = sample.to_vec();
    rows.push(LeaderboardEntry::new(YOU, your_total));
    rows.sort_by(|a, b| b.amount.cmp(&a.amount));
    rows
}

/// One history row, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Whole dollars
    pub amount: u64,
    /// Comma-joined organization names
    pub organizations: String,
    /// Frequency label
    pub frequency: String,
}

/// The donor's history in submission order with the total impact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryView {
    /// One row per accepted donation
    pub rows: Vec<HistoryRow>,
    /// Sum of every amount in `rows`
    pub total_impact: u64,
}

/// Builds the history view from a session's donation records.
#[must_use]
pub fn donation_history(history: &[DonationRecord]) -> HistoryView {
    let rows = history
        .iter()
        .map(|record| HistoryRow {
            date: record.date.format("%Y-%m-%d").to_string(),
            amount: record.amount,
            organizations: record.organizations.join(", "),
            frequency: record.frequency.label().to_string(),
        })
        .collect();
    let total_impact = history.iter().map(|record| record.amount).sum();

    HistoryView { rows, total_impact }
}

/// Formats whole dollars with thousands separators.
///
/// # Returns
/// Formatted string like "$5,000" or "$1,000,000"
#[must_use]
pub fn format_currency(amount: u64) -> String {
    format!("${}", group_thousands(&amount.to_string()))
}

/// Formats a fractional share with thousands separators and cents.
///
/// # Returns
/// Formatted string like "$1,666.67"
#[must_use]
pub fn format_share(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::donation::Frequency;
    use crate::test_utils::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(100), "$100");
        assert_eq!(format_currency(5000), "$5,000");
        assert_eq!(format_currency(250_000), "$250,000");
        assert_eq!(format_currency(1_000_000), "$1,000,000");
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(5000.0 / 3.0), "$1,666.67");
        assert_eq!(format_share(2500.0), "$2,500.00");
        assert_eq!(format_share(333.333), "$333.33");
        assert_eq!(format_share(-12.5), "-$12.50");
    }

    #[test]
    fn test_leaderboard_inserts_you_in_order() {
        let rows = leaderboard(&sample_leaderboard(), 30_000);
        let amounts: Vec<u64> = rows.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![50_000, 35_000, 30_000, 25_000, 20_000]);
        assert_eq!(rows[2].name, YOU);
    }

    #[test]
    fn test_leaderboard_you_at_bottom() {
        let rows = leaderboard(&sample_leaderboard(), 0);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4], LeaderboardEntry::new(YOU, 0));
    }

    #[test]
    fn test_leaderboard_ties_preserve_input_order() {
        let rows = leaderboard(&sample_leaderboard(), 25_000);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Anonymous Benefactor",
                "The Whitmore Family Trust",
                "Literacy Forward Foundation",
                YOU,
                "Dr. Elena Marsh",
            ]
        );

        let sample = vec![
            LeaderboardEntry::new("First", 10),
            LeaderboardEntry::new("Second", 10),
            LeaderboardEntry::new("Third", 20),
        ];
        let names: Vec<String> = leaderboard(&sample, 10).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Third", "First", "Second", YOU]);
    }

    #[test]
    fn test_donation_history_rows_and_total() {
        let history = vec![
            test_record(5000, &["Room to Read"], Frequency::OneTime),
            test_record(
                12_000,
                &["Malala Fund", "UNICEF Education"],
                Frequency::AnnualForFiveYears,
            ),
        ];

        let view = donation_history(&history);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.total_impact, 17_000);
        assert_eq!(view.rows[0].date, "2025-03-01");
        assert_eq!(view.rows[0].organizations, "Room to Read");
        assert_eq!(view.rows[1].organizations, "Malala Fund, UNICEF Education");
        assert_eq!(view.rows[1].frequency, "Annual for 5 years");
    }

    #[test]
    fn test_donation_history_empty() {
        let view = donation_history(&[]);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_impact, 0);
    }
}

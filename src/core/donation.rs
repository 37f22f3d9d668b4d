//! Donation business logic - validates and records donations against a session.
//!
//! A donation is accepted only when it reaches the ticket threshold. Accepted donations
//! are appended to the session history, added to the running total and unlock the gala
//! ticket. Rejected donations leave the session exactly as it was.

use crate::{
    core::{catalog, session::UserSession},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use std::fmt;
use tracing::{info, warn};

/// Smallest amount the donation form accepts.
pub const MIN_AMOUNT: u64 = 100;
/// Largest amount the donation form accepts.
pub const MAX_AMOUNT: u64 = 1_000_000;
/// Cumulative amount that secures a gala ticket.
pub const TICKET_THRESHOLD: u64 = 5000;

/// How often a pledge repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frequency {
    /// Single payment
    #[default]
    OneTime,
    /// Twelve monthly payments
    MonthlyForOneYear,
    /// Five yearly payments
    AnnualForFiveYears,
}

impl Frequency {
    /// Label used on the form, in history and on receipts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneTime => "One-time",
            Self::MonthlyForOneYear => "Monthly for 1 year",
            Self::AnnualForFiveYears => "Annual for 5 years",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One accepted donation. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationRecord {
    /// Day the donation was accepted
    pub date: NaiveDate,
    /// Whole dollars
    pub amount: u64,
    /// Canonical organization names in the order the donor chose them
    pub organizations: Vec<String>,
    /// Pledge frequency
    pub frequency: Frequency,
}

/// Submits a donation dated today. See [`submit_donation_on`].
pub fn submit_donation<S: AsRef<str>>(
    session: &mut UserSession,
    amount: u64,
    organizations: &[S],
    frequency: Frequency,
) -> Result<DonationRecord> {
    let today = chrono::Local::now().date_naive();
    submit_donation_on(session, today, amount, organizations, frequency)
}

/// Validates a donation and, if accepted, records it on the session.
///
/// An empty organization list selects the catalog's default organizations. Amounts
/// outside [`MIN_AMOUNT`]..=[`MAX_AMOUNT`] are rejected with `AmountOutOfRange`, and
/// amounts under [`TICKET_THRESHOLD`] with `BelowMinimum`. Nothing on the session
/// changes unless the donation is accepted.
pub fn submit_donation_on<S: AsRef<str>>(
    session: &mut UserSession,
    date: NaiveDate,
    amount: u64,
    organizations: &[S],
    frequency: Frequency,
) -> Result<DonationRecord> {
    if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
        return Err(Error::AmountOutOfRange { amount });
    }

    let organizations = catalog::resolve_selection(organizations)?;

    if amount < TICKET_THRESHOLD {
        warn!(
            user_name = %session.user_name,
            amount, "Donation rejected: below ticket minimum"
        );
        return Err(Error::BelowMinimum {
            amount,
            minimum: TICKET_THRESHOLD,
        });
    }

    let record = DonationRecord {
        date,
        amount,
        organizations,
        frequency,
    };

    session.total_donations += amount;
    session.ticket_purchased = true;
    session.history.push(record.clone());

    info!(
        user_name = %session.user_name,
        amount,
        total = session.total_donations,
        "Donation accepted"
    );

    Ok(record)
}

/// Even share of a donation for each selected organization.
///
/// Display only; shares are not stored and need not add back up to `amount` after
/// rounding. A single organization gets no breakdown.
#[must_use]
pub fn split_donation<S: AsRef<str>>(amount: u64, organizations: &[S]) -> Vec<(String, f64)> {
    if organizations.len() <= 1 {
        return Vec::new();
    }

    // Amounts are at most MAX_AMOUNT, well inside f64's exact integer range.
    #[allow(clippy::cast_precision_loss)]
    let share = amount as f64 / organizations.len() as f64;

    organizations
        .iter()
        .map(|org| (org.as_ref().to_string(), share))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_accepted_donation_updates_session() {
        let mut session = test_session();

        let record =
            submit_donation_on(&mut session, test_date(), 5000, &["Room to Read"], Frequency::OneTime)
                .unwrap();

        assert_eq!(record.amount, 5000);
        assert_eq!(record.organizations, vec!["Room to Read"]);
        assert_eq!(record.date, test_date());
        assert_eq!(session.total_donations, 5000);
        assert!(session.ticket_purchased);
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.last_donation(), Some(&record));
    }

    #[test]
    fn test_below_minimum_leaves_session_unchanged() {
        let mut session = test_session();
        let before = session.clone();

        let result =
            submit_donation_on(&mut session, test_date(), 100, &["Malala Fund"], Frequency::OneTime);

        assert!(matches!(
            result,
            Err(Error::BelowMinimum {
                amount: 100,
                minimum: TICKET_THRESHOLD
            })
        ));
        assert_eq!(session, before);
        assert_eq!(session.total_donations, 0);
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_below_minimum_after_ticket_keeps_ticket() {
        let mut session = ticketed_session();
        let total = session.total_donations;

        let result =
            submit_donation_on(&mut session, test_date(), 4999, &["Malala Fund"], Frequency::OneTime);

        assert!(result.is_err());
        assert!(session.ticket_purchased);
        assert_eq!(session.total_donations, total);
    }

    #[test]
    fn test_amount_range_enforced() {
        let mut session = test_session();
        for amount in [0, 99, MAX_AMOUNT + 1] {
            let result = submit_donation_on(
                &mut session,
                test_date(),
                amount,
                &["Malala Fund"],
                Frequency::OneTime,
            );
            assert!(matches!(result, Err(Error::AmountOutOfRange { amount: a }) if a == amount));
        }
        assert!(session.history.is_empty());

        submit_donation_on(&mut session, test_date(), MAX_AMOUNT, &["Malala Fund"], Frequency::OneTime)
            .unwrap();
        assert_eq!(session.total_donations, MAX_AMOUNT);
    }

    #[test]
    fn test_unknown_organization_rejected() {
        let mut session = test_session();
        let result = submit_donation_on(
            &mut session,
            test_date(),
            5000,
            &["Imaginary Fund"],
            Frequency::OneTime,
        );
        assert!(matches!(result, Err(Error::UnknownOrganization { .. })));
        assert!(session.history.is_empty());
        assert!(!session.ticket_purchased);
    }

    #[test]
    fn test_empty_selection_uses_default_organizations() {
        let mut session = test_session();
        let record =
            submit_donation_on::<&str>(&mut session, test_date(), 6000, &[], Frequency::MonthlyForOneYear)
                .unwrap();
        assert_eq!(
            record.organizations,
            vec!["Room to Read", "Malala Fund", "Teach for All"]
        );
        assert_eq!(record.frequency, Frequency::MonthlyForOneYear);
    }

    #[test]
    fn test_total_tracks_sum_of_history() {
        let mut session = test_session();
        let amounts = [5000, 12_500, 7000, 250_000];

        for amount in amounts {
            submit_donation_on(&mut session, test_date(), amount, &["Teach for All"], Frequency::OneTime)
                .unwrap();
            let sum: u64 = session.history.iter().map(|r| r.amount).sum();
            assert_eq!(session.total_donations, sum);
            assert!(session.ticket_purchased);
        }
        assert_eq!(session.history.len(), amounts.len());
        assert_eq!(session.last_donation().unwrap().amount, 250_000);
    }

    #[test]
    fn test_ticket_never_reverts() {
        let mut session = test_session();
        assert!(!session.ticket_purchased);

        submit_donation_on(&mut session, test_date(), 5000, &["Room to Read"], Frequency::OneTime)
            .unwrap();
        assert!(session.ticket_purchased);

        for amount in [100, 4999, 5000, 0] {
            let _ = submit_donation_on(
                &mut session,
                test_date(),
                amount,
                &["Room to Read"],
                Frequency::OneTime,
            );
            assert!(session.ticket_purchased);
        }
    }

    #[test]
    fn test_split_donation_multiple() {
        let shares = split_donation(5000, &["Room to Read", "Malala Fund", "Teach for All"]);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].0, "Room to Read");
        assert!((shares[0].1 - 1666.666_666).abs() < 0.001);
        assert!(shares.iter().all(|(_, s)| *s == shares[0].1));
    }

    #[test]
    fn test_split_donation_single_is_empty() {
        assert!(split_donation(5000, &["Room to Read"]).is_empty());
        assert!(split_donation::<&str>(5000, &[]).is_empty());
    }

    #[test]
    fn test_frequency_labels() {
        assert_eq!(Frequency::OneTime.label(), "One-time");
        assert_eq!(Frequency::MonthlyForOneYear.to_string(), "Monthly for 1 year");
        assert_eq!(Frequency::AnnualForFiveYears.label(), "Annual for 5 years");
    }
}

//! Shared test utilities for `GalaDesk`.
//!
//! This module provides helpers for building sessions and donation records with
//! sensible defaults.

use crate::core::{
    donation::{self, DonationRecord, Frequency},
    session::{self, UserSession},
};
use chrono::NaiveDate;

/// Fixed date used wherever a test needs a donation date.
#[allow(clippy::unwrap_used)]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

/// A freshly logged-in session for "Ava" with no donations.
#[allow(clippy::unwrap_used)]
pub fn test_session() -> UserSession {
    session::login("Ava", "ava@x.com", None).unwrap()
}

/// A session that has already made one $5,000 donation to Room to Read.
#[allow(clippy::unwrap_used)]
pub fn ticketed_session() -> UserSession {
    let mut session = test_session();
    donation::submit_donation_on(
        &mut session,
        test_date(),
        5000,
        &["Room to Read"],
        Frequency::OneTime,
    )
    .unwrap();
    session
}

/// Builds a donation record dated [`test_date`] without going through a session.
pub fn test_record(amount: u64, organizations: &[&str], frequency: Frequency) -> DonationRecord {
    DonationRecord {
        date: test_date(),
        amount,
        organizations: organizations.iter().map(ToString::to_string).collect(),
        frequency,
    }
}

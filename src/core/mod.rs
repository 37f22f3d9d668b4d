//! Core business logic - framework-agnostic session, donation, receipt and report operations.
//!
//! Nothing in here knows about Discord. Every operation that changes state takes the
//! donor's [`session::UserSession`] explicitly.

/// Static organization catalog
pub mod catalog;
/// Donation validation, recording and split display
pub mod donation;
/// Receipt rendering to text and PDF
pub mod receipt;
/// Leaderboard and donation history views
pub mod report;
/// Login, RSVP and the per-user session store
pub mod session;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::{Error, Result};
    use donation::Frequency;

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|window| window == needle.as_bytes())
    }

    #[tokio::test]
    async fn test_ticket_purchase_end_to_end() -> Result<()> {
        let store = session::SessionStore::new();
        store.login("ava-id", "Ava", "ava@x.com", None).await?;

        let record = store
            .update("ava-id", |s| {
                donation::submit_donation(s, 5000, &["Room to Read"], Frequency::OneTime)
            })
            .await?;

        let session = store.current("ava-id").await.unwrap();
        assert_eq!(session.total_donations, 5000);
        assert!(session.ticket_purchased);
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.last_donation(), Some(&record));

        let receipt = receipt::render_receipt(&record, &session.user_name);
        let pdf = receipt.to_pdf()?;
        assert!(contains(&pdf, "Room to Read"));
        assert!(contains(&pdf, "$5,000"));
        assert!(receipt.file_name().starts_with("donation_receipt_"));

        let board = report::leaderboard(&report::sample_leaderboard(), session.total_donations);
        assert_eq!(board.last().unwrap().name, report::YOU);
        Ok(())
    }

    #[tokio::test]
    async fn test_below_minimum_end_to_end() -> Result<()> {
        let store = session::SessionStore::new();
        store.login("ava-id", "Ava", "ava@x.com", None).await?;

        let result = store
            .update("ava-id", |s| {
                donation::submit_donation(s, 100, &["Malala Fund"], Frequency::OneTime)
            })
            .await;
        assert!(matches!(result, Err(Error::BelowMinimum { .. })));

        let session = store.current("ava-id").await.unwrap();
        assert_eq!(session.total_donations, 0);
        assert!(session.history.is_empty());
        assert!(!session.ticket_purchased);
        assert!(session.last_donation().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_rsvp_end_to_end() -> Result<()> {
        let store = session::SessionStore::new();
        store.login("ava-id", "Ava", "ava@x.com", None).await?;

        let early = store
            .update("ava-id", |s| {
                session::submit_rsvp(s, session::MealChoice::FiletMignon, 3, None).cloned()
            })
            .await;
        assert!(matches!(early, Err(Error::TicketRequired)));

        store
            .update("ava-id", |s| {
                donation::submit_donation(s, 10_000, &["Teach for All"], Frequency::OneTime)
            })
            .await?;

        let first = store
            .update("ava-id", |s| {
                session::submit_rsvp(s, session::MealChoice::PanSearedSalmon, 7, Some("Aisle"))
                    .cloned()
            })
            .await?;
        let second = store
            .update("ava-id", |s| {
                session::submit_rsvp(s, session::MealChoice::FiletMignon, 9, None).cloned()
            })
            .await?;

        assert_eq!(first, second);
        let stored = store.current("ava-id").await.unwrap().rsvp.unwrap();
        assert_eq!(stored.meal, session::MealChoice::PanSearedSalmon);
        assert_eq!(stored.table, 7);
        Ok(())
    }
}

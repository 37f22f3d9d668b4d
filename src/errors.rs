//! Unified error type for `GalaDesk`.
//!
//! Input rejections (bad credentials, small donations, unknown organizations) are
//! recoverable: the bot layer turns them into a reply and the session is left as it was.

use crate::core::report::format_currency;
use thiserror::Error;

/// Every error the crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Login attempted with an empty name or email.
    #[error("Name and email are both required to log in")]
    InvalidCredentials,

    /// Donation accepted by the form but under the ticket threshold.
    #[error(
        "Minimum donation of {} required to secure your gala ticket (got {})",
        dollars(.minimum),
        dollars(.amount)
    )]
    BelowMinimum {
        /// Amount that was submitted
        amount: u64,
        /// Ticket threshold
        minimum: u64,
    },

    /// Donation outside the range the donation form accepts.
    #[error("Donation amount {} is outside the accepted range", dollars(.amount))]
    AmountOutOfRange {
        /// Amount that was submitted
        amount: u64,
    },

    /// Organization name not present in the catalog.
    #[error("Unknown organization: {name}")]
    UnknownOrganization {
        /// Name as typed by the user
        name: String,
    },

    /// No session exists for the caller.
    #[error("You need to log in first")]
    NotLoggedIn,

    /// Receipt requested before any donation was accepted.
    #[error("No donation has been made yet")]
    NoDonation,

    /// RSVP attempted before a ticket was secured.
    #[error("An RSVP is only available once your gala ticket is secured")]
    TicketRequired,

    /// Table number outside the ballroom's range.
    #[error("Table number {table} is not between 1 and 50")]
    InvalidTable {
        /// Table number as submitted
        table: u8,
    },

    /// Login field longer than the allowed maximum.
    #[error("The {field} you entered is too long (at most {max} characters)")]
    FieldTooLong {
        /// Which login field
        field: &'static str,
        /// Maximum length in characters
        max: usize,
    },

    /// The receipt PDF could not be produced.
    #[error("Receipt rendering failed: {message}")]
    Receipt {
        /// Underlying renderer message
        message: String,
    },

    /// The event configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A required environment variable is missing or invalid.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a reply into a string buffer failed.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Discord framework failure.
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl Error {
    /// Returns true for errors caused by user input, which leave the session untouched.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::BelowMinimum { .. }
                | Self::AmountOutOfRange { .. }
                | Self::UnknownOrganization { .. }
                | Self::NotLoggedIn
                | Self::NoDonation
                | Self::TicketRequired
                | Self::InvalidTable { .. }
                | Self::FieldTooLong { .. }
        )
    }
}

// thiserror hands field arguments over by reference.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn dollars(amount: &u64) -> String {
    format_currency(*amount)
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_minimum_message() {
        let err = Error::BelowMinimum {
            amount: 100,
            minimum: 5000,
        };
        assert_eq!(
            err.to_string(),
            "Minimum donation of $5,000 required to secure your gala ticket (got $100)"
        );
    }

    #[test]
    fn test_amount_out_of_range_message() {
        let err = Error::AmountOutOfRange { amount: 2_000_000 };
        assert_eq!(
            err.to_string(),
            "Donation amount $2,000,000 is outside the accepted range"
        );
    }

    #[test]
    fn test_user_errors_are_classified() {
        assert!(
            Error::FieldTooLong {
                field: "name",
                max: 100
            }
            .is_user_error()
        );
        assert!(Error::InvalidCredentials.is_user_error());
        assert!(Error::TicketRequired.is_user_error());
        assert!(
            !Error::Config {
                message: "bad".to_string()
            }
            .is_user_error()
        );
    }
}

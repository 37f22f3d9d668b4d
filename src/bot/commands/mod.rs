//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Login, logout and status commands
pub mod account;

/// Donation, receipt, history and leaderboard commands
pub mod donation;

/// Organization list, ticket and RSVP commands
pub mod event;

/// General utility commands
pub mod general;

// Export commands
pub use account::*;
pub use donation::*;
pub use event::*;
pub use general::*;

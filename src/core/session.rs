//! Session business logic - per-user login state, donation history and RSVP.
//!
//! Each donor gets exactly one [`UserSession`], created by [`login`] and handed by
//! `&mut` to every operation that changes it. The [`SessionStore`] keeps one session
//! per user key so that nothing leaks between donors.

use crate::{
    core::donation::{DonationRecord, TICKET_THRESHOLD},
    errors::{Error, Result},
};
use std::{collections::HashMap, fmt, sync::Arc};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Lowest table number in the ballroom.
pub const MIN_TABLE: u8 = 1;
/// Highest table number in the ballroom.
pub const MAX_TABLE: u8 = 50;

/// Dinner options offered on the RSVP form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealChoice {
    /// Beef main course
    FiletMignon,
    /// Fish main course
    PanSearedSalmon,
    /// Vegetarian main course
    WildMushroomRisotto,
    /// Vegan main course
    RoastedVegetableTagine,
}

impl MealChoice {
    /// Every meal, in the order the form lists them.
    pub const ALL: [Self; 4] = [
        Self::FiletMignon,
        Self::PanSearedSalmon,
        Self::WildMushroomRisotto,
        Self::RoastedVegetableTagine,
    ];

    /// Label shown to guests.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiletMignon => "Filet Mignon",
            Self::PanSearedSalmon => "Pan-Seared Salmon",
            Self::WildMushroomRisotto => "Wild Mushroom Risotto (vegetarian)",
            Self::RoastedVegetableTagine => "Roasted Vegetable Tagine (vegan)",
        }
    }
}

impl fmt::Display for MealChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A guest's event attendance preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rsvp {
    /// Chosen dinner
    pub meal: MealChoice,
    /// Requested table, within [`MIN_TABLE`]..=[`MAX_TABLE`]
    pub table: u8,
    /// Free-form requests; `None` when left blank
    pub special_requests: Option<String>,
}

/// Everything known about one logged-in donor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    /// Name given at login
    pub user_name: String,
    /// Email given at login
    pub email: String,
    /// Optional organization or company given at login
    pub affiliation: Option<String>,
    /// Always true for a live session
    pub logged_in: bool,
    /// Sum of every accepted donation
    pub total_donations: u64,
    /// Set once the total reaches the ticket threshold; never cleared
    pub ticket_purchased: bool,
    /// First RSVP submitted, if any
    pub rsvp: Option<Rsvp>,
    /// Accepted donations in submission order
    pub history: Vec<DonationRecord>,
}

impl UserSession {
    /// Most recent accepted donation, used for the receipt.
    #[must_use]
    pub fn last_donation(&self) -> Option<&DonationRecord> {
        self.history.last()
    }

    /// How much more the donor must give before a ticket is secured.
    #[must_use]
    pub const fn remaining_for_ticket(&self) -> u64 {
        if self.ticket_purchased {
            0
        } else {
            TICKET_THRESHOLD.saturating_sub(self.total_donations)
        }
    }
}

/// Longest name, email or affiliation accepted at login, in characters.
pub const MAX_FIELD_LENGTH: usize = 100;

/// Opens a session for a donor. Both name and email must be non-blank.
///
/// There is no password and no uniqueness check; this is an access gate only.
pub fn login(name: &str, email: &str, affiliation: Option<&str>) -> Result<UserSession> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(Error::InvalidCredentials);
    }
    let affiliation = affiliation.map(str::trim).filter(|a| !a.is_empty());

    let fields = [
        ("name", Some(name)),
        ("email", Some(email)),
        ("affiliation", affiliation),
    ];
    for (field, value) in fields {
        if value.is_some_and(|v| v.chars().count() > MAX_FIELD_LENGTH) {
            return Err(Error::FieldTooLong {
                field,
                max: MAX_FIELD_LENGTH,
            });
        }
    }

    Ok(UserSession {
        user_name: name.to_string(),
        email: email.to_string(),
        affiliation: affiliation.map(ToString::to_string),
        logged_in: true,
        total_donations: 0,
        ticket_purchased: false,
        rsvp: None,
        history: Vec::new(),
    })
}

/// Records the donor's RSVP. Only the first submission counts.
///
/// Returns the RSVP held by the session afterwards, which is the earlier one when an
/// RSVP already exists.
pub fn submit_rsvp<'a>(
    session: &'a mut UserSession,
    meal: MealChoice,
    table: u8,
    special_requests: Option<&str>,
) -> Result<&'a Rsvp> {
    if !session.ticket_purchased {
        return Err(Error::TicketRequired);
    }
    // A repeat submission is a no-op, whatever it contains.
    if session.rsvp.is_none() && !(MIN_TABLE..=MAX_TABLE).contains(&table) {
        return Err(Error::InvalidTable { table });
    }

    let rsvp = session.rsvp.get_or_insert_with(|| Rsvp {
        meal,
        table,
        special_requests: special_requests
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string),
    });
    Ok(rsvp)
}

/// In-memory map from user key to that user's session.
///
/// Cloning the store is cheap and yields a handle to the same map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, UserSession>>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs a user in, replacing any session already held under `user_key`.
    pub async fn login(
        &self,
        user_key: &str,
        name: &str,
        email: &str,
        affiliation: Option<&str>,
    ) -> Result<UserSession> {
        let session = login(name, email, affiliation)?;
        let mut sessions = self.sessions.write().await;
        if sessions
            .insert(user_key.to_string(), session.clone())
            .is_some()
        {
            debug!(user_key, "Replaced existing session");
        }
        info!(user_key, user_name = %session.user_name, "User logged in");
        Ok(session)
    }

    /// Snapshot of the user's session, if logged in.
    pub async fn current(&self, user_key: &str) -> Option<UserSession> {
        self.sessions.read().await.get(user_key).cloned()
    }

    /// Runs `f` against the user's session while holding the write lock.
    pub async fn update<T, F>(&self, user_key: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut UserSession) -> Result<T>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(user_key).ok_or(Error::NotLoggedIn)?;
        f(session)
    }

    /// Ends the user's session. Returns false if there was none.
    pub async fn logout(&self, user_key: &str) -> bool {
        let removed = self.sessions.write().await.remove(user_key).is_some();
        if removed {
            info!(user_key, "User logged out");
        }
        removed
    }
}

//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for `GalaDesk`, including all slash
//! commands, autocomplete handlers, and the shared bot context. Each Discord user gets
//! their own donation session, keyed by user ID.

/// Discord command implementations (account, donation, event, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{
    config::event::GalaConfig,
    core::session::SessionStore,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
/// This structure holds the session store and the event configuration.
pub struct BotData {
    /// One donation session per Discord user
    pub sessions: SessionStore,
    /// Event details shown in replies
    pub config: Arc<GalaConfig>,
}

impl BotData {
    /// Creates a new `BotData` instance with an empty session store.
    #[must_use]
    pub fn new(config: Arc<GalaConfig>) -> Self {
        Self {
            sessions: SessionStore::new(),
            config,
        }
    }
}

/// Replies with a user-facing message for input errors and passes anything else on.
///
/// Input errors leave the session untouched, so the user can simply try again.
pub async fn reply_or_raise(ctx: poise::Context<'_, BotData, Error>, err: Error) -> Result<()> {
    if err.is_user_error() {
        ctx.send(
            poise::CreateReply::default()
                .content(format!("❌ {err}"))
                .ephemeral(true),
        )
        .await?;
        Ok(())
    } else {
        Err(err)
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Builds the poise framework and runs the Discord client until it stops.
#[instrument(skip(token, config))]
pub async fn run_bot(token: String, config: Arc<GalaConfig>) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::login(),
                commands::logout(),
                commands::status(),
                commands::organizations(),
                commands::donate(),
                commands::receipt(),
                commands::history(),
                commands::leaderboard(),
                commands::ticket(),
                commands::rsvp(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            let config = Arc::clone(&config);
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(BotData::new(config))
            })
        })
        .build();

    // Slash commands need no privileged intents
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}

pub use commands::*;
pub use handlers::*;

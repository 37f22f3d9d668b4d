//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't touch any session and provide
//! basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{donation::TICKET_THRESHOLD, report::format_currency},
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let event = &ctx.data().config.event;
        let mut help_text = format!(
            "**{name}**\n\
            _{tagline}_\n\
            Next Event: {date} | {city}\n\n\
            You must log in and donate at least {minimum} to secure your ticket.\n\n\
            **Getting Started**\n\
            • `/login <name> <email> [affiliation]` - Request access to the gala.\n\
            • `/status` - Shows your total donations and ticket status.\n\
            • `/organizations` - Lists the organizations you can support.\n\n\
            **Donations**\n\
            • `/donate <amount> [organizations] [frequency]` - Makes a donation.\n\
            • `/receipt` - Sends a PDF receipt for your latest donation.\n\
            • `/history` - Shows your donation history and total impact.\n\
            • `/leaderboard` - Shows the top donors.\n\n\
            **Your Ticket**\n\
            • `/ticket` - Shows your gala ticket.\n\
            • `/rsvp <meal> <table> [special_requests]` - Confirms your attendance.\n\n\
            **Utility**\n\
            • `/logout` - Ends your session.\n\
            • `/ping` - Checks if the bot is responsive.\n\n\
            Contact: {contact}",
            name = event.name,
            tagline = event.tagline,
            date = event.date,
            city = event.city,
            minimum = format_currency(TICKET_THRESHOLD),
            contact = event.contact,
        );

        if !event.impact_goals.is_empty() {
            help_text.push_str("\n\n**🎯 Impact Goals**");
            for goal in &event.impact_goals {
                write!(&mut help_text, "\n• {goal}")?;
            }
        }

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

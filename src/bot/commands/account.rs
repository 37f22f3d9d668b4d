//! Account Discord commands - `login`, `logout` and `status`.
//!
//! Logging in creates the caller's donation session; everything else in the bot works
//! against that session.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, reply_or_raise},
        core::{donation::TICKET_THRESHOLD, report::format_currency},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    /// Requests access to the gala with your name and email.
    ///
    /// Logging in again replaces your current session, including its donations.
    #[poise::command(slash_command, prefix_command)]
    pub async fn login(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Full name"]
        #[max_length = 100]
        name: String,
        #[description = "Email address"]
        #[max_length = 100]
        email: String,
        #[description = "Organization or company"]
        #[max_length = 100]
        affiliation: Option<String>,
    ) -> Result<()> {
        let user_key = ctx.author().id.to_string();

        let session = match ctx
            .data()
            .sessions
            .login(&user_key, &name, &email, affiliation.as_deref())
            .await
        {
            Ok(session) => session,
            Err(e) => return reply_or_raise(ctx, e).await,
        };

        ctx.send(
            poise::CreateReply::default()
                .content(format!(
                    "✅ Welcome, {}! You now have access to make donations and secure your ticket.",
                    session.user_name
                ))
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    /// Ends your session. Your donations are not kept.
    #[poise::command(slash_command, prefix_command)]
    pub async fn logout(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_key = ctx.author().id.to_string();

        if ctx.data().sessions.logout(&user_key).await {
            ctx.say("👋 You have been logged out.").await?;
        } else {
            ctx.say("ℹ️ You were not logged in.").await?;
        }
        Ok(())
    }

    /// Shows your total donations and ticket status.
    #[poise::command(slash_command, prefix_command)]
    pub async fn status(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_key = ctx.author().id.to_string();

        let Some(session) = ctx.data().sessions.current(&user_key).await else {
            ctx.say(
                "🔐 **Login Required**\nYou must log in and make a substantial donation to \
                 secure your ticket to this exclusive gala. Use `/login` to get started.",
            )
            .await?;
            return Ok(());
        };

        let ticket_line = if session.ticket_purchased {
            "✅ Ticket Secured!".to_string()
        } else {
            format!(
                "⚠️ Minimum {} donation required for ticket ({} to go)",
                format_currency(TICKET_THRESHOLD),
                format_currency(session.remaining_for_ticket())
            )
        };

        let mut fields = vec![
            (
                "Total Donations".to_string(),
                format_currency(session.total_donations),
                true,
            ),
            ("Ticket".to_string(), ticket_line, true),
        ];
        if let Some(affiliation) = &session.affiliation {
            fields.push(("Affiliation".to_string(), affiliation.clone(), false));
        }
        if let Some(rsvp) = &session.rsvp {
            fields.push((
                "RSVP".to_string(),
                format!("{} at table {}", rsvp.meal, rsvp.table),
                false,
            ));
        }

        let status_embed = serenity::CreateEmbed::default()
            .title(format!("Welcome, {}!", session.user_name))
            .description(&ctx.data().config.event.name)
            .color(0x001F_4E79) // Navy
            .fields(fields);

        ctx.send(
            poise::CreateReply::default()
                .embed(status_embed)
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

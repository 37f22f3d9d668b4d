//! Event Discord commands - `organizations`, `ticket` and `rsvp`.
//!
//! Event copy comes from the gala configuration; the ticket and RSVP are only
//! available once the caller's donations have secured a ticket.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, reply_or_raise},
        core::{
            catalog,
            donation::TICKET_THRESHOLD,
            report::format_currency,
            session::{self, MealChoice},
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;
    use tracing::info;

    /// Meals offered as slash command choices.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum MealOption {
        #[name = "Filet Mignon"]
        FiletMignon,
        #[name = "Pan-Seared Salmon"]
        PanSearedSalmon,
        #[name = "Wild Mushroom Risotto (vegetarian)"]
        WildMushroomRisotto,
        #[name = "Roasted Vegetable Tagine (vegan)"]
        RoastedVegetableTagine,
    }

    impl From<MealOption> for MealChoice {
        fn from(option: MealOption) -> Self {
            match option {
                MealOption::FiletMignon => Self::FiletMignon,
                MealOption::PanSearedSalmon => Self::PanSearedSalmon,
                MealOption::WildMushroomRisotto => Self::WildMushroomRisotto,
                MealOption::RoastedVegetableTagine => Self::RoastedVegetableTagine,
            }
        }
    }

    /// Lists the organizations your donation can support.
    #[poise::command(slash_command, prefix_command)]
    pub async fn organizations(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let embed_fields: Vec<(String, String, bool)> = catalog::all_organizations()
            .iter()
            .map(|org| {
                (
                    format!("📚 {} - {}", org.name, org.region),
                    format!("**Focus**: {}\n{}", org.focus, org.description),
                    false,
                )
            })
            .collect();

        let list_embed = serenity::CreateEmbed::default()
            .title("🌍 Organizations")
            .description(format!(
                "Donations default to the first {} organizations when none are chosen.",
                catalog::DEFAULT_SELECTION
            ))
            .color(0x0058_65F2) // Discord purple
            .fields(embed_fields);

        ctx.send(poise::CreateReply::default().embed(list_embed))
            .await?;
        Ok(())
    }

    /// Shows your gala ticket once it is secured.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ticket(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_key = ctx.author().id.to_string();

        let Some(session) = ctx.data().sessions.current(&user_key).await else {
            return reply_or_raise(ctx, Error::NotLoggedIn).await;
        };

        if !session.ticket_purchased {
            ctx.say(format!(
                "⚠️ Minimum {} donation required for ticket. Use `/donate` to secure yours.",
                format_currency(TICKET_THRESHOLD)
            ))
            .await?;
            return Ok(());
        }

        let event = &ctx.data().config.event;
        let mut highlights = String::new();
        for highlight in &event.highlights {
            writeln!(&mut highlights, "• {highlight}")?;
        }

        let mut fields = vec![
            ("Event".to_string(), event.name.clone(), false),
            ("Date".to_string(), event.date.clone(), true),
            ("Venue".to_string(), event.venue.clone(), true),
            ("Dress Code".to_string(), event.dress_code.clone(), false),
            (
                "Your Contribution".to_string(),
                format_currency(session.total_donations),
                false,
            ),
        ];
        if !highlights.is_empty() {
            fields.push(("🎭 Event Highlights".to_string(), highlights, false));
        }
        let rsvp_line = session.rsvp.as_ref().map_or_else(
            || "Pending. Use `/rsvp` to confirm your attendance.".to_string(),
            |rsvp| format!("Confirmed: {} at table {}", rsvp.meal, rsvp.table),
        );
        fields.push(("RSVP".to_string(), rsvp_line, false));

        let ticket_embed = serenity::CreateEmbed::default()
            .title("🌟 VIP Gala Access Confirmed")
            .description(format!("Guest: {}", session.user_name))
            .color(0x0076_4BA2) // Purple
            .fields(fields);

        ctx.send(poise::CreateReply::default().embed(ticket_embed))
            .await?;
        Ok(())
    }

    /// Confirms your attendance. Only your first RSVP is recorded.
    #[poise::command(slash_command, prefix_command)]
    pub async fn rsvp(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Dinner choice"] meal: MealOption,
        #[description = "Preferred table (1-50)"]
        #[min = 1]
        #[max = 50]
        table: u8,
        #[description = "Dietary needs or other requests"]
        #[max_length = 500]
        special_requests: Option<String>,
    ) -> Result<()> {
        let user_key = ctx.author().id.to_string();

        let outcome = ctx
            .data()
            .sessions
            .update(&user_key, |s| {
                let already_confirmed = s.rsvp.is_some();
                let rsvp = session::submit_rsvp(
                    s,
                    meal.into(),
                    table,
                    special_requests.as_deref(),
                )?;
                Ok((rsvp.clone(), already_confirmed))
            })
            .await;

        let (rsvp, already_confirmed) = match outcome {
            Ok(result) => result,
            Err(e) => return reply_or_raise(ctx, e).await,
        };

        if already_confirmed {
            ctx.say(format!(
                "ℹ️ Your RSVP was already confirmed: {} at table {}.",
                rsvp.meal, rsvp.table
            ))
            .await?;
            return Ok(());
        }

        info!(%user_key, table = rsvp.table, meal = %rsvp.meal, "RSVP confirmed");

        let mut reply = format!(
            "✅ RSVP confirmed! {} at table {}.",
            rsvp.meal, rsvp.table
        );
        if let Some(requests) = &rsvp.special_requests {
            write!(&mut reply, "\nSpecial requests: {requests}")?;
        }
        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

//! Donation Discord commands - `donate`, `receipt`, `history` and `leaderboard`.
//!
//! This module forwards donation input to the core donation processor and renders the
//! resulting receipts and reports for Discord.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete, reply_or_raise},
        core::{
            catalog,
            donation::{self, Frequency},
            receipt::render_receipt,
            report::{self, YOU, format_currency, format_share},
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;
    use tracing::info;

    /// Most history rows shown in one reply.
    const HISTORY_LIMIT: usize = 20;

    /// Donation frequencies offered as slash command choices.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum FrequencyChoice {
        #[name = "One-time"]
        OneTime,
        #[name = "Monthly for 1 year"]
        MonthlyForOneYear,
        #[name = "Annual for 5 years"]
        AnnualForFiveYears,
    }

    impl From<FrequencyChoice> for Frequency {
        fn from(choice: FrequencyChoice) -> Self {
            match choice {
                FrequencyChoice::OneTime => Self::OneTime,
                FrequencyChoice::MonthlyForOneYear => Self::MonthlyForOneYear,
                FrequencyChoice::AnnualForFiveYears => Self::AnnualForFiveYears,
            }
        }
    }

    /// Makes a donation. $5,000 or more secures your gala ticket.
    ///
    /// Organizations are comma-separated; leaving them out supports the first three
    /// organizations in the catalog. Card details are never requested.
    #[poise::command(slash_command, prefix_command)]
    pub async fn donate(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Donation amount in dollars"]
        #[min = 100]
        #[max = 1000000]
        amount: u64,
        #[description = "Organizations to support, comma-separated"]
        #[autocomplete = "autocomplete::autocomplete_organizations"]
        organizations: Option<String>,
        #[description = "Donation type"] frequency: Option<FrequencyChoice>,
    ) -> Result<()> {
        let user_key = ctx.author().id.to_string();
        let selection = organizations
            .as_deref()
            .map(catalog::parse_selection)
            .unwrap_or_default();
        let frequency = frequency.map_or(Frequency::OneTime, Frequency::from);

        let outcome = ctx
            .data()
            .sessions
            .update(&user_key, |session| {
                let record = donation::submit_donation(
                    session,
                    amount,
                    selection.as_slice(),
                    frequency,
                )?;
                Ok((record, session.total_donations))
            })
            .await;

        let (record, total) = match outcome {
            Ok(accepted) => accepted,
            Err(e) => return reply_or_raise(ctx, e).await,
        };

        let mut description = String::new();
        writeln!(
            &mut description,
            "**{}** donated to support global education equality",
            format_currency(record.amount)
        )?;
        writeln!(&mut description, "Your exclusive gala ticket has been secured!")?;

        let mut fields = vec![
            (
                "Organizations".to_string(),
                record.organizations.join(", "),
                false,
            ),
            (
                "Donation Type".to_string(),
                record.frequency.label().to_string(),
                true,
            ),
            (
                "Your Contribution".to_string(),
                format_currency(total),
                true,
            ),
        ];

        let shares =
            donation::split_donation(record.amount, record.organizations.as_slice());
        if !shares.is_empty() {
            let mut distribution = String::new();
            for (org, share) in &shares {
                writeln!(&mut distribution, "• {org}: {}", format_share(*share))?;
            }
            fields.push(("Donation Distribution".to_string(), distribution, false));
        }

        let success_embed = serenity::CreateEmbed::default()
            .title("🎉 Donation Successful!")
            .description(description)
            .color(0x0038_A169) // Green
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(
                "Use /receipt to download your receipt",
            ));

        ctx.send(poise::CreateReply::default().embed(success_embed))
            .await?;
        Ok(())
    }

    /// Sends a PDF receipt for your most recent donation.
    #[poise::command(slash_command, prefix_command)]
    pub async fn receipt(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_key = ctx.author().id.to_string();

        let Some(session) = ctx.data().sessions.current(&user_key).await else {
            return reply_or_raise(ctx, Error::NotLoggedIn).await;
        };
        let Some(record) = session.last_donation() else {
            return reply_or_raise(ctx, Error::NoDonation).await;
        };

        let receipt = render_receipt(record, &session.user_name);
        let pdf = receipt.to_pdf()?;
        let file_name = receipt.file_name();
        info!(%user_key, %file_name, bytes = pdf.len(), "Receipt generated");

        ctx.send(
            poise::CreateReply::default()
                .content(format!("```\n{}\n```", receipt.to_text()))
                .attachment(serenity::CreateAttachment::bytes(pdf, file_name))
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    /// Shows your donation history and total impact.
    #[poise::command(slash_command, prefix_command)]
    pub async fn history(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_key = ctx.author().id.to_string();

        let Some(session) = ctx.data().sessions.current(&user_key).await else {
            return reply_or_raise(ctx, Error::NotLoggedIn).await;
        };

        let view = report::donation_history(&session.history);
        if view.rows.is_empty() {
            ctx.say("📊 No donations yet. Use `/donate` to make your impact!")
                .await?;
            return Ok(());
        }

        let skipped = view.rows.len().saturating_sub(HISTORY_LIMIT);
        let embed_fields: Vec<(String, String, bool)> = view
            .rows
            .iter()
            .skip(skipped)
            .map(|row| {
                (
                    format!("{} | {}", row.date, format_currency(row.amount)),
                    format!("{}\n_{}_", row.organizations, row.frequency),
                    false,
                )
            })
            .collect();

        let mut footer = format!(
            "Total Impact: {} for global education",
            format_currency(view.total_impact)
        );
        if skipped > 0 {
            write!(
                &mut footer,
                " | showing latest {HISTORY_LIMIT} of {}",
                view.rows.len()
            )?;
        }

        let history_embed = serenity::CreateEmbed::default()
            .title("📊 Your Impact History")
            .color(0x0042_99E1) // Blue
            .fields(embed_fields)
            .footer(serenity::CreateEmbedFooter::new(footer));

        ctx.send(poise::CreateReply::default().embed(history_embed))
            .await?;
        Ok(())
    }

    /// Shows the top donors, including you.
    #[poise::command(slash_command, prefix_command)]
    pub async fn leaderboard(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user_key = ctx.author().id.to_string();
        let your_total = ctx
            .data()
            .sessions
            .current(&user_key)
            .await
            .map_or(0, |session| session.total_donations);

        let rows = report::leaderboard(&report::sample_leaderboard(), your_total);

        let mut board = String::new();
        for (rank, row) in rows.iter().enumerate() {
            let medal = match rank {
                0 => "🥇",
                1 => "🥈",
                2 => "🥉",
                _ => "▫️",
            };
            if row.name == YOU {
                writeln!(
                    &mut board,
                    "{medal} **{}. {} | {}**",
                    rank + 1,
                    row.name,
                    format_currency(row.amount)
                )?;
            } else {
                writeln!(
                    &mut board,
                    "{medal} {}. {} | {}",
                    rank + 1,
                    row.name,
                    format_currency(row.amount)
                )?;
            }
        }

        let board_embed = serenity::CreateEmbed::default()
            .title("🏆 Donor Leaderboard")
            .description(board)
            .color(0x00F1_C40F); // Gold

        ctx.send(poise::CreateReply::default().embed(board_embed))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

//! Headless commands: the same submissions as the panel, one per invocation

use anyhow::{Result, anyhow};
use clap::{ArgGroup, Subcommand};
use tracing::info;

use crate::api::{SettingsClient, Transport, notice_for};
use crate::settings::SettingsGroup;
use crate::settings::forms::{
    ColorForm, ImageForm, PoemChannelForm, ReactionsForm, TicketForm,
};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the backend's current configuration as JSON
    Show,

    /// Set the channel poems are posted to
    PoemChannel {
        channel_id: String,
    },

    /// Set the embed color (#RRGGBB, 0xRRGGBB or RRGGBB)
    Color {
        color: String,
    },

    /// Toggle the embed image and set its URL
    #[command(group(ArgGroup::new("visibility").required(true).args(["show", "hide"])))]
    Image {
        #[arg(long)]
        show: bool,
        #[arg(long)]
        hide: bool,
        #[arg(long, default_value = "")]
        url: String,
    },

    /// Toggle automatic reactions and set the emoji list
    #[command(group(ArgGroup::new("toggle").required(true).args(["on", "off"])))]
    Reactions {
        #[arg(long)]
        on: bool,
        #[arg(long)]
        off: bool,
        /// Comma-separated emoji list; empty clears it
        #[arg(long, default_value = "")]
        emojis: String,
    },

    /// Set ticket system IDs; omitted IDs are cleared
    Ticket {
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        log_channel: String,
        #[arg(long, default_value = "")]
        admin_role: String,
    },
}

pub fn run<T: Transport>(command: Command, client: &SettingsClient<T>) -> Result<()> {
    let (group, result) = match command {
        Command::Show => {
            let document = client.fetch_config_document()?;
            println!("{}", serde_json::to_string_pretty(&document)?);
            return Ok(());
        }
        Command::PoemChannel { channel_id } => (
            SettingsGroup::PoemChannel,
            client.update_poem_channel(&PoemChannelForm { channel_id }),
        ),
        Command::Color { color } => (
            SettingsGroup::Color,
            client.update_color(&ColorForm::new(color)),
        ),
        Command::Image { show, url, .. } => (
            SettingsGroup::Image,
            client.update_image(&ImageForm {
                show_image: show,
                image_url: url,
            }),
        ),
        Command::Reactions { on, emojis, .. } => (
            SettingsGroup::Reactions,
            client.update_reactions(&ReactionsForm {
                auto_react: on,
                emojis,
            }),
        ),
        Command::Ticket {
            category,
            log_channel,
            admin_role,
        } => (
            SettingsGroup::Ticket,
            client.update_ticket_settings(&TicketForm {
                category_id: category,
                log_channel_id: log_channel,
                admin_role_id: admin_role,
            }),
        ),
    };

    let notice = notice_for(group, &result);
    if notice.is_error() {
        return Err(anyhow!(notice.message));
    }

    info!(%group, "headless update finished");
    println!("{}", notice.message);
    Ok(())
}

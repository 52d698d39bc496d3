use std::fmt;

use crate::constants::{api, messages};

/// Independently submitted settings groups, one endpoint each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsGroup {
    PoemChannel,
    Color,
    Image,
    Reactions,
    Ticket,
}

impl SettingsGroup {
    pub const ALL: [SettingsGroup; 5] = [
        SettingsGroup::PoemChannel,
        SettingsGroup::Color,
        SettingsGroup::Image,
        SettingsGroup::Reactions,
        SettingsGroup::Ticket,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            SettingsGroup::PoemChannel => api::POEM_CHANNEL,
            SettingsGroup::Color => api::COLOR,
            SettingsGroup::Image => api::IMAGE,
            SettingsGroup::Reactions => api::REACTIONS,
            SettingsGroup::Ticket => api::TICKET,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            SettingsGroup::PoemChannel => messages::POEM_CHANNEL_SAVED,
            SettingsGroup::Color => messages::COLOR_SAVED,
            SettingsGroup::Image => messages::IMAGE_SAVED,
            SettingsGroup::Reactions => messages::REACTIONS_SAVED,
            SettingsGroup::Ticket => messages::TICKET_SAVED,
        }
    }

    /// Section heading in the panel
    pub fn label(self) -> &'static str {
        match self {
            SettingsGroup::PoemChannel => "Poem Channel",
            SettingsGroup::Color => "Embed Color",
            SettingsGroup::Image => "Image",
            SettingsGroup::Reactions => "Auto Reactions",
            SettingsGroup::Ticket => "Ticket System",
        }
    }

    /// What the group is called inside failure messages
    pub fn noun(self) -> &'static str {
        match self {
            SettingsGroup::PoemChannel => "poem channel",
            SettingsGroup::Color => "color",
            SettingsGroup::Image => "image settings",
            SettingsGroup::Reactions => "reactions",
            SettingsGroup::Ticket => "ticket settings",
        }
    }
}

impl fmt::Display for SettingsGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            SettingsGroup::PoemChannel => "poem_channel",
            SettingsGroup::Color => "color",
            SettingsGroup::Image => "image",
            SettingsGroup::Reactions => "reactions",
            SettingsGroup::Ticket => "ticket",
        };
        f.write_str(key)
    }
}

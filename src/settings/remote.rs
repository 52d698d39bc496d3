//! Backend configuration document as served by `GET /api/config`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::defaults::remote;

/// Discord snowflake; the backend stores these as integers but older
/// documents carry them as strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiscordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for DiscordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscordId::Number(id) => write!(f, "{id}"),
            DiscordId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteTickets {
    pub category_id: Option<DiscordId>,
    pub log_channel_id: Option<DiscordId>,
    pub admin_role_id: Option<DiscordId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub poem_channel: Option<DiscordId>,
    pub embed_color: String,
    pub show_image: bool,
    pub image_url: String,
    pub auto_react: bool,
    pub react_emojis: Vec<String>,
    pub tickets: RemoteTickets,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            poem_channel: None,
            embed_color: remote::EMBED_COLOR.to_string(),
            show_image: remote::SHOW_IMAGE,
            image_url: String::new(),
            auto_react: false,
            react_emojis: remote::REACT_EMOJIS.iter().map(|e| e.to_string()).collect(),
            tickets: RemoteTickets::default(),
        }
    }
}

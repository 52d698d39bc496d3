//! View models for the settings panel
//!
//! Each form holds the raw text the user typed. `read()` applies the light
//! input cleanup and produces the request body for that group's endpoint.

use std::fmt;

use serde::Serialize;

use super::group::SettingsGroup;
use super::remote::RemoteConfig;
use crate::common::color::{CanonicalColor, normalize_color};
use crate::constants::messages;

/// Local input problem, caught before any request is made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: &'static str,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemChannelUpdate {
    pub channel_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorUpdate {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageUpdate {
    pub show_image: bool,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionsUpdate {
    pub auto_react: bool,
    pub react_emojis: Vec<String>,
}

/// Empty IDs go out as `null` so the backend clears them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketUpdate {
    pub category_id: Option<String>,
    pub log_channel_id: Option<String>,
    pub admin_role_id: Option<String>,
}

/// One request body for any group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingsUpdate {
    PoemChannel(PoemChannelUpdate),
    Color(ColorUpdate),
    Image(ImageUpdate),
    Reactions(ReactionsUpdate),
    Ticket(TicketUpdate),
}

impl SettingsUpdate {
    pub fn group(&self) -> SettingsGroup {
        match self {
            SettingsUpdate::PoemChannel(_) => SettingsGroup::PoemChannel,
            SettingsUpdate::Color(_) => SettingsGroup::Color,
            SettingsUpdate::Image(_) => SettingsGroup::Image,
            SettingsUpdate::Reactions(_) => SettingsGroup::Reactions,
            SettingsUpdate::Ticket(_) => SettingsGroup::Ticket,
        }
    }
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemChannelForm {
    pub channel_id: String,
}

impl PoemChannelForm {
    pub fn read(&self) -> Result<PoemChannelUpdate, ValidationError> {
        let channel_id = self.channel_id.trim();
        if channel_id.is_empty() {
            return Err(ValidationError {
                message: messages::EMPTY_CHANNEL_ID,
            });
        }
        Ok(PoemChannelUpdate {
            channel_id: channel_id.to_string(),
        })
    }
}

/// Text field and picker, kept in sync with each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorForm {
    /// What the user typed (or what the picker wrote back)
    pub text: String,
    picker: CanonicalColor,
}

impl ColorForm {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let picker = normalize_color(&text);
        Self { text, picker }
    }

    /// Text → picker: normalize whatever was typed
    pub fn on_text_input(&mut self) {
        self.picker = normalize_color(&self.text);
    }

    /// Picker → text: native pickers always emit valid #rrggbb, taken as-is
    pub fn on_picker_input(&mut self, value: String) {
        self.picker = normalize_color(&value);
        self.text = value;
    }

    /// Value driving the picker widget and the preview swatch
    pub fn picker(&self) -> &CanonicalColor {
        &self.picker
    }

    pub fn read(&self) -> ColorUpdate {
        ColorUpdate {
            color: self.text.trim().to_string(),
        }
    }
}

impl Default for ColorForm {
    fn default() -> Self {
        Self::new(crate::constants::defaults::remote::EMBED_COLOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageForm {
    pub show_image: bool,
    pub image_url: String,
}

impl ImageForm {
    pub fn read(&self) -> ImageUpdate {
        ImageUpdate {
            show_image: self.show_image,
            image_url: self.image_url.trim().to_string(),
        }
    }
}

impl Default for ImageForm {
    fn default() -> Self {
        Self {
            show_image: crate::constants::defaults::remote::SHOW_IMAGE,
            image_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionsForm {
    pub auto_react: bool,
    /// Comma-separated emoji list
    pub emojis: String,
}

impl ReactionsForm {
    pub fn read(&self) -> ReactionsUpdate {
        ReactionsUpdate {
            auto_react: self.auto_react,
            react_emojis: parse_emoji_list(&self.emojis),
        }
    }
}

impl Default for ReactionsForm {
    fn default() -> Self {
        Self {
            auto_react: false,
            emojis: crate::constants::defaults::remote::REACT_EMOJIS.join(", "),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketForm {
    pub category_id: String,
    pub log_channel_id: String,
    pub admin_role_id: String,
}

impl TicketForm {
    pub fn read(&self) -> TicketUpdate {
        TicketUpdate {
            category_id: optional_id(&self.category_id),
            log_channel_id: optional_id(&self.log_channel_id),
            admin_role_id: optional_id(&self.admin_role_id),
        }
    }
}

/// All panel forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForms {
    pub poem_channel: PoemChannelForm,
    pub color: ColorForm,
    pub image: ImageForm,
    pub reactions: ReactionsForm,
    pub ticket: TicketForm,
}

impl SettingsForms {
    /// Prefill from the backend's current configuration
    pub fn from_remote(remote: &RemoteConfig) -> Self {
        Self {
            poem_channel: PoemChannelForm {
                channel_id: id_text(&remote.poem_channel),
            },
            color: ColorForm::new(remote.embed_color.clone()),
            image: ImageForm {
                show_image: remote.show_image,
                image_url: remote.image_url.clone(),
            },
            reactions: ReactionsForm {
                auto_react: remote.auto_react,
                emojis: remote.react_emojis.join(", "),
            },
            ticket: TicketForm {
                category_id: id_text(&remote.tickets.category_id),
                log_channel_id: id_text(&remote.tickets.log_channel_id),
                admin_role_id: id_text(&remote.tickets.admin_role_id),
            },
        }
    }

    /// Read one group's form into its request body
    pub fn read(&self, group: SettingsGroup) -> Result<SettingsUpdate, ValidationError> {
        Ok(match group {
            SettingsGroup::PoemChannel => SettingsUpdate::PoemChannel(self.poem_channel.read()?),
            SettingsGroup::Color => SettingsUpdate::Color(self.color.read()),
            SettingsGroup::Image => SettingsUpdate::Image(self.image.read()),
            SettingsGroup::Reactions => SettingsUpdate::Reactions(self.reactions.read()),
            SettingsGroup::Ticket => SettingsUpdate::Ticket(self.ticket.read()),
        })
    }
}

/// Split a comma-separated emoji list, dropping blank entries
pub fn parse_emoji_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|emoji| !emoji.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trimmed ID, or `None` when nothing was entered
pub fn optional_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn id_text<T: ToString>(id: &Option<T>) -> String {
    id.as_ref().map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_emoji_list_parsing() {
        assert_eq!(parse_emoji_list("😀, 😂 ,,🔥"), vec!["😀", "😂", "🔥"]);
        assert!(parse_emoji_list("").is_empty());
        assert!(parse_emoji_list(" , ,").is_empty());
        assert_eq!(parse_emoji_list("❤️"), vec!["❤️"]);
    }

    #[test]
    fn test_poem_channel_requires_id() {
        let form = PoemChannelForm {
            channel_id: "   ".to_string(),
        };
        let err = form.read().unwrap_err();
        assert_eq!(err.message, "⚠️ Please enter a channel ID");

        let form = PoemChannelForm {
            channel_id: " 1460760802138128567 ".to_string(),
        };
        assert_eq!(form.read().unwrap().channel_id, "1460760802138128567");
    }

    #[test]
    fn test_ticket_empty_fields_serialize_as_null() {
        let form = TicketForm {
            category_id: "123".to_string(),
            log_channel_id: "   ".to_string(),
            admin_role_id: String::new(),
        };
        let body = serde_json::to_value(SettingsUpdate::Ticket(form.read())).unwrap();
        assert_eq!(
            body,
            json!({"category_id": "123", "log_channel_id": null, "admin_role_id": null})
        );
    }

    #[test]
    fn test_request_bodies_match_wire_shapes() {
        let forms = SettingsForms {
            poem_channel: PoemChannelForm {
                channel_id: "42".to_string(),
            },
            color: ColorForm::new(" 0xAABBCC "),
            image: ImageForm {
                show_image: false,
                image_url: " https://example.com/a.png ".to_string(),
            },
            reactions: ReactionsForm {
                auto_react: true,
                emojis: "😀, 🔥".to_string(),
            },
            ticket: TicketForm::default(),
        };

        let body = |group| serde_json::to_value(forms.read(group).unwrap()).unwrap();

        assert_eq!(body(SettingsGroup::PoemChannel), json!({"channel_id": "42"}));
        assert_eq!(body(SettingsGroup::Color), json!({"color": "0xAABBCC"}));
        assert_eq!(
            body(SettingsGroup::Image),
            json!({"show_image": false, "image_url": "https://example.com/a.png"})
        );
        assert_eq!(
            body(SettingsGroup::Reactions),
            json!({"auto_react": true, "react_emojis": ["😀", "🔥"]})
        );
        assert_eq!(
            body(SettingsGroup::Ticket),
            json!({"category_id": null, "log_channel_id": null, "admin_role_id": null})
        );
    }

    #[test]
    fn test_update_reports_its_group() {
        let forms = SettingsForms {
            poem_channel: PoemChannelForm {
                channel_id: "1".to_string(),
            },
            ..Default::default()
        };
        for group in SettingsGroup::ALL {
            assert_eq!(forms.read(group).unwrap().group(), group);
        }
    }

    #[test]
    fn test_color_sync_text_to_picker() {
        let mut form = ColorForm::new("0x9B59B6");
        assert_eq!(form.picker().as_str(), "#9b59b6");

        form.text = "zz".to_string();
        form.on_text_input();
        assert_eq!(form.picker().as_str(), "#9B59B6");
        // Text field keeps what the user typed
        assert_eq!(form.text, "zz");

        form.text = "112233".to_string();
        form.on_text_input();
        assert_eq!(form.picker().as_str(), "#112233");
    }

    #[test]
    fn test_color_sync_picker_to_text() {
        let mut form = ColorForm::new("");
        form.on_picker_input("#0a0b0c".to_string());
        assert_eq!(form.text, "#0a0b0c");
        assert_eq!(form.picker().as_str(), "#0a0b0c");
        assert_eq!(form.read().color, "#0a0b0c");
    }
}

//! Settings submission operations
//!
//! Every group follows the same path: read the form, validate locally, post
//! the body to the group's endpoint, then turn the reply into a [`Notice`].

use std::fmt;

use anyhow::Context;
use tracing::{error, info, warn};

use super::transport::Transport;
use crate::constants::{api, messages};
use crate::notify::Notice;
use crate::settings::forms::{
    ColorForm, ImageForm, PoemChannelForm, ReactionsForm, TicketForm, ValidationError,
};
use crate::settings::{RemoteConfig, SettingsGroup, SettingsUpdate};

#[derive(Debug)]
pub enum SubmitError {
    /// Caught locally; nothing was sent
    Validation(ValidationError),
    /// Backend answered `success: false`
    Rejected(Option<String>),
    /// Connection, timeout or decoding failure
    Transport(anyhow::Error),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(err) => write!(f, "{err}"),
            SubmitError::Rejected(message) => {
                f.write_str(message.as_deref().unwrap_or(messages::UNKNOWN_REJECTION))
            }
            SubmitError::Transport(err) => write!(f, "{err:#}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        SubmitError::Validation(err)
    }
}

pub type SubmitResult = Result<(), SubmitError>;

/// Notice shown for the outcome of one submission
pub fn notice_for(group: SettingsGroup, result: &SubmitResult) -> Notice {
    match result {
        Ok(()) => Notice::success(group.success_message()),
        Err(SubmitError::Validation(err)) => Notice::error(err.message),
        Err(err @ SubmitError::Rejected(_)) => {
            Notice::error(format!("{} {err}", messages::FAILURE_PREFIX))
        }
        Err(err @ SubmitError::Transport(_)) => Notice::error(format!(
            "{} Error updating {}: {err}",
            messages::FAILURE_PREFIX,
            group.noun()
        )),
    }
}

pub struct SettingsClient<T> {
    transport: T,
}

impl<T: Transport> SettingsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn update_poem_channel(&self, form: &PoemChannelForm) -> SubmitResult {
        self.submit(&SettingsUpdate::PoemChannel(form.read()?))
    }

    pub fn update_color(&self, form: &ColorForm) -> SubmitResult {
        self.submit(&SettingsUpdate::Color(form.read()))
    }

    pub fn update_image(&self, form: &ImageForm) -> SubmitResult {
        self.submit(&SettingsUpdate::Image(form.read()))
    }

    pub fn update_reactions(&self, form: &ReactionsForm) -> SubmitResult {
        self.submit(&SettingsUpdate::Reactions(form.read()))
    }

    pub fn update_ticket_settings(&self, form: &TicketForm) -> SubmitResult {
        self.submit(&SettingsUpdate::Ticket(form.read()))
    }

    /// Post an already-read update to its group's endpoint
    pub fn submit(&self, update: &SettingsUpdate) -> SubmitResult {
        let group = update.group();

        let reply = serde_json::to_value(update)
            .context("Failed to encode request body")
            .and_then(|body| self.transport.post_json(group.endpoint(), &body));

        match reply {
            Ok(reply) if reply.success => {
                info!(%group, "settings saved");
                Ok(())
            }
            Ok(reply) => {
                warn!(%group, message = ?reply.message, "backend rejected settings");
                Err(SubmitError::Rejected(reply.message))
            }
            Err(err) => {
                error!(%group, error = ?err, "failed to submit settings");
                Err(SubmitError::Transport(err))
            }
        }
    }

    /// Configuration document exactly as the backend serves it
    pub fn fetch_config_document(&self) -> anyhow::Result<serde_json::Value> {
        self.transport.get_json(api::CONFIG)
    }

    /// Current configuration, used to prefill the forms
    pub fn fetch_config(&self) -> anyhow::Result<RemoteConfig> {
        let value = self.fetch_config_document()?;
        serde_json::from_value(value).context("Unexpected configuration document")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::transport::ApiReply;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Records every call and answers with a fixed reply
    pub(crate) struct FakeTransport {
        pub calls: Mutex<Vec<(String, Value)>>,
        reply: Result<ApiReply, String>,
        config: Value,
    }

    impl FakeTransport {
        pub fn replying(success: bool, message: Option<&str>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply: Ok(ApiReply {
                    success,
                    message: message.map(str::to_string),
                }),
                config: json!({}),
            }
        }

        pub fn failing(description: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply: Err(description.to_string()),
                config: json!({}),
            }
        }

        pub fn with_config(mut self, config: Value) -> Self {
            self.config = config;
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl Transport for FakeTransport {
        fn post_json(&self, path: &str, body: &Value) -> anyhow::Result<ApiReply> {
            self.calls
                .lock()
                .unwrap()
                .push((path.to_string(), body.clone()));
            self.reply.clone().map_err(|description| anyhow::anyhow!(description))
        }

        fn get_json(&self, path: &str) -> anyhow::Result<Value> {
            self.calls.lock().unwrap().push((path.to_string(), Value::Null));
            self.reply
                .as_ref()
                .map(|_| self.config.clone())
                .map_err(|description| anyhow::anyhow!(description.clone()))
        }
    }

    #[test]
    fn test_empty_channel_id_never_hits_the_network() {
        let client = SettingsClient::new(FakeTransport::replying(true, None));
        let result = client.update_poem_channel(&PoemChannelForm {
            channel_id: "  ".to_string(),
        });

        assert!(matches!(result, Err(SubmitError::Validation(_))));
        assert_eq!(client.transport.call_count(), 0);

        let notice = notice_for(SettingsGroup::PoemChannel, &result);
        assert!(notice.is_error());
        assert_eq!(notice.message, "⚠️ Please enter a channel ID");
    }

    #[test]
    fn test_success_reply_shows_success_notice() {
        let client = SettingsClient::new(FakeTransport::replying(true, Some("Poem channel updated!")));
        let result = client.update_poem_channel(&PoemChannelForm {
            channel_id: " 123 ".to_string(),
        });

        assert!(result.is_ok());
        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[("/api/config/poem_channel".to_string(), json!({"channel_id": "123"}))]
        );

        let notice = notice_for(SettingsGroup::PoemChannel, &result);
        assert!(!notice.is_error());
        assert_eq!(notice.message, "✅ Poem channel updated successfully!");
    }

    #[test]
    fn test_rejected_reply_shows_server_message() {
        let client = SettingsClient::new(FakeTransport::replying(false, Some("X")));
        let result = client.update_color(&ColorForm::new("#123456"));

        assert!(matches!(result, Err(SubmitError::Rejected(Some(ref m))) if m == "X"));
        let notice = notice_for(SettingsGroup::Color, &result);
        assert!(notice.is_error());
        assert!(notice.message.contains('X'));
        assert_eq!(notice.message, "❌ X");
    }

    #[test]
    fn test_rejection_without_message() {
        let client = SettingsClient::new(FakeTransport::replying(false, None));
        let result = client.update_image(&ImageForm::default());
        let notice = notice_for(SettingsGroup::Image, &result);
        assert_eq!(notice.message, "❌ Unknown error");
    }

    #[test]
    fn test_transport_failure_includes_description() {
        let client = SettingsClient::new(FakeTransport::failing("connection refused"));
        let result = client.update_reactions(&ReactionsForm::default());

        assert!(matches!(result, Err(SubmitError::Transport(_))));
        let notice = notice_for(SettingsGroup::Reactions, &result);
        assert!(notice.is_error());
        assert_eq!(
            notice.message,
            "❌ Error updating reactions: connection refused"
        );
    }

    #[test]
    fn test_ticket_settings_send_nulls() {
        let client = SettingsClient::new(FakeTransport::replying(true, None));
        let form = TicketForm {
            category_id: "10".to_string(),
            ..Default::default()
        };
        client.update_ticket_settings(&form).unwrap();

        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(calls[0].0, "/api/config/ticket");
        assert_eq!(
            calls[0].1,
            json!({"category_id": "10", "log_channel_id": null, "admin_role_id": null})
        );
    }

    #[test]
    fn test_resubmitting_sends_the_same_record() {
        let client = SettingsClient::new(FakeTransport::replying(true, None));
        let form = ReactionsForm {
            auto_react: true,
            emojis: "😀, 😂 ,,🔥".to_string(),
        };
        client.update_reactions(&form).unwrap();
        client.update_reactions(&form).unwrap();

        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(
            calls[0].1,
            json!({"auto_react": true, "react_emojis": ["😀", "😂", "🔥"]})
        );
    }

    #[test]
    fn test_fetch_config_decodes_document() {
        let client = SettingsClient::new(
            FakeTransport::replying(true, None)
                .with_config(json!({"embed_color": "#112233", "poem_channel": 7})),
        );
        let config = client.fetch_config().unwrap();
        assert_eq!(config.embed_color, "#112233");
        assert_eq!(client.transport.calls.lock().unwrap()[0].0, "/api/config");
    }

    #[test]
    fn test_config_document_keeps_unknown_fields() {
        let document = json!({"tickets": {"panel_message": 7}, "extra": true});
        let client = SettingsClient::new(
            FakeTransport::replying(true, None).with_config(document.clone()),
        );
        assert_eq!(client.fetch_config_document().unwrap(), document);
    }

    #[test]
    fn test_fetch_config_rejects_wrong_shape() {
        let client = SettingsClient::new(
            FakeTransport::replying(true, None).with_config(json!({"show_image": "yes"})),
        );
        assert!(client.fetch_config().is_err());
    }
}

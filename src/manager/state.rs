use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use eframe::egui;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info, warn};

use crate::api::{SettingsClient, SubmitResult, Transport, notice_for};
use crate::constants::gui::*;
use crate::constants::messages;
use crate::notify::{Notice, ToastSlot};
use crate::settings::{RemoteConfig, SettingsForms, SettingsGroup};

/// Lifecycle of the last request sent for one settings group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Pending,
    Succeeded(DateTime<Local>),
    Failed(DateTime<Local>),
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    pub fn color(&self) -> Option<egui::Color32> {
        match self {
            RequestStatus::Idle => None,
            RequestStatus::Pending => Some(COLOR_PENDING),
            RequestStatus::Succeeded(_) => Some(COLOR_SUCCESS),
            RequestStatus::Failed(_) => Some(COLOR_ERROR),
        }
    }

    pub fn label(&self) -> String {
        match self {
            RequestStatus::Idle => String::new(),
            RequestStatus::Pending => "Saving...".to_string(),
            RequestStatus::Succeeded(at) => format!("Saved at {}", at.format("%H:%M:%S")),
            RequestStatus::Failed(at) => format!("Failed at {}", at.format("%H:%M:%S")),
        }
    }
}

enum Completion {
    Submitted {
        group: SettingsGroup,
        result: SubmitResult,
    },
    Loaded(Result<RemoteConfig>),
}

/// Everything the panel shows, independent of how it is drawn
pub struct PanelState<T> {
    pub forms: SettingsForms,
    pub toast: ToastSlot,
    statuses: HashMap<SettingsGroup, RequestStatus>,
    loading: bool,

    client: Arc<SettingsClient<T>>,
    runtime: Runtime,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl<T: Transport + 'static> PanelState<T> {
    pub fn new(client: SettingsClient<T>, toast_duration: Duration) -> Result<Self> {
        // Blocking HTTP calls run on the runtime's blocking pool, off the UI thread
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build Tokio runtime for requests")?;
        let (completions_tx, completions_rx) = unbounded_channel();

        Ok(Self {
            forms: SettingsForms::default(),
            toast: ToastSlot::new(toast_duration),
            statuses: SettingsGroup::ALL
                .into_iter()
                .map(|group| (group, RequestStatus::Idle))
                .collect(),
            loading: false,
            client: Arc::new(client),
            runtime,
            completions_tx,
            completions_rx,
        })
    }

    pub fn status(&self, group: SettingsGroup) -> RequestStatus {
        self.statuses
            .get(&group)
            .copied()
            .unwrap_or(RequestStatus::Idle)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while any request is in flight
    pub fn is_busy(&self) -> bool {
        self.loading || self.statuses.values().any(RequestStatus::is_pending)
    }

    pub fn notify(&mut self, notice: Notice) {
        self.toast.present(notice, Instant::now());
    }

    /// Fetch the backend's current configuration to prefill the forms
    pub fn load_remote(&mut self) {
        if self.loading {
            return;
        }
        self.loading = true;

        let client = Arc::clone(&self.client);
        let tx = self.completions_tx.clone();
        self.runtime.spawn_blocking(move || {
            let _ = tx.send(Completion::Loaded(client.fetch_config()));
        });
    }

    /// Validate and send one group's form in the background
    pub fn submit(&mut self, group: SettingsGroup) {
        if self.status(group).is_pending() {
            debug!(%group, "submission already in flight");
            return;
        }

        let update = match self.forms.read(group) {
            Ok(update) => update,
            Err(err) => {
                // Validation failures never reach the network
                let result: SubmitResult = Err(err.into());
                self.notify(notice_for(group, &result));
                return;
            }
        };

        info!(%group, "submitting settings");
        self.statuses.insert(group, RequestStatus::Pending);

        let client = Arc::clone(&self.client);
        let tx = self.completions_tx.clone();
        self.runtime.spawn_blocking(move || {
            let result = client.submit(&update);
            let _ = tx.send(Completion::Submitted { group, result });
        });
    }

    /// Apply finished requests and expire the toast. Call once per frame.
    pub fn poll(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            match completion {
                Completion::Submitted { group, result } => {
                    let now = Local::now();
                    let status = match result {
                        Ok(()) => RequestStatus::Succeeded(now),
                        Err(_) => RequestStatus::Failed(now),
                    };
                    self.statuses.insert(group, status);
                    self.notify(notice_for(group, &result));
                }
                Completion::Loaded(result) => {
                    self.loading = false;
                    self.apply_remote(result);
                }
            }
        }

        self.toast.tick(Instant::now());
    }

    fn apply_remote(&mut self, result: Result<RemoteConfig>) {
        match result {
            // Keep anything the user typed while the fetch was running
            Ok(remote) if self.forms == SettingsForms::default() => {
                info!("Loaded current settings from backend");
                self.forms = SettingsForms::from_remote(&remote);
            }
            Ok(_) => {
                info!("Forms were edited during load, keeping local values");
            }
            Err(err) => {
                warn!(error = ?err, "Failed to load current settings");
                self.notify(Notice::error(format!(
                    "{} Could not load current settings: {err:#}",
                    messages::FAILURE_PREFIX
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::FakeTransport;
    use crate::notify::NoticeKind;
    use serde_json::json;

    fn state(transport: FakeTransport) -> PanelState<FakeTransport> {
        PanelState::new(SettingsClient::new(transport), Duration::from_secs(3)).unwrap()
    }

    /// Poll until nothing is in flight
    fn settle(state: &mut PanelState<FakeTransport>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            state.poll();
            if !state.is_busy() {
                return;
            }
            assert!(Instant::now() < deadline, "requests did not finish");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_empty_channel_shows_warning_without_request() {
        let mut state = state(FakeTransport::replying(true, None));
        state.submit(SettingsGroup::PoemChannel);

        assert!(!state.is_busy());
        assert_eq!(state.status(SettingsGroup::PoemChannel), RequestStatus::Idle);
        let toast = state.toast.current().unwrap();
        assert_eq!(toast.notice.kind, NoticeKind::Error);
        assert_eq!(toast.notice.message, "⚠️ Please enter a channel ID");
    }

    #[test]
    fn test_successful_submit_updates_status_and_toast() {
        let mut state = state(FakeTransport::replying(true, None));
        state.forms.color.text = "0xAABBCC".to_string();
        state.submit(SettingsGroup::Color);
        assert!(state.status(SettingsGroup::Color).is_pending());

        settle(&mut state);

        assert!(matches!(
            state.status(SettingsGroup::Color),
            RequestStatus::Succeeded(_)
        ));
        let toast = state.toast.current().unwrap();
        assert_eq!(toast.notice.kind, NoticeKind::Success);
        assert_eq!(toast.notice.message, "🎨 Color updated successfully!");
    }

    #[test]
    fn test_rejected_submit_marks_failure() {
        let mut state = state(FakeTransport::replying(false, Some("Failed to save")));
        state.submit(SettingsGroup::Ticket);
        settle(&mut state);

        assert!(matches!(
            state.status(SettingsGroup::Ticket),
            RequestStatus::Failed(_)
        ));
        assert_eq!(
            state.toast.current().unwrap().notice.message,
            "❌ Failed to save"
        );
    }

    #[test]
    fn test_groups_submit_independently() {
        let mut state = state(FakeTransport::replying(true, None));
        state.submit(SettingsGroup::Image);
        state.submit(SettingsGroup::Reactions);
        settle(&mut state);

        assert!(matches!(state.status(SettingsGroup::Image), RequestStatus::Succeeded(_)));
        assert!(matches!(
            state.status(SettingsGroup::Reactions),
            RequestStatus::Succeeded(_)
        ));
        assert_eq!(state.status(SettingsGroup::Color), RequestStatus::Idle);
    }

    #[test]
    fn test_load_remote_prefills_pristine_forms() {
        let mut state = state(
            FakeTransport::replying(true, None)
                .with_config(json!({"poem_channel": 5, "embed_color": "#010203"})),
        );
        state.load_remote();
        settle(&mut state);

        assert_eq!(state.forms.poem_channel.channel_id, "5");
        assert_eq!(state.forms.color.picker().as_str(), "#010203");
        assert!(state.toast.current().is_none());
    }

    #[test]
    fn test_load_remote_keeps_local_edits() {
        let mut state = state(
            FakeTransport::replying(true, None).with_config(json!({"poem_channel": 5})),
        );
        state.forms.poem_channel.channel_id = "typed".to_string();
        state.load_remote();
        settle(&mut state);

        assert_eq!(state.forms.poem_channel.channel_id, "typed");
    }

    #[test]
    fn test_load_failure_shows_error_toast() {
        let mut state = state(FakeTransport::failing("connection refused"));
        state.load_remote();
        settle(&mut state);

        let toast = state.toast.current().unwrap();
        assert!(toast.notice.is_error());
        assert!(toast.notice.message.contains("connection refused"));
    }

    #[test]
    fn test_request_status_labels() {
        assert_eq!(RequestStatus::Idle.label(), "");
        assert!(RequestStatus::Idle.color().is_none());
        assert_eq!(RequestStatus::Pending.label(), "Saving...");
        assert!(RequestStatus::Succeeded(Local::now()).label().starts_with("Saved at "));
        assert!(RequestStatus::Failed(Local::now()).label().starts_with("Failed at "));
    }
}

//! Settings panel implemented with egui/eframe

use std::time::Duration;

use anyhow::{Result, anyhow};
use eframe::{NativeOptions, egui};
use tracing::{error, info};

use super::components;
use super::components::header::HeaderAction;
use super::state::PanelState;
use crate::api::{HttpTransport, SettingsClient};
use crate::config::ClientConfig;
use crate::constants::gui::*;
use crate::constants::messages;
use crate::notify::Notice;
use crate::settings::SettingsGroup;

struct SettingsPanelApp {
    state: PanelState<HttpTransport>,
    base_url: String,
}

impl SettingsPanelApp {
    fn new(config: &ClientConfig) -> Result<Self> {
        info!("Initializing settings panel");

        let transport = HttpTransport::from_config(config);
        let base_url = transport.base_url().to_string();
        let mut state = PanelState::new(
            SettingsClient::new(transport),
            Duration::from_millis(config.toast_duration_ms),
        )?;
        state.load_remote();

        Ok(Self { state, base_url })
    }
}

impl eframe::App for SettingsPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;
        state.poll();

        // Every group saves separately; Ctrl/Cmd+S only explains that
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::S)) {
            state.notify(Notice::error(messages::NO_SAVE_ALL));
        }

        egui::TopBottomPanel::top("global_header").show(ctx, |ui| {
            if components::header::render(ui, &self.base_url, state.is_loading())
                == HeaderAction::Reload
            {
                state.load_remote();
            }
        });

        let mut requested = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let status = |group| state.status(group);
                let (channel, color, image, reactions, ticket) = (
                    status(SettingsGroup::PoemChannel),
                    status(SettingsGroup::Color),
                    status(SettingsGroup::Image),
                    status(SettingsGroup::Reactions),
                    status(SettingsGroup::Ticket),
                );
                let forms = &mut state.forms;

                if components::channel_settings::ui(ui, &mut forms.poem_channel, channel) {
                    requested.push(SettingsGroup::PoemChannel);
                }
                if components::appearance_settings::color_ui(ui, &mut forms.color, color) {
                    requested.push(SettingsGroup::Color);
                }
                if components::appearance_settings::image_ui(ui, &mut forms.image, image) {
                    requested.push(SettingsGroup::Image);
                }
                if components::reaction_settings::ui(ui, &mut forms.reactions, reactions) {
                    requested.push(SettingsGroup::Reactions);
                }
                if components::ticket_settings::ui(ui, &mut forms.ticket, ticket) {
                    requested.push(SettingsGroup::Ticket);
                }
            });
        });

        for group in requested {
            state.submit(group);
        }

        components::toast::render(ctx, &mut state.toast);

        // Keep polling while something can still change without user input
        if state.is_busy() || state.toast.is_visible() {
            ctx.request_repaint_after(Duration::from_millis(POLL_INTERVAL_MS));
        }
    }
}

pub fn run_gui(config: ClientConfig) -> Result<()> {
    let app = SettingsPanelApp::new(&config)?;

    let viewport_builder = egui::ViewportBuilder::default()
        .with_inner_size([config.window_width as f32, config.window_height as f32])
        .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
        .with_title("Bot Settings Panel - v".to_string() + env!("CARGO_PKG_VERSION"));

    let options = NativeOptions {
        viewport: viewport_builder,
        ..Default::default()
    };

    eframe::run_native(
        &format!("Bot Settings Panel - v{}", env!("CARGO_PKG_VERSION")),
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|err| {
        error!(error = %err, "Settings panel exited with an error");
        anyhow!("Failed to launch settings panel: {err}")
    })
}

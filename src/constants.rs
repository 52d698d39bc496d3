//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Backend configuration endpoints (relative to the configured base URL)
pub mod api {
    /// Current configuration document (GET)
    pub const CONFIG: &str = "/api/config";

    pub const POEM_CHANNEL: &str = "/api/config/poem_channel";
    pub const COLOR: &str = "/api/config/color";
    pub const IMAGE: &str = "/api/config/image";
    pub const REACTIONS: &str = "/api/config/reactions";
    pub const TICKET: &str = "/api/config/ticket";

    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Embed color handling
pub mod color {
    /// Fallback for empty or malformed color input
    pub const DEFAULT: &str = "#9B59B6";

    /// RGB bytes of [`DEFAULT`], used when a canonical value cannot be parsed
    pub const DEFAULT_RGB: [u8; 3] = [0x9B, 0x59, 0xB6];
}

/// User-facing notice texts
pub mod messages {
    pub const EMPTY_CHANNEL_ID: &str = "⚠️ Please enter a channel ID";

    /// Shown when Ctrl/Cmd+S is pressed, since every group saves separately
    pub const NO_SAVE_ALL: &str = "💾 Use individual save buttons to update settings";

    /// Prefix for every failure notice
    pub const FAILURE_PREFIX: &str = "❌";

    /// Used when the backend rejects a request without saying why
    pub const UNKNOWN_REJECTION: &str = "Unknown error";

    pub const POEM_CHANNEL_SAVED: &str = "✅ Poem channel updated successfully!";
    pub const COLOR_SAVED: &str = "🎨 Color updated successfully!";
    pub const IMAGE_SAVED: &str = "🖼️ Image settings updated successfully!";
    pub const REACTIONS_SAVED: &str = "❤️ Reactions updated successfully!";
    pub const TICKET_SAVED: &str = "🎫 Ticket settings updated successfully!";
}

/// Toast notification behavior
pub mod toast {
    /// How long a toast stays visible
    pub const DURATION_MS: u64 = 3000;

    pub const ICON_SUCCESS: &str = "✔";
    pub const ICON_ERROR: &str = "⚠";
}

/// GUI-specific constants (egui settings panel)
pub mod gui {
    use egui;

    /// Panel window dimensions
    pub const WINDOW_MIN_WIDTH: f32 = 480.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 560.0;

    /// Layout spacing
    pub const SECTION_SPACING: f32 = 15.0;
    pub const ITEM_SPACING: f32 = 8.0;

    /// Text field widths
    pub const ID_FIELD_WIDTH: f32 = 220.0;
    pub const WIDE_FIELD_WIDTH: f32 = 320.0;
    pub const COLOR_FIELD_WIDTH: f32 = 100.0;

    /// Color preview swatch edge length
    pub const SWATCH_SIZE: f32 = 22.0;

    /// Alert level colors
    pub const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(100, 200, 100); // Green - saved
    pub const COLOR_PENDING: egui::Color32 = egui::Color32::from_rgb(255, 200, 0); // Yellow - in flight
    pub const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 100, 100); // Red - failed

    /// Toast frame fills
    pub const TOAST_SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
    pub const TOAST_ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(183, 28, 28);

    /// Distance of the toast from the bottom-right corner
    pub const TOAST_MARGIN: f32 = 16.0;

    /// Repaint interval while a request is in flight or a toast is showing
    pub const POLL_INTERVAL_MS: u64 = 100;
}

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "bot-settings-panel";

    /// Configuration filename
    pub const FILENAME: &str = "config.json";
}

/// Default configuration values
/// These are used when creating a new config or when fields are missing
pub mod defaults {
    /// Client settings
    pub mod client {
        /// Backend the dashboard is served from
        pub const BASE_URL: &str = "http://localhost:5000";

        /// Per-request timeout in seconds
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;
    }

    /// Panel window settings
    pub mod manager {
        /// Default window width in pixels
        pub const WINDOW_WIDTH: u16 = 640;

        /// Default window height in pixels
        pub const WINDOW_HEIGHT: u16 = 720;
    }

    /// Values the backend assumes for settings it has never stored
    pub mod remote {
        pub const EMBED_COLOR: &str = "0x9B59B6";
        pub const SHOW_IMAGE: bool = true;
        pub const REACT_EMOJIS: &[&str] = &["❤️", "🔥"];
    }
}

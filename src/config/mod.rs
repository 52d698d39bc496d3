//! Configuration management
//!
//! Handles the panel's own settings (backend URL, timeouts, window size)
//! with JSON persistence under the user's config directory.

pub mod client;

pub use client::ClientConfig;

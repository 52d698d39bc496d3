//! Configuration API client
//!
//! `transport` talks HTTP; `client` holds the per-group submission
//! operations and maps their outcomes to notices.

pub mod client;
pub mod transport;

pub use client::{SettingsClient, SubmitResult, notice_for};
pub use transport::{HttpTransport, Transport};

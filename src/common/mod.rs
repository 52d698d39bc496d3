//! Shared helpers used by both the panel and the headless commands

pub mod color;

//! Embed color normalization and conversions
//!
//! Accepts the formats users paste into the color field:
//! - Hex with '#' prefix (#RRGGBB), digits not checked
//! - Discord/Python style 0x prefix (0xRRGGBB)
//! - Bare 6-digit hex (RRGGBB)
//!
//! Everything is canonicalized to a '#'-prefixed string before it reaches the
//! picker widget or the preview swatch.

use std::fmt;

use crate::constants::color::{DEFAULT, DEFAULT_RGB};

/// Color string guaranteed to start with '#'
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalColor(String);

impl CanonicalColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// RGB bytes for the picker and swatch.
    ///
    /// '#'-prefixed input is not validated by [`normalize_color`], so this can
    /// fail even on a canonical value.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        rgb_from_hex(&self.0)
    }

    /// Like [`Self::rgb`] but falls back to the default embed color
    pub fn rgb_or_default(&self) -> [u8; 3] {
        self.rgb().unwrap_or(DEFAULT_RGB)
    }
}

impl Default for CanonicalColor {
    fn default() -> Self {
        Self(DEFAULT.to_string())
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalize raw color input.
///
/// Input is trimmed and lowercased first. Anything then starting with '#' is
/// returned without checking its digits. The uppercase default is the one
/// result that is not a fixed point: it lowercases on a second pass.
pub fn normalize_color(raw: &str) -> CanonicalColor {
    let lower = raw.trim().to_lowercase();
    if lower.is_empty() {
        return CanonicalColor::default();
    }

    if lower.starts_with('#') {
        return CanonicalColor(lower);
    }

    if let Some(digits) = lower.strip_prefix("0x") {
        return CanonicalColor(format!("#{digits}"));
    }

    if lower.len() == 6 && lower.bytes().all(|b| b.is_ascii_hexdigit()) {
        return CanonicalColor(format!("#{lower}"));
    }

    CanonicalColor::default()
}

/// Parse #RRGGBB (prefix optional) into RGB bytes
pub fn rgb_from_hex(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Format RGB bytes the way a native color input reports them (#rrggbb)
pub fn hex_from_rgb([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

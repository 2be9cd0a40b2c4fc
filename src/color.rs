use image::Rgb;

use crate::error::{Error, Result};

/// Default letterbox border color
pub const DEFAULT_FILL: Rgb<u8> = Rgb([0, 0, 0]);

/// Parse a `#RRGGBB` hex string into an RGB fill color
pub fn parse_hex_color(s: &str) -> Result<Rgb<u8>> {
    let invalid = |reason: &str| Error::InvalidColor {
        value: s.to_string(),
        reason: reason.to_string(),
    };

    let hex = s.strip_prefix('#').ok_or_else(|| invalid("missing leading '#'"))?;
    if hex.len() != 6 {
        return Err(invalid("expected exactly 6 hex digits"));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid("contains non-hex characters"));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| invalid(&e.to_string()))
    };

    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

use crate::{Error, Result};

/// Splits a `#rrggbb` color into its channel bytes.
pub(crate) fn parse_hex(color: &str) -> Result<(u8, u8, u8)> {
    let digits = color
        .strip_prefix('#')
        .ok_or_else(|| Error::InvalidColor(color.to_string()))?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(Error::InvalidColor(color.to_string()));
    }
    let channel = |slice: &str| {
        u8::from_str_radix(slice, 16).map_err(|_| Error::InvalidColor(color.to_string()))
    };
    Ok((
        channel(&digits[0..2])?,
        channel(&digits[2..4])?,
        channel(&digits[4..6])?,
    ))
}

/// Darkens a `#rrggbb` color by `percent`, flooring each channel.
pub fn darken(color: &str, percent: f32) -> Result<String> {
    let (r, g, b) = parse_hex(color)?;
    let factor = 1.0 - percent.clamp(0.0, 100.0) / 100.0;
    let scale = |channel: u8| (channel as f32 * factor).floor().max(0.0) as u8;
    Ok(format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b)))
}

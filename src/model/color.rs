//! Per-element colours
//!
//! OFF records carry colours as trailing channel tokens. A tuple is read in
//! one of two encodings, chosen once per tuple: if any token contains a
//! decimal point all channels are taken as floats in `[0, 1]`, otherwise all
//! channels are integers in `[0, 255]` and are divided by 255. A tuple that
//! mixes both spellings follows that single decision; no clamping is applied.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full opacity, used when widening RGB to RGBA
pub const OPAQUE: f64 = 1.0;

/// An RGB or RGBA colour with channels nominally in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// Red, green, blue
    Rgb([f64; 3]),
    /// Red, green, blue, alpha
    Rgba([f64; 4]),
}

impl Color {
    /// Opaque colour from three channels
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb([r, g, b])
    }

    /// Colour with explicit alpha
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color::Rgba([r, g, b, a])
    }

    /// Parse the trailing colour tokens of an OFF record
    ///
    /// Returns `Ok(None)` when there are no tokens, and also for one- or
    /// two-token tuples (colour-map indices in some OFF dialects, which have
    /// no palette here). Tuples longer than four keep the first four channels.
    ///
    /// # Example
    ///
    /// ```
    /// use offmodel::Color;
    ///
    /// let c = Color::from_tokens(&["255", "0", "0"]).unwrap();
    /// assert_eq!(c, Some(Color::rgb(1.0, 0.0, 0.0)));
    ///
    /// let c = Color::from_tokens(&["1.0", "0", "0"]).unwrap();
    /// assert_eq!(c, Some(Color::rgb(1.0, 0.0, 0.0)));
    /// ```
    pub fn from_tokens(tokens: &[&str]) -> Result<Option<Self>> {
        match tokens.len() {
            0 => return Ok(None),
            1 | 2 => {
                log::warn!(
                    "ignoring {}-channel colour {:?}: colour-map indices are not supported",
                    tokens.len(),
                    tokens
                );
                return Ok(None);
            }
            3 | 4 => {}
            n => log::warn!("colour has {} channels, keeping the first 4", n),
        }

        let is_float = tokens.iter().any(|t| t.contains('.'));
        let mut channels = [OPAQUE; 4];
        let used = tokens.len().min(4);
        for (slot, token) in channels.iter_mut().zip(&tokens[..used]) {
            *slot = if is_float {
                token.parse::<f64>().map_err(|_| {
                    Error::ParseError(format!("invalid colour channel '{}': expected float", token))
                })?
            } else {
                let value = token.parse::<i64>().map_err(|_| {
                    Error::ParseError(format!(
                        "invalid colour channel '{}': expected integer 0-255",
                        token
                    ))
                })?;
                value as f64 / 255.0
            };
        }

        Ok(Some(if used == 3 {
            Color::Rgb([channels[0], channels[1], channels[2]])
        } else {
            Color::Rgba(channels)
        }))
    }

    /// Parse `#rrggbb` or `#rrggbbaa`
    ///
    /// Anything else yields `None`, matching how unset display attributes are
    /// treated.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| -> Option<f64> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|v| v as f64 / 255.0)
        };
        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        let a = if digits.len() == 8 { channel(6)? } else { OPAQUE };
        Some(Color::Rgba([r, g, b, a]))
    }

    /// Channels as a slice of length 3 or 4
    pub fn channels(&self) -> &[f64] {
        match self {
            Color::Rgb(c) => c,
            Color::Rgba(c) => c,
        }
    }

    /// Red, green, blue
    pub fn rgb_channels(&self) -> [f64; 3] {
        let c = self.channels();
        [c[0], c[1], c[2]]
    }

    /// Alpha channel, full opacity for RGB colours
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgb(_) => OPAQUE,
            Color::Rgba(c) => c[3],
        }
    }

    /// Widen to four channels, appending full opacity to RGB
    pub fn to_rgba(&self) -> [f64; 4] {
        let [r, g, b] = self.rgb_channels();
        [r, g, b, self.alpha()]
    }

    /// Whether the colour is fully transparent (alpha exactly 0)
    pub fn is_transparent(&self) -> bool {
        self.alpha() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_sniff_divides_by_255() {
        let c = Color::from_tokens(&["1", "0", "0"]).unwrap().unwrap();
        assert_eq!(c, Color::Rgb([1.0 / 255.0, 0.0, 0.0]));
    }

    #[test]
    fn test_float_sniff_keeps_values() {
        let c = Color::from_tokens(&["1.0", "0", "0"]).unwrap().unwrap();
        assert_eq!(c, Color::Rgb([1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_mixed_tuple_follows_single_sniff() {
        let c = Color::from_tokens(&["0.5", "255", "0"]).unwrap().unwrap();
        assert_eq!(c, Color::Rgb([0.5, 255.0, 0.0]));
    }

    #[test]
    fn test_four_channels_is_rgba() {
        let c = Color::from_tokens(&["255", "255", "255", "0"]).unwrap().unwrap();
        assert_eq!(c, Color::Rgba([1.0, 1.0, 1.0, 0.0]));
        assert!(c.is_transparent());
    }

    #[test]
    fn test_short_and_long_tuples() {
        assert_eq!(Color::from_tokens(&[]).unwrap(), None);
        assert_eq!(Color::from_tokens(&["3"]).unwrap(), None);
        let c = Color::from_tokens(&["0.1", "0.2", "0.3", "0.4", "0.5"]).unwrap().unwrap();
        assert_eq!(c, Color::Rgba([0.1, 0.2, 0.3, 0.4]));
    }

    #[test]
    fn test_bad_channel_is_parse_error() {
        let err = Color::from_tokens(&["red", "0", "0"]).unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
        assert!(Color::from_tokens(&["0.5", "x", "0"]).is_err());
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::Rgba([1.0, 0.0, 0.0, 1.0])));
        assert_eq!(
            Color::from_hex("#00ff0000"),
            Some(Color::Rgba([0.0, 1.0, 0.0, 0.0]))
        );
        assert_eq!(Color::from_hex("ff0000"), None);
        assert_eq!(Color::from_hex("#ff00"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_to_rgba_widens() {
        assert_eq!(Color::rgb(0.1, 0.2, 0.3).to_rgba(), [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(Color::rgba(0.1, 0.2, 0.3, 0.5).to_rgba(), [0.1, 0.2, 0.3, 0.5]);
    }
}

//! Colour tokens used by symbology bands.

use eframe::egui::Color32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A CSS colour token: hex (`#rgb`, `#rrggbb`, ...), a named colour such as
/// `crimson`, or a functional form such as `rgb(215, 25, 28)`.
///
/// The token text is kept verbatim so markup output matches the configured
/// value, while `rgba` is what painters draw with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colour {
    token: String,
    rgba: Color32,
}

impl Colour {
    /// Parses a CSS colour token. Returns `None` if it is not a colour.
    pub fn parse(token: &str) -> Option<Self> {
        let trimmed = token.trim();
        let [r, g, b, a] = csscolorparser::parse(trimmed).ok()?.to_rgba8();
        Some(Self {
            token: trimmed.to_string(),
            rgba: Color32::from_rgba_unmultiplied(r, g, b, a),
        })
    }

    /// Builds a colour from RGB components; the token is the `#rrggbb` form.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            token: format!("#{:02x}{:02x}{:02x}", r, g, b),
            rgba: Color32::from_rgb(r, g, b),
        }
    }

    /// The token as configured.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn rgba(&self) -> Color32 {
        self.rgba
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Colour::parse(&token)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid colour token {:?}", token)))
    }
}

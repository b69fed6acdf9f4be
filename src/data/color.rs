use serde::{Deserialize, Serialize};

/// sRGB color with components in [0, 1]
///
/// Serialized as a `#rrggbb` hex string so presets can use the same
/// notation as design palettes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid hex color '{}'", value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Named palette entries
pub mod palette {
    use super::Color;

    pub const DEEP_EMERALD: Color = Color::rgb8(0x06, 0x4e, 0x3b);
    pub const EMERALD: Color = Color::rgb8(0x04, 0x78, 0x57);
    pub const GOLD: Color = Color::rgb8(0xd4, 0xaf, 0x37);
    pub const ANTIQUE_GOLD: Color = Color::rgb8(0xaa, 0x8c, 0x2c);
    pub const WHITE: Color = Color::rgb8(0xff, 0xff, 0xff);
    pub const GIFT_EMERALD: Color = Color::rgb8(0x06, 0x5f, 0x46);
    pub const STAR_GOLD: Color = Color::rgb8(0xff, 0xd7, 0x00);
}

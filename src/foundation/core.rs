use crate::foundation::error::{BloomError, BloomResult};

pub use kurbo::{Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Straight (non-premultiplied) opaque RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const PINK: Self = Self::new(255, 192, 203);
    pub const YELLOW: Self = Self::new(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive, surrounding whitespace ignored).
    pub fn from_hex(s: &str) -> BloomResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(BloomError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> BloomResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| BloomError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&digits[0..2])?,
            g: hex_byte(&digits[2..4])?,
            b: hex_byte(&digits[4..6])?,
        })
    }

    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn opaque(self) -> Rgba8Premul {
        Rgba8Premul {
            r: self.r,
            g: self.g,
            b: self.b,
            a: 255,
        }
    }
}

/// Convert a hexadecimal color string to an `(r, g, b)` tuple.
pub fn hex_to_rgb(hex: &str) -> BloomResult<(u8, u8, u8)> {
    Rgb8::from_hex(hex).map(Rgb8::to_tuple)
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

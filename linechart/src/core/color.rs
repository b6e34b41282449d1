//! Colors used by series styles. Channels are stored as floats in the range
//! 0..1, and can be created from the common 0..255 integer model.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0., 1.),
            g: g.clamp(0., 1.),
            b: b.clamp(0., 1.),
            a: a.clamp(0., 1.),
        }
    }

    /// Create a color from 0..255 channels and a 0..1 alpha.
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::new(r as f64 / 255., g as f64 / 255., b as f64 / 255., a)
    }

    pub fn white() -> Self {
        Color::new(1., 1., 1., 1.)
    }

    pub fn black() -> Self {
        Color::new(0., 0., 0., 1.)
    }

    /// The light blue that new series start with.
    pub fn series_default() -> Self {
        Color::from_rgb8(140, 234, 255, 1.)
    }

    pub fn with_alpha(&self, a: f64) -> Self {
        Color::new(self.r, self.g, self.b, a)
    }

    /// \returns the color for a known name, such as "red", or None.
    pub fn from_name(name: &str) -> Option<Self> {
        let rgb = match name.to_lowercase().as_str() {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "red" => (255, 0, 0),
            "green" => (0, 128, 0),
            "blue" => (0, 0, 255),
            "yellow" => (255, 255, 0),
            "cyan" => (0, 255, 255),
            "magenta" => (255, 0, 255),
            "orange" => (255, 165, 0),
            "purple" => (128, 0, 128),
            "gray" | "grey" => (128, 128, 128),
            "pink" => (255, 192, 203),
            "brown" => (165, 42, 42),
            "olive" => (128, 128, 0),
            "steelblue" => (70, 130, 180),
            _ => {
                return None;
            }
        };
        Some(Color::from_rgb8(rgb.0, rgb.1, rgb.2, 1.))
    }

    /// Parse a color in the format "#rrggbb" or "#rrggbbaa".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }
        // from_str_radix accepts a leading '+', so check the digits first.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel =
            |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if hex.len() == 8 {
            channel(6)? as f64 / 255.
        } else {
            1.
        };
        Some(Color::from_rgb8(r, g, b, a))
    }

    /// Parse a hex color or a color name.
    pub fn parse(s: &str) -> Option<Self> {
        if s.starts_with('#') {
            return Color::from_hex(s);
        }
        Color::from_name(s)
    }

    /// Like `from_name`, but falls back to black for unknown names.
    pub fn fast(name: &str) -> Self {
        Color::from_name(name).unwrap_or_else(Color::black)
    }

    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let conv = |x: f64| (x * 255.).round() as u8;
        (conv(self.r), conv(self.g), conv(self.b))
    }

    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.a < 1. {
            let a = (self.a * 255.).round() as u8;
            return format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a);
        }
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

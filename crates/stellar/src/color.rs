use serde::{Deserialize, Serialize};

/// RGB color for a celestial body, serialized for rendering clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl StarColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as a hex string (e.g., "#FFDD82")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (e.g., "#FFDD82" or "FFDD82")
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.strip_prefix('#').unwrap_or(s);

        // Length is in bytes; reject non-ASCII before slicing
        if s.len() != 6 || !s.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }

        let r = u8::from_str_radix(&s[0..2], 16)
            .map_err(|_| format!("Invalid red component: {}", &s[0..2]))?;
        let g = u8::from_str_radix(&s[2..4], 16)
            .map_err(|_| format!("Invalid green component: {}", &s[2..4]))?;
        let b = u8::from_str_radix(&s[4..6], 16)
            .map_err(|_| format!("Invalid blue component: {}", &s[4..6]))?;

        Ok(Self { r, g, b })
    }
}

// Simple color struct, created from an unsigned 32 representing RRGGBB00
// Alpha is kept separate since the canvas takes it as a float per draw call

use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // Deep navy used for the trail wash
    pub const NAVY: Color = Color::from_u32(0x0a0e_2700);
    // Gold accent for particles and links
    pub const GOLD: Color = Color::from_u32(0xd4af_3700);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;

        Color { r, g, b }
    }

    /// CSS style string, e.g. `rgba(212, 175, 55, 0.5)`.
    pub fn css_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color { r, g, b }
    }
}

use serde::{Deserialize, Serialize};

/// Linear RGB in [0, 1]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub fn from_hex(hex: u32) -> Self {
        Self([
            ((hex >> 16) & 0xFF) as f32 / 255.0,
            ((hex >> 8) & 0xFF) as f32 / 255.0,
            (hex & 0xFF) as f32 / 255.0,
        ])
    }

    pub fn to_hex(self) -> u32 {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u32);
        (r << 16) | (g << 8) | b
    }
}

// Engine palette
pub const BLUE_D: Rgb = Rgb([41.0 / 255.0, 171.0 / 255.0, 202.0 / 255.0]);
pub const BLUE_E: Rgb = Rgb([28.0 / 255.0, 117.0 / 255.0, 138.0 / 255.0]);
pub const WHITE: Rgb = Rgb([1.0, 1.0, 1.0]);
pub const GREY: Rgb = Rgb([136.0 / 255.0, 136.0 / 255.0, 136.0 / 255.0]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white() {
        assert_eq!(WHITE.0, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_from_hex_matches_palette() {
        assert_eq!(Rgb::from_hex(0x1C758A), BLUE_E);
    }

    #[test]
    fn test_hex_survives_conversion() {
        assert_eq!(BLUE_E.to_hex(), 0x1C758A);
        assert_eq!(BLUE_D.to_hex(), 0x29ABCA);
    }
}

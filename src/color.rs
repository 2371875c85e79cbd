// src/color.rs

//! Color model for the terminal: a default sentinel, the 16 named palette
//! entries, and 24-bit truecolor.
//!
//! 256-color SGR selectors resolve to an RGB triple here at parse time;
//! the palette index itself is never stored in a cell.

/// Foreground or background color of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's default foreground/background.
    #[default]
    Default,
    /// One of the 16 named palette entries (0-7 normal, 8-15 bright).
    Indexed(u8),
    /// 24-bit truecolor.
    Rgb(u8, u8, u8),
}

/// Concrete background assumed when reverse video has to move a default
/// background into the foreground slot.
pub const SCREEN_BACKGROUND: Color = Color::Rgb(0, 0, 0);

/// RGB values of the 16 named palette entries (xterm defaults).
pub const NAMED_PALETTE: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

impl Color {
    /// Resolves a 256-color palette index to a concrete RGB color.
    ///
    /// 0-15 are the named entries, 16-231 the 6x6x6 color cube, and
    /// 232-255 the 24-step grayscale ramp.
    #[must_use]
    pub fn from_palette_index(idx: u8) -> Color {
        match idx {
            0..=15 => {
                let (r, g, b) = NAMED_PALETTE[idx as usize];
                Color::Rgb(r, g, b)
            }
            16..=231 => {
                let n = u16::from(idx) - 16;
                let level = |v: u16| -> u8 { ((v % 6) * 255 / 5) as u8 };
                Color::Rgb(level(n / 36), level(n / 6), level(n))
            }
            232..=255 => {
                let level = ((u16::from(idx) - 232) * 255 / 23) as u8;
                Color::Rgb(level, level, level)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_range_resolves_to_palette_rgb() {
        assert_eq!(Color::from_palette_index(0), Color::Rgb(0, 0, 0));
        assert_eq!(Color::from_palette_index(1), Color::Rgb(205, 0, 0));
        assert_eq!(Color::from_palette_index(15), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_color_cube_corners() {
        // 16 is cube (0,0,0); 231 is cube (5,5,5).
        assert_eq!(Color::from_palette_index(16), Color::Rgb(0, 0, 0));
        assert_eq!(Color::from_palette_index(231), Color::Rgb(255, 255, 255));
        // 16 + 36*5 = 196 is pure red.
        assert_eq!(Color::from_palette_index(196), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_grayscale_ramp_endpoints() {
        assert_eq!(Color::from_palette_index(232), Color::Rgb(0, 0, 0));
        assert_eq!(Color::from_palette_index(255), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_grayscale_is_monotonic() {
        let mut prev = 0u8;
        for idx in 232..=255u8 {
            let Color::Rgb(r, g, b) = Color::from_palette_index(idx) else {
                panic!("grayscale index {idx} did not resolve to RGB");
            };
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert!(r >= prev);
            prev = r;
        }
    }
}

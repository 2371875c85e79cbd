// src/glyph.rs

//! Defines the `Glyph` type, one character cell of the terminal grid,
//! together with its visual attributes (`Attributes`, `AttrFlags`).
//!
//! Color definitions live in the `crate::color` module.

use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    /// Text styling flags for a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttrFlags: u8 {
        /// Bold text.
        const BOLD          = 1 << 0;
        /// Faint (dim) text.
        const DIM           = 1 << 1;
        /// Italicized text.
        const ITALIC        = 1 << 2;
        /// Underlined text.
        const UNDERLINE     = 1 << 3;
        /// Text with a line through it.
        const STRIKETHROUGH = 1 << 4;
        /// Hidden (concealed) text.
        const HIDDEN        = 1 << 5;
    }
}

/// Visual attributes of a cell: colors plus styling flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attributes {
    /// Foreground color.
    pub fg: Color,
    /// Background color. `Color::Default` means "transparent/background".
    pub bg: Color,
    /// Styling flags (bold, italic, underline, ...).
    pub flags: AttrFlags,
}

/// The character and attributes of a content-bearing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentCell {
    /// The character displayed in the cell. For a `Glyph::WidePrimary`
    /// this is the wide character itself.
    pub c: char,
    /// The cell's visual attributes.
    pub attr: Attributes,
}

impl ContentCell {
    /// A blank space with default attributes.
    #[must_use]
    pub fn blank() -> Self {
        ContentCell {
            c: ' ',
            attr: Attributes::default(),
        }
    }
}

/// A single cell of the terminal grid.
///
/// A cell is either a standard-width character, the first column of a
/// double-width character, or the second-column spacer of one. A spacer
/// displays as a space and carries only the background it inherits from
/// its primary cell; at most one of the wide markers applies to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A standard-width character occupying one cell.
    Single(ContentCell),
    /// The first cell of a double-width character.
    WidePrimary(ContentCell),
    /// The second cell of a double-width character.
    WideSpacer {
        /// Background inherited from the primary cell.
        bg: Color,
    },
}

impl Glyph {
    /// A cleared cell: a blank space with default attributes.
    #[must_use]
    pub fn blank() -> Self {
        Glyph::Single(ContentCell::blank())
    }

    /// The character shown in this cell. Spacers display as a space.
    #[must_use]
    pub fn display_char(&self) -> char {
        match self {
            Glyph::Single(cc) | Glyph::WidePrimary(cc) => cc.c,
            Glyph::WideSpacer { .. } => ' ',
        }
    }

    /// True for the first column of a double-width character.
    #[must_use]
    pub fn is_wide_primary(&self) -> bool {
        matches!(self, Glyph::WidePrimary(_))
    }

    /// True for the second-column spacer of a double-width character.
    #[must_use]
    pub fn is_wide_spacer(&self) -> bool {
        matches!(self, Glyph::WideSpacer { .. })
    }

    /// True for a blank cell with default attributes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Glyph::Single(cc) if cc.c == ' ' && cc.attr == Attributes::default())
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_default_is_blank_space() {
        let glyph = Glyph::default();
        assert_eq!(glyph.display_char(), ' ');
        assert!(glyph.is_blank());
        assert!(!glyph.is_wide_primary());
        assert!(!glyph.is_wide_spacer());
    }

    #[test]
    fn test_attributes_default() {
        let attrs = Attributes::default();
        assert_eq!(attrs.fg, Color::Default);
        assert_eq!(attrs.bg, Color::Default);
        assert_eq!(attrs.flags, AttrFlags::empty());
    }

    #[test]
    fn test_spacer_displays_as_space() {
        let spacer = Glyph::WideSpacer {
            bg: Color::Rgb(1, 2, 3),
        };
        assert_eq!(spacer.display_char(), ' ');
        assert!(spacer.is_wide_spacer());
        assert!(!spacer.is_blank());
    }

    #[test]
    fn test_attr_flags() {
        let mut flags = AttrFlags::default();
        assert!(!flags.contains(AttrFlags::BOLD));
        flags |= AttrFlags::BOLD;
        flags |= AttrFlags::ITALIC;
        assert!(flags.contains(AttrFlags::BOLD | AttrFlags::ITALIC));
        flags &= !AttrFlags::BOLD;
        assert!(!flags.contains(AttrFlags::BOLD));
        assert!(flags.contains(AttrFlags::ITALIC));
    }
}

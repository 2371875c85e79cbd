// src/term/unicode.rs

//! Unicode character width determination for grid placement.
//!
//! A pure range table keeps width decisions deterministic across hosts.
//! The ranges cover the East-Asian-wide blocks plus the emoji planes.

/// Returns true when `c` occupies two terminal columns.
#[must_use]
pub fn is_wide(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1100..=0x115F
            | 0x2329..=0x232A
            | 0x2E80..=0x303E
            | 0x3041..=0x33BF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xA960..=0xA97C
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE10..=0xFE19
            | 0xFE30..=0xFE6F
            | 0xFF01..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x1B000..=0x1B2FF
            | 0x1F300..=0x1F9FF
            | 0x1FA00..=0x1FAFF
            | 0x20000..=0x2FFFF
            | 0x30000..=0x3FFFF
    )
}

/// Returns the number of grid columns `c` occupies.
///
/// # Returns
/// * `0` for C0/C1 control characters, which never reach the grid.
/// * `1` for standard-width printable characters.
/// * `2` for characters that occupy two terminal cells.
#[must_use]
pub fn char_display_width(c: char) -> usize {
    if c.is_control() {
        0
    } else if is_wide(c) {
        2
    } else {
        1
    }
}

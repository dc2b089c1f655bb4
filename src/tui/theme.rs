//! # Type Color Theme
//!
//! One category → color partition for elemental types, consumed with a
//! [`ColorContext`] selecting the rendition: a badge background, the dimmed
//! background wash behind a detail header, or a stat gauge fill. All three
//! contexts share the same partition; only the wash transforms it.
//!
//! Total function: unrecognized categories map to [`FALLBACK_RGB`], never to
//! an absent color.

use ratatui::style::Color;

/// Which visual context a type color is used in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorContext {
    /// Full-strength badge chip.
    Badge,
    /// Dimmed wash behind the detail header.
    Background,
    /// Stat gauge fill.
    Gauge,
}

/// Canonical colors for the 18 elemental types.
const TYPE_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("grass", (0x78, 0xC8, 0x50)),
    ("fire", (0xF0, 0x80, 0x30)),
    ("poison", (0xA0, 0x40, 0xA0)),
    ("flying", (0xF8, 0x58, 0x88)),
    ("normal", (0xA8, 0xA8, 0x78)),
    ("bug", (0xA8, 0xB8, 0x20)),
    ("water", (0x68, 0x90, 0xF0)),
    ("electric", (0xF8, 0xD0, 0x30)),
    ("ice", (0x98, 0xD8, 0xD8)),
    ("fighting", (0xC0, 0x30, 0x28)),
    ("ground", (0xE0, 0xC0, 0x68)),
    ("psychic", (0xF8, 0x58, 0x88)),
    ("rock", (0xB8, 0xA0, 0x38)),
    ("ghost", (0x72, 0x5B, 0x94)),
    ("dark", (0x70, 0x58, 0x48)),
    ("dragon", (0x70, 0x38, 0xF8)),
    ("steel", (0xB8, 0xB8, 0xD0)),
    ("fairy", (0xEE, 0xB5, 0xBB)),
];

/// The defined fallback for categories outside the partition.
pub const FALLBACK_RGB: (u8, u8, u8) = (0x00, 0x00, 0x00);

/// Maps a type name and context to a terminal color. Total for all inputs.
pub fn type_color(name: &str, context: ColorContext) -> Color {
    let (r, g, b) = TYPE_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, rgb)| *rgb)
        .unwrap_or(FALLBACK_RGB);

    match context {
        ColorContext::Badge | ColorContext::Gauge => Color::Rgb(r, g, b),
        // 60% wash, the terminal stand-in for the original's translucent card.
        ColorContext::Background => Color::Rgb(wash(r), wash(g), wash(b)),
    }
}

fn wash(channel: u8) -> u8 {
    (channel as u16 * 3 / 5) as u8
}

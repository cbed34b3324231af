// SPDX-License-Identifier: MPL-2.0
//! Enumerated text styling and decoration choices.

use std::fmt;

/// Color of the card message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontColor {
    Red,
    #[default]
    Black,
}

impl FontColor {
    pub const ALL: [FontColor; 2] = [FontColor::Red, FontColor::Black];

    /// RGB components in `0.0..=1.0`.
    #[must_use]
    pub fn rgb(self) -> (f32, f32, f32) {
        match self {
            FontColor::Red => (1.0, 0.0, 0.0),
            FontColor::Black => (0.0, 0.0, 0.0),
        }
    }
}

/// Font family of the card message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Roboto,
    Serif,
    Cursive,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [FontFamily::Roboto, FontFamily::Serif, FontFamily::Cursive];
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontFamily::Roboto => "Roboto",
            FontFamily::Serif => "Serif",
            FontFamily::Cursive => "Cursive",
        };
        f.write_str(name)
    }
}

/// Sticker drawn over the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Heart,
}

impl Decoration {
    /// Glyph used to render the sticker.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Decoration::Heart => "\u{2764}\u{fe0f}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_card() {
        assert_eq!(FontColor::default(), FontColor::Black);
        assert_eq!(FontFamily::default(), FontFamily::Roboto);
    }

    #[test]
    fn font_family_display_names() {
        let names: Vec<String> = FontFamily::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["Roboto", "Serif", "Cursive"]);
    }

    #[test]
    fn red_is_pure_red() {
        assert_eq!(FontColor::Red.rgb(), (1.0, 0.0, 0.0));
    }
}

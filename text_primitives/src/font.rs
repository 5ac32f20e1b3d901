// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Visual weight class of a font, on the CSS scale of 1 to 1000.
///
/// Weights arriving from the attribute codec are always one of the nine named classes
/// (`100` through `900`); arbitrary values are accepted for hosts that construct styles
/// directly.
///
/// In CSS, this corresponds to the `font-weight` property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900);

    /// Creates a new weight, clamped to the valid `1..=1000` range.
    pub const fn new(weight: u16) -> Self {
        if weight < 1 {
            Self(1)
        } else if weight > 1000 {
            Self(1000)
        } else {
            Self(weight)
        }
    }

    /// Returns the weight for one of the nine named weight classes.
    ///
    /// Index `0` is [`FontWeight::THIN`] and index `8` is [`FontWeight::BLACK`]; anything else
    /// returns `None`.
    pub const fn from_index(index: i32) -> Option<Self> {
        Some(match index {
            0 => Self::THIN,
            1 => Self::EXTRA_LIGHT,
            2 => Self::LIGHT,
            3 => Self::NORMAL,
            4 => Self::MEDIUM,
            5 => Self::SEMI_BOLD,
            6 => Self::BOLD,
            7 => Self::EXTRA_BOLD,
            8 => Self::BLACK,
            _ => return None,
        })
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.0 {
            100 => "thin",
            200 => "extra-light",
            300 => "light",
            400 => "normal",
            500 => "medium",
            600 => "semi-bold",
            700 => "bold",
            800 => "extra-bold",
            900 => "black",
            other => return write!(f, "{other}"),
        };
        f.write_str(keyword)
    }
}

/// Visual style or “slope” of a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// `normal`.
    #[default]
    Normal,
    /// `italic`.
    Italic,
}

impl FontStyle {
    /// Parses a CSS `font-style` keyword (`normal` or `italic`).
    ///
    /// ```
    /// use text_primitives::FontStyle;
    ///
    /// assert_eq!(FontStyle::parse("italic"), Some(FontStyle::Italic));
    /// assert_eq!(FontStyle::parse(" normal "), Some(FontStyle::Normal));
    /// assert_eq!(FontStyle::parse("oblique"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "normal" => Some(Self::Normal),
            "italic" => Some(Self::Italic),
            _ => None,
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        })
    }
}

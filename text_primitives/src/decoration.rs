// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::BitOr;

/// A set of decoration lines drawn with text.
///
/// This is a small bit set: [`UNDERLINE`](Self::UNDERLINE) is `1`,
/// [`OVERLINE`](Self::OVERLINE) is `2` and [`LINE_THROUGH`](Self::LINE_THROUGH) is `4`.
///
/// See: <https://www.w3.org/TR/css-text-decor-3/#text-decoration-line-property>
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextDecoration(u8);

impl TextDecoration {
    /// No decoration lines.
    pub const NONE: Self = Self(0);
    /// A line below the text.
    pub const UNDERLINE: Self = Self(1);
    /// A line above the text.
    pub const OVERLINE: Self = Self(2);
    /// A line through the middle of the text.
    pub const LINE_THROUGH: Self = Self(4);

    const ALL: u8 = 0b111;

    /// Creates a decoration set from its bit representation.
    ///
    /// Returns `None` if any bit outside the three defined lines is set.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL != 0 {
            None
        } else {
            Some(Self(bits))
        }
    }

    /// Returns `true` if no line is set.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every line in `other` is also in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterates the lines in this set, in underline, overline, line-through order.
    pub fn lines(self) -> DecorationLines {
        DecorationLines { bits: self.0 }
    }
}

impl BitOr for TextDecoration {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("TextDecoration(none)");
        }
        f.debug_set().entries(self.lines()).finish()
    }
}

/// A single decoration line kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationLine {
    /// Below the text.
    Underline,
    /// Above the text.
    Overline,
    /// Through the middle of the text.
    LineThrough,
}

/// Iterator over the lines of a [`TextDecoration`].
#[derive(Clone, Debug)]
pub struct DecorationLines {
    bits: u8,
}

impl Iterator for DecorationLines {
    type Item = DecorationLine;

    fn next(&mut self) -> Option<DecorationLine> {
        for (bit, line) in [
            (TextDecoration::UNDERLINE.0, DecorationLine::Underline),
            (TextDecoration::OVERLINE.0, DecorationLine::Overline),
            (TextDecoration::LINE_THROUGH.0, DecorationLine::LineThrough),
        ] {
            if self.bits & bit != 0 {
                self.bits &= !bit;
                return Some(line);
            }
        }
        None
    }
}

/// The stroke used to draw decoration lines.
///
/// See: <https://www.w3.org/TR/css-text-decor-3/#text-decoration-style-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextDecorationStyle {
    /// A single solid line.
    #[default]
    Solid,
    /// Two parallel solid lines.
    Double,
    /// A series of dots.
    Dotted,
    /// A series of short dashes.
    Dashed,
    /// A wavy line.
    Wavy,
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal alignment of the lines of a paragraph.
///
/// See: <https://www.w3.org/TR/css-text-3/#text-align-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    /// Align to the left edge.
    Left,
    /// Align to the right edge.
    Right,
    /// Center within the line box.
    Center,
    /// Stretch lines to fill the line box, except the last.
    Justify,
    /// Align to the start edge for the paragraph's direction.
    #[default]
    Start,
    /// Align to the end edge for the paragraph's direction.
    End,
}

/// The baseline used to align glyphs within a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextBaseline {
    /// The alphabetic baseline used by Latin, Cyrillic, Greek and similar scripts.
    #[default]
    Alphabetic,
    /// The ideographic baseline used by CJK scripts.
    Ideographic,
}

// Copyright 2021 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computed styles carried by tree nodes.

mod color;

pub use color::{color_from_argb, color_to_argb, BLACK};

use alloc::sync::Arc;

use peniko::color::Rgba8;
use smallvec::SmallVec;
use text_primitives::{DecorationLine, TextAlign, TextDecoration, TextDecorationStyle};

use crate::font::{FontDescription, FontHandle};

/// Color of decoration lines.
///
/// Kept apart from a plain color so that the default can track the text color of whatever run
/// the decoration ends up painted on.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DecorationColor {
    /// Use the text color.
    #[default]
    CurrentColor,
    /// An explicit color.
    Color(Rgba8),
}

impl DecorationColor {
    /// Resolves against the text color in effect.
    pub fn resolve(self, current: Rgba8) -> Rgba8 {
        match self {
            Self::CurrentColor => current,
            Self::Color(color) => color,
        }
    }
}

/// A decoration line to draw, with the stroke and color in effect where it was set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedDecoration {
    /// Which line.
    pub line: DecorationLine,
    /// Stroke style.
    pub style: TextDecorationStyle,
    /// Line color.
    pub color: DecorationColor,
}

/// Line height of a run.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum LineHeight {
    /// Use the font's own metrics.
    #[default]
    Normal,
    /// A percentage of the font size; `120.0` means 1.2 times the size.
    Percent(f64),
}

/// Whether bidirectional text is stored in logical or visual order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RtlOrdering {
    /// Characters are stored in reading order and reordered for display.
    #[default]
    Logical,
    /// Characters are stored in display order.
    Visual,
}

/// Whether text content may be edited in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UserModify {
    /// Content is read-only.
    #[default]
    ReadOnly,
    /// Content may be edited, rich text included.
    ReadWrite,
    /// Content may be edited as plain text only.
    ReadWritePlaintextOnly,
}

/// The fully resolved style of a tree node.
///
/// Produced by copying the parent's style and applying the fields present in a diff. Nodes
/// share these behind an [`Arc`]; a text run points at the very same allocation as the span it
/// was added to.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    pub(crate) color: Rgba8,
    pub(crate) decoration: TextDecoration,
    pub(crate) decoration_color: DecorationColor,
    pub(crate) decoration_style: TextDecorationStyle,
    pub(crate) applied_decorations: SmallVec<[AppliedDecoration; 2]>,
    pub(crate) font: FontDescription,
    pub(crate) font_handle: FontHandle,
    pub(crate) line_height: LineHeight,
    pub(crate) text_align: TextAlign,
    pub(crate) rtl_ordering: RtlOrdering,
    pub(crate) z_index: i32,
    pub(crate) user_modify: UserModify,
    pub(crate) locale: Option<Arc<str>>,
}

impl ComputedStyle {
    /// Text color.
    #[inline]
    pub const fn color(&self) -> Rgba8 {
        self.color
    }

    /// The decoration lines set on this style.
    #[inline]
    pub const fn decoration(&self) -> TextDecoration {
        self.decoration
    }

    /// Decoration color.
    #[inline]
    pub const fn decoration_color(&self) -> DecorationColor {
        self.decoration_color
    }

    /// Decoration stroke style.
    #[inline]
    pub const fn decoration_style(&self) -> TextDecorationStyle {
        self.decoration_style
    }

    /// Every decoration line to draw for this style, own and inherited.
    #[inline]
    pub fn applied_decorations(&self) -> &[AppliedDecoration] {
        &self.applied_decorations
    }

    /// The font description used for face selection.
    #[inline]
    pub const fn font(&self) -> &FontDescription {
        &self.font
    }

    /// The face selected for [`font`](Self::font).
    #[inline]
    pub const fn font_handle(&self) -> &FontHandle {
        &self.font_handle
    }

    /// Line height.
    #[inline]
    pub const fn line_height(&self) -> LineHeight {
        self.line_height
    }

    /// Paragraph alignment.
    #[inline]
    pub const fn text_align(&self) -> TextAlign {
        self.text_align
    }

    /// Ordering of bidirectional text.
    #[inline]
    pub const fn rtl_ordering(&self) -> RtlOrdering {
        self.rtl_ordering
    }

    /// Stacking order.
    #[inline]
    pub const fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Editability.
    #[inline]
    pub const fn user_modify(&self) -> UserModify {
        self.user_modify
    }

    /// The locale the script was derived from, if one was configured.
    #[inline]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Records one applied decoration per line in [`decoration`](Self::decoration), using the
    /// current decoration style and color.
    ///
    /// Lines already applied by ancestors stay in place.
    pub(crate) fn apply_decorations(&mut self) {
        for line in self.decoration.lines() {
            self.applied_decorations.push(AppliedDecoration {
                line,
                style: self.decoration_style,
                color: self.decoration_color,
            });
        }
    }
}

// Copyright 2021 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style cascade.
//!
//! A resolved style is the parent's style with only the fields present in the diff replaced.
//! Face selection runs at most once per resolution, however many font fields the diff sets.

use alloc::sync::Arc;

use smallvec::SmallVec;
use text_primitives::{TextAlign, TextDecoration, TextDecorationStyle};

use crate::diff::{ParagraphStyleDiff, TextStyleDiff};
use crate::font::{self, FontDescription, FontSelector};
use crate::locale::script_for_locale;
use crate::style::{self, ComputedStyle, DecorationColor, LineHeight, RtlOrdering, UserModify};
use crate::BuilderOptions;

/// Resolves the style of a span pushed under a node styled `parent`.
pub fn resolve_text_style(
    parent: &ComputedStyle,
    diff: &TextStyleDiff,
    fonts: &dyn FontSelector,
) -> ComputedStyle {
    let mut out = parent.clone();

    if let Some(color) = diff.color {
        out.color = color;
    }
    // Lines are recorded with the stroke and color inherited from the parent.
    if let Some(decoration) = diff.decoration {
        out.decoration = decoration;
        out.apply_decorations();
    }
    if let Some(color) = diff.decoration_color {
        out.decoration_color = DecorationColor::Color(color);
    }
    if let Some(decoration_style) = diff.decoration_style {
        out.decoration_style = decoration_style;
    }

    if diff.touches_font() {
        let mut description = out.font.clone();
        if let Some(weight) = diff.font_weight {
            description.weight = weight;
        }
        if let Some(font_style) = diff.font_style {
            description.style = font_style;
        }
        if let Some(family) = &diff.font_family {
            description = description.with_family(family);
        }
        if let Some(size) = diff.font_size {
            description.set_absolute_size(size);
        }
        if let Some(spacing) = diff.letter_spacing {
            description.letter_spacing = spacing;
        }
        if let Some(spacing) = diff.word_spacing {
            description.word_spacing = spacing;
        }
        out.font_handle = font::resync(&description, fonts);
        out.font = description;
    }

    if let Some(height) = diff.height {
        out.line_height = LineHeight::Percent(height * 100.0);
    }

    out
}

/// Resolves paragraph-level overrides against the root style.
pub fn resolve_paragraph_style(
    root: &ComputedStyle,
    diff: &ParagraphStyleDiff,
    fonts: &dyn FontSelector,
) -> ComputedStyle {
    let mut out = root.clone();

    if let Some(align) = diff.text_align {
        out.text_align = align;
    }
    if let Some(baseline) = diff.text_baseline {
        log::trace!("ignoring paragraph baseline {baseline:?}");
    }

    if diff.touches_font() {
        let mut description = out.font.clone();
        if let Some(weight) = diff.font_weight {
            description.weight = weight;
        }
        if let Some(font_style) = diff.font_style {
            description.style = font_style;
        }
        if let Some(family) = &diff.font_family {
            description = description.with_family(family);
        }
        if let Some(size) = diff.font_size {
            description.set_absolute_size(size);
        }
        out.font_handle = font::resync(&description, fonts);
        out.font = description;
    }

    if let Some(height) = diff.line_height {
        out.line_height = LineHeight::Percent(height * 100.0);
    }

    out
}

/// Creates the document default style for a new tree.
pub fn document_style(options: &BuilderOptions, fonts: &dyn FontSelector) -> ComputedStyle {
    let locale = options.locale.as_deref();
    let mut description = FontDescription {
        script: script_for_locale(locale),
        ..FontDescription::default()
    };
    if let Some(family) = &options.font_family {
        description = description.with_family(family);
    }
    // The document size is not caller specified, so it stays relative.
    description.set_size(options.font_size, false);

    ComputedStyle {
        color: style::BLACK,
        decoration: TextDecoration::NONE,
        decoration_color: DecorationColor::CurrentColor,
        decoration_style: TextDecorationStyle::Solid,
        applied_decorations: SmallVec::new(),
        font_handle: font::resync(&description, fonts),
        font: description,
        line_height: LineHeight::Normal,
        text_align: TextAlign::Start,
        rtl_ordering: RtlOrdering::Logical,
        z_index: 0,
        user_modify: UserModify::ReadOnly,
        locale: locale.map(Arc::from),
    }
}

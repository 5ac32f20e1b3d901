// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed style diffs.
//!
//! A diff names the fields a style change overrides; every `None` field is inherited. Diffs are
//! usually decoded from a compact record with [`TextStyleDiff::decode`] and
//! [`ParagraphStyleDiff::decode`], but may also be built directly.

use alloc::sync::Arc;

use peniko::color::Rgba8;
use text_primitives::{
    FontStyle, FontWeight, TextAlign, TextBaseline, TextDecoration, TextDecorationStyle,
};

use crate::codec::{self, DecodedRecord, Field, ParagraphField, TextField};
use crate::style::color_from_argb;
use crate::BuilderError;

/// Overrides applied by a pushed span.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TextStyleDiff {
    /// Text color.
    pub color: Option<Rgba8>,
    /// Decoration lines.
    pub decoration: Option<TextDecoration>,
    /// Decoration color.
    pub decoration_color: Option<Rgba8>,
    /// Decoration stroke style.
    pub decoration_style: Option<TextDecorationStyle>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font style.
    pub font_style: Option<FontStyle>,
    /// Font family; an empty name selects the default family.
    pub font_family: Option<Arc<str>>,
    /// Font size in absolute units.
    pub font_size: Option<f64>,
    /// Extra space between letters.
    pub letter_spacing: Option<f64>,
    /// Extra space between words.
    pub word_spacing: Option<f64>,
    /// Line height as a multiple of the font size.
    pub height: Option<f64>,
}

impl TextStyleDiff {
    /// Decodes a text style record and its out-of-band values.
    ///
    /// Each out-of-band value is only read when its mask bit is set.
    pub fn decode(
        record: &[i32],
        font_family: &str,
        font_size: f64,
        letter_spacing: f64,
        word_spacing: f64,
        height: f64,
    ) -> Result<Self, BuilderError> {
        let record = codec::decode::<TextField>(record)?;
        let mut diff = Self::default();
        for (field, value) in record.iter() {
            match field {
                TextField::Color => diff.color = Some(color_from_argb(value.cast_unsigned())),
                TextField::Decoration => diff.decoration = Some(decoration(field, value)?),
                TextField::DecorationColor => {
                    diff.decoration_color = Some(color_from_argb(value.cast_unsigned()));
                }
                TextField::DecorationStyle => {
                    diff.decoration_style = Some(decoration_style(field, value)?);
                }
                TextField::FontWeight => diff.font_weight = Some(font_weight(field, value)?),
                TextField::FontStyle => diff.font_style = Some(font_style(field, value)?),
                TextField::FontFamily => diff.font_family = Some(Arc::from(font_family)),
                TextField::FontSize => diff.font_size = Some(font_size),
                TextField::LetterSpacing => diff.letter_spacing = Some(letter_spacing),
                TextField::WordSpacing => diff.word_spacing = Some(word_spacing),
                TextField::Height => diff.height = Some(height),
            }
        }
        Ok(diff)
    }

    /// Returns `true` if any field that feeds face selection is present.
    pub fn touches_font(&self) -> bool {
        self.font_weight.is_some()
            || self.font_style.is_some()
            || self.font_family.is_some()
            || self.font_size.is_some()
            || self.letter_spacing.is_some()
            || self.word_spacing.is_some()
    }
}

/// Paragraph-level overrides applied by [`TreeBuilder::build`](crate::TreeBuilder::build).
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ParagraphStyleDiff {
    /// Text alignment.
    pub text_align: Option<TextAlign>,
    /// Text baseline. Decoded and validated, but has no effect on the style.
    pub text_baseline: Option<TextBaseline>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font style.
    pub font_style: Option<FontStyle>,
    /// Font family; an empty name selects the default family.
    pub font_family: Option<Arc<str>>,
    /// Font size in absolute units.
    pub font_size: Option<f64>,
    /// Line height as a multiple of the font size.
    pub line_height: Option<f64>,
}

impl ParagraphStyleDiff {
    /// Decodes a paragraph style record and its out-of-band values.
    ///
    /// Each out-of-band value is only read when its mask bit is set.
    pub fn decode(
        record: &[i32],
        font_family: &str,
        font_size: f64,
        line_height: f64,
    ) -> Result<Self, BuilderError> {
        let record: DecodedRecord<ParagraphField> = codec::decode(record)?;
        let mut diff = Self::default();
        for (field, value) in record.iter() {
            match field {
                ParagraphField::TextAlign => diff.text_align = Some(text_align(field, value)?),
                ParagraphField::TextBaseline => {
                    diff.text_baseline = Some(text_baseline(field, value)?);
                }
                ParagraphField::FontWeight => diff.font_weight = Some(font_weight(field, value)?),
                ParagraphField::FontStyle => diff.font_style = Some(font_style(field, value)?),
                ParagraphField::FontFamily => diff.font_family = Some(Arc::from(font_family)),
                ParagraphField::FontSize => diff.font_size = Some(font_size),
                ParagraphField::LineHeight => diff.line_height = Some(line_height),
            }
        }
        Ok(diff)
    }

    /// Returns `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `true` if any field that feeds face selection is present.
    pub fn touches_font(&self) -> bool {
        self.font_weight.is_some()
            || self.font_style.is_some()
            || self.font_family.is_some()
            || self.font_size.is_some()
    }
}

fn invalid(field: impl Field, value: i32) -> BuilderError {
    BuilderError::InvalidValue {
        field: field.name(),
        value,
    }
}

fn decoration(field: impl Field, value: i32) -> Result<TextDecoration, BuilderError> {
    u8::try_from(value)
        .ok()
        .and_then(TextDecoration::from_bits)
        .ok_or_else(|| invalid(field, value))
}

fn decoration_style(field: impl Field, value: i32) -> Result<TextDecorationStyle, BuilderError> {
    Ok(match value {
        0 => TextDecorationStyle::Solid,
        1 => TextDecorationStyle::Double,
        2 => TextDecorationStyle::Dotted,
        3 => TextDecorationStyle::Dashed,
        4 => TextDecorationStyle::Wavy,
        _ => return Err(invalid(field, value)),
    })
}

fn font_weight(field: impl Field, value: i32) -> Result<FontWeight, BuilderError> {
    FontWeight::from_index(value).ok_or_else(|| invalid(field, value))
}

fn font_style(field: impl Field, value: i32) -> Result<FontStyle, BuilderError> {
    Ok(match value {
        0 => FontStyle::Normal,
        1 => FontStyle::Italic,
        _ => return Err(invalid(field, value)),
    })
}

fn text_align(field: impl Field, value: i32) -> Result<TextAlign, BuilderError> {
    Ok(match value {
        0 => TextAlign::Left,
        1 => TextAlign::Right,
        2 => TextAlign::Center,
        3 => TextAlign::Justify,
        _ => return Err(invalid(field, value)),
    })
}

fn text_baseline(field: impl Field, value: i32) -> Result<TextBaseline, BuilderError> {
    Ok(match value {
        0 => TextBaseline::Alphabetic,
        1 => TextBaseline::Ideographic,
        _ => return Err(invalid(field, value)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ParagraphStyleRecord, TextStyleRecord};

    #[test]
    fn out_of_band_values_need_their_bit() {
        let record = TextStyleRecord::new().flag(TextField::FontSize);
        let diff = TextStyleDiff::decode(record.as_slice(), "Ignored", 20.0, 1.0, 2.0, 3.0).unwrap();
        assert_eq!(diff.font_size, Some(20.0));
        assert_eq!(diff.font_family, None);
        assert_eq!(diff.letter_spacing, None);
        assert_eq!(diff.word_spacing, None);
        assert_eq!(diff.height, None);
    }

    #[test]
    fn decodes_every_text_field() {
        let record = TextStyleRecord::new()
            .with(TextField::Color, 0xFF00_FF00_u32.cast_signed())
            .with(TextField::Decoration, 3)
            .with(TextField::DecorationColor, 0x8000_0000_u32.cast_signed())
            .with(TextField::DecorationStyle, 4)
            .with(TextField::FontWeight, 6)
            .with(TextField::FontStyle, 1)
            .flag(TextField::FontFamily)
            .flag(TextField::FontSize)
            .flag(TextField::LetterSpacing)
            .flag(TextField::WordSpacing)
            .flag(TextField::Height);
        let diff = TextStyleDiff::decode(record.as_slice(), "Serif", 18.0, 0.5, 1.5, 1.25).unwrap();
        assert_eq!(diff.color, Some(color_from_argb(0xFF00_FF00)));
        assert_eq!(
            diff.decoration,
            Some(TextDecoration::UNDERLINE | TextDecoration::OVERLINE)
        );
        assert_eq!(diff.decoration_color.map(|c| c.a), Some(0x80));
        assert_eq!(diff.decoration_style, Some(TextDecorationStyle::Wavy));
        assert_eq!(diff.font_weight, Some(FontWeight::BOLD));
        assert_eq!(diff.font_style, Some(FontStyle::Italic));
        assert_eq!(diff.font_family.as_deref(), Some("Serif"));
        assert_eq!(diff.font_size, Some(18.0));
        assert_eq!(diff.letter_spacing, Some(0.5));
        assert_eq!(diff.word_spacing, Some(1.5));
        assert_eq!(diff.height, Some(1.25));
        assert!(diff.touches_font());
    }

    #[test]
    fn out_of_range_values_name_the_field() {
        let record = TextStyleRecord::new().with(TextField::FontWeight, 9);
        assert_eq!(
            TextStyleDiff::decode(record.as_slice(), "", 0.0, 0.0, 0.0, 0.0),
            Err(BuilderError::InvalidValue {
                field: "font-weight",
                value: 9,
            })
        );

        let record = TextStyleRecord::new().with(TextField::Decoration, 8);
        assert!(TextStyleDiff::decode(record.as_slice(), "", 0.0, 0.0, 0.0, 0.0).is_err());

        let record = ParagraphStyleRecord::new().with(ParagraphField::TextBaseline, 2);
        assert_eq!(
            ParagraphStyleDiff::decode(record.as_slice(), "", 0.0, 0.0),
            Err(BuilderError::InvalidValue {
                field: "text-baseline",
                value: 2,
            })
        );
    }

    #[test]
    fn paragraph_diff_from_zero_mask_is_empty() {
        let diff =
            ParagraphStyleDiff::decode(ParagraphStyleRecord::new().as_slice(), "Serif", 9.0, 2.0)
                .unwrap();
        assert!(diff.is_empty());
        assert!(!diff.touches_font());
    }

    #[test]
    fn color_only_diff_does_not_touch_font() {
        let diff = TextStyleDiff {
            color: Some(color_from_argb(0xFFFF_0000)),
            height: Some(2.0),
            ..Default::default()
        };
        assert!(!diff.touches_font());
    }
}

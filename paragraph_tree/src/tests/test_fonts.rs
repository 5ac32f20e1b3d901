// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Face selection as seen through the builder.

use super::utils::{color_record, CountingSelector, RED};
use crate::codec::{ParagraphField, ParagraphStyleRecord, TextField, TextStyleRecord};
use crate::font::{FaceId, FaceInfo, FontCache};
use crate::TreeBuilder;
use text_primitives::{FontStyle, FontWeight};

#[test]
fn one_resync_per_font_touching_push() {
    let fonts = CountingSelector::default();
    let mut builder = TreeBuilder::new(&fonts);
    fonts.reset();

    let every_font_field = TextStyleRecord::new()
        .with(TextField::FontWeight, 6)
        .with(TextField::FontStyle, 1)
        .flag(TextField::FontFamily)
        .flag(TextField::FontSize)
        .flag(TextField::LetterSpacing)
        .flag(TextField::WordSpacing);
    builder
        .push_style(every_font_field.as_slice(), "Serif", 12.0, 0.5, 1.0, 0.0)
        .unwrap();
    assert_eq!(fonts.calls(), 1);

    let seen = fonts.last_seen().unwrap();
    assert_eq!(seen.family(), Some("Serif"));
    assert_eq!(seen.weight(), FontWeight::BOLD);
    assert_eq!(seen.style(), FontStyle::Italic);
    assert_eq!(seen.computed_size(), 12.0);
    assert_eq!(seen.letter_spacing(), 0.5);
    assert_eq!(seen.word_spacing(), 1.0);

    let size_only = TextStyleRecord::new().flag(TextField::FontSize);
    builder
        .push_style(size_only.as_slice(), "", 20.0, 0.0, 0.0, 0.0)
        .unwrap();
    assert_eq!(fonts.calls(), 2);
}

#[test]
fn non_font_pushes_do_not_resync() {
    let fonts = CountingSelector::default();
    let mut builder = TreeBuilder::new(&fonts);
    fonts.reset();

    builder
        .push_style(color_record(RED).as_slice(), "", 0.0, 0.0, 0.0, 0.0)
        .unwrap();
    let height = TextStyleRecord::new().flag(TextField::Height);
    builder.push_style(height.as_slice(), "", 0.0, 0.0, 0.0, 2.0).unwrap();
    builder.add_text("no fonts");
    assert_eq!(fonts.calls(), 0);

    let record = ParagraphStyleRecord::new().with(ParagraphField::TextAlign, 1);
    builder.build(record.as_slice(), "", 0.0, 0.0).unwrap();
    assert_eq!(fonts.calls(), 0);
}

#[test]
fn paragraph_font_fields_resync_once() {
    let fonts = CountingSelector::knowing("Serif");
    let mut builder = TreeBuilder::new(&fonts);
    fonts.reset();

    let record = ParagraphStyleRecord::new()
        .with(ParagraphField::FontWeight, 2)
        .flag(ParagraphField::FontFamily)
        .flag(ParagraphField::FontSize);
    let paragraph = builder.build(record.as_slice(), "Serif", 16.0, 0.0).unwrap();
    assert_eq!(fonts.calls(), 1);

    let handle = paragraph.root().style().font_handle();
    assert_eq!(handle.face(), FaceId(7));
    assert!(!handle.is_fallback());
}

#[test]
fn degenerate_sizes_compute_to_zero() {
    let fonts = CountingSelector::default();
    let mut builder = TreeBuilder::new(&fonts);
    let size = TextStyleRecord::new().flag(TextField::FontSize);
    for value in [0.0, -1.0, f64::NAN] {
        builder
            .push_style(size.as_slice(), "", value, 0.0, 0.0, 0.0)
            .unwrap();
        builder.add_text("x");
        builder.pop();
    }
    let paragraph = builder.build(&[0; 8], "", 0.0, 0.0).unwrap();
    for run in paragraph.text_runs() {
        assert_eq!(run.style().font().computed_size(), 0.0);
        assert!(run.style().font().is_absolute_size());
    }
}

#[test]
fn unknown_family_falls_back_to_its_default_face() {
    let fonts = FontCache::new();
    fonts.register(
        "Roboto",
        FaceInfo {
            id: FaceId(3),
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        },
    );
    let mut builder = TreeBuilder::new(&fonts);
    let family = TextStyleRecord::new().flag(TextField::FontFamily);
    builder
        .push_style(family.as_slice(), "Roboto", 0.0, 0.0, 0.0, 0.0)
        .unwrap();
    builder.add_text("known");
    builder.pop();
    builder
        .push_style(family.as_slice(), "Missing", 0.0, 0.0, 0.0, 0.0)
        .unwrap();
    builder.add_text("missing");
    let paragraph = builder.build(&[0; 8], "", 0.0, 0.0).unwrap();

    let handles: Vec<_> = paragraph
        .text_runs()
        .map(|run| run.style().font_handle().clone())
        .collect();
    assert_eq!(handles[0].face(), FaceId(3));
    assert!(!handles[0].is_fallback());
    assert_eq!(handles[1].family(), Some("Missing"));
    assert!(handles[1].is_fallback());
}

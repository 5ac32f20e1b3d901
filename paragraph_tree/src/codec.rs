// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact attribute records.
//!
//! A record is a fixed-position `i32` buffer `[mask, field_1, …, field_k]`. Bit `i` of `mask`
//! says whether slot `i` carries a value. Strings and floating-point values never travel in the
//! record; their bit is a flag and the value is passed next to the record.
//!
//! Two layouts exist:
//!
//! | bit | [`TextField`]     | [`ParagraphField`] |
//! |-----|-------------------|--------------------|
//! | 1   | color             | text align         |
//! | 2   | decoration        | text baseline      |
//! | 3   | decoration color  | font weight        |
//! | 4   | decoration style  | font style         |
//! | 5   | font weight       | font family (flag) |
//! | 6   | font style        | font size (flag)   |
//! | 7   | font family (flag)| line height (flag) |
//! | 8   | font size (flag)  |                    |
//! | 9   | letter spacing (flag) |                |
//! | 10  | word spacing (flag)   |                |
//! | 11  | height (flag)     |                    |

use core::fmt;
use core::marker::PhantomData;

use smallvec::SmallVec;

use crate::BuilderError;

/// Which record layout a buffer is decoded against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// The per-span layout described by [`TextField`].
    TextStyle,
    /// The paragraph-level layout described by [`ParagraphField`].
    ParagraphStyle,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TextStyle => "text style",
            Self::ParagraphStyle => "paragraph style",
        })
    }
}

/// A field of a record layout.
pub trait Field: Copy + Eq + fmt::Debug + 'static {
    /// The layout this field belongs to.
    const KIND: RecordKind;

    /// Every field of the layout, in ascending slot order.
    const ALL: &'static [Self];

    /// The slot (and mask bit) index of this field.
    fn index(self) -> usize;

    /// A human readable field name used in errors.
    fn name(self) -> &'static str;

    /// The mask bit of this field.
    fn mask(self) -> u32 {
        1 << self.index()
    }

    /// The number of slots a record of this layout must have, mask included.
    fn slots() -> usize {
        Self::ALL.iter().map(|f| f.index()).max().unwrap_or(0) + 1
    }

    /// The union of all defined mask bits.
    fn defined_mask() -> u32 {
        Self::ALL.iter().fold(0, |mask, f| mask | f.mask())
    }
}

/// Fields of the per-span text style record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    /// Packed ARGB text color.
    Color,
    /// Decoration line set.
    Decoration,
    /// Packed ARGB decoration color.
    DecorationColor,
    /// Decoration stroke style.
    DecorationStyle,
    /// Font weight class index.
    FontWeight,
    /// Font style.
    FontStyle,
    /// Font family name, passed out of band.
    FontFamily,
    /// Font size, passed out of band.
    FontSize,
    /// Letter spacing, passed out of band.
    LetterSpacing,
    /// Word spacing, passed out of band.
    WordSpacing,
    /// Line height multiplier, passed out of band.
    Height,
}

impl Field for TextField {
    const KIND: RecordKind = RecordKind::TextStyle;
    const ALL: &'static [Self] = &[
        Self::Color,
        Self::Decoration,
        Self::DecorationColor,
        Self::DecorationStyle,
        Self::FontWeight,
        Self::FontStyle,
        Self::FontFamily,
        Self::FontSize,
        Self::LetterSpacing,
        Self::WordSpacing,
        Self::Height,
    ];

    fn index(self) -> usize {
        match self {
            Self::Color => 1,
            Self::Decoration => 2,
            Self::DecorationColor => 3,
            Self::DecorationStyle => 4,
            Self::FontWeight => 5,
            Self::FontStyle => 6,
            Self::FontFamily => 7,
            Self::FontSize => 8,
            Self::LetterSpacing => 9,
            Self::WordSpacing => 10,
            Self::Height => 11,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Decoration => "text-decoration",
            Self::DecorationColor => "text-decoration-color",
            Self::DecorationStyle => "text-decoration-style",
            Self::FontWeight => "font-weight",
            Self::FontStyle => "font-style",
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::LetterSpacing => "letter-spacing",
            Self::WordSpacing => "word-spacing",
            Self::Height => "height",
        }
    }
}

/// Fields of the paragraph style record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParagraphField {
    /// Text alignment.
    TextAlign,
    /// Text baseline.
    TextBaseline,
    /// Font weight class index.
    FontWeight,
    /// Font style.
    FontStyle,
    /// Font family name, passed out of band.
    FontFamily,
    /// Font size, passed out of band.
    FontSize,
    /// Line height multiplier, passed out of band.
    LineHeight,
}

impl Field for ParagraphField {
    const KIND: RecordKind = RecordKind::ParagraphStyle;
    const ALL: &'static [Self] = &[
        Self::TextAlign,
        Self::TextBaseline,
        Self::FontWeight,
        Self::FontStyle,
        Self::FontFamily,
        Self::FontSize,
        Self::LineHeight,
    ];

    fn index(self) -> usize {
        match self {
            Self::TextAlign => 1,
            Self::TextBaseline => 2,
            Self::FontWeight => 3,
            Self::FontStyle => 4,
            Self::FontFamily => 5,
            Self::FontSize => 6,
            Self::LineHeight => 7,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::TextAlign => "text-align",
            Self::TextBaseline => "text-baseline",
            Self::FontWeight => "font-weight",
            Self::FontStyle => "font-style",
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::LineHeight => "line-height",
        }
    }
}

/// The fields present in a record, with their raw slot values, in ascending slot order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedRecord<F: Field> {
    mask: u32,
    fields: SmallVec<[(F, i32); 12]>,
}

impl<F: Field> DecodedRecord<F> {
    /// A record with no fields present.
    pub fn empty() -> Self {
        Self {
            mask: 0,
            fields: SmallVec::new(),
        }
    }

    /// Returns `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if `field` is present.
    pub fn contains(&self, field: F) -> bool {
        self.mask & field.mask() != 0
    }

    /// The raw slot value of `field`, if present.
    pub fn get(&self, field: F) -> Option<i32> {
        self.fields
            .iter()
            .find_map(|&(f, value)| (f == field).then_some(value))
    }

    /// Iterates the present fields.
    pub fn iter(&self) -> impl Iterator<Item = (F, i32)> + '_ {
        self.fields.iter().copied()
    }
}

/// Decodes `record` against the layout of `F`.
///
/// Fails if the record is shorter than the layout or if the mask sets bits the layout does not
/// define. Trailing slots beyond the layout are ignored.
pub fn decode<F: Field>(record: &[i32]) -> Result<DecodedRecord<F>, BuilderError> {
    let required = F::slots();
    let too_short = || BuilderError::RecordTooShort {
        kind: F::KIND,
        len: record.len(),
        required,
    };
    if record.len() < required {
        return Err(too_short());
    }
    let mask = record.first().copied().ok_or_else(too_short)?.cast_unsigned();

    let undefined = mask & !F::defined_mask();
    if undefined != 0 {
        return Err(BuilderError::UndefinedBits {
            kind: F::KIND,
            mask,
            undefined,
        });
    }

    let mut fields = SmallVec::new();
    for &field in F::ALL {
        if mask & field.mask() == 0 {
            continue;
        }
        let value = record.get(field.index()).copied().ok_or_else(too_short)?;
        fields.push((field, value));
    }
    Ok(DecodedRecord { mask, fields })
}

/// An encoder producing records in the wire layout of `F`.
///
/// ```
/// use paragraph_tree::codec::{self, TextField, TextStyleRecord};
///
/// let record = TextStyleRecord::new()
///     .with(TextField::FontWeight, 6)
///     .flag(TextField::FontSize);
/// let decoded = codec::decode::<TextField>(record.as_slice()).unwrap();
/// assert_eq!(decoded.get(TextField::FontWeight), Some(6));
/// assert!(decoded.contains(TextField::FontSize));
/// assert!(!decoded.contains(TextField::Color));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record<F: Field> {
    slots: SmallVec<[i32; 12]>,
    _field: PhantomData<F>,
}

/// Encoder for [`TextField`] records.
pub type TextStyleRecord = Record<TextField>;

/// Encoder for [`ParagraphField`] records.
pub type ParagraphStyleRecord = Record<ParagraphField>;

impl<F: Field> Record<F> {
    /// A zeroed record of the layout's exact length.
    pub fn new() -> Self {
        Self {
            slots: smallvec::smallvec![0; F::slots()],
            _field: PhantomData,
        }
    }

    /// Marks `field` present and stores `value` in its slot.
    pub fn with(mut self, field: F, value: i32) -> Self {
        self.set_mask(field);
        self.slots[field.index()] = value;
        self
    }

    /// Marks `field` present without touching its slot, for out-of-band values.
    pub fn flag(mut self, field: F) -> Self {
        self.set_mask(field);
        self
    }

    /// The encoded buffer.
    pub fn as_slice(&self) -> &[i32] {
        &self.slots
    }

    fn set_mask(&mut self, field: F) {
        let mask = self.slots[0].cast_unsigned() | field.mask();
        self.slots[0] = mask.cast_signed();
    }
}

impl<F: Field> Default for Record<F> {
    fn default() -> Self {
        Self::new()
    }
}

// Copyright 2021 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font descriptions and face selection.
//!
//! Face selection is a collaborator: the builder hands a [`FontDescription`] to a
//! [`FontSelector`] once per style change and stores the returned [`FontHandle`]. [`FontCache`]
//! is an in-memory selector suitable for sharing between builders on different threads.

mod cache;
mod matching;

pub use cache::{FaceInfo, FontCache};

use alloc::sync::Arc;
use alloc::vec::Vec;

use text_primitives::{FontStyle, FontWeight, Script};

/// The size used for the document default style.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Inline progression direction of glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontOrientation {
    /// Horizontal text.
    #[default]
    Horizontal,
    /// Vertical text.
    Vertical,
}

/// Orientation of glyphs from non-CJK scripts in vertical text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NonCjkGlyphOrientation {
    /// Rotated 90° clockwise.
    #[default]
    VerticalRight,
    /// Kept upright.
    Upright,
}

/// Everything face selection depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescription {
    pub(crate) family: Option<Arc<str>>,
    pub(crate) weight: FontWeight,
    pub(crate) style: FontStyle,
    pub(crate) specified_size: f64,
    pub(crate) computed_size: f64,
    pub(crate) is_absolute_size: bool,
    pub(crate) letter_spacing: f64,
    pub(crate) word_spacing: f64,
    pub(crate) script: Script,
    pub(crate) orientation: FontOrientation,
    pub(crate) non_cjk_glyph_orientation: NonCjkGlyphOrientation,
}

impl Default for FontDescription {
    fn default() -> Self {
        Self {
            family: None,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
            specified_size: DEFAULT_FONT_SIZE,
            computed_size: DEFAULT_FONT_SIZE,
            is_absolute_size: false,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            script: Script::COMMON,
            orientation: FontOrientation::Horizontal,
            non_cjk_glyph_orientation: NonCjkGlyphOrientation::VerticalRight,
        }
    }
}

impl FontDescription {
    /// Family name, or `None` for the platform default family.
    #[inline]
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Weight.
    #[inline]
    pub const fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Style.
    #[inline]
    pub const fn style(&self) -> FontStyle {
        self.style
    }

    /// The size as requested by the caller.
    #[inline]
    pub const fn specified_size(&self) -> f64 {
        self.specified_size
    }

    /// The size used for layout; zero when the requested size is degenerate.
    #[inline]
    pub const fn computed_size(&self) -> f64 {
        self.computed_size
    }

    /// Whether the size was given in absolute units rather than inherited from the defaults.
    #[inline]
    pub const fn is_absolute_size(&self) -> bool {
        self.is_absolute_size
    }

    /// Extra space between letters.
    #[inline]
    pub const fn letter_spacing(&self) -> f64 {
        self.letter_spacing
    }

    /// Extra space between words.
    #[inline]
    pub const fn word_spacing(&self) -> f64 {
        self.word_spacing
    }

    /// The script faces are preferred for.
    #[inline]
    pub const fn script(&self) -> Script {
        self.script
    }

    /// Glyph orientation.
    #[inline]
    pub const fn orientation(&self) -> FontOrientation {
        self.orientation
    }

    /// Orientation of non-CJK glyphs in vertical text.
    #[inline]
    pub const fn non_cjk_glyph_orientation(&self) -> NonCjkGlyphOrientation {
        self.non_cjk_glyph_orientation
    }

    /// Returns a description with the family set; an empty name selects the default family.
    pub fn with_family(mut self, family: &str) -> Self {
        self.family = (!family.is_empty()).then(|| Arc::from(family));
        self
    }

    /// Returns a description with the weight set.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns a description with the style set.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns a description with an absolute size set.
    pub fn with_size(mut self, size: f64) -> Self {
        self.set_absolute_size(size);
        self
    }

    /// Stores `size` as specified and derives the computed size.
    ///
    /// Sizes below `f32::EPSILON`, and NaN, compute to zero so that layout never sees a
    /// degenerate size. The specified size keeps the caller's value.
    pub(crate) fn set_size(&mut self, size: f64, is_absolute: bool) {
        self.specified_size = size;
        self.is_absolute_size = is_absolute;
        self.computed_size = if size.is_nan() || size < f64::from(f32::EPSILON) {
            0.0
        } else {
            size
        };
    }

    pub(crate) fn set_absolute_size(&mut self, size: f64) {
        self.set_size(size, true);
    }
}

/// Identifier of a face within a [`FontSelector`]'s collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct FaceId(pub u32);

/// A selected face.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontHandle {
    family: Option<Arc<str>>,
    face: FaceId,
    is_fallback: bool,
}

impl FontHandle {
    /// A handle to a face that matched its description.
    pub fn new(family: Option<Arc<str>>, face: FaceId) -> Self {
        Self {
            family,
            face,
            is_fallback: false,
        }
    }

    /// A handle to the default face of `family`, used when selection finds nothing.
    pub fn family_default(family: Option<&str>) -> Self {
        Self {
            family: family.map(Arc::from),
            face: FaceId::default(),
            is_fallback: true,
        }
    }

    /// Family of the face, or `None` for the platform default family.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Face identifier.
    pub fn face(&self) -> FaceId {
        self.face
    }

    /// Whether this handle stands in for a face selection that found nothing.
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }
}

/// Turns font descriptions into faces.
///
/// Implementations are expected to be cheap for repeated descriptions; the builder calls
/// [`resolve`](Self::resolve) once for every style change that touches the font.
pub trait FontSelector {
    /// Selects a face for `description`, or `None` if no face could be found.
    fn resolve(&self, description: &FontDescription) -> Option<FontHandle>;
}

impl<T: FontSelector + ?Sized> FontSelector for &T {
    fn resolve(&self, description: &FontDescription) -> Option<FontHandle> {
        (**self).resolve(description)
    }
}

impl<T: FontSelector + ?Sized> FontSelector for Arc<T> {
    fn resolve(&self, description: &FontDescription) -> Option<FontHandle> {
        (**self).resolve(description)
    }
}

/// A selector that knows no faces, so every description falls back to its family default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFonts;

impl FontSelector for NoFonts {
    fn resolve(&self, _: &FontDescription) -> Option<FontHandle> {
        None
    }
}

/// Resolves `description`, falling back to the family default face on a miss.
pub(crate) fn resync(description: &FontDescription, fonts: &dyn FontSelector) -> FontHandle {
    fonts.resolve(description).unwrap_or_else(|| {
        log::warn!(
            "no face for family {:?} weight {} style {}; using the family default",
            description.family(),
            description.weight(),
            description.style(),
        );
        FontHandle::family_default(description.family())
    })
}

/// Family names in a comma separated list, trimmed and without quotes.
pub(crate) fn split_family_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(|name| name.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|name| !name.is_empty())
        .collect()
}

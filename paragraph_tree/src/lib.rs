// Copyright 2021 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled text trees.
//!
//! A [`TreeBuilder`] turns a linear sequence of push/pop/text calls into an immutable
//! [`Paragraph`]: a root holding the document defaults, nested spans that scope styles, and text
//! runs at the leaves. Every node carries a fully resolved [`ComputedStyle`], computed by copying
//! the parent's style and applying only the fields a style change names.
//!
//! Style changes usually arrive as compact attribute records (see [`codec`]): an `i32` buffer
//! whose first slot is a bit mask of the fields that follow. String and floating-point values
//! travel next to the record. Typed [`diff`]s can be pushed directly too.
//!
//! Face selection is delegated to a [`FontSelector`]. It runs once for every style change that
//! touches the font; a miss falls back to the family's default face.
//!
//! ## Example
//!
//! ```
//! use paragraph_tree::codec::{TextField, TextStyleRecord};
//! use paragraph_tree::font::NoFonts;
//! use paragraph_tree::{NodeKind, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new(&NoFonts);
//! let red = TextStyleRecord::new().with(TextField::Color, 0xFFFF_0000_u32.cast_signed());
//! builder.push_style(red.as_slice(), "", 0.0, 0.0, 0.0, 0.0).unwrap();
//! builder.add_text("hi");
//! builder.pop();
//! let paragraph = builder.build(&[0; 8], "", 0.0, 0.0).unwrap();
//!
//! let run = paragraph.text_runs().next().unwrap();
//! assert_eq!(run.text(), Some("hi"));
//! assert_eq!(run.style().color().r, 255);
//! assert_eq!(run.parent().unwrap().kind(), NodeKind::Span);
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub use peniko;
pub use text_primitives;

mod builder;
mod error;
mod teardown;
mod tree;

pub mod codec;
pub mod diff;
pub mod font;
pub mod locale;
pub mod resolve;
pub mod style;

#[cfg(test)]
mod tests;

pub use builder::{BuilderOptions, TreeBuilder};
pub use error::BuilderError;
pub use font::{FontCache, FontSelector};
pub use style::ComputedStyle;
pub use teardown::TeardownQueue;
pub use tree::{Descendants, FlattenedParagraph, NodeId, NodeKind, NodeRef, Paragraph, StyleRun};

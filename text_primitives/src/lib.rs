// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental text property types.
//!
//! This crate is the small, `no_std` vocabulary layer used by `paragraph_tree`: font weights and
//! slopes, ISO 15924 scripts, paragraph alignment and baselines, and text decorations.
//!
//! None of these types know about any wire format. Mapping raw integers onto them is the job of
//! the attribute codec in `paragraph_tree`.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use text_primitives::{FontWeight, Script, TextDecoration};
//!
//! assert_eq!(FontWeight::from_index(6), Some(FontWeight::BOLD));
//!
//! let script = Script::parse("cyrl").unwrap();
//! assert_eq!(script.as_str(), "Cyrl");
//!
//! let lines = TextDecoration::UNDERLINE | TextDecoration::LINE_THROUGH;
//! assert!(lines.contains(TextDecoration::UNDERLINE));
//! assert!(!lines.contains(TextDecoration::OVERLINE));
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
#![no_std]

mod decoration;
mod font;
mod script;
mod text;

pub use decoration::{DecorationLine, DecorationLines, TextDecoration, TextDecorationStyle};
pub use font::{FontStyle, FontWeight};
pub use script::{ParseScriptError, Script};
pub use text::{TextAlign, TextBaseline};

// Copyright 2021 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening a tree into text and style runs for layout.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use super::{NodeId, Paragraph};
use crate::style::ComputedStyle;

/// A range of text sharing one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRun {
    /// Index into [`FlattenedParagraph::styles`].
    pub style_index: usize,
    /// Byte range into [`FlattenedParagraph::text`].
    pub range: Range<usize>,
}

/// Text and style runs of a whole paragraph, in document order.
#[derive(Clone, Debug, Default)]
pub struct FlattenedParagraph {
    /// Concatenated text of every run.
    pub text: String,
    /// One entry per span that contributed text.
    pub styles: Vec<Arc<ComputedStyle>>,
    /// Runs covering all of `text`, without gaps.
    pub runs: Vec<StyleRun>,
}

impl Paragraph {
    /// Flattens the tree for layout.
    ///
    /// Text runs of the same span share a style entry. Empty runs contribute nothing, and
    /// adjacent runs with the same style are merged.
    pub fn flatten(&self) -> FlattenedParagraph {
        let mut out = FlattenedParagraph::default();
        let mut style_ids: Vec<Option<usize>> = vec![None; self.nodes.len()];

        for run in self.text_runs() {
            let text = run.text().unwrap_or_default();
            if text.is_empty() {
                continue;
            }
            let span = run.node().parent.unwrap_or(NodeId::ROOT);
            let style_index = match style_ids[span.0] {
                Some(index) => index,
                None => {
                    let index = out.styles.len();
                    out.styles.push(Arc::clone(&self.nodes[span.0].style));
                    style_ids[span.0] = Some(index);
                    index
                }
            };
            let range = out.text.len()..(out.text.len() + text.len());
            out.text.push_str(text);
            match out.runs.last_mut() {
                Some(last) if last.style_index == style_index => last.range.end = range.end,
                _ => out.runs.push(StyleRun { style_index, range }),
            }
        }
        out
    }
}

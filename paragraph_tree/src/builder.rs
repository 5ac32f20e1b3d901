// Copyright 2021 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder for styled text trees.

use alloc::string::String;

use crate::diff::{ParagraphStyleDiff, TextStyleDiff};
use crate::font::{FontSelector, DEFAULT_FONT_SIZE};
use crate::resolve::{document_style, resolve_paragraph_style, resolve_text_style};
use crate::tree::{NodeId, Paragraph};
use crate::{teardown, BuilderError};

/// Document defaults for a new tree.
#[derive(Clone, Debug, PartialEq)]
pub struct BuilderOptions {
    /// Locale the default script is derived from.
    pub locale: Option<String>,
    /// Default font size.
    pub font_size: f64,
    /// Default font family; `None` leaves the choice to the font selector.
    pub font_family: Option<String>,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            locale: None,
            font_size: DEFAULT_FONT_SIZE,
            font_family: None,
        }
    }
}

/// Builder for constructing a [`Paragraph`] from a stack-disciplined sequence of calls.
///
/// The builder starts with its cursor in an empty top-level span under the root. Pushing a style
/// appends a span to the cursor and moves the cursor into it; popping moves the cursor back to
/// the parent. Popping the top-level span leaves the builder without a cursor, after which
/// pushes, pops and text are ignored.
///
/// Dropping a builder without calling [`build`](Self::build) hands the partial tree to a
/// background thread for destruction.
#[must_use]
pub struct TreeBuilder<'a> {
    fonts: &'a dyn FontSelector,
    tree: Option<Paragraph>,
    cursor: Option<NodeId>,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a builder with the default document style.
    pub fn new(fonts: &'a dyn FontSelector) -> Self {
        Self::with_options(fonts, &BuilderOptions::default())
    }

    /// Creates a builder whose document style is derived from `options`.
    pub fn with_options(fonts: &'a dyn FontSelector, options: &BuilderOptions) -> Self {
        let root_style = document_style(options, fonts);
        Self {
            fonts,
            tree: Some(Paragraph::new(root_style)),
            cursor: Some(NodeId::TOP_SPAN),
        }
    }

    /// Decodes a text style record and pushes a span styled by it.
    ///
    /// The out-of-band values are only read when their mask bit is set. On error the builder is
    /// left untouched.
    pub fn push_style(
        &mut self,
        record: &[i32],
        font_family: &str,
        font_size: f64,
        letter_spacing: f64,
        word_spacing: f64,
        height: f64,
    ) -> Result<(), BuilderError> {
        let diff = TextStyleDiff::decode(
            record,
            font_family,
            font_size,
            letter_spacing,
            word_spacing,
            height,
        )?;
        self.push_style_diff(&diff);
        Ok(())
    }

    /// Pushes a span whose style is the cursor's style with `diff` applied.
    pub fn push_style_diff(&mut self, diff: &TextStyleDiff) {
        let (Some(tree), Some(cursor)) = (self.tree.as_mut(), self.cursor) else {
            log::trace!("push_style without a cursor ignored");
            return;
        };
        let style = resolve_text_style(tree.style_of(cursor), diff, self.fonts);
        self.cursor = Some(tree.push_span(cursor, style));
    }

    /// Moves the cursor to the parent span.
    ///
    /// Popping the top-level span clears the cursor.
    pub fn pop(&mut self) {
        let (Some(tree), Some(cursor)) = (self.tree.as_ref(), self.cursor) else {
            log::trace!("pop without a cursor ignored");
            return;
        };
        self.cursor = tree.parent_of(cursor).filter(|&parent| parent != NodeId::ROOT);
    }

    /// Appends a text run styled like the cursor's span.
    pub fn add_text(&mut self, text: &str) {
        let (Some(tree), Some(cursor)) = (self.tree.as_mut(), self.cursor) else {
            log::trace!("add_text without a cursor ignored");
            return;
        };
        tree.push_text(cursor, text);
    }

    /// Decodes a paragraph style record, applies it to the root and hands out the tree.
    ///
    /// Nodes created before this call keep the styles they were resolved against. After a
    /// successful build every other call is a no-op and building again fails with
    /// [`BuilderError::AlreadyBuilt`].
    pub fn build(
        &mut self,
        record: &[i32],
        font_family: &str,
        font_size: f64,
        line_height: f64,
    ) -> Result<Paragraph, BuilderError> {
        if self.tree.is_none() {
            return Err(BuilderError::AlreadyBuilt);
        }
        let diff = ParagraphStyleDiff::decode(record, font_family, font_size, line_height)?;
        self.build_with_diff(&diff)
    }

    /// Applies `diff` to the root and hands out the tree.
    pub fn build_with_diff(
        &mut self,
        diff: &ParagraphStyleDiff,
    ) -> Result<Paragraph, BuilderError> {
        let mut tree = self.tree.take().ok_or(BuilderError::AlreadyBuilt)?;
        self.cursor = None;
        if !diff.is_empty() {
            let style = resolve_paragraph_style(tree.style_of(NodeId::ROOT), diff, self.fonts);
            tree.set_root_style(style);
        }
        log::debug!("built paragraph tree with {} nodes", tree.node_count());
        Ok(tree)
    }

    /// Whether the tree has been handed out.
    pub fn is_finished(&self) -> bool {
        self.tree.is_none()
    }

    /// The node new spans and text are appended to.
    pub fn cursor(&self) -> Option<NodeId> {
        self.cursor
    }

    /// Number of pushed spans enclosing the cursor, or `None` without a cursor.
    pub fn cursor_depth(&self) -> Option<usize> {
        let tree = self.tree.as_ref()?;
        let cursor = tree.node(self.cursor?)?;
        // The top-level span sits at depth 1.
        Some(cursor.depth().saturating_sub(1))
    }
}

impl Drop for TreeBuilder<'_> {
    fn drop(&mut self) {
        if let Some(tree) = self.tree.take() {
            teardown::discard(tree);
        }
    }
}

impl core::fmt::Debug for TreeBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TreeBuilder")
            .field("tree", &self.tree)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

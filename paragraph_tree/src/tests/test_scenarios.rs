// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end builder sequences and the trees they produce.

use super::utils::{color_record, empty_paragraph_record, BLUE, RED};
use crate::codec::{ParagraphField, ParagraphStyleRecord};
use crate::font::NoFonts;
use crate::style::{color_from_argb, BLACK};
use crate::{NodeId, NodeKind, Paragraph, TreeBuilder};
use text_primitives::TextAlign;

fn push_color(builder: &mut TreeBuilder<'_>, argb: u32) {
    builder
        .push_style(color_record(argb).as_slice(), "", 0.0, 0.0, 0.0, 0.0)
        .unwrap();
}

fn build(mut builder: TreeBuilder<'_>) -> Paragraph {
    builder
        .build(empty_paragraph_record().as_slice(), "", 0.0, 0.0)
        .unwrap()
}

/// Depth of the deepest span below the top-level span.
fn span_depth(paragraph: &Paragraph) -> usize {
    paragraph
        .descendants()
        .filter(|node| node.kind() == NodeKind::Span)
        .map(|node| node.depth() - 1)
        .max()
        .unwrap_or(0)
}

#[test]
fn red_span_over_default_root() {
    let mut builder = TreeBuilder::new(&NoFonts);
    push_color(&mut builder, RED);
    builder.add_text("hi");
    builder.pop();
    let paragraph = build(builder);

    let root = paragraph.root();
    assert_eq!(root.kind(), NodeKind::Root);
    assert_eq!(root.style().color(), BLACK);
    assert_eq!(root.style().font().computed_size(), 14.0);

    let top: Vec<_> = root.children().collect();
    assert_eq!(top.len(), 1, "root has only the top-level span");
    let spans: Vec<_> = top[0].children().collect();
    assert_eq!(spans.len(), 1);
    let red = spans[0];
    assert_eq!(red.kind(), NodeKind::Span);
    assert_eq!(red.style().color(), color_from_argb(RED));
    assert_eq!(red.style().font().computed_size(), 14.0);

    let runs: Vec<_> = red.children().collect();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].kind(), NodeKind::TextRun);
    assert_eq!(runs[0].text(), Some("hi"));
    assert_eq!(runs[0].style().color(), color_from_argb(RED));
    assert!(runs[0].shares_style_with(&red));
}

#[test]
fn over_popping_discards_later_text() {
    let mut builder = TreeBuilder::new(&NoFonts);
    builder.pop();
    builder.pop();
    builder.add_text("x");
    push_color(&mut builder, RED);
    assert_eq!(builder.cursor(), None);
    let paragraph = build(builder);

    assert_eq!(paragraph.text_runs().count(), 0);
    assert_eq!(paragraph.node_count(), 2);
    let top = paragraph.node(NodeId::TOP_SPAN).unwrap();
    assert_eq!(top.children().len(), 0);
}

#[test]
fn depth_tracks_pushes_minus_pops() {
    for (pushes, pops) in [(0, 0), (1, 0), (3, 1), (4, 4), (5, 2)] {
        let mut builder = TreeBuilder::new(&NoFonts);
        for _ in 0..pushes {
            push_color(&mut builder, RED);
        }
        for _ in 0..pops {
            builder.pop();
        }
        let remaining = pushes - pops;
        assert_eq!(builder.cursor_depth(), Some(remaining), "{pushes} - {pops}");

        for _ in 0..remaining {
            builder.pop();
        }
        assert_eq!(builder.cursor_depth(), Some(0), "back at the top-level span");
        builder.pop();
        assert_eq!(builder.cursor_depth(), None, "cursor cleared");
        builder.pop();

        let paragraph = build(builder);
        assert_eq!(span_depth(&paragraph), pushes);
    }
}

#[test]
fn siblings_resolve_against_the_same_parent() {
    let mut builder = TreeBuilder::new(&NoFonts);
    push_color(&mut builder, RED);
    builder.add_text("a");
    push_color(&mut builder, BLUE);
    builder.add_text("b");
    builder.pop();
    builder.add_text("c");
    builder.pop();
    builder.add_text("d");
    let paragraph = build(builder);

    let colors: Vec<_> = paragraph
        .text_runs()
        .map(|run| (run.text().unwrap(), run.style().color()))
        .collect();
    assert_eq!(
        colors,
        [
            ("a", color_from_argb(RED)),
            ("b", color_from_argb(BLUE)),
            ("c", color_from_argb(RED)),
            ("d", BLACK),
        ]
    );
    assert_eq!(paragraph.text(), "abcd");

    let flat = paragraph.flatten();
    assert_eq!(flat.text, "abcd");
    assert_eq!(flat.styles.len(), 3);
    let indices: Vec<_> = flat.runs.iter().map(|run| run.style_index).collect();
    assert_eq!(indices, [0, 1, 0, 2]);
}

#[test]
fn paragraph_style_is_not_cascaded_into_existing_nodes() {
    let mut builder = TreeBuilder::new(&NoFonts);
    builder.add_text("before");
    let record = ParagraphStyleRecord::new()
        .with(ParagraphField::TextAlign, 2)
        .flag(ParagraphField::FontSize);
    let paragraph = builder.build(record.as_slice(), "", 30.0, 0.0).unwrap();

    let root = paragraph.root();
    assert_eq!(root.style().text_align(), TextAlign::Center);
    assert_eq!(root.style().font().computed_size(), 30.0);

    let run = paragraph.text_runs().next().unwrap();
    assert_eq!(run.style().text_align(), TextAlign::Start);
    assert_eq!(run.style().font().computed_size(), 14.0);
    assert!(!run.shares_style_with(&root));
}

#[test]
fn zero_mask_build_keeps_document_defaults() {
    let builder = TreeBuilder::new(&NoFonts);
    let paragraph = build(builder);
    let root = paragraph.root();
    let top = paragraph.node(NodeId::TOP_SPAN).unwrap();
    assert!(root.shares_style_with(&top));
    assert_eq!(root.style().color(), BLACK);
}

#[test]
fn empty_text_still_creates_a_run() {
    let mut builder = TreeBuilder::new(&NoFonts);
    builder.add_text("");
    let paragraph = build(builder);
    let runs: Vec<_> = paragraph.text_runs().collect();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text(), Some(""));
    assert!(paragraph.flatten().runs.is_empty());
}

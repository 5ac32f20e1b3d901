// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Face matching within a family, following the CSS font matching algorithm for style and
//! weight.

use text_primitives::{FontStyle, FontWeight};

use super::FaceInfo;

/// Returns the index of the best face in `set` for `style` and `weight`.
pub(crate) fn match_face(set: &[FaceInfo], style: FontStyle, weight: FontWeight) -> Option<usize> {
    match set.len() {
        0 => return None,
        1 => return Some(0),
        _ => {}
    }
    // font-style is tried first: the requested slope, then the other one.
    let use_style = if set.iter().any(|f| f.style == style) {
        style
    } else {
        set[0].style
    };
    let candidates = || {
        set.iter()
            .enumerate()
            .filter(move |(_, f)| f.style == use_style)
    };
    let target = weight.value();
    if let Some((index, _)) = candidates().find(|(_, f)| f.weight.value() == target) {
        return Some(index);
    }
    let lighter = || {
        candidates()
            .filter(|(_, f)| f.weight.value() < target)
            .max_by_key(|(_, f)| f.weight)
    };
    let heavier = || {
        candidates()
            .filter(|(_, f)| f.weight.value() > target)
            .min_by_key(|(_, f)| f.weight)
    };
    let found = if (400..=500).contains(&target) {
        // Weights between the target and 500 in ascending order, then lighter weights in
        // descending order, then weights above 500 in ascending order.
        candidates()
            .filter(|(_, f)| f.weight.value() > target && f.weight.value() <= 500)
            .min_by_key(|(_, f)| f.weight)
            .or_else(lighter)
            .or_else(heavier)
    } else if target < 400 {
        lighter().or_else(heavier)
    } else {
        heavier().or_else(lighter)
    };
    found.map(|(index, _)| index)
}

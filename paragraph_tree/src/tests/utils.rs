// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::{Cell, RefCell};

use crate::codec::{ParagraphStyleRecord, TextField, TextStyleRecord};
use crate::font::{FaceId, FontDescription, FontHandle, FontSelector};

/// A selector that records every description it is asked about.
#[derive(Debug, Default)]
pub(crate) struct CountingSelector {
    calls: Cell<usize>,
    seen: RefCell<Vec<FontDescription>>,
    known_family: Option<&'static str>,
}

impl CountingSelector {
    pub(crate) fn knowing(family: &'static str) -> Self {
        Self {
            known_family: Some(family),
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn last_seen(&self) -> Option<FontDescription> {
        self.seen.borrow().last().cloned()
    }

    pub(crate) fn reset(&self) {
        self.calls.set(0);
        self.seen.borrow_mut().clear();
    }
}

impl FontSelector for CountingSelector {
    fn resolve(&self, description: &FontDescription) -> Option<FontHandle> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(description.clone());
        let family = description.family()?;
        (Some(family) == self.known_family).then(|| FontHandle::new(Some(family.into()), FaceId(7)))
    }
}

pub(crate) const RED: u32 = 0xFFFF_0000;
pub(crate) const BLUE: u32 = 0xFF00_00FF;

pub(crate) fn color_record(argb: u32) -> TextStyleRecord {
    TextStyleRecord::new().with(TextField::Color, argb.cast_signed())
}

pub(crate) fn empty_paragraph_record() -> ParagraphStyleRecord {
    ParagraphStyleRecord::new()
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::codec::RecordKind;

/// Errors reported by [`TreeBuilder`](crate::TreeBuilder).
///
/// Every variant describes a caller-contract violation. Cursor underflow is not an error: excess
/// pops followed by pushes or text are defined no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BuilderError {
    /// The attribute record has fewer slots than its layout defines.
    #[error("{kind} record has {len} slots, expected at least {required}")]
    RecordTooShort {
        /// The layout the record was decoded against.
        kind: RecordKind,
        /// The number of slots provided, mask included.
        len: usize,
        /// The number of slots the layout requires, mask included.
        required: usize,
    },

    /// The mask sets bits that do not correspond to any field of the layout.
    #[error("{kind} mask {mask:#x} sets undefined bits {undefined:#x}")]
    UndefinedBits {
        /// The layout the record was decoded against.
        kind: RecordKind,
        /// The full mask as provided.
        mask: u32,
        /// The subset of `mask` that is not defined by the layout.
        undefined: u32,
    },

    /// A field value is outside the range of its enumeration.
    #[error("{field} value {value} is out of range")]
    InvalidValue {
        /// The name of the offending field.
        field: &'static str,
        /// The raw value found in the record.
        value: i32,
    },

    /// [`build`](crate::TreeBuilder::build) was called after the tree was already handed out.
    #[error("paragraph tree has already been built")]
    AlreadyBuilt,
}

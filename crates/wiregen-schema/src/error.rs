// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 wiregen contributors

use thiserror::Error;

/// Fatal extraction failures.
///
/// Only configuration errors abort extraction, and only for the struct
/// being processed; merely malformed attributes (too few arguments,
/// unrecognized operator tokens, under-specified framing) degrade to
/// defaults instead and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Fixed-size framing argument was not a valid non-negative integer.
    #[error("field `{field}`: invalid fixed array length `{raw}` in #[wire_array]")]
    InvalidFixedLength { field: String, raw: String },

    /// Input item was not a struct.
    #[error("`{name}` is not a struct; only structs can be serialized")]
    NotAStruct { name: String },

    /// Struct has tuple or unit fields.
    #[error("struct `{name}` must have named fields")]
    UnnamedFields { name: String },

    /// Field has no identifier.
    #[error("unnamed fields cannot be serialized")]
    UnnamedField,
}

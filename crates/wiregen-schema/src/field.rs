// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 wiregen contributors

//! Field name and type-spelling extraction.

use quote::ToTokens;
use syn::{Field, Type};

use crate::attrs::compact_tokens;
use crate::error::ExtractError;
use crate::schema::FieldDescriptor;

/// Fixed-width built-in types usable on the wire, matching the set the
/// framing parser accepts as inline length types.
pub(crate) const PRIMITIVE_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64", "bool",
];

pub(crate) fn is_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&name)
}

/// Build the descriptor for one field declaration.
///
/// Fails only for an unnamed (tuple) field, which pre-filtered input never
/// contains.
pub fn field_descriptor(field: &Field) -> Result<FieldDescriptor, ExtractError> {
    let name = field
        .ident
        .as_ref()
        .ok_or(ExtractError::UnnamedField)?
        .to_string();

    Ok(FieldDescriptor {
        name,
        type_name: type_spelling(&field.ty),
    })
}

/// Normalized type spelling: primitive keyword, bracketed array spelling,
/// or the declared type's compacted token text verbatim.
pub fn type_spelling(ty: &Type) -> String {
    match ty {
        Type::Path(path) if path.qself.is_none() => {
            if let Some(ident) = path.path.get_ident() {
                let name = ident.to_string();
                if is_primitive(&name) {
                    return name;
                }
            }
            compact_tokens(&ty.to_token_stream())
        }
        Type::Array(array) => format!(
            "[{}; {}]",
            type_spelling(&array.elem),
            compact_tokens(&array.len.to_token_stream())
        ),
        Type::Slice(slice) => format!("[{}]", type_spelling(&slice.elem)),
        other => compact_tokens(&other.to_token_stream()),
    }
}

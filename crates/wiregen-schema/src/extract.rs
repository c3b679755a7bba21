// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 wiregen contributors

//! Schema assembly: one record per serializable field, in declaration order.

use syn::{Data, DeriveInput, Field, Fields, FieldsNamed, Visibility};

use crate::cond::extract_conditional_rules;
use crate::error::ExtractError;
use crate::field::field_descriptor;
use crate::framing::extract_array_framing;
use crate::schema::{FieldSchema, Schema};

/// Filter a struct's fields down to the serializable ones: only `pub`
/// fields take part in the wire format.
pub fn serializable_fields(fields: &FieldsNamed) -> Vec<&Field> {
    fields
        .named
        .iter()
        .filter(|field| matches!(field.vis, Visibility::Public(_)))
        .collect()
}

/// Extract the wire schema of one struct definition.
///
/// Accepts structs with named fields only. The first fatal per-field
/// failure aborts this struct's extraction; no partial schema is returned.
/// Callers processing a batch of structs keep going with the rest.
pub fn extract_schema(input: &DeriveInput) -> Result<Schema, ExtractError> {
    let name = input.ident.to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named,
            _ => return Err(ExtractError::UnnamedFields { name }),
        },
        _ => return Err(ExtractError::NotAStruct { name }),
    };

    let mut records = Vec::new();
    for field in serializable_fields(fields) {
        let descriptor = field_descriptor(field)?;
        let rules = extract_conditional_rules(field);
        let framing = extract_array_framing(field)?;

        log::trace!(
            "[wiregen] {}::{}: {} rule(s), framing {:?}",
            name,
            descriptor.name,
            rules.len(),
            framing
        );

        records.push(FieldSchema {
            descriptor,
            rules,
            framing,
        });
    }

    Ok(Schema {
        name,
        fields: records,
    })
}

impl Schema {
    /// Convenience wrapper around [`extract_schema`].
    pub fn extract(input: &DeriveInput) -> Result<Self, ExtractError> {
        extract_schema(input)
    }
}

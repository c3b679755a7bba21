// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 wiregen contributors

//! End-to-end extraction scenarios over whole struct definitions.

use syn::parse_quote;
use wiregen_schema::{extract_schema, ArrayFraming, CompareOp, ExtractError, Schema};

#[test]
fn sequence_framed_by_sibling_field() {
    let input: syn::DeriveInput = parse_quote! {
        pub struct Inventory {
            pub count: u16,
            #[wire_array(field(count))]
            pub items: Vec<i32>,
        }
    };

    let schema = extract_schema(&input).unwrap();
    let items = &schema.fields[1];
    assert_eq!(items.descriptor.name, "items");
    assert_eq!(items.descriptor.type_name, "Vec<i32>");
    assert_eq!(
        items.framing,
        ArrayFraming::RefField {
            key: "count".to_string()
        }
    );
}

#[test]
fn two_conditional_gates_on_one_field() {
    let input: syn::DeriveInput = parse_quote! {
        pub struct Message {
            pub mode: u8,
            pub flag: u8,
            #[wire_if(mode, CompareOp::Equal, "A", "B")]
            #[wire_if(flag, CompareOp::NotEqual, "0")]
            pub payload: u32,
        }
    };

    let schema = extract_schema(&input).unwrap();
    let rules = &schema.fields[2].rules;
    assert_eq!(rules.len(), 2);

    assert_eq!(rules[0].key, "mode");
    assert_eq!(rules[0].op, CompareOp::Equal);
    assert_eq!(rules[0].values, vec!["A", "B"]);
    assert_eq!(rules[0].condition_expr(), "(mode == A || mode == B)");

    assert_eq!(rules[1].key, "flag");
    assert_eq!(rules[1].op, CompareOp::NotEqual);
    assert_eq!(rules[1].values, vec!["0"]);
    assert_eq!(rules[1].condition_expr(), "(flag != 0)");
}

#[test]
fn all_three_framing_modes_in_one_struct() {
    let input: syn::DeriveInput = parse_quote! {
        pub struct Mixed {
            pub count: u8,
            #[wire_array(field(count))]
            pub by_ref: Vec<u8>,
            #[wire_array(u32)]
            pub by_type: Vec<u8>,
            #[wire_array(8)]
            pub by_size: Vec<u8>,
            pub trailer: u16,
        }
    };

    let schema = extract_schema(&input).unwrap();
    assert_eq!(schema.fields[0].framing, ArrayFraming::None);
    assert_eq!(
        schema.fields[1].framing,
        ArrayFraming::RefField {
            key: "count".to_string()
        }
    );
    assert_eq!(
        schema.fields[2].framing,
        ArrayFraming::LengthType {
            ty: "u32".to_string()
        }
    );
    assert_eq!(schema.fields[3].framing, ArrayFraming::FixedSize { len: 8 });
    assert_eq!(schema.fields[4].framing, ArrayFraming::None);
}

#[test]
fn under_specified_framing_is_surfaced_not_defaulted() {
    let input: syn::DeriveInput = parse_quote! {
        pub struct Odd {
            #[wire_array]
            pub a: Vec<u8>,
            #[wire_array(field(n), 3)]
            pub b: Vec<u8>,
        }
    };

    let schema = extract_schema(&input).unwrap();
    assert_eq!(schema.fields[0].framing, ArrayFraming::Unspecified);
    assert_eq!(schema.fields[1].framing, ArrayFraming::Unspecified);
    assert!(schema.fields[0].framing.is_array());
}

#[test]
fn invalid_fixed_length_fails_this_struct_only() {
    let good: syn::DeriveInput = parse_quote! {
        pub struct Good {
            #[wire_array(4)]
            pub data: Vec<u8>,
        }
    };
    let bad: syn::DeriveInput = parse_quote! {
        pub struct Bad {
            #[wire_array("four")]
            pub data: Vec<u8>,
        }
    };

    // A batch keeps processing the remaining structs after one fails.
    let results: Vec<Result<Schema, ExtractError>> =
        [&bad, &good].iter().map(|i| extract_schema(i)).collect();

    let err = results[0].as_ref().unwrap_err();
    assert_eq!(
        *err,
        ExtractError::InvalidFixedLength {
            field: "data".to_string(),
            raw: "\"four\"".to_string(),
        }
    );
    assert!(results[1].is_ok());
}

#[test]
fn ordering_survives_mixed_attribute_counts() {
    let input: syn::DeriveInput = parse_quote! {
        pub struct Layout {
            pub a: u8,
            #[wire_if(a, 1)]
            #[wire_if(a, 2)]
            pub b: u8,
            pub c: u8,
            #[wire_array(u16)]
            pub d: Vec<u8>,
            pub e: u8,
        }
    };

    let schema = extract_schema(&input).unwrap();
    let names: Vec<&str> = schema
        .fields
        .iter()
        .map(|f| f.descriptor.name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn schema_is_detached_and_serializable() {
    let input: syn::DeriveInput = parse_quote! {
        pub struct Frame {
            pub kind: u8,
            #[wire_if(kind, 7)]
            #[wire_array(field(kind))]
            pub body: Vec<u8>,
        }
    };

    let schema = extract_schema(&input).unwrap();
    let json = serde_json::to_string_pretty(&schema).unwrap();
    let back: Schema = serde_json::from_str(&json).unwrap();
    assert_eq!(back, schema);
    assert_eq!(back.name, "Frame");
}

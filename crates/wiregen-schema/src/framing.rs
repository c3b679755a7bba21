// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 wiregen contributors

//! Array/sequence framing parsing for `#[wire_array(...)]`.

use quote::ToTokens;
use syn::{Field, Lit};

use crate::attrs::{attr_args, find_attr, AttrArg};
use crate::error::ExtractError;
use crate::field::is_primitive;
use crate::schema::ArrayFraming;

/// Marker attribute selecting how a sequence's length is encoded.
pub const ARRAY_ATTR: &str = "wire_array";

/// Parse the field's `#[wire_array(...)]` into a framing descriptor.
///
/// A single argument selects the mode by shape: `field(count)` stores the
/// length in a sibling field, an integer literal fixes the element count,
/// and a primitive type name encodes the length inline with that type.
/// A missing attribute is the cheap `ArrayFraming::None`; any other
/// argument count is the distinguishable `Unspecified` state. The only
/// fatal case is a literal that is not a valid non-negative integer.
pub fn extract_array_framing(field: &Field) -> Result<ArrayFraming, ExtractError> {
    let Some(attr) = find_attr(&field.attrs, ARRAY_ATTR) else {
        return Ok(ArrayFraming::None);
    };

    let args = attr_args(attr);
    if args.len() != 1 {
        log::debug!(
            "[wiregen] #[{ARRAY_ATTR}] on `{}` has {} argument(s), framing left unspecified",
            field_name(field),
            args.len()
        );
        return Ok(ArrayFraming::Unspecified);
    }

    match &args[0] {
        AttrArg::FieldRef(ident) => Ok(ArrayFraming::RefField {
            key: ident.to_string(),
        }),
        AttrArg::Lit(Lit::Int(lit)) => match lit.base10_parse::<u32>() {
            Ok(len) => Ok(ArrayFraming::FixedSize { len }),
            Err(_) => Err(ExtractError::InvalidFixedLength {
                field: field_name(field),
                raw: lit.to_token_stream().to_string(),
            }),
        },
        // Any non-integer literal here is a configuration error.
        AttrArg::Lit(lit) => Err(ExtractError::InvalidFixedLength {
            field: field_name(field),
            raw: lit.to_token_stream().to_string(),
        }),
        AttrArg::Ident(ident) if is_primitive(&ident.to_string()) => Ok(ArrayFraming::LengthType {
            ty: ident.to_string(),
        }),
        _ => Ok(ArrayFraming::Unspecified),
    }
}

fn field_name(field: &Field) -> String {
    field
        .ident
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn field_without_attribute_is_not_an_array() {
        let field: syn::Field = parse_quote! { pub x: u32 };
        assert_eq!(extract_array_framing(&field).unwrap(), ArrayFraming::None);
    }

    #[test]
    fn sibling_field_reference() {
        let field: syn::Field = parse_quote! {
            #[wire_array(field(count))]
            pub items: Vec<u16>
        };
        assert_eq!(
            extract_array_framing(&field).unwrap(),
            ArrayFraming::RefField {
                key: "count".to_string()
            }
        );
    }

    #[test]
    fn fixed_size_from_integer_literal() {
        let field: syn::Field = parse_quote! {
            #[wire_array(16)]
            pub items: Vec<u16>
        };
        assert_eq!(
            extract_array_framing(&field).unwrap(),
            ArrayFraming::FixedSize { len: 16 }
        );
    }

    #[test]
    fn zero_is_a_valid_fixed_size() {
        let field: syn::Field = parse_quote! {
            #[wire_array(0)]
            pub items: Vec<u8>
        };
        assert_eq!(
            extract_array_framing(&field).unwrap(),
            ArrayFraming::FixedSize { len: 0 }
        );
    }

    #[test]
    fn inline_length_type() {
        let field: syn::Field = parse_quote! {
            #[wire_array(u16)]
            pub items: Vec<u8>
        };
        assert_eq!(
            extract_array_framing(&field).unwrap(),
            ArrayFraming::LengthType {
                ty: "u16".to_string()
            }
        );
    }

    #[test]
    fn non_integer_literal_is_fatal() {
        let field: syn::Field = parse_quote! {
            #[wire_array("16")]
            pub items: Vec<u8>
        };
        let err = extract_array_framing(&field).unwrap_err();
        assert_eq!(
            err,
            ExtractError::InvalidFixedLength {
                field: "items".to_string(),
                raw: "\"16\"".to_string(),
            }
        );
    }

    #[test]
    fn error_carries_field_and_raw_text() {
        let field: syn::Field = parse_quote! {
            #[wire_array(1.5)]
            pub items: Vec<u8>
        };
        let msg = extract_array_framing(&field).unwrap_err().to_string();
        assert!(msg.contains("items"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn wrong_argument_count_is_unspecified() {
        let none: syn::Field = parse_quote! {
            #[wire_array]
            pub items: Vec<u8>
        };
        let two: syn::Field = parse_quote! {
            #[wire_array(field(count), 4)]
            pub items: Vec<u8>
        };
        assert_eq!(
            extract_array_framing(&none).unwrap(),
            ArrayFraming::Unspecified
        );
        assert_eq!(
            extract_array_framing(&two).unwrap(),
            ArrayFraming::Unspecified
        );
    }

    #[test]
    fn non_primitive_identifier_is_unspecified() {
        let field: syn::Field = parse_quote! {
            #[wire_array(Header)]
            pub items: Vec<u8>
        };
        assert_eq!(
            extract_array_framing(&field).unwrap(),
            ArrayFraming::Unspecified
        );
    }
}

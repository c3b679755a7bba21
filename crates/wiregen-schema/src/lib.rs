// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 wiregen contributors

//! Schema extraction core for the `wiregen` binary-serialization generator.
//!
//! Given a struct definition whose fields carry declarative marker
//! attributes, this crate derives a detached, in-memory [`Schema`]: which
//! fields are serialized, which conditional-inclusion rules gate them, and
//! how variable-length sequences frame their element count. The schema is
//! the contract consumed by a downstream code emitter; this crate performs
//! no code generation and no I/O.
//!
//! # Markers
//!
//! - `#[wire_if(key, CompareOp::Equal, "A", "B")]` — include the field only
//!   when `key` compares true against any of the listed values. Several
//!   `wire_if` attributes on one field are independent gates combined with
//!   logical AND by the emitter.
//! - `#[wire_array(field(count))]` / `#[wire_array(u16)]` /
//!   `#[wire_array(16)]` — frame a sequence's length via a sibling field,
//!   an inline fixed-width type, or a compile-time constant.
//!
//! # Example
//!
//! ```
//! use syn::parse_quote;
//! use wiregen_schema::{extract_schema, ArrayFraming};
//!
//! let input: syn::DeriveInput = parse_quote! {
//!     pub struct Packet {
//!         pub count: u8,
//!         #[wire_array(field(count))]
//!         pub items: Vec<u16>,
//!     }
//! };
//!
//! let schema = extract_schema(&input).unwrap();
//! assert_eq!(schema.fields.len(), 2);
//! assert_eq!(
//!     schema.fields[1].framing,
//!     ArrayFraming::RefField { key: "count".into() }
//! );
//! ```

pub mod attrs;
pub mod cond;
pub mod error;
pub mod extract;
pub mod field;
pub mod framing;
pub mod schema;

pub use attrs::{attr_args, classify, find_attr, find_attrs, AttrArg};
pub use cond::{extract_conditional_rules, IF_ATTR};
pub use error::ExtractError;
pub use extract::{extract_schema, serializable_fields};
pub use field::{field_descriptor, type_spelling};
pub use framing::{extract_array_framing, ARRAY_ATTR};
pub use schema::{
    ArrayFraming, CompareOp, ConditionalRule, FieldDescriptor, FieldSchema, Schema,
    UnknownCompareOp,
};

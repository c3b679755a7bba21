// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 wiregen contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FieldDescriptor
// ---------------------------------------------------------------------------

/// Name and normalized type spelling of one serialized field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field identifier, unique within the owning struct.
    pub name: String,
    /// Normalized type spelling: a primitive keyword (`u32`), an array
    /// spelling with element type and brackets (`[u8; 4]`), or the declared
    /// type's token text otherwise (`Vec<u16>`).
    pub type_name: String,
}

// ---------------------------------------------------------------------------
// CompareOp
// ---------------------------------------------------------------------------

/// Comparison operator of a conditional-inclusion rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    #[default]
    Equal,
    NotEqual,
}

impl CompareOp {
    /// Source-level operator symbol, for rendering conditions.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Equal => "==",
            CompareOp::NotEqual => "!=",
        }
    }
}

impl FromStr for CompareOp {
    type Err = UnknownCompareOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Equal" => Ok(CompareOp::Equal),
            "NotEqual" => Ok(CompareOp::NotEqual),
            other => Err(UnknownCompareOp(other.to_string())),
        }
    }
}

/// A token matched the operator naming pattern but names no known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCompareOp(pub String);

impl fmt::Display for UnknownCompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown comparison operator `{}`", self.0)
    }
}

impl std::error::Error for UnknownCompareOp {}

// ---------------------------------------------------------------------------
// ConditionalRule
// ---------------------------------------------------------------------------

/// Predicate gating a field's presence on the value of a sibling field.
///
/// The rule is satisfied when the referenced field's value compares true
/// against *any* entry in `values` (a disjunction). Several rules on one
/// field are independent gates; the emitter combines them with logical AND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalRule {
    /// Name of the field whose value the predicate inspects.
    pub key: String,
    /// Comparison operator.
    pub op: CompareOp,
    /// Ordered, never-empty set of literal comparison values.
    pub values: Vec<String>,
}

impl ConditionalRule {
    /// Render the rule as a source-level condition, e.g.
    /// `(mode == A || mode == B)`.
    pub fn condition_expr(&self) -> String {
        let op = self.op.symbol();
        let parts: Vec<String> = self
            .values
            .iter()
            .map(|v| format!("{} {} {}", self.key, op, v))
            .collect();
        format!("({})", parts.join(" || "))
    }
}

// ---------------------------------------------------------------------------
// ArrayFraming
// ---------------------------------------------------------------------------

/// How a variable-length sequence's element count is encoded on the wire.
///
/// Exactly one mode parameter is meaningful per variant. `Unspecified` is a
/// deliberate, distinguishable state: the framing attribute was present but
/// under-specified, and the emitter decides whether to reject it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrayFraming {
    /// Field is not a framed sequence.
    None,
    /// Attribute present, but the argument count or shape did not select a
    /// mode. Never silently collapsed into one of the concrete modes.
    Unspecified,
    /// Element count is stored in the named sibling field.
    ///
    /// `key` is not validated against sibling field names here; that check
    /// is owned by the emitter.
    RefField { key: String },
    /// Element count is encoded inline using the named fixed-width
    /// primitive type.
    LengthType { ty: String },
    /// Compile-time-constant element count.
    FixedSize { len: u32 },
}

impl ArrayFraming {
    /// True for every state except `None`.
    pub fn is_array(&self) -> bool {
        !matches!(self, ArrayFraming::None)
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// One schema record: descriptor plus the attribute-derived rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub descriptor: FieldDescriptor,
    /// Conditional gates, combined conjunctively by the emitter.
    pub rules: Vec<ConditionalRule>,
    pub framing: ArrayFraming,
}

/// Detached intermediate representation of one struct, handed to the
/// emitter. Field order equals declaration order and fixes wire layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Name of the struct the schema was extracted from.
    pub name: String,
    /// Schema records in declaration order.
    pub fields: Vec<FieldSchema>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

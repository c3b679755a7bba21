// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 wiregen contributors

//! Conditional-inclusion rule parsing for `#[wire_if(...)]`.

use syn::Field;

use crate::attrs::{attr_args, find_attrs, AttrArg};
use crate::schema::{CompareOp, ConditionalRule};

/// Marker attribute making a field's presence conditional on another field.
pub const IF_ATTR: &str = "wire_if";

/// Parse every `#[wire_if(...)]` on the field into a rule.
///
/// The first argument names the inspected key (either `field(name)` or a
/// plain string/identifier). Among the remaining arguments, a
/// `CompareOp::Variant` path selects the operator; every other argument is
/// a comparison value. Attributes with fewer than two arguments, or with no
/// value argument at all, yield no rule. Unknown operator variants keep the
/// default operator; both lenient paths are deliberate.
pub fn extract_conditional_rules(field: &Field) -> Vec<ConditionalRule> {
    let mut rules = Vec::new();

    for attr in find_attrs(&field.attrs, IF_ATTR) {
        let args = attr_args(attr);
        if args.len() < 2 {
            log::debug!(
                "[wiregen] #[{IF_ATTR}] with {} argument(s) ignored, need key + value",
                args.len()
            );
            continue;
        }

        let mut op = CompareOp::default();
        let mut values = Vec::new();

        for arg in &args[1..] {
            match operator_variant(arg) {
                Some(variant) => match variant.parse::<CompareOp>() {
                    Ok(parsed) => op = parsed,
                    Err(err) => {
                        log::debug!("[wiregen] {err} in #[{IF_ATTR}], keeping {op:?}");
                    }
                },
                None => values.push(arg.text()),
            }
        }

        // An operator with no values gates on nothing.
        if values.is_empty() {
            log::debug!("[wiregen] #[{IF_ATTR}] without comparison values ignored");
            continue;
        }

        rules.push(ConditionalRule {
            key: args[0].ref_name(),
            op,
            values,
        });
    }

    rules
}

/// Variant name of an argument matching the operator naming pattern: a
/// qualified path whose second-to-last segment is `CompareOp`.
fn operator_variant(arg: &AttrArg) -> Option<String> {
    let AttrArg::Path(path) = arg else {
        return None;
    };

    let len = path.segments.len();
    if len >= 2 && path.segments[len - 2].ident == "CompareOp" {
        Some(path.segments[len - 1].ident.to_string())
    } else {
        None
    }
}

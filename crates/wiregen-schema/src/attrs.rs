// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 wiregen contributors

//! Attribute location and argument-shape classification.
//!
//! Marker attributes reach us as raw token lists; every downstream parser
//! first funnels each argument expression through [`classify`] into the
//! closed [`AttrArg`] union and then matches on shape, never on strings.

use proc_macro2::{Delimiter, TokenStream, TokenTree};
use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, Ident, Lit, Meta, Path, Token};

// ---------------------------------------------------------------------------
// Locator
// ---------------------------------------------------------------------------

/// First attribute whose leading path identifier equals `name`, in
/// declaration order. `None` means the feature is unused, not an error.
pub fn find_attr<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr_is(attr, name))
}

/// All attributes whose leading path identifier equals `name`.
pub fn find_attrs<'a>(attrs: &'a [Attribute], name: &str) -> Vec<&'a Attribute> {
    attrs.iter().filter(|attr| attr_is(attr, name)).collect()
}

/// Structural name match on the first path segment; never type-checked.
fn attr_is(attr: &Attribute, name: &str) -> bool {
    attr.path()
        .segments
        .first()
        .is_some_and(|seg| seg.ident == name)
}

// ---------------------------------------------------------------------------
// Argument shapes
// ---------------------------------------------------------------------------

/// Closed union of attribute-argument shapes, matched exhaustively by the
/// rule parsers.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrArg {
    /// Literal token: `"A"`, `16`, `true`.
    Lit(Lit),
    /// Bare identifier: a symbolic reference or a primitive type name.
    Ident(Ident),
    /// Function-style reference wrapping a single bare identifier,
    /// e.g. `field(count)`.
    FieldRef(Ident),
    /// Qualified path, e.g. `CompareOp::NotEqual`.
    Path(Path),
    /// Any other expression, kept as raw token text.
    Other(String),
}

impl AttrArg {
    /// Resolve a key expression to the field name it references: a
    /// [`AttrArg::FieldRef`] yields the wrapped identifier, anything else
    /// its textual spelling with surrounding quotes stripped.
    pub fn ref_name(&self) -> String {
        match self {
            AttrArg::FieldRef(ident) => ident.to_string(),
            other => other.text().trim_matches('"').to_string(),
        }
    }

    /// Textual spelling of the argument. String literals yield their
    /// unquoted value; everything else its compacted token text.
    pub fn text(&self) -> String {
        match self {
            AttrArg::Lit(Lit::Str(s)) => s.value(),
            AttrArg::Lit(lit) => compact_tokens(&lit.to_token_stream()),
            AttrArg::Ident(ident) | AttrArg::FieldRef(ident) => ident.to_string(),
            AttrArg::Path(path) => compact_tokens(&path.to_token_stream()),
            AttrArg::Other(raw) => raw.clone(),
        }
    }
}

/// Classify one argument expression into its [`AttrArg`] shape.
pub fn classify(expr: &Expr) -> AttrArg {
    match expr {
        Expr::Lit(lit) => AttrArg::Lit(lit.lit.clone()),
        Expr::Path(path) if path.qself.is_none() => match path.path.get_ident() {
            Some(ident) => AttrArg::Ident(ident.clone()),
            None => AttrArg::Path(path.path.clone()),
        },
        Expr::Call(call) => {
            if matches!(&*call.func, Expr::Path(_)) && call.args.len() == 1 {
                if let Expr::Path(arg) = &call.args[0] {
                    if let Some(ident) = arg.path.get_ident() {
                        return AttrArg::FieldRef(ident.clone());
                    }
                }
            }
            AttrArg::Other(compact_tokens(&expr.to_token_stream()))
        }
        Expr::Paren(paren) => classify(&paren.expr),
        other => AttrArg::Other(compact_tokens(&other.to_token_stream())),
    }
}

/// Parse an attribute's argument list into classified shapes.
///
/// `#[attr]` without parentheses and argument tokens that fail to parse as
/// comma-separated expressions both yield an empty list; malformed argument
/// syntax is tolerated, never fatal.
pub fn attr_args(attr: &Attribute) -> Vec<AttrArg> {
    let Meta::List(list) = &attr.meta else {
        return Vec::new();
    };

    match list.parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated) {
        Ok(args) => args.iter().map(classify).collect(),
        Err(err) => {
            log::debug!("[wiregen] unparseable attribute arguments ignored: {err}");
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Token spelling
// ---------------------------------------------------------------------------

/// Deterministic, whitespace-normalized spelling of a token stream, e.g.
/// `Vec < u8 >` renders as `Vec<u8>`.
pub(crate) fn compact_tokens(tokens: &TokenStream) -> String {
    let mut out = String::new();
    append_tokens(&mut out, tokens.clone());
    out
}

fn append_tokens(out: &mut String, tokens: TokenStream) {
    for tree in tokens {
        match tree {
            TokenTree::Group(group) => {
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", ""),
                };
                out.push_str(open);
                append_tokens(out, group.stream());
                out.push_str(close);
            }
            TokenTree::Ident(ident) => {
                push_word(out, &ident.to_string());
            }
            TokenTree::Literal(lit) => {
                push_word(out, &lit.to_string());
            }
            TokenTree::Punct(punct) => out.push(punct.as_char()),
        }
    }
}

// A space is needed only between two word-like tokens (`[u8` vs `dyn Trait`).
fn push_word(out: &mut String, word: &str) {
    if out.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
        out.push(' ');
    }
    out.push_str(word);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

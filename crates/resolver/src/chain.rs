// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turning a callee expression into an ordered, left-to-right list of
//! identifier-shaped segments (§4.G). A receiver that is itself a call
//! (`get_instance().clear_all()`) is spliced in transparently by
//! flattening its own callee chain first. Any other non-identifier leaf
//! — a parenthesized sub-expression, a string literal — aborts the
//! whole chain with `None`: partial-path edges are never emitted.

use codegraph_languages::rules::{CallRule, ConstructorCallRule, MemberAccessRule};
use codegraph_languages::LanguageConfig;
use codegraph_parse::ParsedTree;
use tree_sitter::Node;

fn is_identifier_like(node: Node) -> bool {
    node.kind().ends_with("identifier")
}

/// Flatten a (possibly nested) member-access expression into its
/// left-to-right identifier segments, e.g. `a.b.c` -> `[a, b, c]`. A
/// receiver that is itself a call (`get_instance().clear_all()`) is
/// flattened transparently into its own callee chain — the invocation
/// syntax is dropped, leaving only the identifier path the Resolver
/// needs; `descend` is what later turns the trailing method segment's
/// *owning type* into the effective receiver for the rest of the chain
/// (§4.G scenario (b), absent any declared-return-type tracking).
pub fn flatten_chain<'t>(expr: Node<'t>, member_access: &MemberAccessRule, calls: &[CallRule]) -> Option<Vec<Node<'t>>> {
    if expr.kind() == member_access.cst_kind {
        let object = expr.child_by_field_name(member_access.object_field)?;
        let property = expr.child_by_field_name(member_access.property_field)?;
        let mut segments = flatten_chain(object, member_access, calls)?;
        segments.push(property);
        Some(segments)
    } else if let Some(call_rule) = calls.iter().find(|r| r.cst_kind == expr.kind()) {
        call_chain(expr, call_rule, member_access, calls)
    } else if is_identifier_like(expr) {
        Some(vec![expr])
    } else {
        None
    }
}

/// The callee chain for one call-site. Most grammars wrap the receiver
/// and method name together in a single member-access node reachable
/// through the call's `callee_field` (`a.b()`'s callee is `a.b`, a
/// `member_expression`). Java's `method_invocation` instead carries the
/// receiver directly on the call node itself (`object` field) alongside
/// a bare `name` field for the method — structurally flattened one level
/// compared to the rest of the corpus — so that shape is detected and
/// re-composed into the same left-to-right segment list.
pub fn call_chain<'t>(call_node: Node<'t>, call_rule: &CallRule, member_access: &MemberAccessRule, calls: &[CallRule]) -> Option<Vec<Node<'t>>> {
    let callee = call_node.child_by_field_name(call_rule.callee_field)?;
    if callee.kind() != member_access.cst_kind {
        if let Some(object) = call_node.child_by_field_name(member_access.object_field) {
            if object != callee && is_identifier_like(callee) {
                let mut chain = flatten_chain(object, member_access, calls)?;
                chain.push(callee);
                return Some(chain);
            }
        }
    }
    flatten_chain(callee, member_access, calls)
}

/// The first identifier-shaped leaf under `node`, depth-first — used for
/// a constructor site's `type_field`, which may be a bare name, a
/// qualified name, or a generic instantiation (`Base<T>`); only the
/// leading name is ever needed to start a lookup.
pub fn leading_identifier(node: Node, parsed: &ParsedTree) -> Option<String> {
    if is_identifier_like(node) {
        return Some(parsed.text_of(node).to_string());
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(name) = leading_identifier(child, parsed) {
            return Some(name);
        }
    }
    None
}

/// If `value` is structurally a constructor call (`T(...)`, `new T(...)`,
/// `T { .. }`), the raw name of the type it constructs — used both by
/// receiver-typing cue #1 (`x = T(...)` binds `x: T`) and by ordinary
/// call classification once a chain resolves to a `Type` rather than a
/// callable.
pub fn constructor_type_name(value: Node, config: &LanguageConfig, parsed: &ParsedTree) -> Option<String> {
    match config.constructor_call {
        ConstructorCallRule::Keyword { cst_kind, type_field } | ConstructorCallRule::StructLiteral { cst_kind, type_field }
            if value.kind() == cst_kind =>
        {
            value.child_by_field_name(type_field).and_then(|n| leading_identifier(n, parsed))
        }
        ConstructorCallRule::UppercaseCallee => {
            let call_rule = config.calls.iter().find(|r| r.cst_kind == value.kind())?;
            let callee = value.child_by_field_name(call_rule.callee_field)?;
            if !callee.kind().ends_with("identifier") {
                return None;
            }
            let text = parsed.text_of(callee);
            text.chars().next().filter(|c| c.is_uppercase()).map(|_| text.to_string())
        }
        _ => None,
    }
}

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed-field extraction (§4.F / §4.G cue #2). Recorded onto
//! `DefinitionEntry::fields_raw` exactly as written, the same way
//! `bases_raw` is — resolving a field's raw type name against an import
//! map is the Resolver's job, not this pass's.

use codegraph_languages::rules::{MemberAccessRule, TypedFieldRule};
use codegraph_languages::LanguageConfig;
use codegraph_parse::ParsedTree;
use tree_sitter::Node;

/// A typed-field rule's `name_field` is usually a plain identifier
/// (TypeScript/Go/Rust), sometimes a wrapped declarator that carries its
/// own `name` field one level down (Java/C++'s `field_declaration`), and
/// for Python's `self.x: T = ...` convention inside a method body, an
/// `attribute` node whose object is the `self` token and whose property
/// is the field's actual name.
fn field_name(node: Node, rule: &TypedFieldRule, member_access: &MemberAccessRule, self_token: Option<&str>, parsed: &ParsedTree) -> Option<String> {
    let target = node.child_by_field_name(rule.name_field)?;
    if target.kind().ends_with("identifier") {
        return Some(parsed.text_of(target).to_string());
    }
    if target.kind() == member_access.cst_kind {
        let object = target.child_by_field_name(member_access.object_field)?;
        if self_token.is_some_and(|tok| parsed.text_of(object) == tok) {
            let property = target.child_by_field_name(member_access.property_field)?;
            return Some(parsed.text_of(property).to_string());
        }
        return None;
    }
    target.child_by_field_name("name").map(|n| parsed.text_of(n).to_string())
}

/// Walk a type's own body (and into its methods' bodies, to pick up
/// Python-style `self.field: T` assignments) collecting every typed
/// field. Stops at a nested type's own definition node — that type gets
/// its own scan when the walk reaches it.
pub fn collect_typed_fields(node: Node, config: &'static LanguageConfig, parsed: &ParsedTree, out: &mut Vec<(String, String)>) {
    if config.definitions.iter().any(|d| d.cst_kind == node.kind() && d.kind.is_type()) {
        return;
    }
    for rule in config.typed_fields {
        if rule.cst_kind != node.kind() {
            continue;
        }
        let Some(type_node) = node.child_by_field_name(rule.type_field) else {
            continue;
        };
        if let Some(name) = field_name(node, rule, &config.member_access, config.self_token, parsed) {
            out.push((name, parsed.text_of(type_node).to_string()));
        }
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_typed_fields(child, config, parsed, out);
    }
}

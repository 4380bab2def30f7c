// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw base-type/interface extraction (§4.F). Everything here is
//! recorded as written — resolving a raw name against an import map is
//! the Resolver's job (§4.G), not this pass's.

use codegraph_languages::rules::InheritanceRule;
use codegraph_parse::ParsedTree;
use tree_sitter::Node;

/// Collect every identifier-shaped leaf under `container`, stopping at
/// the first level of nested definitions isn't necessary here since a
/// base-type clause never itself contains a nested type/function — a
/// plain recursive scan is safe.
fn collect_identifiers(container: Node, parsed: &ParsedTree, out: &mut Vec<String>) {
    let kind = container.kind();
    if kind.ends_with("identifier") || kind == "scoped_identifier" || kind == "generic_type" {
        // A generic_type (`Base<T>`) still names its base via its own
        // "type" field — fall through to the identifier inside it by
        // recursing into named children instead of taking its own text.
        if kind == "generic_type" {
            let mut cursor = container.walk();
            for child in container.named_children(&mut cursor) {
                collect_identifiers(child, parsed, out);
            }
            return;
        }
        out.push(parsed.text_of(container).to_string());
        return;
    }
    let mut cursor = container.walk();
    for child in container.named_children(&mut cursor) {
        collect_identifiers(child, parsed, out);
    }
}

/// Given a node that matched an [`InheritanceRule`], read its
/// `bases_field` (falling back to scanning the node itself when the
/// field isn't present, since some grammars expose the base list as the
/// node's own direct children rather than a single named field) and
/// return every base name found, paired with the rule's
/// extends/implements classification.
pub fn extract_bases(
    node: Node,
    rule: &InheritanceRule,
    parsed: &ParsedTree,
) -> Vec<(String, codegraph_languages::rules::InheritanceKind)> {
    let container = node.child_by_field_name(rule.bases_field).unwrap_or(node);
    let mut names = Vec::new();
    collect_identifiers(container, parsed, &mut names);
    names.into_iter().map(|name| (name, rule.kind)).collect()
}

/// For an [`InheritanceRule`] carrying an `owner_field` (Rust's
/// `impl_item`, which stands apart from the `struct_item`/`enum_item` it
/// applies to), read the field naming the type the clause belongs to.
pub fn owner_type_name(node: Node, owner_field: &str, parsed: &ParsedTree) -> Option<String> {
    let owner_node = node.child_by_field_name(owner_field)?;
    let mut names = Vec::new();
    collect_identifiers(owner_node, parsed, &mut names);
    names.into_iter().next()
}

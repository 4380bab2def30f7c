// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Import-statement processing (§4.F / §4.A). Every target recorded here
//! is a syntactic best guess built from the written path text; whether it
//! actually names something in the project is checked lazily, by the
//! Resolver, via `SymbolTable::lookup_absolute` — the definition pass
//! never needs the rest of the project to already be registered.

use codegraph_core::Fqn;
use codegraph_languages::rules::{ImportPathStyle, ImportRule};
use codegraph_parse::ParsedTree;
use codegraph_symbols::ImportTarget;
use codegraph_utils::paths::resolve_relative_import;
use tree_sitter::Node;

fn strip_quotes(text: &str) -> &str {
    text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
}

/// The module-path segments an import statement's path text resolves
/// to, with no member name appended — what an IMPORTS edge's target
/// should be, as opposed to the more specific per-binding targets
/// `extract_import_bindings` returns.
pub fn resolve_module_path(style: ImportPathStyle, importer_package: &[String], path_text: &str) -> Vec<String> {
    resolve_segments(style, importer_package, path_text)
}

fn resolve_segments(style: ImportPathStyle, importer_package: &[String], path_text: &str) -> Vec<String> {
    let text = strip_quotes(path_text);
    match style {
        ImportPathStyle::Dotted => text.split('.').filter(|s| !s.is_empty()).map(str::to_string).collect(),
        ImportPathStyle::Relative => resolve_relative_import(importer_package, text),
    }
}

/// Scan `node`'s children (skipping the module-path field itself) for
/// named member bindings — `aliased_import`/`import_specifier`/
/// `use_as_clause` wrapper nodes, or a bare identifier for an unaliased
/// member. Best-effort: grammars vary in exactly how a named-import list
/// nests, so this recurses through wrapper/list nodes rather than
/// assuming one fixed shape.
fn collect_named_members(node: Node, named_kind: &str, skip: Option<Node>, parsed: &ParsedTree, out: &mut Vec<(String, Option<String>)>) {
    if Some(node) == skip {
        return;
    }
    if node.kind() == named_kind {
        let name = node
            .child_by_field_name("name")
            .map(|n| parsed.text_of(n).to_string())
            .unwrap_or_else(|| parsed.text_of(node).to_string());
        let alias = node.child_by_field_name("alias").map(|n| parsed.text_of(n).to_string());
        out.push((name, alias));
        return;
    }
    if matches!(node.kind(), "identifier" | "dotted_name" | "scoped_identifier" | "shorthand_property_identifier") {
        out.push((parsed.text_of(node).to_string(), None));
        return;
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_named_members(child, named_kind, skip, parsed, out);
    }
}

/// Everything one import statement node contributes to its module's
/// `ImportMap`: `local_name -> ImportTarget` pairs.
pub fn extract_import_bindings(
    node: Node,
    rule: &ImportRule,
    style: ImportPathStyle,
    importer_package: &[String],
    project_fqn: &Fqn,
    parsed: &ParsedTree,
) -> Vec<(String, ImportTarget)> {
    let Some(path_node) = node.child_by_field_name(rule.path_field) else {
        return Vec::new();
    };
    let path_text = parsed.text_of(path_node);
    let segments = resolve_segments(style, importer_package, path_text);

    if let Some(named_kind) = rule.named_import_kind {
        let mut members = Vec::new();
        collect_named_members(node, named_kind, Some(path_node), parsed, &mut members);
        return members
            .into_iter()
            .map(|(name, alias)| {
                let local_name = alias.unwrap_or_else(|| name.clone());
                let mut full = segments.clone();
                full.push(name);
                (local_name, ImportTarget::Resolved(project_fqn.join_path(&full.join("."))))
            })
            .collect();
    }

    if segments.is_empty() {
        return Vec::new();
    }

    let alias = rule
        .alias_field
        .and_then(|f| node.child_by_field_name(f))
        .map(|n| parsed.text_of(n).to_string());

    let (local_name, target_segments) = match (style, alias) {
        (_, Some(alias)) => (alias, segments.clone()),
        // A bare `import X.Y` (Dotted) binds the *top* segment, so
        // `X.Y.foo()` still resolves by walking down from `X`.
        (ImportPathStyle::Dotted, None) => (segments[0].clone(), vec![segments[0].clone()]),
        // A bare `import "path/to/pkg"` (Relative) binds the package's
        // own *last* path segment — the filesystem-leaf convention.
        (ImportPathStyle::Relative, None) => (segments.last().cloned().unwrap_or_default(), segments.clone()),
    };

    vec![(local_name, ImportTarget::Resolved(project_fqn.join_path(&target_segments.join("."))))]
}

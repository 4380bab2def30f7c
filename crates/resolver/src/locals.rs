// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-function local state the Resolver needs before it can classify a
//! single call site: which names are locally bound (so a same-named
//! import is never consulted for them, §4.G "alias shadowing"), and
//! which of those bindings carry an inferred type from receiver-typing
//! cue #1 (`x = T(...)`).

use std::collections::{HashMap, HashSet};

use codegraph_languages::LanguageConfig;
use codegraph_parse::ParsedTree;
use tree_sitter::Node;

use crate::chain::constructor_type_name;

#[derive(Debug, Default)]
pub struct LocalScope {
    shadowed: HashSet<String>,
    typed: HashMap<String, String>,
}

impl LocalScope {
    pub fn is_shadowed(&self, name: &str) -> bool {
        self.shadowed.contains(name)
    }

    /// The raw (unresolved) type name a local was last bound to via a
    /// constructor assignment, if any.
    pub fn inferred_type(&self, name: &str) -> Option<&str> {
        self.typed.get(name).map(String::as_str)
    }

    /// Scan `body` for every local-binding site this language's
    /// `anonymous_binding_parents` table already enumerates (it exists
    /// precisely to name "a node kind that binds a name via a field" —
    /// originally for naming anonymous functions, reused here for the
    /// general case). Does not descend into nested function/method
    /// bodies: their own locals are a separate, inner `LocalScope`.
    pub fn build(body: Node, config: &'static LanguageConfig, parsed: &ParsedTree) -> Self {
        let mut scope = Self::default();
        collect(body, config, parsed, &mut scope);
        scope
    }
}

fn collect(node: Node, config: &'static LanguageConfig, parsed: &ParsedTree, scope: &mut LocalScope) {
    if config.definitions.iter().any(|d| d.cst_kind == node.kind() && d.kind.is_callable()) {
        return; // a nested function's locals belong to its own scope.
    }
    for (parent_kind, name_field) in config.anonymous_binding_parents {
        if *parent_kind != node.kind() {
            continue;
        }
        let Some(name_node) = node.child_by_field_name(name_field) else {
            continue;
        };
        if !name_node.kind().ends_with("identifier") {
            continue;
        }
        let name = parsed.text_of(name_node).to_string();
        let value = node
            .child_by_field_name("right")
            .or_else(|| node.child_by_field_name("value"));
        if let Some(ty) = value.and_then(|v| constructor_type_name(v, config, parsed)) {
            scope.typed.insert(name.clone(), ty);
        }
        scope.shadowed.insert(name);
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect(child, config, parsed, scope);
    }
}

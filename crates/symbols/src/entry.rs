// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use codegraph_core::{Fqn, Language, NodeKind};
use codegraph_languages::rules::InheritanceKind;

/// One registered definition's metadata. Does **not** cache resolved
/// base-type FQNs — `bases_raw` stays exactly as written at definition
/// time, and `lookup_member` recomputes each base's resolution on demand
/// (see `Table::resolve_base`), keeping the table genuinely read-only
/// during the resolution phase regardless of file processing order.
#[derive(Debug, Clone)]
pub struct DefinitionEntry {
    pub fqn: Fqn,
    pub kind: NodeKind,
    pub language: Language,
    /// The FQN of the module this definition lexically lives in — needed
    /// to resolve this type's own raw base names against *its* import
    /// map, not the caller's.
    pub module: Fqn,
    /// For methods: the FQN of the owning type.
    pub owner: Option<Fqn>,
    /// Base-type/interface names exactly as written in source, recorded
    /// during the definition pass and resolved lazily during resolution.
    pub bases_raw: Vec<(String, InheritanceKind)>,
    /// `(field_name, raw_type_name)` pairs for this type's explicitly
    /// typed fields, exactly as written — the Resolver's source for its
    /// `self.field` receiver-typing cue, resolved lazily the same way
    /// `bases_raw` is.
    pub fields_raw: Vec<(String, String)>,
    /// Whether this method is the owning type's constructor, per the
    /// language's `ConstructorNaming` convention.
    pub is_constructor: bool,
}

impl DefinitionEntry {
    pub fn new(fqn: Fqn, kind: NodeKind, language: Language, module: Fqn) -> Self {
        Self {
            fqn,
            kind,
            language,
            module,
            owner: None,
            bases_raw: Vec::new(),
            fields_raw: Vec::new(),
            is_constructor: false,
        }
    }
}

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use codegraph_core::{CoreError, Fqn, Language, NodeKind, Result};
use codegraph_languages::rules::InheritanceKind;

use crate::entry::DefinitionEntry;
use crate::imports::{ImportMap, ImportTarget};

/// The project-wide definition index (§4.E). Append-only during the walk
/// and definition phases; [`SymbolTable::freeze`] flips it read-only for
/// the resolution phase, after which every lookup is safe to call from
/// any number of parallel workers in any order.
#[derive(Debug, Default)]
pub struct SymbolTable {
    definitions: DashMap<Fqn, DefinitionEntry>,
    imports: DashMap<Fqn, Arc<ImportMap>>,
    /// For every FQN that can own children (Project/Package/Module/type),
    /// the map from a child's simple name to its FQN. Makes
    /// `lookup_in_module`/`lookup_member` average O(1) instead of a full
    /// table scan.
    children: DashMap<Fqn, DashMap<String, Fqn>>,
    frozen: AtomicBool,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn assert_not_frozen(&self) {
        debug_assert!(
            !self.frozen.load(Ordering::Acquire),
            "SymbolTable write attempted after freeze(); all writes must happen during walk/definition"
        );
    }

    /// Register a definition, plus its entry in its lexical parent's
    /// scope-children index. First registration of a given FQN wins;
    /// subsequent ones return `DuplicateDefinition` for the caller to log
    /// and ignore (§4.F's "first declaration wins" rule).
    pub fn register(&self, entry: DefinitionEntry) -> Result<()> {
        self.assert_not_frozen();
        let fqn = entry.fqn.clone();
        if self.definitions.contains_key(&fqn) {
            return Err(CoreError::DuplicateDefinition { fqn });
        }
        if let Some(parent) = fqn.parent() {
            self.children
                .entry(parent)
                .or_default()
                .insert(fqn.simple_name().to_string(), fqn.clone());
        }
        self.definitions.insert(fqn, entry);
        Ok(())
    }

    /// Record a child FQN under a parent without a full definition entry
    /// — used for Project/Package/Module nodes, which the walk phase
    /// creates before any `DefinitionEntry` exists for them.
    pub fn register_child(&self, parent: &Fqn, simple_name: &str, child: Fqn) {
        self.assert_not_frozen();
        self.children
            .entry(parent.clone())
            .or_default()
            .insert(simple_name.to_string(), child);
    }

    pub fn register_node_kind(&self, fqn: &Fqn, kind: NodeKind, language: Language, module: Fqn) {
        self.assert_not_frozen();
        self.definitions
            .entry(fqn.clone())
            .or_insert_with(|| DefinitionEntry::new(fqn.clone(), kind, language, module));
    }

    pub fn set_bases_raw(&self, fqn: &Fqn, bases: Vec<(String, InheritanceKind)>) {
        self.assert_not_frozen();
        if let Some(mut entry) = self.definitions.get_mut(fqn) {
            entry.bases_raw = bases;
        }
    }

    pub fn set_fields_raw(&self, fqn: &Fqn, fields: Vec<(String, String)>) {
        self.assert_not_frozen();
        if let Some(mut entry) = self.definitions.get_mut(fqn) {
            entry.fields_raw = fields;
        }
    }

    pub fn set_owner(&self, method_fqn: &Fqn, owner: Fqn) {
        self.assert_not_frozen();
        if let Some(mut entry) = self.definitions.get_mut(method_fqn) {
            entry.owner = Some(owner);
        }
    }

    pub fn mark_constructor(&self, fqn: &Fqn) {
        self.assert_not_frozen();
        if let Some(mut entry) = self.definitions.get_mut(fqn) {
            entry.is_constructor = true;
        }
    }

    pub fn import_map(&self, module: &Fqn) -> Arc<ImportMap> {
        self.assert_not_frozen();
        self.imports
            .entry(module.clone())
            .or_insert_with(|| Arc::new(ImportMap::new()))
            .clone()
    }

    pub fn freeze(&self) {
        self.frozen.store(true, Ordering::Release);
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::Acquire)
    }

    /// Presence check for an already-qualified name.
    pub fn lookup_absolute(&self, fqn: &Fqn) -> Option<NodeKind> {
        self.definitions.get(fqn).map(|e| e.kind)
    }

    pub fn entry(&self, fqn: &Fqn) -> Option<DefinitionEntry> {
        self.definitions.get(fqn).map(|e| e.clone())
    }

    /// Resolve `local_name` as seen from inside `module_fqn`'s own scope:
    /// the module's import map first, then the module's own definitions.
    pub fn lookup_in_module(&self, module_fqn: &Fqn, local_name: &str) -> Option<ImportTarget> {
        if let Some(imports) = self.imports.get(module_fqn) {
            if let Some(target) = imports.get(local_name) {
                return Some(target);
            }
        }
        self.children
            .get(module_fqn)
            .and_then(|children| children.get(local_name).map(|r| ImportTarget::Resolved(r.value().clone())))
    }

    /// A plain child-scope lookup with no import-map fallback — used when
    /// walking *into* an already-resolved package/module/type rather than
    /// resolving a bare name from scratch.
    pub fn child_of(&self, parent_fqn: &Fqn, simple_name: &str) -> Option<Fqn> {
        self.children
            .get(parent_fqn)
            .and_then(|children| children.get(simple_name).map(|r| r.value().clone()))
    }

    /// Search a type's own members first, then breadth-first over its
    /// resolved INHERITS/IMPLEMENTS chain. Cycle-safe: a base already
    /// visited is never re-queued, so a malformed cyclic hierarchy
    /// terminates after at most one visit per type (§4.G/§9).
    pub fn lookup_member(&self, type_fqn: &Fqn, member_name: &str) -> Option<Fqn> {
        let mut visited = HashSet::new();
        let mut queue = vec![type_fqn.clone()];
        visited.insert(type_fqn.clone());

        while let Some(current) = queue.pop() {
            if let Some(member) = self.child_of(&current, member_name) {
                return Some(member);
            }
            for base in self.resolved_bases(&current) {
                if visited.insert(base.clone()) {
                    queue.push(base);
                }
            }
        }
        None
    }

    /// Resolve one of `type_fqn`'s own explicitly typed fields against
    /// its module's scope — the Resolver's receiver-typing cue #2. A
    /// pure function of already-frozen `fields_raw` data, so the
    /// Resolver is free to cache this per type without any additional
    /// synchronization.
    pub fn field_type(&self, type_fqn: &Fqn, field_name: &str) -> Option<Fqn> {
        let entry = self.entry(type_fqn)?;
        let (_, raw_type) = entry.fields_raw.iter().find(|(name, _)| name == field_name)?;
        match self.lookup_in_module(&entry.module, raw_type) {
            Some(ImportTarget::Resolved(fqn)) => Some(fqn),
            _ => None,
        }
    }

    /// The first resolved base of a type, used for `super` resolution —
    /// distinct from `lookup_member`'s BFS because `super` must start
    /// searching from that specific base, not the whole chain at once.
    pub fn first_resolved_base(&self, type_fqn: &Fqn) -> Option<Fqn> {
        self.resolved_bases(type_fqn).into_iter().next()
    }

    /// Recompute a type's resolved base FQNs on demand from its raw
    /// written names, resolved against its *own* module's scope. Never
    /// cached on the entry itself (see `DefinitionEntry` doc comment).
    fn resolved_bases(&self, type_fqn: &Fqn) -> Vec<Fqn> {
        let Some(entry) = self.entry(type_fqn) else {
            return Vec::new();
        };
        entry
            .bases_raw
            .iter()
            .filter_map(|(raw, _kind)| match self.lookup_in_module(&entry.module, raw) {
                Some(ImportTarget::Resolved(fqn)) => Some(fqn),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codegraph_core::NodeKind;

    #[test]
    fn register_rejects_duplicate_fqn() {
        let table = SymbolTable::new();
        let fqn = Fqn::from_dotted("proj.mod.Thing");
        let module = Fqn::from_dotted("proj.mod");
        table
            .register(DefinitionEntry::new(fqn.clone(), NodeKind::Class, Language::Python, module.clone()))
            .unwrap();
        let err = table
            .register(DefinitionEntry::new(fqn, NodeKind::Class, Language::Python, module))
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateDefinition { .. }));
    }

    #[test]
    fn lookup_in_module_prefers_import_then_own_scope() {
        let table = SymbolTable::new();
        let module = Fqn::from_dotted("proj.services.processor");
        let target = Fqn::from_dotted("proj.utils.helpers.short");
        table.import_map(&module).insert("short", ImportTarget::Resolved(target.clone()));
        assert_eq!(table.lookup_in_module(&module, "short"), Some(ImportTarget::Resolved(target)));
    }

    #[test]
    fn lookup_member_walks_inheritance_chain() {
        let table = SymbolTable::new();
        let module = Fqn::from_dotted("proj.app");
        let base = Fqn::from_dotted("proj.app.Base");
        let derived = Fqn::from_dotted("proj.app.Dog");
        let speak = Fqn::from_dotted("proj.app.Base.speak");

        table
            .register(DefinitionEntry::new(base.clone(), NodeKind::Class, Language::Python, module.clone()))
            .unwrap();
        table
            .register(DefinitionEntry::new(derived.clone(), NodeKind::Class, Language::Python, module.clone()))
            .unwrap();
        table
            .register(DefinitionEntry::new(speak.clone(), NodeKind::Method, Language::Python, module.clone()))
            .unwrap();
        table.set_bases_raw(&derived, vec![("Base".to_string(), InheritanceKind::Extends)]);

        assert_eq!(table.lookup_member(&derived, "speak"), Some(speak));
    }

    #[test]
    fn lookup_member_terminates_on_cycles() {
        let table = SymbolTable::new();
        let module = Fqn::from_dotted("proj.app");
        let a = Fqn::from_dotted("proj.app.A");
        let b = Fqn::from_dotted("proj.app.B");
        table
            .register(DefinitionEntry::new(a.clone(), NodeKind::Class, Language::Python, module.clone()))
            .unwrap();
        table
            .register(DefinitionEntry::new(b.clone(), NodeKind::Class, Language::Python, module.clone()))
            .unwrap();
        table.set_bases_raw(&a, vec![("B".to_string(), InheritanceKind::Extends)]);
        table.set_bases_raw(&b, vec![("A".to_string(), InheritanceKind::Extends)]);

        assert_eq!(table.lookup_member(&a, "nonexistent"), None);
    }

    #[test]
    fn overload_registration_keeps_first_declaration() {
        let table = SymbolTable::new();
        let module = Fqn::from_dotted("proj.app");
        let fqn = Fqn::from_dotted("proj.app.f");
        table
            .register(DefinitionEntry::new(fqn.clone(), NodeKind::Function, Language::Python, module.clone()))
            .unwrap();
        assert!(table
            .register(DefinitionEntry::new(fqn, NodeKind::Function, Language::Python, module))
            .is_err());
        assert_eq!(table.child_of(&module, "f").is_some(), true);
    }
}

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use smallvec::SmallVec;
use tree_sitter::Node;

use codegraph_core::{Diagnostics, EdgeKind, Fqn, NodeKind, NodeRef, PropMap, Result};
use codegraph_languages::rules::{ConstructorNaming, InheritanceKind};
use codegraph_languages::LanguageConfig;
use codegraph_parse::ParsedTree;
use codegraph_sink::{GraphSink, SinkBuffer};
use codegraph_symbols::{ImportTarget, SymbolTable};
use codegraph_utils::anon::AnonymousCounter;
use codegraph_walker::DiscoveredFile;

use crate::bases::{extract_bases, owner_type_name};
use crate::fields::collect_typed_fields;
use crate::imports::{extract_import_bindings, resolve_module_path};
use crate::scope::ScopeFrame;

type ScopeStack = SmallVec<[ScopeFrame; 8]>;

/// One file's definition extraction (§4.F): walks the already-parsed
/// tree once, maintaining a lexical scope stack, registering every
/// matched definition/import/base-type clause into the project-wide
/// [`SymbolTable`] and emitting the corresponding DEFINES/CONTAINS edges.
pub struct DefinitionPass<'a, S: GraphSink> {
    config: &'static LanguageConfig,
    table: &'a SymbolTable,
    sink: &'a SinkBuffer<S>,
    diagnostics: &'a Diagnostics,
    anon: AnonymousCounter,
    project_fqn: &'a Fqn,
    /// Rust-style "owning type named by a field on a clause node that
    /// isn't itself a definition" — collected during the walk, resolved
    /// against this module's own scope once the whole file has been seen
    /// (a `struct`/`impl` pair can appear in either order in source).
    pending_owner_bases: Vec<(String, Vec<(String, InheritanceKind)>)>,
}

impl<'a, S: GraphSink> DefinitionPass<'a, S> {
    pub fn new(
        config: &'static LanguageConfig,
        table: &'a SymbolTable,
        sink: &'a SinkBuffer<S>,
        diagnostics: &'a Diagnostics,
        project_fqn: &'a Fqn,
    ) -> Self {
        Self {
            config,
            table,
            sink,
            diagnostics,
            anon: AnonymousCounter::new(),
            project_fqn,
            pending_owner_bases: Vec::new(),
        }
    }

    /// Run the pass over one discovered file's parsed tree. The module's
    /// own `ImportMap` and scope are seeded before descending.
    pub fn run(&mut self, file: &DiscoveredFile, parsed: &ParsedTree) -> Result<()> {
        let mut scopes: ScopeStack = SmallVec::new();
        scopes.push(ScopeFrame::module(file.module_fqn.clone()));

        // The walker already resolved this file's package path relative
        // to the project root as `package_fqn`; reuse it rather than
        // re-deriving package segments from the filesystem path.
        let importer_package: Vec<String> = file.package_fqn.segments().skip(1).map(str::to_string).collect();

        self.visit(parsed.root(), parsed, &mut scopes, file, &importer_package);
        self.flush_pending_owner_bases(file);
        Ok(())
    }

    fn current_module(&self, scopes: &ScopeStack) -> Fqn {
        scopes
            .iter()
            .find(|f| f.kind == NodeKind::Module)
            .map(|f| f.fqn.clone())
            .expect("every scope stack starts with a Module frame")
    }

    fn enclosing_type(&self, scopes: &ScopeStack) -> Option<&ScopeFrame> {
        scopes.iter().rev().find(|f| f.kind.is_type())
    }

    fn visit(
        &mut self,
        node: Node,
        parsed: &ParsedTree,
        scopes: &mut ScopeStack,
        file: &DiscoveredFile,
        importer_package: &[String],
    ) {
        if let Some(rule) = self.config.imports.iter().find(|r| r.cst_kind == node.kind()) {
            let module_fqn = self.current_module(scopes);
            let bindings = extract_import_bindings(
                node,
                rule,
                self.config.import_path_style,
                importer_package,
                self.project_fqn,
                parsed,
            );
            let import_map = self.table.import_map(&module_fqn);
            for (local_name, target) in bindings {
                import_map.insert(local_name, target);
            }
            self.record_imports_edge(node, rule, &module_fqn, importer_package, parsed);
        }

        if let Some(rule) = self.config.definitions.iter().find(|r| r.cst_kind == node.kind()) {
            self.define(node, rule, parsed, scopes, file, importer_package);
            return; // `define` recurses into the body itself with the new scope pushed.
        }

        // Inheritance clauses whose node is distinct from any
        // DefinitionRule's node (Rust's `impl_item`) are handled here,
        // independent of the definition match above.
        for rule in self.config.inheritance {
            if rule.cst_kind != node.kind() {
                continue;
            }
            if let Some(owner_field) = rule.owner_field {
                if let Some(owner) = owner_type_name(node, owner_field, parsed) {
                    let bases = extract_bases(node, rule, parsed);
                    self.pending_owner_bases.push((owner, bases));
                }
            }
            // When `owner_field` is `None`, the clause is handled inline
            // by `define` for the definition node it's nested inside —
            // nothing further to do here.
        }

        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        for child in children {
            self.visit(child, parsed, scopes, file, importer_package);
        }
    }

    /// One IMPORTS edge per import statement (§4.G / spec.md's edge
    /// table), from this module to the module path the statement names —
    /// not to the specific member a named import binds, so `from './b'
    /// import bar` still yields `c -> b` rather than `c -> b.bar`. The
    /// target is only known to be a project module once the whole
    /// project has been walked, which has already happened by the time
    /// any file reaches definition extraction (the Walker registers
    /// every file's Module FQN up front); anything that doesn't resolve
    /// to a registered Module is recorded as an external one instead.
    fn record_imports_edge(
        &self,
        node: Node,
        rule: &codegraph_languages::rules::ImportRule,
        module_fqn: &Fqn,
        importer_package: &[String],
        parsed: &ParsedTree,
    ) {
        let Some(path_node) = node.child_by_field_name(rule.path_field) else { return };
        let path_text = parsed.text_of(path_node);
        let segments = resolve_module_path(self.config.import_path_style, importer_package, path_text);
        if segments.is_empty() {
            return;
        }
        let target_fqn = self.project_fqn.join_path(&segments.join("."));

        match self.table.lookup_absolute(&target_fqn) {
            Some(NodeKind::Module) => {
                if self.sink.ensure_relationship(
                    NodeRef::new(NodeKind::Module, module_fqn),
                    EdgeKind::Imports,
                    NodeRef::new(NodeKind::Module, &target_fqn),
                    &PropMap::new(),
                ) {
                    self.diagnostics.relationship_emitted();
                }
            }
            _ => {
                let raw = segments.join(".");
                if self.sink.ensure_external_node(NodeKind::Module, &raw, &PropMap::new()) {
                    self.diagnostics.node_emitted();
                }
                if self.sink.ensure_relationship(
                    NodeRef::new(NodeKind::Module, module_fqn),
                    EdgeKind::Imports,
                    NodeRef::external(NodeKind::Module, &raw),
                    &PropMap::new(),
                ) {
                    self.diagnostics.relationship_emitted();
                }
            }
        }
    }

    fn define(
        &mut self,
        node: Node,
        rule: &codegraph_languages::rules::DefinitionRule,
        parsed: &ParsedTree,
        scopes: &mut ScopeStack,
        file: &DiscoveredFile,
        importer_package: &[String],
    ) {
        let name = node
            .child_by_field_name(rule.name_field)
            .map(|n| parsed.text_of(n).to_string())
            .filter(|s| !s.is_empty())
            .or_else(|| self.anonymous_name(node, parsed))
            .unwrap_or_else(|| self.anon.next_name());

        let parent = scopes.last().expect("scope stack is never empty").clone();
        let fqn = parent.fqn.child(&name);
        let module_fqn = self.current_module(scopes);

        match self.table.register(codegraph_symbols::DefinitionEntry::new(
            fqn.clone(),
            rule.kind,
            file.language,
            module_fqn,
        )) {
            Ok(()) => {}
            Err(_) => {
                self.diagnostics.duplicate_definition(fqn.clone());
                // The existing registration (and whatever scope it
                // pushed the first time it was seen) stands; still
                // recurse into this node's body so nested definitions
                // under the duplicate are discovered, just without a
                // second top-level registration.
            }
        }

        if self.sink.ensure_node(rule.kind, &fqn, &PropMap::new()) {
            self.diagnostics.node_emitted();
        }
        if self.sink.ensure_relationship(
            NodeRef::new(parent.kind, &parent.fqn),
            EdgeKind::Contains,
            NodeRef::new(rule.kind, &fqn),
            &PropMap::new(),
        ) {
            self.diagnostics.relationship_emitted();
        }
        if self.sink.ensure_relationship(
            NodeRef::new(parent.kind, &parent.fqn),
            EdgeKind::Defines,
            NodeRef::new(rule.kind, &fqn),
            &PropMap::new(),
        ) {
            self.diagnostics.relationship_emitted();
        }

        if rule.kind == NodeKind::Method {
            if let Some(owner) = self.enclosing_type(scopes) {
                self.table.set_owner(&fqn, owner.fqn.clone());
                if self.is_constructor(&name, owner) {
                    self.table.mark_constructor(&fqn);
                }
            }
        }

        if rule.kind.is_type() {
            let inline_bases = self.inline_bases(node, parsed);
            if !inline_bases.is_empty() {
                self.table.set_bases_raw(&fqn, inline_bases);
            }
            if let Some(body) = node.child_by_field_name(rule.body_field) {
                let mut fields = Vec::new();
                collect_typed_fields(body, self.config, parsed, &mut fields);
                if !fields.is_empty() {
                    self.table.set_fields_raw(&fqn, fields);
                }
            }
        }

        scopes.push(ScopeFrame { fqn, kind: rule.kind });
        if let Some(body) = node.child_by_field_name(rule.body_field) {
            let mut cursor = body.walk();
            let children: Vec<Node> = body.named_children(&mut cursor).collect();
            for child in children {
                self.visit(child, parsed, scopes, file, importer_package);
            }
        }
        scopes.pop();
    }

    /// Base-type clauses nested directly under the definition node
    /// itself (the common case: Python/JS/TS/Java/C#/C++ all expose the
    /// clause as a field, or an immediate child, of the class node).
    fn inline_bases(&self, node: Node, parsed: &ParsedTree) -> Vec<(String, InheritanceKind)> {
        let mut bases = Vec::new();
        for rule in self.config.inheritance {
            if rule.owner_field.is_some() {
                continue; // handled separately in `visit`/`pending_owner_bases`.
            }
            if rule.cst_kind == node.kind() {
                bases.extend(extract_bases(node, rule, parsed));
                continue;
            }
            // The clause may live on a distinct sub-node that is itself
            // a direct child of this definition (TypeScript's
            // `class_heritage`, Java's `superclass`/`super_interfaces`).
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == rule.cst_kind {
                    bases.extend(extract_bases(child, rule, parsed));
                }
            }
        }
        bases
    }

    /// A definition with no identifier of its own first checks whether
    /// its *parent* node's kind is a known anonymous-binding site (an
    /// assignment, a variable declarator, a default export) and borrows
    /// that binding's name; `None` falls back to the per-module counter.
    fn anonymous_name(&self, node: Node, parsed: &ParsedTree) -> Option<String> {
        let parent = node.parent()?;
        let (_, name_field) = self
            .config
            .anonymous_binding_parents
            .iter()
            .find(|(kind, _)| *kind == parent.kind())?;
        let bound = parent.child_by_field_name(name_field)?;
        let text = parsed.text_of(bound);
        (!text.is_empty()).then(|| text.to_string())
    }

    fn is_constructor(&self, method_name: &str, owner: &ScopeFrame) -> bool {
        match self.config.constructor_naming {
            ConstructorNaming::FixedName(fixed) => method_name == fixed,
            ConstructorNaming::SameAsType => method_name == owner.fqn.simple_name(),
            ConstructorNaming::None => false,
        }
    }

    /// After the whole file has been walked, resolve each Rust-style
    /// `impl Trait for Type` clause's `Type` name against this module's
    /// own scope (the struct may have been defined before or after the
    /// `impl` block) and merge its bases onto the existing entry rather
    /// than overwriting anything already recorded there.
    fn flush_pending_owner_bases(&mut self, file: &DiscoveredFile) {
        if self.pending_owner_bases.is_empty() {
            return;
        }
        let mut merged: HashMap<Fqn, Vec<(String, InheritanceKind)>> = HashMap::new();
        for (owner_name, bases) in self.pending_owner_bases.drain(..) {
            let Some(owner_fqn) = self.table.child_of(&file.module_fqn, &owner_name) else {
                continue;
            };
            merged.entry(owner_fqn).or_default().extend(bases);
        }
        for (owner_fqn, mut bases) in merged {
            if let Some(entry) = self.table.entry(&owner_fqn) {
                bases.splice(0..0, entry.bases_raw);
            }
            self.table.set_bases_raw(&owner_fqn, bases);
        }
    }
}

/// Resolve an import-map lookup used only for the rare case a module
/// needs to check whether a name it just imported is external — exposed
/// for the Resolver's convenience rather than used internally here.
pub fn is_external(target: &ImportTarget) -> bool {
    matches!(target, ImportTarget::External(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use codegraph_core::Language;
    use codegraph_parse::{load_language, parse};
    use codegraph_sink::InMemoryGraphSink;
    use std::path::PathBuf;

    fn discovered(path: &str, language: Language, package: &str, module: &str) -> DiscoveredFile {
        DiscoveredFile {
            absolute_path: PathBuf::from(path),
            language,
            package_fqn: Fqn::from_dotted(package),
            module_fqn: Fqn::from_dotted(module),
        }
    }

    #[test]
    fn registers_a_python_class_and_method_with_contains_and_defines() {
        let source = b"class Greeter:\n    def hello(self):\n        pass\n".to_vec();
        let handle = load_language(Language::Python).unwrap();
        let parsed = parse(source, &handle).unwrap();

        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let diagnostics = Diagnostics::new(false);
        let project_fqn = Fqn::root("proj");
        let file = discovered("proj/greeter.py", Language::Python, "proj", "proj.greeter");

        let mut pass = DefinitionPass::new(
            codegraph_languages::config_for(Language::Python),
            &table,
            &sink,
            &diagnostics,
            &project_fqn,
        );
        pass.run(&file, &parsed).unwrap();

        let class_fqn = Fqn::from_dotted("proj.greeter.Greeter");
        let method_fqn = Fqn::from_dotted("proj.greeter.Greeter.hello");
        assert_eq!(table.lookup_absolute(&class_fqn), Some(NodeKind::Class));
        assert_eq!(table.lookup_absolute(&method_fqn), Some(NodeKind::Method));
        assert_eq!(table.entry(&method_fqn).unwrap().owner, Some(class_fqn.clone()));
        assert!(!table.entry(&method_fqn).unwrap().is_constructor);
        assert!(sink.inner().has_relationship("proj.greeter", "DEFINES", "proj.greeter.Greeter"));
        assert!(sink.inner().has_relationship("proj.greeter.Greeter", "CONTAINS", "proj.greeter.Greeter.hello"));
    }

    #[test]
    fn python_constructor_is_marked() {
        let source = b"class Greeter:\n    def __init__(self):\n        pass\n".to_vec();
        let handle = load_language(Language::Python).unwrap();
        let parsed = parse(source, &handle).unwrap();

        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let diagnostics = Diagnostics::new(false);
        let project_fqn = Fqn::root("proj");
        let file = discovered("proj/greeter.py", Language::Python, "proj", "proj.greeter");

        let mut pass = DefinitionPass::new(
            codegraph_languages::config_for(Language::Python),
            &table,
            &sink,
            &diagnostics,
            &project_fqn,
        );
        pass.run(&file, &parsed).unwrap();

        let ctor_fqn = Fqn::from_dotted("proj.greeter.Greeter.__init__");
        assert!(table.entry(&ctor_fqn).unwrap().is_constructor);
    }

    #[test]
    fn bare_python_import_binds_top_segment() {
        let source = b"import os.path\n".to_vec();
        let handle = load_language(Language::Python).unwrap();
        let parsed = parse(source, &handle).unwrap();

        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let diagnostics = Diagnostics::new(false);
        let project_fqn = Fqn::root("proj");
        let file = discovered("proj/main.py", Language::Python, "proj", "proj.main");

        let mut pass = DefinitionPass::new(
            codegraph_languages::config_for(Language::Python),
            &table,
            &sink,
            &diagnostics,
            &project_fqn,
        );
        pass.run(&file, &parsed).unwrap();

        let target = table.lookup_in_module(&file.module_fqn, "os");
        assert_eq!(target, Some(ImportTarget::Resolved(Fqn::from_dotted("proj.os"))));
    }

    #[test]
    fn python_class_records_raw_base_name() {
        let source = b"class Base:\n    pass\nclass Dog(Base):\n    pass\n".to_vec();
        let handle = load_language(Language::Python).unwrap();
        let parsed = parse(source, &handle).unwrap();

        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let diagnostics = Diagnostics::new(false);
        let project_fqn = Fqn::root("proj");
        let file = discovered("proj/animals.py", Language::Python, "proj", "proj.animals");

        let mut pass = DefinitionPass::new(
            codegraph_languages::config_for(Language::Python),
            &table,
            &sink,
            &diagnostics,
            &project_fqn,
        );
        pass.run(&file, &parsed).unwrap();

        let dog = Fqn::from_dotted("proj.animals.Dog");
        let entry = table.entry(&dog).unwrap();
        assert_eq!(entry.bases_raw, vec![("Base".to_string(), InheritanceKind::Extends)]);
    }

    #[test]
    fn import_statement_emits_imports_edge_to_a_known_module() {
        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let diagnostics = Diagnostics::new(false);
        let project_fqn = Fqn::root("proj");

        // As the Walker would have registered it before any file reaches
        // definition extraction.
        table.register_node_kind(&Fqn::from_dotted("proj.helpers"), NodeKind::Module, Language::Python, Fqn::from_dotted("proj.helpers"));

        let source = b"import helpers\n".to_vec();
        let handle = load_language(Language::Python).unwrap();
        let parsed = parse(source, &handle).unwrap();
        let file = discovered("proj/main.py", Language::Python, "proj", "proj.main");

        let mut pass = DefinitionPass::new(codegraph_languages::config_for(Language::Python), &table, &sink, &diagnostics, &project_fqn);
        pass.run(&file, &parsed).unwrap();

        assert!(sink.inner().has_relationship("proj.main", "IMPORTS", "proj.helpers"));
    }

    #[test]
    fn import_of_unknown_module_records_an_external_node() {
        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let diagnostics = Diagnostics::new(false);
        let project_fqn = Fqn::root("proj");

        let source = b"import os\n".to_vec();
        let handle = load_language(Language::Python).unwrap();
        let parsed = parse(source, &handle).unwrap();
        let file = discovered("proj/main.py", Language::Python, "proj", "proj.main");

        let mut pass = DefinitionPass::new(codegraph_languages::config_for(Language::Python), &table, &sink, &diagnostics, &project_fqn);
        pass.run(&file, &parsed).unwrap();

        assert!(sink.inner().has_relationship("proj.main", "IMPORTS", "os"));
    }

    #[test]
    fn rust_impl_block_attaches_to_struct_defined_earlier_in_file() {
        let source = b"struct Widget;\ntrait Drawable {}\nimpl Drawable for Widget {}\n".to_vec();
        let handle = load_language(Language::Rust).unwrap();
        let parsed = parse(source, &handle).unwrap();

        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let diagnostics = Diagnostics::new(false);
        let project_fqn = Fqn::root("proj");
        let file = discovered("proj/widget.rs", Language::Rust, "proj", "proj.widget");

        let mut pass = DefinitionPass::new(
            codegraph_languages::config_for(Language::Rust),
            &table,
            &sink,
            &diagnostics,
            &project_fqn,
        );
        pass.run(&file, &parsed).unwrap();

        let widget = Fqn::from_dotted("proj.widget.Widget");
        let entry = table.entry(&widget).unwrap();
        assert_eq!(entry.bases_raw, vec![("Drawable".to_string(), InheritanceKind::Implements)]);
    }
}

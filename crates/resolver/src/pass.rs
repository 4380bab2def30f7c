// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use smallvec::SmallVec;
use tree_sitter::Node;

use codegraph_core::{Diagnostics, EdgeKind, Fqn, NodeKind, NodeRef, PropMap};
use codegraph_languages::rules::{ConstructorCallRule, ConstructorNaming, InheritanceKind};
use codegraph_languages::LanguageConfig;
use codegraph_parse::ParsedTree;
use codegraph_sink::{GraphSink, SinkBuffer};
use codegraph_symbols::{ImportTarget, SymbolTable};
use codegraph_utils::anon::AnonymousCounter;
use codegraph_walker::DiscoveredFile;

use crate::chain::{call_chain, leading_identifier};
use crate::locals::LocalScope;
use crate::receiver::FieldTypeCache;
use crate::scope::ScopeFrame;

type ScopeStack = SmallVec<[ScopeFrame; 8]>;

/// One resolved step of a callee chain: either a symbol this project
/// defines (with its known kind), or a name that bottomed out outside
/// the project — an import whose target was never registered, or an
/// `ImportTarget::External` directly.
#[derive(Debug, Clone)]
enum Step {
    Internal(Fqn, NodeKind),
    External(String),
}

/// One file's reference resolution (§4.G): rebuilds the identical
/// scope-stack walk the Definition Extractor performed over the same
/// tree, so every definition node recomputes the exact same FQN — then,
/// at each type definition, resolves its recorded `bases_raw` into
/// INHERITS/IMPLEMENTS edges, and at each call/constructor site,
/// classifies and resolves the callee into a CALLS edge.
pub struct ResolverPass<'a, S: GraphSink> {
    config: &'static LanguageConfig,
    table: &'a SymbolTable,
    sink: &'a SinkBuffer<S>,
    diagnostics: &'a Diagnostics,
    project_fqn: &'a Fqn,
    field_types: &'a FieldTypeCache,
    anon: AnonymousCounter,
}

impl<'a, S: GraphSink> ResolverPass<'a, S> {
    pub fn new(
        config: &'static LanguageConfig,
        table: &'a SymbolTable,
        sink: &'a SinkBuffer<S>,
        diagnostics: &'a Diagnostics,
        project_fqn: &'a Fqn,
        field_types: &'a FieldTypeCache,
    ) -> Self {
        Self {
            config,
            table,
            sink,
            diagnostics,
            project_fqn,
            field_types,
            anon: AnonymousCounter::new(),
        }
    }

    pub fn run(&mut self, file: &DiscoveredFile, parsed: &ParsedTree) {
        let mut scopes: ScopeStack = SmallVec::new();
        scopes.push(ScopeFrame::module(file.module_fqn.clone()));
        self.visit(parsed.root(), parsed, &mut scopes, &LocalScope::default());
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

    fn visit(&mut self, node: Node, parsed: &ParsedTree, scopes: &mut ScopeStack, locals: &LocalScope) {
        if let Some(rule) = self.config.definitions.iter().find(|r| r.cst_kind == node.kind()) {
            self.enter_definition(node, rule, parsed, scopes);
            return; // recurses into the body itself, exactly like the Definition Extractor.
        }

        if let Some(rule) = self.config.calls.iter().find(|r| r.cst_kind == node.kind()) {
            self.resolve_call_site(node, rule, parsed, scopes, locals);
        }

        if self.is_constructor_site(node.kind()) {
            self.resolve_constructor_site(node, parsed, scopes, locals);
        }

        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        for child in children {
            self.visit(child, parsed, scopes, locals);
        }
    }

    /// Recomputes the same FQN `DefinitionPass::define` assigned this
    /// node, pushes the matching scope frame, resolves this type's bases
    /// if any were recorded, and recurses into the body with a fresh
    /// `LocalScope` when the definition is callable.
    fn enter_definition(&mut self, node: Node, rule: &codegraph_languages::rules::DefinitionRule, parsed: &ParsedTree, scopes: &mut ScopeStack) {
        let name = node
            .child_by_field_name(rule.name_field)
            .map(|n| parsed.text_of(n).to_string())
            .filter(|s| !s.is_empty())
            .or_else(|| self.anonymous_name(node, parsed))
            .unwrap_or_else(|| self.anon.next_name());

        let parent = scopes.last().expect("scope stack is never empty").clone();
        let fqn = parent.fqn.child(&name);
        let module_fqn = self.current_module(scopes);

        if rule.kind.is_type() {
            self.resolve_inheritance(&fqn, rule.kind, &module_fqn);
        }

        let body = node.child_by_field_name(rule.body_field);
        let child_locals = if rule.kind.is_callable() {
            body.map(|b| LocalScope::build(b, self.config, parsed)).unwrap_or_default()
        } else {
            LocalScope::default()
        };

        scopes.push(ScopeFrame { fqn, kind: rule.kind });
        if let Some(body) = body {
            let mut cursor = body.walk();
            let children: Vec<Node> = body.named_children(&mut cursor).collect();
            for child in children {
                self.visit(child, parsed, scopes, &child_locals);
            }
        }
        scopes.pop();
    }

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

    /// Resolve this type's own recorded base clauses into INHERITS or
    /// IMPLEMENTS edges. A base that doesn't resolve within the module's
    /// own scope is recorded as an external node rather than dropped —
    /// unlike a dangling call, a named base clause is never ambiguous
    /// about what it refers to, just possibly outside the project.
    fn resolve_inheritance(&self, fqn: &Fqn, kind: NodeKind, module: &Fqn) {
        let Some(entry) = self.table.entry(fqn) else { return };
        if entry.bases_raw.is_empty() {
            return;
        }
        for (raw, inheritance) in &entry.bases_raw {
            let edge_kind = match inheritance {
                InheritanceKind::Extends => EdgeKind::Inherits,
                InheritanceKind::Implements => EdgeKind::Implements,
            };
            let resolved = match self.table.lookup_in_module(module, raw) {
                Some(ImportTarget::Resolved(base_fqn)) => self.table.lookup_absolute(&base_fqn).map(|k| (base_fqn, k)),
                _ => None,
            };
            match resolved {
                Some((base_fqn, base_kind)) => {
                    if self
                        .sink
                        .ensure_relationship(NodeRef::new(kind, fqn), edge_kind, NodeRef::new(base_kind, &base_fqn), &PropMap::new())
                    {
                        self.diagnostics.relationship_emitted();
                    }
                }
                None => {
                    if self.sink.ensure_external_node(NodeKind::Class, raw, &PropMap::new()) {
                        self.diagnostics.node_emitted();
                    }
                    let mut props = PropMap::new();
                    props.insert("resolved".to_string(), serde_json::Value::Bool(false));
                    props.insert("external_name".to_string(), serde_json::Value::String(raw.clone()));
                    if self
                        .sink
                        .ensure_relationship(NodeRef::new(kind, fqn), edge_kind, NodeRef::external(NodeKind::Class, raw), &props)
                    {
                        self.diagnostics.relationship_emitted();
                    }
                    self.diagnostics.external_reference(fqn.clone(), "base", raw.clone());
                }
            }
        }
    }

    fn is_constructor_site(&self, node_kind: &str) -> bool {
        match self.config.constructor_call {
            ConstructorCallRule::Keyword { cst_kind, .. } | ConstructorCallRule::StructLiteral { cst_kind, .. } => cst_kind == node_kind,
            ConstructorCallRule::UppercaseCallee => false,
        }
    }

    fn resolve_call_site(&self, node: Node, rule: &codegraph_languages::rules::CallRule, parsed: &ParsedTree, scopes: &ScopeStack, locals: &LocalScope) {
        let module = self.current_module(scopes);
        let caller = scopes.last().expect("scope stack is never empty").clone();

        let Some(chain_nodes) = call_chain(node, rule, &self.config.member_access, &self.config.calls) else {
            self.diagnostics.unresolved_call_dropped(caller.fqn, parsed.text_of(node).to_string());
            return;
        };
        let texts: Vec<&str> = chain_nodes.iter().map(|n| parsed.text_of(*n)).collect();
        let step = self.resolve_chain(&texts, scopes, locals, &module);
        self.finish_call(&caller, step, node, parsed);
    }

    /// `new T(...)`/`T{ ... }`-shaped sites: only the type's leading
    /// name is needed (a qualified leading path, e.g. `pkg.Foo(...)`,
    /// will fail to resolve as a type and is silently dropped — a
    /// documented gap rather than a wrong edge).
    fn resolve_constructor_site(&self, node: Node, parsed: &ParsedTree, scopes: &ScopeStack, locals: &LocalScope) {
        let type_field = match self.config.constructor_call {
            ConstructorCallRule::Keyword { type_field, .. } | ConstructorCallRule::StructLiteral { type_field, .. } => type_field,
            ConstructorCallRule::UppercaseCallee => return,
        };
        let Some(type_node) = node.child_by_field_name(type_field) else { return };
        let Some(name) = leading_identifier(type_node, parsed) else { return };

        let module = self.current_module(scopes);
        let caller = scopes.last().expect("scope stack is never empty").clone();
        let step = self.resolve_leftmost(&name, scopes, locals, &module);
        self.finish_call(&caller, step, node, parsed);
    }

    fn resolve_chain(&self, segments: &[&str], scopes: &ScopeStack, locals: &LocalScope, module: &Fqn) -> Option<Step> {
        let mut iter = segments.iter();
        let mut step = self.resolve_leftmost(iter.next()?, scopes, locals, module)?;
        for segment in iter {
            step = self.descend(&step, segment)?;
        }
        Some(step)
    }

    /// The three receiver-typing cues, self/super, and the import map,
    /// in the order a reader would reach for them: keyword receivers
    /// first (unambiguous by construction), then anything locally bound
    /// in this function (shadowing the import map for that name), then
    /// the module's own import map.
    fn resolve_leftmost(&self, name: &str, scopes: &ScopeStack, locals: &LocalScope, module: &Fqn) -> Option<Step> {
        if self.config.self_token.is_some_and(|tok| tok == name) {
            let owner = self.enclosing_type(scopes)?;
            return Some(Step::Internal(owner.fqn.clone(), owner.kind));
        }
        if self.config.super_token.is_some_and(|tok| tok == name) {
            let owner = self.enclosing_type(scopes)?;
            let base_fqn = self.table.first_resolved_base(&owner.fqn)?;
            let base_kind = self.table.lookup_absolute(&base_fqn)?;
            return Some(Step::Internal(base_fqn, base_kind));
        }
        if locals.is_shadowed(name) {
            if let Some(raw_ty) = locals.inferred_type(name) {
                if let Some(fqn) = self.resolve_type_name(module, raw_ty) {
                    let kind = self.table.lookup_absolute(&fqn)?;
                    return Some(Step::Internal(fqn, kind));
                }
            }
            let fqn = self.table.child_of(module, name)?;
            let kind = self.table.lookup_absolute(&fqn)?;
            return Some(Step::Internal(fqn, kind));
        }
        match self.table.lookup_in_module(module, name)? {
            ImportTarget::External(raw) => Some(Step::External(raw)),
            ImportTarget::Resolved(fqn) => match self.resolve_through_reexports(&fqn, 8) {
                Some((resolved_fqn, kind)) => Some(Step::Internal(resolved_fqn, kind)),
                None => Some(Step::External(self.strip_project_prefix(&fqn))),
            },
        }
    }

    /// An import target that isn't itself a registered definition may
    /// still be a re-export: `b.py`'s `from a import foo as bar` binds
    /// `bar` in *b's own* import map rather than registering `b.bar` as
    /// a definition, so a third module's `from b import bar` resolves to
    /// the never-defined `proj.b.bar` unless that name is chased one
    /// more hop through `b`'s import map. Bounded by `depth` so a
    /// circular re-export (`a` re-exports from `b`, `b` from `a`)
    /// terminates rather than looping.
    fn resolve_through_reexports(&self, fqn: &Fqn, depth: u8) -> Option<(Fqn, NodeKind)> {
        if let Some(kind) = self.table.lookup_absolute(fqn) {
            return Some((fqn.clone(), kind));
        }
        if depth == 0 {
            return None;
        }
        let parent = fqn.parent()?;
        match self.table.lookup_in_module(&parent, fqn.simple_name())? {
            ImportTarget::Resolved(next) if next != *fqn => self.resolve_through_reexports(&next, depth - 1),
            _ => None,
        }
    }

    fn resolve_type_name(&self, module: &Fqn, raw_ty: &str) -> Option<Fqn> {
        match self.table.lookup_in_module(module, raw_ty)? {
            ImportTarget::Resolved(fqn) if self.table.lookup_absolute(&fqn).is_some() => Some(fqn),
            _ => None,
        }
    }

    /// One hop along a chain: a type receiver first checks its own and
    /// inherited members (`lookup_member`, covering methods and nested
    /// types), then falls back to cue #2 — a typed field whose declared
    /// type becomes the new receiver. A callable (non-type) receiver
    /// arises when a previous hop landed on a method rather than a type
    /// — `Storage.get_instance().clear_all()`'s chain is flattened to
    /// `[Storage, get_instance, clear_all]`, so after `get_instance` the
    /// step sits on that method rather than on `Storage`. Absent
    /// declared-return-type tracking, its `owner` is used as the type
    /// the call is assumed to return (§4.G scenario (b): "the type name
    /// of the qualifier otherwise"). Anything else with direct children
    /// (module, package) falls through to a plain child lookup.
    fn descend(&self, step: &Step, segment: &str) -> Option<Step> {
        match step {
            Step::External(name) => Some(Step::External(format!("{name}.{segment}"))),
            Step::Internal(fqn, kind) => {
                if kind.is_type() {
                    if let Some(member_fqn) = self.table.lookup_member(fqn, segment) {
                        let member_kind = self.table.lookup_absolute(&member_fqn)?;
                        return Some(Step::Internal(member_fqn, member_kind));
                    }
                    let field_fqn = self.field_types.resolve(self.table, fqn, segment)?;
                    let field_kind = self.table.lookup_absolute(&field_fqn)?;
                    return Some(Step::Internal(field_fqn, field_kind));
                }
                if kind.is_callable() {
                    if let Some(owner) = self.table.entry(fqn).and_then(|e| e.owner.clone()) {
                        let owner_kind = self.table.lookup_absolute(&owner)?;
                        return self.descend(&Step::Internal(owner, owner_kind), segment);
                    }
                }
                let next_fqn = self.table.child_of(fqn, segment)?;
                let next_kind = self.table.lookup_absolute(&next_fqn)?;
                Some(Step::Internal(next_fqn, next_kind))
            }
        }
    }

    fn strip_project_prefix(&self, fqn: &Fqn) -> String {
        let prefixed = format!("{}.", self.project_fqn.as_str());
        fqn.as_str().strip_prefix(prefixed.as_str()).unwrap_or_else(|| fqn.as_str()).to_string()
    }

    /// A resolved type becomes its constructor (per this language's
    /// `ConstructorNaming` convention) when that method exists and is
    /// tagged `is_constructor`; otherwise the type itself is the target,
    /// matching languages with no distinct constructor method (Rust,
    /// Go) or where no resolvable constructor was found.
    fn constructor_target(&self, type_fqn: &Fqn, type_kind: NodeKind) -> (Fqn, NodeKind) {
        let ctor_name = match self.config.constructor_naming {
            ConstructorNaming::FixedName(fixed) => Some(fixed.to_string()),
            ConstructorNaming::SameAsType => Some(type_fqn.simple_name().to_string()),
            ConstructorNaming::None => None,
        };
        let ctor = ctor_name
            .and_then(|name| self.table.child_of(type_fqn, &name))
            .filter(|ctor_fqn| self.table.entry(ctor_fqn).is_some_and(|e| e.is_constructor));
        match ctor {
            Some(ctor_fqn) => (ctor_fqn, NodeKind::Method),
            None => (type_fqn.clone(), type_kind),
        }
    }

    fn finish_call(&self, caller: &ScopeFrame, step: Option<Step>, node: Node, parsed: &ParsedTree) {
        match step {
            None => {
                self.diagnostics.unresolved_call_dropped(caller.fqn.clone(), parsed.text_of(node).to_string());
            }
            Some(Step::External(name)) => {
                if self.sink.ensure_external_node(NodeKind::Function, &name, &PropMap::new()) {
                    self.diagnostics.node_emitted();
                }
                if self.sink.ensure_relationship(
                    NodeRef::new(caller.kind, &caller.fqn),
                    EdgeKind::Calls,
                    NodeRef::external(NodeKind::Function, &name),
                    &PropMap::new(),
                ) {
                    self.diagnostics.relationship_emitted();
                }
                self.diagnostics.external_reference(caller.fqn.clone(), "call", name);
            }
            Some(Step::Internal(fqn, kind)) => {
                let (target_fqn, target_kind) = if kind.is_type() {
                    self.constructor_target(&fqn, kind)
                } else if kind.is_callable() {
                    (fqn, kind)
                } else {
                    self.diagnostics.unresolved_call_dropped(caller.fqn.clone(), parsed.text_of(node).to_string());
                    return;
                };
                if self.sink.ensure_relationship(
                    NodeRef::new(caller.kind, &caller.fqn),
                    EdgeKind::Calls,
                    NodeRef::new(target_kind, &target_fqn),
                    &PropMap::new(),
                ) {
                    self.diagnostics.relationship_emitted();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codegraph_core::Language;
    use codegraph_definitions::DefinitionPass;
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

    fn define_and_resolve(source: &[u8], language: Language, file: &DiscoveredFile) -> (SymbolTable, SinkBuffer<InMemoryGraphSink>, Diagnostics) {
        let handle = load_language(language).unwrap();
        let parsed = parse(source.to_vec(), &handle).unwrap();
        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let diagnostics = Diagnostics::new(false);
        let project_fqn = Fqn::from_dotted(file.package_fqn.segments().next().unwrap().to_string());

        let mut definer = DefinitionPass::new(codegraph_languages::config_for(language), &table, &sink, &diagnostics, &project_fqn);
        definer.run(file, &parsed).unwrap();
        table.freeze();

        let field_types = FieldTypeCache::new();
        let mut resolver = ResolverPass::new(codegraph_languages::config_for(language), &table, &sink, &diagnostics, &project_fqn, &field_types);
        resolver.run(file, &parsed);

        (table, sink, diagnostics)
    }

    #[test]
    fn resolves_self_call_to_sibling_method() {
        let source = b"class Greeter:\n    def helper(self):\n        pass\n    def hello(self):\n        self.helper()\n";
        let file = discovered("proj/greeter.py", Language::Python, "proj", "proj.greeter");
        let (_table, sink, diagnostics) = define_and_resolve(source, Language::Python, &file);

        assert!(sink.inner().has_relationship("proj.greeter.Greeter.hello", "CALLS", "proj.greeter.Greeter.helper"));
        assert_eq!(diagnostics.stats().unresolved_calls_dropped, 0);
    }

    #[test]
    fn resolves_inherits_edge_from_recorded_base() {
        let source = b"class Base:\n    pass\nclass Dog(Base):\n    pass\n";
        let file = discovered("proj/animals.py", Language::Python, "proj", "proj.animals");
        let (_table, sink, _diagnostics) = define_and_resolve(source, Language::Python, &file);

        assert!(sink.inner().has_relationship("proj.animals.Dog", "INHERITS", "proj.animals.Base"));
    }

    #[test]
    fn unresolved_base_carries_resolved_false_and_external_name() {
        let source = b"class Dog(Animal):\n    pass\n";
        let file = discovered("proj/animals.py", Language::Python, "proj", "proj.animals");
        let (_table, sink, diagnostics) = define_and_resolve(source, Language::Python, &file);

        assert!(sink.inner().has_relationship("proj.animals.Dog", "INHERITS", "Animal"));
        let props = sink
            .inner()
            .relationship_props("proj.animals.Dog", "INHERITS", "Animal")
            .expect("edge should carry props");
        assert_eq!(props.get("resolved"), Some(&serde_json::Value::Bool(false)));
        assert_eq!(props.get("external_name"), Some(&serde_json::Value::String("Animal".to_string())));
        assert_eq!(diagnostics.stats().external_references_recorded, 1);
    }

    #[test]
    fn drops_call_to_unknown_name_without_emitting_an_edge() {
        let source = b"def f():\n    totally_unknown_function()\n";
        let file = discovered("proj/main.py", Language::Python, "proj", "proj.main");
        let (_table, sink, diagnostics) = define_and_resolve(source, Language::Python, &file);

        assert_eq!(diagnostics.stats().unresolved_calls_dropped, 1);
        assert!(!sink.inner().has_relationship("proj.main.f", "CALLS", "proj.main.totally_unknown_function"));
    }

    #[test]
    fn records_external_reference_for_imported_call() {
        let source = b"import os\ndef f():\n    os.getcwd()\n";
        let file = discovered("proj/main.py", Language::Python, "proj", "proj.main");
        let (_table, sink, diagnostics) = define_and_resolve(source, Language::Python, &file);

        assert!(sink.inner().has_relationship("proj.main.f", "CALLS", "os.getcwd"));
        assert_eq!(diagnostics.stats().external_references_recorded, 1);
    }

    #[test]
    fn resolves_chained_call_through_a_call_expression_receiver() {
        let source = b"class Storage:\n    @staticmethod\n    def get_instance():\n        pass\n    def clear_all(self):\n        pass\n\ndef use():\n    Storage.get_instance().clear_all()\n";
        let file = discovered("proj/storage.py", Language::Python, "proj", "proj.storage");
        let (_table, sink, diagnostics) = define_and_resolve(source, Language::Python, &file);

        assert!(sink.inner().has_relationship("proj.storage.use", "CALLS", "proj.storage.Storage.get_instance"));
        assert!(sink.inner().has_relationship("proj.storage.use", "CALLS", "proj.storage.Storage.clear_all"));
        assert_eq!(diagnostics.stats().unresolved_calls_dropped, 0);
    }

    #[test]
    fn resolves_call_through_an_aliased_reexport_chain() {
        let handle = load_language(Language::Python).unwrap();
        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let diagnostics = Diagnostics::new(false);
        let project_fqn = Fqn::root("proj");

        let a = discovered("proj/a.py", Language::Python, "proj", "proj.a");
        let a_tree = parse(b"def foo():\n    pass\n".to_vec(), &handle).unwrap();
        let b = discovered("proj/b.py", Language::Python, "proj", "proj.b");
        let b_tree = parse(b"from a import foo as bar\n".to_vec(), &handle).unwrap();
        let c = discovered("proj/c.py", Language::Python, "proj", "proj.c");
        let c_tree = parse(b"from b import bar\ndef use():\n    bar()\n".to_vec(), &handle).unwrap();

        // As the Walker would have registered each module's kind before
        // any file reaches definition extraction.
        for module in [&a.module_fqn, &b.module_fqn, &c.module_fqn] {
            table.register_node_kind(module, NodeKind::Module, Language::Python, module.clone());
        }

        for (file, tree) in [(&a, &a_tree), (&b, &b_tree), (&c, &c_tree)] {
            let mut definer = DefinitionPass::new(codegraph_languages::config_for(Language::Python), &table, &sink, &diagnostics, &project_fqn);
            definer.run(file, tree).unwrap();
        }
        table.freeze();

        let field_types = FieldTypeCache::new();
        for (file, tree) in [(&a, &a_tree), (&b, &b_tree), (&c, &c_tree)] {
            let mut resolver = ResolverPass::new(codegraph_languages::config_for(Language::Python), &table, &sink, &diagnostics, &project_fqn, &field_types);
            resolver.run(file, tree);
        }

        assert!(sink.inner().has_relationship("proj.c.use", "CALLS", "proj.a.foo"));
        assert!(sink.inner().has_relationship("proj.b", "IMPORTS", "proj.a"));
        assert!(sink.inner().has_relationship("proj.c", "IMPORTS", "proj.b"));
    }

    #[test]
    fn constructor_call_resolves_to_tagged_constructor_method() {
        let source = b"class Widget:\n    def __init__(self):\n        pass\n\ndef make():\n    w = Widget()\n";
        let file = discovered("proj/widgets.py", Language::Python, "proj", "proj.widgets");
        let (_table, sink, _diagnostics) = define_and_resolve(source, Language::Python, &file);

        assert!(sink.inner().has_relationship("proj.widgets.make", "CALLS", "proj.widgets.Widget.__init__"));
    }
}

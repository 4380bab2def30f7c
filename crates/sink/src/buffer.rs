// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use dashmap::DashSet;

use codegraph_core::{EdgeKind, Fqn, NodeKind, NodeRef, PropMap};

use crate::sink::GraphSink;

type NodeKey = (&'static str, String);
type EdgeKey = (&'static str, String, &'static str, &'static str, String);

/// A write-through, deduplicating buffer in front of any [`GraphSink`]
/// (§4.C). The dedup sets persist for the lifetime of one pipeline run —
/// `flush` forwards to the inner sink but never clears them, since
/// dedup must hold across phase boundaries, not just within a phase.
pub struct SinkBuffer<S: GraphSink> {
    inner: S,
    node_keys: DashSet<NodeKey>,
    edge_keys: DashSet<EdgeKey>,
}

impl<S: GraphSink> SinkBuffer<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            node_keys: DashSet::new(),
            edge_keys: DashSet::new(),
        }
    }

    /// First call for a given `(label, qualified_name)` emits to the
    /// inner sink; a repeat is a no-op, matching the idempotent-emission
    /// invariant.
    pub fn ensure_node(&self, kind: NodeKind, fqn: &Fqn, props: &PropMap) -> bool {
        let key = (kind.label(), fqn.as_str().to_string());
        if self.node_keys.insert(key) {
            self.inner.upsert_node(kind.label(), fqn.as_str(), props);
            true
        } else {
            false
        }
    }

    /// Same idempotence contract for an externally-referenced node (an
    /// unresolved base class, an external import target) that will never
    /// have a `DefinitionEntry` of its own.
    pub fn ensure_external_node(&self, kind: NodeKind, raw_name: &str, props: &PropMap) -> bool {
        let key = (kind.label(), raw_name.to_string());
        if self.node_keys.insert(key) {
            self.inner.upsert_node(kind.label(), raw_name, props);
            true
        } else {
            false
        }
    }

    pub fn ensure_relationship(
        &self,
        src: NodeRef<'_>,
        rel_type: EdgeKind,
        dst: NodeRef<'_>,
        props: &PropMap,
    ) -> bool {
        let key = (
            src.label,
            src.key_value.to_string(),
            rel_type.label(),
            dst.label,
            dst.key_value.to_string(),
        );
        if self.edge_keys.insert(key) {
            self.inner.add_relationship(src, rel_type.label(), dst, props);
            true
        } else {
            false
        }
    }

    pub fn flush(&self) {
        self.inner.flush();
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingSink {
        node_calls: Arc<AtomicUsize>,
        edge_calls: Arc<AtomicUsize>,
    }

    impl GraphSink for CountingSink {
        fn upsert_node(&self, _label: &str, _key_value: &str, _props: &PropMap) {
            self.node_calls.fetch_add(1, Ordering::SeqCst);
        }
        fn add_relationship(&self, _src: NodeRef<'_>, _rel_type: &str, _dst: NodeRef<'_>, _props: &PropMap) {
            self.edge_calls.fetch_add(1, Ordering::SeqCst);
        }
        fn flush(&self) {}
    }

    #[test]
    fn duplicate_node_emits_once() {
        let sink = SinkBuffer::new(CountingSink::default());
        let fqn = Fqn::root("proj");
        let props = Map::new();
        assert!(sink.ensure_node(NodeKind::Project, &fqn, &props));
        assert!(!sink.ensure_node(NodeKind::Project, &fqn, &props));
        assert_eq!(sink.inner().node_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn duplicate_edge_emits_once() {
        let sink = SinkBuffer::new(CountingSink::default());
        let a = Fqn::root("a");
        let b = Fqn::root("b");
        let props = Map::new();
        let src = NodeRef::new(NodeKind::Module, &a);
        let dst = NodeRef::new(NodeKind::Module, &b);
        assert!(sink.ensure_relationship(src, EdgeKind::Imports, dst, &props));
        let src = NodeRef::new(NodeKind::Module, &a);
        let dst = NodeRef::new(NodeKind::Module, &b);
        assert!(!sink.ensure_relationship(src, EdgeKind::Imports, dst, &props));
        assert_eq!(sink.inner().edge_calls.load(Ordering::SeqCst), 1);
    }
}

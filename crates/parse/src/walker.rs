// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use smallvec::SmallVec;
use tree_sitter::Node;

/// How many nodes a walk visits between cancellation checks. Checking on
/// every node would add overhead disproportionate to a tree walk's cost;
/// checking only at file boundaries would make a pathological single
/// file uncancellable.
const POLL_INTERVAL: usize = 512;

/// A cooperative abort signal, checked at node-visit boundaries during a
/// tree walk. Cheap to clone and share with the Driver's own
/// cancellation token.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The lexical ancestry of a visited node, innermost last. `smallvec`
/// because scope/parent depth is almost always under 8.
pub type ParentChain<'a> = SmallVec<[Node<'a>; 8]>;

/// Depth-first traversal over a parsed tree. `visit` receives the node
/// and its parent chain (root-to-immediate-parent, not including the
/// node itself); returning `false` from `visit` skips that node's
/// children (used by passes that don't want to descend into, say, an
/// already-classified definition's nested scope a second time).
pub struct Walker {
    cancel: CancellationToken,
}

impl Walker {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    pub fn walk<'a>(&self, root: Node<'a>, mut visit: impl FnMut(Node<'a>, &ParentChain<'a>) -> bool) {
        let mut stack: Vec<(Node<'a>, ParentChain<'a>)> = vec![(root, ParentChain::new())];
        let mut visited = 0usize;

        while let Some((node, parents)) = stack.pop() {
            visited += 1;
            if visited % POLL_INTERVAL == 0 && self.cancel.is_cancelled() {
                return;
            }

            let descend = visit(node, &parents);
            if !descend {
                continue;
            }

            let mut child_parents = parents.clone();
            child_parents.push(node);

            let mut cursor = node.walk();
            // Push in reverse so children are visited in source order
            // when popped off the stack.
            let children: Vec<Node<'a>> = node.named_children(&mut cursor).collect();
            for child in children.into_iter().rev() {
                stack.push((child, child_parents.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::load_language;
    use crate::tree::parse;
    use codegraph_core::Language;

    #[test]
    fn visits_nodes_in_source_order() {
        let handle = load_language(Language::Python).unwrap();
        let parsed = parse(b"def a():\n    pass\ndef b():\n    pass\n".to_vec(), &handle).unwrap();
        let walker = Walker::new(CancellationToken::new());
        let mut names = Vec::new();
        walker.walk(parsed.root(), |node, _parents| {
            if node.kind() == "function_definition" {
                if let Some(name) = node.child_by_field_name("name") {
                    names.push(parsed.text_of(name).to_string());
                }
            }
            true
        });
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn cancellation_stops_the_walk() {
        let handle = load_language(Language::Python).unwrap();
        let source: String = (0..2000).map(|i| format!("def f{i}():\n    pass\n")).collect();
        let parsed = parse(source.into_bytes(), &handle).unwrap();
        let token = CancellationToken::new();
        token.cancel();
        let walker = Walker::new(token);
        let mut visited = 0;
        walker.walk(parsed.root(), |_node, _parents| {
            visited += 1;
            true
        });
        assert!(visited < 4000);
    }
}

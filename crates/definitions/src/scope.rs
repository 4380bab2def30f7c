// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use codegraph_core::{Fqn, NodeKind};

/// One entry in the definition pass's lexical scope stack: the FQN new
/// children are built under, and the kind of the thing that introduced
/// this scope (needed to find the nearest enclosing type for a method's
/// `owner`, and for constructor-naming checks).
#[derive(Debug, Clone)]
pub struct ScopeFrame {
    pub fqn: Fqn,
    pub kind: NodeKind,
}

impl ScopeFrame {
    pub fn module(fqn: Fqn) -> Self {
        Self { fqn, kind: NodeKind::Module }
    }
}

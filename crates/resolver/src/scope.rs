// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use codegraph_core::{Fqn, NodeKind};

/// Mirrors the Definition Extractor's own `ScopeFrame` — the Resolver
/// rebuilds the identical scope-stack walk over the same tree rather
/// than persisting one, so it needs the same lexical-ancestry shape.
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

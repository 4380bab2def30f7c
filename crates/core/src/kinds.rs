// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::Fqn;

/// The node-label vocabulary. `label()` is part of the external contract
/// (§6 of the spec): changing these strings is a breaking change for any
/// downstream sink or query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Project,
    Package,
    Module,
    Class,
    Interface,
    Struct,
    Enum,
    Trait,
    Function,
    Method,
}

impl NodeKind {
    pub const fn label(self) -> &'static str {
        match self {
            NodeKind::Project => "Project",
            NodeKind::Package => "Package",
            NodeKind::Module => "Module",
            NodeKind::Class => "Class",
            NodeKind::Interface => "Interface",
            NodeKind::Struct => "Struct",
            NodeKind::Enum => "Enum",
            NodeKind::Trait => "Trait",
            NodeKind::Function => "Function",
            NodeKind::Method => "Method",
        }
    }

    /// Types are the valid targets of INHERITS/IMPLEMENTS edges.
    pub const fn is_type(self) -> bool {
        matches!(
            self,
            NodeKind::Class
                | NodeKind::Interface
                | NodeKind::Struct
                | NodeKind::Enum
                | NodeKind::Trait
        )
    }

    /// Functions and methods are the valid endpoints of CALLS edges.
    pub const fn is_callable(self) -> bool {
        matches!(self, NodeKind::Function | NodeKind::Method)
    }
}

/// The relationship-type vocabulary, also part of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Contains,
    Defines,
    Inherits,
    Implements,
    Calls,
    Imports,
}

impl EdgeKind {
    pub const fn label(self) -> &'static str {
        match self {
            EdgeKind::Contains => "CONTAINS",
            EdgeKind::Defines => "DEFINES",
            EdgeKind::Inherits => "INHERITS",
            EdgeKind::Implements => "IMPLEMENTS",
            EdgeKind::Calls => "CALLS",
            EdgeKind::Imports => "IMPORTS",
        }
    }
}

/// `(label, key_name, key_value)` — the sink's node/edge-endpoint contract.
/// `key_name` is always `"qualified_name"`; it is carried explicitly rather
/// than hardcoded downstream so a sink implementation can assert on it.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    pub label: &'static str,
    pub key_name: &'static str,
    pub key_value: &'a str,
}

impl<'a> NodeRef<'a> {
    pub fn new(kind: NodeKind, fqn: &'a Fqn) -> Self {
        Self {
            label: kind.label(),
            key_name: "qualified_name",
            key_value: fqn.as_str(),
        }
    }

    pub fn external(kind: NodeKind, raw_name: &'a str) -> Self {
        Self {
            label: kind.label(),
            key_name: "qualified_name",
            key_value: raw_name,
        }
    }
}

/// Arbitrary, sink-specific node/edge properties. Kept as JSON so the core
/// crates never need to know what a particular downstream sink wants to
/// store beyond the node/edge identity itself.
pub type PropMap = serde_json::Map<String, serde_json::Value>;

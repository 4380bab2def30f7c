// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use codegraph_core::Fqn;
use dashmap::DashMap;

/// Where an imported local name actually points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportTarget {
    /// Resolved to an in-project definition or module.
    Resolved(Fqn),
    /// Could not be resolved against anything in this project (a
    /// standard-library or third-party symbol) — recorded, never
    /// dropped, per the unresolved-reference handling in §7.
    External(String),
}

/// A single module's local-name -> import-target map, built during the
/// definition pass by reading that module's import statements.
#[derive(Debug, Default)]
pub struct ImportMap(DashMap<String, ImportTarget>);

impl ImportMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, local_name: impl Into<String>, target: ImportTarget) {
        self.0.insert(local_name.into(), target);
    }

    pub fn get(&self, local_name: &str) -> Option<ImportTarget> {
        self.0.get(local_name).map(|r| r.value().clone())
    }
}

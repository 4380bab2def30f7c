// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Receiver-typing cue #2 (§4.G): a type's own explicitly typed fields,
//! resolved once per type and cached — a pure function of the already
//! frozen [`SymbolTable`], so concurrent resolver workers racing to
//! populate the same type's entry is harmless; whichever computation
//! wins, it computes the same answer.

use codegraph_core::Fqn;
use codegraph_symbols::SymbolTable;
use codegraph_utils::FastMap;

#[derive(Debug, Default)]
pub struct FieldTypeCache(FastMap<Fqn, FastMap<String, Fqn>>);

impl FieldTypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, table: &SymbolTable, type_fqn: &Fqn, field: &str) -> Option<Fqn> {
        let per_type = self.0.entry(type_fqn.clone()).or_insert_with(|| Self::compute(table, type_fqn));
        per_type.get(field).map(|r| r.value().clone())
    }

    fn compute(table: &SymbolTable, type_fqn: &Fqn) -> FastMap<String, Fqn> {
        let Some(entry) = table.entry(type_fqn) else {
            return FastMap::default();
        };
        entry
            .fields_raw
            .iter()
            .filter_map(|(name, _)| table.field_type(type_fqn, name).map(|fqn| (name.clone(), fqn)))
            .collect()
    }
}

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The project-wide Symbol Table (§4.E): FQN -> definition metadata,
//! per-module import maps, and the lookups the Resolver needs
//! (`lookup_in_module`, `lookup_member`, `lookup_absolute`).
//!
//! Append-only during the walk/definition phases, frozen (read-only, and
//! safe to call from any number of concurrent resolver workers in any
//! order) once [`SymbolTable::freeze`] is called.

mod entry;
mod imports;
mod table;

pub use entry::DefinitionEntry;
pub use imports::{ImportMap, ImportTarget};
pub use table::SymbolTable;

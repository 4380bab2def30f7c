// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Definition Extractor (§4.F): one `DefinitionPass` per language
//! config, invoked once per file. Registers every class/interface/
//! struct/enum/trait/function/method into the Symbol Table, builds each
//! module's import map, and records raw (unresolved) base-type clauses —
//! everything the Resolver needs and nothing it has to re-derive.

mod bases;
mod fields;
mod imports;
mod pass;
mod scope;

pub use imports::resolve_module_path;
pub use pass::DefinitionPass;

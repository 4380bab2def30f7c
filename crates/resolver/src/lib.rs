// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reference resolution (§4.G): the third pass over each file's already
//! parsed, already defined tree. Turns recorded base-type clauses into
//! INHERITS/IMPLEMENTS edges and classified call sites into CALLS edges,
//! reading the frozen [`codegraph_symbols::SymbolTable`] the Definition
//! Extractor built rather than walking source text again from scratch.

mod chain;
mod locals;
mod receiver;
mod scope;

mod pass;

pub use pass::ResolverPass;
pub use receiver::FieldTypeCache;

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The CST Adapter: a uniform wrapper over `tree-sitter`. Loads a
//! language's grammar, parses a file into a [`ParsedTree`], and exposes a
//! cancellable depth-first [`Walker`] over the typed tree.
//!
//! Nothing above this crate ever touches `tree_sitter` types directly
//! except through [`ParsedTree`]/[`Node`]/the field-access methods
//! `tree-sitter` already provides — this crate's job is narrowing
//! "whatever `tree-sitter`'s API happens to look like this month" down to
//! the handful of operations the rest of the pipeline needs.

mod handle;
mod tree;
mod walker;

pub use handle::{load_language, LanguageHandle};
pub use tree::{parse, ParsedTree};
pub use walker::{CancellationToken, ParentChain, Walker};

pub use tree_sitter::Node;

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `codegraph` - a multi-language source-code graph extractor.
//!
//! This is the umbrella crate that re-exports the component crates
//! making up the pipeline: walk a repository, parse every file with
//! tree-sitter, extract definitions, resolve cross-file references, and
//! emit a typed node/edge graph to a pluggable sink.

pub use codegraph_core as core;
pub use codegraph_definitions as definitions;
pub use codegraph_engine as engine;
pub use codegraph_languages as languages;
pub use codegraph_parse as parse;
pub use codegraph_resolver as resolver;
pub use codegraph_sink as sink;
pub use codegraph_symbols as symbols;
pub use codegraph_walker as walker;

pub use codegraph_engine::{Driver, ScanConfig};

/// Crate version, lifted from the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

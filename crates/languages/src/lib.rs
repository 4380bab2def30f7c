// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Language Registry: a static, immutable table keyed by [`Language`]
//! tag, mapping file extensions and CST node kinds to the configuration
//! every other component needs.
//!
//! Consulted by the Project Walker (package/extension rules), the
//! Definition Extractor (definition/import/inheritance rules), and the
//! Resolver (call/member-access/constructor rules). Extensible by adding
//! one [`LanguageConfig`] and nothing else.

mod config;
mod registry;
pub mod rules;

pub use codegraph_core::Language;
pub use config::LanguageConfig;
pub use registry::{config_for, config_for_extension, ALL};

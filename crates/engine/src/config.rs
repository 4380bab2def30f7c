// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use codegraph_core::Language;

/// Which language a `--lang` flag names; a plain alias rather than a
/// wrapper type since the CLI, the Walker, and the Registry all already
/// agree on [`Language`] as the one tag vocabulary.
pub type LanguageTag = Language;

/// Everything the Driver needs to run one scan, built by the CLI from
/// `clap`-parsed arguments (§10). Nothing below the Driver ever touches
/// `std::env` or a config file directly.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub project_name: String,
    pub root: PathBuf,
    /// `None` scans with every compiled-in language; `Some` restricts the
    /// walk and the grammar set loaded up front to just these tags.
    pub languages: Option<Vec<LanguageTag>>,
    pub follow_symlinks: bool,
    /// Files larger than this are skipped and diagnostics-logged rather
    /// than parsed — a guard against accidentally walking into a
    /// generated/vendored blob that slipped past the always-excluded
    /// directory list.
    pub max_file_size_bytes: u64,
    pub verbose_diagnostics: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            root: PathBuf::from("."),
            languages: None,
            follow_symlinks: false,
            max_file_size_bytes: 10 * 1024 * 1024,
            verbose_diagnostics: false,
        }
    }
}

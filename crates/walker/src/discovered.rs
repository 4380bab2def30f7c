// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use codegraph_core::{Fqn, Language};

/// One source file the walker classified, ready for the definition and
/// resolution passes.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    pub absolute_path: PathBuf,
    pub language: Language,
    /// The FQN of the nearest enclosing Package (or the Project itself,
    /// for a file whose directory chain never qualifies as a package
    /// under any registered rule).
    pub package_fqn: Fqn,
    /// This file's own Module FQN: `package_fqn.stem`.
    pub module_fqn: Fqn,
}

/// The walk phase's output: every classified file, plus the Project's
/// own FQN (needed by the Driver to seed later phases).
#[derive(Debug, Clone)]
pub struct WalkResult {
    pub project_fqn: Fqn,
    pub files: Vec<DiscoveredFile>,
}

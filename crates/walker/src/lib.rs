// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Project Walker (§4.D): directory traversal, file classification,
//! and package discovery. Emits Project/Package/Module nodes and
//! CONTAINS edges, and registers their FQNs in the Symbol Table, before
//! a single definition or call is extracted from any file.

mod discovered;
mod walk;

pub use discovered::{DiscoveredFile, WalkResult};
pub use walk::walk;

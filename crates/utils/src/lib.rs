// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small, dependency-free-of-the-domain helpers shared across the
//! codegraph workspace: fast concurrent maps, content hashing, anonymous
//! name counters, and path-to-FQN-segment conversion.

pub mod anon;
pub mod fastmap;
pub mod hash;
pub mod paths;

pub use anon::AnonymousCounter;
pub use fastmap::{FastMap, FastSet};
pub use hash::ContentHash;

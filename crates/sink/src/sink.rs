// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use codegraph_core::{NodeRef, PropMap};

/// The external graph sink contract (§6). Any downstream consumer — a
/// real graph database, an export format, a test harness asserting on
/// emitted calls — implements this trait; the core pipeline never knows
/// which one it's talking to.
///
/// Implementations must treat repeated calls with the same key tuple as
/// idempotent (§3 invariant 6); the [`crate::SinkBuffer`] wrapper already
/// guarantees this at the pipeline level, but a sink used standalone (as
/// every reference sink in this crate is, in its own unit tests) must not
/// rely on that.
pub trait GraphSink: Send + Sync {
    fn upsert_node(&self, label: &str, key_value: &str, props: &PropMap);
    fn add_relationship(&self, src: NodeRef<'_>, rel_type: &str, dst: NodeRef<'_>, props: &PropMap);
    fn flush(&self);
}

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-module counters for synthesized names.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out `<anonymous_N>` names. One instance lives on each module's
/// `DefinitionPass`, so numbering never collides across files even though
/// every module starts counting from zero.
#[derive(Debug, Default)]
pub struct AnonymousCounter(AtomicUsize);

impl AnonymousCounter {
    pub const fn new() -> Self {
        Self(AtomicUsize::new(0))
    }

    pub fn next_name(&self) -> String {
        let n = self.0.fetch_add(1, Ordering::Relaxed);
        format!("<anonymous_{n}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_without_repeating() {
        let counter = AnonymousCounter::new();
        assert_eq!(counter.next_name(), "<anonymous_0>");
        assert_eq!(counter.next_name(), "<anonymous_1>");
    }
}

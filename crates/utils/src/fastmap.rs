// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `FastMap`/`FastSet`: the concurrent map and set types backing the
//! Symbol Table and the Sink Buffer's dedup sets.
//!
//! Both are [`dashmap`] types by default so concurrent readers/writers
//! across `rayon` workers never need an external mutex. The `single-thread`
//! feature swaps in a plain [`rapidhash`]-hashed `HashMap`/`HashSet` for
//! environments where sharding a lock table isn't worth it (a one-file CLI
//! invocation, a WASM build with no threads).

cfg_if::cfg_if! {
    if #[cfg(not(feature = "single-thread"))] {
        pub type FastMap<K, V> = dashmap::DashMap<K, V>;
        pub type FastSet<T> = dashmap::DashSet<T>;
    } else {
        pub type FastMap<K, V> = rapidhash::RapidHashMap<K, V>;
        pub type FastSet<T> = rapidhash::RapidHashSet<T>;
    }
}

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Sink Buffer (§4.C): a batched, deduplicated emission layer in
//! front of any [`GraphSink`]. Ships two reference sinks — an in-memory
//! `petgraph`-backed graph and a JSON-lines writer — both implementing
//! the same trait a real graph-database sink would.

mod buffer;
mod jsonl;
mod memory;
mod sink;

pub use buffer::SinkBuffer;
pub use jsonl::JsonlGraphSink;
pub use memory::{GraphEdge, GraphNode, InMemoryGraphSink};
pub use sink::GraphSink;

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Driver (§4.H): orchestrates the three-phase pipeline — sequential
//! walk, parallel parse + define, parallel resolve — over one
//! [`ScanConfig`], against any [`codegraph_sink::GraphSink`].

mod config;
mod driver;

pub use codegraph_parse::CancellationToken;
pub use config::{LanguageTag, ScanConfig};
pub use driver::Driver;

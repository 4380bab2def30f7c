// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared types for the codegraph graph updater.
//!
//! Every other crate in the workspace depends on this one: the [`Fqn`] that
//! threads through the whole pipeline, the [`NodeKind`]/[`EdgeKind`]
//! vocabulary that is part of the sink contract, the [`Language`] tag, and
//! the [`CoreError`]/[`Diagnostics`] split between hard failures and
//! expected, non-fatal events.

mod diagnostics;
mod error;
mod fqn;
mod kinds;
mod language;

pub use diagnostics::{DiagnosticEvent, Diagnostics, PipelineStats};
pub use error::{CoreError, Result};
pub use fqn::Fqn;
pub use kinds::{EdgeKind, NodeKind, NodeRef, PropMap};
pub use language::Language;

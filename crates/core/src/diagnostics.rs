// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::Fqn;

/// An individual non-fatal event. Only collected when [`Diagnostics`] is
/// constructed with `verbose = true`; otherwise only the summary counters
/// in [`PipelineStats`] are maintained, so a routine run never pays for
/// string allocation on every dropped call resolution.
#[derive(Debug, Clone)]
pub enum DiagnosticEvent {
    FileSkipped { path: PathBuf, reason: String },
    DuplicateDefinition { fqn: Fqn },
    UnresolvedCallDropped { caller: Fqn, callee_text: String },
    ExternalReference { fqn: Fqn, kind: &'static str, raw_name: String },
    PreprocessorDirectiveSkipped { path: PathBuf },
}

/// Summary counters, always maintained regardless of verbosity. This is
/// the "Summary" granularity; `Diagnostics::events()` is the "Entity"
/// granularity, mirroring the two tracing levels the rest of the
/// toolchain this was grounded on already distinguishes.
#[derive(Debug, Default, Clone)]
pub struct PipelineStats {
    pub files_scanned: u64,
    pub files_skipped: u64,
    pub duplicate_definitions: u64,
    pub unresolved_calls_dropped: u64,
    pub external_references_recorded: u64,
    pub preprocessor_directives_skipped: u64,
    pub nodes_emitted: u64,
    pub relationships_emitted: u64,
}

/// Accumulates non-fatal events across a single pipeline run. Safe to
/// share across `rayon` workers: every counter is atomic and the verbose
/// log, if enabled, is a mutex-guarded `Vec`.
#[derive(Debug, Default)]
pub struct Diagnostics {
    verbose: bool,
    files_scanned: AtomicU64,
    files_skipped: AtomicU64,
    duplicate_definitions: AtomicU64,
    unresolved_calls_dropped: AtomicU64,
    external_references_recorded: AtomicU64,
    preprocessor_directives_skipped: AtomicU64,
    nodes_emitted: AtomicU64,
    relationships_emitted: AtomicU64,
    log: Mutex<Vec<DiagnosticEvent>>,
}

impl Diagnostics {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Default::default()
        }
    }

    fn record(&self, event: DiagnosticEvent) {
        if self.verbose {
            if let Ok(mut log) = self.log.lock() {
                log.push(event);
            }
        }
    }

    pub fn file_scanned(&self) {
        self.files_scanned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn file_skipped(&self, path: PathBuf, reason: impl Into<String>) {
        self.files_skipped.fetch_add(1, Ordering::Relaxed);
        self.record(DiagnosticEvent::FileSkipped {
            path,
            reason: reason.into(),
        });
    }

    pub fn duplicate_definition(&self, fqn: Fqn) {
        self.duplicate_definitions.fetch_add(1, Ordering::Relaxed);
        self.record(DiagnosticEvent::DuplicateDefinition { fqn });
    }

    pub fn unresolved_call_dropped(&self, caller: Fqn, callee_text: impl Into<String>) {
        self.unresolved_calls_dropped.fetch_add(1, Ordering::Relaxed);
        self.record(DiagnosticEvent::UnresolvedCallDropped {
            caller,
            callee_text: callee_text.into(),
        });
    }

    pub fn external_reference(&self, fqn: Fqn, kind: &'static str, raw_name: impl Into<String>) {
        self.external_references_recorded
            .fetch_add(1, Ordering::Relaxed);
        self.record(DiagnosticEvent::ExternalReference {
            fqn,
            kind,
            raw_name: raw_name.into(),
        });
    }

    pub fn preprocessor_directive_skipped(&self, path: PathBuf) {
        self.preprocessor_directives_skipped
            .fetch_add(1, Ordering::Relaxed);
        self.record(DiagnosticEvent::PreprocessorDirectiveSkipped { path });
    }

    pub fn node_emitted(&self) {
        self.nodes_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn relationship_emitted(&self) {
        self.relationships_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.log.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            files_scanned: self.files_scanned.load(Ordering::Relaxed),
            files_skipped: self.files_skipped.load(Ordering::Relaxed),
            duplicate_definitions: self.duplicate_definitions.load(Ordering::Relaxed),
            unresolved_calls_dropped: self.unresolved_calls_dropped.load(Ordering::Relaxed),
            external_references_recorded: self
                .external_references_recorded
                .load(Ordering::Relaxed),
            preprocessor_directives_skipped: self
                .preprocessor_directives_skipped
                .load(Ordering::Relaxed),
            nodes_emitted: self.nodes_emitted.load(Ordering::Relaxed),
            relationships_emitted: self.relationships_emitted.load(Ordering::Relaxed),
        }
    }
}

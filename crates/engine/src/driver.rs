// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashSet;

use rayon::prelude::*;

use codegraph_core::{CoreError, Diagnostics, Language, PipelineStats, Result};
use codegraph_definitions::DefinitionPass;
use codegraph_parse::{load_language, parse, CancellationToken, LanguageHandle, ParsedTree};
use codegraph_resolver::{FieldTypeCache, ResolverPass};
use codegraph_sink::{GraphSink, SinkBuffer};
use codegraph_symbols::SymbolTable;
use codegraph_walker::{walk, DiscoveredFile};

use crate::config::ScanConfig;

/// One file successfully parsed and defined, carried forward to the
/// resolution phase so it is never reparsed (§4.H step 3).
struct ParsedFile {
    file: DiscoveredFile,
    tree: ParsedTree,
}

/// The pipeline orchestrator (§4.H). Owns everything a run needs that
/// must survive across phase boundaries: the project-wide `SymbolTable`,
/// the deduplicating `SinkBuffer`, a cooperative `CancellationToken`, and
/// the `Diagnostics` side channel.
pub struct Driver<S: GraphSink> {
    config: ScanConfig,
    table: SymbolTable,
    sink: SinkBuffer<S>,
    cancel: CancellationToken,
    diagnostics: Diagnostics,
}

impl<S: GraphSink> Driver<S> {
    pub fn new(config: ScanConfig, sink: S) -> Self {
        let diagnostics = Diagnostics::new(config.verbose_diagnostics);
        Self {
            config,
            table: SymbolTable::new(),
            sink: SinkBuffer::new(sink),
            cancel: CancellationToken::new(),
            diagnostics,
        }
    }

    /// A clone of this run's cancellation token, sharable with whatever
    /// invoked the Driver (e.g. a signal handler in the CLI) so a
    /// long-running scan can be aborted cooperatively.
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn sink(&self) -> &S {
        self.sink.inner()
    }

    /// Run the full walk -> define -> resolve pipeline once. A cancelled
    /// run returns whatever was already flushed rather than an error —
    /// partial output is an accepted, documented outcome.
    pub fn run(&self) -> Result<PipelineStats> {
        if self.cancel.is_cancelled() {
            return Ok(self.diagnostics.stats());
        }

        let walk_result = walk(&self.config.root, &self.config.project_name, self.config.follow_symlinks, &self.table, &self.sink)?;
        self.sink.flush();

        let allowed: Option<HashSet<Language>> = self.config.languages.as_ref().map(|tags| tags.iter().copied().collect());

        // Grammar handles are loaded once per language up front, never
        // per file or per worker (§5) — `tree_sitter::Language` is cheap
        // to clone and `Send + Sync`, but a `tree_sitter::Parser` is not,
        // so each closure invocation still builds its own via `parse`.
        let handles: std::collections::HashMap<Language, LanguageHandle> = Language::ALL
            .iter()
            .copied()
            .filter(|lang| allowed.as_ref().is_none_or(|set| set.contains(lang)))
            .filter_map(|lang| load_language(lang).ok().map(|h| (lang, h)))
            .collect();

        let files: Vec<DiscoveredFile> = walk_result
            .files
            .iter()
            .filter(|f| allowed.as_ref().is_none_or(|set| set.contains(&f.language)))
            .cloned()
            .collect();

        let parsed: Vec<ParsedFile> = files
            .par_iter()
            .filter_map(|file| self.parse_and_define(file, &handles, &walk_result.project_fqn))
            .collect();

        self.sink.flush();
        self.table.freeze();

        let field_types = FieldTypeCache::new();
        parsed.par_iter().for_each(|parsed_file| {
            if self.cancel.is_cancelled() {
                return;
            }
            let config = codegraph_languages::config_for(parsed_file.file.language);
            let mut resolver = ResolverPass::new(config, &self.table, &self.sink, &self.diagnostics, &walk_result.project_fqn, &field_types);
            resolver.run(&parsed_file.file, &parsed_file.tree);
        });

        self.sink.flush();
        Ok(self.diagnostics.stats())
    }

    fn parse_and_define(
        &self,
        file: &DiscoveredFile,
        handles: &std::collections::HashMap<Language, LanguageHandle>,
        project_fqn: &codegraph_core::Fqn,
    ) -> Option<ParsedFile> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.diagnostics.file_scanned();

        match std::fs::metadata(&file.absolute_path) {
            Ok(metadata) if metadata.len() > self.config.max_file_size_bytes => {
                self.diagnostics.file_skipped(file.absolute_path.clone(), "exceeds max_file_size_bytes");
                return None;
            }
            Err(_) => {
                self.diagnostics.file_skipped(file.absolute_path.clone(), "could not stat file");
                return None;
            }
            Ok(_) => {}
        }

        let source = match std::fs::read(&file.absolute_path) {
            Ok(bytes) => bytes,
            Err(_) => {
                self.diagnostics.file_skipped(file.absolute_path.clone(), "could not read file");
                return None;
            }
        };

        if std::str::from_utf8(&source).is_err() {
            let err = CoreError::DecodeError {
                path: file.absolute_path.clone(),
            };
            self.diagnostics.file_skipped(file.absolute_path.clone(), err.to_string());
            return None;
        }

        let Some(handle) = handles.get(&file.language) else {
            self.diagnostics.file_skipped(file.absolute_path.clone(), "grammar unavailable in this build");
            return None;
        };

        let tree = match parse(source, handle) {
            Ok(tree) => tree,
            Err(_) => {
                self.diagnostics.file_skipped(file.absolute_path.clone(), "failed to parse");
                return None;
            }
        };

        let config = codegraph_languages::config_for(file.language);
        let mut definer = DefinitionPass::new(config, &self.table, &self.sink, &self.diagnostics, project_fqn);
        let _ = definer.run(file, &tree);

        Some(ParsedFile { file: file.clone(), tree })
    }
}

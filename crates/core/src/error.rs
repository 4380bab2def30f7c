// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

use crate::{Fqn, Language};

/// Errors a caller needs to make a decision about. Every variant here is
/// file-scoped or registration-scoped; nothing in the pipeline propagates
/// a `CoreError` past the file (or registration call) that produced it
/// except `Io`, which aborts the whole run because it means the project
/// root itself could not be read.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("grammar for {0} is not available in this build")]
    LanguageUnavailable(Language),

    #[error("failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("{path} is not valid UTF-8")]
    DecodeError { path: PathBuf },

    #[error("{fqn} is already registered in the symbol table")]
    DuplicateDefinition { fqn: Fqn },

    #[error("symbol table is frozen; writes are only valid during walk/definition")]
    TableFrozen,

    #[error("I/O error reading project root: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

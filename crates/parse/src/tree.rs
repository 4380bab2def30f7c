// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use codegraph_core::{CoreError, Result};
use codegraph_utils::ContentHash;

use crate::handle::LanguageHandle;

/// A parsed file: the `tree-sitter` tree, the source bytes it was parsed
/// from (needed for `utf8_text` lookups during traversal), and a content
/// hash so the Driver can recognize a byte-identical file across runs
/// without re-parsing it.
pub struct ParsedTree {
    tree: tree_sitter::Tree,
    source: Vec<u8>,
    hash: ContentHash,
    language: LanguageHandle,
}

impl ParsedTree {
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn hash(&self) -> ContentHash {
        self.hash
    }

    pub fn language(&self) -> &LanguageHandle {
        &self.language
    }

    /// The text a node spans, decoded against this tree's source bytes.
    /// Never panics on malformed byte ranges (an `ERROR` node can produce
    /// one); falls back to `""`.
    pub fn text_of<'a>(&'a self, node: tree_sitter::Node<'_>) -> &'a str {
        node.utf8_text(&self.source).unwrap_or("")
    }
}

/// Parse `source` with the grammar in `handle`. A recoverable syntax
/// error still produces a tree (with `ERROR`/`MISSING` nodes downstream
/// passes must tolerate) and is *not* a [`CoreError::ParseError`]; only a
/// `None` return from `tree_sitter::Parser::parse` — meaning the grammar
/// itself rejected the input outright, or the parse was cancelled — is.
pub fn parse(source: Vec<u8>, handle: &LanguageHandle) -> Result<ParsedTree> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&handle.inner)
        .map_err(|e| CoreError::ParseError {
            path: std::path::PathBuf::new(),
            message: e.to_string(),
        })?;
    let tree = parser.parse(&source, None).ok_or_else(|| CoreError::ParseError {
        path: std::path::PathBuf::new(),
        message: "grammar rejected input or parse was cancelled".to_string(),
    })?;
    let hash = ContentHash::of(&source);
    Ok(ParsedTree {
        tree,
        source,
        hash,
        language: handle.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::load_language;
    use codegraph_core::Language;

    #[test]
    fn parses_well_formed_python() {
        let handle = load_language(Language::Python).unwrap();
        let parsed = parse(b"def f():\n    pass\n".to_vec(), &handle).unwrap();
        assert_eq!(parsed.root().kind(), "module");
        assert!(!parsed.root().has_error());
    }

    #[test]
    fn tolerates_recoverable_syntax_errors() {
        let handle = load_language(Language::Python).unwrap();
        let parsed = parse(b"def f(:\n".to_vec(), &handle).unwrap();
        // Still produces a tree; downstream passes must tolerate ERROR nodes.
        assert_eq!(parsed.root().kind(), "module");
    }
}

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use codegraph_core::{CoreError, Language, Result};

/// One loaded grammar. Cheap to clone (`tree_sitter::Language` is
/// internally reference-counted) and `Send + Sync`, so a single handle
/// per language is shared across every `rayon` worker — only the
/// `tree_sitter::Parser` itself needs to be per-worker (§5 of the spec).
#[derive(Debug, Clone)]
pub struct LanguageHandle {
    pub(crate) tag: Language,
    pub(crate) inner: tree_sitter::Language,
}

impl LanguageHandle {
    pub fn tag(&self) -> Language {
        self.tag
    }
}

macro_rules! grammar_fn {
    ($feature:literal, $tag:expr, $krate:ident $(:: $field:ident)?) => {
        #[cfg(feature = $feature)]
        {
            return Ok(LanguageHandle {
                tag: $tag,
                inner: $krate $(:: $field)? .into(),
            });
        }
        #[cfg(not(feature = $feature))]
        {
            return Err(CoreError::LanguageUnavailable($tag));
        }
    };
}

/// Load the grammar for `tag`. Returns [`CoreError::LanguageUnavailable`]
/// when the corresponding Cargo feature wasn't compiled in — a language
/// whose grammar crate is absent never fails to link, it simply can't be
/// loaded at runtime.
pub fn load_language(tag: Language) -> Result<LanguageHandle> {
    match tag {
        Language::Python => {
            grammar_fn!("python", tag, tree_sitter_python::LANGUAGE);
        }
        Language::JavaScript => {
            grammar_fn!("javascript", tag, tree_sitter_javascript::LANGUAGE);
        }
        Language::TypeScript => {
            grammar_fn!("typescript", tag, tree_sitter_typescript::LANGUAGE_TYPESCRIPT);
        }
        Language::Java => {
            grammar_fn!("java", tag, tree_sitter_java::LANGUAGE);
        }
        Language::Go => {
            grammar_fn!("go", tag, tree_sitter_go::LANGUAGE);
        }
        Language::Rust => {
            grammar_fn!("rust", tag, tree_sitter_rust::LANGUAGE);
        }
        Language::Cpp => {
            grammar_fn!("cpp", tag, tree_sitter_cpp::LANGUAGE);
        }
        Language::CSharp => {
            grammar_fn!("csharp", tag, tree_sitter_c_sharp::LANGUAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_every_compiled_in_language() {
        for &lang in Language::ALL {
            let result = load_language(lang);
            // Every language in this workspace's default feature set is
            // compiled in; a failure here means a feature/tag mismatch.
            assert!(result.is_ok(), "expected {lang} to load");
        }
    }
}

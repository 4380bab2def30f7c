// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use codegraph_core::Language;

use crate::rules::{
    CallRule, ConstructorCallRule, ConstructorNaming, DefinitionRule, ImportPathStyle, ImportRule,
    InheritanceRule, MemberAccessRule, PackageRule, TypedFieldRule,
};

/// Everything the rest of the pipeline needs to know about one language.
/// Assembled once as a `'static` const value — no runtime construction,
/// no heap allocation beyond what `tree-sitter` itself needs.
#[derive(Debug, Clone, Copy)]
pub struct LanguageConfig {
    pub tag: Language,
    pub extensions: &'static [&'static str],
    pub package_rule: PackageRule,
    pub definitions: &'static [DefinitionRule],
    pub imports: &'static [ImportRule],
    pub inheritance: &'static [InheritanceRule],
    pub typed_fields: &'static [TypedFieldRule],
    pub calls: &'static [CallRule],
    pub member_access: MemberAccessRule,
    pub constructor_call: ConstructorCallRule,
    pub import_path_style: ImportPathStyle,
    pub constructor_naming: ConstructorNaming,
    /// `(parent_cst_kind, field_on_parent_holding_the_bound_name)` — used
    /// to name an anonymous function/class bound by assignment or default
    /// export.
    pub anonymous_binding_parents: &'static [(&'static str, &'static str)],
    pub self_token: Option<&'static str>,
    pub super_token: Option<&'static str>,
    pub case_sensitive: bool,
}

impl LanguageConfig {
    pub fn owns_extension(&self, ext: &str) -> bool {
        if self.case_sensitive {
            self.extensions.contains(&ext)
        } else {
            let ext = ext.to_ascii_lowercase();
            self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
        }
    }
}

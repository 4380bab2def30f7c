// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The rule vocabulary a [`crate::LanguageConfig`] is built from. Every
//! field here names a CST node kind and/or field name as published by the
//! language's `tree-sitter` grammar's `node-types.json` — these are data,
//! not code, so adding a language never touches a match arm anywhere else
//! in the workspace.

use codegraph_core::NodeKind;

/// How a directory qualifies as a namespace for this language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageRule {
    /// A directory is a package iff it contains a file with this name
    /// (e.g. `__init__.py`).
    MarkerFile(&'static str),
    /// Every directory containing a file of this language is a package
    /// (Go, Rust's module-per-directory convention, JS/TS with no marker).
    EveryDirectory,
    /// Only the project root is ever a package for this language (C/C++
    /// has no directory-namespace convention at all).
    RootOnly,
}

/// A CST node kind that introduces a definition, plus the fields that
/// hold its identifier and body.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionRule {
    pub cst_kind: &'static str,
    pub name_field: &'static str,
    pub body_field: &'static str,
    pub kind: NodeKind,
}

/// A CST node kind that is an import statement, plus the fields holding
/// the written module path and an optional alias/rename.
#[derive(Debug, Clone, Copy)]
pub struct ImportRule {
    pub cst_kind: &'static str,
    pub path_field: &'static str,
    pub alias_field: Option<&'static str>,
    /// For statements that import one or more named members from a path
    /// (`from X import a, b as c`) rather than the path itself (`import X`).
    pub named_import_kind: Option<&'static str>,
}

/// Whether an inheritance-clause target is a base class/struct
/// (`INHERITS`) or a nominally-implemented interface/trait (`IMPLEMENTS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InheritanceKind {
    Extends,
    Implements,
}

/// A CST node kind that introduces a type's base-type clause.
#[derive(Debug, Clone, Copy)]
pub struct InheritanceRule {
    pub cst_kind: &'static str,
    pub bases_field: &'static str,
    pub kind: InheritanceKind,
    /// `None` when `cst_kind` coincides with the owning type's own
    /// `DefinitionRule::cst_kind` (Python/JS/TS/Java/C#: the clause lives
    /// inside the class node itself, so the owner is just the innermost
    /// type scope already on the stack). `Some(field)` when the clause's
    /// node stands apart from any definition (Rust's `impl_item`, which
    /// names the type it implements a trait *for* via this field rather
    /// than being nested inside that type's own node).
    pub owner_field: Option<&'static str>,
}

/// A field declaration that carries an explicit type, plus the fields
/// holding its name and its type annotation. Feeds the Resolver's
/// "typed field" receiver-typing cue (`self.field` access without
/// general flow analysis) — recorded onto `DefinitionEntry::fields_raw`
/// at definition time exactly like `bases_raw`, and resolved lazily
/// against the owning module's scope.
#[derive(Debug, Clone, Copy)]
pub struct TypedFieldRule {
    pub cst_kind: &'static str,
    pub name_field: &'static str,
    pub type_field: &'static str,
}

/// A CST node kind that is a call-site, plus the field giving the callee
/// expression.
#[derive(Debug, Clone, Copy)]
pub struct CallRule {
    pub cst_kind: &'static str,
    pub callee_field: &'static str,
    pub args_field: Option<&'static str>,
}

/// The CST shape of `a.b` / `a->b` member access, used by the Resolver
/// to classify a callee expression as a qualified access chain.
#[derive(Debug, Clone, Copy)]
pub struct MemberAccessRule {
    pub cst_kind: &'static str,
    pub object_field: &'static str,
    pub property_field: &'static str,
}

/// How "make a new instance of a type" is spelled in this language's
/// grammar.
#[derive(Debug, Clone, Copy)]
pub enum ConstructorCallRule {
    /// An explicit keyword-introduced node (`new_expression`,
    /// `object_creation_expression`) whose `type_field` names the type.
    Keyword {
        cst_kind: &'static str,
        type_field: &'static str,
    },
    /// A plain call whose callee is a bare identifier starting with an
    /// uppercase letter is treated as a constructor call (Python, Go,
    /// Rust's tuple-struct-as-function convention).
    UppercaseCallee,
    /// A struct/record literal (`T { field: value }`) whose `type_field`
    /// names the type (Rust, Go).
    StructLiteral {
        cst_kind: &'static str,
        type_field: &'static str,
    },
}

/// How an import path's written text turns into path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPathStyle {
    /// `a.b.c` is already namespace-dotted (Python, Java family).
    Dotted,
    /// `./a/b` or `a/b` is filesystem-relative (JS/TS/Go family).
    Relative,
}

/// How this language spells "no name given, bind this method to its
/// owning type as the constructor".
#[derive(Debug, Clone, Copy)]
pub enum ConstructorNaming {
    /// The method's simple name equals a fixed string (`__init__`).
    FixedName(&'static str),
    /// The method's simple name equals its owning type's simple name
    /// (Java, C#, C++).
    SameAsType,
    /// This language has no constructor-method convention the resolver
    /// needs to special-case (Go has none; Rust's `new` is a convention
    /// only, not a grammar-level marker).
    None,
}

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The static per-language table. Adding a language means adding one
//! `LanguageConfig` here (plus one optional `tree-sitter-*` dependency in
//! `codegraph-parse`) — no other crate needs to change.

use codegraph_core::{Language, NodeKind};

use crate::config::LanguageConfig;
use crate::rules::{
    CallRule, ConstructorCallRule, ConstructorNaming, DefinitionRule, ImportPathStyle, ImportRule,
    InheritanceKind, InheritanceRule, MemberAccessRule, PackageRule, TypedFieldRule,
};

pub static PYTHON: LanguageConfig = LanguageConfig {
    tag: Language::Python,
    extensions: &["py", "pyi"],
    package_rule: PackageRule::MarkerFile("__init__.py"),
    definitions: &[
        DefinitionRule {
            cst_kind: "function_definition",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Function,
        },
        DefinitionRule {
            cst_kind: "class_definition",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Class,
        },
    ],
    imports: &[
        ImportRule {
            cst_kind: "import_statement",
            path_field: "name",
            alias_field: Some("alias"),
            named_import_kind: None,
        },
        ImportRule {
            cst_kind: "import_from_statement",
            path_field: "module_name",
            alias_field: Some("alias"),
            named_import_kind: Some("aliased_import"),
        },
    ],
    inheritance: &[InheritanceRule {
        cst_kind: "class_definition",
        bases_field: "superclasses",
        kind: InheritanceKind::Extends,
        owner_field: None,
    }],
    typed_fields: &[TypedFieldRule {
        cst_kind: "assignment",
        name_field: "left",
        type_field: "type",
    }],
    calls: &[CallRule {
        cst_kind: "call",
        callee_field: "function",
        args_field: Some("arguments"),
    }],
    member_access: MemberAccessRule {
        cst_kind: "attribute",
        object_field: "object",
        property_field: "attribute",
    },
    constructor_call: ConstructorCallRule::UppercaseCallee,
    import_path_style: ImportPathStyle::Dotted,
    constructor_naming: ConstructorNaming::FixedName("__init__"),
    anonymous_binding_parents: &[("assignment", "left")],
    self_token: Some("self"),
    super_token: Some("super"),
    case_sensitive: true,
};

pub static JAVASCRIPT: LanguageConfig = LanguageConfig {
    tag: Language::JavaScript,
    extensions: &["js", "jsx", "mjs", "cjs"],
    package_rule: PackageRule::EveryDirectory,
    definitions: &[
        DefinitionRule {
            cst_kind: "function_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Function,
        },
        DefinitionRule {
            cst_kind: "method_definition",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Method,
        },
        DefinitionRule {
            cst_kind: "class_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Class,
        },
    ],
    imports: &[ImportRule {
        cst_kind: "import_statement",
        path_field: "source",
        alias_field: Some("alias"),
        named_import_kind: Some("import_specifier"),
    }],
    inheritance: &[InheritanceRule {
        cst_kind: "class_declaration",
        bases_field: "superclass",
        kind: InheritanceKind::Extends,
        owner_field: None,
    }],
    // JavaScript has no static field-type annotation syntax; cue #2
    // (typed-field receiver inference) never fires for this language.
    typed_fields: &[],
    calls: &[CallRule {
        cst_kind: "call_expression",
        callee_field: "function",
        args_field: Some("arguments"),
    }],
    member_access: MemberAccessRule {
        cst_kind: "member_expression",
        object_field: "object",
        property_field: "property",
    },
    constructor_call: ConstructorCallRule::Keyword {
        cst_kind: "new_expression",
        type_field: "constructor",
    },
    import_path_style: ImportPathStyle::Relative,
    constructor_naming: ConstructorNaming::FixedName("constructor"),
    anonymous_binding_parents: &[
        ("variable_declarator", "name"),
        ("assignment_expression", "left"),
        ("export_statement", "declaration"),
    ],
    self_token: Some("this"),
    super_token: Some("super"),
    case_sensitive: true,
};

pub static TYPESCRIPT: LanguageConfig = LanguageConfig {
    tag: Language::TypeScript,
    extensions: &["ts", "tsx", "mts", "cts"],
    package_rule: PackageRule::EveryDirectory,
    definitions: &[
        DefinitionRule {
            cst_kind: "function_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Function,
        },
        DefinitionRule {
            cst_kind: "method_definition",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Method,
        },
        DefinitionRule {
            cst_kind: "class_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Class,
        },
        DefinitionRule {
            cst_kind: "interface_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Interface,
        },
    ],
    imports: &[ImportRule {
        cst_kind: "import_statement",
        path_field: "source",
        alias_field: Some("alias"),
        named_import_kind: Some("import_specifier"),
    }],
    inheritance: &[
        InheritanceRule {
            cst_kind: "class_heritage",
            bases_field: "superclass",
            kind: InheritanceKind::Extends,
            owner_field: None,
        },
        InheritanceRule {
            cst_kind: "class_heritage",
            bases_field: "implements_clause",
            kind: InheritanceKind::Implements,
            owner_field: None,
        },
    ],
    typed_fields: &[TypedFieldRule {
        cst_kind: "public_field_definition",
        name_field: "name",
        type_field: "type",
    }],
    calls: &[CallRule {
        cst_kind: "call_expression",
        callee_field: "function",
        args_field: Some("arguments"),
    }],
    member_access: MemberAccessRule {
        cst_kind: "member_expression",
        object_field: "object",
        property_field: "property",
    },
    constructor_call: ConstructorCallRule::Keyword {
        cst_kind: "new_expression",
        type_field: "constructor",
    },
    import_path_style: ImportPathStyle::Relative,
    constructor_naming: ConstructorNaming::FixedName("constructor"),
    anonymous_binding_parents: &[
        ("variable_declarator", "name"),
        ("assignment_expression", "left"),
        ("export_statement", "declaration"),
    ],
    self_token: Some("this"),
    super_token: Some("super"),
    case_sensitive: true,
};

pub static JAVA: LanguageConfig = LanguageConfig {
    tag: Language::Java,
    extensions: &["java"],
    package_rule: PackageRule::EveryDirectory,
    definitions: &[
        DefinitionRule {
            cst_kind: "class_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Class,
        },
        DefinitionRule {
            cst_kind: "interface_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Interface,
        },
        DefinitionRule {
            cst_kind: "enum_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Enum,
        },
        DefinitionRule {
            cst_kind: "method_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Method,
        },
    ],
    imports: &[ImportRule {
        cst_kind: "import_declaration",
        path_field: "path",
        alias_field: None,
        named_import_kind: None,
    }],
    inheritance: &[
        InheritanceRule {
            cst_kind: "superclass",
            bases_field: "type",
            kind: InheritanceKind::Extends,
            owner_field: None,
        },
        InheritanceRule {
            cst_kind: "super_interfaces",
            bases_field: "type_list",
            kind: InheritanceKind::Implements,
            owner_field: None,
        },
    ],
    typed_fields: &[TypedFieldRule {
        cst_kind: "field_declaration",
        name_field: "declarator",
        type_field: "type",
    }],
    calls: &[CallRule {
        cst_kind: "method_invocation",
        callee_field: "name",
        args_field: Some("arguments"),
    }],
    member_access: MemberAccessRule {
        cst_kind: "field_access",
        object_field: "object",
        property_field: "field",
    },
    constructor_call: ConstructorCallRule::Keyword {
        cst_kind: "object_creation_expression",
        type_field: "type",
    },
    import_path_style: ImportPathStyle::Dotted,
    constructor_naming: ConstructorNaming::SameAsType,
    anonymous_binding_parents: &[("variable_declarator", "name")],
    self_token: Some("this"),
    super_token: Some("super"),
    case_sensitive: true,
};

pub static GO: LanguageConfig = LanguageConfig {
    tag: Language::Go,
    extensions: &["go"],
    package_rule: PackageRule::EveryDirectory,
    definitions: &[
        DefinitionRule {
            cst_kind: "function_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Function,
        },
        DefinitionRule {
            cst_kind: "method_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Method,
        },
        DefinitionRule {
            cst_kind: "type_spec",
            name_field: "name",
            body_field: "type",
            kind: NodeKind::Struct,
        },
    ],
    imports: &[ImportRule {
        cst_kind: "import_spec",
        path_field: "path",
        alias_field: Some("name"),
        named_import_kind: None,
    }],
    // Go has no grammar-level `extends`/`implements` clause; interface
    // satisfaction is structural. No inheritance rules are registered —
    // IMPLEMENTS edges for Go are a documented false negative (§9).
    inheritance: &[],
    typed_fields: &[TypedFieldRule {
        cst_kind: "field_declaration",
        name_field: "name",
        type_field: "type",
    }],
    calls: &[CallRule {
        cst_kind: "call_expression",
        callee_field: "function",
        args_field: Some("arguments"),
    }],
    member_access: MemberAccessRule {
        cst_kind: "selector_expression",
        object_field: "operand",
        property_field: "field",
    },
    constructor_call: ConstructorCallRule::StructLiteral {
        cst_kind: "composite_literal",
        type_field: "type",
    },
    import_path_style: ImportPathStyle::Relative,
    constructor_naming: ConstructorNaming::None,
    anonymous_binding_parents: &[("short_var_declaration", "left")],
    self_token: None,
    super_token: None,
    case_sensitive: true,
};

pub static RUST: LanguageConfig = LanguageConfig {
    tag: Language::Rust,
    extensions: &["rs"],
    package_rule: PackageRule::EveryDirectory,
    definitions: &[
        DefinitionRule {
            cst_kind: "function_item",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Function,
        },
        DefinitionRule {
            cst_kind: "struct_item",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Struct,
        },
        DefinitionRule {
            cst_kind: "enum_item",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Enum,
        },
        DefinitionRule {
            cst_kind: "trait_item",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Trait,
        },
    ],
    imports: &[ImportRule {
        cst_kind: "use_declaration",
        path_field: "argument",
        alias_field: None,
        named_import_kind: Some("use_as_clause"),
    }],
    // `impl_item` stands apart from the `struct_item`/`enum_item`/
    // `trait_item` it applies to, so its owner isn't "whatever type scope
    // is innermost" — it's named explicitly by the `type` field.
    inheritance: &[InheritanceRule {
        cst_kind: "impl_item",
        bases_field: "trait",
        kind: InheritanceKind::Implements,
        owner_field: Some("type"),
    }],
    typed_fields: &[TypedFieldRule {
        cst_kind: "field_declaration",
        name_field: "name",
        type_field: "type",
    }],
    calls: &[CallRule {
        cst_kind: "call_expression",
        callee_field: "function",
        args_field: Some("arguments"),
    }],
    member_access: MemberAccessRule {
        cst_kind: "field_expression",
        object_field: "value",
        property_field: "field",
    },
    constructor_call: ConstructorCallRule::StructLiteral {
        cst_kind: "struct_expression",
        type_field: "name",
    },
    import_path_style: ImportPathStyle::Dotted,
    constructor_naming: ConstructorNaming::None,
    anonymous_binding_parents: &[("let_declaration", "pattern")],
    self_token: Some("self"),
    super_token: None,
    case_sensitive: true,
};

pub static CPP: LanguageConfig = LanguageConfig {
    tag: Language::Cpp,
    extensions: &["cpp", "cc", "cxx", "hpp", "h", "hh"],
    package_rule: PackageRule::RootOnly,
    definitions: &[
        DefinitionRule {
            cst_kind: "function_definition",
            name_field: "declarator",
            body_field: "body",
            kind: NodeKind::Function,
        },
        DefinitionRule {
            cst_kind: "class_specifier",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Class,
        },
        DefinitionRule {
            cst_kind: "struct_specifier",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Struct,
        },
    ],
    // `#include` is explicitly not modeled as IMPORTS (§3 of the expanded
    // spec); it is a skipped CST kind handled directly by the Resolver's
    // diagnostics, not a registered ImportRule.
    imports: &[],
    inheritance: &[InheritanceRule {
        cst_kind: "class_specifier",
        bases_field: "base_class_clause",
        kind: InheritanceKind::Extends,
        owner_field: None,
    }],
    typed_fields: &[TypedFieldRule {
        cst_kind: "field_declaration",
        name_field: "declarator",
        type_field: "type",
    }],
    calls: &[CallRule {
        cst_kind: "call_expression",
        callee_field: "function",
        args_field: Some("arguments"),
    }],
    member_access: MemberAccessRule {
        cst_kind: "field_expression",
        object_field: "argument",
        property_field: "field",
    },
    constructor_call: ConstructorCallRule::UppercaseCallee,
    import_path_style: ImportPathStyle::Relative,
    constructor_naming: ConstructorNaming::SameAsType,
    anonymous_binding_parents: &[("init_declarator", "declarator")],
    self_token: Some("this"),
    super_token: None,
    case_sensitive: true,
};

pub static CSHARP: LanguageConfig = LanguageConfig {
    tag: Language::CSharp,
    extensions: &["cs"],
    package_rule: PackageRule::EveryDirectory,
    definitions: &[
        DefinitionRule {
            cst_kind: "class_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Class,
        },
        DefinitionRule {
            cst_kind: "interface_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Interface,
        },
        DefinitionRule {
            cst_kind: "method_declaration",
            name_field: "name",
            body_field: "body",
            kind: NodeKind::Method,
        },
    ],
    imports: &[ImportRule {
        cst_kind: "using_directive",
        path_field: "name",
        alias_field: None,
        named_import_kind: None,
    }],
    inheritance: &[InheritanceRule {
        cst_kind: "base_list",
        bases_field: "types",
        kind: InheritanceKind::Extends,
        owner_field: None,
    }],
    // C#'s field/type declaration nests the type on the enclosing
    // `variable_declaration`, not a field directly paired with the
    // declarator's own name — doesn't fit a single (name_field,
    // type_field) pair. Cue #2 doesn't fire for C#; a documented gap,
    // not a crash risk.
    typed_fields: &[],
    calls: &[CallRule {
        cst_kind: "invocation_expression",
        callee_field: "function",
        args_field: Some("arguments"),
    }],
    member_access: MemberAccessRule {
        cst_kind: "member_access_expression",
        object_field: "expression",
        property_field: "name",
    },
    constructor_call: ConstructorCallRule::Keyword {
        cst_kind: "object_creation_expression",
        type_field: "type",
    },
    import_path_style: ImportPathStyle::Dotted,
    constructor_naming: ConstructorNaming::SameAsType,
    anonymous_binding_parents: &[("variable_declarator", "name")],
    self_token: Some("this"),
    super_token: Some("base"),
    case_sensitive: true,
};

/// All registered languages, in declaration order. Adding a language is
/// exactly: write a new `static`, list it here.
pub static ALL: &[&LanguageConfig] = &[
    &PYTHON, &JAVASCRIPT, &TYPESCRIPT, &JAVA, &GO, &RUST, &CPP, &CSHARP,
];

/// Look up a language's config by its tag.
pub fn config_for(tag: Language) -> &'static LanguageConfig {
    ALL.iter()
        .copied()
        .find(|c| c.tag == tag)
        .expect("every Language variant has a registered LanguageConfig")
}

/// Look up the (at most one, in this registry) language that claims a
/// given file extension.
pub fn config_for_extension(ext: &str) -> Option<&'static LanguageConfig> {
    ALL.iter().copied().find(|c| c.owns_extension(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_config() {
        for &lang in Language::ALL {
            assert_eq!(config_for(lang).tag, lang);
        }
    }

    #[test]
    fn extension_lookup_is_case_insensitive_when_declared_so() {
        assert_eq!(config_for_extension("py").unwrap().tag, Language::Python);
        assert_eq!(config_for_extension("rs").unwrap().tag, Language::Rust);
        assert!(config_for_extension("xyz").is_none());
    }

    #[test]
    fn cpp_has_no_import_rules() {
        assert!(CPP.imports.is_empty());
    }
}

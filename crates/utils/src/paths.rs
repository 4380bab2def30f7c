// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Path-to-dotted-segment helpers used when a Module's FQN is built from
//! its path relative to the project root, and when an import's
//! filesystem-relative path needs to be resolved against a module's own
//! directory.

use std::path::{Component, Path};

/// Split a path, relative to the project root, into the dotted segments
/// that make up its package path plus its module stem (the file name
/// without extension). Directory separators become dots; a leading `./`
/// or repeated separators are normalized away.
pub fn dotted_segments(relative: &Path) -> Vec<String> {
    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(os) => Some(os.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if let Some(last) = segments.last_mut() {
        if let Some(stem) = Path::new(last.as_str()).file_stem() {
            *last = stem.to_string_lossy().into_owned();
        }
    }
    segments
}

/// Resolve a relative import specifier (`./a`, `../b/c`) against the
/// importing module's own package-path segments (not including the
/// module's own stem), returning the dotted segments of the target.
/// Non-relative specifiers are returned unchanged, split on `/`.
pub fn resolve_relative_import(importer_package: &[String], specifier: &str) -> Vec<String> {
    if !specifier.starts_with('.') {
        return specifier
            .split(['/', '.'])
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }
    let mut base = importer_package.to_vec();
    let mut rest = specifier;
    while let Some(stripped) = rest.strip_prefix("../") {
        base.pop();
        rest = stripped;
    }
    rest = rest.trim_start_matches("./");
    for seg in rest.split('/').filter(|s| !s.is_empty()) {
        if seg == ".." {
            base.pop();
        } else {
            base.push(seg.to_string());
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_directories_and_strips_extension() {
        let segs = dotted_segments(Path::new("services/processor.py"));
        assert_eq!(segs, vec!["services", "processor"]);
    }

    #[test]
    fn resolves_sibling_relative_import() {
        let importer = vec!["a".to_string()];
        let target = resolve_relative_import(&importer, "./a");
        assert_eq!(target, vec!["a", "a"]);
    }

    #[test]
    fn resolves_parent_relative_import() {
        let importer = vec!["app".to_string(), "services".to_string()];
        let target = resolve_relative_import(&importer, "../utils/helpers");
        assert_eq!(target, vec!["app", "utils", "helpers"]);
    }

    #[test]
    fn leaves_absolute_specifier_dot_split() {
        let target = resolve_relative_import(&[], "utils.helpers");
        assert_eq!(target, vec!["utils", "helpers"]);
    }
}

// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use codegraph_core::{CoreError, EdgeKind, Fqn, NodeKind, NodeRef, PropMap, Result};
use codegraph_languages::rules::PackageRule;
use codegraph_sink::{GraphSink, SinkBuffer};
use codegraph_symbols::SymbolTable;

use crate::discovered::{DiscoveredFile, WalkResult};

/// Vendored/build-output directories excluded regardless of what a
/// project's own `.gitignore` happens to say (§4.D).
const ALWAYS_EXCLUDED: &[&str] = &[
    "node_modules",
    "target",
    "vendor",
    "dist",
    "build",
    ".git",
    "__pycache__",
    ".venv",
];

struct RawFile {
    relative: PathBuf,
    language: codegraph_core::Language,
}

/// Walk `root`, classify every file, and emit Project/Package/Module
/// nodes plus CONTAINS edges. Returns the classified files so the Driver
/// can hand them to the definition and resolution passes without
/// re-walking the filesystem.
pub fn walk<S: GraphSink>(
    root: &Path,
    project_name: &str,
    follow_symlinks: bool,
    table: &SymbolTable,
    sink: &SinkBuffer<S>,
) -> Result<WalkResult> {
    let raw_files = collect_files(root, follow_symlinks)?;

    let project_fqn = Fqn::root(project_name);
    let mut project_props = PropMap::new();
    project_props.insert("qualified_name".to_string(), project_fqn.as_str().into());
    sink.ensure_node(NodeKind::Project, &project_fqn, &project_props);

    // Direct (non-recursive) filenames per directory, used to evaluate
    // MarkerFile/EveryDirectory package rules.
    let mut direct_children: HashMap<PathBuf, Vec<&RawFile>> = HashMap::new();
    for file in &raw_files {
        let parent = file.relative.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        direct_children.entry(parent).or_default().push(file);
    }

    // Every ancestor directory of every file (not just directories that
    // directly contain a file — an intermediate directory with only
    // subdirectories still needs a place in the package chain), shallowest
    // first so each directory's FQN can be resolved from its already
    // resolved parent.
    let mut directory_set: std::collections::HashSet<PathBuf> = std::collections::HashSet::new();
    for file in &raw_files {
        let mut ancestor = file.relative.parent();
        while let Some(dir) = ancestor {
            if !directory_set.insert(dir.to_path_buf()) {
                break;
            }
            ancestor = dir.parent();
        }
    }
    let mut directories: Vec<PathBuf> = directory_set.into_iter().collect();
    directories.sort_by_key(|d| d.components().count());

    let mut package_fqn_of: HashMap<PathBuf, Fqn> = HashMap::new();
    package_fqn_of.insert(PathBuf::new(), project_fqn.clone());

    for dir in &directories {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let parent = dir.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        let parent_fqn = package_fqn_of
            .get(&parent)
            .cloned()
            .unwrap_or_else(|| project_fqn.clone());

        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let children = direct_children.get(dir).map(Vec::as_slice).unwrap_or(&[]);
        let qualifying = qualifying_languages(children);

        if qualifying.is_empty() {
            // Skip this directory entirely: its children attach directly
            // to the nearest qualifying ancestor (possibly the Project).
            package_fqn_of.insert(dir.clone(), parent_fqn);
            continue;
        }

        let package_fqn = parent_fqn.child(&dir_name);
        let mut props = PropMap::new();
        props.insert(
            "languages".to_string(),
            serde_json::Value::Array(
                qualifying
                    .iter()
                    .map(|l| serde_json::Value::String(l.tag().to_string()))
                    .collect(),
            ),
        );
        let parent_kind = if parent_fqn == project_fqn {
            NodeKind::Project
        } else {
            NodeKind::Package
        };
        sink.ensure_node(NodeKind::Package, &package_fqn, &props);
        sink.ensure_relationship(
            NodeRef::new(parent_kind, &parent_fqn),
            EdgeKind::Contains,
            NodeRef::new(NodeKind::Package, &package_fqn),
            &PropMap::new(),
        );
        table.register_child(&parent_fqn, &dir_name, package_fqn.clone());
        package_fqn_of.insert(dir.clone(), package_fqn);
    }

    let mut files = Vec::with_capacity(raw_files.len());
    for file in &raw_files {
        let parent = file.relative.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        let package_fqn = package_fqn_of.get(&parent).cloned().unwrap_or_else(|| project_fqn.clone());
        let stem = file
            .relative
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let module_fqn = package_fqn.child(&stem);

        let package_kind = if package_fqn == project_fqn {
            NodeKind::Project
        } else {
            NodeKind::Package
        };
        let mut props = PropMap::new();
        props.insert("language".to_string(), file.language.tag().into());
        sink.ensure_node(NodeKind::Module, &module_fqn, &props);
        sink.ensure_relationship(
            NodeRef::new(package_kind, &package_fqn),
            EdgeKind::Contains,
            NodeRef::new(NodeKind::Module, &module_fqn),
            &PropMap::new(),
        );
        table.register_child(&package_fqn, &stem, module_fqn.clone());
        table.register_node_kind(&module_fqn, NodeKind::Module, file.language, module_fqn.clone());

        files.push(DiscoveredFile {
            absolute_path: root.join(&file.relative),
            language: file.language,
            package_fqn,
            module_fqn,
        });
    }

    Ok(WalkResult { project_fqn, files })
}

fn qualifying_languages(children: &[&RawFile]) -> Vec<codegraph_core::Language> {
    let mut qualifying = Vec::new();
    for config in codegraph_languages::ALL {
        let satisfies = match config.package_rule {
            PackageRule::MarkerFile(marker) => children.iter().any(|f| {
                f.relative
                    .file_name()
                    .map(|n| n == marker)
                    .unwrap_or(false)
            }),
            PackageRule::EveryDirectory => children.iter().any(|f| f.language == config.tag),
            PackageRule::RootOnly => false,
        };
        if satisfies {
            qualifying.push(config.tag);
        }
    }
    qualifying
}

fn collect_files(root: &Path, follow_symlinks: bool) -> Result<Vec<RawFile>> {
    if !root.exists() {
        return Err(CoreError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("project root {} does not exist", root.display()),
        )));
    }

    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(true).git_ignore(true).follow_links(follow_symlinks);
    builder.filter_entry(|entry| {
        entry
            .file_name()
            .to_str()
            .map(|name| !ALWAYS_EXCLUDED.contains(&name))
            .unwrap_or(true)
    });

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        let relative = match entry.path().strip_prefix(root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => continue,
        };
        let Some(ext) = relative.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let Some(config) = codegraph_languages::config_for_extension(ext) else {
            continue;
        };
        files.push(RawFile {
            relative,
            language: config.tag,
        });
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use codegraph_sink::InMemoryGraphSink;
    use std::fs;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn flattens_directories_without_a_package_marker() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "utils/helpers.py", "def short(): pass\n");

        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let result = walk(dir.path(), "proj", false, &table, &sink).unwrap();

        // No __init__.py anywhere: "utils" never qualifies as a package,
        // so the module attaches directly under Project.
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].module_fqn.as_str(), "proj.helpers");
    }

    #[test]
    fn marker_file_directories_become_packages() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "app/__init__.py", "");
        write(dir.path(), "app/services/__init__.py", "");
        write(dir.path(), "app/services/processor.py", "def process(): pass\n");

        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let result = walk(dir.path(), "proj", false, &table, &sink).unwrap();

        let processor = result
            .files
            .iter()
            .find(|f| f.absolute_path.ends_with("processor.py"))
            .unwrap();
        assert_eq!(processor.module_fqn.as_str(), "proj.app.services.processor");
        assert!(sink.inner().has_node("Package", "proj.app"));
        assert!(sink.inner().has_node("Package", "proj.app.services"));
        assert!(sink.inner().has_relationship("proj.app", "CONTAINS", "proj.app.services"));
    }

    #[test]
    fn excludes_vendored_directories() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "node_modules/dep/index.js", "");
        write(dir.path(), "src/index.js", "function f() {}\n");

        let table = SymbolTable::new();
        let sink = SinkBuffer::new(InMemoryGraphSink::new());
        let result = walk(dir.path(), "proj", false, &table, &sink).unwrap();

        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].absolute_path.ends_with("src/index.js"));
    }
}

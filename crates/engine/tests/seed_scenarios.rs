// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The six end-to-end seed scenarios: each stands up a synthetic
//! multi-file project under a `tempfile::tempdir()`, runs the full
//! walk -> define -> resolve pipeline through [`Driver`], and asserts
//! directly on the resulting `petgraph` graph via [`InMemoryGraphSink`].

use std::fs;
use std::path::Path;

use codegraph_engine::{Driver, ScanConfig};
use codegraph_sink::InMemoryGraphSink;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// (a) Cross-file short-name call: `b.py` imports `foo` from `a.py` by
/// its bare name and calls it; expect a single CALLS edge from `b.bar`
/// to `a.foo`.
#[test]
fn cross_file_short_name_call_resolves() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", "def foo():\n    pass\n");
    write(dir.path(), "b.py", "from a import foo\n\ndef bar():\n    foo()\n");

    let config = ScanConfig {
        project_name: "proj".to_string(),
        root: dir.path().to_path_buf(),
        ..ScanConfig::default()
    };
    let sink = InMemoryGraphSink::new();
    let driver = Driver::new(config, sink);
    let stats = driver.run().unwrap();

    assert!(driver.sink().has_relationship("proj.b.bar", "CALLS", "proj.a.foo"));
    assert_eq!(stats.unresolved_calls_dropped, 0);
}

/// (b) Singleton-pattern chained call: `Storage.get_instance()` is used
/// as the receiver of `.clear_all()`. Absent declared-return-type
/// tracking, the qualifier's own type stands in for the call's return
/// type, so both hops resolve.
#[test]
fn singleton_chained_call_resolves_through_static_method_receiver() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "storage.py",
        "class Storage:\n    @staticmethod\n    def get_instance():\n        pass\n\n    def clear_all(self):\n        pass\n\ndef reset():\n    Storage.get_instance().clear_all()\n",
    );

    let config = ScanConfig {
        project_name: "proj".to_string(),
        root: dir.path().to_path_buf(),
        ..ScanConfig::default()
    };
    let driver = Driver::new(config, InMemoryGraphSink::new());
    driver.run().unwrap();

    assert!(driver.sink().has_relationship("proj.storage.reset", "CALLS", "proj.storage.Storage.clear_all"));
    assert!(driver.sink().has_relationship("proj.storage.reset", "CALLS", "proj.storage.Storage.get_instance"));
}

/// (c) Inheritance with an overridden method: a `Dog` constructed and
/// called through a locally typed variable resolves to `Dog.speak`
/// (receiver-typing cue #1), not the inherited `Base.speak`.
#[test]
fn overridden_method_prefers_the_static_receiver_type() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "base.py", "class Base:\n    def speak(self):\n        pass\n");
    write(
        dir.path(),
        "dog.py",
        "from base import Base\n\nclass Dog(Base):\n    def speak(self):\n        pass\n",
    );
    write(
        dir.path(),
        "main.py",
        "from dog import Dog\n\ndef make_sound():\n    d = Dog()\n    d.speak()\n",
    );

    let config = ScanConfig {
        project_name: "proj".to_string(),
        root: dir.path().to_path_buf(),
        ..ScanConfig::default()
    };
    let driver = Driver::new(config, InMemoryGraphSink::new());
    driver.run().unwrap();

    assert!(driver.sink().has_relationship("proj.main.make_sound", "CALLS", "proj.dog.Dog.speak"));
    assert!(!driver.sink().has_relationship("proj.main.make_sound", "CALLS", "proj.base.Base.speak"));
    assert!(driver.sink().has_relationship("proj.dog.Dog", "INHERITS", "proj.base.Base"));
}

/// (d) A `super()` call resolves against the enclosing type's first
/// recorded base, not against the overriding method itself.
#[test]
fn super_call_resolves_to_the_base_class_method() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "base.py", "class Base:\n    def greet(self):\n        pass\n");
    write(
        dir.path(),
        "dog.py",
        "from base import Base\n\nclass Dog(Base):\n    def greet(self):\n        super().greet()\n",
    );

    let config = ScanConfig {
        project_name: "proj".to_string(),
        root: dir.path().to_path_buf(),
        ..ScanConfig::default()
    };
    let driver = Driver::new(config, InMemoryGraphSink::new());
    driver.run().unwrap();

    assert!(driver.sink().has_relationship("proj.dog.Dog.greet", "CALLS", "proj.base.Base.greet"));
}

/// (e) An aliased re-export chain: `b.py` re-exports `a.foo` as `bar`,
/// `c.py` imports `bar` from `b` and calls it. Expect the CALLS edge to
/// land on the original `a.foo`, plus one IMPORTS edge per hop.
#[test]
fn aliased_reexport_chain_resolves_to_the_original_definition() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", "def foo():\n    pass\n");
    write(dir.path(), "b.py", "from a import foo as bar\n");
    write(dir.path(), "c.py", "from b import bar\n\ndef use():\n    bar()\n");

    let config = ScanConfig {
        project_name: "proj".to_string(),
        root: dir.path().to_path_buf(),
        ..ScanConfig::default()
    };
    let driver = Driver::new(config, InMemoryGraphSink::new());
    driver.run().unwrap();

    assert!(driver.sink().has_relationship("proj.c.use", "CALLS", "proj.a.foo"));
    assert!(driver.sink().has_relationship("proj.b", "IMPORTS", "proj.a"));
    assert!(driver.sink().has_relationship("proj.c", "IMPORTS", "proj.b"));
}

/// (f) A four-level package hierarchy (each level marked by
/// `__init__.py`) still produces the correct nested CONTAINS chain and
/// a correctly qualified FQN for the deepest module.
#[test]
fn deep_package_hierarchy_produces_nested_contains_chain() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "app/__init__.py", "");
    write(dir.path(), "app/services/__init__.py", "");
    write(dir.path(), "app/services/billing/__init__.py", "");
    write(dir.path(), "app/services/billing/invoices/__init__.py", "");
    write(
        dir.path(),
        "app/services/billing/invoices/generator.py",
        "def generate():\n    pass\n",
    );

    let config = ScanConfig {
        project_name: "proj".to_string(),
        root: dir.path().to_path_buf(),
        ..ScanConfig::default()
    };
    let driver = Driver::new(config, InMemoryGraphSink::new());
    driver.run().unwrap();

    assert!(driver.sink().has_node("Module", "proj.app.services.billing.invoices.generator"));
    assert!(driver.sink().has_relationship("proj.app", "CONTAINS", "proj.app.services"));
    assert!(driver.sink().has_relationship("proj.app.services", "CONTAINS", "proj.app.services.billing"));
    assert!(driver.sink().has_relationship("proj.app.services.billing", "CONTAINS", "proj.app.services.billing.invoices"));
    assert!(driver.sink().has_relationship(
        "proj.app.services.billing.invoices",
        "CONTAINS",
        "proj.app.services.billing.invoices.generator"
    ));
    assert!(driver.sink().has_relationship(
        "proj.app.services.billing.invoices",
        "DEFINES",
        "proj.app.services.billing.invoices.generator.generate"
    ));
}

/// A file that isn't valid UTF-8 is skipped with a diagnostic (§6, §7)
/// rather than handed to tree-sitter as raw bytes; the rest of the
/// project still scans normally.
#[test]
fn non_utf8_file_is_skipped_not_parsed() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "good.py", "def fine():\n    pass\n");
    fs::write(dir.path().join("bad.py"), [0x66, 0x6e, 0xff, 0xfe, 0x00]).unwrap();

    let config = ScanConfig {
        project_name: "proj".to_string(),
        root: dir.path().to_path_buf(),
        ..ScanConfig::default()
    };
    let driver = Driver::new(config, InMemoryGraphSink::new());
    let stats = driver.run().unwrap();

    assert!(driver.sink().has_node("Function", "proj.good.fine"));
    assert!(stats.files_skipped >= 1);
}

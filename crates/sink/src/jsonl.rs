// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::Write;
use std::sync::Mutex;

use serde::Serialize;

use codegraph_core::{NodeRef, PropMap};

use crate::sink::GraphSink;

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Record<'a> {
    Node {
        label: &'a str,
        qualified_name: &'a str,
        props: &'a PropMap,
    },
    Relationship {
        src_label: &'a str,
        src_qualified_name: &'a str,
        rel_type: &'a str,
        dst_label: &'a str,
        dst_qualified_name: &'a str,
        props: &'a PropMap,
    },
}

/// Writes one JSON object per node/relationship to a `Write` sink — the
/// CLI's `--out <file.jsonl>` mode. No internal dedup: callers route
/// through [`crate::SinkBuffer`] for that, same as every `GraphSink`.
pub struct JsonlGraphSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonlGraphSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    fn write_line(&self, record: &Record<'_>) {
        let Ok(line) = serde_json::to_string(record) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
        }
    }
}

impl<W: Write + Send> GraphSink for JsonlGraphSink<W> {
    fn upsert_node(&self, label: &str, key_value: &str, props: &PropMap) {
        self.write_line(&Record::Node {
            label,
            qualified_name: key_value,
            props,
        });
    }

    fn add_relationship(&self, src: NodeRef<'_>, rel_type: &str, dst: NodeRef<'_>, props: &PropMap) {
        self.write_line(&Record::Relationship {
            src_label: src.label,
            src_qualified_name: src.key_value,
            rel_type,
            dst_label: dst.label,
            dst_qualified_name: dst.key_value,
            props,
        });
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codegraph_core::NodeKind;

    #[test]
    fn writes_one_line_per_node() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let sink = JsonlGraphSink::new(file.reopen().unwrap());
        let fqn = codegraph_core::Fqn::root("proj");
        sink.upsert_node("Project", fqn.as_str(), &PropMap::new());
        sink.add_relationship(
            NodeRef::new(NodeKind::Project, &fqn),
            "CONTAINS",
            NodeRef::new(NodeKind::Module, &fqn.child("m")),
            &PropMap::new(),
        );
        sink.flush();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("\"kind\":\"node\""));
        assert!(contents.contains("\"kind\":\"relationship\""));
    }
}

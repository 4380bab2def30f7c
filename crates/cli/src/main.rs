// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thin I/O layer over `codegraph-engine`'s `Driver`: argument parsing,
//! sink selection, and a one-shot summary printed to stdout (§12).

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use codegraph_core::Language;
use codegraph_engine::{Driver, ScanConfig};
use codegraph_sink::{InMemoryGraphSink, JsonlGraphSink};

#[derive(Parser, Debug)]
#[command(name = "codegraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk a project, extract definitions, resolve references, and
    /// emit the resulting graph.
    Scan {
        /// Project root to scan.
        path: PathBuf,

        /// Name the emitted Project node is keyed under.
        #[arg(long)]
        name: String,

        /// Restrict the scan to these languages (repeatable). Every
        /// compiled-in language is scanned when omitted.
        #[arg(long = "lang", value_parser = parse_language)]
        lang: Vec<Language>,

        /// Write the graph as line-delimited JSON instead of only
        /// printing a summary.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print every diagnostic event, not just the summary counters.
        #[arg(long)]
        verbose: bool,

        /// Follow symlinks while walking.
        #[arg(long)]
        follow_symlinks: bool,
    },
}

fn parse_language(raw: &str) -> Result<Language, String> {
    Language::from_tag(raw).ok_or_else(|| {
        let known: Vec<&str> = Language::ALL.iter().map(|l| l.tag()).collect();
        format!("unknown language '{raw}' (known: {})", known.join(", "))
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Command::Scan {
        path,
        name,
        lang,
        out,
        verbose,
        follow_symlinks,
    } = cli.command;

    let config = ScanConfig {
        project_name: name,
        root: path,
        languages: (!lang.is_empty()).then_some(lang),
        follow_symlinks,
        verbose_diagnostics: verbose,
        ..ScanConfig::default()
    };

    let stats = match out {
        Some(path) => {
            let writer = BufWriter::new(File::create(&path)?);
            let driver = Driver::new(config, JsonlGraphSink::new(writer));
            let stats = driver.run()?;
            print_events(&driver, verbose);
            stats
        }
        None => {
            let driver = Driver::new(config, InMemoryGraphSink::new());
            let stats = driver.run()?;
            print_events(&driver, verbose);
            stats
        }
    };

    println!("files scanned:        {}", stats.files_scanned);
    println!("files skipped:        {}", stats.files_skipped);
    println!("nodes emitted:        {}", stats.nodes_emitted);
    println!("relationships emitted: {}", stats.relationships_emitted);
    println!("duplicate definitions: {}", stats.duplicate_definitions);
    println!("unresolved calls dropped: {}", stats.unresolved_calls_dropped);
    println!("external references:  {}", stats.external_references_recorded);

    Ok(())
}

fn print_events<S: codegraph_sink::GraphSink>(driver: &Driver<S>, verbose: bool) {
    if !verbose {
        return;
    }
    for event in driver.diagnostics().events() {
        println!("{event:?}");
    }
}

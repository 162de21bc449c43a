//! Command-line interface for the ingester.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{IngestError, Result};
use crate::export;
use crate::paragraphs;
use crate::parsers::parse_classified;
use crate::types::DocType;

/// SynQanun ingest - parse Arabic legal documents into structured records.
#[derive(Parser)]
#[command(name = "synqanun-ingest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a single document and print (or write) its JSON envelope.
    Parse {
        /// Document payload: extracted word/document.xml or plain text
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse every document under a directory and write JSON envelopes.
    Export {
        /// Directory scanned recursively for .xml/.txt documents
        input_dir: PathBuf,

        /// Output directory (default: json_clean_all)
        #[arg(short, long, default_value = "json_clean_all")]
        output: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, output } => parse_command(&file, output.as_deref()),
        Commands::Export { input_dir, output } => export_command(&input_dir, &output),
    }
}

/// Read a document payload and extract its ordered paragraphs.
///
/// Returns the raw bytes (hashed into the envelope) alongside the
/// paragraphs. `.xml` is treated as an extracted WordprocessingML
/// `document.xml`; `.txt` as one paragraph per line.
fn read_document(path: &Path) -> Result<(Vec<u8>, Vec<String>)> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    let paras = match extension.as_deref() {
        Some("xml") => paragraphs::from_docx_xml(&text)?,
        Some("txt") => paragraphs::from_plain_text(&text),
        _ => {
            return Err(IngestError::UnsupportedExtension {
                path: path.to_path_buf(),
            })
        }
    };

    Ok((bytes, paras))
}

/// Classify, parse and envelope one document file.
fn ingest_file(path: &Path) -> Result<serde_json::Value> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| IngestError::MissingFilename(path.to_path_buf()))?;

    let doc_type = DocType::from_filename(name);
    if doc_type == DocType::Unknown {
        tracing::warn!(file = %name, "Unknown document type, emitting metadata-only envelope");
    }

    let (bytes, paras) = read_document(path)?;
    let parsed = parse_classified(doc_type, &paras);
    export::envelope(name, &bytes, &parsed)
}

/// Execute the parse command.
fn parse_command(file: &Path, output: Option<&Path>) -> Result<()> {
    let envelope = ingest_file(file)?;
    let json = export::to_json_string(&envelope)?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Execute the export command.
fn export_command(input_dir: &Path, output_dir: &Path) -> Result<()> {
    let mut files = Vec::new();
    collect_documents(input_dir, &mut files)?;
    files.sort();

    if files.is_empty() {
        println!(
            "{} {}",
            style("No documents found in").yellow(),
            input_dir.display()
        );
        return Ok(());
    }

    println!(
        "{} {} {} {}",
        style("Exporting").bold(),
        style(files.len()).cyan(),
        "documents from",
        style(input_dir.display()).cyan()
    );

    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut exported = 0usize;
    let mut unknown = 0usize;
    for file in &files {
        if let Some(name) = file.file_name().and_then(|n| n.to_str()) {
            pb.set_message(name.to_string());
        }

        let envelope = match ingest_file(file) {
            Ok(envelope) => envelope,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };
        if envelope["doc_type"] == "unknown" {
            unknown += 1;
        }

        let stem = file
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| IngestError::MissingFilename(file.clone()))?;
        let out_path = output_dir.join(format!("{stem}.json"));
        fs::write(&out_path, export::to_json_string(&envelope)?)?;

        exported += 1;
        pb.inc(1);
    }

    pb.finish_and_clear();

    println!(
        "{} {} envelopes to {}",
        style("Saved").green().bold(),
        exported,
        output_dir.display()
    );
    if unknown > 0 {
        println!(
            "  {} {} without a recognizable type keyword",
            style(unknown).yellow().bold(),
            if unknown == 1 { "file" } else { "files" }
        );
    }

    Ok(())
}

/// Recursively collect .xml/.txt document files, skipping editor lock files.
fn collect_documents(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_documents(&path, files)?;
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with("~$") {
            continue;
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        if matches!(extension.as_deref(), Some("xml") | Some("txt")) {
            files.push(path);
        }
    }

    Ok(())
}

// src/main.rs
mod config;
mod document;
mod extractors;
mod resume;
mod storage;
mod utils;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use clap::Parser;
use resume::batch::{self, BatchItem};
use resume::{ParsedDocument, ResumeParser};
use storage::{CsvExporter, StorageManager};
use utils::AppError;

/// Command Line Interface for the résumé field extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Résumé files to process (.pdf, .docx or .txt)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory for saved records, metadata and debug dumps
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// JSON skill vocabulary (overrides RESUME_SKILLS_FILE)
    #[arg(long)]
    skills: Option<PathBuf>,

    /// CSV export path (default: <output-dir>/extracted_resume_data.csv)
    #[arg(long)]
    export: Option<PathBuf>,

    /// Debug mode - save extracted and annotated text for each document
    #[arg(short, long)]
    debug: bool,

    /// Print records only; skip JSON persistence and the CSV export
    #[arg(long)]
    no_save: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Load the skill vocabulary (flag, then RESUME_SKILLS_FILE, then built-in)
    let vocabulary = config::load_skill_vocabulary(args.skills.as_deref())?;
    let parser = Arc::new(ResumeParser::new(&vocabulary)?);

    // 4. Resolve output locations; nothing is created until there is something to write
    let storage = if args.no_save && !args.debug {
        None
    } else {
        Some(StorageManager::new(&args.output_dir)?)
    };
    let mut exporter = if args.no_save {
        None
    } else {
        let export_path = args
            .export
            .clone()
            .unwrap_or_else(|| args.output_dir.join("extracted_resume_data.csv"));
        if export_path.is_dir() {
            return Err(AppError::Config(format!("Export path {} is a directory", export_path.display())));
        }
        Some(CsvExporter::new(&export_path))
    };

    // 5. Extract and assemble every document on the blocking pool
    tracing::info!("Processing {} document(s)", args.inputs.len());
    let items = batch::process_batch(Arc::clone(&parser), args.inputs.clone()).await;

    // 6. Report, persist and export each result in input order
    let mut success_count = 0;
    let mut failure_count = 0;

    for BatchItem { path, outcome } in items {
        let parsed = match outcome {
            Ok(parsed) => parsed,
            Err(_) => {
                // Already logged by the batch runner
                failure_count += 1;
                continue;
            }
        };
        success_count += 1;

        if parsed.text.is_empty() {
            tracing::warn!("No text extracted from {}; record holds placeholders only", path.display());
        }

        let json = serde_json::to_string_pretty(&parsed.record)
            .map_err(|e| AppError::Processing(format!("Failed to serialize record for {}: {}", path.display(), e)))?;
        println!("{}", json);

        let name = storage::record_name(&path);

        if let Some(storage) = storage.as_ref() {
            if !args.no_save {
                save_outputs(storage, &name, &path, &parsed);
            }
            if args.debug {
                write_debug_dumps(storage, &name, &parsed);
            }
        }

        if let Some(exporter) = exporter.as_mut() {
            if let Err(e) = exporter.append(&parsed.record) {
                tracing::error!("Failed to export {}: {}", path.display(), e);
            }
        }
    }

    if let Some(exporter) = exporter {
        exporter.finish()?;
    }

    tracing::info!("Processing finished. Success: {}, Failures: {}", success_count, failure_count);

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!("Failed to extract any records from {} document(s)", failure_count)));
    }

    Ok(())
}

fn save_outputs(storage: &StorageManager, name: &str, source: &Path, parsed: &ParsedDocument) {
    match storage.save_record(name, &parsed.record) {
        Ok(path) => tracing::info!("Saved record to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save record: {}", e),
    }

    match storage.save_record_metadata(name, source, parsed.kind, &parsed.text, &parsed.record) {
        Ok(path) => tracing::info!("Saved record metadata to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save record metadata: {}", e),
    }
}

fn write_debug_dumps(storage: &StorageManager, name: &str, parsed: &ParsedDocument) {
    let debug_dir = match storage.debug_dir(name) {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("Failed to create debug directory for {}: {}", name, e);
            return;
        }
    };

    // Save the raw extracted text for debugging
    let raw_text_path = debug_dir.join("extracted_text.txt");
    match std::fs::write(&raw_text_path, parsed.text.as_str()) {
        Ok(()) => tracing::info!("Saved extracted text to: {}", raw_text_path.display()),
        Err(e) => tracing::warn!("Failed to save extracted text: {}", e),
    }

    // Create debug text with highlighted headers and labels
    let annotated_path = debug_dir.join("annotated_text.txt");
    let patterns = extractors::debug_patterns();
    if let Err(e) = utils::text_debug::create_debug_text(parsed.text.as_str(), &annotated_path, &patterns) {
        tracing::warn!("Failed to create annotated debug text: {}", e);
    }
}

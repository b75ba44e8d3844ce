// src/resume/batch.rs
use std::path::PathBuf;
use std::sync::Arc;
use crate::resume::assembler::{ParsedDocument, ResumeParser};
use crate::utils::error::AppError;

/// Outcome of one input file in a batch run.
#[derive(Debug)]
pub struct BatchItem {
    pub path: PathBuf,
    pub outcome: Result<ParsedDocument, AppError>,
}

/// Parses every path on the blocking pool. Results come back in input order,
/// and one document failing never affects the others.
pub async fn process_batch(parser: Arc<ResumeParser>, paths: Vec<PathBuf>) -> Vec<BatchItem> {
    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let parser = Arc::clone(&parser);
            let worker_path = path.clone();
            let handle = tokio::task::spawn_blocking(move || parser.parse_file(&worker_path));
            (path, handle)
        })
        .collect();

    let mut items = Vec::with_capacity(handles.len());
    for (path, handle) in handles {
        let outcome = match handle.await {
            Ok(result) => result.map_err(AppError::from),
            Err(e) => Err(AppError::Processing(format!("worker for {} failed: {}", path.display(), e))),
        };
        if let Err(e) = &outcome {
            tracing::error!("Failed to process {}: {}", path.display(), e);
        }
        items.push(BatchItem { path, outcome });
    }

    items
}

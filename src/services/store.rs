//! JSON file store for contact submissions.
//!
//! DESIGN
//! ======
//! The whole store is one pretty-printed JSON array on disk. Every mutation
//! reads the full array, edits it in memory, and rewrites the file. Existing
//! elements are carried as raw JSON values: any array is a valid store, and
//! only the record being appended has the typed `Submission` shape. Appends
//! and clears go through a single writer task fed by a bounded queue, so two
//! requests can never interleave their read-modify-write cycles. Reads skip
//! the queue and go straight to the file.
//!
//! ERROR HANDLING
//! ==============
//! Writes land in a sibling `.tmp` file which is then renamed over the
//! store. A failed write leaves the previous array intact and readers never
//! see a partially written file. Errors are returned to the caller through
//! the command's reply channel. A command that panics is answered with
//! `WriterPanicked` and the writer moves on to the next one.

use std::ffi::OsString;
use std::future::Future;
use std::io;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::submission::{Submission, SubmissionDraft, next_id};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("store is not a valid JSON array: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no submission id left after {last}")]
    IdsExhausted { last: u64 },
    #[error("store writer panicked while handling a command")]
    WriterPanicked,
    #[error("store writer is not running")]
    WriterClosed,
}

/// Result of a successful append.
#[derive(Debug, Clone)]
pub struct Appended {
    pub submission: Submission,
    /// Number of records in the store after the append.
    pub total: usize,
}

enum WriteCommand {
    Append { draft: SubmissionDraft, reply: oneshot::Sender<Result<Appended, StoreError>> },
    Clear { reply: oneshot::Sender<Result<(), StoreError>> },
}

/// Handle to the on-disk submission store. Cheap to clone.
#[derive(Clone)]
pub struct SubmissionStore {
    path: Arc<PathBuf>,
    tx: mpsc::Sender<WriteCommand>,
}

impl SubmissionStore {
    /// Create the store file if missing and spawn its writer task.
    ///
    /// The writer exits once every `SubmissionStore` clone is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or the empty store file
    /// cannot be created.
    pub async fn open(path: impl Into<PathBuf>, queue_capacity: usize) -> Result<(Self, JoinHandle<()>), StoreError> {
        let path = Arc::new(path.into());
        ensure_store_file(&path).await?;

        let (tx, rx) = mpsc::channel(queue_capacity.max(1));
        let handle = tokio::spawn(run_writer(Arc::clone(&path), rx));

        info!(path = %path.display(), queue_capacity, "submission store ready");
        Ok((Self { path, tx }, handle))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse the full store. Elements are returned as stored,
    /// whatever their shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array.
    pub async fn read_all(&self) -> Result<Vec<Value>, StoreError> {
        read_records(&self.path).await
    }

    /// Raw store bytes, exactly as they are on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn read_raw(&self) -> Result<Vec<u8>, StoreError> {
        Ok(tokio::fs::read(self.path.as_path()).await?)
    }

    /// Queue an append and wait for the writer to persist it.
    ///
    /// # Errors
    ///
    /// Returns the writer's I/O or parse error, or `WriterClosed` if the
    /// writer task is gone.
    pub async fn append(&self, draft: SubmissionDraft) -> Result<Appended, StoreError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(WriteCommand::Append { draft, reply })
            .await
            .map_err(|_| StoreError::WriterClosed)?;
        rx.await.map_err(|_| StoreError::WriterClosed)?
    }

    /// Replace the store with an empty array.
    ///
    /// # Errors
    ///
    /// Returns the writer's I/O error, or `WriterClosed` if the writer task
    /// is gone.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(WriteCommand::Clear { reply })
            .await
            .map_err(|_| StoreError::WriterClosed)?;
        rx.await.map_err(|_| StoreError::WriterClosed)?
    }
}

async fn run_writer(path: Arc<PathBuf>, mut rx: mpsc::Receiver<WriteCommand>) {
    while let Some(command) = rx.recv().await {
        match command {
            WriteCommand::Append { draft, reply } => {
                let result = guarded(append_record(&path, draft)).await;
                if reply.send(result).is_err() {
                    warn!("append caller went away before the reply");
                }
            }
            WriteCommand::Clear { reply } => {
                let result = guarded(write_records(&path, &[])).await;
                if reply.send(result).is_err() {
                    warn!("clear caller went away before the reply");
                }
            }
        }
    }
    debug!(path = %path.display(), "submission store writer stopped");
}

/// Run one writer command, turning a panic into `WriterPanicked`.
async fn guarded<T>(command: impl Future<Output = Result<T, StoreError>>) -> Result<T, StoreError> {
    match AssertUnwindSafe(command).catch_unwind().await {
        Ok(result) => result,
        Err(_) => {
            error!("store writer command panicked");
            Err(StoreError::WriterPanicked)
        }
    }
}

async fn append_record(path: &Path, draft: SubmissionDraft) -> Result<Appended, StoreError> {
    let mut records = read_records(path).await?;
    let last = max_id(&records);
    let id = next_id(draft.created_ms(), last)
        .ok_or(StoreError::IdsExhausted { last: last.unwrap_or(u64::MAX) })?;
    let submission = draft.into_submission(id);
    records.push(serde_json::to_value(&submission)?);
    write_records(path, &records).await?;
    Ok(Appended { submission, total: records.len() })
}

/// Highest integer `id` in the store. Elements without one are skipped.
fn max_id(records: &[Value]) -> Option<u64> {
    records.iter().filter_map(|record| record.get("id").and_then(Value::as_u64)).max()
}

async fn read_records(path: &Path) -> Result<Vec<Value>, StoreError> {
    let raw = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&raw)?)
}

async fn write_records(path: &Path, records: &[Value]) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(records)?;
    let tmp = temp_path(path);
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

async fn ensure_store_file(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    if !tokio::fs::try_exists(path).await? {
        write_records(path, &[]).await?;
        info!(path = %path.display(), "created empty submission store");
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

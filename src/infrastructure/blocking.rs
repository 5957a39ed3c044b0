use std::time::Duration;

use crate::application::ports::{ConversionError, PdfProcessorError};

#[derive(Debug, thiserror::Error)]
pub enum BlockingTaskError {
    #[error("timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
    #[error("task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Runs CPU-bound work on the blocking pool and gives up after `timeout`.
///
/// A timed-out task keeps running detached; its result is dropped, so any
/// side effect that must not outlive the request belongs to the caller.
pub async fn run_blocking<T, F>(timeout: Duration, work: F) -> Result<T, BlockingTaskError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::time::timeout(timeout, tokio::task::spawn_blocking(work))
        .await
        .map_err(|_| BlockingTaskError::TimedOut(timeout))?
        .map_err(BlockingTaskError::from)
}

impl From<BlockingTaskError> for ConversionError {
    fn from(e: BlockingTaskError) -> Self {
        match e {
            BlockingTaskError::TimedOut(after) => Self::TimedOut(after.as_secs()),
            BlockingTaskError::Join(e) => Self::ConversionFailed(format!("task join error: {e}")),
        }
    }
}

impl From<BlockingTaskError> for PdfProcessorError {
    fn from(e: BlockingTaskError) -> Self {
        match e {
            BlockingTaskError::TimedOut(after) => Self::TimedOut(after.as_secs()),
            BlockingTaskError::Join(e) => Self::ExtractionFailed(format!("task join error: {e}")),
        }
    }
}

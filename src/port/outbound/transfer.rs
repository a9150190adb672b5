//! Product transfer port.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Byte counters reported while a transfer is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    pub downloaded: u64,
    /// Total size when the server reported it.
    pub total: Option<u64>,
}

/// Callback receiving transfer progress.
pub type ProgressFn<'a> = &'a (dyn Fn(TransferProgress) + Send + Sync);

/// Authenticated download of archived products.
#[async_trait]
pub trait ProductTransfer: Send + Sync {
    /// Download `url` to `destination`, returning the number of bytes written.
    ///
    /// The file only appears at `destination` once the transfer completed.
    ///
    /// # Errors
    ///
    /// Returns an error on authentication failure, transport errors or when
    /// the destination cannot be written.
    async fn fetch(&self, url: &str, destination: &Path, progress: ProgressFn<'_>) -> Result<u64>;
}

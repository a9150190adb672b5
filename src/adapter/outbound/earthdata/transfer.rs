//! Streamed product download through an Earthdata session.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::StatusCode;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::session::EarthdataSession;
use crate::error::{AuthError, Error, Result};
use crate::port::{ProductTransfer, ProgressFn, TransferProgress};

pub struct EarthdataTransfer {
    session: Arc<EarthdataSession>,
}

impl EarthdataTransfer {
    #[must_use]
    pub const fn new(session: Arc<EarthdataSession>) -> Self {
        Self { session }
    }

    async fn stream_to(&self, url: &str, part: &Path, progress: ProgressFn<'_>) -> Result<u64> {
        let response = self.session.get(url).await?;
        let status = response.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Err(AuthError::Rejected {
                host: response.url().host_str().unwrap_or_default().to_string(),
                status: status.as_u16(),
            }
            .into());
        }
        if !status.is_success() {
            return Err(Error::Connection(format!(
                "download of {url} returned HTTP {}",
                status.as_u16()
            )));
        }

        let total = response.content_length();
        let mut file = File::create(part).await?;
        let mut downloaded = 0u64;
        let mut body = response.bytes_stream();

        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;
            progress(TransferProgress { downloaded, total });
        }
        file.flush().await?;

        Ok(downloaded)
    }
}

/// `<destination>.part`
fn part_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".part");
    destination.with_file_name(name)
}

#[async_trait]
impl ProductTransfer for EarthdataTransfer {
    async fn fetch(&self, url: &str, destination: &Path, progress: ProgressFn<'_>) -> Result<u64> {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).await?;
        }
        let part = part_path(destination);

        match self.stream_to(url, &part, progress).await {
            Ok(bytes) => {
                fs::rename(&part, destination).await?;
                debug!(path = %destination.display(), bytes, "Transfer finished");
                Ok(bytes)
            }
            Err(e) => {
                if let Err(cleanup) = fs::remove_file(&part).await {
                    if cleanup.kind() != std::io::ErrorKind::NotFound {
                        warn!(path = %part.display(), error = %cleanup, "Could not remove partial download");
                    }
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_file_sits_next_to_destination() {
        assert_eq!(
            part_path(Path::new("/data/raw_zip/S1A.zip")),
            PathBuf::from("/data/raw_zip/S1A.zip.part")
        );
    }
}

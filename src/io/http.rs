use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::archive::ArchiveFile;

/// Downloads remote backup archives into buffer-backed [`ArchiveFile`]s.
pub struct HttpFetcher {
    client: Client,
    transferred_bytes: AtomicU64,
    max_retry: u32,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, max_retry: u32) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            transferred_bytes: AtomicU64::new(0),
            max_retry,
        })
    }

    /// Get total bytes transferred from network
    pub fn transferred_bytes(&self) -> u64 {
        self.transferred_bytes.load(Ordering::Relaxed)
    }

    /// Download the whole archive at `url` and hold it in memory.
    ///
    /// Timeouts and connection failures restart the download, up to the
    /// configured retry limit.
    pub async fn fetch(&self, url: &str) -> Result<ArchiveFile> {
        let mut retry_count = 0;

        let body = loop {
            match self.client.get(url).send().await {
                Ok(resp) => {
                    if !resp.status().is_success() {
                        bail!("HTTP request failed with status: {}", resp.status());
                    }

                    let bytes = resp.bytes().await?;
                    self.transferred_bytes
                        .fetch_add(bytes.len() as u64, Ordering::Relaxed);
                    break bytes;
                }
                Err(e) if e.is_timeout() || e.is_connect() => {
                    retry_count += 1;
                    if retry_count > self.max_retry {
                        return Err(anyhow::Error::new(e)
                            .context(format!("Max retries exceeded ({})", self.max_retry)));
                    }
                    tracing::warn!(
                        retry = retry_count,
                        max = self.max_retry,
                        error = %e,
                        "connection error, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(500 * retry_count as u64)).await;
                }
                Err(e) => return Err(e.into()),
            }
        };

        tracing::debug!(%url, bytes = body.len(), "downloaded backup archive");
        ArchiveFile::from_reader(body.as_ref())
            .with_context(|| format!("Cannot read backup archive from {url}"))
    }
}

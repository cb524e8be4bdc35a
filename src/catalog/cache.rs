//! Disk cache for the upstream font data file.
//!
//! The Noto metadata JSON changes rarely, so it is cached under the user
//! cache directory and revalidated at most once a day. Revalidation uses an
//! ETag-based conditional request when the server provided one; when the
//! network is unavailable a stale copy is still served.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{FontScoutError, Result};

use super::noto::NOTO_MAIN_JSON_URL;

/// How long a cached copy stays fresh (1 day).
const FRESH_FOR_SECS: i64 = 86_400;

/// HTTP timeout for data fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Metadata sidecar stored next to the cached content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataCacheMetadata {
    /// When the content was last fetched or revalidated.
    pub fetched_at: DateTime<Utc>,
    /// ETag from the last response, if any.
    pub etag: Option<String>,
    /// Size of the cached content in bytes.
    pub size_bytes: u64,
}

impl DataCacheMetadata {
    /// Whether the cached copy is still within its freshness window.
    pub fn is_fresh(&self) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        age.num_seconds() < FRESH_FOR_SECS
    }
}

/// Outcome of a [`DataCache::refresh`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New content was downloaded.
    Updated { size_bytes: u64 },
    /// The server confirmed the cached copy is current.
    NotModified,
}

/// TTL'd disk cache for one upstream data URL.
pub struct DataCache {
    dir: PathBuf,
    url: String,
}

impl DataCache {
    /// Cache for the default Noto data URL in the default directory.
    pub fn new() -> Self {
        Self::with_options(Self::default_dir(), NOTO_MAIN_JSON_URL)
    }

    /// Cache with an explicit directory and source URL.
    pub fn with_options(dir: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url: url.into(),
        }
    }

    /// Default cache directory.
    pub fn default_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fontscout")
    }

    /// The source URL this cache mirrors.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the cached content, keyed by a hash of the source URL so
    /// alternate data URLs get their own entries.
    pub fn content_path(&self) -> PathBuf {
        let hash = Sha256::digest(self.url.as_bytes());
        self.dir.join(format!("{}.json", hex::encode(&hash[..16])))
    }

    fn metadata_path(&self) -> PathBuf {
        self.content_path().with_extension("meta.json")
    }

    /// Load the data file, fetching or revalidating as needed.
    ///
    /// A fresh cached copy is returned without touching the network. A stale
    /// or missing copy triggers a fetch; if that fails and a stale copy
    /// exists it is returned instead.
    pub fn load(&self) -> Result<String> {
        if let Some(meta) = self.read_metadata() {
            if meta.is_fresh() {
                if let Ok(content) = self.read_content() {
                    tracing::debug!(url = %self.url, "using fresh cached font data");
                    return Ok(content);
                }
            }
        }

        match self.refresh(false) {
            Ok(_) => self.read_content(),
            Err(e) => {
                if let Ok(content) = self.read_content() {
                    tracing::warn!(
                        url = %self.url,
                        error = %e,
                        "font data fetch failed, using stale cache"
                    );
                    Ok(content)
                } else {
                    Err(FontScoutError::DataUnavailable {
                        message: format!("cannot fetch {} and no cached copy exists ({})", self.url, e),
                    })
                }
            }
        }
    }

    /// Revalidate the cache against the upstream URL.
    ///
    /// Sends `If-None-Match` when an ETag is known, unless `force` is set.
    pub fn refresh(&self, force: bool) -> Result<RefreshOutcome> {
        let etag = if force {
            None
        } else {
            self.read_metadata().and_then(|m| m.etag)
        };

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("fontscout/", env!("CARGO_PKG_VERSION")))
            .timeout(FETCH_TIMEOUT)
            .build()?;

        let mut request = client.get(&self.url);
        if let Some(etag) = &etag {
            request = request.header("If-None-Match", etag.as_str());
        }

        let response = request.send()?;

        if response.status() == reqwest::StatusCode::NOT_MODIFIED {
            // Touch the freshness window; the content is unchanged.
            if let Some(mut meta) = self.read_metadata() {
                meta.fetched_at = Utc::now();
                self.write_metadata(&meta)?;
            }
            tracing::debug!(url = %self.url, "font data not modified");
            return Ok(RefreshOutcome::NotModified);
        }

        if !response.status().is_success() {
            return Err(FontScoutError::DataUnavailable {
                message: format!("HTTP {} fetching {}", response.status(), self.url),
            });
        }

        let new_etag = response
            .headers()
            .get("etag")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let content = response.text()?;

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create cache directory {:?}", self.dir))?;
        fs::write(self.content_path(), &content)?;
        self.write_metadata(&DataCacheMetadata {
            fetched_at: Utc::now(),
            etag: new_etag,
            size_bytes: content.len() as u64,
        })?;

        tracing::info!(url = %self.url, bytes = content.len(), "font data updated");
        Ok(RefreshOutcome::Updated {
            size_bytes: content.len() as u64,
        })
    }

    /// Metadata of the cached copy, if one exists.
    pub fn read_metadata(&self) -> Option<DataCacheMetadata> {
        let content = fs::read_to_string(self.metadata_path()).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn write_metadata(&self, meta: &DataCacheMetadata) -> Result<()> {
        let json = serde_json::to_string_pretty(meta).context("serialize cache metadata")?;
        fs::write(self.metadata_path(), json)?;
        Ok(())
    }

    fn read_content(&self) -> Result<String> {
        Ok(fs::read_to_string(self.content_path())?)
    }

    /// Remove the cached copy and its metadata.
    pub fn clear(&self) -> Result<()> {
        for path in [self.content_path(), self.metadata_path()] {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

impl Default for DataCache {
    fn default() -> Self {
        Self::new()
    }
}

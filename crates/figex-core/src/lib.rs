//! Figex - Figma SVG component export
//!
//! Traverses a Figma document tree to find exportable components, fetches
//! their rendered SVG URLs in fixed-size batches, and downloads them to a
//! local directory, skipping all work when the persisted manifest shows
//! the file and its component set are unchanged.

pub mod client;
pub mod download;
pub mod error;
pub mod filter;
pub mod svgs;
pub mod walker;

pub use client::{Auth, FigmaClient, FileImagesParams, FileParams, QueryValue, DEFAULT_BASE_URL};
pub use download::{download_svgs, DownloadSvgsConfig};
pub use error::{FigexError, Result};
pub use filter::NodeFilter;
pub use svgs::{get_svgs, GetSvgsConfig, DEFAULT_BATCH_SIZE};
pub use walker::collect_components;

// Re-export the pure data types
pub use figex_types::{
    DownloadManifest, FileImagesResponse, FileResponse, GetSvgsResult, Node, NodeType, SvgData,
    MANIFEST_FILE_NAME,
};

use std::path::PathBuf;

/// Bundles the API client and a plain HTTP client for asset bodies behind
/// one set of credentials. The client instance is explicit state, passed
/// into every operation; nothing is held globally.
#[derive(Debug, Clone)]
pub struct Exporter {
    client: FigmaClient,
    http: reqwest::Client,
}

impl Exporter {
    pub fn new(auth: Auth) -> Self {
        Self {
            client: FigmaClient::new(auth),
            http: reqwest::Client::new(),
        }
    }

    /// Override the API base URL (mainly for tests and proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(base_url);
        self
    }

    /// Access the underlying API client
    pub fn client(&self) -> &FigmaClient {
        &self.client
    }

    /// Collect exportable components and resolve their render URLs
    pub async fn get_svgs(&self, config: &GetSvgsConfig) -> Result<GetSvgsResult> {
        svgs::get_svgs(&self.client, config).await
    }

    /// Download fetched records to disk, manifest-gated
    pub async fn download_svgs(&self, config: &DownloadSvgsConfig) -> Result<()> {
        download::download_svgs(&self.http, config).await
    }

    /// Fetch render URLs and download them in one call
    pub async fn fetch_and_download(
        &self,
        config: &GetSvgsConfig,
        save_directory: impl Into<PathBuf>,
        clear_directory: bool,
    ) -> Result<()> {
        let result = self.get_svgs(config).await?;
        let download = DownloadSvgsConfig {
            svgs_data: result.svgs,
            save_directory: save_directory.into(),
            clear_directory,
            last_modified: result.last_modified,
        };
        self.download_svgs(&download).await
    }
}

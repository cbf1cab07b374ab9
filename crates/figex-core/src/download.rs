//! Incremental download of rendered SVG assets

use crate::error::{FigexError, Result};
use figex_types::{DownloadManifest, SvgData, MANIFEST_FILE_NAME};
use futures::future::try_join_all;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Configuration for [`download_svgs`]
#[derive(Debug, Clone)]
pub struct DownloadSvgsConfig {
    /// Records to download, usually the `svgs` of a `get_svgs` result
    pub svgs_data: Vec<SvgData>,
    /// Directory the assets and the manifest are written into
    pub save_directory: PathBuf,
    /// Remove the directory before writing (idempotent when absent)
    pub clear_directory: bool,
    /// Fingerprint timestamp of the fetched file
    pub last_modified: String,
}

/// Download every record body and write it to
/// `<save_directory>/<name>.svg`, then persist the manifest.
///
/// When the persisted manifest already carries the same `lastModified` and
/// the same component-id set, the call returns without any filesystem or
/// network side effects. All asset downloads and writes run in parallel;
/// the manifest write strictly follows the completion of all of them, so
/// an interrupted run leaves the manifest untouched and the next
/// invocation re-downloads everything.
pub async fn download_svgs(http: &reqwest::Client, config: &DownloadSvgsConfig) -> Result<()> {
    let manifest_path = config.save_directory.join(MANIFEST_FILE_NAME);
    let previous = read_manifest(&manifest_path).await;

    let component_ids: Vec<String> = config.svgs_data.iter().map(|d| d.id.clone()).collect();
    if previous.matches(&config.last_modified, &component_ids) {
        debug!(
            directory = %config.save_directory.display(),
            "assets unchanged, skipping download"
        );
        return Ok(());
    }

    if config.clear_directory {
        match tokio::fs::remove_dir_all(&config.save_directory).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    tokio::fs::create_dir_all(&config.save_directory).await?;

    warn_on_name_collisions(&config.svgs_data);

    try_join_all(
        config
            .svgs_data
            .iter()
            .map(|record| save_svg(http, &config.save_directory, record)),
    )
    .await?;

    // Barrier: the manifest only ever describes a fully written directory.
    let manifest = DownloadManifest {
        last_modified: Some(config.last_modified.clone()),
        component_ids: Some(component_ids),
    };
    tokio::fs::write(&manifest_path, serde_json::to_vec(&manifest)?).await?;

    info!(
        count = config.svgs_data.len(),
        directory = %config.save_directory.display(),
        "svg download complete"
    );
    Ok(())
}

/// Missing or unparsable manifest files mean "no prior state", never an error.
async fn read_manifest(path: &Path) -> DownloadManifest {
    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
        Err(_) => DownloadManifest::default(),
    }
}

async fn save_svg(http: &reqwest::Client, directory: &Path, record: &SvgData) -> Result<()> {
    let url = record.url.as_deref().ok_or_else(|| FigexError::MissingUrl {
        id: record.id.clone(),
    })?;
    let body = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    let path = directory.join(format!("{}.svg", record.name));
    tokio::fs::write(&path, &body).await?;
    Ok(())
}

fn warn_on_name_collisions(records: &[SvgData]) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.name.as_str()) {
            warn!(
                name = %record.name,
                "duplicate svg name, files will overwrite each other"
            );
        }
    }
}

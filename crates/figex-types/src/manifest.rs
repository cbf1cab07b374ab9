//! Download manifest - the fingerprint of the last successful download

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// File name of the manifest inside the save directory
pub const MANIFEST_FILE_NAME: &str = "downloadData.json";

/// State of the last successful download, persisted as a JSON sidecar
/// (`downloadData.json`) inside the save directory.
///
/// A missing or unparsable manifest file is represented by the `Default`
/// (empty) manifest, which matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_ids: Option<Vec<String>>,
}

impl DownloadManifest {
    /// True when the given fingerprint matches this manifest: equal
    /// `lastModified` and the same *set* of component ids. Order is
    /// ignored, but both additions and removals break equality.
    pub fn matches(&self, last_modified: &str, component_ids: &[String]) -> bool {
        if self.last_modified.as_deref() != Some(last_modified) {
            return false;
        }

        let previous: HashSet<&str> = self
            .component_ids
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();
        let current: HashSet<&str> = component_ids.iter().map(String::as_str).collect();
        previous == current
    }
}

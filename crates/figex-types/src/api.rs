//! Figma REST API response shapes
//!
//! Only the fields the exporter consumes are required; everything else is
//! optional or collected as opaque JSON so schema drift upstream does not
//! break deserialization.

use crate::node::Node;
use serde::Deserialize;
use std::collections::HashMap;

/// Response of `GET /v1/files/{file_id}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    /// Root of the document tree
    pub document: Node,
    /// Last-modification timestamp, an opaque ISO-8601 string compared
    /// verbatim by the download cache
    pub last_modified: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub schema_version: Option<i64>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Component metadata keyed by node id, kept opaque
    #[serde(default)]
    pub components: serde_json::Map<String, serde_json::Value>,
    /// Style metadata keyed by style id, kept opaque
    #[serde(default)]
    pub styles: serde_json::Map<String, serde_json::Value>,
}

/// Response of `GET /v1/images/{file_id}`
///
/// An id the server could not render maps to `null` or is simply absent
/// from the mapping; both are accepted, not errors.
#[derive(Debug, Clone, Deserialize)]
pub struct FileImagesResponse {
    pub images: HashMap<String, Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_response_tolerates_extra_and_missing_fields() {
        let json = r#"{
            "document": { "id": "0:0", "name": "doc", "type": "DOCUMENT" },
            "lastModified": "2024-01-02T03:04:05Z",
            "name": "Icons",
            "editorType": "figma"
        }"#;

        let response: FileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.last_modified, "2024-01-02T03:04:05Z");
        assert!(response.role.is_none());
        assert!(response.components.is_empty());
    }

    #[test]
    fn null_render_url_is_accepted() {
        let json = r#"{ "images": { "1:2": "https://cdn/render.svg", "1:3": null } }"#;
        let response: FileImagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.images["1:2"].as_deref(),
            Some("https://cdn/render.svg")
        );
        assert!(response.images["1:3"].is_none());
    }
}

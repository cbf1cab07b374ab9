//! Exported SVG records

use serde::{Deserialize, Serialize};

/// One exportable component paired with its rendered SVG URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgData {
    /// Id of the component node
    pub id: String,
    /// Render URL, `None` when the server declined to render this id
    pub url: Option<String>,
    /// Component name, used verbatim as the output file stem
    pub name: String,
}

/// Result of a `get_svgs` operation. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSvgsResult {
    /// Records in traversal order
    pub svgs: Vec<SvgData>,
    /// The file's last-modification timestamp at fetch time
    pub last_modified: String,
}

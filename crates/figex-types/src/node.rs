//! Figma document tree model

use serde::{Deserialize, Serialize};

/// Node type tags used by the Figma file API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Vector,
    BooleanOperation,
    Star,
    Line,
    Ellipse,
    RegularPolygon,
    Rectangle,
    Text,
    Slice,
    Component,
    ComponentSet,
    Instance,
    /// Any tag introduced by the API after this crate shipped. Such nodes
    /// are still traversed; they are never exportable.
    #[serde(other)]
    Unknown,
}

impl NodeType {
    /// Get the wire tag for this node type
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Document => "DOCUMENT",
            NodeType::Canvas => "CANVAS",
            NodeType::Frame => "FRAME",
            NodeType::Group => "GROUP",
            NodeType::Vector => "VECTOR",
            NodeType::BooleanOperation => "BOOLEAN_OPERATION",
            NodeType::Star => "STAR",
            NodeType::Line => "LINE",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::RegularPolygon => "REGULAR_POLYGON",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Text => "TEXT",
            NodeType::Slice => "SLICE",
            NodeType::Component => "COMPONENT",
            NodeType::ComponentSet => "COMPONENT_SET",
            NodeType::Instance => "INSTANCE",
            NodeType::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One node of the remote document tree.
///
/// A read-only snapshot fetched once per operation and never mutated
/// locally. Only the fields consumed by the exporter are modeled; anything
/// else in the response body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique id of this node within the document
    pub id: String,
    /// Name given to the node by the user in the tool
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Whether the node is visible on the canvas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Opaque data written by plugins, visible only to the plugin that wrote it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_data: Option<serde_json::Value>,
    /// Opaque data written by plugins, visible to all plugins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_plugin_data: Option<serde_json::Value>,
    /// Child nodes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

//! Figex Types - Pure type definitions for the Figma SVG exporter
//!
//! This crate contains only serde data types with no async runtime
//! dependencies: the document tree model, the API response shapes,
//! the exported SVG records, and the download manifest.

pub mod api;
pub mod manifest;
pub mod node;
pub mod svg;

pub use api::*;
pub use manifest::*;
pub use node::*;
pub use svg::*;

//! Authenticated client for the Figma REST API

use crate::error::{FigexError, Result};
use figex_types::{FileImagesResponse, FileResponse};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Production endpoint of the Figma REST API
pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";

/// Escape set for query-string values. The API expects literal `:` and `,`
/// as separators inside id lists, so both stay unescaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b':')
    .remove(b',')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Authentication mode. Exactly one token kind is supplied at construction
/// and resolved once into a fixed request header.
#[derive(Clone)]
pub enum Auth {
    /// Personal access token, sent as `X-Figma-Token`
    PersonalAccessToken(String),
    /// OAuth access token, sent as `Authorization: Bearer`
    AccessToken(String),
}

impl Auth {
    fn header(&self) -> (&'static str, String) {
        match self {
            Auth::PersonalAccessToken(token) => ("X-Figma-Token", token.clone()),
            Auth::AccessToken(token) => ("Authorization", format!("Bearer {token}")),
        }
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Token values stay out of logs
        match self {
            Auth::PersonalAccessToken(_) => f.write_str("Auth::PersonalAccessToken(..)"),
            Auth::AccessToken(_) => f.write_str("Auth::AccessToken(..)"),
        }
    }
}

/// One query parameter value.
///
/// Lists are serialized comma-joined. Falsy values (empty strings, empty
/// lists, `false`, `0`) are omitted from the query string entirely.
#[derive(Debug, Clone)]
pub enum QueryValue {
    Str(String),
    List(Vec<String>),
    Number(f64),
    Bool(bool),
}

impl QueryValue {
    fn format(&self) -> Option<String> {
        let formatted = match self {
            QueryValue::Str(value) => value.clone(),
            QueryValue::List(items) => items.join(","),
            QueryValue::Number(value) if *value == 0.0 => return None,
            QueryValue::Number(value) => value.to_string(),
            QueryValue::Bool(false) => return None,
            QueryValue::Bool(true) => "true".to_string(),
        };
        if formatted.is_empty() {
            None
        } else {
            Some(formatted)
        }
    }
}

fn build_query(params: &[(&str, QueryValue)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .format()
                .map(|v| format!("{key}={}", utf8_percent_encode(&v, QUERY_VALUE)))
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// Optional parameters for [`FigmaClient::file`]
#[derive(Debug, Clone, Default)]
pub struct FileParams {
    /// Restrict the returned document to these nodes and their subtrees
    pub ids: Vec<String>,
    /// A specific version of the file instead of the current head
    pub version: Option<String>,
}

/// Parameters for [`FigmaClient::file_images`]
#[derive(Debug, Clone)]
pub struct FileImagesParams {
    /// Node ids to render
    pub ids: Vec<String>,
    /// Output format, `svg` by default
    pub format: String,
    pub scale: Option<f64>,
    pub svg_outline_text: bool,
    pub svg_include_id: bool,
    pub svg_include_node_id: bool,
    pub svg_simplify_stroke: bool,
    pub contents_only: bool,
    pub use_absolute_bounds: bool,
    pub version: Option<String>,
}

impl Default for FileImagesParams {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            format: "svg".to_string(),
            scale: None,
            svg_outline_text: false,
            svg_include_id: false,
            svg_include_node_id: false,
            svg_simplify_stroke: false,
            contents_only: false,
            use_absolute_bounds: false,
            version: None,
        }
    }
}

/// Client for the Figma REST API, holding one immutable auth header set.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: reqwest::Client,
    base_url: String,
    auth: Auth,
}

impl FigmaClient {
    /// Create a client against the production API
    pub fn new(auth: Auth) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            auth,
        }
    }

    /// Override the API base URL (mainly for tests and proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Issue a GET against the API and decode the JSON body.
    ///
    /// A body carrying a truthy `err` or `error` string field fails the
    /// call with [`FigexError::Api`] regardless of HTTP status. No retry.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, QueryValue)],
    ) -> Result<T> {
        let url = format!("{}/{}{}", self.base_url, path, build_query(params));
        debug!(%url, "figma api request");

        let (header, value) = self.auth.header();
        let body: serde_json::Value = self
            .http
            .get(&url)
            .header(header, value)
            .send()
            .await?
            .json()
            .await?;

        for key in ["err", "error"] {
            if let Some(message) = body.get(key).and_then(|v| v.as_str()) {
                if !message.is_empty() {
                    return Err(FigexError::Api(message.to_string()));
                }
            }
        }

        Ok(serde_json::from_value(body)?)
    }

    /// `GET /v1/files/{file_id}` - full document tree plus metadata
    pub async fn file(&self, file_id: &str, params: &FileParams) -> Result<FileResponse> {
        let query = [
            ("ids", QueryValue::List(params.ids.clone())),
            (
                "version",
                QueryValue::Str(params.version.clone().unwrap_or_default()),
            ),
        ];
        self.get(&format!("files/{file_id}"), &query).await
    }

    /// `GET /v1/images/{file_id}` - render the given nodes and return one
    /// URL per id. Ids the server could not render are absent or null.
    pub async fn file_images(
        &self,
        file_id: &str,
        params: &FileImagesParams,
    ) -> Result<FileImagesResponse> {
        let query = [
            ("ids", QueryValue::List(params.ids.clone())),
            ("format", QueryValue::Str(params.format.clone())),
            ("scale", QueryValue::Number(params.scale.unwrap_or(0.0))),
            ("svg_outline_text", QueryValue::Bool(params.svg_outline_text)),
            ("svg_include_id", QueryValue::Bool(params.svg_include_id)),
            (
                "svg_include_node_id",
                QueryValue::Bool(params.svg_include_node_id),
            ),
            (
                "svg_simplify_stroke",
                QueryValue::Bool(params.svg_simplify_stroke),
            ),
            ("contents_only", QueryValue::Bool(params.contents_only)),
            (
                "use_absolute_bounds",
                QueryValue::Bool(params.use_absolute_bounds),
            ),
            (
                "version",
                QueryValue::Str(params.version.clone().unwrap_or_default()),
            ),
        ];
        self.get(&format!("images/{file_id}"), &query).await
    }
}

//! Component discovery and batched render-URL fetching

use crate::client::{FigmaClient, FileImagesParams, FileParams};
use crate::error::Result;
use crate::filter::NodeFilter;
use crate::walker::collect_components;
use figex_types::{GetSvgsResult, SvgData};
use futures::future::try_join_all;
use tracing::debug;

/// Default number of component ids per render-URL request
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Configuration for [`get_svgs`]
#[derive(Debug, Default)]
pub struct GetSvgsConfig {
    /// Key of the Figma file to export from
    pub file_id: String,
    /// Canvas gate: pages failing this filter are skipped entirely
    pub canvas: Option<NodeFilter>,
    /// Component gate: tested on every visited node
    pub component: Option<NodeFilter>,
    /// Ids per render request, defaults to [`DEFAULT_BATCH_SIZE`]
    pub batch_size: Option<usize>,
}

impl GetSvgsConfig {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            ..Default::default()
        }
    }

    pub fn canvas(mut self, filter: impl Into<NodeFilter>) -> Self {
        self.canvas = Some(filter.into());
        self
    }

    pub fn component(mut self, filter: impl Into<NodeFilter>) -> Self {
        self.component = Some(filter.into());
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }
}

/// Fetch the document, collect exportable components and resolve their
/// rendered SVG URLs.
///
/// Render requests are issued one per batch window, all in parallel, and
/// awaited jointly; any failing window fails the whole call with no
/// partial result. Record order always equals traversal order, restored
/// by indexing into the original windows rather than by response arrival.
pub async fn get_svgs(client: &FigmaClient, config: &GetSvgsConfig) -> Result<GetSvgsResult> {
    let file = client.file(&config.file_id, &FileParams::default()).await?;

    let components = collect_components(
        &file.document,
        config.canvas.as_ref(),
        config.component.as_ref(),
    );
    debug!(
        file_id = %config.file_id,
        components = components.len(),
        "collected exportable components"
    );

    if components.is_empty() {
        return Ok(GetSvgsResult {
            svgs: Vec::new(),
            last_modified: file.last_modified,
        });
    }

    let batch_size = config.batch_size.unwrap_or(DEFAULT_BATCH_SIZE).max(1);
    let requests = components.chunks(batch_size).map(|window| {
        let params = FileImagesParams {
            ids: window.iter().map(|node| node.id.clone()).collect(),
            ..Default::default()
        };
        let file_id = &config.file_id;
        async move { client.file_images(file_id, &params).await }
    });
    let responses = try_join_all(requests).await?;

    let mut svgs = Vec::with_capacity(components.len());
    for (response, window) in responses.iter().zip(components.chunks(batch_size)) {
        for node in window {
            svgs.push(SvgData {
                id: node.id.clone(),
                url: response.images.get(&node.id).cloned().flatten(),
                name: node.name.clone(),
            });
        }
    }

    Ok(GetSvgsResult {
        svgs,
        last_modified: file.last_modified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Auth;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> FigmaClient {
        FigmaClient::new(Auth::PersonalAccessToken("tok".into()))
            .with_base_url(format!("{}/v1", server.uri()))
    }

    fn component(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({ "id": id, "name": name, "type": "COMPONENT" })
    }

    async fn mount_file(server: &MockServer, children: Vec<serde_json::Value>) {
        Mock::given(method("GET"))
            .and(path("/v1/files/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "document": {
                    "id": "0:0",
                    "name": "Document",
                    "type": "DOCUMENT",
                    "children": [{
                        "id": "0:1",
                        "name": "Icons",
                        "type": "CANVAS",
                        "children": children
                    }]
                },
                "lastModified": "T1",
                "name": "Icons"
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn batch_size_one_issues_one_render_call_per_component() {
        let server = MockServer::start().await;
        mount_file(
            &server,
            vec![
                component("1:1", "a"),
                component("1:2", "b"),
                component("1:3", "c"),
            ],
        )
        .await;
        for id in ["1:1", "1:2", "1:3"] {
            Mock::given(method("GET"))
                .and(path("/v1/images/abc"))
                .and(query_param("ids", id))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "images": { id: format!("https://cdn/{id}.svg") }
                })))
                .expect(1)
                .mount(&server)
                .await;
        }

        let config = GetSvgsConfig::new("abc").batch_size(1);
        let result = get_svgs(&client(&server), &config).await.unwrap();

        assert_eq!(result.last_modified, "T1");
        assert_eq!(
            result.svgs,
            vec![
                SvgData {
                    id: "1:1".into(),
                    url: Some("https://cdn/1:1.svg".into()),
                    name: "a".into()
                },
                SvgData {
                    id: "1:2".into(),
                    url: Some("https://cdn/1:2.svg".into()),
                    name: "b".into()
                },
                SvgData {
                    id: "1:3".into(),
                    url: Some("https://cdn/1:3.svg".into()),
                    name: "c".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn no_matching_components_short_circuits_without_render_calls() {
        let server = MockServer::start().await;
        mount_file(&server, Vec::new()).await;
        Mock::given(method("GET"))
            .and(path("/v1/images/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "images": {}
            })))
            .expect(0)
            .mount(&server)
            .await;

        let result = get_svgs(&client(&server), &GetSvgsConfig::new("abc"))
            .await
            .unwrap();
        assert!(result.svgs.is_empty());
        assert_eq!(result.last_modified, "T1");
    }

    #[tokio::test]
    async fn default_batching_sends_all_ids_in_one_window() {
        let server = MockServer::start().await;
        mount_file(&server, vec![component("1:1", "a"), component("1:2", "b")]).await;
        Mock::given(method("GET"))
            .and(path("/v1/images/abc"))
            .and(query_param("ids", "1:1,1:2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "images": { "1:1": "https://cdn/a.svg", "1:2": "https://cdn/b.svg" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = get_svgs(&client(&server), &GetSvgsConfig::new("abc"))
            .await
            .unwrap();
        assert_eq!(result.svgs.len(), 2);
    }

    #[tokio::test]
    async fn unrendered_ids_yield_records_without_urls() {
        let server = MockServer::start().await;
        mount_file(&server, vec![component("1:1", "a"), component("1:2", "b")]).await;
        Mock::given(method("GET"))
            .and(path("/v1/images/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "images": { "1:1": "https://cdn/a.svg" }
            })))
            .mount(&server)
            .await;

        let result = get_svgs(&client(&server), &GetSvgsConfig::new("abc"))
            .await
            .unwrap();
        assert_eq!(result.svgs[0].url.as_deref(), Some("https://cdn/a.svg"));
        assert!(result.svgs[1].url.is_none());
    }

    #[tokio::test]
    async fn filters_reach_the_traversal() {
        let server = MockServer::start().await;
        mount_file(&server, vec![component("1:1", "a"), component("1:2", "b")]).await;

        // canvas filter that rejects the only page: no components, no calls
        let config = GetSvgsConfig::new("abc").canvas("Other Page");
        let result = get_svgs(&client(&server), &config).await.unwrap();
        assert!(result.svgs.is_empty());
    }

    #[tokio::test]
    async fn failing_window_fails_the_whole_call() {
        let server = MockServer::start().await;
        mount_file(&server, vec![component("1:1", "a"), component("1:2", "b")]).await;
        Mock::given(method("GET"))
            .and(path("/v1/images/abc"))
            .and(query_param("ids", "1:1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "images": { "1:1": "https://cdn/a.svg" }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/images/abc"))
            .and(query_param("ids", "1:2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "err": "render failed" })),
            )
            .mount(&server)
            .await;

        let config = GetSvgsConfig::new("abc").batch_size(1);
        let error = get_svgs(&client(&server), &config).await.unwrap_err();
        assert!(matches!(error, crate::error::FigexError::Api(_)));
    }
}

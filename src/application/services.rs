use crate::application::builders::request_builder::RequestBuilder;
use crate::domain::entities::{Request, RequestParameters, Response};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

/// Trait for HTTP clients to enable mocking and dependency inversion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response>;
}

/// Application service that performs exactly one request per call
pub struct HttpRequestService {
    http_client: Box<dyn HttpClient>,
}

impl HttpRequestService {
    pub fn new(http_client: Box<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Builds the request from the collected parameters, sends it once and
    /// returns the response body.
    ///
    /// Any status code counts as success; only construction, header, transport
    /// and read failures are errors. Nothing is sent when building fails.
    pub async fn execute(&self, params: &RequestParameters) -> Result<String> {
        let request = Self::build_request(params)?;
        let response = self.send_request(request).await?;
        Ok(response.body)
    }

    /// Sends an already built request
    pub async fn send_request(&self, request: Request) -> Result<Response> {
        info!(method = %request.method, url = %request.url.as_str(), "sending request");
        let response = self.http_client.send(request).await?;
        debug!(status = %response.status, bytes = response.body.len(), "received response");
        Ok(response)
    }

    fn build_request(params: &RequestParameters) -> Result<Request> {
        debug!(
            has_auth = !params.auth.is_empty(),
            has_headers = !params.headers.is_empty(),
            has_body = !params.body.is_empty(),
            "building request"
        );
        RequestBuilder::new()
            .method(&params.method)?
            .url(&params.protocol, &params.url)?
            .auth(&params.auth)?
            .headers(&params.headers)?
            .body(&params.body)
            .build()
    }
}

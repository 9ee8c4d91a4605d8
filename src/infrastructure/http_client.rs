use crate::application::services::{HttpClient, HttpRequestService};
use crate::domain::entities::{Request, Response};
use crate::domain::errors::RequestError;
use crate::domain::value_objects::RawBody;

use anyhow::Result;
use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::Request as HyperRequest;
use hyper::header::HeaderMap;
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tokio_native_tls::{TlsConnector, native_tls};

type Connector = HttpsConnector<HttpConnector>;

/// Infrastructure implementation of HttpClient using Hyper
/// This is a low-level HTTP transport that the application service uses
pub struct HyperHttpClient {
    client: Client<Connector, Full<Bytes>>,
}

impl HyperHttpClient {
    /// Plain `http` and `https` targets, TLS with the platform defaults.
    pub fn new() -> Result<Self> {
        let mut http = HttpConnector::new();
        http.enforce_http(false);
        let tls = TlsConnector::from(native_tls::TlsConnector::new()?);
        let connector = HttpsConnector::from((http, tls));
        let client = Client::builder(TokioExecutor::new()).build::<Connector, Full<Bytes>>(connector);
        Ok(Self { client })
    }

    /// Creates a configured HTTP request service using this client
    pub fn create_request_service(self) -> HttpRequestService {
        HttpRequestService::new(Box::new(self))
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn send(&self, request: Request) -> Result<Response> {
        let hyper_request = RequestAdapter::to_hyper_request(request)?;
        let hyper_response = self.execute_http_request(hyper_request).await?;
        Ok(ResponseAdapter::to_domain_response(hyper_response).await?)
    }
}

impl HyperHttpClient {
    async fn execute_http_request(
        &self,
        request: HyperRequest<Full<Bytes>>,
    ) -> Result<hyper::Response<hyper::body::Incoming>, RequestError> {
        self.client
            .request(request)
            .await
            .map_err(|e| RequestError::Transport(transport_message(&e)))
    }
}

/// Flattens the error chain, the outer legacy-client error alone rarely says
/// what went wrong.
fn transport_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Adapter for converting domain requests to Hyper requests
struct RequestAdapter;

impl RequestAdapter {
    fn to_hyper_request(domain_request: Request) -> Result<HyperRequest<Full<Bytes>>, RequestError> {
        let body = BodyAdapter::to_hyper_body(&domain_request.body);

        let mut hyper_request = HyperRequest::builder()
            .method(domain_request.method)
            .uri(domain_request.url.0)
            .body(body)
            .map_err(|e| RequestError::Construction(e.to_string()))?;

        HeaderAdapter::apply(hyper_request.headers_mut(), &domain_request.headers);
        Ok(hyper_request)
    }
}

/// Adapter for converting domain responses from Hyper responses
struct ResponseAdapter;

impl ResponseAdapter {
    async fn to_domain_response(
        hyper_response: hyper::Response<hyper::body::Incoming>,
    ) -> Result<Response, RequestError> {
        let status = hyper_response.status();
        let body = Self::extract_response_body(hyper_response).await?;

        Ok(Response { status, body })
    }

    async fn extract_response_body(
        response: hyper::Response<hyper::body::Incoming>,
    ) -> Result<String, RequestError> {
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| RequestError::Read(e.to_string()))?
            .to_bytes();

        // Bytes that are not UTF-8 are printed as replacement characters.
        Ok(String::from_utf8_lossy(&body_bytes).into_owned())
    }
}

/// Adapter for converting domain request bodies to Hyper bodies
struct BodyAdapter;

impl BodyAdapter {
    fn to_hyper_body(domain_body: &Option<RawBody>) -> Full<Bytes> {
        match domain_body {
            Some(raw) => Full::new(Bytes::from(raw.0.clone())),
            None => Full::new(Bytes::new()),
        }
    }
}

/// Adapter for handling HTTP headers
struct HeaderAdapter;

impl HeaderAdapter {
    fn apply(target: &mut HeaderMap, headers: &HeaderMap) {
        for (name, value) in headers.iter() {
            target.insert(name.clone(), value.clone());
        }
    }
}

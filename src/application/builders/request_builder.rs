use crate::domain::entities::Request;
use crate::domain::errors::RequestError;
use crate::domain::value_objects::{BasicAuth, HeaderList, RawBody, Url};
use anyhow::Result;
use hyper::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

/// Turns the raw parameter strings into a [`Request`].
///
/// Steps run in the order the executor applies them: method, target,
/// `Authorization`, explicit headers, body. Explicit headers are inserted
/// after the auth header, so a `Authorization:...` pair replaces it.
pub struct RequestBuilder {
    method: Option<hyper::Method>,
    url: Option<Url>,
    headers: HeaderMap,
    body: Option<RawBody>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            url: None,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Accepts any valid method token, not only the menu verbs.
    pub fn method(mut self, method: &str) -> Result<Self> {
        let parsed = hyper::Method::from_bytes(method.as_bytes()).map_err(|e| {
            RequestError::Construction(format!("invalid method '{}': {}", method, e))
        })?;
        self.method = Some(parsed);
        Ok(self)
    }

    pub fn url(mut self, protocol: &str, address: &str) -> Result<Self> {
        self.url = Some(Url::from_parts(protocol, address)?);
        Ok(self)
    }

    pub fn auth(mut self, raw_auth: &str) -> Result<Self> {
        if let Some(auth) = BasicAuth::new(raw_auth) {
            let value = HeaderValue::from_str(&auth.header_value()).map_err(|e| {
                RequestError::Construction(format!("invalid Authorization header: {}", e))
            })?;
            self.headers.insert(AUTHORIZATION, value);
        }
        Ok(self)
    }

    pub fn headers(mut self, raw_headers: &str) -> Result<Self> {
        let list = HeaderList::parse(raw_headers)?;
        for (key, value) in list.0 {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                RequestError::Construction(format!("invalid header name '{}': {}", key, e))
            })?;
            let value = HeaderValue::from_str(&value).map_err(|e| {
                RequestError::Construction(format!("invalid value for header '{}': {}", key, e))
            })?;
            debug!(header = %name, "setting request header");
            self.headers.insert(name, value);
        }
        Ok(self)
    }

    pub fn body(mut self, raw_body: &str) -> Self {
        self.body = RawBody::new(raw_body);
        self
    }

    pub fn build(self) -> Result<Request> {
        let method = self
            .method
            .ok_or_else(|| RequestError::Construction("method is required".to_string()))?;
        let url = self
            .url
            .ok_or_else(|| RequestError::Construction("URL is required".to_string()))?;

        Ok(Request {
            method,
            url,
            headers: self.headers,
            body: self.body,
        })
    }
}

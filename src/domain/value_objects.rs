use crate::domain::errors::RequestError;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use hyper::http::Uri;

/// Target address built from a protocol and a scheme-less URL
#[derive(Debug, Clone)]
pub struct Url(pub Uri);

impl Url {
    /// Joins `protocol` and `address` with `://` and parses the result.
    ///
    /// Neither part is re-encoded or checked on its own, so an address that
    /// already carries a scheme or contains illegal characters fails here as
    /// a construction error.
    pub fn from_parts(protocol: &str, address: &str) -> Result<Self, RequestError> {
        let raw = format!("{}://{}", protocol, address);
        if address.contains("://") {
            return Err(RequestError::Construction(format!(
                "invalid URL '{}': address already has a scheme",
                raw
            )));
        }
        let uri = raw
            .parse::<Uri>()
            .map_err(|e| RequestError::Construction(format!("invalid URL '{}': {}", raw, e)))?;
        match uri.authority() {
            None => {
                return Err(RequestError::Construction(format!(
                    "invalid URL '{}': missing host",
                    raw
                )));
            }
            Some(authority) if authority.as_str().ends_with(':') => {
                return Err(RequestError::Construction(format!(
                    "invalid URL '{}': empty port",
                    raw
                )));
            }
            Some(_) => {}
        }
        Ok(Url(uri))
    }

    /// Returns the URL as a string
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

/// Request payload sent verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBody(pub String);

impl RawBody {
    /// An empty payload means "no body".
    pub fn new(body: &str) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(RawBody(body.to_string()))
        }
    }
}

/// Ordered header pairs parsed from the `Key:Value;Key:Value` form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList(pub Vec<(String, String)>);

impl HeaderList {
    /// Parses the `;`-joined header string.
    ///
    /// Blank segments (such as the one after a trailing `;`) are skipped.
    /// Every other segment must contain exactly one `:`; keys and values are
    /// trimmed. Duplicate keys are kept in order, the transport applies them
    /// with last-write-wins.
    pub fn parse(raw: &str) -> Result<Self, RequestError> {
        let mut pairs = Vec::new();
        for pair in raw.split(';') {
            if pair.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = pair.split(':').collect();
            if parts.len() != 2 {
                return Err(RequestError::HeaderFormat {
                    pair: pair.to_string(),
                });
            }
            pairs.push((parts[0].trim().to_string(), parts[1].trim().to_string()));
        }
        Ok(HeaderList(pairs))
    }
}

/// Basic auth credentials in raw `username:password` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth(String);

impl BasicAuth {
    /// An empty string means "no auth". The separator is not checked.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(BasicAuth(raw.to_string()))
        }
    }

    /// `Authorization` header value
    pub fn header_value(&self) -> String {
        format!("Basic {}", BASE64_STANDARD.encode(self.0.as_bytes()))
    }
}

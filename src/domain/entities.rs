use crate::domain::value_objects::{RawBody, Url};
use anyhow::{Result, anyhow};
use hyper::header::HeaderMap;
use hyper::StatusCode;
use std::fmt;
use std::str::FromStr;

/// Transport scheme offered by the protocol menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// Menu order
    pub const ALL: [Protocol; 2] = [Protocol::Http, Protocol::Https];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(anyhow!("Unsupported protocol: '{}'", other)),
        }
    }
}

/// HTTP method enum for the request type menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Connect,
}

impl Method {
    /// Menu order
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Head,
        Method::Options,
        Method::Connect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow!("Unsupported HTTP method: '{}'", s))
    }
}

/// The six raw fields that describe one outbound request.
///
/// Values are kept as entered; nothing here is validated until the
/// request builder turns them into a [`Request`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    pub protocol: String,
    pub url: String,
    pub method: String,
    pub auth: String,
    pub headers: String,
    pub body: String,
}

/// Represents an HTTP request ready for the transport
#[derive(Debug, Clone)]
pub struct Request {
    pub method: hyper::Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<RawBody>,
}

/// Represents an HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

//! Plain-data request and response records.
//!
//! # Design
//! `Request` is what a caller describes; `Response` is what a call hands back.
//! Neither carries any connection or stream state, so both can be cloned,
//! compared and serialized freely. The transport-level types these are turned
//! into live in `request` and `transport`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP verbs a `Request` may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for ::http::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => ::http::Method::GET,
            Method::Post => ::http::Method::POST,
            Method::Put => ::http::Method::PUT,
            Method::Patch => ::http::Method::PATCH,
            Method::Delete => ::http::Method::DELETE,
        }
    }
}

/// A REST call described as plain data.
///
/// `base_url` is absolute and carries no query of its own in the common case;
/// query parameters go in `query_params`. Both maps are unordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub method: Method,
    pub base_url: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub query_params: HashMap<String, String>,
    #[serde(default)]
    pub body: Vec<u8>,
}

impl Request {
    pub fn new(method: Method, base_url: impl Into<String>) -> Self {
        Self {
            method,
            base_url: base_url.into(),
            headers: HashMap::new(),
            query_params: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Set a request header, replacing any earlier value for `name`.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }
}

/// The outcome of one successful round trip.
///
/// `headers` maps each lower-case header name to its values in the order the
/// server sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    pub body: String,
    pub headers: HashMap<String, Vec<String>>,
}

impl Response {
    /// First value of header `name`, if present. `name` is matched
    /// case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

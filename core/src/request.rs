//! Request Builder: turns a `Request` into a transport-ready `http::Request`.

use http::header::{HeaderName, HeaderValue};
use url::Url;

use crate::error::RestError;
use crate::types::Request;

/// The request type every `Transport` accepts.
pub type TransportRequest = http::Request<Vec<u8>>;

/// Build the transport request for `request`.
///
/// Query parameters are appended to whatever query `base_url` already has,
/// form-encoded, in map iteration order. Headers are inserted, replacing any
/// earlier value under the same name. The only failures are a `base_url` that
/// does not parse as an absolute URL and header names or values the HTTP stack
/// cannot carry.
pub fn build_request_object(request: &Request) -> Result<TransportRequest, RestError> {
    let mut url = Url::parse(&request.base_url).map_err(RestError::construction)?;

    if !request.query_params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &request.query_params {
            pairs.append_pair(key, value);
        }
    }

    let mut req = http::Request::builder()
        .method(http::Method::from(request.method))
        .uri(url.as_str())
        .body(request.body.clone())
        .map_err(RestError::construction)?;

    let headers = req.headers_mut();
    for (name, value) in &request.headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(RestError::construction)?;
        let value = HeaderValue::from_str(value).map_err(RestError::construction)?;
        headers.insert(name, value);
    }

    Ok(req)
}

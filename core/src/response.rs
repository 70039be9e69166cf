//! Response Builder: drains a transport response into a `Response`.

use std::collections::HashMap;
use std::io::Read;

use crate::error::RestError;
use crate::types::Response;

/// Read the whole body of `response` and assemble a `Response`.
///
/// The body is read into memory without a size cap and decoded with a lossy
/// UTF-8 conversion; no charset is inferred from the headers. The body reader
/// is dropped before this returns, whether or not the read succeeded. On a
/// read failure the status and headers are discarded.
pub fn build_response<B: Read>(response: http::Response<B>) -> Result<Response, RestError> {
    let (parts, body) = response.into_parts();
    let bytes = drain(body)?;

    let mut headers: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in &parts.headers {
        headers
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }

    Ok(Response {
        status: parts.status.as_u16(),
        body: String::from_utf8_lossy(&bytes).into_owned(),
        headers,
    })
}

// Takes the reader by value so it is released on every return path.
fn drain<B: Read>(mut body: B) -> Result<Vec<u8>, RestError> {
    let mut bytes = Vec::new();
    body.read_to_end(&mut bytes).map_err(RestError::Read)?;
    Ok(bytes)
}

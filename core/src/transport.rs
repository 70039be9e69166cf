//! Transport Invoker: one round trip, no retries.
//!
//! # Design
//! `Transport` is the seam between building a request and reading its
//! response. `UreqTransport` is the default; anything else that can turn a
//! `TransportRequest` into an `http::Response` with a readable body can be
//! slotted into `RestClient` instead.
//!
//! No timeout is set here. Callers who need one build their own
//! `ureq::Agent` and pass it to `UreqTransport::with_agent`.

use std::io::Read;

use ureq::Agent;

use crate::error::RestError;
use crate::request::TransportRequest;

/// Sends a transport request and returns the raw response.
pub trait Transport {
    type Body: Read;

    /// Perform exactly one round trip. Failures before a status line arrives
    /// are reported as `RestError::Transport`.
    fn send(&self, request: TransportRequest) -> Result<http::Response<Self::Body>, RestError>;
}

/// `Transport` backed by a `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Default agent settings, except that 4xx/5xx statuses come back as
    /// responses rather than errors.
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a caller-configured agent as is.
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    type Body = ureq::BodyReader<'static>;

    fn send(&self, request: TransportRequest) -> Result<http::Response<Self::Body>, RestError> {
        // The body always goes out with a known length, `Content-Length: 0`
        // when empty, never chunked.
        let response = self.agent.run(request).map_err(RestError::transport)?;
        Ok(response.map(ureq::Body::into_reader))
    }
}

/// Send `request` on a default `UreqTransport`.
pub fn make_request(
    request: TransportRequest,
) -> Result<http::Response<ureq::BodyReader<'static>>, RestError> {
    UreqTransport::new().send(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refused_url() -> String {
        // Bind then drop so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/echo")
    }

    #[test]
    fn connection_refused_is_a_transport_error() {
        let request = http::Request::builder()
            .uri(refused_url())
            .body(Vec::new())
            .unwrap();
        let err = make_request(request).err().unwrap();
        assert!(matches!(err, RestError::Transport(_)));
    }

    #[test]
    fn transport_error_keeps_ureq_cause() {
        use std::error::Error as _;

        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri(refused_url())
            .body(b"payload".to_vec())
            .unwrap();
        let err = UreqTransport::default().send(request).err().unwrap();
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<ureq::Error>().is_some());
    }
}

//! Façade chaining the three stages of a REST call.
//!
//! # Design
//! `RestClient` holds only its transport and carries no mutable state between
//! calls. `call` runs Request Builder, Transport Invoker and Response Builder
//! in that order and returns the first error untouched. The stages are public
//! on their own so a caller can replace one of them and reuse the rest.

use tracing::debug;

use crate::error::RestError;
use crate::request::build_request_object;
use crate::response::build_response;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Request, Response};

/// Stateless client for arbitrary REST endpoints.
#[derive(Clone, Default)]
pub struct RestClient<T = UreqTransport> {
    transport: T,
}

impl RestClient {
    pub fn new() -> Self {
        Self {
            transport: UreqTransport::new(),
        }
    }
}

impl<T: Transport> RestClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Perform one round trip for `request`.
    pub fn call(&self, request: &Request) -> Result<Response, RestError> {
        let req = build_request_object(request)?;
        debug!(method = %request.method, uri = %req.uri(), "sending request");

        let res = self.transport.send(req)?;
        debug!(status = res.status().as_u16(), "received response");

        build_response(res)
    }
}

/// Perform one round trip for `request` on a fresh default client.
pub fn api(request: &Request) -> Result<Response, RestError> {
    RestClient::new().call(request)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;

    use super::*;
    use crate::request::TransportRequest;
    use crate::types::Method;

    /// Transport double that records calls and answers with a canned result.
    struct FakeTransport {
        calls: Rc<Cell<usize>>,
        outcome: fn() -> Result<http::Response<Box<dyn io::Read>>, RestError>,
    }

    impl FakeTransport {
        /// Returns the transport and a handle on its call counter.
        fn new(
            outcome: fn() -> Result<http::Response<Box<dyn io::Read>>, RestError>,
        ) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            let transport = Self {
                calls: Rc::clone(&calls),
                outcome,
            };
            (transport, calls)
        }
    }

    impl Transport for FakeTransport {
        type Body = Box<dyn io::Read>;

        fn send(&self, _request: TransportRequest) -> Result<http::Response<Self::Body>, RestError> {
            self.calls.set(self.calls.get() + 1);
            (self.outcome)()
        }
    }

    struct Broken;

    impl io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "body cut short"))
        }
    }

    fn ok_response() -> Result<http::Response<Box<dyn io::Read>>, RestError> {
        let body: Box<dyn io::Read> = Box::new(io::Cursor::new(b"done".to_vec()));
        Ok(http::Response::builder().status(200).body(body).unwrap())
    }

    fn refused() -> Result<http::Response<Box<dyn io::Read>>, RestError> {
        Err(RestError::transport("connection refused"))
    }

    fn broken_body() -> Result<http::Response<Box<dyn io::Read>>, RestError> {
        let body: Box<dyn io::Read> = Box::new(Broken);
        Ok(http::Response::builder().status(200).body(body).unwrap())
    }

    fn request() -> Request {
        Request::new(Method::Get, "http://localhost:3000/echo")
    }

    #[test]
    fn call_runs_all_stages() {
        let (transport, calls) = FakeTransport::new(ok_response);
        let client = RestClient::with_transport(transport);
        let response = client.call(&request()).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "done");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn construction_error_skips_transport() {
        let (transport, calls) = FakeTransport::new(ok_response);
        let client = RestClient::with_transport(transport);
        let err = client
            .call(&Request::new(Method::Get, "not a url"))
            .unwrap_err();
        assert!(matches!(err, RestError::Construction(_)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn transport_error_is_returned_unchanged() {
        let (transport, calls) = FakeTransport::new(refused);
        let client = RestClient::with_transport(transport);
        let err = client.call(&request()).unwrap_err();
        assert!(matches!(err, RestError::Transport(_)));
        assert_eq!(err.to_string(), "request failed: connection refused");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn read_error_surfaces_after_transport() {
        let (transport, calls) = FakeTransport::new(broken_body);
        let client = RestClient::with_transport(transport);
        let err = client.call(&request()).unwrap_err();
        assert!(matches!(err, RestError::Read(_)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn default_client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}

//! Minimal helper for calling REST endpoints.
//!
//! # Overview
//! A `Request` (method, base URL, headers, query parameters, body) goes in; a
//! `Response` (status, body text, headers) comes out. Each call is one blocking
//! round trip with no retries, caching or timeouts of its own.
//!
//! # Design
//! - The call is split into three stages, each a public function:
//!   `build_request_object` (Request Builder), `Transport::send` /
//!   `make_request` (Transport Invoker) and `build_response` (Response Builder).
//! - `RestClient::call` and `api` chain them and stop at the first error.
//! - `RestClient` is stateless apart from its transport; connection reuse is
//!   left entirely to the ureq agent.
//! - Errors name the stage that failed: see `RestError`.
//!
//! ```no_run
//! use rest_core::{api, Method, Request};
//!
//! let request = Request::new(Method::Get, "http://localhost:3000/echo")
//!     .with_query_param("q", "1")
//!     .with_header("X-Test", "abc");
//! let response = api(&request)?;
//! println!("{} {}", response.status, response.body);
//! # Ok::<(), rest_core::RestError>(())
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

pub use client::{api, RestClient};
pub use error::{BoxError, RestError};
pub use request::{build_request_object, TransportRequest};
pub use response::build_response;
pub use transport::{make_request, Transport, UreqTransport};
pub use types::{Method, Request, Response};

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// What the server saw of an incoming request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub query: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route(
            "/echo",
            get(echo_request)
                .post(echo_body)
                .put(echo_body)
                .patch(echo_body)
                .delete(echo_body),
        )
        .route("/inspect", any(inspect))
        .route("/status/{code}", get(status))
        .route("/multi-header", get(multi_header))
        .route("/redirect", get(redirect))
        .route("/bytes", get(invalid_utf8))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo_request(
    method: Method,
    Query(query): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
) -> Json<Echo> {
    Json(Echo {
        method: method.to_string(),
        query,
        headers: header_map(&headers),
        body: None,
    })
}

async fn echo_body(headers: HeaderMap, body: Bytes) -> Response {
    let mut response = body.into_response();
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type.clone());
    }
    response
}

async fn inspect(
    method: Method,
    Query(query): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Echo> {
    Json(Echo {
        method: method.to_string(),
        query,
        headers: header_map(&headers),
        body: Some(String::from_utf8_lossy(&body).into_owned()),
    })
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, String), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, format!("status {code}")))
}

async fn multi_header() -> (HeaderMap, &'static str) {
    let mut headers = HeaderMap::new();
    for value in ["one", "two", "three"] {
        headers.append("x-multi", HeaderValue::from_static(value));
    }
    (headers, "multi")
}

async fn redirect() -> Redirect {
    Redirect::to("/echo?redirected=true")
}

async fn invalid_utf8() -> Vec<u8> {
    vec![b'f', 0xff, b'o']
}

/// Collect request headers under their canonical names (`x-test` becomes
/// `X-Test`), joining repeated values with `", "`.
fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        map.entry(canonical_header_key(name.as_str()))
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    map
}

fn canonical_header_key(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

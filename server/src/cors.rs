//! Permissive CORS for every response, plus the OPTIONS short-circuit.
//!
//! The contract is broader than preflight handling: any `OPTIONS` request
//! to any path gets a bare 200 before routing, and the three fixed headers
//! are stamped on every other response. A preflight-only CORS layer would
//! not satisfy either half, hence the hand-rolled middleware.

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

fn apply(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("PUT, GET, POST, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(
            "accept, content-type, x-parse-application-id, x-parse-rest-api-key, x-parse-session-token",
        ),
    );
}

pub async fn permissive_cors(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply(response.headers_mut());
        return response;
    }

    let mut response = next.run(req).await;
    apply(response.headers_mut());
    response
}

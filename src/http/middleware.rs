//! Keep-alive auto-close middleware.
//!
//! Runs once per request in the access phase, after scope lookup and before
//! the handler. It never rejects or terminates a request; its only effect is
//! forcing `Connection: close` onto the response when the policy fires. The
//! connection itself is owned by the host server, which honors that header
//! by closing after the response is written.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::policy::should_close;
use crate::routing::ScopeRouter;

/// State required by the auto-close middleware.
#[derive(Clone)]
pub struct AutoCloseState {
    pub scopes: Arc<ScopeRouter>,
}

pub async fn autoclose_middleware(
    State(state): State<AutoCloseState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let scope = state.scopes.match_request(&req);
    let has_referrer = req.headers().contains_key(header::REFERER);
    let close = should_close(scope.autoclose, has_referrer, req.uri().path());

    if close {
        tracing::trace!(
            path = %req.uri().path(),
            "keepalive_autoclose triggered, connection will close after response"
        );
    }

    let mut response = next.run(req).await;
    if close {
        response
            .headers_mut()
            .insert(header::CONNECTION, HeaderValue::from_static("close"));
    }
    response
}

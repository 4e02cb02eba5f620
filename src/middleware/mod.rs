pub mod request_id;

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};

/// Wraps a router with request ids and a request-scoped tracing span
pub fn with_request_tracing(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http().make_span_with(request_id::make_span_with_request_id)),
    )
}

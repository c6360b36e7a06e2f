use axum::http::{Extensions, HeaderName};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

pub const HEADER_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Assigns a UUID to requests that arrive without an `x-request-id`.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HEADER_REQUEST_ID, MakeRequestUuid::default())
}

/// Copies the request id onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HEADER_REQUEST_ID)
}

/// The id stored by [`set_layer`], or `""` when the layer is absent.
pub fn current(extensions: &Extensions) -> &str {
    extensions
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or_default()
}

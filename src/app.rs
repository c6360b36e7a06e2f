use std::{iter::once, time::Duration};

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{
        Response,
        header::{AUTHORIZATION, COOKIE},
    },
    routing::{get, post},
};
use tower_http::{sensitive_headers::SetSensitiveRequestHeadersLayer, trace::TraceLayer};
use tracing::{Span, info};

use crate::{
    config::ServerConfig,
    handlers::{health_handler, save_profile_handler},
    layers::{cors::cors_layer, profile_sink::ProfileSinkLayer},
    request_id::{self, HEADER_REQUEST_ID},
};

pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    /// Bare routes. The profile sink must be layered on by the caller.
    pub fn router(self) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/api/profile", post(save_profile_handler))
    }

    /// Routes with the sink, CORS, request ids and request tracing applied.
    pub fn service(self, config: &ServerConfig) -> anyhow::Result<Router> {
        let app = self
            .router()
            .layer(ProfileSinkLayer::from_kind(config.app.sink))
            .layer(cors_layer(&config.app.cors_allowed_origins)?)
            .layer(request_id::propagate_layer())
            .layer(
                TraceLayer::new_for_http()
                    .on_request(|req: &Request<Body>, _span: &Span| {
                        let headers = req
                            .headers()
                            .iter()
                            .filter(|(k, _)| **k != HEADER_REQUEST_ID)
                            .map(|(k, v)| {
                                let val = if v.is_sensitive() {
                                    "******"
                                } else {
                                    v.to_str().unwrap_or("<non-utf8>")
                                };
                                format!("{}: {}", k.as_str(), val)
                            })
                            .collect::<Vec<_>>()
                            .join("; ");

                        info!(
                            msg = "Request initiated",
                            req_id = %request_id::current(req.extensions()),
                            method = %req.method(),
                            uri = %req.uri(),
                            headers = %headers
                        )
                    })
                    .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                        info!(
                            msg = "Request processed",
                            req_id = %request_id::current(res.extensions()),
                            status = %res.status().as_u16(),
                            latency = ?latency
                        )
                    }),
            )
            .layer(request_id::set_layer())
            .layer(SetSensitiveRequestHeadersLayer::new(
                once(AUTHORIZATION).chain(once(COOKIE)),
            ));

        Ok(app)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

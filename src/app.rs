use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{Response, header::AUTHORIZATION},
    routing::get,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
    trace::TraceLayer,
};
use tracing::{Span, info};

use crate::{
    handlers::{health_handler, log_activity_handler},
    headers::{HEADER_APIKEY, HEADER_REQUEST_ID},
    layers::activity_log::ActivityLogRepoLayer,
    utils::{format_headers, get_header, get_request_id},
};

pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(log_activity_handler))
            .route("/health", get(health_handler))
    }

    /// Router wrapped with the repository, request ids, request tracing and
    /// sensitive-header masking.
    pub fn with_layers(self, activity_log_repo: ActivityLogRepoLayer) -> Router {
        self.router()
            .layer(activity_log_repo)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .on_request(|req: &Request<Body>, _span: &Span| {
                        info!(
                            msg = "Request initiated",
                            req_id = %get_request_id(req.extensions()),
                            method = %req.method(),
                            uri = %req.uri(),
                            headers = %format_headers(req.headers())
                        )
                    })
                    .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                        info!(
                            msg = "Request processed",
                            req_id = %get_header(res.headers(), &HEADER_REQUEST_ID),
                            status = %res.status().as_u16(),
                            latency = ?latency
                        )
                    }),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid::default()))
            .layer(SetSensitiveRequestHeadersLayer::new([
                AUTHORIZATION,
                HEADER_APIKEY,
            ]))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

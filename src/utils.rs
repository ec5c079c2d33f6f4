use axum::http::{Extensions, HeaderMap, HeaderName};
use tower_http::request_id::RequestId;

use crate::headers::HEADER_REQUEST_ID;

pub fn get_request_id(req: &Extensions) -> String {
    req.get::<RequestId>()
        .map(request_id_to_string)
        .unwrap_or_default()
}

pub fn request_id_to_string(req_id: &RequestId) -> String {
    req_id
        .header_value()
        .to_str()
        .ok()
        .unwrap_or_default()
        .to_string()
}

pub fn get_header(headers: &HeaderMap, name: &HeaderName) -> String {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Renders request headers for logging, masking sensitive values and
/// leaving out the request id (logged separately).
pub fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .filter(|(k, _)| *k != HEADER_REQUEST_ID)
        .map(|(k, v)| {
            let val = if v.is_sensitive() {
                "******"
            } else {
                v.to_str().unwrap_or("<non-utf8>")
            };
            format!("{}: {}", k.as_str(), val)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

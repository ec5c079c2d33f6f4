use axum::http::HeaderName;

pub const HEADER_APIKEY: HeaderName = HeaderName::from_static("apikey");
pub const HEADER_PREFER: HeaderName = HeaderName::from_static("prefer");
pub const HEADER_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

// PostgREST: don't echo the inserted row back
pub const PREFER_RETURN_MINIMAL: &str = "return=minimal";

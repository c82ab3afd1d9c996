use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use axum::{
    Json,
    http::{HeaderMap, Method, Uri, Version, header, uri::Scheme},
};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEcho {
    pub hello: Vec<&'static str>,
    pub timestamp: i64,
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub protocol: String,
    pub is_fresh: bool,
    pub is_stale: bool,
    pub is_secure: bool,
}

/// Echoes request metadata back to the caller.
pub async fn handle(
    method: Method,
    version: Version,
    uri: Uri,
    headers: HeaderMap,
) -> Json<RequestEcho> {
    let fresh = is_fresh(&method, &headers);
    Json(RequestEcho {
        hello: vec!["world"],
        timestamp: Utc::now().timestamp_millis(),
        method: method.to_string(),
        headers: flatten_headers(&headers),
        protocol: format!("{version:?}"),
        is_fresh: fresh,
        is_stale: !fresh,
        is_secure: uri.scheme() == Some(&Scheme::HTTPS),
    })
}

/// Repeated header names are joined with `, `; non UTF-8 values are replaced lossily.
fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        match flat.entry(name.as_str().to_string()) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.push_str(", ");
                existing.push_str(&value);
            }
            Entry::Vacant(entry) => {
                entry.insert(value.into_owned());
            }
        }
    }
    flat
}

/// Conditional GET freshness against a response that carries no validators.
///
/// Without an ETag or Last-Modified only `If-None-Match: *` can be satisfied,
/// and `If-Modified-Since` can never be.
fn is_fresh(method: &Method, headers: &HeaderMap) -> bool {
    if method != Method::GET && method != Method::HEAD {
        return false;
    }
    let none_match = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .map(str::trim);
    let modified_since = headers.get(header::IF_MODIFIED_SINCE);
    if none_match.is_none() && modified_since.is_none() {
        return false;
    }
    let no_cache = headers
        .get_all(header::CACHE_CONTROL)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.split(',').any(|d| d.trim().eq_ignore_ascii_case("no-cache")));
    if no_cache {
        return false;
    }
    if none_match.is_some_and(|v| v != "*") {
        return false;
    }
    modified_since.is_none()
}

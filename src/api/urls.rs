//! URL building utilities for API endpoints

use crate::constants::community::API_PREFIX;
use crate::error::AppError;

const NO_ENDPOINT: &str = "No API endpoint was specified.";

/// Route prefix on the Diveharder API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiveharderRoute {
    /// Game server documents passed through untouched (`/raw/...`).
    Raw,
    /// Documents curated by Diveharder (`/v1/...`).
    V1,
}

impl DiveharderRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiveharderRoute::Raw => "raw",
            DiveharderRoute::V1 => "v1",
        }
    }
}

/// Joins URL parts with a single `/`, stripping leading and trailing slashes
/// from each part. Parts that are empty after stripping are skipped.
///
/// # Example
/// ```
/// use diveharder::api::url_join;
///
/// let url = url_join(&["https://api.diveharder.com/", "/raw", "status/"]);
/// assert_eq!(url, "https://api.diveharder.com/raw/status");
/// ```
pub fn url_join<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| part.as_ref().trim_matches('/'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds a community API URL (`{base}/api/v1/{segments...}`).
///
/// # Example
/// ```
/// use diveharder::api::build_community_url;
///
/// let url = build_community_url("https://api.helldivers2.dev", &["dispatches", "42"]).unwrap();
/// assert_eq!(url, "https://api.helldivers2.dev/api/v1/dispatches/42");
/// ```
pub fn build_community_url(base: &str, segments: &[&str]) -> Result<String, AppError> {
    if segments.iter().all(|s| s.trim_matches('/').is_empty()) {
        return Err(AppError::bad_request(NO_ENDPOINT));
    }

    let mut parts = vec![base];
    parts.extend(API_PREFIX);
    parts.extend(segments);
    Ok(url_join(&parts))
}

/// Builds a Diveharder API URL (`{base}/raw/{endpoint}` or `{base}/v1/{endpoint}`).
///
/// # Example
/// ```
/// use diveharder::api::{build_diveharder_url, DiveharderRoute};
///
/// let url = build_diveharder_url("https://api.diveharder.com", DiveharderRoute::Raw, "war_info").unwrap();
/// assert_eq!(url, "https://api.diveharder.com/raw/war_info");
/// ```
pub fn build_diveharder_url(
    base: &str,
    route: DiveharderRoute,
    endpoint: &str,
) -> Result<String, AppError> {
    if endpoint.trim_matches('/').is_empty() {
        return Err(AppError::bad_request(NO_ENDPOINT));
    }
    Ok(url_join(&[base, route.as_str(), endpoint]))
}

//! HTTP client creation and configuration utilities

use super::client::ClientSettings;
use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, headers};
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use std::time::Duration;

/// Creates the pooled HTTP client shared by every resource API.
///
/// Every request carries:
/// * `Accept: application/json`
/// * `User-Agent` and `X-Super-Client` set to the configured client identity
/// * `X-Super-Contact` when a contact is configured
///
/// Header values that are not valid HTTP header text are rejected as configuration errors.
pub fn create_http_client(settings: &ClientSettings) -> Result<Client, AppError> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    default_headers.insert(USER_AGENT, header_value("User-Agent", &settings.user_agent)?);
    default_headers.insert(
        HeaderName::from_static("x-super-client"),
        header_value(headers::SUPER_CLIENT, &settings.user_agent)?,
    );
    if let Some(contact) = &settings.user_contact {
        default_headers.insert(
            HeaderName::from_static("x-super-contact"),
            header_value(headers::SUPER_CONTACT, contact)?,
        );
    }

    let client = Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(settings.http_timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()?;

    Ok(client)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::config_error(format!("Invalid value for {name} header: {e}")))
}

//! Generic HTTP fetching with status-code aware error handling

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Sends a single GET request and parses the JSON body into `T`.
///
/// Failures are mapped by HTTP status:
/// * 400/422 → [`AppError::ApiRejected`] carrying the body's `errors` field
/// * 404 → [`AppError::ApiNotFound`]
/// * 429 → [`AppError::ApiRateLimit`]
/// * other 4xx → [`AppError::ApiClientError`]
/// * 502/503 → [`AppError::ApiServiceUnavailable`]
/// * other 5xx → [`AppError::ApiServerError`]
///
/// A successful response that does not parse is reported as empty, malformed or
/// unexpectedly shaped. Nothing is retried and nothing is cached.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");
    debug!("Response headers: {:?}", response.headers());

    if !status.is_success() {
        return Err(status_error(response, url).await);
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    parse_body(&response_text, url)
}

async fn status_error(response: Response, url: &str) -> AppError {
    let status_code = response.status().as_u16();
    let reason = response
        .status()
        .canonical_reason()
        .unwrap_or("Unknown error");

    error!("HTTP {} - {} (URL: {})", status_code, reason, url);

    match status_code {
        400 | 422 => {
            let body = response.text().await.unwrap_or_default();
            AppError::api_rejected(status_code, extract_errors(&body, reason), url)
        }
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Pulls the `errors` field out of a rejection body, falling back to the raw
/// body and then to the status reason.
fn extract_errors(body: &str, reason: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(errors) = value.get("errors")
    {
        return match errors {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        reason.to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_body<T: DeserializeOwned>(response_text: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        id: i32,
    }

    async fn fetch_with_response(template: ResponseTemplate) -> Result<Sample, AppError> {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sample"))
            .respond_with(template)
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let url = format!("{}/sample", mock_server.uri());
        fetch::<Sample>(&client, &url).await
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let result =
            fetch_with_response(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 7})))
                .await;
        assert_eq!(result.unwrap(), Sample { id: 7 });
    }

    #[tokio::test]
    async fn test_fetch_rejected_carries_errors_field() {
        let body = serde_json::json!({"errors": ["planet index out of range"]});
        let result = fetch_with_response(ResponseTemplate::new(422).set_body_json(body)).await;

        match result {
            Err(AppError::ApiRejected { status, errors, .. }) => {
                assert_eq!(status, 422);
                assert!(errors.contains("planet index out of range"));
            }
            other => panic!("expected ApiRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_rejected_with_plain_text_body() {
        let result =
            fetch_with_response(ResponseTemplate::new(400).set_body_string("bad planet")).await;

        match result {
            Err(AppError::ApiRejected { status, errors, .. }) => {
                assert_eq!(status, 400);
                assert_eq!(errors, "bad planet");
            }
            other => panic!("expected ApiRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_status_mapping() {
        assert!(matches!(
            fetch_with_response(ResponseTemplate::new(404)).await,
            Err(AppError::ApiNotFound { .. })
        ));
        assert!(matches!(
            fetch_with_response(ResponseTemplate::new(429)).await,
            Err(AppError::ApiRateLimit { .. })
        ));
        assert!(matches!(
            fetch_with_response(ResponseTemplate::new(403)).await,
            Err(AppError::ApiClientError { status: 403, .. })
        ));
        assert!(matches!(
            fetch_with_response(ResponseTemplate::new(503)).await,
            Err(AppError::ApiServiceUnavailable { status: 503, .. })
        ));
        assert!(matches!(
            fetch_with_response(ResponseTemplate::new(500)).await,
            Err(AppError::ApiServerError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_body_classification() {
        assert!(matches!(
            fetch_with_response(ResponseTemplate::new(200).set_body_string("")).await,
            Err(AppError::ApiNoData { .. })
        ));
        assert!(matches!(
            fetch_with_response(ResponseTemplate::new(200).set_body_string("<html>")).await,
            Err(AppError::ApiMalformedJson { .. })
        ));
        assert!(matches!(
            fetch_with_response(ResponseTemplate::new(200).set_body_string(r#"{"name": "x"}"#))
                .await,
            Err(AppError::ApiUnexpectedStructure { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_connection_failure() {
        let client = Client::new();
        // Port 9 (discard) is not listening in test environments.
        let result = fetch::<Sample>(&client, "http://127.0.0.1:9/sample").await;
        assert!(matches!(
            result,
            Err(AppError::NetworkConnection { .. }) | Err(AppError::ApiFetch(_))
        ));
    }

    #[test]
    fn test_extract_errors_fallbacks() {
        assert_eq!(extract_errors(r#"{"errors": "nope"}"#, "Bad Request"), "nope");
        assert_eq!(extract_errors(r#"{"detail": "x"}"#, "Bad Request"), r#"{"detail": "x"}"#);
        assert_eq!(extract_errors("   ", "Bad Request"), "Bad Request");
    }
}

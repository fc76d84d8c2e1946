use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Both base URLs must be non-empty and look like a URL or domain name
/// - User agent cannot be empty
/// - HTTP timeout must be at least one second
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_base_url("Community API URL", &config.community_url)?;
    validate_base_url("Diveharder API URL", &config.diveharder_url)?;

    if config.user_agent.trim().is_empty() {
        return Err(AppError::config_error("User agent cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_base_url(label: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        // Without a scheme it should at least look like a host
        if !url.contains('.') && !url.starts_with("localhost") {
            return Err(AppError::config_error(format!(
                "{label} must be a valid URL or domain name"
            )));
        }
    }

    Ok(())
}

/// Adds `https://` when no scheme is present and strips trailing slashes.
/// Plain `http://` is kept so local mirrors keep working.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

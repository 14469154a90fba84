// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use crate::error::{AppError, Result};
use crate::models::ApiConfig;

/// Build the header set sent with every API request.
pub fn default_headers(config: &ApiConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|_| AppError::config("api.api_key contains invalid header characters"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| AppError::config(format!("Invalid header name '{name}'")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| AppError::config(format!("Invalid value for header '{name}'")))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &ApiConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .default_headers(default_headers(config)?)
        .build()?;
    Ok(client)
}

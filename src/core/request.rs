use crate::config::ClientConfig;
use crate::domain::model::RequestOptions;
use crate::utils::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

/// Performs one HTTP call against `{base_url}/{path}` and normalizes the
/// outcome to parsed JSON or `ClientError::RequestFailed`.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    base_url: String,
    default_headers: HeaderMap,
    client: Client,
}

impl RequestExecutor {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_client(config, Client::new())
    }

    /// Uses a caller-built `reqwest::Client`, e.g. one with a timeout.
    pub fn with_client(config: &ClientConfig, client: Client) -> Result<Self> {
        let mut extra = HeaderMap::new();
        for (name, value) in &config.headers {
            extra.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_headers: merge_headers(&json_headers(), &extra),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn execute(&self, path: &str, options: RequestOptions) -> Result<serde_json::Value> {
        let url = self.url_for(path);
        let headers = merge_headers(&self.default_headers, &options.headers);

        tracing::debug!("{} {}", options.method, url);

        let mut request = self.client.request(options.method.clone(), &url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();

        tracing::debug!("{} {} -> {}", options.method, url, status);

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("{} {} failed with {}", options.method, url, status);
            return Err(request_failed(status, text));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(serde_json::Value::Null);
        }

        Ok(response.json().await?)
    }
}

/// `{base}/{path}` with any leading slashes of `path` dropped.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Starts from `defaults` and applies each override by key; the last value
/// for a key wins.
pub fn merge_headers(defaults: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();
    for (name, value) in overrides {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

fn request_failed(status: StatusCode, body: String) -> ClientError {
    let reason = if body.is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
    } else {
        body
    };

    ClientError::RequestFailed {
        status: status.as_u16(),
        reason,
    }
}

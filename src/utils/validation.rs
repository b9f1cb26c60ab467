use crate::utils::error::{ClientError, Result};
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Characters that would change the meaning of the request URL if
/// interpolated into a path segment. Http(s) URLs read `\` as `/`.
const RESERVED_SEGMENT_CHARS: [char; 4] = ['/', '\\', '?', '#'];

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// An order id ends up verbatim in `pedidos/{id}`.
pub fn validate_path_segment(segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(ClientError::InvalidOrderId {
            id: segment.to_string(),
            reason: "id cannot be empty".to_string(),
        });
    }

    if let Some(c) = segment.chars().find(|c| RESERVED_SEGMENT_CHARS.contains(c)) {
        return Err(ClientError::InvalidOrderId {
            id: segment.to_string(),
            reason: format!("id cannot contain '{}'", c),
        });
    }

    if is_dot_segment(segment) {
        return Err(ClientError::InvalidOrderId {
            id: segment.to_string(),
            reason: "id cannot be a '.' or '..' path segment".to_string(),
        });
    }

    Ok(())
}

/// `.` and `..`, including their `%2e` spellings, are collapsed by URL
/// parsing and would address a different resource.
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

pub fn validate_header(name: &str, value: &str) -> Result<()> {
    HeaderName::from_bytes(name.as_bytes())?;
    HeaderValue::from_str(value)?;
    Ok(())
}

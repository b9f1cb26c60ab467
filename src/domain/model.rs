use crate::utils::error::Result;
use crate::utils::validation::validate_path_segment;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An order record. Its shape belongs to the remote service.
pub type Order = serde_json::Value;

/// Identifier addressing a single order under `pedidos/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate_path_segment(&id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrderId {
    type Err = crate::utils::error::ClientError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

macro_rules! order_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for OrderId {
                fn from(id: $t) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

order_id_from_int!(u32, u64, i32, i64, usize);

/// What a single call hands to the request executor.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_json_body<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
        self.body = Some(serde_json::to_string(data)?);
        Ok(self)
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

//! Backend API
//!
//! HTTP bindings to the catalog backend, organized by resource.

mod item;
mod order;
#[cfg(test)]
pub mod fake;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AppConfig;

pub use item::*;
pub use order::*;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// reqwest-backed implementation of [`ItemApi`] and [`OrderApi`]
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send and reject any non-2xx status
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = HttpApi::new(&AppConfig::new("http://host:8080/api/"));
        assert_eq!(api.url("articulos"), "http://host:8080/api/articulos");
        assert_eq!(api.url("/pedidos"), "http://host:8080/api/pedidos");
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(ApiError::Status(404).to_string(), "server responded with status 404");
    }
}

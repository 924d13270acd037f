//! Runtime Configuration
//!
//! The API base URL, optionally overridden by the host page through
//! `<meta name="api-base-url" content="...">`.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

const API_BASE_URL_META: &str = "meta[name=\"api-base-url\"]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read the meta tag from the current document, falling back to the default
    pub fn from_document() -> Self {
        let configured = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(API_BASE_URL_META).ok().flatten())
            .and_then(|el| el.get_attribute("content"))
            .filter(|url| !url.trim().is_empty());

        match configured {
            Some(url) => {
                log::info!("[CONFIG] API base URL from page: {}", url);
                Self::new(&url)
            }
            None => Self::default(),
        }
    }
}

//! Deployment configuration for the browser app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR host renders the API base URL into a `<meta>` tag; the hydrated app
//! reads it back. Builds without a host fall back to the compile-time
//! `EMPLOYEE_API_BASE_URL`, then to the local development default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `<meta name=...>` carrying the API base URL.
pub const API_BASE_META: &str = "employee-api-base-url";
/// Local development backend.
pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7149/api";

/// Where the REST API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base_url(option_env!("EMPLOYEE_API_BASE_URL"))
    }
}

impl ApiConfig {
    /// Config from an optional base URL; blank or missing uses the default.
    pub fn from_base_url(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Resolve at runtime: the host's meta tag in the browser, default elsewhere.
    pub fn resolve() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let from_meta = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match from_meta {
                Some(url) => Self::from_base_url(Some(&url)),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

//! HTTP transport seam for the API client.
//!
//! Client-side (hydrate): real Fetch calls via `gloo-net`. The browser owns
//! TLS, so certificate validation is always the platform's.
//! Server-side (SSR): [`BrowserTransport`] refuses every request since the
//! API is only called from the browser.

#![allow(clippy::unused_async)]

/// HTTP verbs used by the API contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL without query string.
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: String) -> Self {
        Self { method, url, query: Vec::new(), headers: Vec::new(), body: None }
    }

    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Value of the first query parameter named `name`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a completed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. `Err` means no HTTP response was received at all.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// Fetch-backed transport used by the hydrated app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            let builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            let builder = request
                .headers
                .iter()
                .fold(builder, |b, (k, v)| b.header(k, v));

            let outbound = match request.body {
                Some(body) => builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| e.to_string())?,
                None => builder.build().map_err(|e| e.to_string())?,
            };

            let resp = outbound.send().await.map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| e.to_string())?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(format!("cannot send to {} outside the browser", request.url))
        }
    }
}

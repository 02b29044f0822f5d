//! HTTP client helpers (REST).
//!
//! # Design
//! - Create exactly one client per app boot, from an explicit [`ClientConfig`].
//! - Share it through [`ApiCtx`] instead of a module-level global.

use crate::base::http::ClientConfig;
use crate::models::{LoginRequest, LoginResponse};
use anyhow::{Context, bail};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::rc::Rc;

/// Fetch-based REST client carrying the configured base URL and default headers.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    /// Build a client from the given configuration.
    #[must_use]
    pub const fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Configuration the client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn with_defaults(&self, mut req: Request) -> Request {
        for (name, value) in self.config.headers() {
            req = req.header(name, value);
        }
        req
    }

    /// GET `path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses, or undecodable bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = self.config.url(path);
        let req = self.with_defaults(Request::get(&url));
        let resp = req
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;
        decode(resp, &url).await
    }

    /// POST `body` as JSON to `path` and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Fails on serialization or transport errors, non-2xx statuses, or undecodable bodies.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let url = self.config.url(path);
        let req = self
            .with_defaults(Request::post(&url))
            .json(body)
            .with_context(|| format!("encode body for {url}"))?;
        let resp = req
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?;
        decode(resp, &url).await
    }

    /// Exchange credentials for a token pair at `/api/login`.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`ApiClient::post_json`].
    pub async fn login(&self, request: &LoginRequest) -> anyhow::Result<LoginResponse> {
        self.post_json("/api/login", request).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response, url: &str) -> anyhow::Result<T> {
    if !resp.ok() {
        bail!("{url} returned {} {}", resp.status(), resp.status_text());
    }
    resp.json::<T>()
        .await
        .with_context(|| format!("decode response from {url}"))
}

/// Shared API client context for UI services.
#[derive(Clone, Debug)]
pub struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context around a client built from `config`.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Rc::new(ApiClient::new(config)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

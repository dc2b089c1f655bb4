//! # Remote Source Client
//!
//! The reqwest-backed client for the PokéAPI-style service, behind the
//! [`PokeSource`] trait so the rest of the crate (and tests) never depend on
//! a live network. All fetches are plain GETs; dependent resources are
//! reached through locator strings returned in prior responses, so apart
//! from the first page the client never constructs URLs itself.

use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::types::{EvolutionChain, Pokemon, PokemonPage, PokemonSpecies};

/// Errors from talking to the remote source.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body did not match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The read-only remote interface the application is built against.
///
/// One method per resource kind. `page` takes the opaque cursor from a prior
/// page (`None` fetches page one); `species` and `evolution_chain` take the
/// locator embedded in the record one hop earlier.
#[async_trait]
pub trait PokeSource: Send + Sync {
    async fn page(&self, cursor: Option<&str>) -> Result<PokemonPage, ApiError>;
    async fn pokemon(&self, name: &str) -> Result<Pokemon, ApiError>;
    async fn species(&self, url: &str) -> Result<PokemonSpecies, ApiError>;
    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain, ApiError>;
}

/// HTTP implementation of [`PokeSource`].
pub struct PokeClient {
    base_url: String,
    page_limit: u32,
    client: reqwest::Client,
}

impl PokeClient {
    /// Creates a client for the given base URL (no trailing slash) and list
    /// page size.
    pub fn new(base_url: String, page_limit: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            page_limit,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Remote source error: {} - {}", status.as_u16(), message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl PokeSource for PokeClient {
    async fn page(&self, cursor: Option<&str>) -> Result<PokemonPage, ApiError> {
        let url = match cursor {
            // Hypermedia cursor: fetched verbatim, never rewritten.
            Some(next) => next.to_string(),
            None => format!("{}/pokemon?limit={}", self.base_url, self.page_limit),
        };
        self.get_json(&url).await
    }

    async fn pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.get_json(&url).await
    }

    async fn species(&self, url: &str) -> Result<PokemonSpecies, ApiError> {
        self.get_json(url).await
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain, ApiError> {
        self.get_json(url).await
    }
}

/*
 * Copyright 2025 RoomAccess Authors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Token acquisition for the roomaccess video platform.
//!
//! Every deployment variant answers the same request (one identity and one
//! topology in, one bearer token or one failure out) through
//! [`TokenProvider::get_token`]. Deployments that do not hold signing
//! credentials locally use [`TokenApiClient`] to fetch the environment's
//! configuration document and request a server-signed token.
//!
//! # Example
//!
//! ```no_run
//! use roomaccess_client::{TokenApiClient, TokenProvider};
//! use roomaccess_types::Topology;
//!
//! # async fn example() -> Result<(), roomaccess_client::ApiError> {
//! let provider = TokenProvider::Remote {
//!     client: TokenApiClient::new("http://localhost:8081"),
//!     environment: "staging".to_string(),
//! };
//!
//! let token = provider.get_token(Some("alice"), Topology::Sfu).await?;
//! println!("bearer token: {token}");
//! # Ok(())
//! # }
//! ```

pub mod configuration;
pub mod error;
pub mod provider;
pub mod token;

pub use error::ApiError;
pub use provider::TokenProvider;
pub use roomaccess_token;
pub use roomaccess_types;

use reqwest::Client;
use roomaccess_types::APIResponse;

/// A typed REST client for the remote token service.
///
/// All methods return strongly-typed responses from [`roomaccess_types`]
/// and map HTTP errors to [`ApiError`].
#[derive(Debug, Clone)]
pub struct TokenApiClient {
    base_url: String,
    http: Client,
}

impl TokenApiClient {
    /// Create a new client pointing at the token service base URL,
    /// e.g. `"http://localhost:8081"`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Build a GET request against the service.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Parse a standard `APIResponse<T>` body, returning `T` on success or
/// mapping the status to [`ApiError`].
pub(crate) async fn parse_api_response<T: serde::de::DeserializeOwned + serde::Serialize>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => {
            let wrapper: APIResponse<T> = response.json().await?;
            Ok(wrapper.result)
        }
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::ServerError { status, body: text })
        }
    }
}

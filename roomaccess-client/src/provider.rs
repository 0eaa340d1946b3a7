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

//! Deployment-variant token providers.
//!
//! Which provider a deployment uses is decided once at startup from
//! configuration. Each call is an independent unit of work; the variants
//! hold only read-only state, so concurrent requests need no coordination.

use std::env;

use roomaccess_token::{generate_access_token, random_identity, resolve, CredentialSet};
use roomaccess_types::{AccessTokenClaims, Topology};

use crate::error::ApiError;
use crate::TokenApiClient;

/// Token source for one deployment variant.
#[derive(Debug, Clone)]
pub enum TokenProvider {
    /// Resolve credentials and sign locally (development deployments).
    Local {
        credentials: CredentialSet,
        ttl_secs: i64,
    },
    /// Fetch the environment's configuration document, then request a
    /// server-signed token (staging and internal deployments).
    Remote {
        client: TokenApiClient,
        environment: String,
    },
    /// Return a precomputed token verbatim (public sandbox deployments).
    Static { token: String },
}

impl TokenProvider {
    /// Acquire a token for `(identity, topology)`.
    ///
    /// Exactly one success or one failure is delivered per call. A missing
    /// or empty identity is replaced with a random 10-character one before
    /// the request proceeds.
    pub async fn get_token(
        &self,
        identity: Option<&str>,
        topology: Topology,
    ) -> Result<String, ApiError> {
        let identity = match identity {
            Some(identity) if !identity.is_empty() => identity.to_string(),
            _ => random_identity(),
        };

        match self {
            TokenProvider::Local {
                credentials,
                ttl_secs,
            } => {
                let resolved = resolve(topology, credentials)?;
                Ok(generate_access_token(&resolved, &identity, *ttl_secs)?)
            }
            TokenProvider::Remote {
                client,
                environment,
            } => {
                // The token request's profile sid comes from the fetched
                // document; the two calls never run in parallel.
                let configuration = client.fetch_configuration(environment).await?;
                let sid = configuration
                    .sid(topology)
                    .ok_or(ApiError::MissingConfigurationProfile(topology))?;
                client.request_token(environment, &identity, sid).await
            }
            TokenProvider::Static { token } => Ok(token.clone()),
        }
    }

    /// Select the provider variant from environment variables.
    ///
    /// `TOKEN_PROVIDER` picks the variant:
    /// - `local` (default): credentials from `ACCOUNT_SID`, `API_KEY`,
    ///   `API_KEY_SECRET` and the per-topology profile variables; optional
    ///   `TOKEN_TTL_SECS` overrides the 3600 second default
    /// - `remote`: requires `TOKEN_SERVICE_URL` and `TOKEN_ENVIRONMENT`
    /// - `static`: requires `STATIC_TOKEN`
    pub fn from_env() -> Result<Self, ApiError> {
        let variant = env::var("TOKEN_PROVIDER").unwrap_or_else(|_| "local".to_string());
        match variant.as_str() {
            "local" => {
                let ttl_secs = match env::var("TOKEN_TTL_SECS") {
                    Ok(raw) => raw.parse::<i64>().map_err(|_| {
                        ApiError::Config("TOKEN_TTL_SECS must be a valid integer".to_string())
                    })?,
                    Err(_) => AccessTokenClaims::DEFAULT_TTL_SECS,
                };
                Ok(TokenProvider::Local {
                    credentials: CredentialSet::from_env(),
                    ttl_secs,
                })
            }
            "remote" => {
                let base_url = env::var("TOKEN_SERVICE_URL").map_err(|_| {
                    ApiError::Config("TOKEN_SERVICE_URL required for the remote provider".into())
                })?;
                let environment = env::var("TOKEN_ENVIRONMENT").map_err(|_| {
                    ApiError::Config("TOKEN_ENVIRONMENT required for the remote provider".into())
                })?;
                Ok(TokenProvider::Remote {
                    client: TokenApiClient::new(&base_url),
                    environment,
                })
            }
            "static" => {
                let token = env::var("STATIC_TOKEN").map_err(|_| {
                    ApiError::Config("STATIC_TOKEN required for the static provider".into())
                })?;
                Ok(TokenProvider::Static { token })
            }
            other => Err(ApiError::Config(format!(
                "unknown TOKEN_PROVIDER '{other}'"
            ))),
        }
    }
}

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

//! Error types for token acquisition.

use roomaccess_token::TokenError;
use roomaccess_types::Topology;
use thiserror::Error;

/// Errors returned by [`TokenProvider`](crate::TokenProvider) and
/// [`TokenApiClient`](crate::TokenApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Local credential resolution or signing failed.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// The fetched configuration document has no profile sid for the
    /// requested topology.
    #[error("no configuration profile for topology '{0}'")]
    MissingConfigurationProfile(Topology),

    /// The requested resource was not found (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// A server error with status code and body.
    #[error("server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A configuration error (e.g. a missing environment variable).
    #[error("configuration error: {0}")]
    Config(String),
}

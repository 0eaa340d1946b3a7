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

//! Error types for credential resolution and token signing.

use roomaccess_types::topology::ParseTopologyError;
use thiserror::Error;

/// Errors produced while resolving credentials or signing a token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A required credential key is absent or empty. This is a deployment
    /// configuration problem; the request fails and is never retried.
    #[error("missing credential '{0}'")]
    MissingCredential(String),

    /// A topology value outside the supported set reached the token path.
    /// Contract violation by the caller, not a deployment problem.
    #[error("unsupported topology '{0}'")]
    UnsupportedTopology(String),

    /// The JWT library rejected the signing inputs.
    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl From<ParseTopologyError> for TokenError {
    fn from(err: ParseTopologyError) -> Self {
        TokenError::UnsupportedTopology(err.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomaccess_types::Topology;

    #[test]
    fn parse_failure_becomes_unsupported_topology() {
        let err: TokenError = "Mesh".parse::<Topology>().unwrap_err().into();
        match err {
            TokenError::UnsupportedTopology(value) => assert_eq!(value, "Mesh"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_credential_names_the_key() {
        let err = TokenError::MissingCredential("api_key_secret".to_string());
        assert_eq!(err.to_string(), "missing credential 'api_key_secret'");
    }
}

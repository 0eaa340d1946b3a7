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

//! Remote token issuance endpoint.

use roomaccess_types::responses::TokenResponse;

use crate::error::ApiError;
use crate::{parse_api_response, TokenApiClient};

impl TokenApiClient {
    /// Request a token minted by the remote service.
    ///
    /// Calls `GET /api/v1/token` with `environment`, `identity`, and
    /// `configuration_profile_sid` query parameters. Signing happens
    /// server-side; the returned string is an opaque bearer token.
    pub async fn request_token(
        &self,
        environment: &str,
        identity: &str,
        configuration_profile_sid: &str,
    ) -> Result<String, ApiError> {
        let response = self
            .get("/api/v1/token")
            .query(&[
                ("environment", environment),
                ("identity", identity),
                ("configuration_profile_sid", configuration_profile_sid),
            ])
            .send()
            .await?;
        let token: TokenResponse = parse_api_response(response).await?;
        Ok(token.token)
    }
}

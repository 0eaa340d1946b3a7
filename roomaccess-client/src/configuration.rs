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

//! Configuration document endpoint.

use roomaccess_types::VideoConfiguration;

use crate::error::ApiError;
use crate::{parse_api_response, TokenApiClient};

impl TokenApiClient {
    /// Fetch the per-topology configuration profiles for an environment.
    ///
    /// Calls `GET /api/v1/configuration/{environment}`.
    pub async fn fetch_configuration(
        &self,
        environment: &str,
    ) -> Result<VideoConfiguration, ApiError> {
        log::debug!("fetching video configuration for environment '{environment}'");
        let path = format!("/api/v1/configuration/{environment}");
        let response = self.get(&path).send().await?;
        parse_api_response(response).await
    }
}

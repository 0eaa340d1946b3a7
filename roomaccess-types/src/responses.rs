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

//! Response types for the remote token service REST API.
//!
//! Every endpoint returns an [`APIResponse<T>`] envelope:
//! - On success: `{ "success": true,  "result": <T> }`
//! - On failure: a non-2xx status with a plain-text body

use serde::{Deserialize, Serialize};

/// Top-level API response envelope.
///
/// All token service endpoints wrap their payload in this structure so that
/// clients always see a consistent `{ "success", "result" }` shape.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIResponse<A: Serialize> {
    pub success: bool,
    pub result: A,
}

impl<A: Serialize> APIResponse<A> {
    /// Wrap a successful result.
    pub fn ok(result: A) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

/// Response payload for `GET /api/v1/token`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenResponse {
    /// Opaque bearer token minted by the remote service.
    pub token: String,
}

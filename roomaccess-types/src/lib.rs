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

//! Shared access-token types for the roomaccess token service.
//!
//! This crate defines the contract between the token-issuing side and its
//! consumers (clients, session setup, integration tests).
//! It is intentionally framework-agnostic: no HTTP client, no crypto.

pub mod config;
pub mod responses;
pub mod token;
pub mod topology;

pub use config::VideoConfiguration;
pub use responses::APIResponse;
pub use token::{AccessTokenClaims, Grant, Grants, RtcGrant, VideoGrant};
pub use topology::{ParseTopologyError, Topology};

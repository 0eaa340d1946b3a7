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

//! Local access-token issuance.
//!
//! Resolves deployment credentials for a requested room topology and signs
//! time-bounded JWT access tokens (HMAC-SHA256). Resolution and signing are
//! pure given their inputs; concurrent requests share nothing but the
//! read-only [`CredentialSet`].

pub mod credentials;
pub mod error;
pub mod identity;
pub mod resolver;
pub mod token;

pub use credentials::CredentialSet;
pub use error::TokenError;
pub use identity::random_identity;
pub use resolver::{resolve, ResolvedCredentials};
pub use token::{generate_access_token, AccessToken};

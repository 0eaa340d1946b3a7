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

//! Deployment credentials for local token issuance.
//!
//! Loaded once at startup from environment variables and read-only
//! afterwards; issuance never mutates the set.

use std::collections::HashMap;
use std::env;

use crate::error::TokenError;

/// Credential key for the account identifier.
pub const ACCOUNT_SID: &str = "account_sid";
/// Credential key for the signing API key.
pub const API_KEY: &str = "api_key";
/// Credential key for the API key secret (HMAC key material).
pub const API_KEY_SECRET: &str = "api_key_secret";
/// Configuration profile for peer-to-peer rooms.
pub const CONFIGURATION_PROFILE_SID: &str = "configuration_profile_sid";
/// Configuration profile for SFU rooms.
pub const SFU_CONFIGURATION_PROFILE_SID: &str = "sfu_configuration_profile_sid";
/// Configuration profile for SFU rooms with recording.
pub const SFU_RECORDING_CONFIGURATION_PROFILE_SID: &str =
    "sfu_recording_configuration_profile_sid";

const ALL_KEYS: [&str; 6] = [
    ACCOUNT_SID,
    API_KEY,
    API_KEY_SECRET,
    CONFIGURATION_PROFILE_SID,
    SFU_CONFIGURATION_PROFILE_SID,
    SFU_RECORDING_CONFIGURATION_PROFILE_SID,
];

/// String-keyed credential map supplied by the deployment environment.
///
/// An empty value is treated the same as an absent key; presence of the
/// keys a request needs is checked at resolution time, not at load time,
/// so a deployment only has to supply the profiles it actually uses.
#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
    values: HashMap<String, String>,
}

impl CredentialSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a credential value.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Fetch a credential, treating empty values as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Fetch a credential or fail naming the missing key.
    pub fn require(&self, key: &str) -> Result<&str, TokenError> {
        self.get(key)
            .ok_or_else(|| TokenError::MissingCredential(key.to_string()))
    }

    /// Load credentials from environment variables.
    ///
    /// Each credential key maps to its upper-cased variable name
    /// (`account_sid` ← `ACCOUNT_SID`, and so on). Unset variables are
    /// simply not loaded.
    pub fn from_env() -> Self {
        let mut set = CredentialSet::new();
        for key in ALL_KEYS {
            if let Ok(value) = env::var(key.to_uppercase()) {
                set.insert(key, &value);
            }
        }
        set
    }
}

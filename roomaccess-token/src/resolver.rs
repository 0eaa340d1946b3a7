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

//! Topology-to-credential resolution.
//!
//! Maps a requested room topology to the single configuration profile the
//! backend should apply, failing closed when the deployment environment
//! does not supply a required credential.

use roomaccess_types::Topology;

use crate::credentials::{self, CredentialSet};
use crate::error::TokenError;

/// Credentials resolved for one token request.
///
/// The topology-specific profile sid is carried under its canonical name
/// regardless of which credential key supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub account_sid: String,
    pub api_key: String,
    pub api_key_secret: String,
    pub configuration_profile_sid: String,
}

/// Resolve the credentials for a token request.
///
/// Checks, in order and independent of topology:
/// 1. `account_sid` is present and non-empty
/// 2. `api_key` is present and non-empty
/// 3. `api_key_secret` is present and non-empty
///
/// then requires the profile key selected by the topology (`P2P` →
/// `configuration_profile_sid`, `SFU` → `sfu_configuration_profile_sid`,
/// `SFU Recording` → `sfu_recording_configuration_profile_sid`). The first
/// missing key fails the request with [`TokenError::MissingCredential`]
/// naming it.
pub fn resolve(
    topology: Topology,
    creds: &CredentialSet,
) -> Result<ResolvedCredentials, TokenError> {
    let account_sid = creds.require(credentials::ACCOUNT_SID)?.to_string();
    let api_key = creds.require(credentials::API_KEY)?.to_string();
    let api_key_secret = creds.require(credentials::API_KEY_SECRET)?.to_string();
    let configuration_profile_sid = creds.require(profile_key(topology))?.to_string();

    Ok(ResolvedCredentials {
        account_sid,
        api_key,
        api_key_secret,
        configuration_profile_sid,
    })
}

/// The credential key that holds the profile sid for a topology.
pub fn profile_key(topology: Topology) -> &'static str {
    match topology {
        Topology::P2p => credentials::CONFIGURATION_PROFILE_SID,
        Topology::Sfu => credentials::SFU_CONFIGURATION_PROFILE_SID,
        Topology::SfuRecording => credentials::SFU_RECORDING_CONFIGURATION_PROFILE_SID,
    }
}

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

//! Access token (JWT) claims.
//!
//! The access token is a signed compact JWT (HMAC-SHA256) that authorizes
//! one identity to join rooms. The token service signs it; the media backend
//! validates the signature and extracts the claims.

use serde::{Deserialize, Serialize};

/// JWT payload for a room access token.
///
/// # Example payload
///
/// ```json
/// {
///   "jti": "SK1234-1707004800",
///   "iss": "SK1234",
///   "sub": "AC5678",
///   "exp": 1707008400,
///   "grants": {
///     "identity": "alice",
///     "rtc": { "configuration_profile_sid": "CPabcd" }
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessTokenClaims {
    /// Token id: the API key joined with the issuance second.
    /// Two tokens signed with the same key in the same second share an id.
    pub jti: String,

    /// Issuer: the API key the token was signed with.
    pub iss: String,

    /// Subject: the account sid the token belongs to.
    pub sub: String,

    /// Expiration timestamp (Unix seconds).
    /// The token is rejected after this time.
    pub exp: i64,

    /// Not-before timestamp (Unix seconds), if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// What the bearer is authorized to do.
    pub grants: Grants,
}

impl AccessTokenClaims {
    /// JWS header `cty` value the verifying backend requires.
    pub const CONTENT_TYPE: &'static str = "twilio-fpa;v=1";

    /// Default token lifetime in seconds.
    pub const DEFAULT_TTL_SECS: i64 = 3600;
}

/// The `grants` claim: an identity plus exactly one capability.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Grants {
    /// Display identity of the bearer.
    pub identity: String,

    /// The single capability this token carries.
    #[serde(flatten)]
    pub grant: Grant,
}

/// Capability carried by a token. Exactly one per token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Grant {
    /// Room access scoped to a specific media configuration profile.
    #[serde(rename = "rtc")]
    Rtc(RtcGrant),

    /// Unscoped video access (default topology). Serializes as a present,
    /// empty object: `"video": {}`.
    #[serde(rename = "video")]
    Video(VideoGrant),
}

/// Payload of the `rtc` capability.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RtcGrant {
    /// Backend configuration profile selecting the media-routing mode.
    pub configuration_profile_sid: String,
}

/// Marker payload of the `video` capability. Carries no fields.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VideoGrant {}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with(grant: Grant) -> AccessTokenClaims {
        AccessTokenClaims {
            jti: "SK1-1707004800".to_string(),
            iss: "SK1".to_string(),
            sub: "AC1".to_string(),
            exp: 1707008400,
            nbf: None,
            grants: Grants {
                identity: "alice".to_string(),
                grant,
            },
        }
    }

    #[test]
    fn rtc_grant_nests_under_rtc_key() {
        let claims = claims_with(Grant::Rtc(RtcGrant {
            configuration_profile_sid: "CPabcd".to_string(),
        }));
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            value["grants"]["rtc"]["configuration_profile_sid"],
            "CPabcd"
        );
        assert!(value["grants"].get("video").is_none());
    }

    #[test]
    fn video_grant_serializes_as_empty_object() {
        let claims = claims_with(Grant::Video(VideoGrant::default()));
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["grants"]["video"], serde_json::json!({}));
        assert!(value["grants"].get("rtc").is_none());
    }

    #[test]
    fn nbf_is_omitted_when_unset() {
        let claims = claims_with(Grant::Video(VideoGrant::default()));
        let value = serde_json::to_value(&claims).unwrap();
        assert!(value.get("nbf").is_none());

        let mut claims = claims_with(Grant::Video(VideoGrant::default()));
        claims.nbf = Some(1707004800);
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["nbf"], 1707004800);
    }

    #[test]
    fn claims_round_trip_through_json() {
        let claims = claims_with(Grant::Rtc(RtcGrant {
            configuration_profile_sid: "CPabcd".to_string(),
        }));
        let json = serde_json::to_string(&claims).unwrap();
        let back: AccessTokenClaims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.grants, claims.grants);
        assert_eq!(back.jti, claims.jti);
    }
}

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

//! Access token construction and signing.
//!
//! The token service signs tokens with the API key secret (HMAC-SHA256);
//! the media backend validates the signature and extracts the claims.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use roomaccess_types::token::{AccessTokenClaims, Grant, Grants, RtcGrant, VideoGrant};

use crate::credentials;
use crate::error::TokenError;
use crate::identity::random_identity;
use crate::resolver::ResolvedCredentials;

/// A single-use access token, built per request and serialized immediately.
///
/// # Example
///
/// ```
/// use roomaccess_token::AccessToken;
///
/// let jwt = AccessToken::new("AC1", "SK1", "secret")
///     .identity("alice")
///     .configuration_profile_sid("CPabcd")
///     .sign()
///     .unwrap();
/// assert_eq!(jwt.split('.').count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct AccessToken {
    account_sid: String,
    api_key: String,
    api_key_secret: String,
    identity: Option<String>,
    configuration_profile_sid: Option<String>,
    ttl_secs: i64,
    not_before: Option<i64>,
}

impl AccessToken {
    /// Start a token for the given account and signing key.
    pub fn new(account_sid: &str, api_key: &str, api_key_secret: &str) -> Self {
        Self {
            account_sid: account_sid.to_string(),
            api_key: api_key.to_string(),
            api_key_secret: api_key_secret.to_string(),
            identity: None,
            configuration_profile_sid: None,
            ttl_secs: AccessTokenClaims::DEFAULT_TTL_SECS,
            not_before: None,
        }
    }

    /// Set the bearer identity. A random one is generated when unset or
    /// empty.
    pub fn identity(mut self, identity: &str) -> Self {
        self.identity = Some(identity.to_string());
        self
    }

    /// Scope the token to a configuration profile (`rtc` grant). Without
    /// this the token carries an unscoped `video` grant.
    pub fn configuration_profile_sid(mut self, sid: &str) -> Self {
        self.configuration_profile_sid = Some(sid.to_string());
        self
    }

    /// Override the default 3600 second lifetime.
    pub fn ttl_secs(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Set the `nbf` claim (Unix seconds).
    pub fn not_before(mut self, not_before: i64) -> Self {
        self.not_before = Some(not_before);
        self
    }

    /// Sign the token, producing the compact JWT string.
    ///
    /// Fails with [`TokenError::MissingCredential`] before signing if the
    /// account sid, API key, or secret is empty; a token is never signed
    /// with empty key material.
    pub fn sign(&self) -> Result<String, TokenError> {
        if self.account_sid.is_empty() {
            return Err(TokenError::MissingCredential(
                credentials::ACCOUNT_SID.to_string(),
            ));
        }
        if self.api_key.is_empty() {
            return Err(TokenError::MissingCredential(
                credentials::API_KEY.to_string(),
            ));
        }
        if self.api_key_secret.is_empty() {
            return Err(TokenError::MissingCredential(
                credentials::API_KEY_SECRET.to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        let identity = match self.identity.as_deref() {
            Some(identity) if !identity.is_empty() => identity.to_string(),
            _ => random_identity(),
        };
        let grant = match &self.configuration_profile_sid {
            Some(sid) => Grant::Rtc(RtcGrant {
                configuration_profile_sid: sid.clone(),
            }),
            None => Grant::Video(VideoGrant::default()),
        };

        let claims = AccessTokenClaims {
            // Second granularity: tokens signed with the same key in the
            // same second share a jti. The verifying backend accepts this.
            jti: format!("{}-{now}", self.api_key),
            iss: self.api_key.clone(),
            sub: self.account_sid.clone(),
            exp: now + self.ttl_secs,
            nbf: self.not_before,
            grants: Grants { identity, grant },
        };

        let mut header = Header::new(Algorithm::HS256);
        header.cty = Some(AccessTokenClaims::CONTENT_TYPE.to_string());

        encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.api_key_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("failed to sign access token: {e}");
            TokenError::Signing(e)
        })
    }
}

/// Sign an access token for already-resolved credentials.
pub fn generate_access_token(
    resolved: &ResolvedCredentials,
    identity: &str,
    ttl_secs: i64,
) -> Result<String, TokenError> {
    AccessToken::new(
        &resolved.account_sid,
        &resolved.api_key,
        &resolved.api_key_secret,
    )
    .identity(identity)
    .configuration_profile_sid(&resolved.configuration_profile_sid)
    .ttl_secs(ttl_secs)
    .sign()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

    const TEST_SECRET: &str = "super-secret-test-key";

    fn decode_claims(token: &str, secret: &str) -> AccessTokenClaims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        decode::<AccessTokenClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .expect("should decode")
        .claims
    }

    /// Decode the payload segment without any validation, as raw JSON.
    fn raw_payload(token: &str) -> serde_json::Value {
        let payload = token.split('.').nth(1).expect("three segments");
        let bytes = URL_SAFE_NO_PAD.decode(payload).expect("base64url payload");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[test]
    fn token_round_trips_with_rtc_grant() {
        let token = AccessToken::new("AC1", "SK1", TEST_SECRET)
            .identity("alice")
            .configuration_profile_sid("CPxxxx")
            .ttl_secs(3600)
            .sign()
            .expect("should sign");

        let claims = decode_claims(&token, TEST_SECRET);
        assert_eq!(claims.iss, "SK1");
        assert_eq!(claims.sub, "AC1");
        assert_eq!(claims.grants.identity, "alice");
        assert_eq!(
            claims.grants.grant,
            Grant::Rtc(RtcGrant {
                configuration_profile_sid: "CPxxxx".to_string(),
            })
        );
    }

    #[test]
    fn header_carries_jwt_type_and_content_type() {
        let token = AccessToken::new("AC1", "SK1", TEST_SECRET)
            .sign()
            .expect("should sign");

        let header = decode_header(&token).expect("should decode header");
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
        assert_eq!(header.cty.as_deref(), Some(AccessTokenClaims::CONTENT_TYPE));
    }

    #[test]
    fn exp_is_now_plus_ttl() {
        let ttl = 900_i64;
        let before = Utc::now().timestamp();
        let token = AccessToken::new("AC1", "SK1", TEST_SECRET)
            .identity("x")
            .ttl_secs(ttl)
            .sign()
            .expect("should sign");
        let after = Utc::now().timestamp();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        let data = decode::<AccessTokenClaims>(
            &token,
            &DecodingKey::from_secret(b"ignored"),
            &validation,
        )
        .expect("should decode");

        assert!(data.claims.exp >= before + ttl);
        assert!(data.claims.exp <= after + ttl);
    }

    #[test]
    fn jti_is_api_key_plus_issuance_second() {
        let before = Utc::now().timestamp();
        let token = AccessToken::new("AC1", "SK1", TEST_SECRET)
            .sign()
            .expect("should sign");
        let after = Utc::now().timestamp();

        let claims = decode_claims(&token, TEST_SECRET);
        let suffix = claims
            .jti
            .strip_prefix("SK1-")
            .expect("jti starts with the api key");
        let issued_at: i64 = suffix.parse().expect("jti suffix is the second");
        assert!(issued_at >= before && issued_at <= after);
    }

    #[test]
    fn video_grant_is_a_present_empty_object() {
        let token = AccessToken::new("AC1", "SK1", TEST_SECRET)
            .identity("alice")
            .sign()
            .expect("should sign");

        let payload = raw_payload(&token);
        assert_eq!(payload["grants"]["video"], serde_json::json!({}));
        assert!(payload["grants"].get("rtc").is_none());
    }

    #[test]
    fn nbf_is_present_only_when_set() {
        let token = AccessToken::new("AC1", "SK1", TEST_SECRET)
            .sign()
            .expect("should sign");
        assert!(raw_payload(&token).get("nbf").is_none());

        let nbf = Utc::now().timestamp() + 60;
        let token = AccessToken::new("AC1", "SK1", TEST_SECRET)
            .not_before(nbf)
            .sign()
            .expect("should sign");
        assert_eq!(raw_payload(&token)["nbf"], nbf);
    }

    #[test]
    fn missing_identity_generates_a_random_one() {
        let token = AccessToken::new("AC1", "SK1", TEST_SECRET)
            .sign()
            .expect("should sign");

        let claims = decode_claims(&token, TEST_SECRET);
        assert_eq!(claims.grants.identity.len(), 10);
        assert!(claims
            .grants
            .identity
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn empty_signing_inputs_fail_fast() {
        let cases = [
            (AccessToken::new("", "SK1", TEST_SECRET), "account_sid"),
            (AccessToken::new("AC1", "", TEST_SECRET), "api_key"),
            (AccessToken::new("AC1", "SK1", ""), "api_key_secret"),
        ];
        for (token, expected_key) in cases {
            match token.sign().unwrap_err() {
                TokenError::MissingCredential(key) => assert_eq!(key, expected_key),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn generate_access_token_scopes_to_the_resolved_profile() {
        let resolved = ResolvedCredentials {
            account_sid: "AC1".to_string(),
            api_key: "SK1".to_string(),
            api_key_secret: TEST_SECRET.to_string(),
            configuration_profile_sid: "CP_SFU".to_string(),
        };
        let token = generate_access_token(&resolved, "bob", 3600).expect("should sign");

        let claims = decode_claims(&token, TEST_SECRET);
        assert_eq!(claims.grants.identity, "bob");
        assert_eq!(
            claims.grants.grant,
            Grant::Rtc(RtcGrant {
                configuration_profile_sid: "CP_SFU".to_string(),
            })
        );
    }
}

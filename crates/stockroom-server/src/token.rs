//! Signed bearer tokens.
//!
//! A token is `subject.expiry_unix.mac_hex`, where the MAC is a
//! domain-separated keyed BLAKE3 hash of `subject:expiry_unix` under a key
//! derived from the configured secret. No custom cryptography: key
//! derivation and MAC both come straight from the `blake3` crate.
//!
//! Issuance is ops-side plumbing (the `stockroom token` CLI command and
//! test helpers); the server only ever verifies.

use chrono::{DateTime, Utc};
use thiserror::Error;

const KEY_CONTEXT: &str = "stockroom 2026-01-12 bearer token v1";
const MAC_DOMAIN: &str = "stockroom-token-v1";

/// Why a presented token was rejected. Collapsed to a single 401 at the
/// HTTP boundary; the distinction is for logs and tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("token expired")]
    Expired,

    #[error("token signature mismatch")]
    BadSignature,
}

/// Mints and verifies signed bearer tokens under one derived key.
#[derive(Clone)]
pub struct TokenSigner {
    key: [u8; 32],
}

impl TokenSigner {
    /// Derive the signing key from a shared secret.
    pub fn new(secret: &str) -> Self {
        Self {
            key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()),
        }
    }

    /// Mint a token for `subject` valid until `expires_at`.
    pub fn issue(&self, subject: &str, expires_at: DateTime<Utc>) -> String {
        let expiry = expires_at.timestamp();
        let mac = self.mac(subject, expiry);
        format!("{subject}.{expiry}.{}", hex::encode(mac.as_bytes()))
    }

    /// Verify a token against the current clock; returns the subject.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit clock.
    ///
    /// The signature is checked before the expiry, so a forged token never
    /// learns whether its timestamp would have been acceptable.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        // Split from the right: the subject may itself contain dots.
        let mut fields = token.rsplitn(3, '.');
        let mac_hex = fields.next().ok_or(TokenError::Malformed)?;
        let expiry_text = fields.next().ok_or(TokenError::Malformed)?;
        let subject = fields.next().ok_or(TokenError::Malformed)?;
        if subject.is_empty() {
            return Err(TokenError::Malformed);
        }
        let expiry: i64 = expiry_text.parse().map_err(|_| TokenError::Malformed)?;

        let mut presented = [0u8; 32];
        hex::decode_to_slice(mac_hex, &mut presented).map_err(|_| TokenError::Malformed)?;
        // blake3::Hash equality is constant-time.
        if self.mac(subject, expiry) != blake3::Hash::from(presented) {
            return Err(TokenError::BadSignature);
        }
        if expiry < now.timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(subject.to_string())
    }

    fn mac(&self, subject: &str, expiry: i64) -> blake3::Hash {
        blake3::keyed_hash(&self.key, format!("{MAC_DOMAIN}:{subject}:{expiry}").as_bytes())
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.debug_struct("TokenSigner").finish_non_exhaustive()
    }
}

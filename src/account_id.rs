use base64::{Engine as _, engine::general_purpose};
use std::fmt;

use crate::{PsnAuthError, Result};

/// A PSN account number as used by Remote Play clients
///
/// The value is always non-negative and fits in an `i64`. Its wire form is the
/// 8-byte little-endian representation, base64-encoded with the standard
/// alphabet and padding (always 12 characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(i64);

impl AccountId {
    /// Parse the decimal `user_id` returned by token introspection
    ///
    /// # Errors
    ///
    /// Returns `InvalidUserId` for anything that is not a plain run of ASCII
    /// digits representing a value in `0..=i64::MAX`. Out-of-range values are
    /// rejected, never truncated.
    pub fn from_user_id(user_id: &str) -> Result<Self> {
        if user_id.is_empty() || !user_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PsnAuthError::InvalidUserId(user_id.to_string()));
        }

        user_id
            .parse::<i64>()
            .map(Self)
            .map_err(|e| PsnAuthError::InvalidUserId(format!("{}: {}", user_id, e)))
    }

    /// The numeric account id
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Exactly 8 bytes, little-endian
    pub fn to_le_bytes(&self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Base64 form pasted into Remote Play client configuration
    pub fn encode(&self) -> String {
        general_purpose::STANDARD.encode(self.to_le_bytes())
    }

    /// Inverse of [`AccountId::encode`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidUserId` if the input is not base64, does not decode to
    /// exactly 8 bytes, or decodes to a negative number.
    pub fn decode(encoded: &str) -> Result<Self> {
        let bytes = general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| PsnAuthError::InvalidUserId(format!("{}: {}", encoded, e)))?;

        let bytes: [u8; 8] = bytes.try_into().map_err(|b: Vec<u8>| {
            PsnAuthError::InvalidUserId(format!("expected 8 bytes, got {}", b.len()))
        })?;

        let value = i64::from_le_bytes(bytes);
        if value < 0 {
            return Err(PsnAuthError::InvalidUserId(value.to_string()));
        }
        Ok(Self(value))
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PsnAuthError;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(PsnAuthError::InvalidUserId(value.to_string()));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

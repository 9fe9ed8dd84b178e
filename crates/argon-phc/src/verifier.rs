//! Record verification: decode, re-derive, compare in constant time.

use crate::crypto::derivation::derive_key;
use crate::error::{PhcError, Result};
use crate::record::decode_record;
use crate::secret::{self, Password};

/// Check `password` against a stored record.
///
/// Returns `true` only when the record decodes and the re-derived key
/// equals the stored key over its full length. Every failure (blank input,
/// malformed or foreign record, derivation error) yields `false`; use
/// [`check_password`] to tell those apart.
pub fn verify_password(password: Password, record: &str) -> bool {
    match check_password(password, record) {
        Ok(matched) => matched,
        Err(e @ PhcError::MalformedRecord(_)) => {
            log::warn!("rejecting stored record: {e}");
            false
        }
        Err(e) => {
            log::debug!("verification failed: {e}");
            false
        }
    }
}

/// Check `password` against a stored record, reporting why it could not be
/// checked.
///
/// `Ok(false)` means the record is well formed and the password does not
/// match it. The password, the candidate key and the decoded key are wiped
/// on every return path.
///
/// # Errors
///
/// - `PhcError::InvalidInput` for an empty/whitespace password or record;
/// - `PhcError::MalformedRecord` for any decode failure;
/// - `PhcError::DerivationFailed` if the primitive rejects the decoded
///   parameters.
pub fn check_password(password: Password, record: &str) -> Result<bool> {
    if password.is_blank() {
        return Err(PhcError::InvalidInput(
            "password must not be empty or whitespace".to_string(),
        ));
    }
    if secret::is_blank(record.as_bytes()) {
        return Err(PhcError::InvalidInput("record must not be empty".to_string()));
    }

    let stored = decode_record(record)?;
    let candidate = derive_key(
        password.as_bytes(),
        &stored.salt,
        stored.params.time_cost,
        stored.params.memory_cost_kib,
        stored.params.parallelism,
        stored.key.len(),
    )?;

    Ok(candidate.ct_eq(&stored.key))
}

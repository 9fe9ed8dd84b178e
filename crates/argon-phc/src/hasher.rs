//! Record generation: salt, derive, encode.

use crate::crypto::derivation::derive_key;
use crate::crypto::random::random_salt;
use crate::error::{PhcError, Result};
use crate::params::HashParameters;
use crate::record::encode_record;
use crate::secret::Password;

/// Hash `password` with `params` and return the encoded record.
///
/// A fresh random salt is drawn for every call, so hashing the same
/// password twice yields two different records. The password, salt and
/// derived key are wiped when this function returns, on success or failure.
///
/// # Errors
///
/// - `PhcError::InvalidInput` if the password is empty or only whitespace;
/// - `PhcError::InvalidParameters` if `params` fails
///   [`HashParameters::validate`];
/// - `PhcError::EntropySource` if the OS random source fails;
/// - `PhcError::DerivationFailed` if the Argon2id primitive rejects the
///   parameters (e.g. memory too small for the lane count).
pub fn hash_password(password: Password, params: &HashParameters) -> Result<String> {
    if password.is_blank() {
        return Err(PhcError::InvalidInput(
            "password must not be empty or whitespace".to_string(),
        ));
    }
    params.validate()?;

    log::debug!(
        "hashing password: m={} t={} p={} salt_len={} out_len={}",
        params.memory_cost_kib,
        params.time_cost,
        params.parallelism,
        params.salt_length,
        params.output_length
    );

    let salt = random_salt(params.salt_length)?;
    let key = derive_key(
        password.as_bytes(),
        &salt,
        params.time_cost,
        params.memory_cost_kib,
        params.parallelism,
        params.output_length,
    )?;

    Ok(encode_record(params, &salt, key.as_bytes()))
}

/// Hash `password` with [`HashParameters::default`].
pub fn hash_password_default(password: Password) -> Result<String> {
    hash_password(password, &HashParameters::default())
}

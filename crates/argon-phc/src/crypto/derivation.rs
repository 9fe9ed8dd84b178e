//! Argon2id key derivation.
//!
//! Thin wrapper over the `argon2` crate, fixed to `Algorithm::Argon2id` and
//! `Version::V0x13` (decimal 19, the version recorded in every PHC record).

use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::{PhcError, Result};
use crate::secret::DerivedKey;

/// Argon2 version number written into records.
pub const ARGON2_VERSION: u32 = 0x13;

/// Derive `output_length` bytes from `password` and `salt`.
///
/// Deterministic for fixed inputs. Parameter ranges are checked by the
/// primitive; anything it rejects (e.g. memory below `8 * parallelism` KiB,
/// a salt shorter than 8 bytes) is reported as `DerivationFailed`.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    time_cost: u32,
    memory_cost_kib: u32,
    parallelism: u32,
    output_length: usize,
) -> Result<DerivedKey> {
    let params = Params::new(memory_cost_kib, time_cost, parallelism, Some(output_length))
        .map_err(|e| PhcError::DerivationFailed(format!("Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut output = DerivedKey::zeroed(output_length);
    argon2
        .hash_password_into(password, salt, output.as_mut_bytes())
        .map_err(|e| PhcError::DerivationFailed(format!("Argon2 hash: {e}")))?;

    Ok(output)
}

//! Secure random number generation.
//!
//! Uses the operating system's cryptographic random source via `rand`.
//! Failures of the source are surfaced instead of panicking.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::{PhcError, Result};

/// Fill a buffer with cryptographically secure random bytes.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| PhcError::EntropySource(format!("OS random source: {e}")))
}

/// Generate a fresh salt of `len` bytes.
///
/// The salt is wiped when the returned buffer is dropped. A length that
/// cannot be allocated is an error, not an abort.
pub fn random_salt(len: usize) -> Result<Zeroizing<Vec<u8>>> {
    let mut salt = Zeroizing::new(Vec::new());
    salt.try_reserve_exact(len).map_err(|e| {
        PhcError::InvalidParameters(format!("cannot allocate a {len}-byte salt: {e}"))
    })?;
    salt.resize(len, 0);
    fill_random(&mut salt)?;
    Ok(salt)
}

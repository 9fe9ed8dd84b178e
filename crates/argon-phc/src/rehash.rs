//! Detect stored records that should be regenerated under the current
//! parameter policy.
//!
//! Intended to run after a successful [`verify_password`](crate::verify_password),
//! while the plaintext password is still at hand to produce a replacement.

use crate::params::HashParameters;
use crate::record::decode_record;

/// `true` if `record` should be replaced by a fresh hash made with `params`.
///
/// That is the case when the record does not decode, when its memory, time
/// or parallelism cost differs from `params`, when its salt is shorter than
/// `params.salt_length`, or when its key length differs from
/// `params.output_length`.
pub fn needs_rehash(record: &str, params: &HashParameters) -> bool {
    let stored = match decode_record(record) {
        Ok(stored) => stored,
        Err(e) => {
            log::debug!("record needs rehash, it does not decode: {e}");
            return true;
        }
    };
    let p = &stored.params;

    p.memory_cost_kib != params.memory_cost_kib
        || p.time_cost != params.time_cost
        || p.parallelism != params.parallelism
        || p.salt_length < params.salt_length
        || p.output_length != params.output_length
}

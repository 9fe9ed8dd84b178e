//! PHC record codec.
//!
//! A record is the only persisted artifact of this crate:
//!
//! ```text
//! $argon2id$v=19$m=<memory KiB>,t=<time cost>,p=<parallelism>$<salt b64>$<key b64>
//! ```
//!
//! Salt and key use the standard Base64 alphabet. Encoding writes padding;
//! decoding accepts padded and unpadded input, so records produced by PHC
//! implementations that strip padding still parse. Decoding is purely
//! structural: it applies no policy minimums and never derives a key.

use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use zeroize::Zeroizing;

use crate::crypto::derivation::ARGON2_VERSION;
use crate::params::HashParameters;
use crate::secret::DerivedKey;

/// Algorithm identifier, first segment of every record.
pub const ALGORITHM_TAG: &str = "argon2id";

/// Version segment prefix, second segment of every record.
pub const VERSION_PREFIX: &str = "v=19";

const SEGMENT_COUNT: usize = 5;

const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why a record failed to decode.
///
/// Each variant corresponds to one validation step, checked in declaration
/// order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("expected 5 non-empty '$'-delimited segments: {0}")]
    Malformed(String),

    #[error("unsupported algorithm tag '{0}'")]
    UnsupportedAlgorithm(String),

    #[error("unsupported version segment '{0}'")]
    UnsupportedVersion(String),

    #[error("invalid cost parameters: {0}")]
    InvalidParameters(String),

    #[error("invalid base64 in {field} segment: {reason}")]
    InvalidEncoding { field: &'static str, reason: String },
}

/// A decoded record.
///
/// `params.salt_length` and `params.output_length` always equal the decoded
/// salt and key lengths. The key is the expected value for verification;
/// it is never recomputed by decoding.
#[derive(Debug)]
pub struct PhcRecord {
    pub params: HashParameters,
    pub salt: Zeroizing<Vec<u8>>,
    pub key: DerivedKey,
}

impl PhcRecord {
    /// Re-encode into the canonical textual form.
    pub fn encode(&self) -> String {
        encode_record(&self.params, &self.salt, self.key.as_bytes())
    }
}

impl fmt::Display for PhcRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for PhcRecord {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_record(s)
    }
}

/// Encode parameters, salt and key into a record string.
///
/// Only `time_cost`, `memory_cost_kib` and `parallelism` are written from
/// `params`; the salt and key lengths are implied by the Base64 segments.
pub fn encode_record(params: &HashParameters, salt: &[u8], key: &[u8]) -> String {
    format!(
        "${ALGORITHM_TAG}$v={ARGON2_VERSION}$m={},t={},p={}${}${}",
        params.memory_cost_kib,
        params.time_cost,
        params.parallelism,
        STANDARD.encode(salt),
        STANDARD.encode(key),
    )
}

/// Parse and validate a record.
pub fn decode_record(record: &str) -> Result<PhcRecord, DecodeError> {
    let segments: Vec<&str> = record.split('$').skip_while(|s| s.is_empty()).collect();

    if segments.len() != SEGMENT_COUNT {
        return Err(DecodeError::Malformed(format!(
            "found {} segments",
            segments.len()
        )));
    }
    if segments.iter().any(|s| s.is_empty()) {
        return Err(DecodeError::Malformed("empty segment".to_string()));
    }

    let (tag, version, costs, salt_b64, key_b64) = (
        segments[0],
        segments[1],
        segments[2],
        segments[3],
        segments[4],
    );

    if tag != ALGORITHM_TAG {
        return Err(DecodeError::UnsupportedAlgorithm(tag.to_string()));
    }
    if !version.starts_with(VERSION_PREFIX) {
        return Err(DecodeError::UnsupportedVersion(version.to_string()));
    }

    let (memory_cost_kib, time_cost, parallelism) = parse_costs(costs)?;
    let salt = decode_b64("salt", salt_b64)?;
    let key = DerivedKey::new(decode_b64("key", key_b64)?.to_vec());

    Ok(PhcRecord {
        params: HashParameters {
            time_cost,
            memory_cost_kib,
            parallelism,
            salt_length: salt.len(),
            output_length: key.len(),
        },
        salt,
        key,
    })
}

/// Parse `m=..,t=..,p=..` in any order. Unknown keys are skipped.
fn parse_costs(segment: &str) -> Result<(u32, u32, u32), DecodeError> {
    let (mut m, mut t, mut p) = (None, None, None);

    for pair in segment.split(',') {
        let (name, value) = pair.split_once('=').ok_or_else(|| {
            DecodeError::InvalidParameters(format!("expected key=value, got '{pair}'"))
        })?;
        let slot = match name {
            "m" => &mut m,
            "t" => &mut t,
            "p" => &mut p,
            _ => continue,
        };
        if slot.is_some() {
            return Err(DecodeError::InvalidParameters(format!(
                "duplicate parameter '{name}'"
            )));
        }
        *slot = Some(parse_positive(name, value)?);
    }

    let require = |name: &str, v: Option<u32>| {
        v.ok_or_else(|| DecodeError::InvalidParameters(format!("missing parameter '{name}'")))
    };
    Ok((require("m", m)?, require("t", t)?, require("p", p)?))
}

fn parse_positive(name: &str, value: &str) -> Result<u32, DecodeError> {
    match value.parse::<u32>() {
        Ok(0) => Err(DecodeError::InvalidParameters(format!(
            "'{name}' must be greater than zero"
        ))),
        Ok(v) => Ok(v),
        Err(_) => Err(DecodeError::InvalidParameters(format!(
            "'{name}' is not an unsigned integer: '{value}'"
        ))),
    }
}

fn decode_b64(field: &'static str, input: &str) -> Result<Zeroizing<Vec<u8>>, DecodeError> {
    let bytes = Zeroizing::new(LENIENT_STANDARD.decode(input).map_err(|e| {
        DecodeError::InvalidEncoding {
            field,
            reason: e.to_string(),
        }
    })?);
    if bytes.is_empty() {
        return Err(DecodeError::InvalidEncoding {
            field,
            reason: "decodes to zero bytes".to_string(),
        });
    }
    Ok(bytes)
}

//! Argon2id cost parameters.
//!
//! [`HashParameters`] is passed explicitly to every hash call. Its `Default`
//! is the recommended policy; any field may be overridden, either in code or
//! from a JSON document where missing fields fall back to the default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PhcError, Result};

/// Default number of passes over memory.
pub const DEFAULT_TIME_COST: u32 = 3;
/// Default memory size in KiB (128 MiB).
pub const DEFAULT_MEMORY_COST_KIB: u32 = 131_072;
/// Default number of lanes.
pub const DEFAULT_PARALLELISM: u32 = 2;
/// Default salt length in bytes.
pub const DEFAULT_SALT_LENGTH: usize = 16;
/// Default derived key length in bytes.
pub const DEFAULT_OUTPUT_LENGTH: usize = 32;

/// Shortest salt accepted when generating a new record.
pub const MIN_SALT_LENGTH: usize = 8;
/// Shortest derived key accepted when generating a new record.
pub const MIN_OUTPUT_LENGTH: usize = 16;

/// Longest salt the Argon2id primitive accepts.
pub const MAX_SALT_LENGTH: usize = argon2::MAX_SALT_LEN;
/// Longest derived key the Argon2id primitive produces.
pub const MAX_OUTPUT_LENGTH: usize = argon2::Params::MAX_OUTPUT_LEN;

/// Cost and size parameters for one Argon2id derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashParameters {
    /// Number of iterations.
    pub time_cost: u32,
    /// Memory size in kibibytes.
    pub memory_cost_kib: u32,
    /// Number of lanes.
    pub parallelism: u32,
    /// Salt length in bytes.
    pub salt_length: usize,
    /// Derived key length in bytes.
    pub output_length: usize,
}

impl Default for HashParameters {
    fn default() -> Self {
        Self {
            time_cost: DEFAULT_TIME_COST,
            memory_cost_kib: DEFAULT_MEMORY_COST_KIB,
            parallelism: DEFAULT_PARALLELISM,
            salt_length: DEFAULT_SALT_LENGTH,
            output_length: DEFAULT_OUTPUT_LENGTH,
        }
    }
}

impl HashParameters {
    /// Build a parameter set with the default salt and output lengths.
    pub fn new(time_cost: u32, memory_cost_kib: u32, parallelism: u32) -> Self {
        Self {
            time_cost,
            memory_cost_kib,
            parallelism,
            ..Self::default()
        }
    }

    /// Override the salt length.
    pub fn with_salt_length(mut self, salt_length: usize) -> Self {
        self.salt_length = salt_length;
        self
    }

    /// Override the derived key length.
    pub fn with_output_length(mut self, output_length: usize) -> Self {
        self.output_length = output_length;
        self
    }

    /// `true` when every field is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.time_cost > 0
            && self.memory_cost_kib > 0
            && self.parallelism > 0
            && self.salt_length > 0
            && self.output_length > 0
    }

    /// Check the parameters are acceptable for generating a new record.
    ///
    /// Stricter than what the record codec accepts: decoding takes any
    /// positive values, generation also requires the salt and output length
    /// minimums. Salt and output lengths are also capped at the primitive's
    /// maximums so no buffer is sized from an unbounded value. Other range
    /// limits of the primitive (e.g. memory versus lanes) are reported by the
    /// derivation, not here.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("time_cost", self.time_cost as usize),
            ("memory_cost_kib", self.memory_cost_kib as usize),
            ("parallelism", self.parallelism as usize),
            ("salt_length", self.salt_length),
            ("output_length", self.output_length),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| *value == 0) {
            return Err(PhcError::InvalidParameters(format!(
                "{name} must be greater than zero"
            )));
        }
        if self.salt_length < MIN_SALT_LENGTH {
            return Err(PhcError::InvalidParameters(format!(
                "salt_length must be at least {MIN_SALT_LENGTH} bytes, got {}",
                self.salt_length
            )));
        }
        if self.output_length < MIN_OUTPUT_LENGTH {
            return Err(PhcError::InvalidParameters(format!(
                "output_length must be at least {MIN_OUTPUT_LENGTH} bytes, got {}",
                self.output_length
            )));
        }
        if self.salt_length > MAX_SALT_LENGTH {
            return Err(PhcError::InvalidParameters(format!(
                "salt_length must be at most {MAX_SALT_LENGTH} bytes, got {}",
                self.salt_length
            )));
        }
        if self.output_length > MAX_OUTPUT_LENGTH {
            return Err(PhcError::InvalidParameters(format!(
                "output_length must be at most {MAX_OUTPUT_LENGTH} bytes, got {}",
                self.output_length
            )));
        }
        Ok(())
    }

    /// Parse a JSON document. Fields not present keep their default value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PhcError::Config(format!("invalid parameter document: {e}")))
    }

    /// Load a JSON parameter document from disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PhcError::Config(format!("failed to serialize parameters: {e}")))
    }
}

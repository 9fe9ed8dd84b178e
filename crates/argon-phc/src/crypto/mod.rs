//! Cryptographic building blocks.
//!
//! This module provides:
//! - Argon2id key derivation
//! - Constant-time byte comparison
//! - Cryptographically secure random number generation

pub mod compare;
pub mod derivation;
pub mod random;

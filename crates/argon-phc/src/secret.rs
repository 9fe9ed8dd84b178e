//! Owned secret buffers that are wiped when dropped.
//!
//! [`Password`] and [`DerivedKey`] hold the only secret material the
//! library touches. Both zero their bytes on drop, so every exit path of
//! hashing and verification (including `?` returns) clears them.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::compare::bytes_ct_eq;

/// A candidate password as opaque bytes.
///
/// No strength rules are applied; the only check the library makes is that
/// the password is not empty or entirely ASCII whitespace.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(Vec<u8>);

impl Password {
    /// Take ownership of the given bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Borrow the raw password bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the password has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` when the password is empty or only ASCII whitespace.
    ///
    /// Passwords are arbitrary bytes, so Unicode whitespace such as U+3000
    /// counts as content. Records are checked with the same rule.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.0)
    }
}

/// `true` when `bytes` is empty or only ASCII whitespace.
pub(crate) fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for Password {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Password {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password([REDACTED; {}])", self.0.len())
    }
}

/// Output of the Argon2id primitive.
///
/// Equality is only available through [`DerivedKey::ct_eq`], which runs in
/// time independent of the key contents.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey(Vec<u8>);

impl DerivedKey {
    /// Wrap bytes produced by the primitive or decoded from a record.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// A zero-filled key of `len` bytes, used as the primitive's output buffer.
    pub(crate) fn zeroed(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the key has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Constant-time equality against another key.
    pub fn ct_eq(&self, other: &DerivedKey) -> bool {
        bytes_ct_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey([REDACTED; {}])", self.0.len())
    }
}

//! Constant-time byte comparison.
//!
//! Execution time depends only on the input lengths, never on where (or
//! whether) the bytes differ.

use subtle::ConstantTimeEq;

/// Compare two byte slices in constant time.
///
/// Slices of different length compare unequal. Length is not secret: the
/// verifier always requests a candidate of the same length as the stored key.
pub fn bytes_ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

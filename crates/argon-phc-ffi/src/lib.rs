//! argon-phc C FFI bindings.
//!
//! Provides a C-compatible API for hashing passwords into PHC records,
//! verifying passwords against records, and checking whether a record should
//! be regenerated.
//!
#![allow(clippy::doc_overindented_list_items)]
//! # Memory contract
//!
//! - Passwords are passed as `(const uint8_t *, size_t)` pairs and are copied
//!   into a buffer that is wiped before the call returns.
//! - All `*mut c_char` output strings are heap-allocated via [`CString`] and
//!   **must** be freed by the caller using [`phc_free_string`].
//! - The static string returned by [`phc_version`] is baked into the binary;
//!   it must **not** be freed.
//!
//! # Error codes
//!
//! | Constant                | Value | Meaning                              |
//! |-------------------------|-------|--------------------------------------|
//! | `PHC_OK`                | 0     | Success                              |
//! | `PHC_ERR_NULL_PTR`      | -1    | A required pointer was null          |
//! | `PHC_ERR_INVALID_UTF8`  | -2    | A string was not valid UTF-8         |
//! | `PHC_ERR_INVALID_INPUT` | -3    | Blank password or rejected parameters|
//! | `PHC_ERR_CRYPTO`        | -4    | Random source or derivation failure  |

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use argon_phc::{
    error::PhcError, hash_password, needs_rehash, verify_password, HashParameters, Password,
};

// ── Error codes ───────────────────────────────────────────────────────────────

/// Success.
pub const PHC_OK: i32 = 0;
/// A required pointer argument was null.
pub const PHC_ERR_NULL_PTR: i32 = -1;
/// A string argument contained invalid UTF-8.
pub const PHC_ERR_INVALID_UTF8: i32 = -2;
/// The password was blank or the parameters were rejected.
pub const PHC_ERR_INVALID_INPUT: i32 = -3;
/// The random source or the Argon2id derivation failed.
pub const PHC_ERR_CRYPTO: i32 = -4;

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Convert a `*const c_char` to a `&str`, returning an error code on failure.
///
/// # Safety
///
/// `ptr` must either be null (handled gracefully) or point to a valid,
/// null-terminated C string that remains valid for the duration of `'a`.
unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Result<&'a str, i32> {
    if ptr.is_null() {
        return Err(PHC_ERR_NULL_PTR);
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| PHC_ERR_INVALID_UTF8)
}

/// Copy `len` bytes at `ptr` into an owned [`Password`].
///
/// # Safety
///
/// `ptr` must be non-null and valid for reads of `len` bytes.
unsafe fn password_from_raw(ptr: *const u8, len: usize) -> Result<Password, i32> {
    if ptr.is_null() {
        return Err(PHC_ERR_NULL_PTR);
    }
    Ok(Password::from(std::slice::from_raw_parts(ptr, len)))
}

/// Allocate a `CString` and write it into `*out`, returning an error code on
/// failure.
///
/// # Safety
///
/// `out` must be non-null.
unsafe fn write_string_out(s: String, out: *mut *mut c_char) -> i32 {
    if out.is_null() {
        return PHC_ERR_NULL_PTR;
    }
    match CString::new(s) {
        Ok(cs) => {
            *out = cs.into_raw();
            PHC_OK
        }
        Err(_) => PHC_ERR_INVALID_INPUT,
    }
}

/// Map a [`PhcError`] to one of the `PHC_ERR_*` constants.
fn map_error(e: &PhcError) -> i32 {
    match e {
        PhcError::InvalidInput(_)
        | PhcError::InvalidParameters(_)
        | PhcError::MalformedRecord(_)
        | PhcError::Config(_) => PHC_ERR_INVALID_INPUT,
        PhcError::DerivationFailed(_) | PhcError::EntropySource(_) | PhcError::Io(_) => {
            PHC_ERR_CRYPTO
        }
    }
}

// ── Version ───────────────────────────────────────────────────────────────────

/// Return the library version string as a null-terminated C string.
///
/// The caller **must not** free this pointer.
#[no_mangle]
pub extern "C" fn phc_version() -> *const c_char {
    // SAFETY: the literal contains no interior nul bytes and has static lifetime.
    static VERSION: &[u8] = b"0.1.0\0";
    VERSION.as_ptr() as *const c_char
}

// ── Hashing ───────────────────────────────────────────────────────────────────

/// Hash a password with explicit Argon2id parameters.
///
/// # Parameters
///
/// - `password`, `password_len` — password bytes; need not be NUL-terminated.
/// - `time_cost`, `memory_cost_kib`, `parallelism` — Argon2id costs.
/// - `salt_length`, `output_length` — sizes in bytes.
/// - `record_out` — on success, receives an owned `*mut c_char` PHC record
///                  that the caller must free with [`phc_free_string`].
///
/// # Returns
///
/// `PHC_OK` on success; one of `PHC_ERR_*` on failure.
///
/// # Safety
///
/// `password` must be valid for reads of `password_len` bytes and
/// `record_out` must be non-null.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn phc_hash_password(
    password: *const u8,
    password_len: usize,
    time_cost: u32,
    memory_cost_kib: u32,
    parallelism: u32,
    salt_length: usize,
    output_length: usize,
    record_out: *mut *mut c_char,
) -> i32 {
    let params = HashParameters {
        time_cost,
        memory_cost_kib,
        parallelism,
        salt_length,
        output_length,
    };
    hash_into(password, password_len, &params, record_out)
}

/// Hash a password with the library's default parameters.
///
/// # Safety
///
/// Same contract as [`phc_hash_password`].
#[no_mangle]
pub unsafe extern "C" fn phc_hash_password_default(
    password: *const u8,
    password_len: usize,
    record_out: *mut *mut c_char,
) -> i32 {
    hash_into(password, password_len, &HashParameters::default(), record_out)
}

unsafe fn hash_into(
    password: *const u8,
    password_len: usize,
    params: &HashParameters,
    record_out: *mut *mut c_char,
) -> i32 {
    let password = match password_from_raw(password, password_len) {
        Ok(p) => p,
        Err(e) => return e,
    };

    if record_out.is_null() {
        return PHC_ERR_NULL_PTR;
    }

    match hash_password(password, params) {
        Ok(record) => write_string_out(record, record_out),
        Err(e) => map_error(&e),
    }
}

// ── Verification ──────────────────────────────────────────────────────────────

/// Verify a password against a stored PHC record.
///
/// # Parameters
///
/// - `password`, `password_len` — candidate password bytes.
/// - `record`       — NUL-terminated PHC record.
/// - `is_valid_out` — receives `1` on match, `0` otherwise. Malformed or
///                    foreign records are a non-match, not an error.
///
/// # Returns
///
/// `PHC_OK` when a result was written; `PHC_ERR_NULL_PTR` or
/// `PHC_ERR_INVALID_UTF8` for unusable arguments.
///
/// # Safety
///
/// `password` must be valid for reads of `password_len` bytes; `record` and
/// `is_valid_out` must be non-null.
#[no_mangle]
pub unsafe extern "C" fn phc_verify_password(
    password: *const u8,
    password_len: usize,
    record: *const c_char,
    is_valid_out: *mut libc::c_int,
) -> i32 {
    let password = match password_from_raw(password, password_len) {
        Ok(p) => p,
        Err(e) => return e,
    };

    let record_str = match cstr_to_str(record) {
        Ok(s) => s,
        Err(e) => return e,
    };

    if is_valid_out.is_null() {
        return PHC_ERR_NULL_PTR;
    }

    *is_valid_out = if verify_password(password, record_str) {
        1
    } else {
        0
    };
    PHC_OK
}

/// Report whether a record should be regenerated with the given parameters.
///
/// `needs_rehash_out` receives `1` if so (including when the record does not
/// decode), `0` otherwise.
///
/// # Safety
///
/// `record` and `needs_rehash_out` must be non-null.
#[no_mangle]
pub unsafe extern "C" fn phc_needs_rehash(
    record: *const c_char,
    time_cost: u32,
    memory_cost_kib: u32,
    parallelism: u32,
    salt_length: usize,
    output_length: usize,
    needs_rehash_out: *mut libc::c_int,
) -> i32 {
    let record_str = match cstr_to_str(record) {
        Ok(s) => s,
        Err(e) => return e,
    };

    if needs_rehash_out.is_null() {
        return PHC_ERR_NULL_PTR;
    }

    let params = HashParameters {
        time_cost,
        memory_cost_kib,
        parallelism,
        salt_length,
        output_length,
    };
    *needs_rehash_out = if needs_rehash(record_str, &params) {
        1
    } else {
        0
    };
    PHC_OK
}

// ── String cleanup ────────────────────────────────────────────────────────────

/// Free a string that was allocated by this library.
///
/// Passing `NULL` is a no-op.
///
/// # Safety
///
/// `s` must be either null or a pointer that was returned by one of the
/// `phc_*` functions in this crate and that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn phc_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

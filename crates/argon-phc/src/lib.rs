//! argon-phc — Argon2id password hashing with self-describing PHC records.
//!
//! [`hash_password`] produces a record such as
//! `$argon2id$v=19$m=131072,t=3,p=2$<salt>$<key>` that carries every
//! parameter needed to check a password later; [`verify_password`] decodes
//! it, re-derives the key and compares in constant time.
//!
//! ```no_run
//! use argon_phc::{hash_password, verify_password, HashParameters, Password};
//!
//! let record = hash_password(Password::from("SecurePassword123"), &HashParameters::default())?;
//! assert!(verify_password(Password::from("SecurePassword123"), &record));
//! assert!(!verify_password(Password::from("WrongPassword"), &record));
//! # Ok::<(), argon_phc::PhcError>(())
//! ```
//!
//! Every call is independent and holds no shared state. Derivation is
//! CPU and memory bound and blocks the calling thread; async callers should
//! run it on a blocking pool.

pub mod crypto;
pub mod error;
pub mod hasher;
pub mod params;
pub mod record;
pub mod rehash;
pub mod secret;
pub mod verifier;

// Re-export primary types
pub use error::{PhcError, Result};
pub use hasher::{hash_password, hash_password_default};
pub use params::HashParameters;
pub use record::{decode_record, encode_record, DecodeError, PhcRecord};
pub use rehash::needs_rehash;
pub use secret::{DerivedKey, Password};
pub use verifier::{check_password, verify_password};

//! Stress test: any single-character change to a stored record must make
//! verification fail.

use argon_phc::{hash_password, verify_password, HashParameters, Password};

const BASE64_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn fast_record(pw: &str) -> String {
    hash_password(Password::from(pw), &HashParameters::new(1, 1024, 1)).unwrap()
}

/// Replace the character at `idx` with a different Base64 character.
fn flip_char(s: &str, idx: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    let original = chars[idx];
    chars[idx] = BASE64_ALPHABET
        .chars()
        .find(|&c| c != original)
        .expect("alphabet has more than one character");
    chars.into_iter().collect()
}

#[test]
fn stress_every_key_character_flip_rejected() {
    let record = fast_record("tamper-target");
    let key_start = record.rfind('$').unwrap() + 1;
    let key_len = record[key_start..].trim_end_matches('=').len();

    for offset in 0..key_len {
        let tampered = flip_char(&record, key_start + offset);
        assert_ne!(tampered, record);
        assert!(
            !verify_password(Password::from("tamper-target"), &tampered),
            "flip at key offset {offset} still verified: {tampered}"
        );
    }
}

#[test]
fn stress_every_salt_character_flip_rejected() {
    let record = fast_record("tamper-target");
    let segments: Vec<&str> = record.split('$').collect();
    let salt_start = record.len() - segments[5].len() - 1 - segments[4].len();
    let salt_len = segments[4].trim_end_matches('=').len();

    for offset in 0..salt_len {
        let tampered = flip_char(&record, salt_start + offset);
        assert!(
            !verify_password(Password::from("tamper-target"), &tampered),
            "flip at salt offset {offset} still verified: {tampered}"
        );
    }
}

#[test]
fn stress_cost_changes_rejected() {
    let record = fast_record("tamper-target");
    for (from, to) in [
        ("m=1024", "m=2048"),
        ("t=1", "t=2"),
        ("p=1", "p=2"),
    ] {
        let tampered = record.replacen(from, to, 1);
        assert_ne!(tampered, record);
        assert!(
            !verify_password(Password::from("tamper-target"), &tampered),
            "{from} -> {to} still verified"
        );
    }
}

#[test]
fn stress_truncation_rejected() {
    let record = fast_record("tamper-target");
    // Dropping only the trailing padding leaves an equivalent record
    let significant = record.trim_end_matches('=').len();
    for cut in 1..significant {
        assert!(
            !verify_password(Password::from("tamper-target"), &record[..cut]),
            "truncated record of length {cut} still verified"
        );
    }
}

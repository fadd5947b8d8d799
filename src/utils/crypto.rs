//! Cryptographic utilities

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::constants::RECEIPT_REFERENCE_LENGTH;

/// Generate a cryptographically secure random token
pub fn generate_secure_token(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Hash a string using SHA-256
pub fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Generate a receipt reference for a payment.
///
/// Uppercase so the reference survives case-folding in provider
/// dashboards and support emails.
pub fn generate_receipt_reference() -> String {
    generate_secure_token(RECEIPT_REFERENCE_LENGTH).to_uppercase()
}

/// Constant-time comparison of two secrets.
///
/// Used for webhook shared secrets where a timing oracle would let a
/// caller recover the secret byte by byte.
pub fn secrets_match(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();

    if provided.len() != expected.len() {
        return false;
    }

    let mut diff = 0u8;
    for (a, b) in provided.iter().zip(expected.iter()) {
        diff |= a ^ b;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_secure_token() {
        let token1 = generate_secure_token(32);
        let token2 = generate_secure_token(32);

        assert_eq!(token1.len(), 32);
        assert_eq!(token2.len(), 32);
        assert_ne!(token1, token2);
    }

    #[test]
    fn test_hash_string() {
        let hash1 = hash_string("test");
        let hash2 = hash_string("test");
        let hash3 = hash_string("different");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
    }

    #[test]
    fn test_receipt_reference_shape() {
        let reference = generate_receipt_reference();
        assert_eq!(reference.len(), RECEIPT_REFERENCE_LENGTH);
        assert_eq!(reference, reference.to_uppercase());
    }

    #[test]
    fn test_secrets_match() {
        assert!(secrets_match("whsec_abc123", "whsec_abc123"));
        assert!(!secrets_match("whsec_abc123", "whsec_abc124"));
        assert!(!secrets_match("short", "much_longer_secret"));
        assert!(!secrets_match("", "x"));
    }
}

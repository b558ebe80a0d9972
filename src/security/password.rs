/// Password scrambling
///
/// Applied on profile creation and on password update. The stored form is
/// `salt_hex:digest_hex` so the value can be verified later; the salt is
/// random per call, so scrambling the same plaintext twice yields different
/// outputs.
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha512};

const SALT_LEN: usize = 16;

/// Salt and hash a plaintext password.
///
/// Returns `salt_hex:digest_hex` where the digest is SHA-512 over the
/// hex-encoded salt concatenated with the plaintext.
pub fn scramble(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let salt_hex = hex::encode(salt);

    let digest = digest_with_salt(&salt_hex, password);
    format!("{}:{}", salt_hex, digest)
}

/// Check a plaintext password against a stored scrambled value.
///
/// Returns false for malformed stored values rather than erroring; a stored
/// value without a salt can never verify.
pub fn verify(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once(':') else {
        return false;
    };
    digest_with_salt(salt_hex, password) == digest_hex
}

fn digest_with_salt(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scramble_never_returns_plaintext() {
        let scrambled = scramble("password123");
        assert_ne!(scrambled, "password123");
        assert!(!scrambled.contains("password123"));
    }

    #[test]
    fn test_scramble_output_shape() {
        let scrambled = scramble("hunter2!");
        let (salt, digest) = scrambled.split_once(':').unwrap();
        // 16-byte salt and 64-byte SHA-512 digest, both hex-encoded
        assert_eq!(salt.len(), SALT_LEN * 2);
        assert_eq!(digest.len(), 128);
    }

    #[test]
    fn test_scramble_is_salted() {
        let a = scramble("same-input");
        let b = scramble("same-input");
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_round_trip() {
        let stored = scramble("correct horse battery staple");
        assert!(verify("correct horse battery staple", &stored));
        assert!(!verify("wrong password", &stored));
    }

    #[test]
    fn test_verify_rejects_malformed_stored_value() {
        assert!(!verify("anything", "no-separator-here"));
        assert!(!verify("anything", ""));
    }
}

//! Random token generation for MIME boundaries and Message-IDs.
//!
//! Tokens are drawn from the thread-local RNG, which is seeded once per
//! thread. Collision resistance is best-effort: two independent draws over
//! a 16^35 space are never checked against each other.

use rand::Rng;

const BOUNDARY_LEN: usize = 35;
const MESSAGE_ID_LEN: usize = 32;

/// Generates a random MIME boundary token (35 lowercase hex characters).
#[must_use]
pub fn boundary() -> String {
    random_hex(BOUNDARY_LEN, b"0123456789abcdef")
}

/// Generates a random Message-ID local part (32 uppercase hex characters).
#[must_use]
pub fn message_id() -> String {
    random_hex(MESSAGE_ID_LEN, b"0123456789ABCDEF")
}

fn random_hex(len: usize, alphabet: &[u8]) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_shape() {
        let token = boundary();
        assert_eq!(token.len(), 35);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!token.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_message_id_shape() {
        let id = message_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!id.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_tokens_unique() {
        assert_ne!(boundary(), boundary());
        assert_ne!(message_id(), message_id());
    }
}

// Rust guideline compliant 2026-10-18

//! Hash-based order identifiers.
//!
//! IDs have the form `ord-XXXXXX`: a fixed prefix followed by six lowercase
//! hex characters taken from a SHA-256 digest of the order content, its
//! creation time and a nonce. Stores bump the nonce until the ID is unused.

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Prefix shared by every order ID.
pub const ID_PREFIX: &str = "ord-";

const HASH_LEN: usize = 6;

/// Generates an order ID.
///
/// # Arguments
///
/// * `text` - Order description
/// * `table` - Table identifier
/// * `timestamp` - Creation timestamp
/// * `nonce` - Disambiguator, incremented on collision
///
/// # Returns
///
/// An ID of the form `ord-XXXXXX`.
pub fn generate_id(text: &str, table: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update([0u8]);
    hasher.update(table.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}{}", ID_PREFIX, &hex[..HASH_LEN])
}

/// Generates an ID not yet taken according to `is_taken`.
pub fn generate_unique_id<F>(text: &str, table: &str, timestamp: i64, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut nonce = 0u32;
    loop {
        let id = generate_id(text, table, timestamp, nonce);
        if !is_taken(&id) {
            return id;
        }
        nonce = nonce.wrapping_add(1);
    }
}

/// Validates the format of an order ID.
///
/// # Errors
///
/// Returns `Error::Validation` if the ID lacks the `ord-` prefix or the hash
/// part is not six lowercase hex characters.
pub fn validate_id_format(id: &str) -> Result<()> {
    let hash = id
        .strip_prefix(ID_PREFIX)
        .ok_or_else(|| Error::Validation(format!("Order ID must start with '{}': {}", ID_PREFIX, id)))?;

    let well_formed = hash.len() == HASH_LEN
        && hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
    if !well_formed {
        return Err(Error::Validation(format!("Malformed order ID: {}", id)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_deterministic() {
        let a = generate_id("2x Soup", "5", 1000, 0);
        let b = generate_id("2x Soup", "5", 1000, 0);
        assert_eq!(a, b);
        assert!(validate_id_format(&a).is_ok());
    }

    #[test]
    fn test_nonce_changes_id() {
        assert_ne!(
            generate_id("2x Soup", "5", 1000, 0),
            generate_id("2x Soup", "5", 1000, 1)
        );
    }

    #[test]
    fn test_unique_id_skips_taken() {
        let first = generate_id("Tea", "1", 0, 0);
        let id = generate_unique_id("Tea", "1", 0, |candidate| candidate == first);
        assert_ne!(id, first);
        assert_eq!(id, generate_id("Tea", "1", 0, 1));
    }

    #[test]
    fn test_validate_id_format() {
        assert!(validate_id_format("ord-a1b2c3").is_ok());
        assert!(validate_id_format("tkt-a1b2c3").is_err());
        assert!(validate_id_format("ord-A1B2C3").is_err());
        assert!(validate_id_format("ord-a1b2").is_err());
        assert!(validate_id_format("").is_err());
    }
}

use crate::config::CONFIG;
use crate::error::Result;

/// Hash a password using bcrypt with the configured work factor
pub fn hash_password(password: &str) -> Result<String> {
    Ok(bcrypt::hash(password, CONFIG.auth.bcrypt_cost)?)
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hashing() {
        std::env::set_var("ECOTRIP_BCRYPT_COST", "4");
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        fast_hashing();
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn test_verify_password_roundtrip() {
        fast_hashing();
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("wrong horse", &hash));
    }

    #[test]
    fn test_verify_against_garbage_hash_is_false() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    }
}

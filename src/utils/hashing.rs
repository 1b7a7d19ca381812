use bcrypt::{BcryptError, DEFAULT_COST, hash, verify};

pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(password, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_original_password() {
        let hashed = hash_password("hunter2").expect("hash");

        assert_ne!(hashed, "hunter2");
        assert!(verify_password("hunter2", &hashed).expect("verify"));
        assert!(!verify_password("hunter3", &hashed).expect("verify"));
    }
}

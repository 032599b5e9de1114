//! This file defines the type that handles password hashing and verification.
//! `PasswordHash` converts a plaintext password into a salted bcrypt hash.

use bcrypt::{hash, verify};

use crate::Error;

/// A salted and hashed password.
///
/// The plaintext password cannot be recovered from this value.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// An alias for the default encryption cost for hashing passwords.
    pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

    /// Hash `raw_password` with a fresh random salt and the specified `cost`.
    ///
    /// `cost` increases the rounds of hashing and therefore the time needed to verify a password.
    /// A value of at least 12 is recommended. Pass in [PasswordHash::DEFAULT_COST] to use the recommended cost.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::HashingError] if the password could not be hashed,
    /// e.g. `cost` is outside of the range bcrypt accepts.
    pub fn new(raw_password: &str, cost: u32) -> Result<Self, Error> {
        match hash(raw_password, cost) {
            Ok(password_hash) => Ok(Self(password_hash)),
            Err(e) => Err(Error::HashingError(e.to_string())),
        }
    }

    /// Create a new `PasswordHash` without any validation.
    ///
    /// The caller should ensure that `raw_password_hash` is a valid password hash.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if an invalid hash is provided it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(raw_password_hash: &str) -> Self {
        Self(raw_password_hash.to_string())
    }

    /// Check that `raw_password` matches the stored password.
    ///
    /// # Errors
    ///
    /// Returns an [Error::HashingError] if the stored hash is not a valid bcrypt hash.
    pub fn verify(&self, raw_password: &str) -> Result<bool, Error> {
        verify(raw_password, &self.0).map_err(|error| Error::HashingError(error.to_string()))
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod password_hash_tests {
    use crate::{Error, PasswordHash};

    #[test]
    fn verify_password_succeeds_for_valid_password() {
        let hash = PasswordHash::new_unchecked(
            "$2b$12$Gwf0uvxH3L7JLfo0CC/NCOoijK2vQ/wbgP.LeNup8vj6gg31IiFkm",
        );
        let password = "okon";

        assert!(hash.verify(password).unwrap());
    }

    #[test]
    fn verify_password_fails_for_invalid_password() {
        let hash = PasswordHash::new_unchecked(
            "$2b$12$Gwf0uvxH3L7JLfo0CC/NCOoijK2vQ/wbgP.LeNup8vj6gg31IiFkm",
        );
        let password = "thewrongpassword";

        assert!(!hash.verify(password).unwrap());
    }

    #[test]
    fn verify_errors_on_corrupt_hash() {
        let hash = PasswordHash::new_unchecked("not a bcrypt hash");

        assert!(matches!(hash.verify("okon"), Err(Error::HashingError(_))));
    }

    #[test]
    fn hash_password_produces_verifiable_hash() {
        let password = "roostersgocockledoodledoo";
        let wrong_password = "the_wrong_password";
        let hash = PasswordHash::new(password, 4).unwrap();

        assert!(hash.verify(password).unwrap());
        assert!(!hash.verify(wrong_password).unwrap());
    }

    #[test]
    fn hash_is_not_plaintext() {
        let password = "hunter2";
        let hash = PasswordHash::new(password, 4).unwrap();

        assert_ne!(hash.as_ref(), password);
        assert!(!hash.as_ref().contains(password));
    }

    #[test]
    fn hash_duplicate_password_produces_unique_hash() {
        let hash = PasswordHash::new("turkeysgogobblegobble", 4).unwrap();
        let dupe_hash = PasswordHash::new("turkeysgogobblegobble", 4).unwrap();

        assert_ne!(hash, dupe_hash);
    }

    #[test]
    fn new_fails_on_invalid_cost() {
        let result = PasswordHash::new("hunter2", 1);

        assert!(matches!(result, Err(Error::HashingError(_))));
    }
}

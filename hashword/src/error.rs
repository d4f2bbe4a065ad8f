//! Failure taxonomy for the hashing lifecycle.
//!
//! Every failure aborts the enclosing insert or update: the hooks return
//! before the persistence layer issues the write, so nothing half-processed
//! is ever committed.

use argon2::password_hash;

/// Errors raised by the hashing lifecycle and the digest helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The password attribute was empty or absent at hash time and the
    /// policy does not allow empty passwords.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The value presented for hashing already matches the digest format.
    ///
    /// This guards against double-hashing: a caller pre-hashing the value,
    /// or a replayed update re-submitting a stored digest as plaintext.
    #[error("attempted to hash an existing argon2 digest")]
    AlreadyHashed,

    /// The argon2 primitive failed.
    ///
    /// Hashing and verification are local computations; a failure here is a
    /// configuration or environment defect and is surfaced unmodified, with
    /// no retry.
    #[error("argon2 operation failed: {0}")]
    Hash(#[from] password_hash::Error),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn empty_password_message_matches_contract() {
        assert_eq!(Error::EmptyPassword.to_string(), "password must not be empty");
    }

    #[test]
    fn primitive_errors_convert_via_from() {
        let err = Error::from(argon2::password_hash::Error::Password);
        assert!(matches!(err, Error::Hash(_)));
    }
}

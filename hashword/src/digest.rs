//! Argon2 digest helpers shared by the lifecycle hooks and standalone
//! callers.
//!
//! The digest is an opaque PHC string that self-identifies through its
//! `$argon` prefix, so a stored value can be told apart from plaintext
//! without any external metadata.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::error::Error;

/// Prefix shared by every digest in the argon2 family
/// (`$argon2id$...`, `$argon2i$...`, `$argon2d$...`).
const DIGEST_PREFIX: &str = "$argon";

/// Returns true when `value` is structurally an argon2 digest.
///
/// This is a prefix check, not a full PHC-string parse: parameter segments,
/// salt, and body are not validated. A plaintext password that happens to
/// start with `$argon` is indistinguishable from a digest and is treated as
/// one.
#[must_use]
pub fn looks_like_hash(value: &str) -> bool {
    value.starts_with(DIGEST_PREFIX)
}

/// Hashes `plaintext` with argon2 under a freshly generated salt.
///
/// The returned PHC string embeds the salt and parameters, so it can be
/// verified later without further context. Two calls with the same
/// plaintext produce different digests; both verify against it.
pub fn generate_hash(plaintext: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)?
        .to_string();
    Ok(digest)
}

/// Verifies `candidate` against a stored digest.
///
/// A stored value that does not parse as a PHC string is an error; a
/// candidate that simply does not match is `Ok(false)`.
pub fn verify_hash(digest: &str, candidate: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(digest)?;
    Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok())
}

/// Compares two plaintext passwords through the primitive.
///
/// Hashes `password` and verifies `candidate` against the fresh digest, so
/// the comparison costs one full hash. Callers holding a stored digest want
/// [`verify_hash`] instead.
pub fn verify_password(password: &str, candidate: &str) -> Result<bool, Error> {
    let digest = generate_hash(password)?;
    verify_hash(&digest, candidate)
}

#[cfg(test)]
mod tests {
    use super::{generate_hash, looks_like_hash, verify_hash, verify_password};
    use crate::error::Error;

    #[test]
    fn generated_digest_matches_predicate_and_verifies() {
        let digest = generate_hash("Turtle123!").unwrap();
        assert!(looks_like_hash(&digest));
        assert!(verify_hash(&digest, "Turtle123!").unwrap());
        assert!(!verify_hash(&digest, "Monkey69!").unwrap());
    }

    #[test]
    fn hashing_twice_salts_differently() {
        let first = generate_hash("Turtle123!").unwrap();
        let second = generate_hash("Turtle123!").unwrap();
        assert_ne!(first, second);
        assert!(verify_hash(&first, "Turtle123!").unwrap());
        assert!(verify_hash(&second, "Turtle123!").unwrap());
    }

    #[test]
    fn predicate_accepts_family_variants() {
        assert!(looks_like_hash("$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$AAAA"));
        assert!(looks_like_hash("$argon2i$v=19$m=4096,t=3,p=1$c2FsdHNhbHQ$AAAA"));
        assert!(looks_like_hash("$argon"));
    }

    #[test]
    fn predicate_rejects_plaintext() {
        assert!(!looks_like_hash(""));
        assert!(!looks_like_hash("argon2"));
        assert!(!looks_like_hash("Turtle123!"));
        assert!(!looks_like_hash("$2b$12$bcrypt-style"));
    }

    #[test]
    fn malformed_digest_is_an_error_not_a_mismatch() {
        let err = verify_hash("$argon2id$not-a-real-digest", "Turtle123!").unwrap_err();
        assert!(matches!(err, Error::Hash(_)));
    }

    #[test]
    fn plaintext_comparison_hashes_then_verifies() {
        assert!(verify_password("test", "test").unwrap());
        assert!(!verify_password("test", "not-the-same").unwrap());
    }
}

//! Record access: the accessor pair an entity exposes for its password
//! slot, and the verification capability built on top of it.
//!
//! This module defines the two traits entity types interact with:
//!
//! - [`PasswordRecord`]: how the hooks read and write the password slot
//! - [`VerifyPassword`]: user-facing `verify_password()` method
//!
//! ## Slot states
//!
//! The same slot holds plaintext before the lifecycle hooks run and the
//! digest afterwards; no separate "hashed" flag exists. The digest-format
//! prefix is the only thing telling the two states apart.

use crate::digest;
use crate::error::Error;

/// A persistence entity exposing its password attribute.
///
/// The accessor pair replaces field lookup by name: an implementation is
/// closed over one concrete attribute, chosen with the `#[password]` marker
/// when the trait is derived, so the hooks never reflect over field names
/// at runtime.
///
/// `password` returns `None` when the attribute is absent from the payload.
/// Only `Option` fields can express absence; a plain `String` field reports
/// an empty value as `Some("")`, which the policy treats as empty rather
/// than absent.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `PasswordRecord`",
    label = "the lifecycle hooks need access to a password attribute",
    note = "use `#[derive(PasswordRecord)]` and mark one field with `#[password]`",
    note = "or implement the accessor pair by hand"
)]
pub trait PasswordRecord {
    /// Current content of the password attribute, `None` when absent.
    fn password(&self) -> Option<&str>;

    /// Overwrites the password attribute with `digest`.
    ///
    /// This is also the supported path for storing a pre-computed digest:
    /// write it here on a code path that does not run the hooks. Presenting
    /// a digest to the hooks as if it were plaintext aborts the write
    /// instead.
    fn set_password(&mut self, digest: String);
}

/// Password verification for any [`PasswordRecord`].
///
/// Blanket-implemented, in the manner of an extension trait: bring it into
/// scope and call `record.verify_password(..)` directly.
pub trait VerifyPassword: PasswordRecord {
    /// Compares `candidate` against the stored digest.
    ///
    /// An absent or empty slot is `Ok(false)` without invoking the
    /// primitive. A stored value that does not parse as a digest — for
    /// example a record persisted before the hooks were wired in — is an
    /// error rather than a silent mismatch.
    fn verify_password(&self, candidate: &str) -> Result<bool, Error> {
        match self.password() {
            None | Some("") => Ok(false),
            Some(stored) => digest::verify_hash(stored, candidate),
        }
    }

    /// Whether `value` is structurally a digest.
    ///
    /// Exposed at the type level so callers can ask `User::looks_like_hash(..)`
    /// without an instance; delegates to [`crate::looks_like_hash`].
    #[must_use]
    fn looks_like_hash(value: &str) -> bool
    where
        Self: Sized,
    {
        digest::looks_like_hash(value)
    }
}

impl<R: PasswordRecord> VerifyPassword for R {}

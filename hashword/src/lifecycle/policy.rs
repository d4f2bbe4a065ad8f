//! Hashing decisions for lifecycle events.
//!
//! The policy is a pure decision function: given the event and the current
//! value of the password attribute it answers hash or skip, or fails with
//! the reason. It never touches an entity and never invokes the primitive.

use crate::digest::looks_like_hash;
use crate::error::Error;

/// Per-operation context the persistence layer passes during an update.
///
/// Created per operation and discarded afterwards. Use the constructor
/// methods [`UpdateContext::patch`] and [`UpdateContext::full`].
#[derive(Clone, Copy, Debug)]
pub struct UpdateContext {
    partial: bool,
}

impl UpdateContext {
    /// Context for a partial update: only attributes present in the payload
    /// are written.
    #[must_use]
    pub fn patch() -> Self {
        Self { partial: true }
    }

    /// Context for a full replace: every attribute is written.
    #[must_use]
    pub fn full() -> Self {
        Self { partial: false }
    }

    /// Whether this update writes only the attributes present in its
    /// payload.
    #[must_use]
    pub fn is_patch(self) -> bool {
        self.partial
    }
}

/// The lifecycle event a decision is being made for.
#[derive(Clone, Copy, Debug)]
pub enum LifecycleEvent {
    /// The record is about to be inserted.
    Insert,
    /// The record is about to be updated.
    Update(UpdateContext),
}

/// Outcome of a policy decision.
///
/// Failure outcomes are the `Err` channel of [`HashPolicy::decide`], not a
/// variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Hash the current value and write the digest back.
    Hash,
    /// Leave the attribute untouched.
    Skip,
}

/// Configuration-driven strategy deciding whether a password attribute is
/// hashed before a write.
///
/// Construct once at composition time and treat as immutable afterwards.
/// The default rejects empty passwords.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashPolicy {
    allow_empty_password: bool,
}

impl HashPolicy {
    /// Policy with the defaults: empty passwords are rejected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Permits records without a password: an empty or absent value skips
    /// hashing instead of failing, and the attribute is left as-is.
    #[must_use]
    pub fn allow_empty_password(mut self, allow: bool) -> Self {
        self.allow_empty_password = allow;
        self
    }

    /// Decides what happens to the password attribute for `event`.
    ///
    /// `value` is the current content of the attribute; `None` means the
    /// attribute is absent from the payload driving the operation.
    ///
    /// Inserts and full replaces always run the hash attempt. A patch whose
    /// payload does not carry the attribute skips, so updates to unrelated
    /// attributes leave an existing digest untouched. A patch that does
    /// carry it — even carrying an empty value — runs the hash attempt.
    pub fn decide(&self, event: LifecycleEvent, value: Option<&str>) -> Result<Decision, Error> {
        match event {
            LifecycleEvent::Update(ctx) if ctx.is_patch() && value.is_none() => Ok(Decision::Skip),
            LifecycleEvent::Insert | LifecycleEvent::Update(_) => self.hash_attempt(value),
        }
    }

    /// The hash-attempt sub-decision, shared by every event that reaches it.
    fn hash_attempt(&self, value: Option<&str>) -> Result<Decision, Error> {
        match value {
            None | Some("") => {
                if self.allow_empty_password {
                    Ok(Decision::Skip)
                } else {
                    Err(Error::EmptyPassword)
                }
            }
            Some(v) if looks_like_hash(v) => Err(Error::AlreadyHashed),
            Some(_) => Ok(Decision::Hash),
        }
    }
}

//! Lifecycle interception: wires the policy into a record's before-write
//! hooks and performs the attribute read/write.

use tracing::{debug, trace};

use crate::digest;
use crate::error::Error;
use crate::lifecycle::policy::{Decision, HashPolicy, LifecycleEvent, UpdateContext};
use crate::lifecycle::record::PasswordRecord;

/// Before-write hooks the persistence layer invokes.
///
/// The host framework owns the call sites: it runs its own pre-write
/// behavior first, then these hooks, and issues the write only after they
/// return. An error return aborts the operation; the record must not be
/// committed with a plaintext or half-processed password. The hooks
/// themselves perform no I/O.
pub trait LifecycleHooks<R> {
    /// Invoked immediately before `record` is inserted.
    fn before_insert(&self, record: &mut R) -> Result<(), Error>;

    /// Invoked immediately before `record` is updated. `ctx` carries the
    /// partial-versus-full semantics of the operation.
    fn before_update(&self, record: &mut R, ctx: UpdateContext) -> Result<(), Error>;
}

/// Hashing behavior for one password attribute on an entity type.
///
/// Owns the [`HashPolicy`] and performs the slot read/write around it: on a
/// hash decision the current plaintext is digested and written back through
/// the record's setter, on a skip nothing is touched, and a policy failure
/// propagates so the enclosing write aborts.
#[derive(Clone, Copy, Debug, Default)]
pub struct PasswordField {
    policy: HashPolicy,
}

impl PasswordField {
    /// Field with the default policy: empty passwords are rejected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Field driven by an explicit policy.
    #[must_use]
    pub fn with_policy(policy: HashPolicy) -> Self {
        Self { policy }
    }

    /// Builder shorthand for [`HashPolicy::allow_empty_password`].
    #[must_use]
    pub fn allow_empty_password(mut self, allow: bool) -> Self {
        self.policy = self.policy.allow_empty_password(allow);
        self
    }

    fn apply<R: PasswordRecord>(&self, record: &mut R, event: LifecycleEvent) -> Result<(), Error> {
        let value = record.password().map(str::to_owned);
        match self.policy.decide(event, value.as_deref())? {
            Decision::Skip => {
                trace!(?event, "password attribute left untouched");
                Ok(())
            }
            Decision::Hash => {
                // decide returns Hash only for a present, non-empty value
                if let Some(plaintext) = value {
                    let digest = digest::generate_hash(&plaintext)?;
                    record.set_password(digest);
                    debug!(?event, "password attribute hashed");
                }
                Ok(())
            }
        }
    }
}

impl<R: PasswordRecord> LifecycleHooks<R> for PasswordField {
    fn before_insert(&self, record: &mut R) -> Result<(), Error> {
        self.apply(record, LifecycleEvent::Insert)
    }

    fn before_update(&self, record: &mut R, ctx: UpdateContext) -> Result<(), Error> {
        self.apply(record, LifecycleEvent::Update(ctx))
    }
}

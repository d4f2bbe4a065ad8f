//! Automatic password hashing for persistence entities.
//!
//! This crate separates:
//! - **Policy**: when a password attribute is hashed, skipped, or rejected.
//! - **Interception**: before-write hooks that apply the policy to a record.
//!
//! The host persistence framework invokes the hooks immediately before a
//! create or update and commits the write only after they return; the
//! `PasswordRecord` derive marks the password field and generates the
//! accessor pair the hooks operate through.
//!
//! Key rules:
//! - Inserts and full replaces always run the hash attempt.
//! - A patch that does not carry the password attribute never touches it,
//!   so unrelated updates preserve the stored digest.
//! - A value already in digest form is never hashed again; presenting one
//!   as plaintext aborts the write with [`Error::AlreadyHashed`].
//! - Empty passwords abort with [`Error::EmptyPassword`] unless the policy
//!   allows them, in which case the attribute is left empty.
//!
//! What this crate does:
//! - decides and performs the hashing of one password attribute per record
//! - verifies candidate passwords against the stored digest
//! - provides standalone hash/verify helpers for callers without a record
//!
//! What it does not do:
//! - build queries, manage schemas, or talk to a database
//! - implement the digest algorithm (delegated to the `argon2` crate)
//!
//! The `PasswordRecord` derive macro lives in `hashword-derive` and is
//! re-exported here.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use hashword_derive::PasswordRecord;

#[allow(unused_extern_crates)]
extern crate self as hashword;

// Module declarations
mod digest;
mod error;
mod lifecycle;

// Re-exports
pub use digest::{generate_hash, looks_like_hash, verify_hash, verify_password};
pub use error::Error;
pub use lifecycle::{
    Decision, HashPolicy, LifecycleEvent, LifecycleHooks, PasswordField, PasswordRecord,
    UpdateContext, VerifyPassword,
};

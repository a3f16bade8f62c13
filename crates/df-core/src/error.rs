//! Base error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// Errors produced by `df-core` name validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("location name is empty")]
    EmptyName,

    #[error("hub name {name:?} contains the reserved separator '-'")]
    ReservedSeparator { name: String },
}

/// Shorthand result type for `df-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;

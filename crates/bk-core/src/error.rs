//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so a malformed duration surfaces unchanged at every
//! layer.

use thiserror::Error;

/// Errors raised by `bk-core` primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A duration string did not match `[{days}d ]H:MM:SS`.
    #[error("invalid duration {input:?}: {reason} (expected something like '1d 07:45:09')")]
    Format { input: String, reason: String },
}

/// Shorthand result type for `bk-core`.
pub type CoreResult<T> = Result<T, CoreError>;

// Copyright 2025 ZettaScale Technology
//
// Error type of the rmw-z API

/// Errors surfaced by the rmw-z API.
///
/// A name that breaks the grammar is not an error: the validators report it
/// through their result enum. `InvalidName` only appears when a caller asks
/// for it with [`Validation::ensure_valid`](crate::validation::Validation::ensure_valid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RmwError {
    /// The caller broke the API contract, e.g. passed a null pointer.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("invalid {kind}: {reason}, at index {index}")]
    InvalidName {
        kind: &'static str,
        reason: &'static str,
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, RmwError>;

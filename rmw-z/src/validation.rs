// Copyright 2025 ZettaScale Technology
//
// Validation outcome shared by every name grammar

use std::ffi::CStr;
use std::fmt;

use serde::Serialize;

use crate::error::{Result, RmwError};
use crate::rule::{Grammar, Violation};

/// Closed set of outcome codes produced by one grammar.
///
/// Implemented by [`TopicNameValidation`](crate::TopicNameValidation),
/// [`NamespaceValidation`](crate::NamespaceValidation) and
/// [`NodeNameValidation`](crate::NodeNameValidation).
pub trait ValidationResult: Copy + Eq + fmt::Debug + 'static {
    const VALID: Self;
    const TOO_LONG: Self;
    /// What is being validated, e.g. `"topic name"`.
    const KIND: &'static str;
    /// Description returned for codes outside the enumeration.
    const UNKNOWN_RESULT: &'static str;
    /// NUL terminated [`UNKNOWN_RESULT`](Self::UNKNOWN_RESULT).
    const C_UNKNOWN_RESULT: &'static CStr;

    fn code(self) -> i32;

    fn from_code(code: i32) -> Option<Self>;

    /// Human readable reason, `None` for the valid outcome.
    fn description(self) -> Option<&'static str>;

    /// NUL terminated [`description`](Self::description), same text.
    fn c_description(self) -> Option<&'static CStr>;

    /// Like [`description`](Self::description) but for a raw code.
    fn description_of(code: i32) -> Option<&'static str> {
        match Self::from_code(code) {
            Some(result) => result.description(),
            None => Some(Self::UNKNOWN_RESULT),
        }
    }

    fn c_description_of(code: i32) -> Option<&'static CStr> {
        match Self::from_code(code) {
            Some(result) => result.c_description(),
            None => Some(Self::C_UNKNOWN_RESULT),
        }
    }
}

pub(crate) const fn c_str(text: &'static str) -> &'static CStr {
    match CStr::from_bytes_with_nul(text.as_bytes()) {
        Ok(text) => text,
        Err(_) => panic!("description must end with its only NUL byte"),
    }
}

/// Implements [`ValidationResult`] for a `#[repr(i32)]` enum with `Valid`
/// and `TooLong` variants. Each description literal yields both the `&str`
/// and the `&CStr` form.
macro_rules! impl_validation_result {
    (
        $ty:ty,
        kind = $kind:literal,
        unknown = $unknown:literal,
        descriptions = { $($variant:ident => $text:literal,)* }
    ) => {
        impl $crate::validation::ValidationResult for $ty {
            const VALID: Self = Self::Valid;
            const TOO_LONG: Self = Self::TooLong;
            const KIND: &'static str = $kind;
            const UNKNOWN_RESULT: &'static str = $unknown;
            const C_UNKNOWN_RESULT: &'static ::std::ffi::CStr =
                $crate::validation::c_str(concat!($unknown, "\0"));

            fn code(self) -> i32 {
                self as i32
            }

            fn from_code(code: i32) -> Option<Self> {
                Self::from_repr(code)
            }

            fn description(self) -> Option<&'static str> {
                match self {
                    Self::Valid => None,
                    $(Self::$variant => Some($text),)*
                }
            }

            fn c_description(self) -> Option<&'static ::std::ffi::CStr> {
                match self {
                    Self::Valid => None,
                    $(Self::$variant => {
                        Some(const { $crate::validation::c_str(concat!($text, "\0")) })
                    })*
                }
            }
        }

        impl From<$ty> for i32 {
            fn from(result: $ty) -> i32 {
                result as i32
            }
        }
    };
}
pub(crate) use impl_validation_result;

/// Outcome of validating one name.
///
/// `invalid_index` is the byte offset of the first character responsible for
/// `result` and is `None` exactly when the name is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Validation<R> {
    pub result: R,
    pub invalid_index: Option<usize>,
}

impl<R: ValidationResult> Validation<R> {
    pub(crate) fn run(grammar: &Grammar, name: &[u8], map: fn(Violation) -> R) -> Self {
        match grammar.check(name) {
            None => Self {
                result: R::VALID,
                invalid_index: None,
            },
            Some((violation, index)) => Self {
                result: map(violation),
                invalid_index: Some(index),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result == R::VALID
    }

    pub fn is_too_long(&self) -> bool {
        self.result == R::TOO_LONG
    }

    /// Soft invalidation: the too long outcome is only ever reported for an
    /// otherwise well formed name, so callers may downgrade it to a warning.
    pub fn is_valid_ignoring_length(&self) -> bool {
        self.is_valid() || self.is_too_long()
    }

    pub fn description(&self) -> Option<&'static str> {
        self.result.description()
    }

    pub fn ensure_valid(&self) -> Result<()> {
        match (self.description(), self.invalid_index) {
            (Some(reason), Some(index)) => {
                tracing::debug!("rejected {}: {reason} at index {index}", R::KIND);
                Err(RmwError::InvalidName {
                    kind: R::KIND,
                    reason,
                    index,
                })
            }
            _ => Ok(()),
        }
    }
}

impl<R: ValidationResult> fmt::Display for Validation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.description(), self.invalid_index) {
            (Some(reason), Some(index)) => write!(f, "{reason} (index {index})"),
            (Some(reason), None) => f.write_str(reason),
            _ => write!(f, "valid {}", R::KIND),
        }
    }
}

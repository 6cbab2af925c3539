// Copyright 2025 ZettaScale Technology
//
// Node namespace validation

use serde::Serialize;

use crate::rule::{Grammar, Violation};
use crate::topic_name::{MAX_TOPIC_NAME_LENGTH, TOPIC_NAME_GRAMMAR};
use crate::validation::{Validation, ValidationResult, impl_validation_result};

/// Longest accepted namespace.
///
/// Leaves room for the shortest absolute topic (`/X`) once the namespace is
/// joined with a topic name.
pub const MAX_NAMESPACE_LENGTH: usize = MAX_TOPIC_NAME_LENGTH - 2;

/// Outcome of [`validate_namespace`], mirroring [`TopicNameValidation`](crate::TopicNameValidation).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::FromRepr,
    strum::EnumIter,
)]
#[repr(i32)]
pub enum NamespaceValidation {
    Valid = 0,
    IsEmptyString = 1,
    NotAbsolute = 2,
    EndsWithForwardSlash = 3,
    ContainsUnallowedCharacters = 4,
    ContainsRepeatedForwardSlash = 5,
    NameTokenStartsWithNumber = 6,
    TooLong = 7,
}

impl_validation_result!(
    NamespaceValidation,
    kind = "namespace",
    unknown = "unknown result code for namespace validation",
    descriptions = {
        IsEmptyString => "namespace must not be empty",
        NotAbsolute => "namespace must be absolute, it must lead with a '/'",
        EndsWithForwardSlash => "namespace must not end with a '/', unless only a '/'",
        ContainsUnallowedCharacters => "namespace must not contain characters other than alphanumerics, '_', or '/'",
        ContainsRepeatedForwardSlash => "namespace must not contain repeated '/'",
        NameTokenStartsWithNumber => "namespace must not have a token that starts with a number",
        TooLong => "namespace should not exceed '254'",
    }
);

impl NamespaceValidation {
    fn from_violation(violation: Violation) -> Self {
        match violation {
            Violation::IsEmptyString => Self::IsEmptyString,
            Violation::NotAbsolute => Self::NotAbsolute,
            Violation::EndsWithForwardSlash => Self::EndsWithForwardSlash,
            Violation::ContainsUnallowedCharacters => Self::ContainsUnallowedCharacters,
            Violation::ContainsRepeatedForwardSlash => Self::ContainsRepeatedForwardSlash,
            Violation::NameTokenStartsWithNumber | Violation::StartsWithNumber => {
                Self::NameTokenStartsWithNumber
            }
            Violation::TooLong => Self::TooLong,
        }
    }
}

// The topic grammar with the root exception and the namespace budget.
const NAMESPACE_GRAMMAR: Grammar = Grammar {
    max_length: MAX_NAMESPACE_LENGTH,
    allow_root: true,
    ..TOPIC_NAME_GRAMMAR
};

/// Validate a node namespace.
///
/// A namespace follows the fully qualified topic name rules, except that `/`
/// alone is accepted and the length budget is [`MAX_NAMESPACE_LENGTH`].
///
/// ```
/// use rmw_z::{NamespaceValidation, validate_namespace};
///
/// assert!(validate_namespace("/").is_valid());
/// assert!(validate_namespace("/robot1/arm").is_valid());
/// assert_eq!(validate_namespace("robot").result, NamespaceValidation::NotAbsolute);
/// ```
pub fn validate_namespace(namespace: impl AsRef<[u8]>) -> Validation<NamespaceValidation> {
    Validation::run(
        &NAMESPACE_GRAMMAR,
        namespace.as_ref(),
        NamespaceValidation::from_violation,
    )
}

/// Description of a raw namespace validation code, `None` when it means valid.
pub fn namespace_validation_result_string(code: i32) -> Option<&'static str> {
    NamespaceValidation::description_of(code)
}

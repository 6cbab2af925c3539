// Copyright 2025 ZettaScale Technology
//
// Fully qualified topic name validation for ROS 2 compatibility

use serde::Serialize;

use crate::rule::{FULLY_QUALIFIED_RULES, Grammar, Violation};
use crate::validation::{Validation, ValidationResult, impl_validation_result};

/// Longest accepted fully qualified topic name, in bytes.
pub const MAX_TOPIC_NAME_LENGTH: usize = 256;

/// Outcome of [`validate_full_topic_name`].
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
pub enum TopicNameValidation {
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
    TopicNameValidation,
    kind = "topic name",
    unknown = "unknown result code for rmw topic name validation",
    descriptions = {
        IsEmptyString => "topic name must not be empty string",
        NotAbsolute => "topic name must be absolute, it must lead with a '/'",
        EndsWithForwardSlash => "topic name must not end with a '/'",
        ContainsUnallowedCharacters => "topic name must not contain characters other than alphanumerics, '_', or '/'",
        ContainsRepeatedForwardSlash => "topic name must not contain repeated '/'",
        NameTokenStartsWithNumber => "topic name must not have a token that starts with a number",
        TooLong => "topic length should not exceed '256'",
    }
);

impl TopicNameValidation {
    pub(crate) fn from_violation(violation: Violation) -> Self {
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

pub(crate) const TOPIC_NAME_GRAMMAR: Grammar = Grammar {
    max_length: MAX_TOPIC_NAME_LENGTH,
    allow_separators: true,
    allow_root: false,
    rules: FULLY_QUALIFIED_RULES,
};

/// Validate a fully qualified topic name.
///
/// The name must be absolute, must not end with `/`, may only contain
/// alphanumerics, `_` and `/`, must not repeat `/`, and no token may start
/// with a digit. Length is checked last.
///
/// # Examples
/// ```
/// use rmw_z::{TopicNameValidation, validate_full_topic_name};
///
/// assert!(validate_full_topic_name("/chatter").is_valid());
///
/// let v = validate_full_topic_name("/starts/42with/number");
/// assert_eq!(v.result, TopicNameValidation::NameTokenStartsWithNumber);
/// assert_eq!(v.invalid_index, Some(8));
/// ```
pub fn validate_full_topic_name(name: impl AsRef<[u8]>) -> Validation<TopicNameValidation> {
    Validation::run(
        &TOPIC_NAME_GRAMMAR,
        name.as_ref(),
        TopicNameValidation::from_violation,
    )
}

/// Description of a raw topic validation code, `None` when it means valid.
pub fn topic_name_validation_result_string(code: i32) -> Option<&'static str> {
    TopicNameValidation::description_of(code)
}

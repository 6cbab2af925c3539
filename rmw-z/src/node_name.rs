// Copyright 2025 ZettaScale Technology
//
// Node name validation

use serde::Serialize;

use crate::rule::{Grammar, TOKEN_RULES, Violation};
use crate::validation::{Validation, ValidationResult, impl_validation_result};

pub const MAX_NODE_NAME_LENGTH: usize = 255;

/// Outcome of [`validate_node_name`].
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
pub enum NodeNameValidation {
    Valid = 0,
    IsEmptyString = 1,
    ContainsUnallowedCharacters = 2,
    StartsWithNumber = 3,
    TooLong = 4,
}

impl_validation_result!(
    NodeNameValidation,
    kind = "node name",
    unknown = "unknown result code for rmw node name validation",
    descriptions = {
        IsEmptyString => "node name must not be empty",
        ContainsUnallowedCharacters => "node name must not contain characters other than alphanumerics or '_'",
        StartsWithNumber => "node name must not start with a number",
        TooLong => "node name length should not exceed '255'",
    }
);

impl NodeNameValidation {
    fn from_violation(violation: Violation) -> Self {
        match violation {
            Violation::IsEmptyString => Self::IsEmptyString,
            Violation::StartsWithNumber | Violation::NameTokenStartsWithNumber => {
                Self::StartsWithNumber
            }
            Violation::TooLong => Self::TooLong,
            // Separators are plain unallowed characters for a node name.
            Violation::ContainsUnallowedCharacters
            | Violation::NotAbsolute
            | Violation::EndsWithForwardSlash
            | Violation::ContainsRepeatedForwardSlash => Self::ContainsUnallowedCharacters,
        }
    }
}

const NODE_NAME_GRAMMAR: Grammar = Grammar {
    max_length: MAX_NODE_NAME_LENGTH,
    allow_separators: false,
    allow_root: false,
    rules: TOKEN_RULES,
};

/// Validate a node name: a single token of alphanumerics and `_` that does
/// not start with a digit.
///
/// The character scan covers the whole name before the leading digit is
/// looked at, so `"4 bad"` reports the space at index 1.
pub fn validate_node_name(node_name: impl AsRef<[u8]>) -> Validation<NodeNameValidation> {
    Validation::run(
        &NODE_NAME_GRAMMAR,
        node_name.as_ref(),
        NodeNameValidation::from_violation,
    )
}

pub fn node_name_validation_result_string(code: i32) -> Option<&'static str> {
    NodeNameValidation::description_of(code)
}

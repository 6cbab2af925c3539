// Copyright 2025 ZettaScale Technology
//
// C ABI for fully qualified topic name validation

use std::ffi::{c_char, c_int};

use rmw_z::TopicNameValidation;

use crate::ros::rmw_ret_t;
use crate::utils::{name_len, result_string, validate_into};

pub const RMW_TOPIC_VALID: c_int = TopicNameValidation::Valid as c_int;
pub const RMW_TOPIC_INVALID_IS_EMPTY_STRING: c_int = TopicNameValidation::IsEmptyString as c_int;
pub const RMW_TOPIC_INVALID_NOT_ABSOLUTE: c_int = TopicNameValidation::NotAbsolute as c_int;
pub const RMW_TOPIC_INVALID_ENDS_WITH_FORWARD_SLASH: c_int =
    TopicNameValidation::EndsWithForwardSlash as c_int;
pub const RMW_TOPIC_INVALID_CONTAINS_UNALLOWED_CHARACTERS: c_int =
    TopicNameValidation::ContainsUnallowedCharacters as c_int;
pub const RMW_TOPIC_INVALID_CONTAINS_REPEATED_FORWARD_SLASH: c_int =
    TopicNameValidation::ContainsRepeatedForwardSlash as c_int;
pub const RMW_TOPIC_INVALID_NAME_TOKEN_STARTS_WITH_NUMBER: c_int =
    TopicNameValidation::NameTokenStartsWithNumber as c_int;
pub const RMW_TOPIC_INVALID_TOO_LONG: c_int = TopicNameValidation::TooLong as c_int;

pub const RMW_TOPIC_MAX_NAME_LENGTH: usize = rmw_z::MAX_TOPIC_NAME_LENGTH;

/// Validate a NUL terminated fully qualified topic name.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rmw_validate_full_topic_name(
    topic_name: *const c_char,
    validation_result: *mut c_int,
    invalid_index: *mut usize,
) -> rmw_ret_t {
    unsafe {
        rmw_validate_full_topic_name_with_size(
            topic_name,
            name_len(topic_name),
            validation_result,
            invalid_index,
        )
    }
}

/// Validate the first `topic_name_length` bytes of `topic_name`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rmw_validate_full_topic_name_with_size(
    topic_name: *const c_char,
    topic_name_length: usize,
    validation_result: *mut c_int,
    invalid_index: *mut usize,
) -> rmw_ret_t {
    unsafe {
        validate_into(
            "rmw_validate_full_topic_name",
            topic_name,
            topic_name_length,
            validation_result,
            invalid_index,
            |name: &[u8]| rmw_z::validate_full_topic_name(name),
        )
    }
}

/// Get a string description of a validation result, null if it is valid.
#[unsafe(no_mangle)]
pub extern "C" fn rmw_full_topic_name_validation_result_string(
    validation_result: c_int,
) -> *const c_char {
    result_string::<TopicNameValidation>(validation_result)
}

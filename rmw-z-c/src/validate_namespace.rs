// Copyright 2025 ZettaScale Technology
//
// C ABI for namespace validation

use std::ffi::{c_char, c_int};

use rmw_z::NamespaceValidation;

use crate::ros::rmw_ret_t;
use crate::utils::{name_len, result_string, validate_into};

pub const RMW_NAMESPACE_VALID: c_int = NamespaceValidation::Valid as c_int;
pub const RMW_NAMESPACE_INVALID_IS_EMPTY_STRING: c_int =
    NamespaceValidation::IsEmptyString as c_int;
pub const RMW_NAMESPACE_INVALID_NOT_ABSOLUTE: c_int = NamespaceValidation::NotAbsolute as c_int;
pub const RMW_NAMESPACE_INVALID_ENDS_WITH_FORWARD_SLASH: c_int =
    NamespaceValidation::EndsWithForwardSlash as c_int;
pub const RMW_NAMESPACE_INVALID_CONTAINS_UNALLOWED_CHARACTERS: c_int =
    NamespaceValidation::ContainsUnallowedCharacters as c_int;
pub const RMW_NAMESPACE_INVALID_CONTAINS_REPEATED_FORWARD_SLASH: c_int =
    NamespaceValidation::ContainsRepeatedForwardSlash as c_int;
pub const RMW_NAMESPACE_INVALID_NAME_TOKEN_STARTS_WITH_NUMBER: c_int =
    NamespaceValidation::NameTokenStartsWithNumber as c_int;
pub const RMW_NAMESPACE_INVALID_TOO_LONG: c_int = NamespaceValidation::TooLong as c_int;

pub const RMW_NAMESPACE_MAX_LENGTH: usize = rmw_z::MAX_NAMESPACE_LENGTH;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn rmw_validate_namespace(
    namespace_: *const c_char,
    validation_result: *mut c_int,
    invalid_index: *mut usize,
) -> rmw_ret_t {
    unsafe {
        rmw_validate_namespace_with_size(
            namespace_,
            name_len(namespace_),
            validation_result,
            invalid_index,
        )
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn rmw_validate_namespace_with_size(
    namespace_: *const c_char,
    namespace_length: usize,
    validation_result: *mut c_int,
    invalid_index: *mut usize,
) -> rmw_ret_t {
    unsafe {
        validate_into(
            "rmw_validate_namespace",
            namespace_,
            namespace_length,
            validation_result,
            invalid_index,
            |name: &[u8]| rmw_z::validate_namespace(name),
        )
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn rmw_namespace_validation_result_string(
    validation_result: c_int,
) -> *const c_char {
    result_string::<NamespaceValidation>(validation_result)
}

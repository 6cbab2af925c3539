// Copyright 2025 ZettaScale Technology
//
// C ABI for node name validation

use std::ffi::{c_char, c_int};

use rmw_z::NodeNameValidation;

use crate::ros::rmw_ret_t;
use crate::utils::{name_len, result_string, validate_into};

pub const RMW_NODE_NAME_VALID: c_int = NodeNameValidation::Valid as c_int;
pub const RMW_NODE_NAME_INVALID_IS_EMPTY_STRING: c_int =
    NodeNameValidation::IsEmptyString as c_int;
pub const RMW_NODE_NAME_INVALID_CONTAINS_UNALLOWED_CHARACTERS: c_int =
    NodeNameValidation::ContainsUnallowedCharacters as c_int;
pub const RMW_NODE_NAME_INVALID_STARTS_WITH_NUMBER: c_int =
    NodeNameValidation::StartsWithNumber as c_int;
pub const RMW_NODE_NAME_INVALID_TOO_LONG: c_int = NodeNameValidation::TooLong as c_int;

pub const RMW_NODE_NAME_MAX_NAME_LENGTH: usize = rmw_z::MAX_NODE_NAME_LENGTH;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn rmw_validate_node_name(
    node_name: *const c_char,
    validation_result: *mut c_int,
    invalid_index: *mut usize,
) -> rmw_ret_t {
    unsafe {
        rmw_validate_node_name_with_size(
            node_name,
            name_len(node_name),
            validation_result,
            invalid_index,
        )
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn rmw_validate_node_name_with_size(
    node_name: *const c_char,
    node_name_length: usize,
    validation_result: *mut c_int,
    invalid_index: *mut usize,
) -> rmw_ret_t {
    unsafe {
        validate_into(
            "rmw_validate_node_name",
            node_name,
            node_name_length,
            validation_result,
            invalid_index,
            |name: &[u8]| rmw_z::validate_node_name(name),
        )
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn rmw_node_name_validation_result_string(
    validation_result: c_int,
) -> *const c_char {
    result_string::<NodeNameValidation>(validation_result)
}

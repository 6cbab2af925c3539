// Copyright 2025 ZettaScale Technology
//
// Tests for the C node name validator

use std::{ffi::CString, ptr};

use rmw_z_c::{
    ros::{RMW_RET_INVALID_ARGUMENT, RMW_RET_OK},
    validate_node_name::*,
};

#[test]
fn test_normal() {
    unsafe {
        let mut validation_result: i32 = -1;
        let mut invalid_index: usize = 42;
        let ret = rmw_validate_node_name(
            c"node_name".as_ptr(),
            &mut validation_result,
            &mut invalid_index,
        );
        assert_eq!(RMW_RET_OK, ret);
        assert_eq!(RMW_NODE_NAME_VALID, validation_result);
        assert_eq!(42, invalid_index);
        assert_eq!(
            ptr::null(),
            rmw_node_name_validation_result_string(validation_result)
        );
    }
}

#[test]
fn test_invalid_arguments() {
    unsafe {
        let mut validation_result: i32 = -1;
        let ret = rmw_validate_node_name(ptr::null(), &mut validation_result, ptr::null_mut());
        assert_eq!(RMW_RET_INVALID_ARGUMENT, ret);
        assert_eq!(-1, validation_result);

        let ret = rmw_validate_node_name(c"node".as_ptr(), ptr::null_mut(), ptr::null_mut());
        assert_eq!(RMW_RET_INVALID_ARGUMENT, ret);
    }
}

#[test]
fn test_various_invalid_node_names() {
    let long_name = "a".repeat(RMW_NODE_NAME_MAX_NAME_LENGTH + 1);
    let node_names_that_should_fail = vec![
        ("", RMW_NODE_NAME_INVALID_IS_EMPTY_STRING, 0),
        ("42node", RMW_NODE_NAME_INVALID_STARTS_WITH_NUMBER, 0),
        ("4 bad", RMW_NODE_NAME_INVALID_CONTAINS_UNALLOWED_CHARACTERS, 1),
        ("/node", RMW_NODE_NAME_INVALID_CONTAINS_UNALLOWED_CHARACTERS, 0),
        ("my-node", RMW_NODE_NAME_INVALID_CONTAINS_UNALLOWED_CHARACTERS, 2),
        (long_name.as_str(), RMW_NODE_NAME_INVALID_TOO_LONG, 254),
    ];

    unsafe {
        for (name, expected_result, expected_index) in node_names_that_should_fail {
            let mut validation_result: i32 = -1;
            let mut invalid_index: usize = 42;
            let name_cstr = CString::new(name).unwrap();
            let ret = rmw_validate_node_name(
                name_cstr.as_ptr(),
                &mut validation_result,
                &mut invalid_index,
            );
            assert_eq!(RMW_RET_OK, ret);
            assert_eq!(
                expected_result, validation_result,
                "'{}' should have failed with '{}' but got '{}'",
                name, expected_result, validation_result
            );
            assert_eq!(expected_index, invalid_index, "unexpected index for '{}'", name);
            assert_ne!(
                ptr::null(),
                rmw_node_name_validation_result_string(validation_result)
            );
        }
    }
}

#[test]
fn test_with_size() {
    unsafe {
        let bytes = b"talker_1 extra";
        let mut validation_result: i32 = -1;
        let ret = rmw_validate_node_name_with_size(
            bytes.as_ptr().cast(),
            8,
            &mut validation_result,
            ptr::null_mut(),
        );
        assert_eq!(RMW_RET_OK, ret);
        assert_eq!(RMW_NODE_NAME_VALID, validation_result);
    }
}

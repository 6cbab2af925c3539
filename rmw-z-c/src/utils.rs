// Copyright 2025 ZettaScale Technology
//
// Shared plumbing of the C validators

use std::ffi::{CStr, c_char, c_int};
use std::ptr;

use rmw_z::{RmwError, Validation, ValidationResult};

use crate::ros::rmw_ret_t;

/// Run a body returning `rmw_z::Result<()>` and turn its outcome into an
/// `rmw_ret_t`, logging the error.
macro_rules! rmwz_try {
    ($fn_name:expr, $($body:tt)*) => {{
        let x = || -> rmw_z::Result<()> {
            $($body)*
            Ok(())
        };
        match x() {
            Ok(_) => $crate::ros::RMW_RET_OK as _,
            Err(rmw_z::RmwError::InvalidArgument(reason)) => {
                tracing::error!("{}: {reason}", $fn_name);
                $crate::ros::RMW_RET_INVALID_ARGUMENT as _
            }
            Err(err) => {
                tracing::error!("{}: {err}", $fn_name);
                $crate::ros::RMW_RET_ERROR as _
            }
        }
    }};
}

/// Length of a NUL terminated name.
///
/// A null pointer yields 0; the sized validators reject it afterwards.
///
/// # Safety
/// A non-null `name` must point to a valid NUL terminated string.
pub(crate) unsafe fn name_len(name: *const c_char) -> usize {
    if name.is_null() {
        return 0;
    }
    unsafe { CStr::from_ptr(name) }.to_bytes().len()
}

/// Run `validate` over `len` bytes at `name` and write the outcome.
///
/// `invalid_index` is optional and only written for an invalid name, so a
/// caller's value survives a successful validation.
///
/// # Safety
/// A non-null `name` must be readable for `len` bytes. Non-null output
/// pointers must be valid for writes.
pub(crate) unsafe fn validate_into<R: ValidationResult>(
    fn_name: &'static str,
    name: *const c_char,
    len: usize,
    validation_result: *mut c_int,
    invalid_index: *mut usize,
    validate: fn(&[u8]) -> Validation<R>,
) -> rmw_ret_t {
    rmwz_try!(fn_name, {
        if name.is_null() {
            return Err(RmwError::InvalidArgument("name argument is null"));
        }
        if validation_result.is_null() {
            return Err(RmwError::InvalidArgument("validation_result argument is null"));
        }

        let bytes = unsafe { std::slice::from_raw_parts(name.cast::<u8>(), len) };
        let validation = validate(bytes);
        tracing::trace!(
            "{fn_name}: {:?} -> {:?} at {:?}",
            String::from_utf8_lossy(bytes),
            validation.result,
            validation.invalid_index
        );

        unsafe { *validation_result = validation.result.code() };
        if let Some(index) = validation.invalid_index {
            if !invalid_index.is_null() {
                unsafe { *invalid_index = index };
            }
        }
    })
}

/// Static description of a raw result code, null when it means valid.
pub(crate) fn result_string<R: ValidationResult>(validation_result: c_int) -> *const c_char {
    R::c_description_of(validation_result).map_or(ptr::null(), CStr::as_ptr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_len() {
        let name = c"/chatter";
        assert_eq!(unsafe { name_len(name.as_ptr()) }, 8);
        assert_eq!(unsafe { name_len(c"".as_ptr()) }, 0);
        assert_eq!(unsafe { name_len(ptr::null()) }, 0);
    }

    #[test]
    fn test_result_string() {
        use rmw_z::NodeNameValidation;

        assert!(result_string::<NodeNameValidation>(0).is_null());
        let text = unsafe { CStr::from_ptr(result_string::<NodeNameValidation>(3)) };
        assert_eq!(text, c"node name must not start with a number");
        let text = unsafe { CStr::from_ptr(result_string::<NodeNameValidation>(5)) };
        assert_eq!(text, c"unknown result code for rmw node name validation");
    }
}

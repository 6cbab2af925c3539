// Copyright 2025 ZettaScale Technology
//
// rmw return codes

#![allow(non_camel_case_types)]

pub type rmw_ret_t = i32;

pub const RMW_RET_OK: rmw_ret_t = 0;
pub const RMW_RET_ERROR: rmw_ret_t = 1;
pub const RMW_RET_INVALID_ARGUMENT: rmw_ret_t = 11;

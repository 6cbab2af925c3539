// Copyright 2025 ZettaScale Technology

//! C ABI for the rmw-z name validators.
//!
//! Every validator reports through output parameters and returns an
//! `rmw_ret_t`. The return code only signals misuse of the API (null name or
//! null `validation_result`); an invalid name is a successful call whose
//! `validation_result` says what is wrong.

#![allow(clippy::missing_safety_doc)]

pub mod ros;
mod utils;

pub mod validate_full_topic_name;
pub mod validate_namespace;
pub mod validate_node_name;

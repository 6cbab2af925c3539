// Copyright 2025 ZettaScale Technology

//! ROS 2 resource name validation for rmw-z.
//!
//! Three grammars are provided, all built on the same ordered rule engine:
//!
//! - [`validate_full_topic_name`]: absolute, `/` separated topic names.
//! - [`validate_namespace`]: topic names that may also be `/` alone, with a
//!   shorter length budget.
//! - [`validate_node_name`]: a single token without separators.
//!
//! Each call returns a [`Validation`] holding the first rule violated and the
//! byte offset responsible for it. Character classes are ASCII only and do not
//! depend on the process locale. The too long outcome is always evaluated
//! last, so it can be treated as a warning with
//! [`Validation::is_valid_ignoring_length`].
//!
//! # Example
//!
//! ```rust
//! use rmw_z::{NodeNameValidation, validate_full_topic_name, validate_node_name};
//!
//! assert!(validate_full_topic_name("/robot/cmd_vel").is_valid());
//!
//! let v = validate_node_name("42node");
//! assert_eq!(v.result, NodeNameValidation::StartsWithNumber);
//! assert_eq!(v.invalid_index, Some(0));
//! ```

pub mod ascii;
pub mod error;
pub mod namespace;
pub mod node_name;
pub mod report;
mod rule;
pub mod topic_name;
pub mod validation;

pub use error::{Result, RmwError};
pub use namespace::{
    MAX_NAMESPACE_LENGTH, NamespaceValidation, namespace_validation_result_string,
    validate_namespace,
};
pub use node_name::{
    MAX_NODE_NAME_LENGTH, NodeNameValidation, node_name_validation_result_string,
    validate_node_name,
};
pub use report::{NameKind, Report};
pub use topic_name::{
    MAX_TOPIC_NAME_LENGTH, TopicNameValidation, topic_name_validation_result_string,
    validate_full_topic_name,
};
pub use validation::{Validation, ValidationResult};

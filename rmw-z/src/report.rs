// Copyright 2025 ZettaScale Technology
//
// Grammar independent reporting used by the command line checker

use serde::Serialize;

use crate::validation::{Validation, ValidationResult};
use crate::{validate_full_topic_name, validate_namespace, validate_node_name};

/// Which grammar a name is checked against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NameKind {
    #[default]
    Topic,
    Namespace,
    Node,
}

impl NameKind {
    pub fn validate(self, name: impl AsRef<[u8]>) -> Report {
        match self {
            Self::Topic => Report::new(self, &validate_full_topic_name(name)),
            Self::Namespace => Report::new(self, &validate_namespace(name)),
            Self::Node => Report::new(self, &validate_node_name(name)),
        }
    }
}

/// Erased view of a [`Validation`], whatever grammar produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub kind: NameKind,
    pub valid: bool,
    pub code: i32,
    pub result: String,
    pub description: Option<&'static str>,
    pub invalid_index: Option<usize>,
    #[serde(skip)]
    pub too_long: bool,
}

impl Report {
    fn new<R: ValidationResult>(kind: NameKind, validation: &Validation<R>) -> Self {
        Self {
            kind,
            valid: validation.is_valid(),
            code: validation.result.code(),
            result: format!("{:?}", validation.result),
            description: validation.description(),
            invalid_index: validation.invalid_index,
            too_long: validation.is_too_long(),
        }
    }
}

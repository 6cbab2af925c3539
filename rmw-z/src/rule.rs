// Copyright 2025 ZettaScale Technology
//
// Ordered rule engine shared by the topic, namespace and node name grammars

use crate::ascii::{SEPARATOR, is_digit, is_name_char, is_separator};

/// Grammar-independent reason a name was rejected.
///
/// Each public result enum maps these onto its own codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Violation {
    IsEmptyString,
    NotAbsolute,
    EndsWithForwardSlash,
    ContainsUnallowedCharacters,
    ContainsRepeatedForwardSlash,
    NameTokenStartsWithNumber,
    StartsWithNumber,
    TooLong,
}

/// A rule inspects the whole name and reports the first position it rejects.
pub(crate) type Rule = fn(&Grammar, &[u8]) -> Option<(Violation, usize)>;

/// One instance of the name grammar.
///
/// `rules` is evaluated in order and the first rule that fires decides the
/// outcome. The length rule must stay last so that an over-length name is only
/// reported as such once it is otherwise well formed.
#[derive(Debug)]
pub(crate) struct Grammar {
    pub max_length: usize,
    /// `/` is a token separator rather than an unallowed character.
    pub allow_separators: bool,
    /// The single byte name `/` is accepted before any rule runs.
    pub allow_root: bool,
    pub rules: &'static [Rule],
}

impl Grammar {
    pub fn check(&self, name: &[u8]) -> Option<(Violation, usize)> {
        if self.allow_root && name == [SEPARATOR] {
            return None;
        }
        self.rules.iter().find_map(|rule| rule(self, name))
    }
}

pub(crate) const FULLY_QUALIFIED_RULES: &[Rule] = &[
    is_empty,
    not_absolute,
    ends_with_separator,
    unallowed_character,
    repeated_separator_or_numeric_token,
    too_long,
];

pub(crate) const TOKEN_RULES: &[Rule] = &[is_empty, unallowed_character, leading_digit, too_long];

fn is_empty(_: &Grammar, name: &[u8]) -> Option<(Violation, usize)> {
    name.is_empty().then_some((Violation::IsEmptyString, 0))
}

fn not_absolute(_: &Grammar, name: &[u8]) -> Option<(Violation, usize)> {
    match name.first() {
        Some(&c) if is_separator(c) => None,
        _ => Some((Violation::NotAbsolute, 0)),
    }
}

fn ends_with_separator(_: &Grammar, name: &[u8]) -> Option<(Violation, usize)> {
    match name.last() {
        Some(&c) if is_separator(c) => Some((Violation::EndsWithForwardSlash, name.len() - 1)),
        _ => None,
    }
}

fn unallowed_character(grammar: &Grammar, name: &[u8]) -> Option<(Violation, usize)> {
    name.iter()
        .position(|&c| !(is_name_char(c) || (grammar.allow_separators && is_separator(c))))
        .map(|i| (Violation::ContainsUnallowedCharacters, i))
}

// Both conditions are looked for in the same left to right pass so whichever
// occurs first wins.
fn repeated_separator_or_numeric_token(_: &Grammar, name: &[u8]) -> Option<(Violation, usize)> {
    name.windows(2).enumerate().find_map(|(i, pair)| {
        if !is_separator(pair[0]) {
            None
        } else if is_separator(pair[1]) {
            Some((Violation::ContainsRepeatedForwardSlash, i + 1))
        } else if is_digit(pair[1]) {
            Some((Violation::NameTokenStartsWithNumber, i + 1))
        } else {
            None
        }
    })
}

fn leading_digit(_: &Grammar, name: &[u8]) -> Option<(Violation, usize)> {
    match name.first() {
        Some(&c) if is_digit(c) => Some((Violation::StartsWithNumber, 0)),
        _ => None,
    }
}

fn too_long(grammar: &Grammar, name: &[u8]) -> Option<(Violation, usize)> {
    (name.len() > grammar.max_length).then(|| (Violation::TooLong, grammar.max_length - 1))
}

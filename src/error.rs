// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;
use thiserror::Error;

/// Classification of a failed numeric conversion.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum NumKind {
    /// The token was not a well-formed numeric literal.
    Syntax,
    /// The token was well-formed but did not fit the target type.
    Range,
}

impl fmt::Display for NumKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            NumKind::Syntax => "syntax",
            NumKind::Range => "range",
        };

        write!(f, "{}", name)
    }
}

/// Broad classification of an [Error], used to match errors without
/// inspecting message text.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum Kind {
    /// A required value or argument was absent.
    Missing,
    /// A flag (or a single-value flag's value) appeared more times than
    /// permitted.
    Ambiguous,
    /// Tokens remained once the full argument grammar had been applied.
    Unexpected,
    /// A token was not a well-formed numeric literal.
    Syntax,
    /// A numeric literal did not fit the target type.
    Range,
}

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Structural errors (malformed invocation)
    //------------------------------
    /// A positional argument was requested but no tokens remain.
    #[error("missing argument: '{0}'")]
    MissingPositional(String),

    /// Tokens remained once the full argument grammar had been applied.
    #[error("unexpected argument: [{0}]")]
    Unexpected(String),

    //------------------------------
    // Flag-value errors (detected while scanning)
    //------------------------------
    /// A flag that takes a value was the last token on the command line.
    #[error("missing argument: '{0} value'")]
    MissingValue(String),

    /// A single-value flag was given a second (or later) value.
    #[error("ambiguous argument: '{flag} {value}' already set to: '{first}'")]
    AmbiguousValue {
        /// The flag descriptor as the caller wrote it.
        flag: String,
        /// The value supplied by the repeated occurrence.
        value: String,
        /// The value recorded for the first occurrence (retained).
        first: String,
    },

    /// A flag expected at most once appeared several times.
    #[error("ambiguous argument: \"{flag}\" found {count} times")]
    AmbiguousFlag {
        /// The flag descriptor as the caller wrote it.
        flag: String,
        /// How many times the flag actually appeared.
        count: usize,
    },

    //------------------------------
    // Numeric conversion errors
    //------------------------------
    /// A token failed conversion to the requested numeric type.
    #[error("invalid {type_name}: {num_kind}: {name}: '{token}'")]
    InvalidNumber {
        /// Name of the target type (`"i64"`, `"u8"`, `"f32"`, ...).
        type_name: &'static str,
        /// Whether the failure was one of syntax or range.
        num_kind: NumKind,
        /// The flag descriptor or positional name being converted.
        name: String,
        /// The offending token, unstripped.
        token: String,
    },

    /// Two or more failures discovered during a single pass, in
    /// discovery order.
    #[error("{}", fmt_chain(.0))]
    Chain(Vec<Error>),
}

/// Render a chain by joining each member's message, preserving order.
fn fmt_chain(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<String>>()
        .join(": ")
}

impl Error {
    /// The broad classification of this error.
    ///
    /// For a [Error::Chain], the kind of the first (earliest discovered)
    /// member is returned; use [Error::is()] to query the whole chain.
    pub fn kind(&self) -> Kind {
        match self {
            Error::MissingPositional(_) | Error::MissingValue(_) => Kind::Missing,
            Error::AmbiguousValue { .. } | Error::AmbiguousFlag { .. } => Kind::Ambiguous,
            Error::Unexpected(_) => Kind::Unexpected,
            Error::InvalidNumber { num_kind, .. } => match num_kind {
                NumKind::Syntax => Kind::Syntax,
                NumKind::Range => Kind::Range,
            },
            // A chain is never empty: see Errors::into_error().
            Error::Chain(errors) => errors[0].kind(),
        }
    }

    /// Determine if this error, or any error chained within it, has the
    /// specified kind.
    pub fn is(&self, kind: Kind) -> bool {
        match self {
            Error::Chain(errors) => errors.iter().any(|e| e.is(kind)),
            _ => self.kind() == kind,
        }
    }

    /// The name of the numeric type a conversion failed for, if this
    /// error (or any error chained within it) is a conversion failure.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Error::InvalidNumber { type_name, .. } => Some(type_name),
            Error::Chain(errors) => errors.iter().find_map(|e| e.type_name()),
            _ => None,
        }
    }

    /// The individual errors in discovery order.
    ///
    /// A lone error yields itself as the only element.
    pub fn errors(&self) -> Vec<&Error> {
        match self {
            Error::Chain(errors) => errors.iter().collect(),
            _ => vec![self],
        }
    }
}

/// Collects the failures discovered across one scan (or across a whole
/// sequence of extraction calls) so that a single pass can report every
/// defect rather than just the first.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Errors(Vec<Error>);

impl Errors {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Errors::default()
    }

    /// Determine if any error has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Record a failure, preserving discovery order.
    ///
    /// Pushing a chain splices its members in, keeping the accumulated
    /// list flat.
    pub fn push(&mut self, error: Error) {
        match error {
            Error::Chain(errors) => self.0.extend(errors),
            _ => self.0.push(error),
        }
    }

    /// Consume the accumulator: [None] if nothing failed, the lone error
    /// if exactly one did, or an [Error::Chain] preserving discovery
    /// order otherwise.
    pub fn into_error(mut self) -> Option<Error> {
        match self.0.len() {
            0 => None,
            1 => Some(self.0.remove(0)),
            _ => Some(Error::Chain(self.0)),
        }
    }

    /// Consume the accumulator, turning the recorded errors (if any) into
    /// the failure side of a [Result].
    pub fn into_result<T>(self, value: T) -> Result<T> {
        match self.into_error() {
            Some(e) => Err(e),
            None => Ok(value),
        }
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

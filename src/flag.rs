// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

/// Characters stripped from either end of a descriptor before the alias
/// list is read. They let callers write a descriptor the way it would
/// appear in a usage synopsis (`"[-n name]"`, `"{-v | --verbose}"`).
const DECOR_CHARS: &[char] = &['[', ']', '{', '}', '.'];

/// Separator between alias spellings in a descriptor.
const ALIAS_SEPARATOR: char = '|';

/// A flag descriptor: one or more equivalent spellings of a command-line
/// switch, optionally annotated with a value-name hint.
///
/// The descriptor mini-grammar is parsed once, at construction:
///
/// - Enclosing `[`, `]`, `{`, `}` and `.` characters are stripped.
/// - The remainder is split on `|` and each alias is trimmed.
/// - If the *last* alias contains a space, it is truncated at the first
///   space and the remainder is kept as the value-name hint (so
///   `"-n theName"` declares the alias `-n` with hint `theName`).
///
/// Matching is exact and case-sensitive: no prefix matching, no
/// clustering, no `=`-joined values.
///
/// # Examples
///
/// ```rust
/// use argex::Flag;
///
/// let flag = Flag::new("[-v | --verbose]");
///
/// assert!(flag.matches("-v"));
/// assert!(flag.matches("--verbose"));
/// assert!(!flag.matches("--verbos"));
///
/// let flag = Flag::new("-n theName");
///
/// assert!(flag.matches("-n"));
/// assert_eq!(flag.value_hint(), Some("theName"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Flag {
    /// The descriptor as the caller wrote it (whitespace-trimmed).
    /// This is the text shown in error messages.
    text: String,

    /// The alias spellings compared against raw tokens.
    aliases: Vec<String>,

    /// Optional placeholder name for the flag's value.
    value_hint: Option<String>,
}

impl Flag {
    /// Parse a descriptor string.
    pub fn new(descriptor: &str) -> Self {
        let text = descriptor.trim().to_string();

        let stripped = text.trim_matches(|c| DECOR_CHARS.contains(&c));

        let mut aliases: Vec<String> = stripped
            .split(ALIAS_SEPARATOR)
            .map(|a| a.trim().to_string())
            .collect();

        let mut value_hint = None;

        // Only the final alias may carry an inline value-name hint.
        if let Some(last) = aliases.last_mut() {
            if let Some(space) = last.find(' ') {
                let hint = last[space + 1..].trim();

                if !hint.is_empty() {
                    value_hint = Some(hint.to_string());
                }

                last.truncate(space);
            }
        }

        Flag {
            text,
            aliases,
            value_hint,
        }
    }

    /// Determine if a raw token is an occurrence of this flag.
    pub fn matches(&self, token: &str) -> bool {
        self.aliases.iter().any(|a| a == token)
    }

    /// The alias spellings of this flag.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The value-name hint, if the descriptor declared one.
    pub fn value_hint(&self) -> Option<&str> {
        self.value_hint.as_deref()
    }

    /// The descriptor text as the caller wrote it.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Flag {
    fn from(descriptor: &str) -> Self {
        Flag::new(descriptor)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::mem;

use crate::error::{Error, Errors, Result};
use crate::flag::Flag;
use crate::num::{self, Number};

/// Look up an environment variable for the settings resolver.
///
/// An empty name means "no environment tier"; a set-but-empty variable
/// still counts as set.
fn env_value(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    env::var(name).ok()
}

/// The ordered list of unconsumed command-line tokens.
///
/// Every extraction operation removes the tokens it consumes, in place,
/// and never reorders the survivors. A program assembles its argument
/// grammar by chaining extraction calls against one `Tokens` value and
/// finally calling [Tokens::assert_empty()].
///
/// Operations differ in what they leave behind on failure:
///
/// - [Tokens::extract_value()] leaves the *cleaned* list (every
///   occurrence and its value removed) so later extractions still work.
/// - [Tokens::extract_values()] and the setting resolvers leave the
///   *original* list untouched, so the caller can report against the
///   pristine input.
///
/// # Examples
///
/// ```rust
/// use argex::{Result, Tokens};
///
/// fn run() -> Result<()> {
///     let mut tokens = Tokens::from(vec!["-v", "-n", "foo", "input"]);
///
///     let verbose = tokens.is_present_once("-v | --verbose")?;
///     let name = tokens.extract_value("-n")?;
///     let input = tokens.consume_last("INPUT")?;
///
///     assert!(verbose);
///     assert_eq!(name.as_deref(), Some("foo"));
///     assert_eq!(input, "input");
///
///     Ok(())
/// }
///
/// run().unwrap();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tokens(Vec<String>);

impl Tokens {
    /// Create a token list from explicit values.
    pub fn new(tokens: Vec<String>) -> Self {
        Tokens(tokens)
    }

    /// Create a token list from the process's command-line, with the
    /// program name (the first argument) removed.
    pub fn from_env() -> Self {
        let mut args: Vec<String> = env::args().collect();

        // Remove program name
        let _ = args.remove(0);

        Tokens(args)
    }

    /// Returns the number of unconsumed tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Determine if any tokens remain.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The unconsumed tokens, in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the list, yielding the remaining tokens.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    //------------------------------
    // Scanning primitives
    //------------------------------

    /// Remove every token matching the flag, returning how many were
    /// found. Never errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argex::Tokens;
    ///
    /// let mut tokens = Tokens::from(vec!["-v", "arg1", "-v", "arg2", "-v"]);
    ///
    /// assert_eq!(tokens.match_count("-v"), 3);
    /// assert_eq!(tokens.as_slice(), ["arg1", "arg2"]);
    /// ```
    pub fn match_count(&mut self, descriptor: &str) -> usize {
        self.match_count_flag(&Flag::new(descriptor))
    }

    fn match_count_flag(&mut self, flag: &Flag) -> usize {
        let mut count = 0;

        self.0.retain(|t| {
            if flag.matches(t) {
                count += 1;
                false
            } else {
                true
            }
        });

        count
    }

    /// Determine if the flag appears exactly once, removing every
    /// occurrence.
    ///
    /// A count of zero or one yields `Ok(false)` / `Ok(true)`; more than
    /// one is an ambiguous-argument error. Even then, the matches have
    /// been removed.
    pub fn is_present_once(&mut self, descriptor: &str) -> Result<bool> {
        let flag = Flag::new(descriptor);

        let count = self.match_count_flag(&flag);

        match count {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::AmbiguousFlag {
                flag: flag.text().to_string(),
                count,
            }),
        }
    }

    /// Extract the value paired with a single-value flag.
    ///
    /// The scan walks the whole list, consuming every occurrence of the
    /// flag together with the token that follows it:
    ///
    /// - `Ok(None)` if the flag never appears;
    /// - `Ok(Some(value))` if it appears exactly once with a value;
    /// - on a trailing occurrence with no value, a missing-argument
    ///   error is recorded;
    /// - on a repeated occurrence, an ambiguous-argument error is
    ///   recorded (the first value is the one "already set").
    ///
    /// The scan is not fail-fast: every defect found is reported, in
    /// discovery order, as one combined error. On error the token list
    /// is left in its cleaned state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argex::Tokens;
    ///
    /// let mut tokens = Tokens::from(vec!["-n", "foo", "arg1"]);
    ///
    /// assert_eq!(tokens.extract_value("-n").unwrap(), Some("foo".into()));
    /// assert_eq!(tokens.as_slice(), ["arg1"]);
    /// ```
    pub fn extract_value(&mut self, descriptor: &str) -> Result<Option<String>> {
        self.extract_value_flag(&Flag::new(descriptor))
    }

    fn extract_value_flag(&mut self, flag: &Flag) -> Result<Option<String>> {
        let mut errors = Errors::new();
        let mut value: Option<String> = None;
        let mut kept = Vec::with_capacity(self.0.len());

        let mut iter = mem::take(&mut self.0).into_iter();

        while let Some(token) = iter.next() {
            if !flag.matches(&token) {
                kept.push(token);
                continue;
            }

            match iter.next() {
                None => errors.push(Error::MissingValue(flag.text().to_string())),
                Some(next) => match &value {
                    None => value = Some(next),
                    Some(first) => errors.push(Error::AmbiguousValue {
                        flag: flag.text().to_string(),
                        value: next,
                        first: first.clone(),
                    }),
                },
            }
        }

        self.0 = kept;

        errors.into_result(value)
    }

    /// Extract the values paired with every occurrence of a flag, in
    /// order.
    ///
    /// A trailing occurrence with no following value is a
    /// missing-argument error; on any error the token list is left
    /// *unmodified* (unlike [Tokens::extract_value()], which leaves the
    /// cleaned list).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argex::Tokens;
    ///
    /// let mut tokens = Tokens::from(vec!["-a", "foo", "x", "-a", "bar"]);
    ///
    /// let values = tokens.extract_values("-a").unwrap();
    ///
    /// assert_eq!(values, ["foo", "bar"]);
    /// assert_eq!(tokens.as_slice(), ["x"]);
    /// ```
    pub fn extract_values(&mut self, descriptor: &str) -> Result<Vec<String>> {
        self.extract_values_flag(&Flag::new(descriptor))
    }

    fn extract_values_flag(&mut self, flag: &Flag) -> Result<Vec<String>> {
        let mut values = Vec::new();
        let mut kept = Vec::new();

        let mut i = 0;

        while i < self.0.len() {
            let token = &self.0[i];

            if !flag.matches(token) {
                kept.push(token.clone());
                i += 1;
                continue;
            }

            // A trailing flag cannot have further occurrences after it,
            // so the first missing value ends the scan.
            if i + 1 == self.0.len() {
                return Err(Error::MissingValue(flag.text().to_string()));
            }

            values.push(self.0[i + 1].clone());
            i += 2;
        }

        self.0 = kept;

        Ok(values)
    }

    //------------------------------
    // Typed extraction
    //------------------------------

    /// Like [Tokens::extract_value()], but converting the extracted
    /// value with the numeric literal parser.
    ///
    /// The flag's descriptor text names the field in any conversion
    /// error. A conversion failure is an error even though a textual
    /// value was present; the token list stays cleaned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argex::Tokens;
    ///
    /// let mut tokens = Tokens::from(vec!["-p", "0x1F"]);
    ///
    /// let port: Option<u16> = tokens.extract_value_as("-p").unwrap();
    ///
    /// assert_eq!(port, Some(31));
    /// ```
    pub fn extract_value_as<T: Number>(&mut self, descriptor: &str) -> Result<Option<T>> {
        let flag = Flag::new(descriptor);

        let raw = self.extract_value_flag(&flag)?;

        match raw {
            None => Ok(None),
            Some(raw) => {
                let value = num::parse(flag.text(), &raw).map_err(Error::from)?;

                Ok(Some(value))
            }
        }
    }

    /// Like [Tokens::extract_values()], but converting every extracted
    /// value with the numeric literal parser.
    ///
    /// Every raw value is parsed even after one fails; all conversion
    /// failures are combined into one error, in order.
    pub fn extract_values_as<T: Number>(&mut self, descriptor: &str) -> Result<Vec<T>> {
        let flag = Flag::new(descriptor);

        let raws = self.extract_values_flag(&flag)?;

        let mut errors = Errors::new();
        let mut values = Vec::with_capacity(raws.len());

        for raw in &raws {
            match num::parse(flag.text(), raw) {
                Ok(v) => values.push(v),
                Err(e) => errors.push(e.into_error()),
            }
        }

        errors.into_result(values)
    }

    //------------------------------
    // Positional arguments
    //------------------------------

    /// Consume the next (first) token as a positional argument.
    ///
    /// `name` identifies the argument in the missing-argument error
    /// raised if no tokens remain.
    pub fn consume_next(&mut self, name: &str) -> Result<String> {
        if self.0.is_empty() {
            return Err(Error::MissingPositional(name.to_string()));
        }

        Ok(self.0.remove(0))
    }

    /// Like [Tokens::consume_next()], but converting the token with the
    /// numeric literal parser.
    pub fn consume_next_as<T: Number>(&mut self, name: &str) -> Result<T> {
        let raw = self.consume_next(name)?;

        num::parse(name, &raw).map_err(Error::from)
    }

    /// Consume the next token as the *final* positional argument: any
    /// tokens left after it make an unexpected-argument error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argex::Tokens;
    ///
    /// let mut tokens = Tokens::from(vec!["arg1", "arg2"]);
    ///
    /// let err = tokens.consume_last("TestArg").unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "unexpected argument: [arg2]");
    /// ```
    pub fn consume_last(&mut self, name: &str) -> Result<String> {
        let value = self.consume_next(name)?;

        self.assert_empty()?;

        Ok(value)
    }

    /// Like [Tokens::consume_last()], but converting the token with the
    /// numeric literal parser.
    pub fn consume_last_as<T: Number>(&mut self, name: &str) -> Result<T> {
        let raw = self.consume_last(name)?;

        num::parse(name, &raw).map_err(Error::from)
    }

    /// Assert that every token has been consumed.
    pub fn assert_empty(&self) -> Result<()> {
        if self.0.is_empty() {
            return Ok(());
        }

        Err(Error::Unexpected(self.0.join(" ")))
    }

    //------------------------------
    // Settings
    //------------------------------

    /// Resolve a setting with three-tier precedence: an explicit flag
    /// value overrides the environment variable, which overrides the
    /// default.
    ///
    /// The environment tier is only consulted when `env_var` is
    /// non-empty and the variable is set. On any extraction error the
    /// token list is left unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argex::Tokens;
    ///
    /// let mut tokens = Tokens::from(vec!["-t", "f"]);
    ///
    /// let value = tokens.resolve_setting("c", "", "-t").unwrap();
    ///
    /// assert_eq!(value, "f");
    /// assert!(tokens.is_empty());
    /// ```
    pub fn resolve_setting(
        &mut self,
        default: &str,
        env_var: &str,
        descriptor: &str,
    ) -> Result<String> {
        let flag = Flag::new(descriptor);

        let mut probe = self.clone();

        let value = match probe.extract_value_flag(&flag)? {
            Some(v) => v,
            None => match env_value(env_var) {
                Some(v) => v,
                None => default.to_string(),
            },
        };

        *self = probe;

        Ok(value)
    }

    /// Like [Tokens::resolve_setting()], for a numeric setting.
    ///
    /// The typed default is used as-is; a flag- or environment-sourced
    /// raw string is converted with the numeric literal parser, with the
    /// flag's descriptor text naming the field in any conversion error.
    /// On any error the token list is left unmodified.
    pub fn resolve_setting_as<T: Number>(
        &mut self,
        default: T,
        env_var: &str,
        descriptor: &str,
    ) -> Result<T> {
        let flag = Flag::new(descriptor);

        let mut probe = self.clone();

        let raw = match probe.extract_value_flag(&flag)? {
            Some(v) => Some(v),
            None => env_value(env_var),
        };

        let value = match raw {
            Some(raw) => num::parse(flag.text(), &raw).map_err(Error::from)?,
            None => default,
        };

        *self = probe;

        Ok(value)
    }
}

impl From<Vec<String>> for Tokens {
    fn from(tokens: Vec<String>) -> Self {
        Tokens(tokens)
    }
}

impl<'a> From<Vec<&'a str>> for Tokens {
    fn from(tokens: Vec<&'a str>) -> Self {
        Tokens(tokens.into_iter().map(String::from).collect())
    }
}

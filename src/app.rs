// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::io::Write;

use crate::error::{Errors, Result};
use crate::flag::Flag;
use crate::num::Number;
use crate::tokens::Tokens;

const USAGE_PREFIX_SPACES: &str = "    ";

/// String shown in the usage statement for an option with no value-name
/// hint.
const DEFAULT_VALUE_NAME: &str = "value";

/// What a registered usage entry describes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum EntryKind {
    /// A stand-alone flag (no value).
    Flag,
    /// A flag that takes a value.
    Option,
    /// A positional argument.
    Positional,
}

/// One line of the generated usage statement.
#[derive(Clone, Debug, Eq, PartialEq)]
struct UsageEntry {
    kind: EntryKind,
    /// Alias spellings (or the positional name), ready for display.
    display: String,
    /// Value placeholder for options.
    value_name: String,
    help: String,
}

impl UsageEntry {
    fn render(&self) -> String {
        let value = match self.kind {
            EntryKind::Option => format!(" <{}>", self.value_name),
            _ => "".into(),
        };

        let help: String = match self.help.is_empty() {
            false => format!(" # {}", self.help),
            true => "".into(),
        };

        format!("{}{}{}", self.display, value, help)
    }
}

/// Stateful wrapper around a [Tokens] list.
///
/// Where the [Tokens] operations each return a [Result], an `App`
/// accumulates every failure into a single combined error and hands back
/// plain values, so a program can read its entire argument grammar
/// without touching a [Result] until the final [App::finish()] call. As
/// a side effect of reading the grammar, the `App` learns enough to
/// generate a usage statement.
///
/// # Examples
///
/// ```rust
/// use argex::{App, Tokens};
///
/// let tokens = Tokens::from(vec!["-v", "-n", "foo", "input"]);
///
/// let mut app = App::new("myprog")
///     .version("0.1.0")
///     .summary("An example program")
///     .tokens(tokens);
///
/// let verbose = app.flag("-v | --verbose", "enable verbose mode");
/// let name = app.value("-n theName", "the name to use");
/// let input = app.positional("INPUT", "file to read");
///
/// assert!(verbose);
/// assert_eq!(name.as_deref(), Some("foo"));
/// assert_eq!(input.as_deref(), Some("input"));
///
/// app.finish().unwrap();
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct App {
    name: String,
    version: String,
    summary: String,
    notes: String,
    tokens: Tokens,
    usage: Vec<UsageEntry>,
    errors: Errors,
}

impl App {
    /// Create a new application object.
    pub fn new(name: &str) -> Self {
        App {
            name: name.into(),
            ..App::default()
        }
    }

    /// Specify the version of the program.
    pub fn version(self, version: &str) -> Self {
        App {
            version: version.into(),
            ..self
        }
    }

    /// Specify brief explanatory text for the program.
    pub fn summary(self, summary: &str) -> Self {
        App {
            summary: summary.into(),
            ..self
        }
    }

    /// Specify notes for the program.
    pub fn notes(self, notes: &str) -> Self {
        App {
            notes: notes.into(),
            ..self
        }
    }

    /// Specify the tokens to extract from (usually
    /// [Tokens::from_env()]).
    pub fn tokens(self, tokens: Tokens) -> Self {
        App { tokens, ..self }
    }

    fn record(&mut self, kind: EntryKind, descriptor: &str, help: &str) {
        let (display, value_name) = match kind {
            EntryKind::Positional => (descriptor.to_string(), "".to_string()),
            _ => {
                let flag = Flag::new(descriptor);

                (
                    flag.aliases().join(" | "),
                    flag.value_hint().unwrap_or(DEFAULT_VALUE_NAME).to_string(),
                )
            }
        };

        self.usage.push(UsageEntry {
            kind,
            display,
            value_name,
            help: help.into(),
        });
    }

    //------------------------------
    // Extraction calls
    //------------------------------

    /// Determine if a flag was specified (at most once).
    pub fn flag(&mut self, descriptor: &str, help: &str) -> bool {
        self.record(EntryKind::Flag, descriptor, help);

        match self.tokens.is_present_once(descriptor) {
            Ok(found) => found,
            Err(e) => {
                self.errors.push(e);
                false
            }
        }
    }

    /// Count how many times a flag was specified.
    pub fn flag_count(&mut self, descriptor: &str, help: &str) -> usize {
        self.record(EntryKind::Flag, descriptor, help);

        self.tokens.match_count(descriptor)
    }

    /// Extract the value of a single-value flag.
    pub fn value(&mut self, descriptor: &str, help: &str) -> Option<String> {
        self.record(EntryKind::Option, descriptor, help);

        match self.tokens.extract_value(descriptor) {
            Ok(v) => v,
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    /// Extract the value of a single-value flag, converted to a numeric
    /// type.
    pub fn value_as<T: Number>(&mut self, descriptor: &str, help: &str) -> Option<T> {
        self.record(EntryKind::Option, descriptor, help);

        match self.tokens.extract_value_as(descriptor) {
            Ok(v) => v,
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    /// Extract the values of a repeatable flag, in order.
    pub fn values(&mut self, descriptor: &str, help: &str) -> Vec<String> {
        self.record(EntryKind::Option, descriptor, help);

        match self.tokens.extract_values(descriptor) {
            Ok(v) => v,
            Err(e) => {
                self.errors.push(e);
                Vec::new()
            }
        }
    }

    /// Extract the values of a repeatable flag, converted to a numeric
    /// type.
    pub fn values_as<T: Number>(&mut self, descriptor: &str, help: &str) -> Vec<T> {
        self.record(EntryKind::Option, descriptor, help);

        match self.tokens.extract_values_as(descriptor) {
            Ok(v) => v,
            Err(e) => {
                self.errors.push(e);
                Vec::new()
            }
        }
    }

    /// Consume the next positional argument.
    pub fn positional(&mut self, name: &str, help: &str) -> Option<String> {
        self.record(EntryKind::Positional, name, help);

        match self.tokens.consume_next(name) {
            Ok(v) => Some(v),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    /// Consume the next positional argument, converted to a numeric
    /// type.
    pub fn positional_as<T: Number>(&mut self, name: &str, help: &str) -> Option<T> {
        self.record(EntryKind::Positional, name, help);

        match self.tokens.consume_next_as(name) {
            Ok(v) => Some(v),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    /// Resolve a setting: flag value over environment variable over
    /// default.
    pub fn setting(&mut self, default: &str, env_var: &str, descriptor: &str, help: &str) -> String {
        self.record(EntryKind::Option, descriptor, help);

        match self.tokens.resolve_setting(default, env_var, descriptor) {
            Ok(v) => v,
            Err(e) => {
                self.errors.push(e);
                default.to_string()
            }
        }
    }

    /// Resolve a numeric setting: flag value over environment variable
    /// over default.
    pub fn setting_as<T: Number>(
        &mut self,
        default: T,
        env_var: &str,
        descriptor: &str,
        help: &str,
    ) -> T {
        self.record(EntryKind::Option, descriptor, help);

        match self.tokens.resolve_setting_as(default, env_var, descriptor) {
            Ok(v) => v,
            Err(e) => {
                self.errors.push(e);
                default
            }
        }
    }

    //------------------------------
    // Completion
    //------------------------------

    /// The tokens not yet consumed by any extraction call.
    pub fn remaining(&self) -> &[String] {
        self.tokens.as_slice()
    }

    /// Finish extraction: any unconsumed tokens are an error, and every
    /// failure accumulated across the extraction calls is combined into
    /// one error chain, in call order.
    ///
    /// The `App` is left empty, ready to be dropped.
    pub fn finish(&mut self) -> Result<()> {
        if let Err(e) = self.tokens.assert_empty() {
            self.errors.push(e);
        }

        self.tokens = Tokens::default();

        std::mem::take(&mut self.errors).into_result(())
    }

    //------------------------------
    // Usage generation
    //------------------------------

    /// Generate a usage statement from the extraction calls made so
    /// far.
    pub fn usage(&self) -> String {
        let mut lines = Vec::<String>::new();

        let line = format!("NAME:\n{}{}\n", USAGE_PREFIX_SPACES, self.name);
        lines.push(line);

        if !self.version.is_empty() {
            let line = format!("VERSION:\n{}{}\n", USAGE_PREFIX_SPACES, self.version);
            lines.push(line);
        }

        if !self.summary.is_empty() {
            let line = format!("SUMMARY:\n{}{}\n", USAGE_PREFIX_SPACES, self.summary.trim());
            lines.push(line);
        }

        lines.push("USAGE:".into());

        let positionals: Vec<&UsageEntry> = self
            .usage
            .iter()
            .filter(|e| e.kind == EntryKind::Positional)
            .collect();

        let mut synopsis = format!("{}{} [FLAGS]", USAGE_PREFIX_SPACES, self.name);

        for entry in &positionals {
            synopsis.push(' ');
            synopsis.push_str(&entry.display);
        }

        synopsis.push('\n');
        lines.push(synopsis);

        //------------------------------------------------------------

        lines.push("FLAGS:".into());

        for entry in self.usage.iter().filter(|e| e.kind == EntryKind::Flag) {
            let line = format!("{}{}", USAGE_PREFIX_SPACES, entry.render());
            lines.push(line);
        }

        //------------------------------------------------------------

        lines.push("\nOPTIONS:".into());

        for entry in self.usage.iter().filter(|e| e.kind == EntryKind::Option) {
            let line = format!("{}{}", USAGE_PREFIX_SPACES, entry.render());
            lines.push(line);
        }

        //------------------------------------------------------------

        if !positionals.is_empty() {
            lines.push("\nARGUMENTS:".into());

            for entry in &positionals {
                let line = format!("{}{}", USAGE_PREFIX_SPACES, entry.render());
                lines.push(line);
            }
        }

        //------------------------------------------------------------

        if !self.notes.is_empty() {
            let line = format!("\nNOTES:\n\n{}", self.notes.trim());
            lines.push(line);
        }

        // Join all the lines together, remove white space at either end
        // and finally append a single newline.
        let mut final_lines = lines.join("\n").trim().to_string();
        final_lines.push('\n');

        final_lines
    }

    /// Write the usage statement.
    pub fn generate_usage<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.usage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Kind};

    use regex::Regex;
    use std::sync::{Arc, Mutex};

    /// Writer that stores all data written to it.
    #[derive(Default, Clone)]
    struct BufWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for BufWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.0.lock().unwrap().flush()
        }
    }

    impl ToString for BufWriter {
        fn to_string(&self) -> String {
            let data_ref = self.0.clone();
            let output = data_ref.lock().unwrap();
            let s = (*output).clone();

            String::from_utf8(s).unwrap()
        }
    }

    fn tokens(list: &[&str]) -> Tokens {
        Tokens::from(list.to_vec())
    }

    #[test]
    fn test_app_creation() {
        let new_app = App::new("foo bar");
        let def_app = App::default();

        let expected_new_app = App {
            name: "foo bar".into(),
            ..App::default()
        };

        assert_eq!(new_app, expected_new_app);
        assert_eq!(def_app.name, "");
        assert!(def_app.tokens.is_empty());
    }

    #[test]
    fn test_app_builders() {
        let mut app = App::default();

        assert_eq!(app.name, "");
        let name = "foo bar";
        app = App::new(name);
        assert_eq!(app.name, name);

        let version = "1.2.3-beta5";
        assert_eq!(app.version, "");
        app = app.version(version);
        assert_eq!(app.version, version);

        let summary = "my awesome app";
        assert_eq!(app.summary, "");
        app = app.summary(summary);
        assert_eq!(app.summary, summary);

        let notes = "a b c d e f# g";
        assert_eq!(app.notes, "");
        app = app.notes(notes);
        assert_eq!(app.notes, notes);

        app = app.tokens(tokens(&["a", "b"]));
        assert_eq!(app.remaining(), ["a", "b"]);
    }

    #[test]
    fn test_app_extraction() {
        let mut app = App::new("test").tokens(tokens(&[
            "-v", "input", "-n", "foo", "-i", "3", "-a", "x", "-a", "y",
        ]));

        assert!(app.flag("-v | --verbose", "verbose mode"));
        assert!(!app.flag("-d", "debug mode"));

        assert_eq!(app.value("-n", "a name"), Some("foo".into()));
        assert_eq!(app.value_as::<i32>("-i", "an int"), Some(3));

        assert_eq!(app.values("-a", "several"), vec!["x", "y"]);

        assert_eq!(app.positional("INPUT", "the input"), Some("input".into()));

        assert_eq!(app.finish(), Ok(()));
    }

    #[test]
    fn test_app_accumulates_errors() {
        let mut app = App::new("test").tokens(tokens(&[
            "-n", "a", "-n", "b", "-i", "foo", "leftover",
        ]));

        // Each failing call degrades to a default value...
        assert_eq!(app.value("-n", "a name"), None);
        assert_eq!(app.value_as::<i32>("-i", "an int"), None);
        assert_eq!(app.positional("FIRST", "first arg"), Some("leftover".into()));
        assert_eq!(app.positional("SECOND", "second arg"), None);

        // ...and finish() reports every failure, in call order.
        let err = app.finish().unwrap_err();

        let errors = err.errors();
        assert_eq!(errors.len(), 3);

        assert!(errors[0].is(Kind::Ambiguous));
        assert!(errors[1].is(Kind::Syntax));
        assert_eq!(errors[2], &Error::MissingPositional("SECOND".into()));
    }

    #[test]
    fn test_app_finish_rejects_leftovers() {
        let mut app = App::new("test").tokens(tokens(&["-v", "stray"]));

        assert!(app.flag("-v", ""));

        let err = app.finish().unwrap_err();

        assert_eq!(err, Error::Unexpected("stray".into()));
    }

    #[test]
    fn test_app_settings() {
        let mut app = App::new("test").tokens(tokens(&["-t", "flag-value"]));

        let value = app.setting("default", "", "-t", "the mode");
        assert_eq!(value, "flag-value");

        let port: u16 = app.setting_as(8080, "", "-p", "the port");
        assert_eq!(port, 8080);

        assert_eq!(app.finish(), Ok(()));
    }

    #[test]
    fn test_generate_usage() {
        let mut writer = BufWriter::default();

        let name = "my app";
        let version = "1.2.3-alpha4";
        let summary = "This is one awesome app";
        let notes = "notes line 1\nnotes last line";

        let mut app = App::new(name)
            .version(version)
            .summary(summary)
            .notes(notes)
            .tokens(tokens(&["-d", "-n", "foo", "input"]));

        app.flag("-d", "enable debug");
        app.flag("-v | --verbose", "");
        app.value("-n theName", "the name");
        app.positional("INPUT", "file to read");

        assert_eq!(app.finish(), Ok(()));

        let result = app.generate_usage(&mut writer);
        assert!(result.is_ok());

        let value = writer.to_string();

        let name_re = format!(r"NAME:\n\s+{}\n", name);
        let version_re = format!(r"VERSION:\n\s+{}\n", version);
        let summary_re = format!(r"SUMMARY:\n\s+{}\n", summary);
        let usage_re = format!(r"USAGE:\n\s+{} \[FLAGS\] INPUT\n", name);

        let flags_re = concat!(
            r"FLAGS:\n",
            r"\s+-d # enable debug\n",
            r"\s+-v \| --verbose\n",
        );

        let options_re = concat!(r"OPTIONS:\n", r"\s+-n <theName> # the name\n");

        let arguments_re = concat!(r"ARGUMENTS:\n", r"\s+INPUT # file to read\n");

        let notes_re = r"NOTES:\n\nnotes line 1\nnotes last line";

        for (i, re) in [
            name_re.as_str(),
            version_re.as_str(),
            summary_re.as_str(),
            usage_re.as_str(),
            flags_re,
            options_re,
            arguments_re,
            notes_re,
        ]
        .iter()
        .enumerate()
        {
            let msg = format!("test[{}]: {:?}, value: {:?}", i, re, value);

            let re = Regex::new(re).unwrap();
            assert!(re.is_match(&value), "{}", msg);
        }
    }

    #[test]
    fn test_usage_entry_render() {
        #[derive(Debug)]
        struct TestData<'a> {
            entry: UsageEntry,
            display: &'a str,
        }

        let tests = &[
            TestData {
                entry: UsageEntry {
                    kind: EntryKind::Flag,
                    display: "-d".into(),
                    value_name: "".into(),
                    help: "".into(),
                },
                display: "-d",
            },
            TestData {
                entry: UsageEntry {
                    kind: EntryKind::Flag,
                    display: "-d".into(),
                    value_name: "".into(),
                    help: "some help text".into(),
                },
                display: "-d # some help text",
            },
            TestData {
                entry: UsageEntry {
                    kind: EntryKind::Option,
                    display: "-r".into(),
                    value_name: "value".into(),
                    help: "".into(),
                },
                display: "-r <value>",
            },
            TestData {
                entry: UsageEntry {
                    kind: EntryKind::Option,
                    display: "-n | --name".into(),
                    value_name: "theName".into(),
                    help: "the name".into(),
                },
                display: "-n | --name <theName> # the name",
            },
            TestData {
                entry: UsageEntry {
                    kind: EntryKind::Positional,
                    display: "INPUT".into(),
                    value_name: "".into(),
                    help: "file".into(),
                },
                display: "INPUT # file",
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let value = d.entry.render();

            let msg = format!("test[{}]: {:?}, value: {:?}", i, d, value);

            assert_eq!(value, d.display, "{}", msg);
        }
    }
}

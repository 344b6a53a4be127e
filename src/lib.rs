// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for extracting command-line arguments.
//!
//! If you want lots of extra features, you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! To understand what "simple" means, see the [Limitations](#limitations) section.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Terminology](#terminology)
//! * [Rationale](#rationale)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! This crate is used to extract arguments from the command-line. Rather
//! than registering a grammar up front and asking a parser to run it,
//! a program *extracts* what it needs, one call at a time, from a
//! [Tokens] list:
//!
//! - each extraction call removes the tokens it consumes;
//! - the relative order of the remaining tokens is always preserved;
//! - the final call asserts that nothing is left over.
//!
//! # Quickstart
//!
//! > **Note:** If you are not familiar with command-line handling,
//! > see the [terminology](#terminology) section.
//!
//! 1. Create a [Tokens] value from the process's command-line (the
//!    program name is removed for you):
//!
//!    ```rust,no_run
//!    use argex::Tokens;
//!
//!    let mut tokens = Tokens::from_env();
//!    ```
//!
//! 1. Extract each flag and option your program supports. Every call
//!    removes what it consumes:
//!
//!    ```rust
//!    # use argex::{Result, Tokens};
//!    #
//!    # fn main() -> Result<()> {
//!    # let mut tokens = Tokens::from(vec!["-v", "-n", "foo", "input"]);
//!    // A stand-alone flag, expected at most once.
//!    let verbose = tokens.is_present_once("-v | --verbose")?;
//!
//!    // An option with a value.
//!    let name = tokens.extract_value("-n theName")?;
//!    # assert!(verbose);
//!    # assert_eq!(name.as_deref(), Some("foo"));
//!    #
//!    # let _ = tokens.consume_last("INPUT")?;
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Consume any positional arguments, in order:
//!
//!    ```rust
//!    # use argex::{Result, Tokens};
//!    #
//!    # fn main() -> Result<()> {
//!    # let mut tokens = Tokens::from(vec!["input", "output"]);
//!    let input = tokens.consume_next("INPUT")?;
//!
//!    // consume_last() also rejects any trailing tokens.
//!    let output = tokens.consume_last("OUTPUT")?;
//!    # assert_eq!(input, "input");
//!    # assert_eq!(output, "output");
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Alternatively, finish by asserting the list is empty:
//!
//!    ```rust
//!    # use argex::{Result, Tokens};
//!    #
//!    # fn main() -> Result<()> {
//!    # let tokens = Tokens::default();
//!    tokens.assert_empty()?;
//!    # Ok(())
//!    # }
//!    ```
//!
//! # Examples
//!
//! Below is a full example showing flags, typed option values, a
//! three-tier setting and a positional argument:
//!
//! ```rust
//! use argex::{Result, Tokens};
//!
//! fn run(mut tokens: Tokens) -> Result<()> {
//!     // How many times was '-v' given?
//!     let verbosity = tokens.match_count("-v | --verbose");
//!
//!     // An optional, typed option value.
//!     let port: Option<u16> = tokens.extract_value_as("-p port")?;
//!
//!     // Every occurrence of a repeatable option, in order.
//!     let includes = tokens.extract_values("-I dir")?;
//!
//!     // Flag value, else environment variable, else default.
//!     let mode = tokens.resolve_setting("fast", "MYPROG_MODE", "-m mode")?;
//!
//!     // The one remaining argument.
//!     let input = tokens.consume_last("INPUT")?;
//!
//!     println!(
//!         "verbosity: {}, port: {:?}, includes: {:?}, mode: {}, input: {}",
//!         verbosity, port, includes, mode, input
//!     );
//!
//!     Ok(())
//! }
//!
//! fn main() -> Result<()> {
//!     let tokens = Tokens::from(vec!["-v", "-p", "8080", "-I", "a", "-I", "b", "input"]);
//!
//!     run(tokens)
//! }
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -v -n foo input
//! $ cargo run --example verbose -- -v -v -v "hello world"
//! $ cargo run --example settings -- -t f
//! $ cargo run --example positional -- one two three
//! ```
//!
//! # Terminology
//!
//! > **Note:** For further details, see `getopt(3)`.
//!
//! - A "token" is one element of the argument list being extracted from
//!   (the process's argument vector minus the program name).
//!
//! - A "flag descriptor" is a string encoding one or more equivalent
//!   spellings of a command-line switch, separated by `|`, optionally
//!   annotated with a value-name hint:
//!
//!   - `"-v"` — one spelling.
//!   - `"-v | --verbose"` — two equivalent spellings.
//!   - `"-n theName"` — one spelling, with a value-name hint used in
//!     usage text.
//!   - `"[-n theName]"` — enclosing brackets/braces are stripped, so a
//!     descriptor can be written the way it appears in a synopsis.
//!
//! - An "option" is a flag followed by a value token (`-n foo`). The
//!   value is the very next token, whatever it looks like.
//!
//! - A "positional argument" is a value identified by its position in
//!   the remaining token list rather than by a preceding flag.
//!
//! - A "setting" is a value resolvable from, in priority order: a
//!   command-line option, an environment variable, or a compiled-in
//!   default.
//!
//! - "Ambiguous" describes a flag expected at most once (or a
//!   single-value option) that appears more than once.
//!
//! # Rationale
//!
//! Why yet another command-line crate?
//!
//! There are many rust CLI argument parsing crates. This one was written
//! since I couldn't find a crate that satisfied all of the following
//! requirements:
//!
//! - Let the *program* drive: no grammar registration, no derive magic,
//!   just a sequence of extraction calls reading like the usage text.
//!
//! - Report *every* defect in one pass.
//!
//!   A scan never stops at the first problem: a missing value and two
//!   ambiguous repeats are all reported, in discovery order, as one
//!   combined error ([Error::Chain]).
//!
//! - Make typed extraction respect C-style numeric literals
//!   (`0x1F`, `017`, `0b101`) with proper syntax/range classification.
//!
//! # Summary of features and behaviour
//!
//! - Simple and intuitive ("ergonomic") API.
//! - Small codebase.
//! - Comprehensive set of unit tests.
//! - Stateless core: every operation is a pure function of the token
//!   list (and, for settings, one environment variable read).
//! - Flags can have any number of alias spellings.
//! - Options can be extracted once ([Tokens::extract_value()]) or
//!   repeatedly ([Tokens::extract_values()]).
//! - The full numeric matrix is supported via [num::Number]:
//!   `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`.
//! - Range overflow is classified distinctly from bad syntax, and the
//!   error carries the crossed bound as a best-effort value
//!   ([num::NumError]).
//! - Three-tier settings: flag value over environment variable over
//!   default ([Tokens::resolve_setting()]).
//! - Errors are values, never panics; match on [Kind] rather than
//!   message text.
//! - An optional stateful wrapper ([App]) accumulates errors across
//!   calls and generates a usage statement.
//!
//! # Limitations
//!
//! - Option clustering is not supported
//!
//!   **Example:** `-a -b -c` is valid, but `-abc` is not one flag per
//!   letter.
//!
//! - `=`-joined values are not supported
//!
//!   **Example:** `-n foo` is valid, but `-n=foo` and `--name=foo` are
//!   not.
//!
//! - Matching is exact: no prefix matching, no case folding.
//!
//! - No subcommands, no shell completion, no declarative schemas, and
//!   no validation of flag combinations — assemble those from the
//!   primitives if you need them.

mod app;
mod error;
mod flag;
pub mod num;
mod tokens;

pub use error::{Error, Errors, Kind, NumKind, Result};

pub use app::App;
pub use flag::Flag;
pub use num::{NumError, Number};
pub use tokens::Tokens;

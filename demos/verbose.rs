// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing a counted flag: each `-v` raises the verbosity
/// level. The level is an explicit value threaded through call sites,
/// not process-wide mutable state.
use argex::{Result, Tokens};

/// Gates its output on the verbosity level it was built with.
#[derive(Clone, Copy, Debug, Default)]
struct Reporter {
    verbosity: usize,
}

impl Reporter {
    fn new(verbosity: usize) -> Self {
        Reporter { verbosity }
    }

    /// Print the message if the verbosity level reaches `level`.
    fn say(&self, level: usize, msg: &str) {
        if self.verbosity >= level {
            println!("INFO: {}", msg);
        }
    }
}

fn main() -> Result<()> {
    let mut tokens = Tokens::from_env();

    let verbosity = tokens.match_count("-v | --verbose");

    let reporter = Reporter::new(verbosity);

    reporter.say(1, "verbose mode enabled");
    reporter.say(2, "very verbose mode enabled");
    reporter.say(3, "positively chatty");

    for (i, arg) in tokens.into_vec().iter().enumerate() {
        println!("argument[{}]: {:?}", i, arg);

        reporter.say(1, &format!("({} characters)", arg.len()));
    }

    Ok(())
}

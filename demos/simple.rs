// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to extract flags, option values and a
/// positional argument, and how to report every problem in one go.
use argex::{App, Tokens};

fn main() {
    let mut app = App::new("simple")
        .version("0.1.0")
        .summary("Demonstrate simple argument extraction")
        .tokens(Tokens::from_env());

    let verbose = app.flag("-v | --verbose", "enable verbose mode");
    let name = app.value("-n theName", "the name to use");
    let port: Option<u16> = app.value_as("-p port", "the port to listen on");
    let input = app.positional("INPUT", "the input file");

    if let Err(e) = app.finish() {
        // Every defect found across all the calls above, in one error.
        eprintln!("ERROR: {}", e);
        eprintln!();

        let _ = app.generate_usage(&mut std::io::stderr());

        std::process::exit(1);
    }

    println!("INFO: verbose: {}", verbose);
    println!("INFO: name: {:?}", name);
    println!("INFO: port: {:?}", port);
    println!("INFO: input: {:?}", input);
}

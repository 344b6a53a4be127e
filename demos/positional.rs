// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing positional argument handling (like `echo(1)`),
/// consumed strictly in order.
use argex::{Result, Tokens};

fn main() -> Result<()> {
    let mut tokens = Tokens::from_env();

    let first = tokens.consume_next("FIRST")?;

    println!("INFO: first: {:?}", first);

    // Everything else is optional.
    let mut count = 0;

    while !tokens.is_empty() {
        let arg = tokens.consume_next("ARG")?;

        println!("INFO: arg[{}]: {:?}", count, arg);

        count += 1;
    }

    tokens.assert_empty()?;

    Ok(())
}

// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing three-tier setting resolution: an explicit option
/// value overrides an environment variable, which overrides the
/// compiled-in default.
///
/// Try:
///
/// ```bash
/// $ cargo run --example settings
/// $ DEMO_MODE=careful cargo run --example settings
/// $ DEMO_MODE=careful cargo run --example settings -- -t fast
/// ```
use argex::{Result, Tokens};

fn main() -> Result<()> {
    let mut tokens = Tokens::from_env();

    let mode = tokens.resolve_setting("cautious", "DEMO_MODE", "-t mode")?;

    let retries: u32 = tokens.resolve_setting_as(3, "DEMO_RETRIES", "-r count")?;

    tokens.assert_empty()?;

    println!("INFO: mode: {:?}", mode);
    println!("INFO: retries: {}", retries);

    Ok(())
}

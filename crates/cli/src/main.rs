// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! simctl binary entry point.

use clap::Parser;

use simctl::cli::Cli;
use simctl::commands::execute;
use simctl::output_diagnostic::print_error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match execute(&cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    }
}

// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! List performance comparison CLI entry point.

fn main() {
    if let Err(e) = list_perf_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

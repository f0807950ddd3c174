/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;

pub mod global_options;

/// Matches of the subcommand that was invoked, global flags
/// are propagated down to it
pub fn leaf_matches(options: &ArgMatches) -> &ArgMatches {
    match options.subcommand() {
        Some((_, sub)) => leaf_matches(sub),
        None => options
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod show_gui;
mod spinner;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();

    let options = match cmd.try_get_matches() {
        Ok(options) => options,
        Err(err) => {
            // --help and --version also come through here
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            exit(code);
        }
    };

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    if let Err(reason) = create_and_exec_workflow_from_cmd(&options, &parsed_opts) {
        error!("Could not complete workflow, reason {}", reason);
        exit(1);
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{CONVERT_HELP, ENCODE_HELP, VIEW_HELP};

pub mod help_strings;

/// Default limit on decoded width and height, `1 << 17`
pub const DEFAULT_MAX_DIMENSION: &str = "131072";

fn input_arg(help: &'static str) -> Arg {
    Arg::new("in")
        .help(help)
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

fn output_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help("Write the result to this path instead of next to the input")
        .value_parser(value_parser!(PathBuf))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zune-img")
        .about("Encode, convert and view Paeth filtered zlib image containers")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("encode")
            .about("Encode an image into a .img container")
            .long_about(ENCODE_HELP)
            .arg(input_arg("Image to encode, any format zune-image can decode"))
            .arg(output_arg()))
        .subcommand(Command::new("convert")
            .about("Decode a .img container and write it as a png")
            .long_about(CONVERT_HELP)
            .arg(input_arg("The .img container to convert"))
            .arg(output_arg()))
        .subcommand(Command::new("view")
            .about("Decode a .img container and show it in an image viewer")
            .long_about(VIEW_HELP)
            .arg(input_arg("The .img container to view")))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of a container the decoder will accept")
            .value_parser(value_parser!(usize))
            .default_value(DEFAULT_MAX_DIMENSION))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of a container the decoder will accept")
            .value_parser(value_parser!(usize))
            .default_value(DEFAULT_MAX_DIMENSION))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::cmd_args::create_cmd_args;

    #[test]
    fn test_encode_subcommand() {
        let matches = create_cmd_args()
            .try_get_matches_from(["zune-img", "encode", "photo.jpg"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();

        assert_eq!(name, "encode");
        assert_eq!(sub.get_one::<PathBuf>("in"), Some(&PathBuf::from("photo.jpg")));
        assert_eq!(sub.get_one::<PathBuf>("out"), None);
    }

    #[test]
    fn test_convert_with_output_and_globals() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "zune-img", "convert", "a.img", "-o", "b.png", "--debug", "--max-width", "10"
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();

        assert_eq!(name, "convert");
        assert_eq!(sub.get_one::<PathBuf>("out"), Some(&PathBuf::from("b.png")));
        assert!(sub.get_flag("debug"));
        assert_eq!(sub.get_one::<usize>("max-width"), Some(&10));
        assert_eq!(sub.get_one::<usize>("max-height"), Some(&131072));
    }

    #[test]
    fn test_missing_path_is_an_error() {
        assert!(create_cmd_args()
            .try_get_matches_from(["zune-img", "view"])
            .is_err());
    }

    #[test]
    fn test_unknown_verb_is_an_error() {
        assert!(create_cmd_args()
            .try_get_matches_from(["zune-img", "fwrite", "a.img"])
            .is_err());
    }

    #[test]
    fn test_view_has_no_output() {
        assert!(create_cmd_args()
            .try_get_matches_from(["zune-img", "view", "a.img", "-o", "x.png"])
            .is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        create_cmd_args().debug_assert();
    }
}

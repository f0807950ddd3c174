/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use zune_img::{encode_frame, ImgDecoder, PixelBuffer};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{
    output_path, verify_input_path, ImageSink, ImageSource, ZuneImageFile, ZunePngSink,
    CONTAINER_EXTENSION
};
use crate::show_gui::open_in_default_app;
use crate::spinner::Spinner;

const WAIT_MESSAGE: &str = "Please wait...";

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    info!("Creating workflows from input");

    match args.subcommand() {
        Some(("encode", sub)) => {
            let input = input_path(sub)?;
            verify_input_path(input, None)?;
            let output = output_path(input, sub.get_one::<PathBuf>("out"), CONTAINER_EXTENSION)?;

            encode_file(&ZuneImageFile::new(input), &output)
        }
        Some(("convert", sub)) => {
            let input = input_path(sub)?;
            verify_input_path(input, Some(CONTAINER_EXTENSION))?;
            let output = output_path(input, sub.get_one::<PathBuf>("out"), "png")?;

            convert_file(input, &output, cmd_opts, &ZunePngSink)
        }
        Some(("view", sub)) => {
            let input = input_path(sub)?;
            verify_input_path(input, Some(CONTAINER_EXTENSION))?;

            view_file(input, cmd_opts)
        }
        Some((name, _)) => Err(CliErrors::Usage(format!("Unknown command {name}"))),
        None => Err(CliErrors::Usage(
            "Expected one of encode, convert or view".to_string()
        ))
    }
}

fn input_path(args: &ArgMatches) -> Result<&PathBuf, CliErrors> {
    args.get_one::<PathBuf>("in")
        .ok_or_else(|| CliErrors::Usage("No input file given".to_string()))
}

/// Encode whatever `source` produces into a container at `output`
///
/// The output file is only created once the whole container is in memory.
pub fn encode_file(source: &impl ImageSource, output: &Path) -> Result<(), CliErrors> {
    let spinner = Spinner::start(WAIT_MESSAGE);

    let pixels = source.load_pixels()?;
    let (width, height) = pixels.dimensions();
    debug!("Encoding {}x{} image", width, height);

    let container = encode_frame(&pixels)?;
    spinner.stop();

    std::fs::write(output, &container)?;
    info!("Wrote {} bytes to {:?}", container.len(), output);
    println!("Done! Wrote {}", output.display());

    Ok(())
}

/// Read and decode the container at `input`
pub fn decode_file(input: &Path, cmd_opts: &CmdOptions) -> Result<PixelBuffer, CliErrors> {
    let data = std::fs::read(input)?;
    debug!("Read {} bytes from {:?}", data.len(), input);

    let pixels = ImgDecoder::new_with_options(&data, cmd_opts.decoder_options()).decode()?;

    Ok(pixels)
}

/// Decode the container at `input` and write it as a png to `output`
pub fn convert_file(
    input: &Path, output: &Path, cmd_opts: &CmdOptions, sink: &impl ImageSink
) -> Result<(), CliErrors> {
    let spinner = Spinner::start(WAIT_MESSAGE);

    let pixels = decode_file(input, cmd_opts)?;
    let png = sink.save_png(&pixels)?;
    spinner.stop();

    std::fs::write(output, &png)?;
    info!("Wrote {} bytes to {:?}", png.len(), output);
    println!("Done! Wrote {}", output.display());

    Ok(())
}

fn view_file(input: &Path, cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    let spinner = Spinner::start(WAIT_MESSAGE);
    let pixels = decode_file(input, cmd_opts)?;
    spinner.stop();

    let title = input
        .file_name()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_default();

    let shown = open_in_default_app(&pixels, &title, &ZunePngSink)?;
    debug!("Opened {:?}", shown);

    Ok(())
}

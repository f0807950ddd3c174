/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_image::codecs::ImageFormat;
use zune_image::core_filters::colorspace::ColorspaceConv;
use zune_image::core_filters::depth::Depth;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;
use zune_img::PixelBuffer;

use crate::errors::CliErrors;

/// Extension of container files
pub const CONTAINER_EXTENSION: &str = "img";

/// Something that can produce 8 bit RGB pixels
pub trait ImageSource {
    fn load_pixels(&self) -> Result<PixelBuffer, CliErrors>;
}

/// Something that can turn 8 bit RGB pixels into a png
pub trait ImageSink {
    fn save_png(&self, pixels: &PixelBuffer) -> Result<Vec<u8>, CliErrors>;
}

/// An image file on disk in any format zune-image can decode
pub struct ZuneImageFile {
    file_path: PathBuf
}

impl ZuneImageFile {
    pub fn new(file_path: impl Into<PathBuf>) -> ZuneImageFile {
        ZuneImageFile {
            file_path: file_path.into()
        }
    }
}

impl ImageSource for ZuneImageFile {
    fn load_pixels(&self) -> Result<PixelBuffer, CliErrors> {
        let mut image = Image::open(&self.file_path)?;

        debug!(
            "Decoded {:?} as {:?} with depth {:?}",
            self.file_path,
            image.colorspace(),
            image.depth()
        );
        if image.depth() != BitDepth::Eight {
            Depth::new(BitDepth::Eight).execute(&mut image)?;
        }
        if image.colorspace() != ColorSpace::RGB {
            ColorspaceConv::new(ColorSpace::RGB).execute(&mut image)?;
        }
        let (width, height) = image.dimensions();

        let frame = image
            .flatten_to_u8()
            .into_iter()
            .next()
            .ok_or_else(|| CliErrors::Usage(format!("{:?} has no frames", self.file_path)))?;

        trace!("Loaded {}x{} image, {} bytes", width, height, frame.len());

        Ok(PixelBuffer::new(width, height, frame)?)
    }
}

/// Encodes pixels to png with zune-image
pub struct ZunePngSink;

impl ImageSink for ZunePngSink {
    fn save_png(&self, pixels: &PixelBuffer) -> Result<Vec<u8>, CliErrors> {
        let (width, height) = pixels.dimensions();
        let image = Image::from_u8(pixels.as_bytes(), width, height, ColorSpace::RGB);

        Ok(image.write_to_vec(ImageFormat::PNG)?)
    }
}

/// Check that `path` exists, is a file and, when `extension` is given,
/// carries that extension
pub fn verify_input_path(path: &Path, extension: Option<&str>) -> Result<(), CliErrors> {
    if !path.exists() {
        return Err(CliErrors::Usage(format!("Path {:?} does not exist", path)));
    }
    if !path.is_file() {
        return Err(CliErrors::Usage(format!("Path {:?} is not a file", path)));
    }
    if let Some(ext) = extension {
        if path.extension() != Some(OsStr::new(ext)) {
            return Err(CliErrors::Usage(format!(
                "Expected a .{ext} file but found {:?}",
                path
            )));
        }
    }
    Ok(())
}

/// Pick where output goes, either the explicit path or the input with a
/// new extension
pub fn output_path(input: &Path, explicit: Option<&PathBuf>, extension: &str) -> Result<PathBuf, CliErrors> {
    let output = match explicit {
        Some(path) => path.clone(),
        None => input.with_extension(extension)
    };
    if output == input {
        return Err(CliErrors::Usage(format!(
            "Cannot use {:?} as both input and output",
            input
        )));
    }
    Ok(output)
}

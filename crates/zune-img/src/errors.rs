/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when decoding or encoding a container
use core::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

/// Possible errors that may occur during decoding
pub enum ImgErrors {
    /// The inflated stream is too short to hold the
    /// eight byte header
    ///
    /// The argument is the number of bytes actually present
    MalformedHeader(usize),
    /// The input is not a valid zlib stream
    ///
    /// The argument is the reason reported by the inflater
    CorruptStream(String),
    /// The pixel body does not have exactly `width * height * 3` bytes
    SizeMismatch { expected: usize, found: usize },
    /// The header declares an image with zero width or height
    ZeroDimensions,
    /// The header declares dimensions above the configured limits
    TooLargeDimensions {
        width:      usize,
        height:     usize,
        max_width:  usize,
        max_height: usize
    },
    /// Generic message that does not need heap allocation
    Generic(&'static str)
}

impl Debug for ImgErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ImgErrors::MalformedHeader(found) => {
                writeln!(
                    f,
                    "Malformed header, expected at least 8 bytes but found {found}"
                )
            }
            ImgErrors::CorruptStream(reason) => {
                writeln!(f, "Corrupt compressed stream: {}", reason.trim_end())
            }
            ImgErrors::SizeMismatch { expected, found } => {
                writeln!(
                    f,
                    "Size mismatch, header requires {expected} pixel bytes but body has {found}"
                )
            }
            ImgErrors::ZeroDimensions => {
                writeln!(f, "Image width and height must both be at least 1")
            }
            ImgErrors::TooLargeDimensions {
                width,
                height,
                max_width,
                max_height
            } => {
                writeln!(
                    f,
                    "Image dimensions {width}x{height} exceed configured limits {max_width}x{max_height}"
                )
            }
            ImgErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
        }
    }
}

impl Display for ImgErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ImgErrors {}

impl From<&'static str> for ImgErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

/// Errors encountered during encoding
pub enum ImgEncodeErrors {
    /// Width or height is zero
    ZeroDimensions,
    /// Too large dimensions
    ///
    /// The header stores width and height as `u32`, the argument is
    /// the dimension that does not fit
    TooLargeDimensions(usize),
    /// The pixel buffer is not `width * height * 3` bytes long
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes expected
    /// - 2nd argument is the number of bytes found
    WrongInputSize(usize, usize),
    /// Only 8 bit RGB can be stored
    ///
    /// The arguments are the colorspace and depth encountered
    UnsupportedFormat(ColorSpace, BitDepth),
    /// The compressor failed writing its output
    IoError(std::io::Error)
}

impl Debug for ImgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ImgEncodeErrors::ZeroDimensions => {
                writeln!(f, "Cannot encode an image with zero width or height")
            }
            ImgEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimension {found}, can only encode dimensions up to {}",
                    u32::MAX
                )
            }
            ImgEncodeErrors::WrongInputSize(expected, found) => {
                writeln!(
                    f,
                    "Wrong input size, expected {expected} bytes but found {found}"
                )
            }
            ImgEncodeErrors::UnsupportedFormat(colorspace, depth) => {
                writeln!(
                    f,
                    "Cannot encode {colorspace:?} image with depth {depth:?}, only 8 bit RGB is supported"
                )
            }
            ImgEncodeErrors::IoError(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for ImgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ImgEncodeErrors {}

impl From<std::io::Error> for ImgEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        ImgEncodeErrors::IoError(value)
    }
}

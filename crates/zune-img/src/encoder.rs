/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for the container
use log::{info, trace};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

use crate::compress::compress;
use crate::errors::ImgEncodeErrors;
use crate::filter::filter_forward;
use crate::header::{ImgHeader, IMG_HEADER_SIZE};
use crate::pixels::{expected_size, PixelBuffer};

/// Colorspace the container stores
pub const IMG_COLORSPACE: ColorSpace = ColorSpace::RGB;
/// Bit depth the container stores
pub const IMG_BIT_DEPTH: BitDepth = BitDepth::Eight;

/// An encoder for the container format
///
/// Data is expected to be 8 bit RGB, row-major, with no padding
/// between rows.
///
/// # Example
/// - Encodes a 4 by 2 RGB image
/// ```
/// use zune_core::bit_depth::BitDepth;
/// use zune_core::colorspace::ColorSpace;
/// use zune_core::options::EncoderOptions;
/// use zune_img::ImgEncoder;
///
/// let pixels = [127_u8; 4 * 2 * 3];
/// let options = EncoderOptions::new(4, 2, ColorSpace::RGB, BitDepth::Eight);
///
/// let container = ImgEncoder::new(&pixels, options).encode().unwrap();
/// assert!(!container.is_empty());
/// ```
pub struct ImgEncoder<'a> {
    data:    &'a [u8],
    options: EncoderOptions
}

impl<'a> ImgEncoder<'a> {
    /// Create a new encoder which will encode the specified data
    /// whose format is contained in options
    ///
    /// # Arguments
    /// - data: The pixels to encode
    /// - options: Meta information about the image,
    ///   width, height, colorspace and depth
    pub fn new(data: &'a [u8], options: EncoderOptions) -> ImgEncoder<'a> {
        ImgEncoder { data, options }
    }

    /// Encode the pixels returning the compressed container
    pub fn encode(&self) -> Result<Vec<u8>, ImgEncodeErrors> {
        if self.options.get_colorspace() != IMG_COLORSPACE || self.options.get_depth() != IMG_BIT_DEPTH {
            return Err(ImgEncodeErrors::UnsupportedFormat(
                self.options.get_colorspace(),
                self.options.get_depth()
            ));
        }
        let (width, height) = (self.options.get_width(), self.options.get_height());

        let expected = expected_size(width, height)?;
        let found = self.data.len();

        if expected != found {
            return Err(ImgEncodeErrors::WrongInputSize(expected, found));
        }
        info!("Encoding {}x{} image", width, height);

        // dimensions were checked to fit in u32 by expected_size
        let header = ImgHeader::new(width as u32, height as u32);

        let mut payload = Vec::with_capacity(IMG_HEADER_SIZE + expected);
        payload.extend_from_slice(&header.to_bytes());
        let residuals = filter_forward(self.data, width, height)
            .map_err(|_| ImgEncodeErrors::WrongInputSize(expected, found))?;
        payload.extend_from_slice(&residuals);

        trace!("Uncompressed payload is {} bytes", payload.len());

        compress(&payload)
    }
}

/// Encode an RGB image into a container
pub fn encode_frame(pixels: &PixelBuffer) -> Result<Vec<u8>, ImgEncodeErrors> {
    let options = EncoderOptions::new(
        pixels.width(),
        pixels.height(),
        IMG_COLORSPACE,
        IMG_BIT_DEPTH
    );

    ImgEncoder::new(pixels.as_bytes(), options).encode()
}

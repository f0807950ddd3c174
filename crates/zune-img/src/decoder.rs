/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{info, trace};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::compress::decompress;
use crate::encoder::{IMG_BIT_DEPTH, IMG_COLORSPACE};
use crate::errors::ImgErrors;
use crate::filter::filter_inverse_in_place;
use crate::header::{ImgHeader, IMG_COMPONENTS, IMG_HEADER_SIZE};
use crate::pixels::PixelBuffer;

/// Largest width or height the header can describe
const MAX_DIMENSION: usize = u32::MAX as usize;

/// A decoder for the container format
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to read the dimensions
/// or [`decode`] to return the reconstructed pixels
///
/// The container is a single zlib stream, so reading the
/// headers inflates the whole payload, which is then kept
/// around for `decode`.
///
/// [`decode_headers`]:ImgDecoder::decode_headers
/// [`decode`]:ImgDecoder::decode
pub struct ImgDecoder<'a> {
    data:    &'a [u8],
    options: DecoderOptions,
    header:  Option<ImgHeader>,
    payload: Vec<u8>
}

impl<'a> ImgDecoder<'a> {
    /// Create a new decoder accepting any dimensions the header can store
    ///
    /// Use [`new_with_options`](Self::new_with_options) to bound the
    /// dimensions of untrusted input.
    ///
    /// # Arguments
    /// - `data`: The compressed container bytes
    pub fn new(data: &'a [u8]) -> ImgDecoder<'a> {
        let options = DecoderOptions::default()
            .set_max_width(MAX_DIMENSION)
            .set_max_height(MAX_DIMENSION);

        ImgDecoder::new_with_options(data, options)
    }

    /// Create a new decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Example
    /// ```
    /// use zune_core::options::DecoderOptions;
    /// use zune_img::ImgDecoder;
    /// // only decode images less than 10 in both width and height
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = ImgDecoder::new_with_options(&[], options);
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> ImgDecoder<'a> {
        ImgDecoder {
            data,
            options,
            header: None,
            payload: Vec::new()
        }
    }

    /// Largest payload the limits in options allow
    fn payload_limit(&self) -> usize {
        self.options
            .get_max_width()
            .saturating_mul(self.options.get_max_height())
            .saturating_mul(IMG_COMPONENTS)
            .saturating_add(IMG_HEADER_SIZE)
    }

    /// Inflate the container and read the image dimensions
    ///
    /// # Returns
    /// - On success: Nothing, dimensions are available via [`dimensions`](Self::dimensions)
    /// - On error: [`ImgErrors::CorruptStream`] if inflating fails,
    ///   [`ImgErrors::MalformedHeader`] if there are less than 8 bytes,
    ///   [`ImgErrors::ZeroDimensions`] or [`ImgErrors::TooLargeDimensions`]
    ///   for dimensions the decoder will not handle
    pub fn decode_headers(&mut self) -> Result<(), ImgErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        let payload = decompress(
            self.data,
            self.payload_limit(),
            self.options.inflate_get_confirm_adler()
        )?;

        let header = ImgHeader::from_bytes(&payload)?;
        let (width, height) = header.dimensions();

        info!("Image width: {}", width);
        info!("Image height: {}", height);

        if width == 0 || height == 0 {
            return Err(ImgErrors::ZeroDimensions);
        }
        if width > self.options.get_max_width() || height > self.options.get_max_height() {
            return Err(ImgErrors::TooLargeDimensions {
                width,
                height,
                max_width: self.options.get_max_width(),
                max_height: self.options.get_max_height()
            });
        }
        self.header = Some(header);
        self.payload = payload;

        Ok(())
    }

    /// Decode the container returning the reconstructed RGB image
    ///
    /// # Errors
    /// Anything [`decode_headers`](Self::decode_headers) reports, and
    /// [`ImgErrors::SizeMismatch`] when the pixel body is not exactly
    /// `width * height * 3` bytes
    pub fn decode(&mut self) -> Result<PixelBuffer, ImgErrors> {
        self.decode_headers()?;

        let header = self
            .header
            .ok_or(ImgErrors::Generic("Headers were not decoded"))?;
        let (width, height) = header.dimensions();

        let mut pixels = core::mem::take(&mut self.payload);
        // header was read from the first bytes so there are at least IMG_HEADER_SIZE
        pixels.drain(..IMG_HEADER_SIZE);

        let found = pixels.len();
        let expected = header.pixel_bytes().ok_or(ImgErrors::SizeMismatch {
            expected: usize::MAX,
            found
        })?;

        if expected != found {
            return Err(ImgErrors::SizeMismatch { expected, found });
        }
        trace!("Reconstructing {} pixel bytes", found);

        filter_inverse_in_place(&mut pixels, width, height)?;

        // payload was consumed, the next call starts from scratch
        self.header = None;

        Ok(PixelBuffer::from_parts(width, height, pixels))
    }

    /// Return the width and height of the image
    ///
    /// Returns `None` if headers haven't been decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header.map(|h| h.dimensions())
    }

    /// The container always holds RGB
    pub const fn colorspace(&self) -> ColorSpace {
        IMG_COLORSPACE
    }

    /// The container always holds 8 bit samples
    pub const fn bit_depth(&self) -> BitDepth {
        IMG_BIT_DEPTH
    }
}

/// Decode a container into an RGB image without dimension limits
pub fn decode_frame(data: &[u8]) -> Result<PixelBuffer, ImgErrors> {
    ImgDecoder::new(data).decode()
}

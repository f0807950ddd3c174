/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::errors::ImgEncodeErrors;
use crate::header::IMG_COMPONENTS;

/// An owned 8-bit RGB image
///
/// Pixels are stored row-major, three bytes per pixel in `R`, `G`, `B`
/// order. A buffer always has a width and height of at least one and
/// exactly `width * height * 3` bytes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PixelBuffer {
    width:  usize,
    height: usize,
    data:   Vec<u8>
}

impl PixelBuffer {
    /// Wrap `data` as a `width` by `height` RGB image
    ///
    /// # Errors
    /// - [`ImgEncodeErrors::ZeroDimensions`] if either dimension is zero
    /// - [`ImgEncodeErrors::TooLargeDimensions`] if either dimension does not fit
    ///   in the container header or the byte count overflows
    /// - [`ImgEncodeErrors::WrongInputSize`] if `data` is not `width * height * 3` bytes
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<PixelBuffer, ImgEncodeErrors> {
        let expected = expected_size(width, height)?;

        if data.len() != expected {
            return Err(ImgEncodeErrors::WrongInputSize(expected, data.len()));
        }
        Ok(PixelBuffer {
            width,
            height,
            data
        })
    }

    /// Build a buffer whose invariants the caller has already checked
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> PixelBuffer {
        debug_assert_eq!(data.len(), width * height * IMG_COMPONENTS);
        PixelBuffer {
            width,
            height,
            data
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the width and height of the image
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Raw channel bytes in raster order
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The `[R, G, B]` triple at `(x, y)`, or `None` when out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * IMG_COMPONENTS;
        let px = &self.data[start..start + IMG_COMPONENTS];

        Some([px[0], px[1], px[2]])
    }

    /// Consume the buffer returning the raw channel bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Compute `width * height * 3`, validating the dimensions on the way
pub(crate) fn expected_size(width: usize, height: usize) -> Result<usize, ImgEncodeErrors> {
    if width == 0 || height == 0 {
        return Err(ImgEncodeErrors::ZeroDimensions);
    }
    if (width as u64) > u64::from(u32::MAX) {
        return Err(ImgEncodeErrors::TooLargeDimensions(width));
    }
    if (height as u64) > u64::from(u32::MAX) {
        return Err(ImgEncodeErrors::TooLargeDimensions(height));
    }
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(IMG_COMPONENTS))
        .ok_or(ImgEncodeErrors::TooLargeDimensions(width.max(height)))
}

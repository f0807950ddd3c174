/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bytestream::ZByteReader;

use crate::errors::ImgErrors;

/// Size of the serialized header, width and height as two `u32`s
pub const IMG_HEADER_SIZE: usize = 8;

/// Number of bytes a single pixel occupies, one per R, G and B
pub(crate) const IMG_COMPONENTS: usize = 3;

/// Image dimensions stored at the start of the inflated container
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ImgHeader {
    pub width:  u32,
    pub height: u32
}

impl ImgHeader {
    pub const fn new(width: u32, height: u32) -> ImgHeader {
        ImgHeader { width, height }
    }

    /// Serialize the header, width first, both little endian
    pub fn to_bytes(&self) -> [u8; IMG_HEADER_SIZE] {
        let mut bytes = [0; IMG_HEADER_SIZE];

        bytes[0..4].copy_from_slice(&self.width.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.height.to_le_bytes());

        bytes
    }

    /// Read a header from the first eight bytes of `data`
    ///
    /// Anything after the eighth byte is ignored.
    ///
    /// # Errors
    /// [`ImgErrors::MalformedHeader`] if `data` is shorter than
    /// [`IMG_HEADER_SIZE`]
    pub fn from_bytes(data: &[u8]) -> Result<ImgHeader, ImgErrors> {
        let mut stream = ZByteReader::new(data);

        if !stream.has(IMG_HEADER_SIZE) {
            return Err(ImgErrors::MalformedHeader(data.len()));
        }
        // confirmed in bounds by has above
        let width = stream.get_u32_le();
        let height = stream.get_u32_le();

        Ok(ImgHeader { width, height })
    }

    /// Width and height as `usize`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    /// Number of pixel bytes the body must have, `width * height * 3`
    ///
    /// Returns `None` if that does not fit in a `usize`
    pub fn pixel_bytes(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(IMG_COMPONENTS)
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! zlib wrapper around the header and filtered pixels
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::trace;
use zune_inflate::{DeflateDecoder, DeflateOptions};

use crate::errors::{ImgEncodeErrors, ImgErrors};

/// Compress `data` into a zlib stream at the highest compression level
pub fn compress(data: &[u8]) -> Result<Vec<u8>, ImgEncodeErrors> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::best());

    encoder.write_all(data)?;
    let compressed = encoder.finish()?;

    trace!("Compressed {} bytes to {} bytes", data.len(), compressed.len());

    Ok(compressed)
}

/// Inflate a zlib stream produced by [`compress`]
///
/// # Arguments
/// - `data`: The zlib stream
/// - `limit`: Maximum number of bytes the stream may inflate to
/// - `confirm_checksum`: Whether to verify the stream's adler32 checksum
///
/// # Errors
/// [`ImgErrors::CorruptStream`] if the stream is not valid zlib, fails its
/// checksum or inflates to more than `limit` bytes
pub fn decompress(data: &[u8], limit: usize, confirm_checksum: bool) -> Result<Vec<u8>, ImgErrors> {
    let options = DeflateOptions::default()
        .set_limit(limit)
        .set_confirm_checksum(confirm_checksum);

    let mut decoder = DeflateDecoder::new_with_options(data, options);

    let inflated = decoder
        .decode_zlib()
        .map_err(|e| ImgErrors::CorruptStream(format!("{:?}", e)))?;

    trace!("Inflated {} bytes to {} bytes", data.len(), inflated.len());

    Ok(inflated)
}

#[cfg(test)]
mod tests {
    use crate::compress::{compress, decompress};
    use crate::errors::ImgErrors;

    #[test]
    fn test_compress_decompress() {
        let data: Vec<u8> = (0..4096).map(|x| (x % 17) as u8).collect();
        let compressed = compress(&data).unwrap();

        assert!(compressed.len() < data.len());
        assert_eq!(decompress(&compressed, usize::MAX, true).unwrap(), data);
    }

    #[test]
    fn test_zlib_framing() {
        let compressed = compress(b"hello").unwrap();
        // CMF for deflate with a 32k window, level 9 sets the FLEVEL bits
        assert_eq!(compressed[0], 0x78);
        assert_eq!(compressed[1], 0xDA);
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let garbage = [0xFF_u8, 0x00, 0x13, 0x37, 0xDE, 0xAD, 0xBE, 0xEF];
        assert!(matches!(
            decompress(&garbage, usize::MAX, true),
            Err(ImgErrors::CorruptStream(_))
        ));
    }

    #[test]
    fn test_bad_checksum_is_corrupt() {
        let mut compressed = compress(b"some pixels here").unwrap();
        let last = compressed.len() - 1;
        compressed[last] ^= 0xFF;

        assert!(matches!(
            decompress(&compressed, usize::MAX, true),
            Err(ImgErrors::CorruptStream(_))
        ));
    }

    #[test]
    fn test_limit_exceeded_is_corrupt() {
        let compressed = compress(&[7; 1024]).unwrap();
        assert!(matches!(
            decompress(&compressed, 100, true),
            Err(ImgErrors::CorruptStream(_))
        ));
    }
}

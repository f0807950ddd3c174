/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A lossless RGB image container.
//!
//! The container is a single zlib stream wrapping a small header and
//! Paeth filtered pixels. It has the following layout once inflated:
//! ```text
//! ╔════════╤═════════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                             ║
//! ╠════════╪═════════════════════════════════════════════════════════╣
//! ║ 4      │ 32-Bit LE unsigned integer (width)                      ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE unsigned integer (height)                     ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ [111]  │ 3x8-Bit Paeth residuals [RGB] / pixel, row-major        ║
//! ╚════════╧═════════════════════════════════════════════════════════╝
//!```
//! Each residual is the channel value minus the Paeth prediction made from
//! the left, above and upper-left pixels (mod 256). Neighbours outside the
//! image are zero.
//!
//! # Example
//! ```
//! use zune_img::{decode_frame, encode_frame, PixelBuffer};
//!
//! let pixels = PixelBuffer::new(2, 1, vec![10, 10, 10, 20, 20, 20]).unwrap();
//! let container = encode_frame(&pixels).unwrap();
//! let decoded = decode_frame(&container).unwrap();
//!
//! assert_eq!(decoded, pixels);
//! ```
#![macro_use]
extern crate core;

pub use compress::{compress, decompress};
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use filter::{filter_forward, filter_inverse, filter_inverse_in_place};
pub use header::{ImgHeader, IMG_HEADER_SIZE};
pub use pixels::PixelBuffer;
pub use predictor::paeth;
pub use zune_core;

mod compress;
mod decoder;
mod encoder;
mod errors;
mod filter;
mod header;
mod pixels;
mod predictor;

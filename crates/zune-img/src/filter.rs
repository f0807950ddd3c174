/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Paeth spatial filtering over whole RGB images
//!
//! Unlike PNG there is no per scanline filter byte, every pixel of the
//! image is predicted with Paeth. Pixels outside the image read as zero,
//! the upper left neighbour only exists when both the left and the above
//! neighbours do.
use log::trace;

use crate::errors::ImgErrors;
use crate::header::IMG_COMPONENTS;
use crate::predictor::paeth;

/// Offset of `channel` of pixel `(x, y)` in a row-major RGB buffer
#[inline(always)]
const fn index(x: usize, y: usize, channel: usize, width: usize) -> usize {
    (y * width + x) * IMG_COMPONENTS + channel
}

/// Paeth prediction for `channel` of pixel `(x, y)` using values in `pixels`
#[inline(always)]
fn predict(pixels: &[u8], x: usize, y: usize, channel: usize, width: usize) -> u8 {
    let left = if x > 0 {
        pixels[index(x - 1, y, channel, width)]
    } else {
        0
    };
    let above = if y > 0 {
        pixels[index(x, y - 1, channel, width)]
    } else {
        0
    };
    let upper_left = if x > 0 && y > 0 {
        pixels[index(x - 1, y - 1, channel, width)]
    } else {
        0
    };
    paeth(left, above, upper_left)
}

/// Make sure `len` is exactly `width * height * 3`
fn check_len(len: usize, width: usize, height: usize) -> Result<(), ImgErrors> {
    let expected = width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(IMG_COMPONENTS))
        .unwrap_or(usize::MAX);

    if expected != len {
        return Err(ImgErrors::SizeMismatch {
            expected,
            found: len
        });
    }
    Ok(())
}

/// Replace raw RGB values with their Paeth residuals
///
/// # Errors
/// [`ImgErrors::SizeMismatch`] if `raw` is not `width * height * 3` bytes,
/// otherwise the returned vector has the same length as `raw`.
pub fn filter_forward(raw: &[u8], width: usize, height: usize) -> Result<Vec<u8>, ImgErrors> {
    check_len(raw.len(), width, height)?;

    let mut residuals = vec![0_u8; raw.len()];

    for y in 0..height {
        for x in 0..width {
            for channel in 0..IMG_COMPONENTS {
                let pos = index(x, y, channel, width);
                let predicted = predict(raw, x, y, channel, width);

                residuals[pos] = raw[pos].wrapping_sub(predicted);
            }
        }
    }
    trace!("Filtered {} rows of {} pixels", height, width);

    Ok(residuals)
}

/// Undo [`filter_forward`], returning reconstructed RGB values
///
/// # Errors
/// [`ImgErrors::SizeMismatch`] if `residuals` is not `width * height * 3` bytes
pub fn filter_inverse(residuals: &[u8], width: usize, height: usize) -> Result<Vec<u8>, ImgErrors> {
    let mut pixels = residuals.to_vec();
    filter_inverse_in_place(&mut pixels, width, height)?;
    Ok(pixels)
}

/// Undo [`filter_forward`] in place
///
/// Pixels are reconstructed in raster order, each prediction reads only
/// neighbours that precede it and so are already reconstructed.
/// `pixels` is left untouched when its length is wrong.
pub fn filter_inverse_in_place(
    pixels: &mut [u8], width: usize, height: usize
) -> Result<(), ImgErrors> {
    check_len(pixels.len(), width, height)?;

    for y in 0..height {
        for x in 0..width {
            for channel in 0..IMG_COMPONENTS {
                let pos = index(x, y, channel, width);
                let predicted = predict(pixels, x, y, channel, width);

                pixels[pos] = pixels[pos].wrapping_add(predicted);
            }
        }
    }
    trace!("Reconstructed {} rows of {} pixels", height, width);

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::errors::ImgErrors;
    use crate::filter::{filter_forward, filter_inverse, filter_inverse_in_place, index};

    #[test]
    fn test_index() {
        assert_eq!(index(0, 0, 0, 4), 0);
        assert_eq!(index(1, 0, 2, 4), 5);
        assert_eq!(index(0, 1, 0, 4), 12);
        assert_eq!(index(3, 2, 1, 4), 34);
    }

    #[test]
    fn test_two_by_one_scenario() {
        let raw = [10, 10, 10, 20, 20, 20];
        let filtered = filter_forward(&raw, 2, 1).unwrap();

        assert_eq!(filtered, vec![10, 10, 10, 10, 10, 10]);
        assert_eq!(filter_inverse(&filtered, 2, 1).unwrap(), raw.to_vec());
    }

    #[test]
    fn test_first_pixel_is_unmodified() {
        let raw = [200, 13, 77, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let filtered = filter_forward(&raw, 2, 2).unwrap();

        assert_eq!(&filtered[..3], &raw[..3]);
    }

    #[test]
    fn test_first_column_predicts_from_above() {
        // 1x2 image, second row only has an above neighbour
        let raw = [50, 60, 70, 55, 50, 90];
        let filtered = filter_forward(&raw, 1, 2).unwrap();

        assert_eq!(filtered, vec![50, 60, 70, 5, 246, 20]);
    }

    #[test]
    fn test_upper_left_neighbour() {
        // 2x2, last pixel sees left = 100, above = 50, upper left = 75
        // which predicts 75
        let raw = [75, 0, 0, 50, 0, 0, 100, 0, 0, 80, 0, 0];
        let filtered = filter_forward(&raw, 2, 2).unwrap();

        assert_eq!(filtered[9], 5);
        assert_eq!(filter_inverse(&filtered, 2, 2).unwrap(), raw.to_vec());
    }

    #[test]
    fn test_residuals_wrap() {
        let raw = [255, 255, 255, 0, 0, 0];
        let filtered = filter_forward(&raw, 2, 1).unwrap();

        assert_eq!(filtered, vec![255, 255, 255, 1, 1, 1]);
        assert_eq!(filter_inverse(&filtered, 2, 1).unwrap(), raw.to_vec());
    }

    #[test]
    fn test_in_place_matches_copying_inverse() {
        let raw: Vec<u8> = (0..(5 * 4 * 3)).map(|x| (x * 37 % 251) as u8).collect();
        let filtered = filter_forward(&raw, 5, 4).unwrap();

        let mut in_place = filtered.clone();
        filter_inverse_in_place(&mut in_place, 5, 4).unwrap();

        assert_eq!(in_place, filter_inverse(&filtered, 5, 4).unwrap());
        assert_eq!(in_place, raw);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        // one whole row plus a stray byte
        let raw = [1_u8; 7];

        assert!(matches!(
            filter_forward(&raw, 2, 2),
            Err(ImgErrors::SizeMismatch {
                expected: 12,
                found:    7
            })
        ));
        assert!(matches!(
            filter_inverse(&raw, 2, 1),
            Err(ImgErrors::SizeMismatch {
                expected: 6,
                found:    7
            })
        ));

        let mut pixels = raw;
        assert!(filter_inverse_in_place(&mut pixels, 3, 1).is_err());
        assert_eq!(pixels, raw);
    }
}

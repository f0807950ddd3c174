/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use zune_img::{
    compress, decode_frame, encode_frame, filter_forward, filter_inverse, ImgErrors, ImgHeader,
    PixelBuffer
};

fn random_image(rng: &mut WyRand, width: usize, height: usize) -> PixelBuffer {
    let data: Vec<u8> = (0..width * height * 3).map(|_| rng.generate::<u8>()).collect();
    PixelBuffer::new(width, height, data).unwrap()
}

#[test]
fn test_random_images_round_trip() {
    let mut rng = WyRand::new_seed(0x5eed);

    for _ in 0..40 {
        let width = rng.generate_range(1_usize..=33);
        let height = rng.generate_range(1_usize..=33);
        let image = random_image(&mut rng, width, height);

        let container = encode_frame(&image).unwrap();
        let decoded = decode_frame(&container).unwrap();

        assert_eq!(decoded, image, "Round trip failed for {width}x{height}");
    }
}

#[test]
fn test_filter_involution() {
    let mut rng = WyRand::new_seed(42);

    for _ in 0..40 {
        let width = rng.generate_range(1_usize..=20);
        let height = rng.generate_range(1_usize..=20);
        let raw = random_image(&mut rng, width, height).into_bytes();

        let filtered = filter_forward(&raw, width, height).unwrap();
        assert_eq!(filtered.len(), raw.len());
        assert_eq!(filter_inverse(&filtered, width, height).unwrap(), raw);
    }
}

#[test]
fn test_single_pixel_images() {
    for value in [0_u8, 1, 127, 128, 254, 255] {
        let image = PixelBuffer::new(1, 1, vec![value, 255 - value, value / 2]).unwrap();
        let decoded = decode_frame(&encode_frame(&image).unwrap()).unwrap();

        assert_eq!(decoded, image);
    }
}

#[test]
fn test_single_row_and_column() {
    let mut rng = WyRand::new_seed(7);

    let row = random_image(&mut rng, 257, 1);
    assert_eq!(decode_frame(&encode_frame(&row).unwrap()).unwrap(), row);

    let column = random_image(&mut rng, 1, 257);
    assert_eq!(decode_frame(&encode_frame(&column).unwrap()).unwrap(), column);
}

#[test]
fn test_images_past_default_limits_round_trip() {
    let mut rng = WyRand::new_seed(16385);
    let side = (1 << 14) + 1;

    let row = random_image(&mut rng, side, 1);
    assert_eq!(decode_frame(&encode_frame(&row).unwrap()).unwrap(), row);

    let column = random_image(&mut rng, 2, side);
    assert_eq!(decode_frame(&encode_frame(&column).unwrap()).unwrap(), column);
}

#[test]
fn test_every_byte_value_survives() {
    // 16x16 pixels, each channel walks all of 0..=255 in a different order
    let data: Vec<u8> = (0..256_usize)
        .flat_map(|i| [i as u8, (255 - i) as u8, (i * 7 % 256) as u8])
        .collect();
    let image = PixelBuffer::new(16, 16, data).unwrap();

    assert_eq!(decode_frame(&encode_frame(&image).unwrap()).unwrap(), image);
}

#[test]
fn test_smooth_gradient_compresses() {
    let (width, height) = (64, 64);
    let data: Vec<u8> = (0..height)
        .flat_map(|y| (0..width).flat_map(move |x| [x as u8, y as u8, (x + y) as u8]))
        .collect();
    let image = PixelBuffer::new(width, height, data).unwrap();

    let container = encode_frame(&image).unwrap();

    assert!(container.len() < width * height * 3 / 4);
    assert_eq!(decode_frame(&container).unwrap(), image);
}

#[test]
fn test_truncated_container_is_rejected() {
    let mut rng = WyRand::new_seed(99);
    let image = random_image(&mut rng, 8, 8);
    let container = encode_frame(&image).unwrap();

    let truncated = &container[..container.len() / 2];

    assert!(matches!(
        decode_frame(truncated),
        Err(ImgErrors::CorruptStream(_))
    ));
}

#[test]
fn test_header_claims_more_pixels_than_present() {
    let mut payload = ImgHeader::new(3, 3).to_bytes().to_vec();
    payload.extend_from_slice(&[0; 9 * 3 - 1]);

    let container = compress(&payload).unwrap();

    assert!(matches!(
        decode_frame(&container),
        Err(ImgErrors::SizeMismatch {
            expected: 27,
            found:    26
        })
    ));
}

#[test]
fn test_fewer_than_eight_bytes() {
    let container = compress(&[0xAB; 7]).unwrap();

    assert!(matches!(
        decode_frame(&container),
        Err(ImgErrors::MalformedHeader(7))
    ));
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::env::temp_dir;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, trace, warn};
use zune_imageprocs::resize::{resize, ResizeMethod};
use zune_img::PixelBuffer;

use crate::errors::CliErrors;
use crate::file_io::ImageSink;

/// Largest size an image is shown at
pub const MAX_VIEW_WIDTH: usize = 800;
pub const MAX_VIEW_HEIGHT: usize = 600;

/// Dimensions of `width x height` scaled down to fit in
/// `max_width x max_height` keeping the aspect ratio, images that
/// already fit are left alone
pub fn fit_within(
    width: usize, height: usize, max_width: usize, max_height: usize
) -> (usize, usize) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64
    );
    let new_width = ((width as f64 * scale).round() as usize).clamp(1, max_width);
    let new_height = ((height as f64 * scale).round() as usize).clamp(1, max_height);

    (new_width, new_height)
}

/// Make a downscaled copy of `pixels` for display, `pixels` itself is untouched
pub fn display_copy(pixels: &PixelBuffer) -> Result<PixelBuffer, CliErrors> {
    let (width, height) = pixels.dimensions();
    let (new_width, new_height) = fit_within(width, height, MAX_VIEW_WIDTH, MAX_VIEW_HEIGHT);

    if (new_width, new_height) == (width, height) {
        return Ok(pixels.clone());
    }
    debug!(
        "Scaling {}x{} to {}x{} for display",
        width, height, new_width, new_height
    );

    // the bilinear kernel reads one row and one column past the sample
    // position, so give it a copy with the last row and column repeated
    let (padded_width, padded_height) = (width + 1, height + 1);

    let mut output = vec![0_u8; new_width * new_height * 3];
    let mut in_channel = vec![0_u8; padded_width * padded_height];
    let mut out_channel = vec![0_u8; new_width * new_height];

    for channel in 0..3 {
        for (y, dst_row) in in_channel.chunks_exact_mut(padded_width).enumerate() {
            let src_row = &pixels.as_bytes()[y.min(height - 1) * width * 3..][..width * 3];

            for (dst, px) in dst_row.iter_mut().zip(src_row.chunks_exact(3)) {
                *dst = px[channel];
            }
            dst_row[width] = src_row[(width - 1) * 3 + channel];
        }
        resize(
            &in_channel,
            &mut out_channel,
            ResizeMethod::Bilinear,
            padded_width,
            padded_height,
            new_width,
            new_height
        );
        for (px, src) in output.chunks_exact_mut(3).zip(out_channel.iter()) {
            px[channel] = *src;
        }
    }
    Ok(PixelBuffer::new(new_width, new_height, output)?)
}

fn temp_png_path(title: &str) -> PathBuf {
    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|x| x.as_secs())
        .unwrap_or(0);

    temp_dir().join(format!("Decoded Image - {title} - {time}.png"))
}

/// Show `pixels` in the system image viewer
///
/// A downscaled copy is written to a temporary png named after `title`
/// which is then handed to the platform's default application.
pub fn open_in_default_app(
    pixels: &PixelBuffer, title: &str, sink: &impl ImageSink
) -> Result<PathBuf, CliErrors> {
    let path = temp_png_path(title);

    let Some(mut viewer) = viewer_command(&path) else {
        warn!("No known image viewer on this platform, not showing {:?}", path);
        return Err(CliErrors::Usage(
            "Viewing is not supported on this platform, use convert instead".to_string()
        ));
    };

    let shown = display_copy(pixels)?;
    let png = sink.save_png(&shown)?;

    std::fs::write(&path, &png)?;
    trace!("Wrote {:?} bytes to {:?}", png.len(), path);

    // the viewer reads the file after we exit, so it is only removed
    // when the viewer could not be started
    if let Err(err) = viewer.spawn() {
        let _ = std::fs::remove_file(&path);
        return Err(err.into());
    }

    Ok(path)
}

/// Command that opens `path` in the platform's default viewer
fn viewer_command(path: &Path) -> Option<Command> {
    if cfg!(target_os = "linux") {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        Some(cmd)
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        Some(cmd)
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        Some(cmd)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use zune_img::PixelBuffer;

    use std::path::Path;

    use crate::show_gui::{display_copy, fit_within, viewer_command};

    #[test]
    fn test_fit_within_leaves_small_images() {
        assert_eq!(fit_within(640, 480, 800, 600), (640, 480));
        assert_eq!(fit_within(800, 600, 800, 600), (800, 600));
        assert_eq!(fit_within(1, 1, 800, 600), (1, 1));
    }

    #[test]
    fn test_fit_within_keeps_aspect() {
        assert_eq!(fit_within(1600, 1200, 800, 600), (800, 600));
        assert_eq!(fit_within(1000, 500, 800, 600), (800, 400));
        assert_eq!(fit_within(300, 1200, 800, 600), (150, 600));
    }

    #[test]
    fn test_fit_within_never_collapses() {
        assert_eq!(fit_within(100_000, 1, 800, 600), (800, 1));
    }

    #[test]
    fn test_display_copy_does_not_touch_source() {
        let source = PixelBuffer::new(1000, 2, vec![200; 1000 * 2 * 3]).unwrap();
        let before = source.clone();

        let shown = display_copy(&source).unwrap();

        assert_eq!(shown.dimensions(), (800, 2));
        assert_eq!(source, before);
    }

    #[test]
    fn test_display_copy_of_thin_images() {
        for (width, height, expected) in [(801, 1, (800, 1)), (1, 1200, (1, 600)), (2000, 3, (800, 1))]
        {
            let source = PixelBuffer::new(width, height, vec![90; width * height * 3]).unwrap();
            let shown = display_copy(&source).unwrap();

            assert_eq!(shown.dimensions(), expected);
            // flat input stays flat, give or take float truncation
            assert!(shown.as_bytes().iter().all(|x| (89..=90).contains(x)));
        }
    }

    #[test]
    fn test_display_copy_of_small_image_is_identical() {
        let source = PixelBuffer::new(3, 3, (0..27).collect()).unwrap();
        assert_eq!(display_copy(&source).unwrap(), source);
    }

    #[test]
    fn test_viewer_command_opens_path() {
        let path = Path::new("preview.png");

        if let Some(cmd) = viewer_command(path) {
            assert!(cmd.get_args().any(|x| x == path.as_os_str()));
        }
        #[cfg(target_os = "linux")]
        assert_eq!(viewer_command(path).unwrap().get_program(), "xdg-open");
    }
}

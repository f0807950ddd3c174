/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use zune_image::errors::ImageErrors;
use zune_img::{ImgEncodeErrors, ImgErrors};

/// Everything that can stop a command from completing
pub enum CliErrors {
    /// Bad arguments, a missing file or a wrong extension
    Usage(String),
    /// The container could not be decoded
    Decode(ImgErrors),
    /// The pixels could not be encoded into a container
    Encode(ImgEncodeErrors),
    /// Reading or writing a standard image format failed
    Image(ImageErrors),
    Io(std::io::Error)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::Usage(reason) => writeln!(f, "{reason}"),
            CliErrors::Decode(err) => writeln!(f, "Could not decode container: {:?}", err),
            CliErrors::Encode(err) => writeln!(f, "Could not encode container: {:?}", err),
            CliErrors::Image(err) => writeln!(f, "Image error: {:?}", err),
            CliErrors::Io(err) => writeln!(f, "I/O error: {}", err)
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<ImgErrors> for CliErrors {
    fn from(value: ImgErrors) -> Self {
        CliErrors::Decode(value)
    }
}

impl From<ImgEncodeErrors> for CliErrors {
    fn from(value: ImgEncodeErrors) -> Self {
        CliErrors::Encode(value)
    }
}

impl From<ImageErrors> for CliErrors {
    fn from(value: ImageErrors) -> Self {
        CliErrors::Image(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::Io(value)
    }
}

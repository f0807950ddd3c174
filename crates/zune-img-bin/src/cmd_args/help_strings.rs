/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static ENCODE_HELP: &str = "Encode an image into a .img container

The image is converted to 8 bit RGB, alpha is dropped and only
the first frame of animated images is kept.

Pixels are Paeth filtered and the result is zlib compressed
at the highest level. The container is written next to the
source with a .img extension unless --output is given.";

pub static CONVERT_HELP: &str = "Convert a .img container to png

The container is decoded and written as a lossless png next to
the source with a .png extension unless --output is given.";

pub static VIEW_HELP: &str = "View a .img container

The container is decoded, a copy is scaled down to fit 800x600
and opened in the system's default image viewer.";

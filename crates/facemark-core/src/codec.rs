//! Image codec adapter — decode any supported raster format into an RGBA
//! buffer, encode an RGBA buffer as PNG.

use image::{ImageFormat, ImageReader, RgbaImage};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("failed to read image data: {0}")]
    Read(#[from] std::io::Error),
    #[error("unrecognized or corrupt image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decode an image from the start of `reader` into a fresh RGBA8 buffer.
///
/// The reader is rewound first, so a handle that was already consumed
/// (e.g. to upload its bytes) can be passed in directly. The format is
/// guessed from content, not from a file extension.
pub fn decode<R: Read + Seek>(reader: R) -> Result<RgbaImage, CodecError> {
    let mut reader = BufReader::new(reader);
    reader.seek(SeekFrom::Start(0))?;

    let image = ImageReader::new(reader)
        .with_guessed_format()?
        .decode()
        .map_err(CodecError::Decode)?;

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded image"
    );

    Ok(image.to_rgba8())
}

/// Open and decode the image at `path`.
pub fn decode_file(path: impl AsRef<Path>) -> Result<RgbaImage, CodecError> {
    decode(File::open(path)?)
}

/// Write `image` to `path` as PNG, creating or truncating the file.
pub fn encode(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), CodecError> {
    let path = path.as_ref();
    let write_err = |source| CodecError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| write_err(image::ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(write_err)?;
    writer
        .flush()
        .map_err(|e| write_err(image::ImageError::IoError(e)))?;

    tracing::debug!(path = %path.display(), "encoded PNG");
    Ok(())
}

//! End-to-end annotation run: upload, detect, decode, draw, write.

use crate::annotate::draw_all;
use crate::client::{ClientError, DetectionClient};
use crate::codec::{self, CodecError};
use image::Rgba;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

const OUTPUT_SUFFIX: &str = "_output.png";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("cannot open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Detection(#[from] ClientError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Output location for an annotated copy of `input`.
///
/// A trailing `.png` is stripped before `_output.png` is appended; any other
/// name is used as is (`photo.jpg` becomes `photo.jpg_output.png`).
pub fn output_path(input: &Path) -> PathBuf {
    let name = input.to_string_lossy();
    let stem = name.strip_suffix(".png").unwrap_or(&name);
    PathBuf::from(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Annotate the faces in `input` and write the result next to it.
///
/// Every step must succeed before the output file is created; on error
/// nothing is written. Returns the path of the written PNG.
pub async fn annotate_file(
    input: &Path,
    client: &DetectionClient,
    color: Rgba<u8>,
) -> Result<PathBuf, PipelineError> {
    let mut file = File::open(input).map_err(|source| PipelineError::FileNotFound {
        path: input.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| PipelineError::Read {
            path: input.to_path_buf(),
            source,
        })?;
    tracing::info!(input = %input.display(), len = bytes.len(), "loaded input image");

    let faces = client.detect(bytes).await?;

    let mut image = codec::decode(&mut file)?;
    draw_all(&mut image, &faces, color);

    let output = output_path(input);
    codec::encode(&image, &output)?;
    tracing::info!(
        output = %output.display(),
        faces = faces.len(),
        width = image.width(),
        height = image.height(),
        "wrote annotated image"
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_strips_png() {
        assert_eq!(output_path(Path::new("photo.png")), PathBuf::from("photo_output.png"));
    }

    #[test]
    fn test_output_path_keeps_directory() {
        assert_eq!(
            output_path(Path::new("/tmp/shots/group.png")),
            PathBuf::from("/tmp/shots/group_output.png")
        );
    }

    #[test]
    fn test_output_path_other_suffix_unchanged() {
        assert_eq!(output_path(Path::new("photo.jpg")), PathBuf::from("photo.jpg_output.png"));
        assert_eq!(output_path(Path::new("photo")), PathBuf::from("photo_output.png"));
    }

    #[test]
    fn test_output_path_is_case_sensitive() {
        assert_eq!(output_path(Path::new("photo.PNG")), PathBuf::from("photo.PNG_output.png"));
    }

    #[test]
    fn test_output_path_strips_only_one_suffix() {
        assert_eq!(output_path(Path::new("a.png.png")), PathBuf::from("a.png_output.png"));
    }
}

//! facemark-core — Remote face detection and face outline annotation.
//!
//! Sends raw image bytes to an HTTP face-detection service, then draws a
//! one-pixel rectangle outline around every face it reports.

pub mod annotate;
pub mod client;
pub mod codec;
pub mod pipeline;
pub mod types;

pub use annotate::{draw_all, draw_outline, OUTLINE_COLOR};
pub use client::{ClientError, DetectionClient};
pub use codec::CodecError;
pub use pipeline::{annotate_file, output_path, PipelineError};
pub use types::{DetectedFace, FaceRectangle};

use serde::{Deserialize, Serialize};

/// Axis-aligned face bounding box in absolute pixel coordinates.
///
/// Values are taken verbatim from the detection service; nothing guarantees
/// the box lies inside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRectangle {
    pub width: i32,
    pub height: i32,
    pub left: i32,
    pub top: i32,
}

impl FaceRectangle {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { width, height, left, top }
    }

    /// Column of the right edge (`left + width`), inclusive.
    pub fn right(&self) -> i64 {
        self.left as i64 + self.width as i64
    }

    /// Row of the bottom edge (`top + height`), inclusive.
    pub fn bottom(&self) -> i64 {
        self.top as i64 + self.height as i64
    }
}

/// One element of the detection service response.
///
/// Only `faceRectangle` is consumed; any other keys the service sends
/// (`faceId`, `faceAttributes`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedFace {
    #[serde(rename = "faceRectangle")]
    pub face_rectangle: FaceRectangle,
}

use crate::domain::Card;
use crate::error::AppError;

/// One recognized card in a camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub card: Card,
    /// Model confidence in `[0, 1]`.
    pub confidence: f32,
}

impl Detection {
    pub fn new(card: Card, confidence: f32) -> Self {
        Self { card, confidence }
    }
}

/// Seam to the external object-detection model.
///
/// One call per camera frame; implementations own their model handle and
/// any frame decoding. The scorekeeper only consumes the resulting
/// detections and applies its own confidence threshold.
pub trait CardDetector {
    type Frame;

    fn detect(&mut self, frame: &Self::Frame) -> Result<Vec<Detection>, AppError>;
}

//! Error types for render calls.

use colormatrix_core::ImageFormat;
use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Errors that can abort a render call.
///
/// All variants are fatal for the current call only; the host may
/// re-invoke on its own schedule. Cooperative cancellation is not an
/// error and never surfaces here.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Source and destination clips disagree on depth or layout.
    ///
    /// Raised during setup, before any destination pixel is written.
    #[error("clip mismatch: source is {src}, destination is {dst}")]
    ClipMismatch {
        /// Format of the source image
        src: ImageFormat,
        /// Format of the destination image
        dst: ImageFormat,
    },

    /// Destination format is outside the filter's declared supported set.
    ///
    /// No kernel instantiation exists for the combination; the call fails
    /// instead of silently producing nothing.
    #[error("unsupported destination format: {0}")]
    UnsupportedFormat(ImageFormat),

    /// A core buffer operation failed.
    #[error(transparent)]
    Core(#[from] colormatrix_core::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use colormatrix_core::{BitDepth, ChannelLayout};

    #[test]
    fn test_clip_mismatch_message() {
        let err = RenderError::ClipMismatch {
            src: ImageFormat::new(BitDepth::U8, ChannelLayout::Rgb),
            dst: ImageFormat::new(BitDepth::F32, ChannelLayout::Rgba),
        };
        let msg = err.to_string();
        assert!(msg.contains("u8 RGB"));
        assert!(msg.contains("f32 RGBA"));
    }
}

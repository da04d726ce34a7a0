//! The color-matrix filter and its render entry point.
//!
//! [`ColorMatrixFilter`] ties the injected host collaborators together:
//! per render call it fetches the source frame, verifies clip formats,
//! resolves the four parameter vectors into a [`Matrix44`] and dispatches
//! the matching kernel instantiation over the render window.

use crate::descriptor::FilterDescriptor;
use crate::error::{RenderError, RenderResult};
use crate::host::{AbortQuery, FrameSource, OutputChannel, ParamSource, RenderArgs};
use crate::kernel;
use colormatrix_core::{BitDepth, ChannelLayout, ImageBuf, Matrix44};
use tracing::{debug, trace};

/// A color-matrix filter instance.
///
/// Holds the three host collaborators for the lifetime of the instance;
/// all per-call state (images, matrix, window) is local to one
/// [`render`](Self::render) invocation.
///
/// # Example
///
/// ```rust
/// use colormatrix_core::{BitDepth, ChannelLayout, ImageBuf, Window};
/// use colormatrix_render::{ColorMatrixFilter, ConstantParams, NeverAbort, RenderArgs};
///
/// let source = ImageBuf::from_samples(
///     Window::from_size(2, 1),
///     ChannelLayout::Rgba,
///     vec![0.2f32, 0.4, 0.6, 1.0, 0.1, 0.1, 0.1, 0.5],
/// ).unwrap();
///
/// let filter = ColorMatrixFilter::new(ConstantParams::default(), source.clone(), NeverAbort);
/// let mut dst = ImageBuf::new(source.bounds(), BitDepth::F32, ChannelLayout::Rgba);
/// filter.render(&RenderArgs::new(0.0, dst.bounds()), &mut dst).unwrap();
///
/// // identity defaults: output equals input
/// assert_eq!(dst.pixel_f32(0, 0), Some([0.2, 0.4, 0.6, 1.0]));
/// ```
pub struct ColorMatrixFilter<P, F, A> {
    descriptor: FilterDescriptor,
    params: P,
    source: F,
    abort: A,
}

impl<P, F, A> ColorMatrixFilter<P, F, A>
where
    P: ParamSource,
    F: FrameSource,
    A: AbortQuery,
{
    /// Creates a filter instance with the canonical descriptor.
    pub fn new(params: P, source: F, abort: A) -> Self {
        Self::with_descriptor(FilterDescriptor::color_matrix(), params, source, abort)
    }

    /// Creates a filter instance declaring a custom capability set.
    ///
    /// Hosts that negotiate a narrower set of depths or layouts pass the
    /// narrowed descriptor here; destinations outside it are rejected
    /// with [`RenderError::UnsupportedFormat`].
    pub fn with_descriptor(descriptor: FilterDescriptor, params: P, source: F, abort: A) -> Self {
        Self {
            descriptor,
            params,
            source,
            abort,
        }
    }

    /// The declared describe-time surface.
    pub fn descriptor(&self) -> &FilterDescriptor {
        &self.descriptor
    }

    /// Resolves the four parameter vectors at `time` into a matrix.
    pub fn matrix_at(&self, time: f64) -> Matrix44 {
        Matrix44::from_params(
            self.params.output_vector(OutputChannel::Red, time),
            self.params.output_vector(OutputChannel::Green, time),
            self.params.output_vector(OutputChannel::Blue, time),
            self.params.output_vector(OutputChannel::Alpha, time),
        )
    }

    /// Renders the requested window into the destination image.
    ///
    /// Fails before any pixel is written when the destination format is
    /// outside the declared supported set, or when a connected source
    /// disagrees with the destination on depth or layout. A window
    /// reaching outside the destination bounds is clipped to them.
    ///
    /// Cooperative cancellation is not an error: an aborted call returns
    /// `Ok` with the unvisited rows left untouched.
    ///
    /// # Errors
    ///
    /// [`RenderError::UnsupportedFormat`], [`RenderError::ClipMismatch`].
    pub fn render(&self, args: &RenderArgs, dst: &mut ImageBuf) -> RenderResult<()> {
        let dst_format = dst.format();
        trace!(time = args.time, window = %args.window, "render");

        if !self.descriptor.supports(dst_format) {
            return Err(RenderError::UnsupportedFormat(dst_format));
        }

        let src = self.source.source_frame(args.time);
        if let Some(src) = &src {
            // same depth and same layout, or the call dies here
            if src.format() != dst_format {
                return Err(RenderError::ClipMismatch {
                    src: src.format(),
                    dst: dst_format,
                });
            }
        }

        let matrix = self.matrix_at(args.time);
        let Some(window) = args.window.intersect(&dst.bounds()) else {
            return Ok(());
        };
        debug!(
            time = args.time,
            format = %dst_format,
            window = %window,
            identity = matrix.is_identity(),
            "Rendering color matrix"
        );

        let src = src.as_deref();
        match (dst_format.depth, dst_format.layout) {
            (BitDepth::U8, ChannelLayout::Rgb) => {
                kernel::process_window::<u8, 3>(src, dst, window, &matrix, &self.abort)
            }
            (BitDepth::U8, ChannelLayout::Rgba) => {
                kernel::process_window::<u8, 4>(src, dst, window, &matrix, &self.abort)
            }
            (BitDepth::U16, ChannelLayout::Rgb) => {
                kernel::process_window::<u16, 3>(src, dst, window, &matrix, &self.abort)
            }
            (BitDepth::U16, ChannelLayout::Rgba) => {
                kernel::process_window::<u16, 4>(src, dst, window, &matrix, &self.abort)
            }
            (BitDepth::F32, ChannelLayout::Rgb) => {
                kernel::process_window::<f32, 3>(src, dst, window, &matrix, &self.abort)
            }
            (BitDepth::F32, ChannelLayout::Rgba) => {
                kernel::process_window::<f32, 4>(src, dst, window, &matrix, &self.abort)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ConstantParams, NeverAbort, NoSource};
    use colormatrix_core::{ImageFormat, Window};

    #[test]
    fn test_matrix_at_uses_param_rows() {
        let params = ConstantParams::new(
            [0.5, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        );
        let filter = ColorMatrixFilter::new(params, NoSource, NeverAbort);
        let m = filter.matrix_at(0.0);
        assert_eq!(m.row(0), [0.5, 0.0, 0.0, 0.0]);
        assert!(!m.is_identity());
    }

    #[test]
    fn test_clip_mismatch_rejected_before_write() {
        let src = ImageBuf::new(Window::from_size(2, 2), BitDepth::U8, ChannelLayout::Rgb);
        let filter = ColorMatrixFilter::new(ConstantParams::default(), src, NeverAbort);
        let mut dst = ImageBuf::new(Window::from_size(2, 2), BitDepth::U16, ChannelLayout::Rgb);
        dst.set_pixel_f32(0, 0, [0.5, 0.5, 0.5, 0.5]);
        let before = dst.clone();

        let err = filter
            .render(&RenderArgs::new(0.0, dst.bounds()), &mut dst)
            .unwrap_err();
        assert!(matches!(err, RenderError::ClipMismatch { .. }));
        // nothing was overwritten
        assert_eq!(dst, before);
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let desc = FilterDescriptor {
            depths: &[BitDepth::F32],
            ..FilterDescriptor::color_matrix()
        };
        let filter =
            ColorMatrixFilter::with_descriptor(desc, ConstantParams::default(), NoSource, NeverAbort);
        let mut dst = ImageBuf::new(Window::from_size(2, 2), BitDepth::U8, ChannelLayout::Rgba);

        let err = filter
            .render(&RenderArgs::new(0.0, dst.bounds()), &mut dst)
            .unwrap_err();
        match err {
            RenderError::UnsupportedFormat(fmt) => {
                assert_eq!(fmt, ImageFormat::new(BitDepth::U8, ChannelLayout::Rgba));
            }
            other => panic!("expected UnsupportedFormat, got {other}"),
        }
    }

    #[test]
    fn test_window_outside_bounds_is_noop() {
        let filter = ColorMatrixFilter::new(ConstantParams::default(), NoSource, NeverAbort);
        let mut dst = ImageBuf::new(Window::from_size(4, 4), BitDepth::U8, ChannelLayout::Rgb);
        let off = Window::new(10, 10, 20, 20);
        filter.render(&RenderArgs::new(0.0, off), &mut dst).unwrap();
    }
}

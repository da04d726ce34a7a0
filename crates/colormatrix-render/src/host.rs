//! Host collaborator traits and adapters.
//!
//! The filter never talks to a concrete host application; everything it
//! needs is injected through three small traits:
//!
//! - [`ParamSource`] - the four output vectors, sampled at a time
//! - [`FrameSource`] - the source clip's image for a time (may be absent)
//! - [`AbortQuery`] - the cooperative abort poll, checked per scanline
//!
//! A host plugin shim implements these against its own parameter and clip
//! handles. [`ConstantParams`], [`NoSource`], [`AbortFlag`] and
//! [`NeverAbort`] are ready-made adapters for hosts with static values
//! and for tests.

use colormatrix_core::{ImageBuf, Window};
use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One render invocation: a time-stamped frame and a window to produce.
///
/// Scoped to a single call; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderArgs {
    /// Frame time the parameter vectors and source are sampled at.
    pub time: f64,
    /// Rectangular window of destination pixels to produce.
    pub window: Window,
}

impl RenderArgs {
    /// Creates render arguments for a time and window.
    #[inline]
    pub const fn new(time: f64, window: Window) -> Self {
        Self { time, window }
    }
}

/// The four user-settable output vectors, one per output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputChannel {
    /// Weights of the red output.
    Red,
    /// Weights of the green output.
    Green,
    /// Weights of the blue output.
    Blue,
    /// Weights of the alpha output.
    Alpha,
}

impl OutputChannel {
    /// All four channels in matrix-row order.
    pub const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Blue, Self::Alpha];

    /// The host-visible parameter name, e.g. `"OutputRed"`.
    #[inline]
    pub const fn param_name(self) -> &'static str {
        match self {
            Self::Red => "OutputRed",
            Self::Green => "OutputGreen",
            Self::Blue => "OutputBlue",
            Self::Alpha => "OutputAlpha",
        }
    }

    /// Default vector: the matching row of the identity matrix.
    #[inline]
    pub const fn default_vector(self) -> [f64; 4] {
        match self {
            Self::Red => [1.0, 0.0, 0.0, 0.0],
            Self::Green => [0.0, 1.0, 0.0, 0.0],
            Self::Blue => [0.0, 0.0, 1.0, 0.0],
            Self::Alpha => [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Fetches the current value of one output vector at a time.
///
/// Animation curves and keyframe evaluation are host concerns; the
/// filter only ever sees the resolved 4-tuple for the requested time.
pub trait ParamSource {
    /// The (inR, inG, inB, inA) weights of `channel` at `time`.
    fn output_vector(&self, channel: OutputChannel, time: f64) -> [f64; 4];
}

/// Fetches the source clip's image for a time.
///
/// Returns `None` when the source clip is not connected; the filter then
/// renders black/transparent pixels for the whole window. The frame comes
/// back as a [`Cow`] so a source holding a frame lends it without copying,
/// while one producing frames per call hands over ownership.
pub trait FrameSource {
    /// The source image at `time`, if any.
    fn source_frame(&self, time: f64) -> Option<Cow<'_, ImageBuf>>;
}

/// Cooperative abort poll.
///
/// The kernel checks this between scanlines and stops early, without
/// error, once it returns `true`. `Sync` because concurrent row bands
/// poll it from multiple threads.
pub trait AbortQuery: Sync {
    /// `true` once the host no longer needs the result.
    fn aborted(&self) -> bool;
}

/// Time-invariant parameter vectors.
///
/// Defaults to the identity transform.
///
/// # Example
///
/// ```rust
/// use colormatrix_render::{ConstantParams, OutputChannel, ParamSource};
///
/// let params = ConstantParams::default();
/// assert_eq!(params.output_vector(OutputChannel::Red, 0.0), [1.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantParams {
    rows: [[f64; 4]; 4],
}

impl ConstantParams {
    /// Creates constant vectors for the four output channels.
    #[inline]
    pub const fn new(red: [f64; 4], green: [f64; 4], blue: [f64; 4], alpha: [f64; 4]) -> Self {
        Self {
            rows: [red, green, blue, alpha],
        }
    }

    /// Identity vectors (output equals input).
    #[inline]
    pub const fn identity() -> Self {
        Self::new(
            OutputChannel::Red.default_vector(),
            OutputChannel::Green.default_vector(),
            OutputChannel::Blue.default_vector(),
            OutputChannel::Alpha.default_vector(),
        )
    }
}

impl Default for ConstantParams {
    fn default() -> Self {
        Self::identity()
    }
}

impl ParamSource for ConstantParams {
    #[inline]
    fn output_vector(&self, channel: OutputChannel, _time: f64) -> [f64; 4] {
        match channel {
            OutputChannel::Red => self.rows[0],
            OutputChannel::Green => self.rows[1],
            OutputChannel::Blue => self.rows[2],
            OutputChannel::Alpha => self.rows[3],
        }
    }
}

/// A disconnected source clip: every fetch returns `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl FrameSource for NoSource {
    #[inline]
    fn source_frame(&self, _time: f64) -> Option<Cow<'_, ImageBuf>> {
        None
    }
}

/// A single image serving as the source for every time, lent by reference.
impl FrameSource for ImageBuf {
    #[inline]
    fn source_frame(&self, _time: f64) -> Option<Cow<'_, ImageBuf>> {
        Some(Cow::Borrowed(self))
    }
}

/// An abort query that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverAbort;

impl AbortQuery for NeverAbort {
    #[inline]
    fn aborted(&self) -> bool {
        false
    }
}

/// Shared abort flag a host can raise from another thread.
///
/// Cloning shares the underlying flag.
///
/// # Example
///
/// ```rust
/// use colormatrix_render::{AbortFlag, AbortQuery};
///
/// let flag = AbortFlag::new();
/// let shared = flag.clone();
/// assert!(!flag.aborted());
/// shared.signal();
/// assert!(flag.aborted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    /// Creates an unraised flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of the in-flight render.
    pub fn signal(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl AbortQuery for AbortFlag {
    #[inline]
    fn aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

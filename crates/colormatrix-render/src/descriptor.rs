//! Plugin identity and capability metadata.
//!
//! What the filter declares to the host during the describe handshake:
//! its label, the filter context, which depths and layouts it can render,
//! its two clips ("Source" in, "Output" out) and its four vector
//! parameters with identity defaults. The host reads this once; the data
//! never changes at render time.

use crate::host::OutputChannel;
use colormatrix_core::{BitDepth, ChannelLayout, ImageFormat};

/// Contexts the filter can be instantiated in.
///
/// Only the plain filter context (one source in, one output out) is
/// declared; general/transition/generator contexts are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectContext {
    /// One source clip, one output clip.
    Filter,
}

/// A clip slot the filter declares to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipDecl {
    /// Host-visible clip name.
    pub name: &'static str,
    /// Whether this is the output clip.
    pub is_output: bool,
    /// Component layouts the clip accepts.
    pub layouts: &'static [ChannelLayout],
}

/// One of the four vector parameters the filter declares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDecl {
    /// Which matrix row this parameter feeds.
    pub channel: OutputChannel,
    /// Host-visible parameter name.
    pub name: &'static str,
    /// UI label.
    pub label: &'static str,
    /// UI hint text.
    pub hint: &'static str,
    /// Default value (a row of the identity matrix).
    pub default: [f64; 4],
    /// Whether the host may animate the parameter.
    pub animates: bool,
}

/// The filter's full describe-time surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterDescriptor {
    /// Display label.
    pub label: &'static str,
    /// Plugin grouping shown in host menus.
    pub grouping: &'static str,
    /// Supported instantiation context.
    pub context: EffectContext,
    /// Supported sample representations.
    pub depths: &'static [BitDepth],
    /// Supported component layouts.
    pub layouts: &'static [ChannelLayout],
    /// Declared clips.
    pub clips: &'static [ClipDecl],
    /// Declared parameters, in matrix-row order.
    pub params: &'static [ParamDecl],
}

const SUPPORTED_DEPTHS: &[BitDepth] = &[BitDepth::U8, BitDepth::U16, BitDepth::F32];
const SUPPORTED_LAYOUTS: &[ChannelLayout] = &[ChannelLayout::Rgb, ChannelLayout::Rgba];

const CLIPS: &[ClipDecl] = &[
    ClipDecl {
        name: "Source",
        is_output: false,
        layouts: SUPPORTED_LAYOUTS,
    },
    ClipDecl {
        name: "Output",
        is_output: true,
        layouts: SUPPORTED_LAYOUTS,
    },
];

const PARAMS: &[ParamDecl] = &[
    ParamDecl {
        channel: OutputChannel::Red,
        name: "OutputRed",
        label: "output_red",
        hint: "values for red output component.",
        default: OutputChannel::Red.default_vector(),
        animates: true,
    },
    ParamDecl {
        channel: OutputChannel::Green,
        name: "OutputGreen",
        label: "output_green",
        hint: "values for green output component.",
        default: OutputChannel::Green.default_vector(),
        animates: true,
    },
    ParamDecl {
        channel: OutputChannel::Blue,
        name: "OutputBlue",
        label: "output_blue",
        hint: "values for blue output component.",
        default: OutputChannel::Blue.default_vector(),
        animates: true,
    },
    ParamDecl {
        channel: OutputChannel::Alpha,
        name: "OutputAlpha",
        label: "output_alpha",
        hint: "values for alpha output component.",
        default: OutputChannel::Alpha.default_vector(),
        animates: true,
    },
];

impl FilterDescriptor {
    /// The canonical color-matrix filter descriptor.
    pub const fn color_matrix() -> Self {
        Self {
            label: "ColorMatrix",
            grouping: "Color",
            context: EffectContext::Filter,
            depths: SUPPORTED_DEPTHS,
            layouts: SUPPORTED_LAYOUTS,
            clips: CLIPS,
            params: PARAMS,
        }
    }

    /// Whether a destination format can be rendered.
    pub fn supports(&self, format: ImageFormat) -> bool {
        self.depths.contains(&format.depth) && self.layouts.contains(&format.layout)
    }

    /// The declared source clip, if any.
    pub fn source_clip(&self) -> Option<&ClipDecl> {
        self.clips.iter().find(|c| !c.is_output)
    }

    /// The declared output clip, if any.
    pub fn output_clip(&self) -> Option<&ClipDecl> {
        self.clips.iter().find(|c| c.is_output)
    }

    /// The declared parameter feeding `channel`, if any.
    pub fn param(&self, channel: OutputChannel) -> Option<&ParamDecl> {
        self.params.iter().find(|p| p.channel == channel)
    }
}

impl Default for FilterDescriptor {
    fn default() -> Self {
        Self::color_matrix()
    }
}

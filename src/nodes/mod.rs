//! Live graph nodes.
//!
//! Nodes here are parameter holders, not processors: the embedding engine
//! reads them each audio frame and does the actual filtering, convolution,
//! compression, and spatialization. Organized into three categories:
//! - `source`: the single playable media element
//! - `effect`: analyser, peaking filters, convolver, compressor, panner, gain
//! - `sink`: the graph terminal / output device selection

pub mod source;
pub mod effect;
pub mod sink;

// Re-export common types at the top level for convenience
pub use source::{MediaErrorCode, MediaEvent, MediaSource, Subscription};
pub use effect::{Analyser, Compressor, Convolver, Gain, PannerNode, PeakingFilter};
pub use sink::Destination;

//! Control layer for a playable audio stream's processing graph.
//!
//! Builds a fixed signal chain once - media source, analyser tap, ten-band
//! equalizer, convolution-reverb send/return, compressor, 3D panner, master
//! gain - then exposes mutation operations that adjust live node parameters
//! without rebuilding. Filtering, convolution, and device output are the
//! embedding engine's job; nodes here are the parameters it reads.
//!
//! Design principles:
//! - One [`Player`] per stream: owned state, no process-wide globals
//! - Lazy, idempotent graph construction behind an explicit state machine
//! - Synchronous parameter writes on a single thread, no locks
//! - The orbit animation is a cooperative repeating task driven by
//!   [`Player::poll`], cancellable from any state

mod device;
mod eq;
mod error;
mod graph;
mod orbit;
mod player;
pub mod nodes;
mod reverb;

pub use device::OutputDevice;
pub use eq::{preset_by_name, BandFreq, EqPreset, BAND_Q, EQ_PRESETS};
pub use error::{PlayerError, Result};
pub use graph::AudioGraph;
pub use orbit::{Orbit, DEFAULT_RADIUS};
pub use player::Player;
pub use reverb::{profile_by_name, ImpulseResponse, ReverbProfile, REVERB_PROFILES};

pub use nodes::{MediaErrorCode, MediaEvent, Subscription};

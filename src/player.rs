//! The player context - owns the media source, the processing graph, and
//! the orbit animation.
//!
//! One `Player` is one playable stream. The graph is constructed lazily and
//! exactly once: every node-level accessor routes through
//! [`ensure_graph`](Player::ensure_graph), which is a pure no-op once the
//! graph exists. Mutations act on live node parameters; the topology is
//! never altered after construction.

use std::time::Instant;

use tracing::debug;

use crate::device::OutputDevice;
use crate::eq::{BandFreq, EqPreset};
use crate::error::{PlayerError, Result};
use crate::graph::AudioGraph;
use crate::nodes::{
    Analyser, Compressor, MediaErrorCode, MediaEvent, MediaSource, Subscription,
};
use crate::orbit::Orbit;
use crate::reverb::ImpulseResponse;

/// Initialization state of the processing graph.
enum GraphState {
    Uninitialized,
    Ready(AudioGraph),
}

/// Control layer for a single playable audio stream.
///
/// # Example
///
/// ```
/// use raumklang::{BandFreq, Player};
///
/// let mut player = Player::new();
/// player.create_source();
/// player.set_resource("track.ogg");
///
/// // first graph accessor builds the graph
/// player.set_band_gain(BandFreq::Hz125, -3.0)?;
/// assert!(player.has_graph());
/// # Ok::<(), raumklang::PlayerError>(())
/// ```
pub struct Player {
    source: Option<MediaSource>,
    graph: GraphState,
    orbit: Orbit,
}

impl Player {
    /// Create a player with no media source and no graph.
    pub fn new() -> Self {
        Self {
            source: None,
            graph: GraphState::Uninitialized,
            orbit: Orbit::new(),
        }
    }

    // --- source lifecycle ---

    /// Create the media source. Idempotent; the source lives for the
    /// player's lifetime once created.
    pub fn create_source(&mut self) {
        if self.source.is_some() {
            return;
        }
        self.source = Some(MediaSource::new());
        debug!("media source created");
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Direct access to the media source, if created. The embedding engine
    /// uses this to report duration, progress, and media events.
    pub fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }

    pub fn source_mut(&mut self) -> Option<&mut MediaSource> {
        self.source.as_mut()
    }

    // --- graph bootstrap ---

    /// Build the processing graph if it does not exist yet.
    ///
    /// Fails with [`PlayerError::SourceUninitialized`] when called before
    /// [`create_source`](Self::create_source); otherwise a repeated call is
    /// a no-op and node identity is stable across calls.
    pub fn ensure_graph(&mut self) -> Result<()> {
        if let GraphState::Ready(_) = self.graph {
            return Ok(());
        }
        if self.source.is_none() {
            return Err(PlayerError::SourceUninitialized);
        }
        self.graph = GraphState::Ready(AudioGraph::build());
        Ok(())
    }

    pub fn has_graph(&self) -> bool {
        matches!(self.graph, GraphState::Ready(_))
    }

    /// The graph, if already built. Never triggers construction.
    pub fn graph(&self) -> Option<&AudioGraph> {
        match &self.graph {
            GraphState::Ready(g) => Some(g),
            GraphState::Uninitialized => None,
        }
    }

    fn graph_mut(&mut self) -> Result<&mut AudioGraph> {
        self.ensure_graph()?;
        match &mut self.graph {
            GraphState::Ready(g) => Ok(g),
            GraphState::Uninitialized => unreachable!("ensure_graph just succeeded"),
        }
    }

    // --- equalizer ---

    /// Set one band's gain in dB.
    pub fn set_band_gain(&mut self, band: BandFreq, db: f32) -> Result<()> {
        self.graph_mut()?.set_band_gain(band, db);
        Ok(())
    }

    /// Set a band's gain by raw center frequency. Frequencies outside the
    /// fixed ten-band set are rejected with [`PlayerError::UnknownBand`].
    pub fn set_band_gain_hz(&mut self, hz: u32, db: f32) -> Result<()> {
        let band = BandFreq::try_from_hertz(hz)?;
        self.set_band_gain(band, db)
    }

    pub fn band_gain(&mut self, band: BandFreq) -> Result<f32> {
        Ok(self.graph_mut()?.band_gain(band))
    }

    /// Apply a preset's ten gains in one pass.
    pub fn apply_preset(&mut self, preset: &EqPreset) -> Result<()> {
        self.graph_mut()?.apply_preset(preset);
        Ok(())
    }

    // --- convolution reverb ---

    /// Replace the active impulse response. Passing `None` clears it and
    /// forces the transparent gain pair (source 1, return 0) regardless of
    /// the gains given.
    pub fn load_impulse(
        &mut self,
        buffer: Option<ImpulseResponse>,
        source_gain: f32,
        return_gain: f32,
    ) -> Result<()> {
        self.graph_mut()?.load_impulse(buffer, source_gain, return_gain);
        Ok(())
    }

    pub fn set_reverb_source_gain(&mut self, gain: f32) -> Result<()> {
        self.graph_mut()?.set_reverb_source_gain(gain);
        Ok(())
    }

    pub fn set_reverb_return_gain(&mut self, gain: f32) -> Result<()> {
        self.graph_mut()?.set_reverb_return_gain(gain);
        Ok(())
    }

    pub fn reverb_source_gain(&mut self) -> Result<f32> {
        Ok(self.graph_mut()?.reverb_source_gain())
    }

    pub fn reverb_return_gain(&mut self) -> Result<f32> {
        Ok(self.graph_mut()?.reverb_return_gain())
    }

    pub fn has_impulse(&mut self) -> Result<bool> {
        Ok(self.graph_mut()?.has_impulse())
    }

    // --- spatial panner / orbit ---

    /// Begin (or restart) the circular motion. Any running timer is
    /// cancelled first and the angle rewinds to zero; ticks are due every
    /// `speed * 10` milliseconds from `now`.
    pub fn start_orbit(&mut self, now: Instant) -> Result<()> {
        self.ensure_graph()?;
        self.orbit.start(now);
        Ok(())
    }

    /// Stop the motion, rewind the angle, and pin the position back to the
    /// origin. Idempotent: stopping an idle orbit is a no-op apart from the
    /// position write.
    pub fn stop_orbit(&mut self) -> Result<()> {
        self.orbit.stop();
        self.graph_mut()?.set_panner_position(0.0, 0.0, 0.0);
        Ok(())
    }

    /// Change the tick period. While orbiting this restarts the orbit from
    /// angle zero at the new cadence.
    pub fn set_orbit_speed(&mut self, speed: f32, now: Instant) {
        self.orbit.set_speed(speed, now);
    }

    /// Change the radius scale applied to future position writes.
    pub fn set_orbit_radius(&mut self, radius: f32) {
        self.orbit.set_radius(radius);
    }

    /// Drive the cooperative orbit timer: run every tick due by `now` and
    /// write the resulting position to the panner node. Call this from the
    /// embedding event loop; a no-op while idle.
    pub fn poll(&mut self, now: Instant) {
        if let Some((x, y, z)) = self.orbit.poll(now) {
            if let GraphState::Ready(g) = &mut self.graph {
                g.set_panner_position(x, y, z);
            }
        }
    }

    pub fn is_orbiting(&self) -> bool {
        self.orbit.is_orbiting()
    }

    pub fn orbit_angle(&self) -> u32 {
        self.orbit.angle()
    }

    pub fn orbit_speed(&self) -> f32 {
        self.orbit.speed()
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit.radius()
    }

    pub fn orbit_tick_period(&self) -> std::time::Duration {
        self.orbit.tick_period()
    }

    pub fn panner_position(&mut self) -> Result<(f32, f32, f32)> {
        Ok(self.graph_mut()?.panner_position())
    }

    // --- gain staging / taps ---

    pub fn set_master_gain(&mut self, gain: f32) -> Result<()> {
        self.graph_mut()?.set_master_gain(gain);
        Ok(())
    }

    pub fn master_gain(&mut self) -> Result<f32> {
        Ok(self.graph_mut()?.master_gain())
    }

    /// The visualization tap at the graph's midpoint.
    pub fn analyser(&mut self) -> Result<&Analyser> {
        Ok(self.graph_mut()?.analyser())
    }

    pub fn compressor(&mut self) -> Result<&Compressor> {
        Ok(self.graph_mut()?.compressor())
    }

    // --- transport passthrough ---
    //
    // Thin wrappers over the media source. Setters tolerate a missing
    // source, getters fall back to the element defaults; only graph
    // accessors and event subscriptions fail fast.

    pub fn set_resource(&mut self, uri: impl Into<String>) {
        if let Some(source) = self.source.as_mut() {
            source.set_src(uri);
        }
    }

    pub fn play(&mut self) {
        if let Some(source) = self.source.as_mut() {
            source.play();
        }
    }

    pub fn pause(&mut self) {
        if let Some(source) = self.source.as_mut() {
            source.pause();
        }
    }

    /// Stop playback and clear the resource URI.
    pub fn stop(&mut self) {
        if let Some(source) = self.source.as_mut() {
            source.clear();
        }
    }

    /// True when no resource is loaded (or no source exists yet).
    pub fn is_empty(&self) -> bool {
        self.source.as_ref().map_or(true, |s| s.is_empty())
    }

    pub fn set_looping(&mut self, looping: bool) {
        if let Some(source) = self.source.as_mut() {
            source.set_looping(looping);
        }
    }

    pub fn muted(&self) -> bool {
        self.source.as_ref().map_or(false, |s| s.muted())
    }

    pub fn set_muted(&mut self, muted: bool) {
        if let Some(source) = self.source.as_mut() {
            source.set_muted(muted);
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        if let Some(source) = self.source.as_mut() {
            source.set_volume(volume);
        }
    }

    pub fn playback_rate(&self) -> f32 {
        self.source.as_ref().map_or(1.0, |s| s.default_playback_rate())
    }

    pub fn set_playback_rate(&mut self, rate: f32) {
        if let Some(source) = self.source.as_mut() {
            source.set_playback_rate(rate);
        }
    }

    pub fn set_preserves_pitch(&mut self, preserves: bool) {
        if let Some(source) = self.source.as_mut() {
            source.set_preserves_pitch(preserves);
        }
    }

    pub fn current_time(&self) -> f64 {
        self.source.as_ref().map_or(0.0, |s| s.current_time())
    }

    pub fn set_current_time(&mut self, secs: f64) {
        if let Some(source) = self.source.as_mut() {
            source.set_current_time(secs);
        }
    }

    pub fn duration(&self) -> f64 {
        self.source.as_ref().map_or(0.0, |s| s.duration())
    }

    /// Last engine-reported playback error, if any.
    pub fn error_code(&self) -> Option<MediaErrorCode> {
        self.source.as_ref().and_then(|s| s.error_code())
    }

    /// Route playback to the named output device.
    ///
    /// Resolves the device eagerly; an unknown or unavailable name fails
    /// with [`PlayerError::DeviceUnavailable`] and leaves the routing
    /// unchanged. No retry is attempted.
    pub fn select_output(&mut self, name: &str) -> Result<()> {
        self.ensure_graph()?;
        let device = OutputDevice::find_output(name)
            .ok_or_else(|| PlayerError::DeviceUnavailable(name.to_owned()))?;
        debug!(device = device.name(), "output device selected");
        self.graph_mut()?.destination_mut().set_device(device.name());
        Ok(())
    }

    // --- events ---

    /// Subscribe to a named media event. Returns the unsubscribe handle.
    pub fn on(
        &mut self,
        event: MediaEvent,
        callback: impl FnMut() + 'static,
    ) -> Result<Subscription> {
        let source = self
            .source
            .as_mut()
            .ok_or(PlayerError::SourceUninitialized)?;
        Ok(source.subscribe(event, callback))
    }

    /// Detach a previously subscribed callback.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        if let Some(source) = self.source.as_mut() {
            source.unsubscribe(subscription);
        }
    }

    /// Report an engine-observed media event to subscribers.
    pub fn notify(&mut self, event: MediaEvent) {
        if let Some(source) = self.source.as_mut() {
            source.emit(event);
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

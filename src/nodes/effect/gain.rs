//! Gain/volume control node

/// A gain stage. The engine multiplies the signal by `gain` (1.0 = unity,
/// 0.0 = silence); smoothing of rapid changes is the engine's concern.
#[derive(Clone, Copy, Debug)]
pub struct Gain {
    gain: f32,
}

impl Gain {
    /// Create a new gain node with the specified gain value.
    pub fn new(gain: f32) -> Self {
        Self { gain }
    }

    /// Unity gain.
    pub fn unity() -> Self {
        Self::new(1.0)
    }

    #[inline]
    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }
}

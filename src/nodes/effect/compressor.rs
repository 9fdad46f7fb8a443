//! Dynamics compressor node

/// Dynamics compression stage merging the dry and wet paths before the
/// panner. Parameters carry the engine's stock defaults; nothing in the
/// control surface mutates them today, but they are readable for display.
#[derive(Clone, Copy, Debug)]
pub struct Compressor {
    threshold_db: f32,
    knee_db: f32,
    ratio: f32,
    attack_secs: f32,
    release_secs: f32,
}

impl Default for Compressor {
    fn default() -> Self {
        Self {
            threshold_db: -24.0,
            knee_db: 30.0,
            ratio: 12.0,
            attack_secs: 0.003,
            release_secs: 0.25,
        }
    }
}

impl Compressor {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn threshold_db(&self) -> f32 {
        self.threshold_db
    }

    #[inline]
    pub fn knee_db(&self) -> f32 {
        self.knee_db
    }

    #[inline]
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    #[inline]
    pub fn attack_secs(&self) -> f32 {
        self.attack_secs
    }

    #[inline]
    pub fn release_secs(&self) -> f32 {
        self.release_secs
    }
}

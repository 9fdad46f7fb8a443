//! Peaking filter node - one equalizer band

use crate::eq::{BandFreq, BAND_Q};

/// One fixed-frequency peaking filter stage in the equalizer chain.
///
/// Center frequency and Q are fixed at construction; only the gain mutates
/// over the node's lifetime.
#[derive(Clone, Copy, Debug)]
pub struct PeakingFilter {
    band: BandFreq,
    q: f32,
    gain_db: f32,
}

impl PeakingFilter {
    /// Create a band filter at the given center frequency, unity gain.
    pub fn new(band: BandFreq) -> Self {
        Self {
            band,
            q: BAND_Q,
            gain_db: 0.0,
        }
    }

    #[inline]
    pub fn band(&self) -> BandFreq {
        self.band
    }

    /// Center frequency in hertz.
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.band.hertz()
    }

    #[inline]
    pub fn q(&self) -> f32 {
        self.q
    }

    #[inline]
    pub fn gain_db(&self) -> f32 {
        self.gain_db
    }

    pub fn set_gain_db(&mut self, db: f32) {
        self.gain_db = db;
    }
}

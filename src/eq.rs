//! Equalizer band identifiers and preset tables.
//!
//! The equalizer is a serial chain of ten peaking filters at fixed center
//! frequencies. Bands are identified by [`BandFreq`] rather than raw hertz
//! values, so a preset is total by construction: one gain per variant, no
//! partial maps.

use crate::error::{PlayerError, Result};

/// Fixed Q for every band in the chain.
pub const BAND_Q: f32 = 1.4;

/// One of the ten fixed equalizer center frequencies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BandFreq {
    Hz31,
    Hz62,
    Hz125,
    Hz250,
    Hz500,
    Hz1000,
    Hz2000,
    Hz4000,
    Hz8000,
    Hz16000,
}

impl BandFreq {
    /// All bands in ascending frequency order. The chain is wired in exactly
    /// this order.
    pub const ALL: [BandFreq; 10] = [
        BandFreq::Hz31,
        BandFreq::Hz62,
        BandFreq::Hz125,
        BandFreq::Hz250,
        BandFreq::Hz500,
        BandFreq::Hz1000,
        BandFreq::Hz2000,
        BandFreq::Hz4000,
        BandFreq::Hz8000,
        BandFreq::Hz16000,
    ];

    /// Center frequency in hertz.
    pub fn hertz(self) -> u32 {
        match self {
            BandFreq::Hz31 => 31,
            BandFreq::Hz62 => 62,
            BandFreq::Hz125 => 125,
            BandFreq::Hz250 => 250,
            BandFreq::Hz500 => 500,
            BandFreq::Hz1000 => 1000,
            BandFreq::Hz2000 => 2000,
            BandFreq::Hz4000 => 4000,
            BandFreq::Hz8000 => 8000,
            BandFreq::Hz16000 => 16000,
        }
    }

    /// Look up a band by its center frequency.
    pub fn from_hertz(hz: u32) -> Option<BandFreq> {
        BandFreq::ALL.iter().copied().find(|b| b.hertz() == hz)
    }

    /// Position of this band in the chain (0 = lowest frequency).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Validating variant of [`from_hertz`](Self::from_hertz).
    pub fn try_from_hertz(hz: u32) -> Result<BandFreq> {
        BandFreq::from_hertz(hz).ok_or(PlayerError::UnknownBand(hz))
    }
}

/// A named equalizer preset: one gain (dB) per band, in `BandFreq::ALL` order.
#[derive(Clone, Copy, Debug)]
pub struct EqPreset {
    pub name: &'static str,
    pub gains: [f32; 10],
}

impl EqPreset {
    /// Gain this preset assigns to `band`.
    pub fn gain(&self, band: BandFreq) -> f32 {
        self.gains[band.index()]
    }
}

/// The built-in preset table.
///
/// Gains are listed 31 Hz through 16 kHz.
pub const EQ_PRESETS: [EqPreset; 10] = [
    EqPreset { name: "flat", gains: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0] },
    EqPreset { name: "pop", gains: [6.0, 5.0, -3.0, -2.0, 5.0, 4.0, -4.0, -3.0, 6.0, 4.0] },
    EqPreset { name: "dance", gains: [4.0, 3.0, -4.0, -6.0, 0.0, 0.0, 3.0, 4.0, 4.0, 5.0] },
    EqPreset { name: "rock", gains: [7.0, 6.0, 2.0, 1.0, -3.0, -4.0, 2.0, 1.0, 4.0, 5.0] },
    EqPreset { name: "classical", gains: [6.0, 7.0, 1.0, 2.0, -1.0, 1.0, -4.0, -6.0, -7.0, -8.0] },
    EqPreset { name: "vocal", gains: [-5.0, -6.0, -4.0, -3.0, 3.0, 4.0, 5.0, 4.0, -3.0, -3.0] },
    EqPreset { name: "slow", gains: [5.0, 4.0, 2.0, 0.0, -2.0, 0.0, 3.0, 6.0, 7.0, 8.0] },
    EqPreset { name: "electronic", gains: [6.0, 5.0, 0.0, -5.0, -4.0, 0.0, 6.0, 8.0, 8.0, 7.0] },
    EqPreset { name: "subwoofer", gains: [8.0, 7.0, 5.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0] },
    EqPreset { name: "soft", gains: [-5.0, -5.0, -4.0, -4.0, 3.0, 2.0, 4.0, 4.0, 0.0, 0.0] },
];

/// Find a built-in preset by name.
pub fn preset_by_name(name: &str) -> Option<&'static EqPreset> {
    EQ_PRESETS.iter().find(|p| p.name == name)
}

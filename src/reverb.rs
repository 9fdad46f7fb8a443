//! Impulse responses and the built-in reverb profile table.

/// A pre-decoded impulse response, supplied by the caller.
///
/// Interleaved samples, same shape the engine expects for any pre-decoded
/// buffer. This crate never decodes or convolves; the buffer is handed to
/// the convolver node as-is.
#[derive(Clone, Debug)]
pub struct ImpulseResponse {
    samples: Vec<f32>,
    channels: usize,
    sample_rate: u32,
}

impl ImpulseResponse {
    /// Create an impulse response from interleaved samples.
    pub fn new(samples: Vec<f32>, channels: usize, sample_rate: u32) -> Self {
        Self {
            samples,
            channels: channels.max(1),
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        (self.samples.len() / self.channels) as f64 / self.sample_rate as f64
    }
}

/// A named reverb profile: an impulse-response resource plus the gain pair
/// to apply when it is loaded.
///
/// `source_gain` weights the dry send, `return_gain` weights the wet return.
#[derive(Clone, Copy, Debug)]
pub struct ReverbProfile {
    pub name: &'static str,
    pub source_gain: f32,
    pub return_gain: f32,
    /// Resource identifier of the impulse-response file. Fetching and
    /// decoding it is the caller's job.
    pub resource: &'static str,
}

/// The built-in profile table.
pub const REVERB_PROFILES: [ReverbProfile; 13] = [
    ReverbProfile { name: "telephone", source_gain: 0.0, return_gain: 3.0, resource: "filter-telephone.wav" },
    ReverbProfile { name: "s2_r4_bd", source_gain: 1.8, return_gain: 0.9, resource: "s2_r4_bd.wav" },
    ReverbProfile { name: "bright_hall", source_gain: 0.8, return_gain: 2.4, resource: "bright-hall.wav" },
    ReverbProfile { name: "cinema_diningroom", source_gain: 0.6, return_gain: 2.3, resource: "cinema-diningroom.wav" },
    ReverbProfile { name: "dining_living_true_stereo", source_gain: 0.6, return_gain: 1.8, resource: "dining-living-true-stereo.wav" },
    ReverbProfile { name: "living_bedroom_leveled", source_gain: 0.6, return_gain: 2.1, resource: "living-bedroom-leveled.wav" },
    ReverbProfile { name: "spreader50_65ms", source_gain: 1.0, return_gain: 2.5, resource: "spreader50-65ms.wav" },
    ReverbProfile { name: "s3_r1_bd", source_gain: 1.8, return_gain: 0.8, resource: "s3_r1_bd.wav" },
    ReverbProfile { name: "matrix_1", source_gain: 1.5, return_gain: 0.9, resource: "matrix-reverb1.wav" },
    ReverbProfile { name: "matrix_2", source_gain: 1.3, return_gain: 1.0, resource: "matrix-reverb2.wav" },
    ReverbProfile { name: "cardiod_35_10_spread", source_gain: 1.8, return_gain: 0.6, resource: "cardiod-35-10-spread.wav" },
    ReverbProfile { name: "tim_omni_35_10_magnetic", source_gain: 1.0, return_gain: 0.2, resource: "tim-omni-35-10-magnetic.wav" },
    ReverbProfile { name: "feedback_spring", source_gain: 1.8, return_gain: 0.8, resource: "feedback-spring.wav" },
];

/// Find a built-in profile by name.
pub fn profile_by_name(name: &str) -> Option<&'static ReverbProfile> {
    REVERB_PROFILES.iter().find(|p| p.name == name)
}

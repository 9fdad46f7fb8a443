//! Output device discovery.
//!
//! Playback routing is the engine's job; this layer only resolves a
//! requested device so [`Player::select_output`](crate::Player::select_output)
//! can validate the name and record it on the graph's destination node.
//! Without the `cpal_device` feature, discovery reports no devices and every
//! selection fails.

#[cfg(feature = "cpal_device")]
use cpal::traits::{DeviceTrait, HostTrait};

/// A discovered audio output device.
pub struct OutputDevice {
    #[cfg(feature = "cpal_device")]
    #[allow(dead_code)]
    device: cpal::Device,

    name: String,
    sample_rate: u32,
    channels: u16,
}

impl OutputDevice {
    /// Get the system's default output device, if any.
    #[cfg(feature = "cpal_device")]
    pub fn default_output() -> Option<Self> {
        let host = cpal::default_host();
        let device = host.default_output_device()?;
        let config = device.default_output_config().ok()?;
        let name = device.name().unwrap_or_else(|_| "Unknown".into());

        Some(Self {
            sample_rate: config.sample_rate().0,
            channels: config.channels(),
            name,
            device,
        })
    }

    #[cfg(not(feature = "cpal_device"))]
    pub fn default_output() -> Option<Self> {
        None
    }

    /// List all available output devices. Empty when enumeration fails.
    #[cfg(feature = "cpal_device")]
    pub fn list_outputs() -> Vec<Self> {
        let host = cpal::default_host();
        host.output_devices()
            .map(|devices| {
                devices
                    .filter_map(|device| {
                        let config = device.default_output_config().ok()?;
                        let name = device.name().unwrap_or_else(|_| "Unknown".into());
                        Some(Self {
                            sample_rate: config.sample_rate().0,
                            channels: config.channels(),
                            name,
                            device,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[cfg(not(feature = "cpal_device"))]
    pub fn list_outputs() -> Vec<Self> {
        Vec::new()
    }

    /// Find an output device by exact name.
    pub fn find_output(name: &str) -> Option<Self> {
        Self::list_outputs().into_iter().find(|d| d.name == name)
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the device's sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of output channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

//! Error taxonomy for the control layer.
//!
//! Construction-time failures are immediate and returned to the caller.
//! Runtime media errors (decode, network) are never returned synchronously;
//! they surface through the [`MediaEvent::Error`](crate::MediaEvent::Error)
//! subscription and the source's last-error code.

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PlayerError>;

/// Errors returned by [`Player`](crate::Player) operations.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// A graph accessor or event subscription was used before
    /// [`Player::create_source`](crate::Player::create_source).
    #[error("media source not created yet")]
    SourceUninitialized,

    /// An equalizer mutation referenced a frequency outside the fixed
    /// ten-band set.
    #[error("no equalizer band at {0} Hz")]
    UnknownBand(u32),

    /// The requested output device could not be found or opened.
    #[error("output device unavailable: {0}")]
    DeviceUnavailable(String),
}

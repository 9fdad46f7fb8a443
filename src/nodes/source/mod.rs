mod media;

pub use media::{MediaErrorCode, MediaEvent, MediaSource, Preload, Subscription};

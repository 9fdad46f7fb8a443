//! Convolver node - holds the active impulse response

use crate::reverb::ImpulseResponse;

/// The wet-path convolution stage.
///
/// Holds at most one impulse response; with no buffer loaded the engine
/// treats the node as silent and the stage degenerates to the dry path.
#[derive(Clone, Debug, Default)]
pub struct Convolver {
    buffer: Option<ImpulseResponse>,
}

impl Convolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active impulse response. `None` clears it.
    pub fn set_buffer(&mut self, buffer: Option<ImpulseResponse>) {
        self.buffer = buffer;
    }

    pub fn buffer(&self) -> Option<&ImpulseResponse> {
        self.buffer.as_ref()
    }

    #[inline]
    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }
}

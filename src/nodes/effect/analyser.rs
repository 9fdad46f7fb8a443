//! Analyser node - visualization tap

/// Stateless tap at the graph's midpoint exposing frequency/time-domain
/// sizing for visualization. The engine fills caller-provided buffers; this
/// node only configures how many bins it produces.
#[derive(Clone, Copy, Debug)]
pub struct Analyser {
    fft_size: usize,
}

impl Default for Analyser {
    fn default() -> Self {
        Self { fft_size: 256 }
    }
}

impl Analyser {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of frequency bins the engine reports, always half the FFT size.
    #[inline]
    pub fn frequency_bin_count(&self) -> usize {
        self.fft_size / 2
    }

    pub fn set_fft_size(&mut self, fft_size: usize) {
        self.fft_size = fft_size;
    }
}

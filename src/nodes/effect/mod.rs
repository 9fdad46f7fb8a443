mod analyser;
mod compressor;
mod convolver;
mod filter;
mod gain;
mod panner;

pub use analyser::Analyser;
pub use compressor::Compressor;
pub use convolver::Convolver;
pub use filter::PeakingFilter;
pub use gain::Gain;
pub use panner::PannerNode;

//! Streaming spectral analysis with FFT

pub mod buffer;
pub mod config;
pub mod fft;
pub mod periodogram;
pub mod windowing;

pub use buffer::SampleWindow;
pub use config::{ConfigError, PeriodogramConfig};
pub use fft::FftEngine;
pub use periodogram::Periodogram;
pub use windowing::{hamming, scaled_hamming};

//! Spectral periodogram - streaming PSD estimation core
//! 
//! Overlapped, Hamming-tapered FFTs of a complex sample stream, averaged
//! with an exponential forgetting factor and reported in dB.

pub mod spectrum;

pub use num_complex::Complex;
pub use spectrum::{ConfigError, Periodogram, PeriodogramConfig};

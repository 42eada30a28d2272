//! Forward FFT engine for complex-valued input
//!
//! Plans a fixed-size transform once and reuses its work buffers for
//! every execution

use rustfft::{Fft, FftPlanner};
use num_complex::Complex;
use std::sync::Arc;

/// Fixed-size forward FFT
pub struct FftEngine {
    /// FFT size (number of points)
    fft_size: usize,

    /// Planned forward transform
    fft: Arc<dyn Fft<f64>>,

    /// Work buffer, holds the spectrum after `execute`
    buffer: Vec<Complex<f64>>,

    /// Scratch space required by the planned algorithm
    scratch: Vec<Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (any length, powers of 2 are fastest)
    pub fn new(fft_size: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(fft_size);

        let zero = Complex::new(0.0, 0.0);
        let buffer = vec![zero; fft_size];
        let scratch = vec![zero; fft.get_inplace_scratch_len()];

        Self {
            fft_size,
            fft,
            buffer,
            scratch,
        }
    }

    /// Run the forward transform
    ///
    /// `input` is copied into the engine's own buffer, so the caller's
    /// array is left untouched.
    ///
    /// # Panics
    /// Panics if `input.len()` differs from the FFT size
    pub fn execute(&mut self, input: &[Complex<f64>]) -> &[Complex<f64>] {
        self.buffer.copy_from_slice(input);
        self.fft.process_with_scratch(&mut self.buffer, &mut self.scratch);
        &self.buffer
    }

    /// Spectrum produced by the most recent `execute`
    pub fn output(&self) -> &[Complex<f64>] {
        &self.buffer
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}

//! Streaming spectral periodogram
//!
//! Pushes complex samples through a sliding window, takes a Hamming-tapered
//! FFT every `delay` samples and blends the magnitudes into a running
//! estimate with an exponential forgetting factor

use super::buffer::SampleWindow;
use super::config::{ConfigError, PeriodogramConfig};
use super::fft::FftEngine;
use super::windowing::scaled_hamming;
use num_complex::Complex;

/// Running magnitude-spectrum estimator
pub struct Periodogram {
    config: PeriodogramConfig,

    /// Scaled Hamming taper, `window_len` coefficients
    window: Vec<f64>,

    /// Most recent `window_len` samples
    buffer: SampleWindow,

    fft: FftEngine,

    /// FFT input; entries past `window_len` stay zero
    input: Vec<Complex<f64>>,

    /// Running magnitude estimate, natural FFT order
    psd: Vec<f64>,

    /// Samples pushed since the last transform
    index: usize,

    num_transforms: u64,
}

impl Periodogram {
    /// Create new periodogram
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid
    pub fn new(config: PeriodogramConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let fft_size = config.fft_size;
        log::debug!(
            "periodogram: nfft={} window={} delay={} alpha={}",
            fft_size,
            config.window_len,
            config.delay,
            config.alpha
        );

        Ok(Self {
            config,
            window: scaled_hamming(config.window_len),
            buffer: SampleWindow::new(config.window_len),
            fft: FftEngine::new(fft_size),
            input: vec![Complex::new(0.0, 0.0); fft_size],
            psd: vec![0.0; fft_size],
            index: 0,
            num_transforms: 0,
        })
    }

    /// Create periodogram with window length N/4 and delay N/8
    ///
    /// # Arguments
    /// * `fft_size` - FFT size N
    /// * `alpha` - Averaging factor in (0, 1]
    pub fn with_fft_size(fft_size: usize, alpha: f64) -> Result<Self, ConfigError> {
        Self::new(PeriodogramConfig::new(fft_size, alpha))
    }

    /// Create periodogram with every parameter given explicitly
    pub fn advanced(
        fft_size: usize,
        window_len: usize,
        delay: usize,
        alpha: f64,
    ) -> Result<Self, ConfigError> {
        Self::new(PeriodogramConfig::advanced(fft_size, window_len, delay, alpha))
    }

    /// Clear the sample window and forget the accumulated estimate
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.index = 0;
        self.num_transforms = 0;
        log::debug!("periodogram reset");
    }

    /// Push a block of samples
    ///
    /// A transform is taken every time `delay` samples have accumulated,
    /// so a single block may trigger several transforms or none.
    pub fn push(&mut self, samples: &[Complex<f64>]) {
        for &sample in samples {
            self.push_sample(sample);
        }
    }

    /// Push a single sample
    pub fn push_sample(&mut self, sample: Complex<f64>) {
        self.buffer.push(sample);
        self.index += 1;

        if self.index == self.config.delay {
            self.index = 0;
            self.transform();
        }
    }

    fn transform(&mut self) {
        let m = self.config.window_len;
        for ((x, sample), &w) in self.input[..m]
            .iter_mut()
            .zip(self.buffer.snapshot())
            .zip(self.window.iter())
        {
            *x = sample * w;
        }

        let spectrum = self.fft.execute(&self.input);

        if self.num_transforms == 0 {
            for (p, bin) in self.psd.iter_mut().zip(spectrum) {
                *p = bin.norm();
            }
        } else {
            let alpha = self.config.alpha;
            for (p, bin) in self.psd.iter_mut().zip(spectrum) {
                *p = (1.0 - alpha) * *p + alpha * bin.norm();
            }
        }

        self.num_transforms = self.num_transforms.saturating_add(1);
        log::trace!("periodogram transform #{}", self.num_transforms);
    }

    /// Spectrum estimate in dB, zero frequency centred
    ///
    /// Output index i holds bin (i + N/2) mod N as 20*log10(|psd|).
    /// All zeros until the first transform has been taken.
    pub fn execute(&self) -> Vec<f64> {
        let mut output = vec![0.0; self.config.fft_size];
        self.execute_into(&mut output);
        output
    }

    /// Write the spectrum estimate in dB into `output`
    ///
    /// # Panics
    /// Panics if `output.len()` differs from the FFT size
    pub fn execute_into(&self, output: &mut [f64]) {
        let nfft = self.config.fft_size;
        assert_eq!(output.len(), nfft, "output length must equal FFT size");

        if self.num_transforms == 0 {
            output.fill(0.0);
            return;
        }

        let half = nfft / 2;
        for (i, out) in output.iter_mut().enumerate() {
            let k = (i + half) % nfft;
            *out = 20.0 * self.psd[k].abs().log10();
        }
    }

    /// Normalized frequency (cycles/sample) of each `execute` output index
    pub fn frequency_axis(&self) -> Vec<f64> {
        let nfft = self.config.fft_size;
        let half = nfft / 2;

        (0..nfft)
            .map(|i| {
                let k = (i + half) % nfft;
                // Bins from ceil(N/2) upwards are negative frequencies
                if k >= nfft - half {
                    (k as f64 - nfft as f64) / nfft as f64
                } else {
                    k as f64 / nfft as f64
                }
            })
            .collect()
    }

    /// Frequency in Hz of each `execute` output index
    pub fn frequency_bins_hz(&self, sample_rate: f64) -> Vec<f64> {
        self.frequency_axis()
            .iter()
            .map(|&f| f * sample_rate)
            .collect()
    }

    /// Running magnitude estimate in natural FFT order (linear, not dB)
    pub fn psd(&self) -> &[f64] {
        &self.psd
    }

    /// Transforms taken since construction or the last reset
    pub fn num_transforms(&self) -> u64 {
        self.num_transforms
    }

    /// Scaled taper applied to each analysis window
    pub fn window(&self) -> &[f64] {
        &self.window
    }

    /// Get current configuration
    pub fn config(&self) -> &PeriodogramConfig {
        &self.config
    }

    pub fn fft_size(&self) -> usize {
        self.config.fft_size
    }

    pub fn window_len(&self) -> usize {
        self.config.window_len
    }

    pub fn delay(&self) -> usize {
        self.config.delay
    }

    pub fn alpha(&self) -> f64 {
        self.config.alpha
    }
}

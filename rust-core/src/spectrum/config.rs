//! Periodogram configuration and validation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("FFT size must be at least 2 (got {0})")]
    FftSizeTooSmall(usize),

    #[error("Window length must be at least 1")]
    EmptyWindow,

    #[error("Window length {window_len} cannot exceed FFT size {fft_size}")]
    WindowTooLong { window_len: usize, fft_size: usize },

    #[error("Delay between transforms must be greater than zero")]
    ZeroDelay,

    #[error("Averaging factor must be in (0, 1] (got {0})")]
    AlphaOutOfRange(f64),
}

/// Periodogram configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodogramConfig {
    /// FFT size N (number of frequency bins)
    pub fft_size: usize,

    /// Window length M (most recent samples per transform, M <= N)
    pub window_len: usize,

    /// Delay D (samples pushed between successive transforms)
    pub delay: usize,

    /// Averaging factor alpha in (0, 1]
    pub alpha: f64,
}

impl PeriodogramConfig {
    /// Configuration with window length N/4 and delay N/8
    ///
    /// # Arguments
    /// * `fft_size` - FFT size N
    /// * `alpha` - Averaging factor
    pub fn new(fft_size: usize, alpha: f64) -> Self {
        Self::advanced(fft_size, fft_size / 4, fft_size / 8, alpha)
    }

    /// Configuration with every parameter given explicitly
    pub fn advanced(fft_size: usize, window_len: usize, delay: usize, alpha: f64) -> Self {
        Self {
            fft_size,
            window_len,
            delay,
            alpha,
        }
    }

    /// Check the configuration, reporting the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fft_size < 2 {
            return Err(ConfigError::FftSizeTooSmall(self.fft_size));
        }
        if self.window_len > self.fft_size {
            return Err(ConfigError::WindowTooLong {
                window_len: self.window_len,
                fft_size: self.fft_size,
            });
        }
        if self.window_len == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.delay == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        // Written as a negated range test so NaN is rejected too
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ConfigError::AlphaOutOfRange(self.alpha));
        }
        Ok(())
    }

    /// Overlap between consecutive analysis windows (zero when D >= M)
    pub fn overlap(&self) -> usize {
        self.window_len.saturating_sub(self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_defaults() {
        let config = PeriodogramConfig::new(64, 0.1);

        assert_eq!(config.window_len, 16);
        assert_eq!(config.delay, 8);
        assert_eq!(config.overlap(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_fft() {
        for n in [0, 1] {
            let config = PeriodogramConfig::advanced(n, 0, 1, 0.5);
            assert_eq!(config.validate(), Err(ConfigError::FftSizeTooSmall(n)));
        }
    }

    #[test]
    fn test_rejects_window_longer_than_fft() {
        let config = PeriodogramConfig::advanced(16, 17, 4, 0.5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::WindowTooLong { window_len: 17, fft_size: 16 })
        );

        let config = PeriodogramConfig::advanced(16, 0, 4, 0.5);
        assert_eq!(config.validate(), Err(ConfigError::EmptyWindow));
    }

    #[test]
    fn test_rejects_zero_delay() {
        assert_eq!(
            PeriodogramConfig::advanced(16, 8, 0, 0.5).validate(),
            Err(ConfigError::ZeroDelay)
        );

        // N/8 rounds down to zero for small sizes
        assert_eq!(PeriodogramConfig::new(4, 0.5).validate(), Err(ConfigError::ZeroDelay));
        assert!(PeriodogramConfig::new(8, 0.5).validate().is_ok());
    }

    #[test]
    fn test_alpha_range() {
        for alpha in [0.0, -0.25, 1.5] {
            assert_eq!(
                PeriodogramConfig::advanced(16, 8, 4, alpha).validate(),
                Err(ConfigError::AlphaOutOfRange(alpha))
            );
        }

        assert!(PeriodogramConfig::advanced(16, 8, 4, f64::NAN).validate().is_err());
        assert!(PeriodogramConfig::advanced(16, 8, 4, 1.0).validate().is_ok());
        assert!(PeriodogramConfig::advanced(16, 8, 4, 1e-6).validate().is_ok());
    }

    #[test]
    fn test_gapped_schedule_is_valid() {
        let config = PeriodogramConfig::advanced(16, 4, 10, 0.5);
        assert!(config.validate().is_ok());
        assert_eq!(config.overlap(), 0);
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::WindowTooLong { window_len: 9, fft_size: 8 };
        assert_eq!(err.to_string(), "Window length 9 cannot exceed FFT size 8");
    }
}

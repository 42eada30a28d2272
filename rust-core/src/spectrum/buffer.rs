//! Sliding sample window backed by a heap ring buffer
//!
//! Keeps the most recent `capacity` samples; older samples are overwritten

use num_complex::Complex;
use ringbuf::{HeapRb, Rb};

/// Sliding window over the most recent complex samples
pub struct SampleWindow {
    rb: HeapRb<Complex<f64>>,
    capacity: usize,
    /// Samples retained, saturates at `capacity`
    filled: usize,
}

impl SampleWindow {
    /// Create new sample window
    ///
    /// # Arguments
    /// * `capacity` - Number of samples retained (must be non-zero)
    pub fn new(capacity: usize) -> Self {
        Self {
            rb: HeapRb::new(capacity),
            capacity,
            filled: 0,
        }
    }

    /// Push a sample, discarding the oldest one once the window is full
    pub fn push(&mut self, sample: Complex<f64>) {
        self.rb.push_overwrite(sample);
        self.filled = (self.filled + 1).min(self.capacity);
    }

    /// Read the window oldest-first
    ///
    /// Always yields exactly `capacity` samples. Until the window has filled,
    /// the missing oldest positions read as zero.
    pub fn snapshot(&self) -> impl Iterator<Item = Complex<f64>> + '_ {
        let missing = self.capacity - self.filled;
        std::iter::repeat(Complex::new(0.0, 0.0))
            .take(missing)
            .chain(self.rb.iter().copied())
    }

    /// Discard all samples (the window reads as zeros again)
    pub fn clear(&mut self) {
        self.rb.clear();
        self.filled = 0;
    }

    /// Number of samples pushed and still retained
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Check if no samples are retained
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Get window capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64) -> Complex<f64> {
        Complex::new(re, 0.0)
    }

    #[test]
    fn test_partial_window_zero_padded() {
        let mut window = SampleWindow::new(4);
        window.push(c(1.0));
        window.push(c(2.0));

        let snapshot: Vec<_> = window.snapshot().collect();
        assert_eq!(snapshot, vec![c(0.0), c(0.0), c(1.0), c(2.0)]);
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_newest() {
        let mut window = SampleWindow::new(3);
        for i in 1..=7 {
            window.push(c(i as f64));
        }

        let snapshot: Vec<_> = window.snapshot().collect();
        assert_eq!(snapshot, vec![c(5.0), c(6.0), c(7.0)]);
        assert_eq!(window.len(), 3);
        assert_eq!(window.capacity(), 3);
    }

    #[test]
    fn test_clear() {
        let mut window = SampleWindow::new(2);
        window.push(c(3.0));
        window.push(c(4.0));
        window.clear();

        assert!(window.is_empty());
        let snapshot: Vec<_> = window.snapshot().collect();
        assert_eq!(snapshot, vec![c(0.0), c(0.0)]);
    }
}

//! Hamming taper for periodogram analysis windows
//!
//! Coefficients are computed once per periodogram and applied to every
//! buffer snapshot before the FFT to reduce spectral leakage

use std::f64::consts::PI;

/// Hamming window coefficient
///
/// w[n] = 0.53836 - 0.46164*cos(2πn/(L-1))
///
/// # Arguments
/// * `n` - Sample index (0..len)
/// * `len` - Window length L
pub fn hamming(n: usize, len: usize) -> f64 {
    // Single-tap window: the cosine term is undefined, pass the sample through
    if len < 2 {
        return 1.0;
    }

    let angle = 2.0 * PI * n as f64 / (len - 1) as f64;
    0.53836 - 0.46164 * angle.cos()
}

/// Hamming window scaled by its length
///
/// # Returns
/// Coefficients w[n] = hamming(n, L) / L for n = 0..L-1
pub fn scaled_hamming(len: usize) -> Vec<f64> {
    let scale = len as f64;
    (0..len).map(|n| hamming(n, len) / scale).collect()
}

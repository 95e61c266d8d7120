//! Truncated Maclaurin series of sine and cosine on the reduced interval [-π/2, π/2]

/// number of series terms; 10 terms give close to double precision on [-π/2, π/2]
pub const SERIES_TERMS: usize = 10;

/// n! as f64. Only small n are needed here (up to 19! for the last sine term)
pub fn factorial(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// sum over i of (-1)^i * x^(2i + offset) / (2i + offset)!, offset 1 for sine and 0 for cosine
fn alternating_series(x: f64, offset: u32) -> f64 {
    let mut series_sum = 0.0;
    for i in 0..SERIES_TERMS as u32 {
        let power_factor = 2 * i + offset;
        let term = x.powi(power_factor as i32) / factorial(power_factor);
        if i % 2 == 0 {
            series_sum += term;
        } else {
            series_sum -= term;
        }
    }
    series_sum
}

/// sin(x) for x already reduced to [-π/2, π/2]
pub fn sine_series(x: f64) -> f64 {
    alternating_series(x, 1)
}

/// cos(x) for x already reduced to [-π/2, π/2]
pub fn cosine_series(x: f64) -> f64 {
    alternating_series(x, 0)
}

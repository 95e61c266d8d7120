//! Sign reconstruction of a series approximation from the quadrant of the original angle
use super::domain_reduction::Quadrant;

/// the series is evaluated on the shifted angle; angles in quadrants 2 and 3 were shifted by π,
/// which flips the sign of both sine and cosine
pub fn reconstruct(approximation: f64, quadrant: Quadrant) -> f64 {
    if quadrant.flips_sign() {
        -approximation
    } else {
        approximation
    }
}

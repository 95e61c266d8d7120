//! Range reduction of an arbitrary angle (radians) into the working interval [-π/2, π/2]
//! together with the quadrant of the original angle on the [0, 2π] circle.
use log::trace;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use strum_macros::{Display, EnumIter};

/// quadrant of an angle normalized to [0, 2π]
/// [0, π/2) -> First, [π/2, π) -> Second, [π, 3π/2) -> Third, [3π/2, 2π] -> Fourth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// quadrant number 1..=4
    pub fn number(&self) -> u8 {
        match self {
            Quadrant::First => 1,
            Quadrant::Second => 2,
            Quadrant::Third => 3,
            Quadrant::Fourth => 4,
        }
    }
    /// classify an angle already normalized to [0, 2π]. Boundaries are half-open,
    /// checked from the top quadrant down, so 2π itself lands in Fourth
    pub fn from_normalized(angle: f64) -> Quadrant {
        if angle - 3.0 * PI / 2.0 >= 0.0 {
            Quadrant::Fourth
        } else if angle - PI >= 0.0 {
            Quadrant::Third
        } else if angle - FRAC_PI_2 >= 0.0 {
            Quadrant::Second
        } else {
            Quadrant::First
        }
    }
    /// series results computed on the shifted angle change sign in quadrants 2 and 3
    pub fn flips_sign(&self) -> bool {
        matches!(self, Quadrant::Second | Quadrant::Third)
    }
}

/// angle shifted into [-π/2, π/2] and the quadrant of the original angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedAngle {
    pub angle: f64,
    pub quadrant: Quadrant,
}

impl ReducedAngle {
    pub fn new(angle: f64) -> ReducedAngle {
        reduce(angle)
    }
}

/// bring any finite angle into [0, 2π]. Angles already inside (2π included) are returned as is,
/// everything else goes through one euclidean remainder instead of repeated +-2π steps
pub fn normalize(given_angle: f64) -> f64 {
    let mut working_angle = given_angle;
    if working_angle < 0.0 || working_angle > TAU {
        trace!("current working angle: {}", working_angle);
        working_angle = working_angle.rem_euclid(TAU);
        trace!("working angle shifted to: {}", working_angle);
    }
    working_angle
}

/// shift an angle in [0, 2π] to [-π/2, π/2] according to its quadrant
pub fn shift_to_working_domain(angle: f64, quadrant: Quadrant) -> f64 {
    match quadrant {
        Quadrant::Fourth => angle - TAU,
        Quadrant::Second | Quadrant::Third => angle - PI,
        Quadrant::First => angle,
    }
}

/// full reduction: normalize, classify, shift. The quadrant is that of the normalized angle,
/// not recomputed after the shift
pub fn reduce(given_angle: f64) -> ReducedAngle {
    let working_angle = normalize(given_angle);
    let quadrant = Quadrant::from_normalized(working_angle);
    let angle = shift_to_working_domain(working_angle, quadrant);
    trace!(
        "angle {} reduced to {} in quadrant {}",
        given_angle,
        angle,
        quadrant.number()
    );
    ReducedAngle { angle, quadrant }
}

//! Public trigonometric functions built on top of domain reduction, Maclaurin series and sign reconstruction.
//! sine and cosine are computed directly, the other four are quotients of them. Points where a function
//! is exactly zero or undefined are caught beforehand by a tolerance check on the angle.
use super::domain_reduction::reduce;
use super::maclaurin::{cosine_series, sine_series};
use super::reconstruction::reconstruct;
use approx::abs_diff_eq;
use log::debug;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use strum_macros::{Display, EnumCount, EnumIter};

/// absolute tolerance used when deciding that an angle sits on a multiple of π or π/2
pub const GUARD_EPSILON: f64 = 1e-9;

/// result of a function that may be undefined at some angles (tan, csc, sec, cot)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrigResult {
    Value(f64),
    Undefined,
}

impl TrigResult {
    pub fn value(&self) -> Option<f64> {
        match self {
            TrigResult::Value(v) => Some(*v),
            TrigResult::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, TrigResult::Undefined)
    }

    pub fn map<F: FnOnce(f64) -> f64>(self, f: F) -> TrigResult {
        match self {
            TrigResult::Value(v) => TrigResult::Value(f(v)),
            TrigResult::Undefined => TrigResult::Undefined,
        }
    }
}

impl From<f64> for TrigResult {
    fn from(value: f64) -> Self {
        TrigResult::Value(value)
    }
}

/// `{}` prints the shortest representation, `{:.N}` prints N decimals; undefined prints "undefined"
impl fmt::Display for TrigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrigResult::Value(v) => match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, v),
                None => write!(f, "{}", v),
            },
            TrigResult::Undefined => write!(f, "undefined"),
        }
    }
}

/// true when angle mod π is (within tolerance) zero. The euclidean remainder of an angle a hair
/// below a multiple of π is close to π rather than 0, so both ends count
pub fn is_multiple_of_pi(angle: f64) -> bool {
    let remainder = angle.rem_euclid(PI);
    abs_diff_eq!(remainder, 0.0, epsilon = GUARD_EPSILON)
        || abs_diff_eq!(remainder, PI, epsilon = GUARD_EPSILON)
}

/// true when the angle is an odd multiple of π/2: angle mod π is π/2 and angle is not a multiple of π
pub fn is_odd_multiple_of_half_pi(angle: f64) -> bool {
    abs_diff_eq!(angle.rem_euclid(PI), FRAC_PI_2, epsilon = GUARD_EPSILON)
        && !is_multiple_of_pi(angle)
}

pub fn sine(angle: f64) -> f64 {
    if is_multiple_of_pi(angle) {
        debug!("sin({}) hit a multiple of pi, returning 0", angle);
        return 0.0;
    }
    let angle_info = reduce(angle);
    let series_approximation = sine_series(angle_info.angle);
    reconstruct(series_approximation, angle_info.quadrant)
}

pub fn cosine(angle: f64) -> f64 {
    if is_odd_multiple_of_half_pi(angle) {
        debug!("cos({}) hit an odd multiple of pi/2, returning 0", angle);
        return 0.0;
    }
    let angle_info = reduce(angle);
    let series_approximation = cosine_series(angle_info.angle);
    reconstruct(series_approximation, angle_info.quadrant)
}

/// sine / cosine, undefined at odd multiples of π/2
pub fn tangent(angle: f64) -> TrigResult {
    if is_odd_multiple_of_half_pi(angle) {
        debug!("tan({}) is undefined", angle);
        return TrigResult::Undefined;
    }
    TrigResult::Value(sine(angle) / cosine(angle))
}

/// 1 / sine, undefined at multiples of π
pub fn cosecant(angle: f64) -> TrigResult {
    if is_multiple_of_pi(angle) {
        debug!("csc({}) is undefined", angle);
        return TrigResult::Undefined;
    }
    TrigResult::Value(1.0 / sine(angle))
}

/// 1 / cosine, undefined at odd multiples of π/2
pub fn secant(angle: f64) -> TrigResult {
    if is_odd_multiple_of_half_pi(angle) {
        debug!("sec({}) is undefined", angle);
        return TrigResult::Undefined;
    }
    TrigResult::Value(1.0 / cosine(angle))
}

/// 1 / tangent, undefined at multiples of π. Where the tangent itself is undefined
/// (odd multiples of π/2) the cotangent is 0
pub fn cotangent(angle: f64) -> TrigResult {
    if is_multiple_of_pi(angle) {
        debug!("cot({}) is undefined", angle);
        return TrigResult::Undefined;
    }
    match tangent(angle) {
        TrigResult::Value(tan) => TrigResult::Value(1.0 / tan),
        TrigResult::Undefined => TrigResult::Value(0.0),
    }
}

/// the six functions by name, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount)]
pub enum TrigFunction {
    Sine,
    Cosine,
    Tangent,
    Cosecant,
    Secant,
    Cotangent,
}

impl TrigFunction {
    /// short name used when printing results, e.g. "sin"
    pub fn abbrev(&self) -> &'static str {
        match self {
            TrigFunction::Sine => "sin",
            TrigFunction::Cosine => "cos",
            TrigFunction::Tangent => "tan",
            TrigFunction::Cosecant => "csc",
            TrigFunction::Secant => "sec",
            TrigFunction::Cotangent => "cot",
        }
    }

    pub fn evaluate(&self, angle: f64) -> TrigResult {
        match self {
            TrigFunction::Sine => TrigResult::Value(sine(angle)),
            TrigFunction::Cosine => TrigResult::Value(cosine(angle)),
            TrigFunction::Tangent => tangent(angle),
            TrigFunction::Cosecant => cosecant(angle),
            TrigFunction::Secant => secant(angle),
            TrigFunction::Cotangent => cotangent(angle),
        }
    }
}

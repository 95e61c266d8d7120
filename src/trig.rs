//! Trigonometric functions computed without the platform math library.
//!
//! Every call goes through the same three steps:
//! 1. domain reduction: the angle is brought into [0, 2π], its quadrant is found and it is shifted
//!    into [-π/2, π/2] where the series converges fastest
//! 2. a 10-term Maclaurin series of sine or cosine is evaluated on the shifted angle
//! 3. the sign of the result is restored from the quadrant
//!
//! tangent, cosecant, secant and cotangent are quotients of sine and cosine and return
//! [`trig_functions::TrigResult::Undefined`] at their poles.
//!  Example#1
//! ```
//! use RustedTrig::trig::trig_functions::{sine, cosine, tangent, TrigResult};
//! use std::f64::consts::FRAC_PI_2;
//! let s = sine(std::f64::consts::FRAC_PI_6);
//! assert!((s - 0.5).abs() < 1e-12);
//! assert_eq!(cosine(FRAC_PI_2), 0.0);
//! assert_eq!(tangent(FRAC_PI_2), TrigResult::Undefined);
//! ```
//! Example#2
//! ```
//! // dispatch by function, as the interactive calculator does
//! use RustedTrig::trig::trig_functions::TrigFunction;
//! use strum::IntoEnumIterator;
//! for function in TrigFunction::iter() {
//!     println!("{}(1.0) = {}", function.abbrev(), function.evaluate(1.0));
//! }
//! ```
/// angle -> (angle in [-π/2, π/2], quadrant)
pub mod domain_reduction;
/// Maclaurin series of sine and cosine
pub mod maclaurin;
/// sign restoration from the quadrant
pub mod reconstruction;
/// sine, cosine, tangent, cosecant, secant, cotangent
pub mod trig_functions;
mod trig_tests;

pub use trig_functions::{
    TrigFunction, TrigResult, cosecant, cosine, cotangent, secant, sine, tangent,
};

//! Reliability engine - exponential-model failure-rate aggregation
//!
//! Aggregates per-component failure rates into a system failure rate, then
//! projects point reliability R(t) = exp(-lambda_total * t), MTBF, and a
//! sampled reliability-vs-time curve. Purely computational: no suspension
//! points, no retained state, every failure an ordinary `Err` value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{Component, Environment};

/// Default curve time range in hours.
pub const DEFAULT_TIME_RANGE: f64 = 500.0;

/// Default curve sampling step in hours.
pub const DEFAULT_CURVE_STEP: f64 = 10.0;

/// One sample of the reliability-vs-time curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Time in hours
    pub time: f64,

    /// System reliability at that time, in (0, 1]
    pub reliability: f64,
}

/// The complete output of one engine invocation.
///
/// A value of this type exists only as the result of a successful
/// computation; callers replace their previous result wholesale rather than
/// mutating it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// System failure rate, failures per hour (>= 0)
    pub total_failure_rate: f64,

    /// Reliability at mission time, in (0, 1]; exactly 1 when the total
    /// failure rate is 0
    pub system_reliability: f64,

    /// Mean time between failures in hours; `None` when the total failure
    /// rate is 0 (unbounded)
    pub mtbf: Option<f64>,

    /// Sampled reliability curve
    pub curve: Vec<CurvePoint>,
}

/// Precondition violations that prevent a computation from running.
///
/// On any of these the engine returns immediately; whatever result the
/// caller already holds stays untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("environment name must not be blank")]
    BlankEnvironmentName,

    #[error("environment factor must be a positive finite number, got {0}")]
    InvalidFactor(f64),

    #[error("component list is empty")]
    NoComponents,

    #[error("mission time must be a non-negative finite number, got {0}")]
    InvalidMissionTime(f64),
}

/// Aggregate component failure rates and project system reliability over
/// the given mission time.
pub fn compute(
    components: &[Component],
    environment: &Environment,
    mission_time: f64,
) -> Result<CalculationResult, CalcError> {
    if environment.name.trim().is_empty() {
        return Err(CalcError::BlankEnvironmentName);
    }
    if !environment.factor.is_finite() || environment.factor <= 0.0 {
        return Err(CalcError::InvalidFactor(environment.factor));
    }
    if components.is_empty() {
        return Err(CalcError::NoComponents);
    }
    if !mission_time.is_finite() || mission_time < 0.0 {
        return Err(CalcError::InvalidMissionTime(mission_time));
    }

    let total_failure_rate = total_failure_rate(components, environment.factor);
    let system_reliability = (-total_failure_rate * mission_time).exp();
    let curve = sample_curve(total_failure_rate, DEFAULT_TIME_RANGE, DEFAULT_CURVE_STEP);

    Ok(CalculationResult {
        total_failure_rate,
        system_reliability,
        mtbf: mtbf(total_failure_rate),
        curve,
    })
}

/// Mean time between failures: the reciprocal rate, or `None` (unbounded)
/// at a zero rate. A zero rate is degenerate but must not error.
pub fn mtbf(total_failure_rate: f64) -> Option<f64> {
    if total_failure_rate > 0.0 {
        Some(1.0 / total_failure_rate)
    } else {
        None
    }
}

/// Sum of `failure_rate * factor * quantity` over all components.
/// Commutative, so component order never changes the answer.
pub fn total_failure_rate(components: &[Component], factor: f64) -> f64 {
    components
        .iter()
        .map(|c| c.failure_rate * factor * f64::from(c.quantity))
        .sum()
}

/// Sample R(t) = exp(-rate * t) at t = 0, step, 2*step, ... while
/// t <= time_range. With the defaults (range 500, step 10) this yields 51
/// points. `step` must be positive.
pub fn sample_curve(total_failure_rate: f64, time_range: f64, step: f64) -> Vec<CurvePoint> {
    debug_assert!(step > 0.0, "curve step must be positive");

    let samples = (time_range / step).floor() as usize;
    (0..=samples)
        .map(|i| {
            let time = i as f64 * step;
            CurvePoint {
                time,
                reliability: (-total_failure_rate * time).exp(),
            }
        })
        .collect()
}

use crate::scenario::{Collision, ScenarioInputs};
use crate::trace::Trace;

/// A scenario could not be built from its inputs.
///
/// Under the default domains this is unreachable; seeing it means a domain bound is wrong, not that the function under
/// test is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum GeneratorError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("direction deviation {deviation} does not approach the impact point; it must be strictly within a quarter turn of the impact normal")]
    NotApproaching { deviation: f64 },

    #[error("invalid scenario domain: {0}")]
    InvalidDomain(&'static str),
}

/// Why a single scenario failed verification.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum OracleError {
    #[error("no collision reported for particles built to collide at t={expected}\ninfo={trace}")]
    NoCollision { expected: f64, trace: Trace },

    #[error("reported collision time {actual} is outside relative tolerance {tolerance} of expected time {expected}\ninfo={trace}")]
    Mismatch {
        expected: f64,
        actual: f64,
        tolerance: f64,
        trace: Trace,
    },

    #[error("collision time depends on argument order: f(alfa, beta)={forward:?}, f(beta, alfa)={backward:?}\ninfo={trace}")]
    Asymmetric {
        forward: Option<f64>,
        backward: Option<f64>,
        trace: Trace,
    },

    #[error("Generator error: {}", _0)]
    Generator(#[from] GeneratorError),
}

/// The minimal failing scenario found by a verification run.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{error}\nminimal inputs: {inputs:?}")]
pub struct HarnessFailure {
    /// The shrunk draws that still fail.
    pub inputs: ScenarioInputs,
    /// The scenario built from `inputs`, if it could be built.
    pub collision: Option<Collision>,
    pub error: OracleError,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HarnessError {
    #[error("Invalid scenario domains: {}", _0)]
    InvalidDomains(#[from] GeneratorError),

    #[error("{}", _0)]
    Failed(Box<HarnessFailure>),

    #[error("verification aborted: {0}")]
    Aborted(String),

    #[error("could not build the verification thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{} of {batches} batches failed", .failures.len())]
    Batches {
        batches: usize,
        failures: Vec<HarnessError>,
    },
}

impl HarnessError {
    /// Every scenario failure contained in this error.
    pub fn failures(&self) -> Vec<&HarnessFailure> {
        match self {
            HarnessError::Failed(f) => vec![f.as_ref()],
            HarnessError::Batches { failures, .. } => {
                failures.iter().flat_map(|f| f.failures()).collect()
            }
            _ => vec![],
        }
    }
}

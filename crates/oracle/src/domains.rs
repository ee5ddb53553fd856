//! The ranges scenarios are drawn from.
//!
//! These define what the oracle covers, so they are named here rather than buried in strategies.
use std::f64::consts::{FRAC_PI_2, PI};

use crate::errors::GeneratorError;

/// Radius shared by every particle, and assumed by every collision-time function under test.
pub const PARTICLE_RADIUS: f64 = 1.0;

/// Each coordinate of the impact point is in `[-IMPACT_POINT_MAX, IMPACT_POINT_MAX]`.
pub const IMPACT_POINT_MAX: f64 = 1e6;

pub const SPEED_MIN: f64 = 1e-2;
pub const SPEED_MAX: f64 = 1e2;

pub const DURATION_MIN: f64 = 1e-4;
pub const DURATION_MAX: f64 = 1e4;

/// How far short of a quarter turn the direction deviation stops.
///
/// A hundredth of a revolution, chosen empirically.  Deviations close to a quarter turn approach tangentially, which is
/// where collision-time functions are least stable.
pub const DEVIATION_SAFETY_MARGIN: f64 = PI / 50.0;

/// Largest drawn angle between a particle's travel direction and the impact normal.
pub const MAX_DEVIATION_FROM_IMPACT_NORMAL: f64 = FRAC_PI_2 - DEVIATION_SAFETY_MARGIN;

/// Bounds for every randomly drawn scenario parameter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScenarioDomains {
    pub radius: f64,
    pub impact_point_max: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub duration_min: f64,
    pub duration_max: f64,
    pub deviation_margin: f64,
}

impl Default for ScenarioDomains {
    fn default() -> Self {
        ScenarioDomains {
            radius: PARTICLE_RADIUS,
            impact_point_max: IMPACT_POINT_MAX,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            duration_min: DURATION_MIN,
            duration_max: DURATION_MAX,
            deviation_margin: DEVIATION_SAFETY_MARGIN,
        }
    }
}

impl ScenarioDomains {
    pub fn max_deviation(&self) -> f64 {
        FRAC_PI_2 - self.deviation_margin
    }

    /// Check that every scenario drawn from these domains can be built.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        positive("radius", self.radius)?;
        finite("impact point bound", self.impact_point_max)?;
        if self.impact_point_max < 0.0 {
            return Err(GeneratorError::InvalidDomain(
                "impact point bound must not be negative",
            ));
        }

        positive("minimum speed", self.speed_min)?;
        finite("maximum speed", self.speed_max)?;
        if self.speed_min > self.speed_max {
            return Err(GeneratorError::InvalidDomain(
                "minimum speed exceeds maximum speed",
            ));
        }

        positive("minimum duration", self.duration_min)?;
        finite("maximum duration", self.duration_max)?;
        if self.duration_min > self.duration_max {
            return Err(GeneratorError::InvalidDomain(
                "minimum duration exceeds maximum duration",
            ));
        }

        positive("deviation margin", self.deviation_margin)?;
        if self.deviation_margin > FRAC_PI_2 {
            return Err(GeneratorError::InvalidDomain(
                "deviation margin exceeds a quarter turn",
            ));
        }

        Ok(())
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<(), GeneratorError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeneratorError::NotFinite { name, value })
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), GeneratorError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(GeneratorError::NotPositive { name, value })
    }
}

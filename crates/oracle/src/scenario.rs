//! Building collision scenarios backwards from the moment of impact.
//!
//! A scenario starts with where and how two particles touch: an impact point, the angle of the line through both
//! centers (the impact normal), and for each particle the direction and speed it arrives with.  Walking each particle
//! backwards along its path for the chosen duration gives start states which are guaranteed to touch at exactly that
//! time, so the expected answer is known before any collision-time function runs.
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use ccd_physics::V2;

use crate::domains::{finite, positive};
use crate::errors::GeneratorError;
use crate::particle::ParticleState;
use crate::trace::Trace;

/// How one particle arrives at the impact.
#[derive(Debug, Copy, Clone, PartialEq, derive_more::Display)]
#[display(fmt = "(deviation={}, speed={})", deviation, speed)]
pub struct Approach {
    /// Radians between the direction the particle came from and its side of the impact normal.
    ///
    /// Must be strictly within a quarter turn, otherwise the particle grazes or moves away at the moment of contact.
    pub deviation: f64,
    pub speed: f64,
}

/// Every random draw that goes into one scenario.
///
/// Shrinking happens on these rather than on the built [Collision], so minimal failures are simple geometries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScenarioInputs {
    pub radius: f64,
    pub impact_point: V2,
    /// Angle of the line through both centers at contact, pointing from the impact point to alfa.
    pub impact_normal: f64,
    pub alfa: Approach,
    pub beta: Approach,
    /// How long before contact the start states are.
    pub duration: f64,
}

/// A scenario with a known answer: `alfa` and `beta` first touch at `collision_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub collision_time: f64,
    pub alfa: ParticleState,
    pub beta: ParticleState,
    pub radius: f64,
    pub trace: Trace,
}

/// Add half a revolution.
fn opposite(angle: f64) -> f64 {
    angle + PI
}

impl Approach {
    pub fn new(deviation: f64, speed: f64) -> Approach {
        Approach { deviation, speed }
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        positive("speed", self.speed)?;
        finite("direction deviation", self.deviation)?;
        if self.deviation.abs() >= FRAC_PI_2 {
            return Err(GeneratorError::NotApproaching {
                deviation: self.deviation,
            });
        }
        Ok(())
    }
}

impl ScenarioInputs {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        positive("radius", self.radius)?;
        finite("impact point x", self.impact_point.x)?;
        finite("impact point y", self.impact_point.y)?;
        finite("impact normal", self.impact_normal)?;
        positive("duration", self.duration)?;
        for approach in [&self.alfa, &self.beta] {
            approach.validate()?;
            finite("travel distance", approach.speed * self.duration)?;
        }
        Ok(())
    }

    /// Center of the particle on the `normal` side of the impact point, at the moment of contact.
    fn contact_position(&self, normal: f64) -> V2 {
        self.impact_point + V2::polar(self.radius, normal)
    }

    /// Centers of `(alfa, beta)` at the moment of contact.
    pub fn contact_positions(&self) -> (V2, V2) {
        (
            self.contact_position(self.impact_normal),
            self.contact_position(opposite(self.impact_normal)),
        )
    }

    fn start_state(&self, normal: f64, approach: &Approach) -> ParticleState {
        // Back along the path the particle arrived on.
        let back = normal + approach.deviation;
        let travel = opposite(back);

        let start = self.contact_position(normal) + V2::polar(approach.speed * self.duration, back);
        ParticleState::new(start, V2::polar(approach.speed, travel))
    }

    /// Build the scenario.  Fails only if the inputs are degenerate.
    pub fn build(&self) -> Result<Collision, GeneratorError> {
        self.validate()?;

        let (alfa_contact, beta_contact) = self.contact_positions();
        let alfa = self.start_state(self.impact_normal, &self.alfa);
        let beta = self.start_state(opposite(self.impact_normal), &self.beta);

        let trace = Trace::new()
            .record("impact position", self.impact_point)
            .record("impact normal rad", self.impact_normal)
            .record("alfa dir and speed", self.alfa)
            .record("beta dir and speed", self.beta)
            .record("time", self.duration)
            .record("alfa collision pos", alfa_contact)
            .record("beta collision pos", beta_contact);

        Ok(Collision {
            collision_time: self.duration,
            alfa,
            beta,
            radius: self.radius,
            trace,
        })
    }
}

impl Collision {
    /// Distance between the two centers after both have moved for `time`.
    pub fn center_distance_at(&self, time: f64) -> f64 {
        self.alfa
            .advance(time)
            .position
            .distance(&self.beta.advance(time).position)
    }

    /// The same scenario with the particles swapped.
    #[must_use = "This doesn't modify the collision in place"]
    pub fn swapped(&self) -> Collision {
        Collision {
            alfa: self.beta,
            beta: self.alfa,
            ..self.clone()
        }
    }
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Collision(\ntime={}, \nalfa={}, \nbeta={}, \ninfo={})",
            self.collision_time, self.alfa, self.beta, self.trace
        )
    }
}

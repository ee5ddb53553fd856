//! The bundled collision-time functions, adapted to take [ParticleState]s.
//!
//! Each algorithm in `ccd_physics` works on its own representation, so these convert particles into it.  They all
//! assume particles of radius [PARTICLE_RADIUS].
use std::fmt;

use ccd_physics::Circle;

use crate::domains::PARTICLE_RADIUS;
use crate::harness::CollisionTimeFn;
use crate::particle::ParticleState;

/// A collision-time function under a name, for running the same checks against several implementations.
pub struct Algorithm {
    pub name: &'static str,
    function: Box<dyn CollisionTimeFn + Send + Sync>,
}

impl Algorithm {
    pub fn new(name: &'static str, function: impl CollisionTimeFn + Send + Sync + 'static) -> Algorithm {
        Algorithm {
            name,
            function: Box::new(function),
        }
    }
}

impl CollisionTimeFn for Algorithm {
    fn collision_time(&self, alfa: &ParticleState, beta: &ParticleState) -> Option<f64> {
        self.function.collision_time(alfa, beta)
    }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm").field("name", &self.name).finish()
    }
}

/// Particles which can't be circles (non-finite positions) never collide.
fn to_circle(p: &ParticleState) -> Option<Circle> {
    Circle::new(p.position, PARTICLE_RADIUS).ok()
}

pub fn kinematic(alfa: &ParticleState, beta: &ParticleState) -> Option<f64> {
    let (a, b) = (to_circle(alfa)?, to_circle(beta)?);
    ccd_physics::time_of_impact(&a, alfa.velocity, &b, beta.velocity)
}

pub fn swept(alfa: &ParticleState, beta: &ParticleState) -> Option<f64> {
    let (a, b) = (to_circle(alfa)?, to_circle(beta)?);
    ccd_physics::swept_circle_time(&a, alfa.velocity, &b, beta.velocity)
}

pub fn bisection(alfa: &ParticleState, beta: &ParticleState) -> Option<f64> {
    let (a, b) = (to_circle(alfa)?, to_circle(beta)?);
    ccd_physics::bisect_contact_time(&a, alfa.velocity, &b, beta.velocity)
}

/// Every bundled collision-time function.
pub fn registered_algorithms() -> Vec<Algorithm> {
    vec![
        Algorithm::new("kinematic", kinematic),
        Algorithm::new("swept", swept),
        Algorithm::new("bisection", bisection),
    ]
}

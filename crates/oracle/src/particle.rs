use ccd_physics::V2;

/// One particle at the start of a scenario.
///
/// Every particle has the same radius, [crate::PARTICLE_RADIUS] unless the scenario domains say otherwise.
#[derive(Debug, Copy, Clone, PartialEq, derive_more::Display)]
#[display(fmt = "Particle(pos={}, vel={})", position, velocity)]
pub struct ParticleState {
    pub position: V2,
    pub velocity: V2,
}

impl ParticleState {
    pub fn new(position: V2, velocity: V2) -> ParticleState {
        ParticleState { position, velocity }
    }

    /// Where this particle is after moving in a straight line for `time`.
    #[must_use = "This doesn't move the particle in place"]
    pub fn advance(&self, time: f64) -> ParticleState {
        ParticleState {
            position: self.position + self.velocity * time,
            velocity: self.velocity,
        }
    }
}

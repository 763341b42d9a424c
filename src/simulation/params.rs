//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - box boundary half-width,
//! - Lennard-Jones constants (`r_m`, `epsilon`)

use crate::simulation::error::SimError;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub dt: f64, // step size
    pub boundary: f64, // half-width of the square reflecting box
    pub r_m: f64, // LJ equilibrium distance
    pub epsilon: f64, // LJ well depth
}

impl Parameters {
    /// Reject invalid configuration before the loop starts, not mid-run
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("dt", self.dt),
            ("t_end", self.t_end),
            ("boundary", self.boundary),
            ("r_m", self.r_m),
            ("epsilon", self.epsilon),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(SimError::NonPositiveParameter { name, value });
            }
        }
        Ok(())
    }

    /// Number of fixed steps the driver will take: ceil(t_end / dt)
    pub fn step_count(&self) -> usize {
        (self.t_end / self.dt).ceil() as usize
    }
}

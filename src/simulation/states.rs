//! Core state types for the particle-box simulation.
//!
//! Defines the per-particle kinetic state and the `System` holding the full
//! particle set plus the current simulation time `t`.
//!
//! Each particle carries append-only history buffers: positions and
//! velocities get one entry per completed step (length k+1 after k steps,
//! counting the initial state), the energy track gets one entry per step.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub f: NVec2, // accumulated net force, recomputed each step
    pub half_v: NVec2, // half-step velocity (verlet intermediate)
    pub pe: f64, // this particle's own share of system potential energy
    pub x_hist: Vec<NVec2>, // trajectory, append-only
    pub v_hist: Vec<NVec2>, // velocity history, append-only
    pub e_hist: Vec<f64>, // kinetic + own potential share, one entry per step
}

impl Particle {
    /// Create a particle at `x` with velocity `v`
    /// Histories start with the initial state; `f` and `pe` are filled in by
    /// the initialization force pass over the whole set before the first step
    pub fn new(x: NVec2, v: NVec2) -> Self {
        Self {
            x,
            v,
            f: NVec2::zeros(),
            half_v: NVec2::zeros(),
            pe: 0.0,
            x_hist: vec![x],
            v_hist: vec![v],
            e_hist: Vec::new(),
        }
    }

    /// Kinetic energy with unit mass: 0.5 |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.v.norm_squared()
    }

    /// Elastic wall reflection against the square box `[-boundary, boundary]^2`
    /// Negates the velocity component on any axis the position has exited on;
    /// the position is not clamped back inside — it may sit outside the box by
    /// up to one step's displacement until the reversed velocity returns it
    pub fn bounce(&mut self, boundary: f64) {
        if self.x.x < -boundary || self.x.x > boundary {
            self.v.x = -self.v.x;
        }
        if self.x.y < -boundary || self.x.y > boundary {
            self.v.y = -self.v.y;
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub particles: Vec<Particle>, // fixed-size set for the run's duration
    pub t: f64, // time
}

//! Force contributors for the particle-box engine
//!
//! The Lennard-Jones law itself is a pair of pure free functions of the
//! separation, so it can be unit-tested against closed-form values
//! (e.g. `lennard_jones_potential(r_m) == -epsilon`). The `ForceSet`
//! accumulates per-particle net forces and potential shares over a read-only
//! snapshot of positions.

use crate::simulation::error::SimError;
use crate::simulation::states::{NVec2, System};

/// Lennard-Jones pair potential at separation `r`
/// `epsilon` is the well depth, `r_m` the equilibrium distance where the
/// potential reaches its minimum of `-epsilon`
/// Caller must guarantee `r > 0`
pub fn lennard_jones_potential(r: f64, r_m: f64, epsilon: f64) -> f64 {
    let s = r_m / r;
    epsilon * (s.powi(12) - 2.0 * s.powi(6))
}

/// Lennard-Jones force on the particle at the head of `d`, where `d` points
/// from the other particle to this one and `r = |d|`
/// Repulsive for `r < r_m`, attractive for `r > r_m`, zero at `r = r_m`
/// Caller must guarantee `r > 0`
pub fn lennard_jones_force(d: NVec2, r: f64, r_m: f64, epsilon: f64) -> NVec2 {
    let s = r_m / r;
    12.0 * d / (r_m * r) * epsilon * (s.powi(13) - s.powi(7))
}

/// Collection of pairwise interaction terms
/// Each term implements [`Interaction`] and their contributions are summed
/// into one net force and one potential share per particle
pub struct ForceSet {
    terms: Vec<Box<dyn Interaction + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an interaction term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Interaction + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces and potential shares for all particles in `sys`
    /// - `forces[i]` is set to the net force on particle i
    /// - `potentials[i]` is set to particle i's own share of the system
    ///   potential energy
    /// Positions in `sys` are only read, so all particles see one consistent
    /// snapshot regardless of the order the pair loop visits them in
    pub fn accumulate(
        &self,
        sys: &System,
        forces: &mut [NVec2],
        potentials: &mut [f64],
    ) -> Result<(), SimError> {
        // Zero buffers
        for f in forces.iter_mut() {
            *f = NVec2::zeros();
        }
        for p in potentials.iter_mut() {
            *p = 0.0;
        }
        // Iterate over all interaction contributors
        for term in &self.terms {
            term.accumulate(sys, forces, potentials)?;
        }
        Ok(())
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for pairwise interaction sources operating on [`System`]
/// Implementations add their contribution into `forces[i]` / `potentials[i]`
/// for each particle
pub trait Interaction {
    fn accumulate(
        &self,
        sys: &System,
        forces: &mut [NVec2],
        potentials: &mut [f64],
    ) -> Result<(), SimError>;
}

/// Direct n^2 Lennard-Jones interaction over all unordered pairs
/// Exactly coincident particles are a fatal precondition violation; there is
/// no softening and no merge handling
pub struct LennardJones {
    pub r_m: f64, // equilibrium distance
    pub epsilon: f64, // well depth
}

impl Interaction for LennardJones {
    fn accumulate(
        &self,
        sys: &System,
        forces: &mut [NVec2],
        potentials: &mut [f64],
    ) -> Result<(), SimError> {
        let n = sys.particles.len();
        if n == 0 { // no particles, return
            return Ok(());
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = sys.particles[i].x; // position of particle i

            for j in (i + 1)..n {
                let xj = sys.particles[j].x; // position of particle j

                // d points from j to i, so the force computed from it acts
                // on i; j receives the exact negation (Newton's third law)
                let d = xi - xj;
                let r = d.norm();

                if r == 0.0 {
                    return Err(SimError::DegenerateSeparation { i, j });
                }

                let f = lennard_jones_force(d, r, self.r_m, self.epsilon);
                forces[i] += f;
                forces[j] -= f;

                // Each particle of the pair records the full pair potential
                // as its own share, matching the per-particle bookkeeping the
                // energy track is built from
                let phi = lennard_jones_potential(r, self.r_m, self.epsilon);
                potentials[i] += phi;
                potentials[j] += phi;
            }
        }

        Ok(())
    }
}

//! Fixed-step velocity-Verlet integrator for the particle box
//!
//! One call advances the whole system by a single step `dt = params.dt`,
//! driven by a [`ForceSet`] and the box boundary from `Parameters`.
//!
//! The phase order across the particle set is a correctness requirement, not
//! a performance detail: every particle finishes the half-kick before any
//! particle drifts, and forces are recomputed from the fully drifted
//! positions before any second half-kick. Verlet's energy behavior depends
//! on all particles seeing stage-consistent forces.

use super::error::SimError;
use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step using velocity-Verlet
/// Updates positions, velocities, per-particle histories, and `sys.t`
/// in-place; uses the forces stored on the particles from the previous step
/// (or the initialization pass) for the first half-kick
pub fn verlet_step(
    sys: &mut System,
    forces: &ForceSet,
    params: &Parameters,
) -> Result<(), SimError> {
    let n = sys.particles.len();
    if n == 0 { // no particles, return
        return Ok(());
    }

    let dt = params.dt; // time step dt
    let half_dt = 0.5 * dt; // half step dt/2, half update for verlet

    // First half-kick for every particle, from the previous step's forces:
    // v_n+1/2 = v_n + (dt/2) * f_n
    for p in sys.particles.iter_mut() {
        p.half_v = p.v + half_dt * p.f;
    }

    // Now that all half-velocities exist, drift every position a full step:
    // x_n+1 = x_n + dt * v_n+1/2
    for p in sys.particles.iter_mut() {
        p.x += dt * p.half_v;
        p.x_hist.push(p.x);
    }

    // Increment the system time by one full step
    sys.t += dt;

    // Recompute forces and potential shares from the drifted positions.
    // Positions are frozen for the rest of the step, so every particle's
    // force comes from the same snapshot
    let mut f_new = vec![NVec2::zeros(); n];
    let mut pe_new = vec![0.0; n];
    forces.accumulate(&*sys, &mut f_new, &mut pe_new)?;

    // Per particle: second half-kick, wall bounce, energy bookkeeping.
    // v_n+1 = v_n+1/2 + (dt/2) * f_n+1
    // The velocity history records the pre-bounce value; the bounced
    // velocity is what the next step's half-kick starts from. The bounce
    // only flips a sign, so the recorded energy is unaffected
    for (i, p) in sys.particles.iter_mut().enumerate() {
        p.f = f_new[i];
        p.pe = pe_new[i];
        p.v = p.half_v + half_dt * p.f;
        p.v_hist.push(p.v);
        p.bounce(params.boundary);
        p.e_hist.push(p.kinetic_energy() + p.pe);
    }

    Ok(())
}

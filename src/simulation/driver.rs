//! Deterministic fixed-step time loop
//!
//! Repeatedly applies [`verlet_step`] until `t_end` is reached: exactly
//! `ceil(t_end / dt)` steps, no early termination, no adaptive step size,
//! no convergence check. On completion the scenario holds every particle's
//! full position/velocity/energy history for the viewer and the energy
//! reporter.

use super::error::SimError;
use super::integrator::verlet_step;
use super::scenario::Scenario;

/// Run the scenario's system from t = 0 to completion
pub fn run_simulation(scenario: &mut Scenario) -> Result<(), SimError> {
    let Scenario {
        parameters,
        system,
        forces,
        ..
    } = scenario;

    parameters.validate()?;

    for _ in 0..parameters.step_count() {
        verlet_step(system, forces, parameters)?;
    }

    Ok(())
}

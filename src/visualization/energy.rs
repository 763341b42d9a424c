//! Diagnostic energy report for a completed run
//!
//! Prints the per-step system energy as CSV, one row per recorded step.
//! Paste the output directly into a spreadsheet to graph the drift.
//!
//! Each row sums every particle's recorded `kinetic + own potential share`
//! for that step. The per-particle shares count each pair's potential twice
//! across the system sum; that is the scaling the reference bookkeeping
//! produces and it is reported as-is.

use crate::simulation::scenario::Scenario;

/// Print `step,total_energy` rows for the whole recorded run
pub fn report_energy(scenario: &Scenario) {
    println!("step,total_energy");

    let steps = scenario
        .system
        .particles
        .first()
        .map(|p| p.e_hist.len())
        .unwrap_or(0);

    for k in 0..steps {
        let total: f64 = scenario
            .system
            .particles
            .iter()
            .map(|p| p.e_hist[k])
            .sum();
        println!("{},{:.6}", k, total);
    }
}

//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with particles at t = 0, forces initialized)
//! - active force set (`ForceSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! playback and diagnostics systems after the driver has run it

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{InitConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceSet, LennardJones};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, System};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, and
/// the set of active interactions
#[derive(Resource)]
pub struct Scenario {
    pub title: String,
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

impl Scenario {
    /// Build the runtime scenario and run the initialization force pass so
    /// the first half-kick has forces to work from
    /// Fails on invalid parameters, an empty velocity-choice set, or
    /// coincident initial positions
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig, validated up front
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            dt: p_cfg.dt,
            boundary: p_cfg.boundary,
            r_m: p_cfg.r_m.unwrap_or(1.0),
            epsilon: p_cfg.epsilon.unwrap_or(0.1),
        };
        parameters.validate()?;

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            animate: e_cfg.animate,
            report_energy: e_cfg.report_energy,
            trail_length: e_cfg.trail_length.unwrap_or(50),
        };

        // Particles: explicit list or seeded-random gas
        let particles = match cfg.init {
            InitConfig::Explicit { particles } => particles
                .iter()
                .map(|pc| {
                    Particle::new(
                        NVec2::new(pc.x[0], pc.x[1]),
                        NVec2::new(pc.v[0], pc.v[1]),
                    )
                })
                .collect(),
            InitConfig::Random {
                count,
                pos_range,
                v_choices,
                seed,
            } => init_random_particles(count, pos_range, &v_choices, seed)?,
        };

        // Initial system state: particles at t = 0
        let mut system = System {
            particles,
            t: 0.0,
        };

        // Forces: construct a ForceSet and register the Lennard-Jones pair law
        let forces = ForceSet::new().with(LennardJones {
            r_m: parameters.r_m,
            epsilon: parameters.epsilon,
        });

        // Initialization pass: compute forces and potential shares for the
        // starting positions before any integration step. Also catches
        // coincident initial positions as a degenerate configuration
        init_forces(&mut system, &forces)?;

        Ok(Self {
            title: cfg.title,
            engine,
            parameters,
            system,
            forces,
        })
    }
}

/// Draw `count` particles with positions uniform in the square
/// `pos_range[0]..pos_range[1]` on each axis and velocity components picked
/// from the discrete `v_choices` set, seeded for reproducibility
pub fn init_random_particles(
    count: usize,
    pos_range: [f64; 2],
    v_choices: &[f64],
    seed: Option<u64>,
) -> Result<Vec<Particle>, SimError> {
    if v_choices.is_empty() {
        return Err(SimError::EmptyVelocityChoices);
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.gen_range(pos_range[0]..pos_range[1]);
        let y = rng.gen_range(pos_range[0]..pos_range[1]);
        let vx = v_choices[rng.gen_range(0..v_choices.len())];
        let vy = v_choices[rng.gen_range(0..v_choices.len())];
        particles.push(Particle::new(NVec2::new(x, y), NVec2::new(vx, vy)));
    }

    Ok(particles)
}

/// Compute forces and potential shares for the current positions and store
/// them on the particles, so the first half-kick of the first step sees them
pub fn init_forces(sys: &mut System, forces: &ForceSet) -> Result<(), SimError> {
    let n = sys.particles.len();
    let mut f = vec![NVec2::zeros(); n];
    let mut pe = vec![0.0; n];
    forces.accumulate(&*sys, &mut f, &mut pe)?;
    for (i, p) in sys.particles.iter_mut().enumerate() {
        p.f = f[i];
        p.pe = pe[i];
    }
    Ok(())
}

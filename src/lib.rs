pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, System, NVec2};
pub use simulation::forces::{ForceSet, Interaction, LennardJones, lennard_jones_force, lennard_jones_potential};
pub use simulation::integrator::verlet_step;
pub use simulation::driver::run_simulation;
pub use simulation::scenario::{Scenario, init_forces, init_random_particles};
pub use simulation::params::Parameters;
pub use simulation::error::SimError;

pub use configuration::config::{EngineConfig, ParametersConfig, ParticleConfig, InitConfig, ScenarioConfig};

pub use visualization::{ljbox_vis2d::run_2d, energy::report_energy};

pub use benchmark::benchmark::{bench_forces, bench_verlet, bench_verlet_curve};

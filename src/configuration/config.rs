//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – output options (viewer, energy report, trail)
//! - [`ParametersConfig`] – numerical parameters and interaction constants
//! - [`InitConfig`]       – initial conditions, explicit or seeded-random
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An explicit two-particle scenario matching these types:
//!
//! ```yaml
//! title: "Two particles with opposite velocities"
//!
//! engine:
//!   animate: true
//!   report_energy: true
//!   trail_length: 50
//!
//! parameters:
//!   t_end: 200.0            # total simulation time
//!   dt: 0.01                # fixed step size
//!   boundary: 5.0           # box half-width, walls at +-5
//!   r_m: 1.0                # LJ equilibrium distance
//!   epsilon: 0.1            # LJ well depth
//!
//! init:
//!   mode: explicit
//!   particles:
//!     - x: [ -2.0, 0.0 ]
//!       v: [  3.0, 0.0 ]
//!     - x: [  2.0, 0.0 ]
//!       v: [ -3.0, 0.0 ]
//! ```
//!
//! A random gas instead uses:
//!
//! ```yaml
//! init:
//!   mode: random
//!   count: 15
//!   pos_range: [ -5.0, 5.0 ]
//!   v_choices: [ -2.0, 2.0 ]
//!   seed: 42
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

/// Output options for a completed run
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub animate: bool, // `true` - open the Bevy playback viewer after the run
    pub report_energy: bool, // `true` - print per-step total energy as CSV
    pub trail_length: Option<usize>, // viewer trail length in frames, default 50
}

/// Global numerical parameters and interaction constants for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub dt: f64, // fixed step size
    pub boundary: f64, // half-width of the square reflecting box
    pub r_m: Option<f64>, // LJ equilibrium distance, default 1.0
    pub epsilon: Option<f64>, // LJ well depth, default 0.1
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub x: [f64; 2], // initial position in simulation units
    pub v: [f64; 2], // initial velocity in simulation units per time unit
}

/// Initial-condition source: an explicit particle list, or a reproducible
/// random gas with positions uniform in a square range and velocity
/// components drawn from a discrete choice set
#[derive(Deserialize, Debug)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum InitConfig {
    Explicit {
        particles: Vec<ParticleConfig>,
    },
    Random {
        count: usize,
        pos_range: [f64; 2],
        v_choices: Vec<f64>,
        seed: Option<u64>,
    },
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub title: String, // scenario title, shown by the viewer
    pub engine: EngineConfig, // output options
    pub parameters: ParametersConfig, // numerical parameters and constants
    pub init: InitConfig, // initial state of the system
}

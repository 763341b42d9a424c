use ljbox::simulation::states::{Particle, System, NVec2};
use ljbox::simulation::params::Parameters;
use ljbox::simulation::forces::{ForceSet, LennardJones, lennard_jones_force, lennard_jones_potential};
use ljbox::simulation::integrator::verlet_step;
use ljbox::simulation::scenario::{init_forces, init_random_particles};
use ljbox::simulation::error::SimError;
use ljbox::simulation::driver::run_simulation;
use ljbox::simulation::scenario::Scenario;
use ljbox::configuration::config::{
    EngineConfig, InitConfig, ParametersConfig, ParticleConfig, ScenarioConfig,
};

/// Build a symmetric two-particle System: positions and velocities are exact
/// negations of each other about the origin
pub fn symmetric_pair(hx: f64, hy: f64, vx: f64, vy: f64) -> System {
    let p1 = Particle::new(NVec2::new(-hx, -hy), NVec2::new(vx, vy));
    let p2 = Particle::new(NVec2::new(hx, hy), NVec2::new(-vx, -vy));
    System {
        particles: vec![p1, p2],
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        t_end: 1.0,
        dt: 0.01,
        boundary: 5.0,
        r_m: 1.0,
        epsilon: 0.1,
    }
}

/// Build a Lennard-Jones term + ForceSet
pub fn lj_set(p: &Parameters) -> ForceSet {
    ForceSet::new().with(LennardJones {
        r_m: p.r_m,
        epsilon: p.epsilon,
    })
}

/// Initialize forces and run the full fixed-step loop
pub fn run_steps(sys: &mut System, forces: &ForceSet, params: &Parameters) {
    init_forces(sys, forces).expect("init forces");
    for _ in 0..params.step_count() {
        verlet_step(sys, forces, params).expect("verlet step");
    }
}

/// Separation distance between the two particles of a pair at history frame `k`
fn separation_at(sys: &System, k: usize) -> f64 {
    (sys.particles[0].x_hist[k] - sys.particles[1].x_hist[k]).norm()
}

// ==================================================================================
// Force-law tests
// ==================================================================================

#[test]
fn potential_minimum_at_equilibrium() {
    let phi = lennard_jones_potential(1.0, 1.0, 0.1);
    assert!((phi + 0.1).abs() < 1e-12, "Expected -epsilon at r_m, got {}", phi);

    // The equilibrium value is the minimum: nearby separations sit above it
    assert!(lennard_jones_potential(0.9, 1.0, 0.1) > phi);
    assert!(lennard_jones_potential(1.1, 1.0, 0.1) > phi);
}

#[test]
fn force_zero_at_equilibrium() {
    let d = NVec2::new(1.0, 0.0);
    let f = lennard_jones_force(d, 1.0, 1.0, 0.1);
    assert!(f.norm() < 1e-12, "Force at r_m should vanish, got {:?}", f);
}

#[test]
fn force_attractive_beyond_equilibrium() {
    // d points from the other particle to this one, so attraction means the
    // force opposes d
    let d = NVec2::new(2.0, 0.0);
    let f = lennard_jones_force(d, 2.0, 1.0, 0.1);
    assert!(f.dot(&d) < 0.0, "Force at r > r_m is not attractive: {:?}", f);
}

#[test]
fn force_repulsive_within_equilibrium() {
    let d = NVec2::new(0.8, 0.0);
    let f = lennard_jones_force(d, 0.8, 1.0, 0.1);
    assert!(f.dot(&d) > 0.0, "Force at r < r_m is not repulsive: {:?}", f);
}

#[test]
fn forces_newton_third_law() {
    let sys = symmetric_pair(1.0, 0.25, 0.0, 0.0);
    let p = test_params();
    let forces = lj_set(&p);

    let mut f = vec![NVec2::zeros(); 2];
    let mut pe = vec![0.0; 2];
    forces.accumulate(&sys, &mut f, &mut pe).expect("accumulate");

    let net = f[0] + f[1];
    assert!(net.norm() < 1e-12, "Net force not zero: {:?}", net);

    // Both particles of a pair record the same potential share
    assert!((pe[0] - pe[1]).abs() < 1e-12);
}

#[test]
fn degenerate_separation_is_error() {
    let p1 = Particle::new(NVec2::new(0.5, 0.5), NVec2::zeros());
    let p2 = Particle::new(NVec2::new(0.5, 0.5), NVec2::zeros());
    let sys = System {
        particles: vec![p1, p2],
        t: 0.0,
    };
    let p = test_params();
    let forces = lj_set(&p);

    let mut f = vec![NVec2::zeros(); 2];
    let mut pe = vec![0.0; 2];
    let result = forces.accumulate(&sys, &mut f, &mut pe);

    assert!(
        matches!(result, Err(SimError::DegenerateSeparation { i: 0, j: 1 })),
        "Coincident particles should be a degenerate-configuration error"
    );
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn center_of_mass_stays_at_origin_for_symmetric_pair() {
    let mut sys = symmetric_pair(1.5, 0.0, 0.5, 0.0);
    let p = test_params();
    let forces = lj_set(&p);

    run_steps(&mut sys, &forces, &p);

    let frames = sys.particles[0].x_hist.len();
    for k in 0..frames {
        let com = sys.particles[0].x_hist[k] + sys.particles[1].x_hist[k];
        assert!(com.norm() < 1e-12, "COM drifted at frame {}: {:?}", k, com);
    }
}

#[test]
fn energy_conserved_without_bounces() {
    // Full head-on encounter: approach, core rebound, and departure, with
    // the walls far enough away that no reflection ever fires
    let mut sys = symmetric_pair(1.5, 0.0, 0.5, 0.0);
    let p = Parameters {
        t_end: 4.0,
        dt: 0.001,
        boundary: 50.0,
        r_m: 1.0,
        epsilon: 0.1,
    };
    let forces = lj_set(&p);

    // True mechanical energy, with the pair potential counted once
    let energy_of = |sys: &System| {
        let ke: f64 = sys.particles.iter().map(|q| q.kinetic_energy()).sum();
        let r = (sys.particles[0].x - sys.particles[1].x).norm();
        ke + lennard_jones_potential(r, p.r_m, p.epsilon)
    };

    let e0 = energy_of(&sys);
    run_steps(&mut sys, &forces, &p);
    let e1 = energy_of(&sys);

    // No particle may have reached a wall during the run
    for q in &sys.particles {
        for x in &q.x_hist {
            assert!(x.x.abs() < p.boundary && x.y.abs() < p.boundary);
        }
    }

    assert!(
        (e1 - e0).abs() < 1e-3,
        "Energy drifted from {} to {}",
        e0,
        e1
    );
}

#[test]
fn wall_reflection_flips_normal_component_only() {
    // Single free particle launched at the +x wall; no pair forces
    let mut sys = System {
        particles: vec![Particle::new(NVec2::new(4.9, 0.0), NVec2::new(3.0, 1.0))],
        t: 0.0,
    };
    let p = Parameters {
        t_end: 0.1,
        dt: 0.01,
        boundary: 5.0,
        r_m: 1.0,
        epsilon: 0.1,
    };
    let forces = lj_set(&p);

    run_steps(&mut sys, &forces, &p);

    let q = &sys.particles[0];

    // Normal component reversed exactly, tangential untouched
    assert!((q.v.x + 3.0).abs() < 1e-12, "vx not reversed: {}", q.v.x);
    assert!((q.v.y - 1.0).abs() < 1e-12, "vy changed: {}", q.v.y);
    for v in &q.v_hist {
        assert!((v.y - 1.0).abs() < 1e-12, "tangential component changed mid-run");
    }

    // Exactly one sign change across the recorded velocities
    let flips = q
        .v_hist
        .windows(2)
        .filter(|w| w[0].x.signum() != w[1].x.signum())
        .count();
    assert_eq!(flips, 1, "Expected a single reflection event");
}

#[test]
fn head_on_pair_rebounds_once_and_never_touches() {
    // Two particles at (-1.5, 0) and (1.5, 0) with velocities (3, 0) and
    // (-3, 0): expect deceleration through the repulsive core, one velocity
    // sign flip each, and a strictly positive minimum separation
    let mut sys = symmetric_pair(1.5, 0.0, 3.0, 0.0);
    let p = test_params(); // dt = 0.01, t_end = 1.0 -> 100 steps
    let forces = lj_set(&p);

    run_steps(&mut sys, &forces, &p);

    // Step-count invariant: ceil(t_end/dt) + 1 recorded states
    assert_eq!(p.step_count(), 100);
    for q in &sys.particles {
        assert_eq!(q.x_hist.len(), 101);
        assert_eq!(q.v_hist.len(), 101);
        assert_eq!(q.e_hist.len(), 100);
    }

    // Separation never reaches zero
    let frames = sys.particles[0].x_hist.len();
    let min_sep = (0..frames)
        .map(|k| separation_at(&sys, k))
        .fold(f64::INFINITY, f64::min);
    assert!(min_sep > 0.0, "Particles coincided, min separation {}", min_sep);
    assert!(min_sep < 1.0, "Particles never entered the repulsive core");

    // Exactly one velocity sign flip per particle
    for q in &sys.particles {
        let flips = q
            .v_hist
            .windows(2)
            .filter(|w| w[0].x.signum() != w[1].x.signum())
            .count();
        assert_eq!(flips, 1, "Expected a single rebound");
    }

    // Monotonic deceleration of the left particle while the pair is inside
    // the repulsive core
    let vx = &sys.particles[0].v_hist;
    for k in 0..frames - 1 {
        if separation_at(&sys, k) < p.r_m && separation_at(&sys, k + 1) < p.r_m {
            assert!(
                vx[k + 1].x < vx[k].x,
                "vx rose inside the repulsive core at frame {}",
                k
            );
        }
    }
}

#[test]
fn step_count_rounds_up_for_non_integer_ratio() {
    let mut sys = System {
        particles: vec![Particle::new(NVec2::zeros(), NVec2::zeros())],
        t: 0.0,
    };
    let p = Parameters {
        t_end: 1.0,
        dt: 0.3,
        boundary: 5.0,
        r_m: 1.0,
        epsilon: 0.1,
    };
    let forces = lj_set(&p);

    assert_eq!(p.step_count(), 4);

    run_steps(&mut sys, &forces, &p);
    assert_eq!(sys.particles[0].x_hist.len(), 5);
}

// ==================================================================================
// Configuration and initial-condition tests
// ==================================================================================

#[test]
fn non_positive_parameters_are_rejected() {
    let mut p = test_params();
    p.dt = 0.0;
    assert!(matches!(
        p.validate(),
        Err(SimError::NonPositiveParameter { name: "dt", .. })
    ));

    let mut p = test_params();
    p.t_end = -1.0;
    assert!(matches!(
        p.validate(),
        Err(SimError::NonPositiveParameter { name: "t_end", .. })
    ));

    let mut p = test_params();
    p.boundary = 0.0;
    assert!(matches!(
        p.validate(),
        Err(SimError::NonPositiveParameter { name: "boundary", .. })
    ));
}

#[test]
fn random_init_is_seeded_and_bounded() {
    let a = init_random_particles(10, [-5.0, 5.0], &[-2.0, 2.0], Some(7)).expect("init");
    let b = init_random_particles(10, [-5.0, 5.0], &[-2.0, 2.0], Some(7)).expect("init");

    assert_eq!(a.len(), 10);
    for (pa, pb) in a.iter().zip(b.iter()) {
        assert_eq!(pa.x, pb.x, "Same seed must reproduce the same positions");
        assert_eq!(pa.v, pb.v, "Same seed must reproduce the same velocities");
    }

    for q in &a {
        assert!(q.x.x >= -5.0 && q.x.x < 5.0);
        assert!(q.x.y >= -5.0 && q.x.y < 5.0);
        assert!(q.v.x == -2.0 || q.v.x == 2.0);
        assert!(q.v.y == -2.0 || q.v.y == 2.0);
    }
}

#[test]
fn random_init_requires_velocity_choices() {
    let result = init_random_particles(5, [-1.0, 1.0], &[], Some(1));
    assert!(matches!(result, Err(SimError::EmptyVelocityChoices)));
}

#[test]
fn scenario_builds_and_runs_from_config() {
    let cfg = ScenarioConfig {
        title: "head-on pair".to_string(),
        engine: EngineConfig {
            animate: false,
            report_energy: false,
            trail_length: None,
        },
        parameters: ParametersConfig {
            t_end: 1.0,
            dt: 0.01,
            boundary: 5.0,
            r_m: None,
            epsilon: None,
        },
        init: InitConfig::Explicit {
            particles: vec![
                ParticleConfig {
                    x: [-1.5, 0.0],
                    v: [3.0, 0.0],
                },
                ParticleConfig {
                    x: [1.5, 0.0],
                    v: [-3.0, 0.0],
                },
            ],
        },
    };

    let mut scenario = Scenario::build_scenario(cfg).expect("build scenario");

    // Missing interaction constants take the defaults
    assert_eq!(scenario.parameters.r_m, 1.0);
    assert_eq!(scenario.parameters.epsilon, 0.1);
    assert_eq!(scenario.engine.trail_length, 50);

    run_simulation(&mut scenario).expect("run simulation");

    for q in &scenario.system.particles {
        assert_eq!(q.x_hist.len(), 101);
        assert_eq!(q.e_hist.len(), 100);
    }
    assert!((scenario.system.t - 1.0).abs() < 1e-9);
}

#[test]
fn init_pass_fills_forces_before_first_step() {
    let mut sys = symmetric_pair(1.5, 0.0, 0.0, 0.0);
    let p = test_params();
    let forces = lj_set(&p);

    init_forces(&mut sys, &forces).expect("init forces");

    for q in &sys.particles {
        assert!(q.f.norm() > 0.0, "Initialization pass left forces empty");
        assert!(q.pe < 0.0, "Pair at r > r_m should sit in the attractive well");
        assert_eq!(q.x_hist.len(), 1);
        assert_eq!(q.v_hist.len(), 1);
        assert!(q.e_hist.is_empty());
    }
}

use std::time::Instant;
use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceSet, LennardJones};
use crate::simulation::integrator::verlet_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, System};

/// Helper to build a System of `n` particles on a square lattice
/// Lattice spacing sits outside the repulsive core so the pair sums are
/// well-conditioned at any size
fn make_system(n: usize) -> System {
    let side = (n as f64).sqrt().ceil() as usize;
    let spacing = 1.5; // 1.5 * r_m with r_m = 1.0

    let mut particles = Vec::with_capacity(n);
    for i in 0..n {
        let row = i / side;
        let col = i % side;
        let x = NVec2::new(col as f64 * spacing, row as f64 * spacing);
        particles.push(Particle::new(x, NVec2::zeros()));
    }

    System { particles, t: 0.0 }
}

/// Default parameters for benchmarking
fn make_params() -> Parameters {
    Parameters {
        t_end: 1.0,
        dt: 0.01,
        boundary: 1.0e6, // walls far away, no bounces during timing
        r_m: 1.0,
        epsilon: 0.1,
    }
}

/// Time one direct n^2 force accumulation for a range of system sizes
pub fn bench_forces() -> Result<(), SimError> {
    let ns = [50, 100, 200, 400, 800, 1600];

    for n in ns {
        let sys = make_system(n);
        let params = make_params();

        let forces = ForceSet::new().with(LennardJones {
            r_m: params.r_m,
            epsilon: params.epsilon,
        });

        let mut f = vec![NVec2::zeros(); n];
        let mut pe = vec![0.0; n];

        // Warm up
        forces.accumulate(&sys, &mut f, &mut pe)?;

        let t0 = Instant::now();
        forces.accumulate(&sys, &mut f, &mut pe)?;
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {:8.6} s", dt_direct);
    }

    Ok(())
}

/// Time whole verlet steps (two force evaluations each) for a range of sizes
pub fn bench_verlet() -> Result<(), SimError> {
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 5; // steps per size (tune as needed)

    for n in ns {
        let mut sys = make_system(n);
        let params = make_params();

        let forces = ForceSet::new().with(LennardJones {
            r_m: params.r_m,
            epsilon: params.epsilon,
        });

        // Warm-up
        verlet_step(&mut sys, &forces, &params)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            verlet_step(&mut sys, &forces, &params)?;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:5}, verlet step = {:8.6} s", n, per_step);
    }

    Ok(())
}

/// Benchmark the verlet step across a dense range of n
/// Paste output directly into excel to graph
pub fn bench_verlet_curve() -> Result<(), SimError> {
    println!("N,step_ms");

    for n in (50..=1600).step_by(50) {
        // Small n: average over a few steps to smooth noise
        // Large n: fewer steps to keep the total runtime bounded
        let steps = if n <= 400 { 5 } else { 2 };

        let mut sys = make_system(n);
        let params = make_params();

        let forces = ForceSet::new().with(LennardJones {
            r_m: params.r_m,
            epsilon: params.epsilon,
        });

        let t0 = Instant::now();
        for _ in 0..steps {
            verlet_step(&mut sys, &forces, &params)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }

    Ok(())
}

use ljbox::{ScenarioConfig, Scenario};
use ljbox::{run_simulation, report_energy, run_2d};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_particles_head_on.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml()?;

    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    // Run the whole fixed-step simulation first; the viewer only replays
    // the recorded trajectories
    run_simulation(&mut scenario)?;

    if scenario.engine.report_energy {
        report_energy(&scenario);
    }
    if scenario.engine.animate {
        run_2d(scenario);
    }

    //bench_forces()?;
    //bench_verlet()?;
    //bench_verlet_curve()?;

    Ok(())
}

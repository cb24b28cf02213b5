use gravfield::{bench_integrators, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless point-mass gravity simulation")]
struct Args {
    /// Scenario file, looked up in `scenarios/` when not found as given
    #[arg(short, long = "file", default_value = "sun_earth.yaml")]
    file_name: String,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Print positions every N frames
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Time the integrators instead of running a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn run_bench() -> Result<()> {
    println!("bodies,integrator,evaluations,ns_per_step,steps_per_frame_60hz");
    for row in bench_integrators(&[2, 3, 8], 100_000).context("building benchmark field")? {
        println!(
            "{},{},{},{:.1},{:.0}",
            row.bodies,
            row.integrator.name(),
            row.integrator.evaluations(),
            row.ns_per_step,
            row.steps_per_frame_at_60hz()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        return run_bench();
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg).context("invalid scenario")?;

    info!(
        "running {} frames of {} substeps ({:e} s simulated each)",
        args.frames,
        scenario.driver.substeps_per_frame(),
        scenario.frame_span
    );

    let every = args.every.max(1);
    let start_momentum = scenario.driver.field().total_momentum();

    scenario.driver.run(args.frames, |snap| {
        if snap.frame % every != 0 {
            return;
        }
        let day = (snap.time / gravfield::SECS_PER_DAY).floor();
        for (i, p) in snap.positions.iter().enumerate() {
            println!("points[{}]({}) = ({:e}, {:e}, {:e})", i, day, p.x, p.y, p.z);
        }
    });

    let drift = (scenario.driver.field().total_momentum() - start_momentum).norm();
    if drift > 1e-6 * start_momentum.norm().max(1.0) {
        warn!("momentum drifted by {:e} kg·m/s", drift);
    }
    info!("done after {:.2} simulated days", scenario.driver.elapsed_days());

    Ok(())
}

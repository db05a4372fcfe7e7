use chainsim::{ScenarioConfig, Scenario};
use chainsim::run_2d;
use chainsim::{bench_init, bench_rotate};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Animate a chain of rotating circles")]
struct Args {
    /// Scenario file inside the crate's `scenarios/` directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Layout seed, overrides `chain.seed` from the scenario
    #[arg(long)]
    seed: Option<u64>,

    /// Time chain layout and rotation instead of opening a window
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let text = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read scenario {}", config_path.display()))?;

    // An empty file means "all defaults"
    if text.trim().is_empty() {
        return Ok(ScenarioConfig::default());
    }

    let scenario_cfg: ScenarioConfig = serde_yaml::from_str(&text)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_init()?;
        bench_rotate()?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(seed) = args.seed {
        scenario_cfg.chain.seed = Some(seed);
    }

    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    run_2d(scenario);

    Ok(())
}

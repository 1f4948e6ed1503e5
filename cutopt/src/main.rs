use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cutopt::config::CutConfig;
use cutopt::io;
use cutopt::io::cli::{Cli, CutMode};
use cutopt::io::output::{LinearOutput, PlateOutput, RingOutput};
use cutopt::opt::linear::LinearOptimizer;
use cutopt::opt::plate::PlateOptimizer;
use cutopt::pattern::ffca01::{RingParams, optimize_rings};
use cutopt::validate;
use log::{info, warn};
use stockcut::probs::linear::io::ext_repr::ExtLinearInstance;
use stockcut::probs::plate::io::ext_repr::ExtPlateInstance;
use stockcut::probs::{linear, plate};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CutConfig::default()
        }
        Some(config_file) => {
            io::read_json::<CutConfig>(&config_file).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed CutConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_string();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).context(format!(
            "could not create solution folder: {}",
            args.solution_folder.display()
        ))?;
    }
    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));

    match args.mode {
        CutMode::Linear => {
            let ext_instance = io::read_json::<ExtLinearInstance>(&args.input_file)?;
            main_linear(ext_instance, config, &solution_path)
        }
        CutMode::Plate => {
            let ext_instance = io::read_json::<ExtPlateInstance>(&args.input_file)?;
            main_plate(ext_instance, config, &solution_path)
        }
        CutMode::Rings => {
            let params = io::read_json::<RingParams>(&args.input_file)?;
            main_rings(params, config, &solution_path)
        }
    }
}

fn main_linear(ext_instance: ExtLinearInstance, config: CutConfig, solution_path: &Path) -> Result<()> {
    let instance = linear::io::import(&ext_instance)?;
    validate::linear_instance(&instance, config.reject_unplaceable)?;
    let sol = LinearOptimizer::new(instance.clone(), config.linear_heuristic).solve();

    let output = LinearOutput {
        instance: ext_instance,
        solution: linear::io::export(&instance, &sol),
        config,
    };
    io::write_json(&output, solution_path)
}

fn main_plate(ext_instance: ExtPlateInstance, config: CutConfig, solution_path: &Path) -> Result<()> {
    let instance = plate::io::import(&ext_instance)?;
    validate::plate_instance(&instance, config.reject_unplaceable)?;
    let sol = PlateOptimizer::new(instance.clone(), config.plate_strategy).solve();

    let output = PlateOutput {
        instance: ext_instance,
        solution: plate::io::export(&instance, &sol),
        config,
    };
    io::write_json(&output, solution_path)
}

fn main_rings(params: RingParams, config: CutConfig, solution_path: &Path) -> Result<()> {
    let solution = optimize_rings(&params, config.ring_material_length, config.linear_heuristic)?;
    let output = RingOutput { solution, config };
    io::write_json(&output, solution_path)
}

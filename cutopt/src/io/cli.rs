use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    #[arg(short, long, value_enum, default_value = "linear")]
    pub mode: CutMode,
}

/// What the input file describes
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutMode {
    /// Pieces to be cut from bars
    #[value(name = "linear")]
    Linear,
    /// Rectangular pieces to be cut from plates
    #[value(name = "plate")]
    Plate,
    /// FF-CA-01 ring parameters
    #[value(name = "rings")]
    Rings,
}

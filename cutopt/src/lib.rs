use std::sync::LazyLock;
use std::time::Instant;

use stockcut::probs::linear::entities::FitHeuristic;
use stockcut::probs::linear::io::ext_repr::{ExtLinearInstance, ExtLinearSolution};
use stockcut::probs::plate::entities::PlacementStrategy;
use stockcut::probs::plate::io::ext_repr::{ExtPlateInstance, ExtPlateSolution};
use stockcut::probs::{linear, plate};

use crate::opt::linear::LinearOptimizer;
use crate::opt::plate::PlateOptimizer;

pub mod config;
pub mod io;
pub mod opt;
pub mod pattern;
pub mod validate;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Cuts the pieces of `ext_instance` from bars using `heuristic`.
/// Oversized pieces are reported as unplaced in the returned solution.
pub fn optimize_linear(
    ext_instance: &ExtLinearInstance,
    heuristic: FitHeuristic,
) -> stockcut::Result<ExtLinearSolution> {
    let instance = linear::io::import(ext_instance)?;
    validate::linear_instance(&instance, false)?;
    let solution = LinearOptimizer::new(instance.clone(), heuristic).solve();
    Ok(linear::io::export(&instance, &solution))
}

/// Cuts the pieces of `ext_instance` from plates using `strategy`.
/// Pieces exceeding the plate in every allowed orientation are reported as unplaced.
pub fn optimize_plates(
    ext_instance: &ExtPlateInstance,
    strategy: PlacementStrategy,
) -> stockcut::Result<ExtPlateSolution> {
    let instance = plate::io::import(ext_instance)?;
    validate::plate_instance(&instance, false)?;
    let solution = PlateOptimizer::new(instance.clone(), strategy).solve();
    Ok(plate::io::export(&instance, &solution))
}

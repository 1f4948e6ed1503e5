use serde::{Deserialize, Serialize};
use stockcut::probs::linear::entities::FitHeuristic;
use stockcut::probs::plate::entities::PlacementStrategy;

/// Configuration of a cutopt run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct CutConfig {
    /// Bar selection rule for linear stock
    pub linear_heuristic: FitHeuristic,
    /// Placement strategy for plates. Accepts `simple`, `guillotine` and `maxrects`
    pub plate_strategy: PlacementStrategy,
    /// Length of the bars from which FF-CA-01 rings are cut
    pub ring_material_length: f64,
    /// Refuse instances containing pieces that can never be cut, instead of reporting them as unplaced
    pub reject_unplaceable: bool,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            linear_heuristic: FitHeuristic::FirstFit,
            plate_strategy: PlacementStrategy::Scanline,
            ring_material_length: 6000.0,
            reject_unplaceable: false,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::probs::linear::entities::FitHeuristic;

/// External representation of a [`LinearItem`](crate::probs::linear::entities::LinearItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtLinearItem {
    /// Name of the piece, e.g. `"A"`
    pub id: String,
    /// Nominal length of the finished piece
    pub length: f64,
    /// Number of pieces required
    #[serde(default = "default_quantity")]
    pub quantity: u64,
}

/// External representation of a [`LinearInstance`](crate::probs::linear::entities::LinearInstance).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtLinearInstance {
    /// Length of every bar
    pub material_length: f64,
    /// Material lost to the saw blade, added to every piece
    #[serde(default)]
    pub kerf_width: f64,
    pub items: Vec<ExtLinearItem>,
}

/// External representation of a [`LinearSolution`](crate::probs::linear::entities::LinearSolution).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtLinearSolution {
    pub bars: Vec<ExtBar>,
    pub total_bars: usize,
    /// Number of pieces placed over all bars
    pub total_items: usize,
    pub total_used_length: f64,
    /// Sum of the finished piece lengths, kerf excluded
    pub total_nominal_length: f64,
    pub total_waste: f64,
    /// Offcut length over the total length of all bars, as a percentage
    pub waste_percentage: f64,
    /// Used length over the total length of all bars, as a percentage
    pub overall_efficiency: f64,
    pub execution_time_ms: f64,
    pub algorithm: FitHeuristic,
    /// Number of pieces longer than the stock
    pub unplaced_items: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unplaced: Vec<ExtUnplacedCut>,
}

/// External representation of a [`Bar`](crate::probs::linear::entities::Bar).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtBar {
    /// e.g. `"BAR-1"`
    pub id: String,
    pub capacity: f64,
    pub used_length: f64,
    pub remaining_length: f64,
    pub efficiency: f64,
    pub waste_percentage: f64,
    pub cuts: Vec<ExtCut>,
}

/// External representation of a [`Cut`](crate::probs::linear::entities::Cut).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtCut {
    /// e.g. `"A-2"`
    pub instance_id: String,
    /// Name of the item the piece was expanded from, e.g. `"A"`
    pub item_id: String,
    pub length: f64,
    pub nominal_length: f64,
    pub position: f64,
}

/// A piece which could not be placed on any bar.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtUnplacedCut {
    pub instance_id: String,
    pub item_id: String,
    pub length: f64,
}

fn default_quantity() -> u64 {
    1
}

use std::time::Duration;

use crate::probs::linear::entities::{Bar, FitHeuristic, LinearUnit};

/// Outcome of one optimization run on a [`LinearInstance`](crate::probs::linear::entities::LinearInstance).
/// Read-only once produced: the aggregate statistics are derived from the bars on demand.
#[derive(Clone, Debug)]
pub struct LinearSolution {
    pub material_length: f64,
    pub heuristic: FitHeuristic,
    /// Bars in the order in which they were opened
    pub bars: Vec<Bar>,
    /// Units longer than the stock, rejected before any bar was opened
    pub unplaced: Vec<LinearUnit>,
    /// Wall-clock duration of the run
    pub run_time: Duration,
}

impl LinearSolution {
    pub fn total_bars(&self) -> usize {
        self.bars.len()
    }

    /// Number of units placed over all bars.
    pub fn total_items(&self) -> usize {
        self.bars.iter().map(|bar| bar.cuts.len()).sum()
    }

    pub fn total_used_length(&self) -> f64 {
        self.bars.iter().map(|bar| bar.used_length).sum()
    }

    /// Sum of the finished piece lengths, kerf excluded.
    pub fn total_nominal_length(&self) -> f64 {
        self.bars
            .iter()
            .flat_map(|bar| bar.cuts.iter())
            .map(|cut| cut.nominal_length)
            .sum()
    }

    pub fn total_waste(&self) -> f64 {
        self.bars.iter().map(|bar| bar.waste()).sum()
    }

    /// Total length of all bars consumed.
    pub fn total_material_length(&self) -> f64 {
        self.bars.len() as f64 * self.material_length
    }

    /// Used length over the total length of all consumed bars, as a percentage. 0 if no bars were used.
    pub fn overall_efficiency(&self) -> f64 {
        let total = self.total_material_length();
        if total > 0.0 {
            self.total_used_length() / total * 100.0
        } else {
            0.0
        }
    }

    pub fn waste_percentage(&self) -> f64 {
        let total = self.total_material_length();
        if total > 0.0 {
            self.total_waste() / total * 100.0
        } else {
            0.0
        }
    }

    pub fn unplaced_qty(&self) -> usize {
        self.unplaced.len()
    }

    pub fn run_time_ms(&self) -> f64 {
        self.run_time.as_secs_f64() * 1000.0
    }
}

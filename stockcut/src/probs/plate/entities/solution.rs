use std::time::Duration;

use crate::probs::plate::entities::{PlacementStrategy, Plate, RectUnit};

/// Outcome of one optimization run on a [`PlateInstance`](crate::probs::plate::entities::PlateInstance).
#[derive(Clone, Debug)]
pub struct PlateSolution {
    pub plate_width: f64,
    pub plate_height: f64,
    pub strategy: PlacementStrategy,
    /// Plates in the order in which they were opened
    pub plates: Vec<Plate>,
    /// Units which exceed the plate in every allowed orientation
    pub unplaced: Vec<RectUnit>,
    pub run_time: Duration,
}

impl PlateSolution {
    pub fn total_plates(&self) -> usize {
        self.plates.len()
    }

    pub fn total_items(&self) -> usize {
        self.plates.iter().map(|p| p.placed.len()).sum()
    }

    pub fn total_used_area(&self) -> f64 {
        self.plates.iter().map(|p| p.used_area).sum()
    }

    pub fn total_plate_area(&self) -> f64 {
        self.plates.iter().map(|p| p.area()).sum()
    }

    pub fn total_waste_area(&self) -> f64 {
        self.plates.iter().map(|p| p.waste_area()).sum()
    }

    /// Used area over the total area of all consumed plates, as a percentage. 0 if no plates were used.
    pub fn overall_efficiency(&self) -> f64 {
        let total = self.total_plate_area();
        if total > 0.0 {
            self.total_used_area() / total * 100.0
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

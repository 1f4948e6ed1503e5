use crate::probs::linear::entities::{Bar, LinearInstance, LinearSolution};
use crate::probs::linear::io::ext_repr::{ExtBar, ExtCut, ExtLinearSolution, ExtUnplacedCut};

/// Exports a solution out of the library
pub fn export(instance: &LinearInstance, solution: &LinearSolution) -> ExtLinearSolution {
    ExtLinearSolution {
        bars: solution
            .bars
            .iter()
            .map(|bar| export_bar(bar, instance))
            .collect(),
        total_bars: solution.total_bars(),
        total_items: solution.total_items(),
        total_used_length: solution.total_used_length(),
        total_nominal_length: solution.total_nominal_length(),
        total_waste: solution.total_waste(),
        waste_percentage: solution.waste_percentage(),
        overall_efficiency: solution.overall_efficiency(),
        execution_time_ms: solution.run_time_ms(),
        algorithm: solution.heuristic,
        unplaced_items: solution.unplaced_qty(),
        unplaced: solution
            .unplaced
            .iter()
            .map(|unit| ExtUnplacedCut {
                instance_id: instance.unit_label(unit.id),
                item_id: instance.item(unit.id.item_id).name.clone(),
                length: unit.length,
            })
            .collect(),
    }
}

fn export_bar(bar: &Bar, instance: &LinearInstance) -> ExtBar {
    ExtBar {
        id: bar.label(),
        capacity: bar.capacity,
        used_length: bar.used_length,
        remaining_length: bar.remaining_length,
        efficiency: bar.efficiency(),
        waste_percentage: bar.waste_percentage(),
        cuts: bar
            .cuts
            .iter()
            .map(|cut| ExtCut {
                instance_id: instance.unit_label(cut.unit),
                item_id: instance.item(cut.unit.item_id).name.clone(),
                length: cut.length,
                nominal_length: cut.nominal_length,
                position: cut.position,
            })
            .collect(),
    }
}

use crate::probs::plate::entities::{Plate, PlateInstance, PlateSolution};
use crate::probs::plate::io::ext_repr::{ExtPlacedRect, ExtPlate, ExtPlateSolution, ExtUnplacedRect};

/// Exports a solution out of the library
pub fn export(instance: &PlateInstance, solution: &PlateSolution) -> ExtPlateSolution {
    ExtPlateSolution {
        plates: solution
            .plates
            .iter()
            .map(|p| export_plate(p, instance))
            .collect(),
        total_plates: solution.total_plates(),
        total_items: solution.total_items(),
        total_used_area: solution.total_used_area(),
        total_waste_area: solution.total_waste_area(),
        overall_efficiency: solution.overall_efficiency(),
        unplaced_items: solution.unplaced_qty(),
        unplaced: solution
            .unplaced
            .iter()
            .map(|unit| {
                let item = instance.item(unit.id.item_id);
                ExtUnplacedRect {
                    instance_id: instance.unit_label(unit.id),
                    item_id: item.name.clone(),
                    width: unit.width,
                    height: unit.height,
                    nominal_width: item.nominal_width,
                    nominal_height: item.nominal_height,
                }
            })
            .collect(),
        execution_time_ms: solution.run_time_ms(),
        algorithm: solution.strategy,
    }
}

fn export_plate(plate: &Plate, instance: &PlateInstance) -> ExtPlate {
    ExtPlate {
        id: plate.label(),
        width: plate.width,
        height: plate.height,
        used_area: plate.used_area,
        waste_area: plate.waste_area(),
        efficiency: plate.efficiency(),
        waste_percentage: plate.waste_percentage(),
        items: plate
            .placed
            .iter()
            .map(|pr| {
                let item = instance.item(pr.unit.item_id);
                let (nominal_width, nominal_height) = pr
                    .orientation
                    .apply(item.nominal_width, item.nominal_height);
                ExtPlacedRect {
                    instance_id: instance.unit_label(pr.unit),
                    item_id: item.name.clone(),
                    x: pr.x(),
                    y: pr.y(),
                    width: pr.width(),
                    height: pr.height(),
                    nominal_width,
                    nominal_height,
                    rotated: pr.is_rotated(),
                }
            })
            .collect(),
        free_rects: plate.free_rects().iter().map(|&r| r.into()).collect(),
    }
}

use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::probs::plate::entities::{Plate, PlateInstance, PlateSolution, RectItem};
use crate::util::assertions;

pub fn instance_item_ids_correct(items: &[RectItem]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

/// Every placed unit lies within the plate and no two placed units overlap.
pub fn plate_is_collision_free(plate: &Plate) -> bool {
    let bounds = plate.bounds();
    if let Some(pr) = plate.placed.iter().find(|pr| !bounds.contains(&pr.footprint)) {
        error!("{:?} exceeds the bounds of plate {}", pr, plate.id);
        return false;
    }
    let footprints = plate.placed.iter().map(|pr| pr.footprint).collect_vec();
    if !assertions::rects_are_disjoint(&footprints) {
        error!("overlapping units on plate {}", plate.id);
        return false;
    }
    true
}

/// Free rectangles do not overlap any placed unit and none is enclosed by another.
pub fn free_rects_are_consistent(plate: &Plate) -> bool {
    let free = plate.free_rects().as_slice();
    assertions::rects_are_vacant(free, plate.placed.iter().map(|pr| &pr.footprint))
        && assertions::no_rect_enclosed(free)
}

pub fn plate_is_consistent(plate: &Plate) -> bool {
    let footprint_area = plate.placed.iter().map(|pr| pr.footprint.area()).sum::<f64>();
    plate_is_collision_free(plate)
        && free_rects_are_consistent(plate)
        && approx_eq!(f64, plate.used_area, footprint_area, ulps = 8)
        && !plate.is_empty()
}

/// Every demanded unit is either placed exactly once or reported as unplaced.
pub fn solution_conserves_units(instance: &PlateInstance, solution: &PlateSolution) -> bool {
    let seen = solution
        .plates
        .iter()
        .flat_map(|p| p.placed.iter().map(|pr| pr.unit))
        .chain(solution.unplaced.iter().map(|u| u.id))
        .sorted()
        .collect_vec();
    let expected = instance.units().into_iter().map(|u| u.id).sorted().collect_vec();
    seen == expected
}

pub fn solution_is_consistent(instance: &PlateInstance, solution: &PlateSolution) -> bool {
    solution.plates.iter().all(plate_is_consistent)
        && solution.plates.iter().all(|p| {
            p.width == instance.plate_width && p.height == instance.plate_height
        })
        && solution_conserves_units(instance, solution)
}

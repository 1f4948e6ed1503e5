use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use stockcut::geometry::{Orientation, Rect};
use stockcut::probs::plate::entities::{
    PlacementStrategy, Plate, PlateInstance, PlateSolution, RectUnit,
};
use stockcut::probs::plate::util::assertions;
use stockcut::util::FPA;
use thousands::Separable;

/// A position and orientation for a unit on a specific plate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlateInsertion {
    /// Index of the plate among the open plates
    pub plate_idx: usize,
    pub x: f64,
    pub y: f64,
    pub orientation: Orientation,
}

/// Greedy optimizer for plates.
/// Units that fit in none of their allowed orientations are reported as unplaced.
/// A new plate is only opened when no open plate can take the unit.
pub struct PlateOptimizer {
    pub instance: PlateInstance,
    pub strategy: PlacementStrategy,
}

impl PlateOptimizer {
    pub fn new(instance: PlateInstance, strategy: PlacementStrategy) -> Self {
        Self { instance, strategy }
    }

    pub fn solve(&self) -> PlateSolution {
        let start = Instant::now();
        let (plate_width, plate_height) = (self.instance.plate_width, self.instance.plate_height);

        let units = self.placement_order();
        let n_units = units.len();

        let mut plates: Vec<Plate> = vec![];
        let mut unplaced = vec![];

        for unit in units {
            if self.instance.fitting_orientation(&unit).is_none() {
                warn!(
                    "[PLATE] {} ({}x{}) does not fit on a {}x{} plate, not placed",
                    self.instance.unit_label(unit.id),
                    unit.width,
                    unit.height,
                    plate_width,
                    plate_height
                );
                unplaced.push(unit);
                continue;
            }

            let insertion = match self.search(&plates, &unit) {
                Some(insertion) => insertion,
                None => {
                    let empty = Plate::new(plates.len(), plate_width, plate_height);
                    match self.search(std::slice::from_ref(&empty), &unit) {
                        Some(ins) => {
                            plates.push(empty);
                            PlateInsertion {
                                plate_idx: plates.len() - 1,
                                ..ins
                            }
                        }
                        None => {
                            warn!(
                                "[PLATE] no position found for {} on an empty plate, not placed",
                                self.instance.unit_label(unit.id)
                            );
                            unplaced.push(unit);
                            continue;
                        }
                    }
                }
            };

            let plate = &mut plates[insertion.plate_idx];
            let placed = plate.place(&unit, insertion.x, insertion.y, insertion.orientation);
            debug!(
                "[PLATE] placed {} at ({}, {}){} on {} ({} free rects)",
                self.instance.unit_label(unit.id),
                placed.x(),
                placed.y(),
                if placed.is_rotated() { " rotated" } else { "" },
                plate.label(),
                plate.free_rects().len()
            );
        }

        let solution = PlateSolution {
            plate_width,
            plate_height,
            strategy: self.strategy,
            plates,
            unplaced,
            run_time: start.elapsed(),
        };

        debug_assert!(assertions::solution_is_consistent(&self.instance, &solution));

        info!(
            "[PLATE] {} placed {}/{} units on {} plates in {:.3}ms",
            self.strategy,
            solution.total_items().separate_with_commas(),
            n_units.separate_with_commas(),
            solution.total_plates(),
            solution.run_time_ms()
        );
        info!(
            "[PLATE] overall efficiency {:.3}%, {} unplaced",
            solution.overall_efficiency(),
            solution.unplaced_qty()
        );

        solution
    }

    /// Units in the order in which they are placed: descending area for the scanline,
    /// descending longest side for the free-rectangle best fit. Ties keep their input order.
    pub fn placement_order(&self) -> Vec<RectUnit> {
        let units = self.instance.units().into_iter();
        match self.strategy {
            PlacementStrategy::Scanline => units
                .sorted_by(|a, b| b.area().total_cmp(&a.area()))
                .collect(),
            PlacementStrategy::FreeRectBestFit => units
                .sorted_by(|a, b| b.max_dim().total_cmp(&a.max_dim()))
                .collect(),
        }
    }

    /// Searches the given plates for an insertion of `unit` according to the strategy.
    pub fn search(&self, plates: &[Plate], unit: &RectUnit) -> Option<PlateInsertion> {
        match self.strategy {
            PlacementStrategy::Scanline => plates.iter().enumerate().find_map(|(idx, plate)| {
                scanline_position(plate, unit).map(|(x, y, orientation)| PlateInsertion {
                    plate_idx: idx,
                    x,
                    y,
                    orientation,
                })
            }),
            PlacementStrategy::FreeRectBestFit => best_free_rect_fit(plates, unit),
        }
    }
}

/// First collision free position of `unit` on `plate` in row-major order over integer
/// coordinates, trying the original orientation on the whole plate before the rotated one.
pub fn scanline_position(plate: &Plate, unit: &RectUnit) -> Option<(f64, f64, Orientation)> {
    unit.orientations().iter().find_map(|&orientation| {
        let (width, height) = unit.dims(orientation);
        //every collision free position lies within one of the maximal free rectangles
        match plate.has_room_for(width, height) {
            true => scan(plate, width, height).map(|(x, y)| (x, y, orientation)),
            false => None,
        }
    })
}

fn scan(plate: &Plate, width: f64, height: f64) -> Option<(f64, f64)> {
    let (x_max, y_max) = (plate.width - width, plate.height - height);
    let mut y = 0.0;
    while FPA(y) <= FPA(y_max) {
        let mut x = 0.0;
        while FPA(x) <= FPA(x_max) {
            let candidate = Rect::from_origin(x, y, width, height);
            match plate.first_collision(&candidate) {
                None => return Some((x, y)),
                //every integer x left of the blocker's right edge collides with it as well
                Some(blocker) => x = f64::max(x + 1.0, blocker.footprint.x_max.ceil()),
            }
        }
        y += 1.0;
    }
    None
}

/// The free rectangle over all `plates` which leaves the least area unused when `unit` is
/// placed in its bottom left corner. Candidates are ranked by plate, then orientation, then
/// free rectangle; the first of equal scores wins.
pub fn best_free_rect_fit(plates: &[Plate], unit: &RectUnit) -> Option<PlateInsertion> {
    plates
        .iter()
        .enumerate()
        .flat_map(|(plate_idx, plate)| {
            unit.orientations().iter().flat_map(move |&orientation| {
                let (width, height) = unit.dims(orientation);
                plate
                    .free_rects()
                    .iter()
                    .filter(move |fr| fr.can_hold(width, height))
                    .map(move |fr| {
                        let insertion = PlateInsertion {
                            plate_idx,
                            x: fr.x_min,
                            y: fr.y_min,
                            orientation,
                        };
                        (insertion, fr.area() - width * height)
                    })
            })
        })
        .min_by_key(|&(_, score)| OrderedFloat(score))
        .map(|(insertion, _)| insertion)
}

#[cfg(test)]
mod tests {
    use stockcut::entities::UnitId;

    use super::*;

    fn unit(item_id: usize, width: f64, height: f64, allow_rotation: bool) -> RectUnit {
        RectUnit {
            id: UnitId::new(item_id, 1),
            width,
            height,
            allow_rotation,
        }
    }

    #[test]
    fn scanline_skips_past_blockers() {
        let mut plate = Plate::new(0, 100.0, 100.0);
        plate.place(&unit(0, 60.0, 60.0, false), 0.0, 0.0, Orientation::Original);
        assert_eq!(
            scanline_position(&plate, &unit(1, 40.0, 40.0, false)),
            Some((60.0, 0.0, Orientation::Original))
        );
        plate.place(&unit(1, 40.0, 40.0, false), 60.0, 0.0, Orientation::Original);
        assert_eq!(
            scanline_position(&plate, &unit(2, 40.0, 40.0, false)),
            Some((60.0, 40.0, Orientation::Original))
        );
    }

    #[test]
    fn scanline_rounds_fractional_edges_up() {
        let mut plate = Plate::new(0, 100.0, 10.0);
        plate.place(&unit(0, 10.5, 10.0, false), 0.0, 0.0, Orientation::Original);
        assert_eq!(
            scanline_position(&plate, &unit(1, 10.0, 10.0, false)),
            Some((11.0, 0.0, Orientation::Original))
        );
    }

    #[test]
    fn scanline_rotates_only_when_the_original_orientation_fails() {
        let mut plate = Plate::new(0, 100.0, 50.0);
        plate.place(&unit(0, 80.0, 50.0, false), 0.0, 0.0, Orientation::Original);
        //20x50 strip left: 50x20 only fits rotated
        assert_eq!(
            scanline_position(&plate, &unit(1, 50.0, 20.0, true)),
            Some((80.0, 0.0, Orientation::Rotated))
        );
        assert_eq!(scanline_position(&plate, &unit(2, 50.0, 20.0, false)), None);
    }

    #[test]
    fn best_fit_prefers_the_tightest_free_rect() {
        let mut plate = Plate::new(0, 100.0, 100.0);
        plate.place(&unit(0, 70.0, 100.0, false), 0.0, 0.0, Orientation::Original);
        let mut other = Plate::new(1, 100.0, 100.0);
        other.place(&unit(1, 100.0, 75.0, false), 0.0, 0.0, Orientation::Original);

        let insertion = best_free_rect_fit(&[plate, other], &unit(2, 20.0, 20.0, false));
        //100x25 on the second plate leaves 2100, the 30x100 strip on the first leaves 2600
        assert_eq!(
            insertion,
            Some(PlateInsertion {
                plate_idx: 1,
                x: 0.0,
                y: 75.0,
                orientation: Orientation::Original
            })
        );
    }

    #[test]
    fn best_fit_keeps_the_first_of_equal_scores() {
        let plates = [Plate::new(0, 100.0, 100.0), Plate::new(1, 100.0, 100.0)];
        let insertion = best_free_rect_fit(&plates, &unit(0, 10.0, 10.0, true)).unwrap();
        assert_eq!(insertion.plate_idx, 0);
        assert_eq!(insertion.orientation, Orientation::Original);
    }
}

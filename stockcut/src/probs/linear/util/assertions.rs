use float_cmp::approx_eq;
use itertools::Itertools;

use crate::probs::linear::entities::{Bar, LinearInstance, LinearItem, LinearSolution};

pub fn instance_item_ids_correct(items: &[LinearItem]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

/// Used and remaining length add up to the capacity, the used length is the sum of the cuts,
/// and cuts are laid out back to back without overlap.
pub fn bar_is_consistent(bar: &Bar) -> bool {
    let cut_sum = bar.cuts.iter().map(|c| c.length).sum::<f64>();
    let contiguous = bar
        .cuts
        .iter()
        .tuple_windows()
        .all(|(a, b)| approx_eq!(f64, a.position + a.length, b.position, ulps = 8));

    approx_eq!(f64, bar.used_length + bar.remaining_length, bar.capacity, ulps = 8)
        && approx_eq!(f64, bar.used_length, cut_sum, ulps = 8)
        && bar.cuts.first().is_none_or(|c| c.position == 0.0)
        && contiguous
        && !bar.is_empty()
}

/// Every demanded unit is either placed exactly once or reported as unplaced.
pub fn solution_conserves_units(instance: &LinearInstance, solution: &LinearSolution) -> bool {
    let placed = solution
        .bars
        .iter()
        .flat_map(|bar| bar.cuts.iter().map(|c| c.unit))
        .chain(solution.unplaced.iter().map(|u| u.id))
        .collect_vec();

    let unique = placed.iter().unique().count() == placed.len();
    let expected = instance.units().into_iter().map(|u| u.id).sorted().collect_vec();

    unique && placed.into_iter().sorted().collect_vec() == expected
}

pub fn solution_is_consistent(instance: &LinearInstance, solution: &LinearSolution) -> bool {
    solution.bars.iter().all(bar_is_consistent)
        && solution
            .bars
            .iter()
            .all(|bar| bar.capacity == instance.material_length)
        && solution_conserves_units(instance, solution)
}

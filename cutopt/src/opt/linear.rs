use std::cmp::Reverse;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use stockcut::probs::linear::entities::{Bar, FitHeuristic, LinearInstance, LinearSolution};
use stockcut::probs::linear::util::assertions;
use thousands::Separable;

/// Greedy optimizer for linear stock.
/// Units are placed longest first, each on the open bar chosen by the [`FitHeuristic`].
/// A new bar is only opened for a unit that is known to fit on it.
pub struct LinearOptimizer {
    pub instance: LinearInstance,
    pub heuristic: FitHeuristic,
}

impl LinearOptimizer {
    pub fn new(instance: LinearInstance, heuristic: FitHeuristic) -> Self {
        Self {
            instance,
            heuristic,
        }
    }

    pub fn solve(&self) -> LinearSolution {
        let start = Instant::now();
        let material_length = self.instance.material_length;

        //stable: equal lengths keep their input order
        let units = self
            .instance
            .units()
            .into_iter()
            .sorted_by(|a, b| b.length.total_cmp(&a.length))
            .collect_vec();
        let n_units = units.len();

        let mut bars: Vec<Bar> = vec![];
        let mut unplaced = vec![];

        for unit in units {
            if !self.instance.fits_stock(unit.length) {
                warn!(
                    "[LINEAR] {} ({}) exceeds the material length of {}, not placed",
                    self.instance.unit_label(unit.id),
                    unit.length,
                    material_length
                );
                unplaced.push(unit);
                continue;
            }

            let bar_idx = match select_bar(&bars, unit.length, self.heuristic) {
                Some(idx) => idx,
                None => {
                    bars.push(Bar::new(bars.len(), material_length));
                    bars.len() - 1
                }
            };
            let bar = &mut bars[bar_idx];
            let position = bar.place(&unit);
            debug!(
                "[LINEAR] placed {} at {} on {} ({:.3}% used)",
                self.instance.unit_label(unit.id),
                position,
                bar.label(),
                bar.efficiency()
            );
        }

        let solution = LinearSolution {
            material_length,
            heuristic: self.heuristic,
            bars,
            unplaced,
            run_time: start.elapsed(),
        };

        debug_assert!(assertions::solution_is_consistent(&self.instance, &solution));

        info!(
            "[LINEAR] {} placed {}/{} units on {} bars in {:.3}ms",
            self.heuristic,
            solution.total_items().separate_with_commas(),
            n_units.separate_with_commas(),
            solution.total_bars(),
            solution.run_time_ms()
        );
        info!(
            "[LINEAR] overall efficiency {:.3}%, waste {}",
            solution.overall_efficiency(),
            solution.total_waste()
        );

        solution
    }
}

/// Index of the open bar on which a piece of `length` should be cut, if any can hold it.
/// Bars are scanned in creation order; ties are resolved in favour of the earliest bar.
pub fn select_bar(bars: &[Bar], length: f64, heuristic: FitHeuristic) -> Option<usize> {
    let mut candidates = bars.iter().filter(|bar| bar.fits(length));
    let selected = match heuristic {
        FitHeuristic::FirstFit => candidates.next(),
        FitHeuristic::BestFit => {
            candidates.min_by_key(|bar| OrderedFloat(bar.leftover_after(length)))
        }
        //min_by_key keeps the first of equal elements, max_by_key the last
        FitHeuristic::WorstFit => {
            candidates.min_by_key(|bar| Reverse(OrderedFloat(bar.remaining_length)))
        }
    };
    selected.map(|bar| bar.id)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use cutopt::config::CutConfig;
    use cutopt::io;
    use cutopt::opt::linear::LinearOptimizer;
    use cutopt::opt::plate::PlateOptimizer;
    use cutopt::pattern::ffca01::{RingParams, optimize_rings};
    use cutopt::{optimize_linear, optimize_plates, validate};
    use stockcut::CutError;
    use stockcut::probs::linear::entities::FitHeuristic;
    use stockcut::probs::linear::io::ext_repr::{ExtLinearInstance, ExtLinearItem};
    use stockcut::probs::plate::entities::PlacementStrategy;
    use stockcut::probs::plate::io::ext_repr::{ExtPlateInstance, ExtRectItem};
    use stockcut::probs::{linear, plate};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn bars(material_length: f64, items: &[(&str, f64, u64)]) -> ExtLinearInstance {
        ExtLinearInstance {
            material_length,
            kerf_width: 0.0,
            items: items
                .iter()
                .map(|&(id, length, quantity)| ExtLinearItem {
                    id: id.to_string(),
                    length,
                    quantity,
                })
                .collect(),
        }
    }

    fn plates(width: f64, height: f64, items: &[(&str, f64, f64, u64, bool)]) -> ExtPlateInstance {
        ExtPlateInstance {
            plate_width: width,
            plate_height: height,
            kerf_width: 0.0,
            items: items
                .iter()
                .map(|&(id, w, h, quantity, rotation)| ExtRectItem {
                    id: id.to_string(),
                    width: w,
                    height: h,
                    quantity,
                    rotation,
                })
                .collect(),
        }
    }

    #[test_case("../assets/bars.json", FitHeuristic::FirstFit; "bars first fit")]
    #[test_case("../assets/bars.json", FitHeuristic::BestFit; "bars best fit")]
    #[test_case("../assets/bars.json", FitHeuristic::WorstFit; "bars worst fit")]
    fn test_linear_instance(instance_path: &str, heuristic: FitHeuristic) {
        init_logger();
        let ext_instance: ExtLinearInstance = io::read_json(Path::new(instance_path)).unwrap();
        let instance = linear::io::import(&ext_instance).unwrap();
        validate::linear_instance(&instance, true).unwrap();

        let solution = LinearOptimizer::new(instance.clone(), heuristic).solve();
        assert!(linear::util::assertions::solution_is_consistent(&instance, &solution));
        assert_eq!(solution.total_items(), instance.total_item_qty());
        assert!(solution.unplaced.is_empty());

        let lower_bound = (solution.total_used_length() / instance.material_length).ceil() as usize;
        assert!(solution.total_bars() >= lower_bound);

        let json = serde_json::to_value(linear::io::export(&instance, &solution)).unwrap();
        assert_eq!(json["totalBars"], solution.total_bars());
        assert_eq!(json["algorithm"], heuristic.name());
        assert_eq!(json["bars"][0]["id"], "BAR-1");
    }

    #[test_case("../assets/plates.json", PlacementStrategy::Scanline; "plates scanline")]
    #[test_case("../assets/plates.json", PlacementStrategy::FreeRectBestFit; "plates free rect best fit")]
    fn test_plate_instance(instance_path: &str, strategy: PlacementStrategy) {
        init_logger();
        let ext_instance: ExtPlateInstance = io::read_json(Path::new(instance_path)).unwrap();
        let instance = plate::io::import(&ext_instance).unwrap();
        validate::plate_instance(&instance, true).unwrap();

        let solution = PlateOptimizer::new(instance.clone(), strategy).solve();
        assert!(plate::util::assertions::solution_is_consistent(&instance, &solution));
        assert_eq!(solution.total_items(), instance.total_item_qty());
        assert_eq!(solution.unplaced_qty(), 0);

        //the strips are taller than the plate
        assert!(
            solution
                .plates
                .iter()
                .flat_map(|p| p.placed.iter())
                .filter(|pr| instance.item(pr.unit.item_id).name == "Strip")
                .all(|pr| pr.is_rotated())
        );

        let json = serde_json::to_value(plate::io::export(&instance, &solution)).unwrap();
        assert_eq!(json["totalPlates"], solution.total_plates());
        assert_eq!(json["algorithm"], strategy.name());
        assert!(json["plates"][0]["freeRects"].is_array());
    }

    #[test]
    fn test_ring_asset() {
        init_logger();
        let params: RingParams = io::read_json(Path::new("../assets/rings.json")).unwrap();
        let config: CutConfig = io::read_json(Path::new("../assets/config.json")).unwrap();
        assert_eq!(config.plate_strategy, PlacementStrategy::FreeRectBestFit);

        let sol = optimize_rings(&params, config.ring_material_length, config.linear_heuristic).unwrap();
        assert_eq!(sol.custom_stats.total_cuts, 80);
        assert_eq!(sol.solution.total_items, 80);
        assert!(sol.solution.total_bars >= sol.estimate.estimated_bars);
        assert_eq!(sol.estimate.estimated_bars, 3);
    }

    #[test]
    fn first_fit_single_bar() {
        let sol = optimize_linear(
            &bars(6000.0, &[("A", 1000.0, 2), ("B", 1500.0, 1)]),
            FitHeuristic::FirstFit,
        )
        .unwrap();

        assert_eq!(sol.total_bars, 1);
        let bar = &sol.bars[0];
        assert_eq!(bar.used_length, 3500.0);
        assert_eq!(bar.remaining_length, 2500.0);
        assert!(approx_eq!(f64, bar.efficiency, 58.333_333_333_333_336, epsilon = 1e-9));

        //longest first, equal lengths in input order
        let placed = bar
            .cuts
            .iter()
            .map(|c| (c.instance_id.as_str(), c.position))
            .collect_vec();
        assert_eq!(placed, vec![("B-1", 0.0), ("A-1", 1500.0), ("A-2", 2500.0)]);
        assert_eq!(bar.cuts[1].item_id, "A");
    }

    #[test]
    fn oversized_bar_item_never_opens_a_bar() {
        let ext_instance = bars(6000.0, &[("X", 7000.0, 1)]);
        let instance = linear::io::import(&ext_instance).unwrap();

        assert!(matches!(
            validate::linear_instance(&instance, true),
            Err(CutError::UnplaceableItem { .. })
        ));

        let sol = optimize_linear(&ext_instance, FitHeuristic::FirstFit).unwrap();
        assert_eq!(sol.total_bars, 0);
        assert_eq!(sol.unplaced_items, 1);
        assert_eq!(sol.unplaced[0].instance_id, "X-1");
        assert_eq!(sol.overall_efficiency, 0.0);
    }

    #[test]
    fn oversized_bar_item_next_to_regular_ones() {
        let sol = optimize_linear(
            &bars(6000.0, &[("X", 7000.0, 1), ("A", 2000.0, 2)]),
            FitHeuristic::BestFit,
        )
        .unwrap();
        assert_eq!(sol.total_bars, 1);
        assert_eq!(sol.total_items, 2);
        assert_eq!(sol.unplaced_items, 1);
    }

    #[test_case(FitHeuristic::FirstFit, &[&["a-1", "c-1"], &["b-1"]]; "first fit")]
    #[test_case(FitHeuristic::BestFit, &[&["a-1", "c-1"], &["b-1"]]; "best fit")]
    #[test_case(FitHeuristic::WorstFit, &[&["a-1"], &["b-1", "c-1"]]; "worst fit")]
    fn heuristics_pick_different_bars(heuristic: FitHeuristic, expected: &[&[&str]]) {
        let sol = optimize_linear(
            &bars(10.0, &[("c", 3.0, 1), ("b", 5.0, 1), ("a", 6.0, 1)]),
            heuristic,
        )
        .unwrap();
        let layout = sol
            .bars
            .iter()
            .map(|b| b.cuts.iter().map(|c| c.instance_id.as_str()).collect_vec())
            .collect_vec();
        assert_eq!(layout, expected);
    }

    #[test]
    fn kerf_is_added_to_every_piece() {
        let mut ext_instance = bars(1000.0, &[("A", 495.0, 2), ("B", 10.0, 1)]);
        ext_instance.kerf_width = 5.0;
        let sol = optimize_linear(&ext_instance, FitHeuristic::FirstFit).unwrap();
        assert_eq!(sol.bars[0].used_length, 1000.0);
        assert_eq!(sol.bars[0].cuts[0].nominal_length, 495.0);
        assert_eq!(sol.bars[1].cuts[0].length, 15.0);

        let mut ext_instance = plates(
            600.0,
            400.0,
            &[("P", 500.0, 300.0, 1, false), ("Q", 300.0, 450.0, 1, true), ("R", 2000.0, 10.0, 1, true)],
        );
        ext_instance.kerf_width = 3.0;
        let sol = optimize_plates(&ext_instance, PlacementStrategy::FreeRectBestFit).unwrap();
        let pieces = sol.plates.iter().flat_map(|p| &p.items).collect_vec();
        let p = pieces.iter().find(|pr| pr.item_id == "P").unwrap();
        assert_eq!((p.width, p.height), (503.0, 303.0));
        assert_eq!((p.nominal_width, p.nominal_height), (500.0, 300.0));
        //nominal dimensions follow the rotation
        let q = pieces.iter().find(|pr| pr.item_id == "Q").unwrap();
        assert!(q.rotated);
        assert_eq!((q.width, q.height), (453.0, 303.0));
        assert_eq!((q.nominal_width, q.nominal_height), (450.0, 300.0));
        let r = &sol.unplaced[0];
        assert_eq!((r.width, r.height), (2003.0, 13.0));
        assert_eq!((r.nominal_width, r.nominal_height), (2000.0, 10.0));
    }

    #[test]
    fn best_fit_rarely_uses_more_bars_than_first_fit() {
        let mut rng = SmallRng::seed_from_u64(0);
        let n_instances = 200;

        let not_worse = (0..n_instances)
            .filter(|_| {
                let n_items = rng.random_range(10..40);
                let items = (0..n_items)
                    .map(|i| ExtLinearItem {
                        id: format!("I{i}"),
                        length: rng.random_range(5..=60) as f64,
                        quantity: rng.random_range(1..=3),
                    })
                    .collect_vec();
                let ext_instance = ExtLinearInstance {
                    material_length: 100.0,
                    kerf_width: 0.0,
                    items,
                };
                let ff = optimize_linear(&ext_instance, FitHeuristic::FirstFit).unwrap();
                let bf = optimize_linear(&ext_instance, FitHeuristic::BestFit).unwrap();
                bf.total_bars <= ff.total_bars
            })
            .count();

        assert!(not_worse * 10 >= n_instances * 9, "{not_worse}/{n_instances}");
    }

    #[test]
    fn single_piece_on_a_plate() {
        let sol = optimize_plates(
            &plates(2440.0, 1220.0, &[("P", 500.0, 300.0, 1, true)]),
            PlacementStrategy::Scanline,
        )
        .unwrap();
        assert_eq!(sol.total_plates, 1);
        let piece = &sol.plates[0].items[0];
        assert_eq!((piece.x, piece.y), (0.0, 0.0));
        assert!(!piece.rotated);
        assert_eq!(sol.total_used_area, 150_000.0);
        assert!(approx_eq!(f64, sol.plates[0].efficiency, 5.038_968_019_349_637, epsilon = 1e-9));
    }

    #[test_case(PlacementStrategy::Scanline; "scanline")]
    #[test_case(PlacementStrategy::FreeRectBestFit; "free rect best fit")]
    fn rotation_when_required(strategy: PlacementStrategy) {
        let sol = optimize_plates(&plates(400.0, 600.0, &[("P", 500.0, 300.0, 1, true)]), strategy).unwrap();
        let piece = &sol.plates[0].items[0];
        assert!(piece.rotated);
        assert_eq!((piece.width, piece.height), (300.0, 500.0));

        let sol = optimize_plates(&plates(400.0, 600.0, &[("P", 300.0, 500.0, 1, true)]), strategy).unwrap();
        assert!(!sol.plates[0].items[0].rotated);

        let sol = optimize_plates(&plates(400.0, 600.0, &[("P", 500.0, 300.0, 1, false)]), strategy).unwrap();
        assert_eq!(sol.total_plates, 0);
        assert_eq!(sol.unplaced_items, 1);
    }

    #[test_case(PlacementStrategy::Scanline; "scanline")]
    #[test_case(PlacementStrategy::FreeRectBestFit; "free rect best fit")]
    fn both_strategies_fill_the_corner(strategy: PlacementStrategy) {
        let sol = optimize_plates(
            &plates(
                100.0,
                100.0,
                &[
                    ("big", 60.0, 60.0, 1, false),
                    ("sq", 40.0, 40.0, 2, false),
                    ("low", 40.0, 30.0, 1, false),
                ],
            ),
            strategy,
        )
        .unwrap();
        assert_eq!(sol.total_plates, 1);
        let positions = sol.plates[0].items.iter().map(|pr| (pr.x, pr.y)).collect_vec();
        assert_eq!(positions, vec![(0.0, 0.0), (60.0, 0.0), (60.0, 40.0), (0.0, 60.0)]);
    }

    #[test]
    fn unplaceable_plate_piece_is_reported() {
        let ext_instance = plates(100.0, 100.0, &[("X", 150.0, 50.0, 2, true), ("A", 50.0, 50.0, 1, true)]);
        let instance = plate::io::import(&ext_instance).unwrap();
        assert!(matches!(
            validate::plate_instance(&instance, true),
            Err(CutError::UnplaceableItem { .. })
        ));

        for strategy in [PlacementStrategy::Scanline, PlacementStrategy::FreeRectBestFit] {
            let sol = optimize_plates(&ext_instance, strategy).unwrap();
            assert_eq!(sol.total_plates, 1);
            assert_eq!(sol.total_items, 1);
            assert_eq!(sol.unplaced_items, 2);
        }
    }

    #[test]
    fn plates_are_opened_only_when_needed() {
        let sol = optimize_plates(
            &plates(100.0, 100.0, &[("Q", 50.0, 50.0, 9, true)]),
            PlacementStrategy::FreeRectBestFit,
        )
        .unwrap();
        assert_eq!(sol.total_plates, 3);
        assert_eq!(sol.plates.iter().map(|p| p.items.len()).collect_vec(), vec![4, 4, 1]);
        assert_eq!(sol.plates[2].id, "PLATE-3");
        assert!(approx_eq!(f64, sol.overall_efficiency, 75.0, epsilon = 1e-9));
    }

    #[test_case(PlacementStrategy::Scanline; "scanline")]
    #[test_case(PlacementStrategy::FreeRectBestFit; "free rect best fit")]
    fn plate_runs_are_reproducible(strategy: PlacementStrategy) {
        let ext_instance: ExtPlateInstance = io::read_json(Path::new("../assets/plates.json")).unwrap();
        let a = optimize_plates(&ext_instance, strategy).unwrap();
        let b = optimize_plates(&ext_instance, strategy).unwrap();
        assert_eq!(a.total_plates, b.total_plates);
        assert_eq!(a.overall_efficiency.to_bits(), b.overall_efficiency.to_bits());
        for (pa, pb) in a.plates.iter().zip(b.plates.iter()) {
            assert_eq!(pa.efficiency.to_bits(), pb.efficiency.to_bits());
        }
    }

    #[test]
    fn linear_runs_are_reproducible() {
        let ext_instance: ExtLinearInstance = io::read_json(Path::new("../assets/bars.json")).unwrap();
        for heuristic in [FitHeuristic::FirstFit, FitHeuristic::BestFit, FitHeuristic::WorstFit] {
            let a = optimize_linear(&ext_instance, heuristic).unwrap();
            let b = optimize_linear(&ext_instance, heuristic).unwrap();
            assert_eq!(a.total_bars, b.total_bars);
            assert_eq!(a.overall_efficiency.to_bits(), b.overall_efficiency.to_bits());
        }
    }

    #[test]
    fn empty_and_invalid_input() {
        assert_eq!(
            optimize_linear(&bars(6000.0, &[("A", 0.0, 3), ("B", 100.0, 0)]), FitHeuristic::FirstFit).unwrap_err(),
            CutError::EmptyInput
        );
        assert!(matches!(
            optimize_linear(&bars(0.0, &[("A", 100.0, 1)]), FitHeuristic::FirstFit),
            Err(CutError::InvalidInput(_))
        ));
        let mut negative_kerf = bars(6000.0, &[("A", 100.0, 1)]);
        negative_kerf.kerf_width = -1.0;
        assert!(matches!(
            optimize_linear(&negative_kerf, FitHeuristic::FirstFit),
            Err(CutError::InvalidInput(_))
        ));
        assert_eq!(
            optimize_plates(&plates(100.0, 100.0, &[]), PlacementStrategy::Scanline).unwrap_err(),
            CutError::EmptyInput
        );
        assert!(matches!(
            optimize_plates(&plates(-5.0, 100.0, &[("A", 1.0, 1.0, 1, true)]), PlacementStrategy::Scanline),
            Err(CutError::InvalidInput(_))
        ));
    }

    #[test]
    fn ring_order() {
        init_logger();
        let params = RingParams {
            small_ring_a: 100.0,
            big_ring_a: 200.0,
            small_ring_b: 120.0,
            big_ring_b: 220.0,
            multiplier: 1,
            kerf_width: 2.0,
        };
        let sol = optimize_rings(&params, 6000.0, FitHeuristic::FirstFit).unwrap();

        assert_eq!(sol.solution.total_bars, 1);
        assert_eq!(sol.solution.total_used_length, 2592.0);
        assert_eq!(sol.custom_stats.total_cuts, 16);
        assert_eq!((sol.custom_stats.cuts_a, sol.custom_stats.cuts_b), (8, 8));
        assert_eq!(sol.custom_stats.cuts_per_pattern, 8.0);
        assert_eq!(sol.custom_stats.pattern_a.used_length, 1200.0);
        assert_eq!(sol.custom_stats.pattern_b.total_length, 1360.0);
        assert_eq!(sol.custom_stats.pattern_a.efficiency, 100.0);
        assert_eq!(sol.custom_stats.pattern_b.efficiency, 100.0);
        assert_eq!(sol.estimate.set_length, 2592.0);
        assert!(approx_eq!(f64, sol.estimate.estimated_efficiency, 43.2, epsilon = 1e-9));

        let json = serde_json::to_value(&sol).unwrap();
        assert_eq!(json["customStats"]["totalCuts"], 16);
        assert_eq!(json["generatedItems"][0]["id"], "A-Small");
        assert_eq!(json["generatedItems"][0]["length"], 102.0);
        assert_eq!(json["totalBars"], 1);
    }

    #[test]
    fn ring_order_with_rings_longer_than_the_bar() {
        let params = RingParams {
            small_ring_a: 100.0,
            big_ring_a: 7000.0,
            small_ring_b: 0.0,
            big_ring_b: 0.0,
            multiplier: 1,
            kerf_width: 0.0,
        };
        let sol = optimize_rings(&params, 6000.0, FitHeuristic::FirstFit).unwrap();
        assert_eq!(sol.solution.unplaced_items, 4);
        assert_eq!(sol.custom_stats.pattern_a.efficiency, 400.0 / 28_400.0 * 100.0);
    }

    #[test]
    fn invalid_ring_order() {
        let params = RingParams {
            small_ring_a: 0.0,
            big_ring_a: 200.0,
            small_ring_b: 0.0,
            big_ring_b: 0.0,
            multiplier: 1,
            kerf_width: 0.0,
        };
        assert!(matches!(
            optimize_rings(&params, 6000.0, FitHeuristic::FirstFit),
            Err(CutError::InvalidInput(_))
        ));
    }
}

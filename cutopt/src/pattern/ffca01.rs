//! FF-CA-01: paired small and big ring cuts in two pattern variants, A and B.
//!
//! One set consists of 4 units of every defined ring. The rings are expanded into linear
//! items which are then cut by the [`LinearOptimizer`].

use std::fmt::{Display, Formatter};
use std::time::Instant;

use itertools::Itertools;
use log::info;
use serde::{Deserialize, Serialize};
use stockcut::probs::linear;
use stockcut::probs::linear::entities::{FitHeuristic, LinearInstance, LinearSolution};
use stockcut::probs::linear::io::ext_repr::{ExtLinearInstance, ExtLinearItem, ExtLinearSolution};
use stockcut::{CutError, Result};

use crate::opt::linear::LinearOptimizer;

/// Units of every ring in a single set
pub const UNITS_PER_SET: u64 = 4;

/// Parameters of an FF-CA-01 order. A ring length of 0 leaves that ring out.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RingParams {
    #[serde(default)]
    pub small_ring_a: f64,
    #[serde(default)]
    pub big_ring_a: f64,
    #[serde(default)]
    pub small_ring_b: f64,
    #[serde(default)]
    pub big_ring_b: f64,
    /// Number of sets
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
    #[serde(default)]
    pub kerf_width: f64,
}

fn default_multiplier() -> u32 {
    1
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pattern {
    A,
    B,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RingSize {
    SmallRing,
    BigRing,
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::A => f.write_str("A"),
            Pattern::B => f.write_str("B"),
        }
    }
}

/// One ring of the order, turned into a linear item.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RingCut {
    pub pattern: Pattern,
    pub ring: RingSize,
    /// Length of the finished ring
    pub nominal_length: f64,
    /// The linear item, its length including the kerf
    #[serde(flatten)]
    pub item: ExtLinearItem,
}

impl RingParams {
    fn rings(&self) -> [(Pattern, RingSize, &'static str, f64); 4] {
        [
            (Pattern::A, RingSize::SmallRing, "A-Small", self.small_ring_a),
            (Pattern::A, RingSize::BigRing, "A-Big", self.big_ring_a),
            (Pattern::B, RingSize::SmallRing, "B-Small", self.small_ring_b),
            (Pattern::B, RingSize::BigRing, "B-Big", self.big_ring_b),
        ]
    }

    /// Checks the order before anything is generated.
    /// All violated rules are reported together in a single [`CutError::InvalidInput`].
    pub fn validate(&self) -> Result<()> {
        let mut errors = vec![];
        let complete = |small: f64, big: f64| small > 0.0 && big > 0.0;

        if !(complete(self.small_ring_a, self.big_ring_a)
            || complete(self.small_ring_b, self.big_ring_b))
        {
            errors.push("at least one pattern (A or B) must have both ring dimensions".to_string());
        }
        if self.rings().iter().any(|(.., len)| !len.is_finite() || *len < 0.0) {
            errors.push("ring dimensions cannot be negative".to_string());
        }
        for (pattern, small, big) in [
            (Pattern::A, self.small_ring_a, self.big_ring_a),
            (Pattern::B, self.small_ring_b, self.big_ring_b),
        ] {
            if (small > 0.0) != (big > 0.0) {
                errors.push(format!(
                    "pattern {pattern} requires both small and big ring dimensions"
                ));
            }
            if complete(small, big) && small >= big {
                errors.push(format!(
                    "in pattern {pattern}: small ring must be smaller than big ring"
                ));
            }
        }
        if self.multiplier < 1 {
            errors.push("multiplier must be at least 1".to_string());
        }
        if !(self.kerf_width.is_finite() && self.kerf_width >= 0.0) {
            errors.push("kerf width cannot be negative".to_string());
        }

        match errors.is_empty() {
            true => Ok(()),
            false => Err(CutError::InvalidInput(errors.join("; "))),
        }
    }

    /// One linear item per defined ring, in the order A-Small, A-Big, B-Small, B-Big.
    /// Each has a length of the ring plus the kerf and a quantity of 4 per set.
    pub fn generate(&self) -> Vec<RingCut> {
        let quantity = UNITS_PER_SET * u64::from(self.multiplier);
        self.rings()
            .into_iter()
            .filter(|&(.., len)| len > 0.0)
            .map(|(pattern, ring, id, len)| RingCut {
                pattern,
                ring,
                nominal_length: len,
                item: ExtLinearItem {
                    id: id.to_string(),
                    length: len + self.kerf_width,
                    quantity,
                },
            })
            .filter(|rc| rc.item.quantity > 0)
            .collect()
    }

    /// Length of material consumed by a single set, kerf included.
    pub fn set_length(&self) -> f64 {
        self.rings()
            .iter()
            .filter(|(.., len)| *len > 0.0)
            .map(|(.., len)| UNITS_PER_SET as f64 * (len + self.kerf_width))
            .sum()
    }

    /// Lower bound on the number of bars, ignoring how the rings are distributed over them.
    pub fn estimate_bars(&self, material_length: f64) -> BarEstimate {
        let set_length = self.set_length();
        let total_length = set_length * f64::from(self.multiplier);
        let estimated_bars = (total_length / material_length).ceil() as usize;
        let estimated_efficiency = match estimated_bars {
            0 => 0.0,
            n => total_length / (n as f64 * material_length) * 100.0,
        };
        BarEstimate {
            set_length,
            total_length,
            estimated_bars,
            estimated_efficiency,
        }
    }

    /// The linear instance cutting every generated ring from bars of `material_length`.
    /// Items carry the nominal ring lengths; the kerf is added again on import.
    pub fn instance(&self, material_length: f64) -> ExtLinearInstance {
        ExtLinearInstance {
            material_length,
            kerf_width: self.kerf_width,
            items: self
                .generate()
                .into_iter()
                .map(|rc| ExtLinearItem {
                    length: rc.nominal_length,
                    ..rc.item
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarEstimate {
    pub set_length: f64,
    pub total_length: f64,
    pub estimated_bars: usize,
    pub estimated_efficiency: f64,
}

/// Material requested and cut for one pattern, in nominal lengths.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatternStats {
    pub total_length: f64,
    pub used_length: f64,
    /// Percentage of the requested length that was cut
    pub efficiency: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RingStats {
    /// Number of rings requested
    pub total_cuts: u64,
    pub cuts_a: u64,
    pub cuts_b: u64,
    pub cuts_per_pattern: f64,
    pub pattern_a: PatternStats,
    pub pattern_b: PatternStats,
}

/// Outcome of an FF-CA-01 run: the linear solution enriched with the ring statistics.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RingSolution {
    pub params: RingParams,
    pub material_length: f64,
    pub generated_items: Vec<RingCut>,
    pub estimate: BarEstimate,
    pub custom_stats: RingStats,
    #[serde(flatten)]
    pub solution: ExtLinearSolution,
}

/// Validates the order, generates the rings and cuts them from bars of `material_length`.
pub fn optimize_rings(
    params: &RingParams,
    material_length: f64,
    heuristic: FitHeuristic,
) -> Result<RingSolution> {
    let start = Instant::now();
    params.validate()?;

    let generated_items = params.generate();
    if generated_items.is_empty() {
        return Err(CutError::EmptyInput);
    }

    let ext_instance = params.instance(material_length);
    let instance = linear::io::import(&ext_instance)?;
    let solution = LinearOptimizer::new(instance.clone(), heuristic).solve();
    let custom_stats = ring_stats(&generated_items, &instance, &solution);

    let mut ext_solution = linear::io::export(&instance, &solution);
    ext_solution.execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(
        "[RINGS] {} rings cut from {} bars, pattern A {:.1}%, pattern B {:.1}%",
        custom_stats.total_cuts,
        ext_solution.total_bars,
        custom_stats.pattern_a.efficiency,
        custom_stats.pattern_b.efficiency
    );

    Ok(RingSolution {
        params: *params,
        material_length,
        estimate: params.estimate_bars(material_length),
        generated_items,
        custom_stats,
        solution: ext_solution,
    })
}

/// Cut counts and per-pattern material statistics.
/// Placed units are grouped through their item index, which coincides with the index in `rings`.
pub fn ring_stats(rings: &[RingCut], instance: &LinearInstance, solution: &LinearSolution) -> RingStats {
    debug_assert!(rings.len() == instance.items.len());

    let cuts_of = |p: Pattern| {
        rings
            .iter()
            .filter(|rc| rc.pattern == p)
            .map(|rc| rc.item.quantity)
            .sum::<u64>()
    };
    let total_cuts = rings.iter().map(|rc| rc.item.quantity).sum::<u64>();

    let used_by_pattern = solution
        .bars
        .iter()
        .flat_map(|bar| bar.cuts.iter())
        .map(|cut| (rings[cut.unit.item_id].pattern, cut.nominal_length))
        .into_grouping_map()
        .sum();

    let stats_of = |p: Pattern| {
        let total_length = rings
            .iter()
            .filter(|rc| rc.pattern == p)
            .map(|rc| rc.nominal_length * rc.item.quantity as f64)
            .sum::<f64>();
        let used_length = used_by_pattern.get(&p).copied().unwrap_or(0.0);
        PatternStats {
            total_length,
            used_length,
            efficiency: match total_length > 0.0 {
                true => used_length / total_length * 100.0,
                false => 0.0,
            },
        }
    };

    RingStats {
        total_cuts,
        cuts_a: cuts_of(Pattern::A),
        cuts_b: cuts_of(Pattern::B),
        cuts_per_pattern: total_cuts as f64 / 2.0,
        pattern_a: stats_of(Pattern::A),
        pattern_b: stats_of(Pattern::B),
    }
}

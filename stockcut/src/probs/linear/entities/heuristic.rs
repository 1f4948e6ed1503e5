use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CutError;

/// Rule used to choose among the open bars that can still hold a unit.
/// Bars are always scanned in the order in which they were opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitHeuristic {
    /// The first bar with enough remaining length
    #[default]
    FirstFit,
    /// The bar that is left with the smallest leftover after the cut
    BestFit,
    /// The bar with the largest remaining length before the cut
    WorstFit,
}

impl FitHeuristic {
    pub fn name(&self) -> &'static str {
        match self {
            FitHeuristic::FirstFit => "first-fit",
            FitHeuristic::BestFit => "best-fit",
            FitHeuristic::WorstFit => "worst-fit",
        }
    }
}

impl Display for FitHeuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FitHeuristic {
    type Err = CutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first-fit" => Ok(FitHeuristic::FirstFit),
            "best-fit" => Ok(FitHeuristic::BestFit),
            "worst-fit" => Ok(FitHeuristic::WorstFit),
            other => Err(CutError::InvalidInput(format!(
                "unknown linear heuristic: {other}"
            ))),
        }
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CutError;

/// The two ways of choosing a position for a unit on a plate.
///
/// Three names are accepted on the outside: `simple` selects the scanline, while `guillotine`
/// and `maxrects` both select the free-rectangle best fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlacementStrategy {
    /// Row-major scan of integer positions; the first collision free one is taken
    #[default]
    #[serde(rename = "simple", alias = "SIMPLE")]
    Scanline,
    /// The free rectangle (over all open plates) with the least leftover area
    #[serde(
        rename = "guillotine",
        alias = "GUILLOTINE",
        alias = "maxrects",
        alias = "MAXRECTS"
    )]
    FreeRectBestFit,
}

impl PlacementStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            PlacementStrategy::Scanline => "simple",
            PlacementStrategy::FreeRectBestFit => "guillotine",
        }
    }
}

impl Display for PlacementStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlacementStrategy {
    type Err = CutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(PlacementStrategy::Scanline),
            "guillotine" | "maxrects" => Ok(PlacementStrategy::FreeRectBestFit),
            other => Err(CutError::InvalidInput(format!(
                "unknown plate heuristic: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_names_map_onto_two_strategies() {
        assert_eq!("simple".parse::<PlacementStrategy>(), Ok(PlacementStrategy::Scanline));
        assert_eq!("GUILLOTINE".parse::<PlacementStrategy>(), Ok(PlacementStrategy::FreeRectBestFit));
        assert_eq!("maxrects".parse::<PlacementStrategy>(), Ok(PlacementStrategy::FreeRectBestFit));
        assert!("skyline".parse::<PlacementStrategy>().is_err());
    }
}

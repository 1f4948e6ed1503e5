use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Possible relations between two geometric entities A and B.
/// A is `GeoRelation` to B
pub enum GeoRelation {
    /// The interiors of A and B intersect and neither A ⊆ B nor B ⊆ A
    Intersecting,
    /// A ⊆ B
    Enclosed,
    /// B ⊆ A
    Surrounding,
    /// The interiors of A and B do not intersect (touching edges included)
    Disjoint,
}

/// Orientation in which a rectangular unit is cut from a plate.
/// Rotation is a quarter turn: width and height are swapped exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Original,
    Rotated,
}

impl Orientation {
    /// The orientations to try, in order of preference.
    pub fn allowed(allow_rotation: bool) -> &'static [Orientation] {
        match allow_rotation {
            true => &[Orientation::Original, Orientation::Rotated],
            false => &[Orientation::Original],
        }
    }

    pub fn is_rotated(&self) -> bool {
        matches!(self, Orientation::Rotated)
    }

    /// Applies the orientation to a `(width, height)` pair.
    pub fn apply(&self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Orientation::Original => (width, height),
            Orientation::Rotated => (height, width),
        }
    }
}

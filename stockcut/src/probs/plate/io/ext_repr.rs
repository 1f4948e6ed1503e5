use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::probs::plate::entities::PlacementStrategy;

/// External representation of a [`RectItem`](crate::probs::plate::entities::RectItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtRectItem {
    pub id: String,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u64,
    /// Whether the piece may be cut with width and height swapped
    #[serde(default = "default_rotation")]
    pub rotation: bool,
}

/// External representation of a [`PlateInstance`](crate::probs::plate::entities::PlateInstance).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtPlateInstance {
    pub plate_width: f64,
    pub plate_height: f64,
    /// Added to both the width and the height of every piece
    #[serde(default)]
    pub kerf_width: f64,
    pub items: Vec<ExtRectItem>,
}

/// External representation of a [`PlateSolution`](crate::probs::plate::entities::PlateSolution).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtPlateSolution {
    pub plates: Vec<ExtPlate>,
    pub total_plates: usize,
    pub total_items: usize,
    pub total_used_area: f64,
    pub total_waste_area: f64,
    pub overall_efficiency: f64,
    /// Number of pieces exceeding the plate in every allowed orientation
    pub unplaced_items: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unplaced: Vec<ExtUnplacedRect>,
    pub execution_time_ms: f64,
    pub algorithm: PlacementStrategy,
}

/// External representation of a [`Plate`](crate::probs::plate::entities::Plate).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtPlate {
    /// e.g. `"PLATE-1"`
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub used_area: f64,
    pub waste_area: f64,
    pub efficiency: f64,
    pub waste_percentage: f64,
    pub items: Vec<ExtPlacedRect>,
    /// Remaining free rectangles
    pub free_rects: Vec<ExtRect>,
}

/// External representation of a [`PlacedRect`](crate::probs::plate::entities::PlacedRect).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtPlacedRect {
    pub instance_id: String,
    pub item_id: String,
    pub x: f64,
    pub y: f64,
    /// Width after rotation
    pub width: f64,
    /// Height after rotation
    pub height: f64,
    /// Width after rotation, kerf excluded
    pub nominal_width: f64,
    /// Height after rotation, kerf excluded
    pub nominal_height: f64,
    pub rotated: bool,
}

/// Axis-aligned rectangle with its bottom left corner at `(x, y)`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for ExtRect {
    fn from(r: Rect) -> Self {
        ExtRect {
            x: r.x_min,
            y: r.y_min,
            width: r.width(),
            height: r.height(),
        }
    }
}

/// A piece which could not be placed on any plate.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtUnplacedRect {
    pub instance_id: String,
    pub item_id: String,
    pub width: f64,
    pub height: f64,
    pub nominal_width: f64,
    pub nominal_height: f64,
}

fn default_quantity() -> u64 {
    1
}

fn default_rotation() -> bool {
    true
}

use crate::entities::UnitId;
use crate::geometry::{FreeRectSet, Orientation, Rect};
use crate::probs::plate::entities::RectUnit;

/// A unit placed on a [`Plate`]. The footprint holds the post-rotation dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedRect {
    pub unit: UnitId,
    pub footprint: Rect,
    pub orientation: Orientation,
}

impl PlacedRect {
    pub fn x(&self) -> f64 {
        self.footprint.x_min
    }

    pub fn y(&self) -> f64 {
        self.footprint.y_min
    }

    pub fn width(&self) -> f64 {
        self.footprint.width()
    }

    pub fn height(&self) -> f64 {
        self.footprint.height()
    }

    pub fn is_rotated(&self) -> bool {
        self.orientation.is_rotated()
    }
}

/// One rectangular stock sheet, the units placed on it and its remaining free space.
#[derive(Clone, Debug)]
pub struct Plate {
    /// 0-based index in the order in which plates were opened
    pub id: usize,
    pub width: f64,
    pub height: f64,
    pub placed: Vec<PlacedRect>,
    pub used_area: f64,
    free_rects: FreeRectSet,
}

impl Plate {
    pub fn new(id: usize, width: f64, height: f64) -> Self {
        Self {
            id,
            width,
            height,
            placed: vec![],
            used_area: 0.0,
            free_rects: FreeRectSet::new(Rect::from_origin(0.0, 0.0, width, height)),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin(0.0, 0.0, self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn free_rects(&self) -> &FreeRectSet {
        &self.free_rects
    }

    /// The first placed unit whose footprint overlaps `candidate`, if any.
    pub fn first_collision(&self, candidate: &Rect) -> Option<&PlacedRect> {
        self.placed
            .iter()
            .find(|pr| pr.footprint.overlaps(candidate))
    }

    /// True if a `width` x `height` rectangle with its bottom left corner at `(x, y)` lies within
    /// the plate and does not overlap any placed unit. Touching edges are allowed.
    pub fn can_place(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        if x < 0.0 || y < 0.0 {
            return false;
        }
        let candidate = Rect::from_origin(x, y, width, height);
        self.bounds().contains(&candidate) && self.first_collision(&candidate).is_none()
    }

    /// Places the unit in the given orientation with its bottom left corner at `(x, y)`
    /// and carves its footprint out of the free rectangles.
    pub fn place(&mut self, unit: &RectUnit, x: f64, y: f64, orientation: Orientation) -> PlacedRect {
        let (width, height) = unit.dims(orientation);
        debug_assert!(
            self.can_place(x, y, width, height),
            "{:?} does not fit at ({x}, {y}) on plate {}",
            unit.id,
            self.id
        );

        let placed = PlacedRect {
            unit: unit.id,
            footprint: Rect::from_origin(x, y, width, height),
            orientation,
        };
        self.placed.push(placed);
        self.used_area += width * height;
        self.free_rects.occupy(placed.footprint);

        placed
    }

    /// True if some free rectangle can hold a `width` x `height` rectangle.
    pub fn has_room_for(&self, width: f64, height: f64) -> bool {
        self.free_rects.iter().any(|fr| fr.can_hold(width, height))
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn waste_area(&self) -> f64 {
        self.area() - self.used_area
    }

    /// Percentage of the plate covered by placed units.
    pub fn efficiency(&self) -> f64 {
        self.used_area / self.area() * 100.0
    }

    pub fn waste_percentage(&self) -> f64 {
        self.waste_area() / self.area() * 100.0
    }

    /// Display label, e.g. `"PLATE-1"` for the first opened plate.
    pub fn label(&self) -> String {
        format!("PLATE-{}", self.id + 1)
    }
}

use crate::geometry::GeoRelation;
use crate::util::FPA;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Rectangle with its bottom left corner at `(x, y)` and the given dimensions.
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "{width}x{height}");
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True if a `width` x `height` rectangle fits inside `self` without rotation.
    pub fn can_hold(&self, width: f64, height: f64) -> bool {
        FPA(width) <= FPA(self.width()) && FPA(height) <= FPA(self.height())
    }

    /// True if the interiors of `self` and `other` intersect.
    /// Rectangles which only share (part of) an edge do not overlap.
    #[inline(always)]
    pub fn overlaps(&self, other: &Rect) -> bool {
        FPA(f64::max(self.x_min, other.x_min)) < FPA(f64::min(self.x_max, other.x_max))
            && FPA(f64::max(self.y_min, other.y_min)) < FPA(f64::min(self.y_max, other.y_max))
    }

    /// True if `other` lies entirely within `self` (boundaries included).
    #[inline(always)]
    pub fn contains(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    pub fn relation_to(&self, other: &Rect) -> GeoRelation {
        if !self.overlaps(other) {
            return GeoRelation::Disjoint;
        }
        if self.contains(other) {
            return GeoRelation::Surrounding;
        }
        if other.contains(self) {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// Axis-aligned subtraction of `hole` from `self`.
    /// Yields the (up to four, possibly overlapping) maximal rectangles left of, right of,
    /// below and above `hole`, each clipped to `self`.
    pub fn split_around(&self, hole: &Rect) -> impl Iterator<Item = Rect> {
        let left = (FPA(hole.x_min) > FPA(self.x_min)).then(|| Rect {
            x_max: hole.x_min,
            ..*self
        });
        let right = (FPA(hole.x_max) < FPA(self.x_max)).then(|| Rect {
            x_min: hole.x_max,
            ..*self
        });
        let below = (FPA(hole.y_min) > FPA(self.y_min)).then(|| Rect {
            y_max: hole.y_min,
            ..*self
        });
        let above = (FPA(hole.y_max) < FPA(self.y_max)).then(|| Rect {
            y_min: hole.y_max,
            ..*self
        });
        [left, right, below, above].into_iter().flatten()
    }
}

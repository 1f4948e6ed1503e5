use itertools::Itertools;

use crate::geometry::Rect;

/// No two rectangles overlap. Touching edges are allowed.
pub fn rects_are_disjoint(rects: &[Rect]) -> bool {
    rects.iter().tuple_combinations().all(|(a, b)| !a.overlaps(b))
}

/// No rectangle lies entirely within another one of the set.
pub fn no_rect_enclosed(rects: &[Rect]) -> bool {
    rects
        .iter()
        .enumerate()
        .all(|(i, a)| rects.iter().enumerate().all(|(j, b)| i == j || !a.contains(b)))
}

/// None of the `free` rectangles overlaps any of the `occupied` ones.
pub fn rects_are_vacant<'a>(free: &[Rect], occupied: impl IntoIterator<Item = &'a Rect>) -> bool {
    occupied
        .into_iter()
        .all(|o| free.iter().all(|fr| !fr.overlaps(o)))
}

use itertools::Itertools;
use log::trace;

use crate::geometry::{GeoRelation, Rect};
use crate::util::assertions;

/// The unoccupied regions of a plate, kept as a set of maximal axis-aligned rectangles.
///
/// Starts as a single rectangle covering the whole plate. Every occupied region splits the
/// free rectangles it overlaps into their residual strips, after which any rectangle enclosed
/// by another one is discarded. The set is rebuilt on every update rather than edited in place.
///
/// Free rectangles never overlap an occupied region, and no free rectangle is enclosed by
/// another. They may overlap each other: every maximal empty region is represented.
#[derive(Clone, Debug)]
pub struct FreeRectSet {
    rects: Vec<Rect>,
}

impl FreeRectSet {
    pub fn new(bounds: Rect) -> Self {
        Self {
            rects: vec![bounds],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.rects.iter()
    }

    pub fn as_slice(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Marks `occupied` as no longer available.
    pub fn occupy(&mut self, occupied: Rect) {
        let split = self
            .rects
            .iter()
            .flat_map(|fr| match fr.relation_to(&occupied) {
                GeoRelation::Disjoint => vec![*fr],
                GeoRelation::Enclosed => vec![],
                GeoRelation::Surrounding | GeoRelation::Intersecting => {
                    fr.split_around(&occupied).collect_vec()
                }
            })
            .collect_vec();

        let n_split = split.len();
        self.rects = prune_enclosed(split);
        debug_assert!(assertions::no_rect_enclosed(&self.rects));
        debug_assert!(assertions::rects_are_vacant(&self.rects, [&occupied]));

        trace!(
            "occupied {:?}, {} free rects after split, {} after pruning",
            occupied,
            n_split,
            self.rects.len()
        );
    }
}

/// Drops every rectangle enclosed by another one. Of identical rectangles, the first is kept.
/// The relative order of the survivors is preserved.
fn prune_enclosed(rects: Vec<Rect>) -> Vec<Rect> {
    rects
        .iter()
        .enumerate()
        .filter(|&(i, r)| {
            !rects
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && other.contains(r) && (j < i || !r.contains(other)))
        })
        .map(|(_, r)| *r)
        .collect()
}

use log::debug;

use crate::entities::UnitId;
use crate::geometry::Orientation;
use crate::probs::plate::util::assertions::instance_item_ids_correct;
use crate::util::FPA;
use crate::{CutError, Result};

/// A rectangular piece to be cut from a plate, demanded `demand` times.
#[derive(Clone, Debug, PartialEq)]
pub struct RectItem {
    /// Index of the item within its [`PlateInstance`]
    pub id: usize,
    pub name: String,
    /// Width consumed on the plate, kerf included
    pub width: f64,
    /// Height consumed on the plate, kerf included
    pub height: f64,
    pub nominal_width: f64,
    pub nominal_height: f64,
    pub demand: usize,
    /// Whether the piece may be cut with width and height swapped
    pub allow_rotation: bool,
}

impl RectItem {
    /// Items with a non-positive dimension or a zero demand are skipped during expansion.
    pub fn is_valid(&self) -> bool {
        [self.width, self.height, self.nominal_width, self.nominal_height]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
            && self.demand > 0
    }
}

/// One physical piece, obtained by expanding a [`RectItem`] by its demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectUnit {
    pub id: UnitId,
    pub width: f64,
    pub height: f64,
    pub allow_rotation: bool,
}

impl RectUnit {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// `(width, height)` of the unit in the given orientation.
    pub fn dims(&self, orientation: Orientation) -> (f64, f64) {
        orientation.apply(self.width, self.height)
    }

    pub fn orientations(&self) -> &'static [Orientation] {
        Orientation::allowed(self.allow_rotation)
    }

    pub fn max_dim(&self) -> f64 {
        f64::max(self.width, self.height)
    }
}

/// Instance of the rectangular cutting stock problem: a set of items to be cut from plates of a single size.
#[derive(Clone, Debug)]
pub struct PlateInstance {
    pub items: Vec<RectItem>,
    pub plate_width: f64,
    pub plate_height: f64,
}

impl PlateInstance {
    pub fn new(items: Vec<RectItem>, plate_width: f64, plate_height: f64) -> Result<Self> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !(valid(plate_width) && valid(plate_height)) {
            return Err(CutError::InvalidInput(format!(
                "plate dimensions must be greater than 0, got {plate_width}x{plate_height}"
            )));
        }
        assert!(instance_item_ids_correct(&items));

        Ok(Self {
            items,
            plate_width,
            plate_height,
        })
    }

    pub fn item(&self, id: usize) -> &RectItem {
        &self.items[id]
    }

    pub fn valid_items(&self) -> impl Iterator<Item = &RectItem> {
        self.items.iter().filter(|item| item.is_valid())
    }

    pub fn total_item_qty(&self) -> usize {
        self.valid_items().map(|item| item.demand).sum()
    }

    /// The first orientation in which `unit` fits on an empty plate, if any.
    pub fn fitting_orientation(&self, unit: &RectUnit) -> Option<Orientation> {
        unit.orientations().iter().copied().find(|&o| {
            let (w, h) = unit.dims(o);
            FPA(w) <= FPA(self.plate_width) && FPA(h) <= FPA(self.plate_height)
        })
    }

    /// Expands every valid item into one [`RectUnit`] per demanded copy, in input order.
    pub fn units(&self) -> Vec<RectUnit> {
        self.items
            .iter()
            .filter(|item| {
                let valid = item.is_valid();
                if !valid {
                    debug!(
                        "skipping item {} ({}x{}, demand {})",
                        item.name, item.width, item.height, item.demand
                    );
                }
                valid
            })
            .flat_map(|item| {
                (1..=item.demand).map(|copy| RectUnit {
                    id: UnitId::new(item.id, copy),
                    width: item.width,
                    height: item.height,
                    allow_rotation: item.allow_rotation,
                })
            })
            .collect()
    }

    pub fn unit_label(&self, unit: UnitId) -> String {
        unit.label(&self.item(unit.item_id).name)
    }
}

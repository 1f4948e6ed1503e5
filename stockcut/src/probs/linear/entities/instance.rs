use log::debug;

use crate::entities::UnitId;
use crate::probs::linear::util::assertions::instance_item_ids_correct;
use crate::util::FPA;
use crate::{CutError, Result};

/// A piece to be cut from linear stock, demanded `demand` times.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearItem {
    /// Index of the item within its [`LinearInstance`]
    pub id: usize,
    /// Name given by the caller, used to label the expanded units
    pub name: String,
    /// Length consumed on the bar: the nominal length plus the kerf
    pub length: f64,
    /// Length of the finished piece
    pub nominal_length: f64,
    pub demand: usize,
}

impl LinearItem {
    /// Items with a non-positive length or a zero demand are skipped during expansion.
    pub fn is_valid(&self) -> bool {
        self.length.is_finite() && self.length > 0.0 && self.nominal_length > 0.0 && self.demand > 0
    }
}

/// One physical piece, obtained by expanding a [`LinearItem`] by its demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearUnit {
    pub id: UnitId,
    pub length: f64,
    pub nominal_length: f64,
}

/// Instance of the linear cutting stock problem: a set of items to be cut from bars of a single length.
#[derive(Clone, Debug)]
pub struct LinearInstance {
    /// The items and their demands, indexed by [`LinearItem::id`]
    pub items: Vec<LinearItem>,
    /// Length of every bar
    pub material_length: f64,
}

impl LinearInstance {
    pub fn new(items: Vec<LinearItem>, material_length: f64) -> Result<Self> {
        if !(material_length.is_finite() && material_length > 0.0) {
            return Err(CutError::InvalidInput(format!(
                "material length must be greater than 0, got {material_length}"
            )));
        }
        assert!(instance_item_ids_correct(&items));

        Ok(Self {
            items,
            material_length,
        })
    }

    pub fn item(&self, id: usize) -> &LinearItem {
        &self.items[id]
    }

    /// Items which take part in the packing.
    pub fn valid_items(&self) -> impl Iterator<Item = &LinearItem> {
        self.items.iter().filter(|item| item.is_valid())
    }

    /// Total number of units requested by the valid items.
    pub fn total_item_qty(&self) -> usize {
        self.valid_items().map(|item| item.demand).sum()
    }

    /// True if a piece of `length` fits on an empty bar.
    pub fn fits_stock(&self, length: f64) -> bool {
        FPA(length) <= FPA(self.material_length)
    }

    /// Expands every valid item into one [`LinearUnit`] per demanded copy, in input order.
    pub fn units(&self) -> Vec<LinearUnit> {
        self.items
            .iter()
            .filter(|item| {
                let valid = item.is_valid();
                if !valid {
                    debug!(
                        "skipping item {} (length {}, demand {})",
                        item.name, item.length, item.demand
                    );
                }
                valid
            })
            .flat_map(|item| {
                (1..=item.demand).map(|copy| LinearUnit {
                    id: UnitId::new(item.id, copy),
                    length: item.length,
                    nominal_length: item.nominal_length,
                })
            })
            .collect()
    }

    /// Display label of a unit, e.g. `"A-3"`.
    pub fn unit_label(&self, unit: UnitId) -> String {
        unit.label(&self.item(unit.item_id).name)
    }
}

use serde::{Deserialize, Serialize};

/// Identity of one physical unit after an item has been expanded by its quantity.
///
/// Carries the index of the originating item and the 1-based copy number explicitly,
/// so grouping units back to their item never requires parsing a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId {
    /// Index of the item within its instance
    pub item_id: usize,
    /// 1-based copy number within the item
    pub copy: usize,
}

impl UnitId {
    pub fn new(item_id: usize, copy: usize) -> Self {
        debug_assert!(copy >= 1, "copy numbers are 1-based");
        Self { item_id, copy }
    }

    /// Display label of the unit: `"{item_name}-{copy}"`.
    pub fn label(&self, item_name: &str) -> String {
        format!("{}-{}", item_name, self.copy)
    }
}

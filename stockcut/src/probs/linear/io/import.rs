use itertools::Itertools;

use crate::probs::linear::entities::{LinearInstance, LinearItem};
use crate::probs::linear::io::ext_repr::ExtLinearInstance;
use crate::{CutError, Result};

/// Imports an instance into the library.
/// The kerf is added to every piece; the nominal length is kept alongside.
pub fn import(ext_instance: &ExtLinearInstance) -> Result<LinearInstance> {
    let kerf = ext_instance.kerf_width;
    if !(kerf.is_finite() && kerf >= 0.0) {
        return Err(CutError::InvalidInput(format!(
            "kerf width cannot be negative, got {kerf}"
        )));
    }

    let items = ext_instance
        .items
        .iter()
        .enumerate()
        .map(|(id, ext_item)| LinearItem {
            id,
            name: ext_item.id.clone(),
            length: ext_item.length + kerf,
            nominal_length: ext_item.length,
            demand: ext_item.quantity as usize,
        })
        .collect_vec();

    LinearInstance::new(items, ext_instance.material_length)
}

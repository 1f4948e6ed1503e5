use itertools::Itertools;

use crate::probs::plate::entities::{PlateInstance, RectItem};
use crate::probs::plate::io::ext_repr::ExtPlateInstance;
use crate::{CutError, Result};

/// Imports an instance into the library.
/// The kerf is added to both dimensions of every piece; the nominal dimensions are kept alongside.
pub fn import(ext_instance: &ExtPlateInstance) -> Result<PlateInstance> {
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
        .map(|(id, ext_item)| RectItem {
            id,
            name: ext_item.id.clone(),
            width: ext_item.width + kerf,
            height: ext_item.height + kerf,
            nominal_width: ext_item.width,
            nominal_height: ext_item.height,
            demand: ext_item.quantity as usize,
            allow_rotation: ext_item.rotation,
        })
        .collect_vec();

    PlateInstance::new(items, ext_instance.plate_width, ext_instance.plate_height)
}

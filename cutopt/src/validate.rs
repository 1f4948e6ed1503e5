//! Checks performed by the caller before handing an instance to an optimizer.

use log::warn;
use stockcut::entities::UnitId;
use stockcut::probs::linear::entities::LinearInstance;
use stockcut::probs::plate::entities::{PlateInstance, RectUnit};
use stockcut::{CutError, Result};

/// Fails with [`CutError::EmptyInput`] if no item survives filtering.
/// With `strict`, any piece longer than the material fails with [`CutError::UnplaceableItem`].
pub fn linear_instance(instance: &LinearInstance, strict: bool) -> Result<()> {
    if instance.total_item_qty() == 0 {
        return Err(CutError::EmptyInput);
    }
    let oversized = instance
        .valid_items()
        .find(|item| !instance.fits_stock(item.length));

    match (oversized, strict) {
        (Some(item), true) => Err(CutError::UnplaceableItem {
            item: item.name.clone(),
            size: format!("{}", item.length),
            stock: format!("{}", instance.material_length),
        }),
        (Some(item), false) => {
            warn!(
                "[LINEAR] item {} ({}) exceeds the material length of {}",
                item.name, item.length, instance.material_length
            );
            Ok(())
        }
        (None, _) => Ok(()),
    }
}

/// Fails with [`CutError::EmptyInput`] if no item survives filtering.
/// With `strict`, any piece that fits in no allowed orientation fails with [`CutError::UnplaceableItem`].
pub fn plate_instance(instance: &PlateInstance, strict: bool) -> Result<()> {
    if instance.total_item_qty() == 0 {
        return Err(CutError::EmptyInput);
    }
    let oversized = instance.valid_items().find(|item| {
        let unit = RectUnit {
            id: UnitId::new(item.id, 1),
            width: item.width,
            height: item.height,
            allow_rotation: item.allow_rotation,
        };
        instance.fitting_orientation(&unit).is_none()
    });

    match (oversized, strict) {
        (Some(item), true) => Err(CutError::UnplaceableItem {
            item: item.name.clone(),
            size: format!("{}x{}", item.width, item.height),
            stock: format!("{}x{}", instance.plate_width, instance.plate_height),
        }),
        (Some(item), false) => {
            warn!(
                "[PLATE] item {} ({}x{}) does not fit on a {}x{} plate",
                item.name, item.width, item.height, instance.plate_width, instance.plate_height
            );
            Ok(())
        }
        (None, _) => Ok(()),
    }
}

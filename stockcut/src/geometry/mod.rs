mod free_rects;
mod geo_enums;
mod rect;

#[doc(inline)]
pub use free_rects::FreeRectSet;

#[doc(inline)]
pub use geo_enums::GeoRelation;

#[doc(inline)]
pub use geo_enums::Orientation;

#[doc(inline)]
pub use rect::Rect;

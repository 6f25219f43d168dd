//! Shape PNG icons into the Sailfish OS style: a circle whose corners can
//! individually be kept square, optionally filled with a background color
//! where the icon is transparent.

pub mod color;
pub mod mask;
pub mod shape;

pub use color::{BackgroundColor, ColorError};
pub use mask::{build_mask, rasterize_mask, CornerFlags};
pub use shape::{decode_png, encode_png, icon, shape, ShapeError};

//! Map projection machinery

pub mod math;
pub mod transverse_mercator;

pub use transverse_mercator::{Projected, TransverseMercator};

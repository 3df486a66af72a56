//! Freezer inventory entities.

pub mod model;

pub use model::{Freezer, IceBag};

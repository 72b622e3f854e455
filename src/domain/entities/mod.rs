pub mod property;

pub use property::{Coordinate, PropertyRecord, PropertyView};

pub mod entities;

pub use entities::{Coordinate, PropertyRecord, PropertyView};

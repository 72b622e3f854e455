pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use domain::entities::{Coordinate, PropertyRecord, PropertyView};
pub use state::AppState;

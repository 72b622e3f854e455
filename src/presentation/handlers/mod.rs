pub mod property_handler;

pub use property_handler::PropertyHandler;

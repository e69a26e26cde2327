pub mod constants;
mod element_data;
pub mod elements;

pub use elements::{ElementIdentifier, ElementRecord, lookup, records};

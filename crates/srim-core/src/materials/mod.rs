//! Physical inputs: elements, ions, materials and layered targets.

mod element;
mod ion;
mod layer;
mod material;

pub use element::Element;
pub use ion::Ion;
pub use layer::{Layer, Target};
pub use material::{
    ElementEntry, ElementFraction, ElementProperties, Material, MaterialBuilder, Phase,
    PropertyFields, parse_formula,
};

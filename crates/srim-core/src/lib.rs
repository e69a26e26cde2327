//! Target description and output parsing for SRIM/TRIM calculations.

pub mod common;
pub mod domain;
pub mod materials;
pub mod output;
pub mod settings;

pub use domain::{OutputKind, SrimError, SrimErrorCategory, SrimResult};
pub use materials::{Element, Ion, Layer, Material, Phase, Target};
pub use output::{CollisionLog, OutputReader, Results, SrResults};
pub use settings::{SrSettings, TrimCalculation, TrimSettings};

//! Readers for the files a TRIM or SR run leaves in its output directory.

pub mod collision;
pub mod parser;
pub mod results;
pub mod stopping;
pub mod table;
pub mod traits;
pub mod trim;

pub use collision::{CollisionLog, CollisionRecord};
pub use parser::{LayerComposition, OutputHeader, extract_target_composition};
pub use results::Results;
pub use stopping::SrResults;
pub use table::{DepthTable, TableError};
pub use traits::OutputReader;
pub use trim::{EnergyToRecoils, Ioniz, NoVacancy, Phonons, Range, Vacancy};

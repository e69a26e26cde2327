use super::traits::OutputReader;
use super::trim::{EnergyToRecoils, Ioniz, NoVacancy, Phonons, Range, Vacancy};
use crate::domain::{SrimErrorCategory, SrimResult};
use serde::Serialize;
use std::path::Path;

/// All distribution files of one TRIM run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Results {
    pub ioniz: Ioniz,
    pub vacancy: Vacancy,
    /// Absent for Kinchin-Pease calculations.
    pub novac: Option<NoVacancy>,
    pub etorecoils: EnergyToRecoils,
    pub phonons: Phonons,
    pub range: Range,
}

impl Results {
    pub fn from_dir(directory: impl AsRef<Path>) -> SrimResult<Self> {
        let directory = directory.as_ref();
        let results = Self {
            ioniz: Ioniz::from_dir(directory)?,
            vacancy: Vacancy::from_dir(directory)?,
            novac: optional_novac(directory)?,
            etorecoils: EnergyToRecoils::from_dir(directory)?,
            phonons: Phonons::from_dir(directory)?,
            range: Range::from_dir(directory)?,
        };
        tracing::info!(
            directory = %directory.display(),
            ion = results.ioniz.ion().symbol(),
            num_ions = results.ioniz.num_ions(),
            "loaded TRIM results"
        );
        Ok(results)
    }
}

fn optional_novac(directory: &Path) -> SrimResult<Option<NoVacancy>> {
    match NoVacancy::from_dir(directory) {
        Ok(novac) => Ok(Some(novac)),
        Err(error) if error.category() == SrimErrorCategory::NotApplicable => {
            tracing::info!(code = error.code(), "skipping NOVAC: {}", error.message());
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

pub mod errors;

pub use errors::{ParserResult, SrimError, SrimErrorCategory, SrimResult};

use std::fmt::{Display, Formatter};

/// Output files the engine leaves behind in its output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Ioniz,
    Vacancy,
    NoVacancy,
    EnergyToRecoils,
    Phonons,
    Range,
    Collision,
    StoppingPower,
    Lateral,
    Range3d,
    Backscattered,
    Transmitted,
    Sputtered,
    TrimOut,
}

impl OutputKind {
    pub const ALL: [OutputKind; 14] = [
        Self::Ioniz,
        Self::Vacancy,
        Self::NoVacancy,
        Self::EnergyToRecoils,
        Self::Phonons,
        Self::Range,
        Self::Collision,
        Self::StoppingPower,
        Self::Lateral,
        Self::Range3d,
        Self::Backscattered,
        Self::Transmitted,
        Self::Sputtered,
        Self::TrimOut,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ioniz => "IONIZ",
            Self::Vacancy => "VACANCY",
            Self::NoVacancy => "NOVAC",
            Self::EnergyToRecoils => "E2RECOIL",
            Self::Phonons => "PHONON",
            Self::Range => "RANGE",
            Self::Collision => "COLLISON",
            Self::StoppingPower => "SR_OUTPUT",
            Self::Lateral => "LATERAL",
            Self::Range3d => "RANGE_3D",
            Self::Backscattered => "BACKSCAT",
            Self::Transmitted => "TRANSMIT",
            Self::Sputtered => "SPUTTER",
            Self::TrimOut => "TRIMOUT",
        }
    }

    /// Case-sensitive file name written by the engine.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Ioniz => "IONIZ.txt",
            Self::Vacancy => "VACANCY.txt",
            Self::NoVacancy => "NOVAC.txt",
            Self::EnergyToRecoils => "E2RECOIL.txt",
            Self::Phonons => "PHONON.txt",
            Self::Range => "RANGE.txt",
            Self::Collision => "COLLISON.txt",
            Self::StoppingPower => "SR_OUTPUT.txt",
            Self::Lateral => "LATERAL.txt",
            Self::Range3d => "RANGE_3D.txt",
            Self::Backscattered => "BACKSCAT.txt",
            Self::Transmitted => "TRANSMIT.txt",
            Self::Sputtered => "SPUTTER.txt",
            Self::TrimOut => "TRIMOUT.txt",
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.file_name() == file_name)
    }
}

impl Display for OutputKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// File names the output collector copies between directories.
pub fn known_output_files() -> Vec<&'static str> {
    let mut names = OutputKind::ALL
        .iter()
        .filter(|kind| **kind != OutputKind::StoppingPower)
        .map(|kind| kind.file_name())
        .collect::<Vec<_>>();
    names.extend(["TRIM.IN", "TDATA.txt"]);
    names
}

use serde::Serialize;

/// One line of a recoil cascade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CascadeStep {
    pub recoil: u32,
    pub atom: u32,
    /// [eV]
    pub recoil_energy: f64,
    /// [Angstrom]
    pub position: [f64; 3],
    pub vacancies: u32,
    pub replacements: u32,
}

/// Recoil cascade started by a single collision.
///
/// The trailing totals line is optional in the log; when it is missing or
/// unreadable the four totals are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cascade {
    pub steps: Vec<CascadeStep>,
    pub displacements: Option<u32>,
    pub vacancies: Option<u32>,
    pub replacements: Option<u32>,
    pub interstitials: Option<u32>,
}

/// Single ion collision in the units printed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collision {
    pub ion_number: u32,
    /// [keV]
    pub kinetic_energy: f64,
    /// [Angstrom]
    pub depth: f64,
    /// [Angstrom]
    pub lateral_y: f64,
    /// [Angstrom]
    pub lateral_z: f64,
    /// [eV/Angstrom]
    pub stopping_energy: f64,
    pub atom: String,
    /// [eV]
    pub recoil_energy: f64,
    pub cascade: Option<Cascade>,
}

/// Damage totals printed after each ion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct IonSummary {
    pub displacements: f64,
    pub avg_displacements: f64,
    pub replacements: f64,
    pub avg_replacements: f64,
    pub vacancies: f64,
    pub avg_vacancies: f64,
    pub interstitials: f64,
    pub avg_interstitials: f64,
    pub sputtered_atoms: f64,
    pub avg_sputtered_atoms: f64,
    pub transmitted_atoms: f64,
    pub avg_transmitted_atoms: f64,
}

impl IonSummary {
    pub const FIELD_COUNT: usize = 12;

    pub(crate) fn from_values(values: [f64; IonSummary::FIELD_COUNT]) -> Self {
        let [
            displacements,
            avg_displacements,
            replacements,
            avg_replacements,
            vacancies,
            avg_vacancies,
            interstitials,
            avg_interstitials,
            sputtered_atoms,
            avg_sputtered_atoms,
            transmitted_atoms,
            avg_transmitted_atoms,
        ] = values;
        Self {
            displacements,
            avg_displacements,
            replacements,
            avg_replacements,
            vacancies,
            avg_vacancies,
            interstitials,
            avg_interstitials,
            sputtered_atoms,
            avg_sputtered_atoms,
            transmitted_atoms,
            avg_transmitted_atoms,
        }
    }
}

/// Everything the log records for one ion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionRecord {
    pub ion_number: u32,
    pub collisions: Vec<Collision>,
    pub summary: IonSummary,
}

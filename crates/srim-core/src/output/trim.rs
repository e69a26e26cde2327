//! Readers for the per-depth distribution files written by TRIM.
//!
//! Every file carries the same header (ion, ion count) above a 100 row table
//! whose first column is depth [Angstrom].

use super::parser::{OutputHeader, extract_table, is_kinchin_pease};
use super::traits::OutputReader;
use crate::domain::{OutputKind, SrimError, SrimResult};
use crate::materials::Ion;
use serde::Serialize;

/// Ionization energy [eV/(Angstrom Ion)].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ioniz {
    header: OutputHeader,
    depth: Vec<f64>,
    ions: Vec<f64>,
    recoils: Vec<f64>,
}

impl Ioniz {
    pub fn ion(&self) -> &Ion {
        &self.header.ion
    }

    pub fn num_ions(&self) -> u64 {
        self.header.num_ions
    }

    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn ions(&self) -> &[f64] {
        &self.ions
    }

    pub fn recoils(&self) -> &[f64] {
        &self.recoils
    }
}

impl OutputReader for Ioniz {
    const KIND: OutputKind = OutputKind::Ioniz;

    fn from_bytes(bytes: &[u8]) -> SrimResult<Self> {
        let header = OutputHeader::from_bytes(bytes)?;
        let ([depth, ions, recoils], _) = split_columns::<3>(bytes, 3, Self::KIND)?;
        Ok(Self {
            header,
            depth,
            ions,
            recoils,
        })
    }
}

/// Vacancy production [Vacancies/(Angstrom Ion)], one column per target element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vacancy {
    header: OutputHeader,
    depth: Vec<f64>,
    knock_ons: Vec<f64>,
    vacancies: Vec<Vec<f64>>,
}

impl Vacancy {
    pub fn ion(&self) -> &Ion {
        &self.header.ion
    }

    pub fn num_ions(&self) -> u64 {
        self.header.num_ions
    }

    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn knock_ons(&self) -> &[f64] {
        &self.knock_ons
    }

    pub fn vacancies(&self) -> &[Vec<f64>] {
        &self.vacancies
    }
}

impl OutputReader for Vacancy {
    const KIND: OutputKind = OutputKind::Vacancy;

    fn from_bytes(bytes: &[u8]) -> SrimResult<Self> {
        let header = OutputHeader::from_bytes(bytes)?;
        let ([depth, knock_ons], vacancies) = split_columns::<2>(bytes, 3, Self::KIND)?;
        Ok(Self {
            header,
            depth,
            knock_ons,
            vacancies,
        })
    }
}

/// Replacement collisions [Number/(Angstrom Ion)]. Full cascade calculations only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoVacancy {
    header: OutputHeader,
    depth: Vec<f64>,
    number: Vec<f64>,
}

impl NoVacancy {
    pub fn ion(&self) -> &Ion {
        &self.header.ion
    }

    pub fn num_ions(&self) -> u64 {
        self.header.num_ions
    }

    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn number(&self) -> &[f64] {
        &self.number
    }
}

impl OutputReader for NoVacancy {
    const KIND: OutputKind = OutputKind::NoVacancy;

    fn from_bytes(bytes: &[u8]) -> SrimResult<Self> {
        if is_kinchin_pease(bytes) {
            return Err(SrimError::not_applicable(
                "OUTPUT.NOVAC_KINCHIN_PEASE",
                "NOVAC has no data for Kinchin-Pease calculations",
            ));
        }
        let header = OutputHeader::from_bytes(bytes)?;
        let ([depth, number], _) = split_columns::<2>(bytes, 2, Self::KIND)?;
        Ok(Self {
            header,
            depth,
            number,
        })
    }
}

/// Energy transferred to recoils [eV/(Angstrom Ion)].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyToRecoils {
    header: OutputHeader,
    depth: Vec<f64>,
    ions: Vec<f64>,
    absorbed: Vec<Vec<f64>>,
}

impl EnergyToRecoils {
    pub fn ion(&self) -> &Ion {
        &self.header.ion
    }

    pub fn num_ions(&self) -> u64 {
        self.header.num_ions
    }

    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn ions(&self) -> &[f64] {
        &self.ions
    }

    /// Energy absorbed, one column per target element.
    pub fn absorbed(&self) -> &[Vec<f64>] {
        &self.absorbed
    }
}

impl OutputReader for EnergyToRecoils {
    const KIND: OutputKind = OutputKind::EnergyToRecoils;

    fn from_bytes(bytes: &[u8]) -> SrimResult<Self> {
        let header = OutputHeader::from_bytes(bytes)?;
        let ([depth, ions], absorbed) = split_columns::<2>(bytes, 3, Self::KIND)?;
        Ok(Self {
            header,
            depth,
            ions,
            absorbed,
        })
    }
}

/// Phonon production [Phonons/(Angstrom Ion)].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phonons {
    header: OutputHeader,
    depth: Vec<f64>,
    ions: Vec<f64>,
    recoils: Vec<f64>,
}

impl Phonons {
    pub fn ion(&self) -> &Ion {
        &self.header.ion
    }

    pub fn num_ions(&self) -> u64 {
        self.header.num_ions
    }

    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn ions(&self) -> &[f64] {
        &self.ions
    }

    pub fn recoils(&self) -> &[f64] {
        &self.recoils
    }
}

impl OutputReader for Phonons {
    const KIND: OutputKind = OutputKind::Phonons;

    fn from_bytes(bytes: &[u8]) -> SrimResult<Self> {
        let header = OutputHeader::from_bytes(bytes)?;
        let ([depth, ions, recoils], _) = split_columns::<3>(bytes, 3, Self::KIND)?;
        Ok(Self {
            header,
            depth,
            ions,
            recoils,
        })
    }
}

/// Final distribution of ions and recoils [(Atoms/cm3)/(Atoms/cm2)].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Range {
    header: OutputHeader,
    depth: Vec<f64>,
    ions: Vec<f64>,
    elements: Vec<Vec<f64>>,
}

impl Range {
    pub fn ion(&self) -> &Ion {
        &self.header.ion
    }

    pub fn num_ions(&self) -> u64 {
        self.header.num_ions
    }

    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn ions(&self) -> &[f64] {
        &self.ions
    }

    /// Recoil distribution, one column per target element.
    pub fn elements(&self) -> &[Vec<f64>] {
        &self.elements
    }
}

impl OutputReader for Range {
    const KIND: OutputKind = OutputKind::Range;

    fn from_bytes(bytes: &[u8]) -> SrimResult<Self> {
        let header = OutputHeader::from_bytes(bytes)?;
        let ([depth, ions], elements) = split_columns::<2>(bytes, 3, Self::KIND)?;
        Ok(Self {
            header,
            depth,
            ions,
            elements,
        })
    }
}

/// Splits the table into `N` named leading columns and the remaining per-element columns.
fn split_columns<const N: usize>(
    bytes: &[u8],
    minimum: usize,
    kind: OutputKind,
) -> SrimResult<([Vec<f64>; N], Vec<Vec<f64>>)> {
    let table = extract_table(bytes)?;
    table
        .require_columns(minimum.max(N))
        .map_err(|error| SrimError::parse("PARSE.TABLE", format!("{}: {error}", kind.as_str())))?;

    let mut columns = table.into_columns();
    let rest = columns.split_off(N);
    let leading = <[Vec<f64>; N]>::try_from(columns).map_err(|columns| {
        SrimError::parse(
            "PARSE.TABLE",
            format!("{}: expected {N} leading columns, found {}", kind.as_str(), columns.len()),
        )
    })?;

    if minimum == N && !rest.is_empty() {
        tracing::warn!(
            kind = kind.as_str(),
            extra = rest.len(),
            "ignoring unexpected table columns"
        );
    }
    Ok((leading, rest))
}

use crate::common::elements::{ElementIdentifier, ElementRecord, lookup};
use crate::domain::{SrimError, SrimResult};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Element from the periodic table, optionally carrying an isotope mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Element {
    symbol: &'static str,
    name: &'static str,
    atomic_number: u32,
    mass: f64,
}

impl Element {
    pub fn new(identifier: impl Into<ElementIdentifier>) -> SrimResult<Self> {
        lookup(identifier).map(Self::from_record)
    }

    /// Looks up the element and replaces its mass [amu].
    pub fn with_mass(identifier: impl Into<ElementIdentifier>, mass: f64) -> SrimResult<Self> {
        if !(mass > 0.0) {
            return Err(SrimError::validation(
                "INPUT.ELEMENT_MASS",
                format!("element mass must be positive, got {mass}"),
            ));
        }
        let record = lookup(identifier)?;
        Ok(Self {
            mass,
            ..Self::from_record(record)
        })
    }

    pub fn from_record(record: &ElementRecord) -> Self {
        Self {
            symbol: record.symbol,
            name: record.name,
            atomic_number: record.atomic_number,
            mass: record.mass,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Same periodic-table entry, ignoring any mass override.
    pub fn same_species(&self, other: &Element) -> bool {
        self.atomic_number == other.atomic_number
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {:.2} amu)", self.symbol, self.name, self.mass)
    }
}

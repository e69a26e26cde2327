use super::element::Element;
use crate::common::constants::{
    COMPOSITION_TOLERANCE, DEFAULT_DISPLACEMENT_ENERGY, DEFAULT_LATTICE_ENERGY,
    DEFAULT_SURFACE_ENERGY,
};
use crate::common::elements::ElementIdentifier;
use crate::domain::{SrimError, SrimResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Solid,
    Gas,
}

impl Phase {
    /// Integer flag the engine input uses for the phase.
    pub const fn flag(self) -> u8 {
        match self {
            Self::Solid => 0,
            Self::Gas => 1,
        }
    }
}

/// Per-element composition and damage energies [eV] inside a material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementProperties {
    pub stoich: f64,
    pub displacement_energy: f64,
    pub lattice_energy: f64,
    pub surface_energy: f64,
}

/// Named-field form of an element entry; omitted energies take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PropertyFields {
    pub stoich: f64,
    pub displacement_energy: Option<f64>,
    pub lattice: Option<f64>,
    pub surface: Option<f64>,
}

/// The three accepted shapes of an element entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementFraction {
    /// Bare stoichiometric fraction.
    Stoich(f64),
    /// `[stoich, E_d, lattice, surface]`, trailing entries optional.
    Ordered(Vec<f64>),
    Fields(PropertyFields),
}

impl From<f64> for ElementFraction {
    fn from(value: f64) -> Self {
        Self::Stoich(value)
    }
}

impl From<Vec<f64>> for ElementFraction {
    fn from(value: Vec<f64>) -> Self {
        Self::Ordered(value)
    }
}

impl<const N: usize> From<[f64; N]> for ElementFraction {
    fn from(value: [f64; N]) -> Self {
        Self::Ordered(value.to_vec())
    }
}

impl From<PropertyFields> for ElementFraction {
    fn from(value: PropertyFields) -> Self {
        Self::Fields(value)
    }
}

impl ElementFraction {
    fn resolve(&self, symbol: &str) -> SrimResult<ElementProperties> {
        let properties = match self {
            Self::Stoich(stoich) => ElementProperties {
                stoich: *stoich,
                displacement_energy: DEFAULT_DISPLACEMENT_ENERGY,
                lattice_energy: DEFAULT_LATTICE_ENERGY,
                surface_energy: DEFAULT_SURFACE_ENERGY,
            },
            Self::Ordered(values) => {
                if values.is_empty() || values.len() > 4 {
                    return Err(SrimError::validation(
                        "INPUT.ELEMENT_PROPERTIES",
                        format!(
                            "element {symbol} expects 1 to 4 ordered values [stoich, E_d, lattice, surface], got {}",
                            values.len()
                        ),
                    ));
                }
                ElementProperties {
                    stoich: values[0],
                    displacement_energy: values
                        .get(1)
                        .copied()
                        .unwrap_or(DEFAULT_DISPLACEMENT_ENERGY),
                    lattice_energy: values.get(2).copied().unwrap_or(DEFAULT_LATTICE_ENERGY),
                    surface_energy: values.get(3).copied().unwrap_or(DEFAULT_SURFACE_ENERGY),
                }
            }
            Self::Fields(fields) => ElementProperties {
                stoich: fields.stoich,
                displacement_energy: fields
                    .displacement_energy
                    .unwrap_or(DEFAULT_DISPLACEMENT_ENERGY),
                lattice_energy: fields.lattice.unwrap_or(DEFAULT_LATTICE_ENERGY),
                surface_energy: fields.surface.unwrap_or(DEFAULT_SURFACE_ENERGY),
            },
        };

        if !(properties.stoich > 0.0) {
            return Err(SrimError::validation(
                "INPUT.STOICHIOMETRY",
                format!(
                    "cannot have non-positive stoichiometry {} of element {symbol}",
                    properties.stoich
                ),
            ));
        }

        for (label, value) in [
            ("displacement", properties.displacement_energy),
            ("lattice", properties.lattice_energy),
            ("surface", properties.surface_energy),
        ] {
            if !(value >= 0.0) {
                return Err(SrimError::validation(
                    "INPUT.ELEMENT_ENERGY",
                    format!("{label} energy of element {symbol} must be >= 0 eV, got {value}"),
                ));
            }
        }

        Ok(properties)
    }
}

/// Element given either as a registry identifier or an already-built [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum ElementEntry {
    Identifier(ElementIdentifier),
    Element(Element),
}

impl ElementEntry {
    fn resolve(&self) -> SrimResult<Element> {
        match self {
            Self::Identifier(identifier) => Element::new(identifier.clone()),
            Self::Element(element) => Ok(*element),
        }
    }
}

impl From<Element> for ElementEntry {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<&str> for ElementEntry {
    fn from(value: &str) -> Self {
        Self::Identifier(value.into())
    }
}

impl From<String> for ElementEntry {
    fn from(value: String) -> Self {
        Self::Identifier(value.into())
    }
}

impl From<u32> for ElementEntry {
    fn from(value: u32) -> Self {
        Self::Identifier(value.into())
    }
}

impl From<i32> for ElementEntry {
    fn from(value: i32) -> Self {
        Self::Identifier(value.into())
    }
}

/// Normalized elemental composition with density [g/cm^3].
#[derive(Debug, Clone, Serialize)]
pub struct Material {
    elements: Vec<(Element, ElementProperties)>,
    density: f64,
    phase: Phase,
}

impl Material {
    pub fn new(
        entries: impl IntoIterator<Item = (ElementEntry, ElementFraction)>,
        density: f64,
        phase: Phase,
    ) -> SrimResult<Self> {
        if !(density > 0.0) {
            return Err(SrimError::validation(
                "INPUT.DENSITY",
                format!("material density must be positive, got {density}"),
            ));
        }

        let mut elements: Vec<(Element, ElementProperties)> = Vec::new();
        for (entry, fraction) in entries {
            let element = entry.resolve()?;
            let properties = fraction.resolve(element.symbol())?;
            if elements
                .iter()
                .any(|(existing, _)| existing.same_species(&element))
            {
                return Err(SrimError::validation(
                    "INPUT.DUPLICATE_ELEMENT",
                    format!(
                        "cannot have duplicate elements {} in stoichiometry",
                        element.symbol()
                    ),
                ));
            }
            elements.push((element, properties));
        }

        if elements.is_empty() {
            return Err(SrimError::validation(
                "INPUT.STOICHIOMETRY",
                "material requires at least one element",
            ));
        }

        let stoich_sum: f64 = elements.iter().map(|(_, properties)| properties.stoich).sum();
        for (_, properties) in &mut elements {
            properties.stoich /= stoich_sum;
        }

        Ok(Self {
            elements,
            density,
            phase,
        })
    }

    pub fn builder(density: f64) -> MaterialBuilder {
        MaterialBuilder::new(density)
    }

    /// Builds a material from a formula such as `SiC`, `CO2` or `Fe0.1Al.9`.
    pub fn from_formula(formula: &str, density: f64, phase: Phase) -> SrimResult<Self> {
        let entries = parse_formula(formula)?
            .into_iter()
            .map(|(symbol, stoich)| (ElementEntry::from(symbol), ElementFraction::Stoich(stoich)));
        Self::new(entries, density, phase)
    }

    pub fn elements(&self) -> &[(Element, ElementProperties)] {
        &self.elements
    }

    pub fn properties(&self, element: &Element) -> Option<&ElementProperties> {
        self.elements
            .iter()
            .find(|(candidate, _)| candidate == element)
            .map(|(_, properties)| properties)
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// `"<Symbol> <fraction>"` pairs, space-joined, in insertion order.
    pub fn chemical_formula(&self) -> String {
        self.elements
            .iter()
            .map(|(element, properties)| format!("{} {:.2}", element.symbol(), properties.stoich))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        if (self.density - other.density).abs() > COMPOSITION_TOLERANCE {
            return false;
        }
        if self.elements.len() != other.elements.len() {
            return false;
        }

        self.elements.iter().all(|(element, properties)| {
            other.properties(element).is_some_and(|theirs| {
                [
                    (properties.stoich, theirs.stoich),
                    (properties.displacement_energy, theirs.displacement_energy),
                    (properties.lattice_energy, theirs.lattice_energy),
                    (properties.surface_energy, theirs.surface_energy),
                ]
                .iter()
                .all(|(ours, theirs)| (ours - theirs).abs() <= COMPOSITION_TOLERANCE)
            })
        })
    }
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.3} g/cm3)", self.chemical_formula(), self.density)
    }
}

#[derive(Debug, Clone)]
pub struct MaterialBuilder {
    density: f64,
    phase: Phase,
    entries: Vec<(ElementEntry, ElementFraction)>,
}

impl MaterialBuilder {
    pub fn new(density: f64) -> Self {
        Self {
            density,
            phase: Phase::Solid,
            entries: Vec::new(),
        }
    }

    pub fn phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub fn element(
        mut self,
        element: impl Into<ElementEntry>,
        fraction: impl Into<ElementFraction>,
    ) -> Self {
        self.entries.push((element.into(), fraction.into()));
        self
    }

    pub fn build(self) -> SrimResult<Material> {
        Material::new(self.entries, self.density, self.phase)
    }
}

/// Splits a formula into `(symbol, fraction)` pairs; an omitted fraction is 1.0.
///
/// Whitespace between element tokens is ignored so that the output of
/// [`Material::chemical_formula`] parses back.
pub fn parse_formula(formula: &str) -> SrimResult<Vec<(String, f64)>> {
    let chars = formula.chars().collect::<Vec<_>>();
    let mut entries = Vec::new();
    let mut index = 0;

    while index < chars.len() {
        if chars[index].is_whitespace() {
            index += 1;
            continue;
        }

        if !chars[index].is_ascii_uppercase() {
            return Err(formula_error(
                formula,
                format!("expected element symbol at position {index}"),
            ));
        }
        let mut symbol = chars[index].to_string();
        index += 1;
        if index < chars.len() && chars[index].is_ascii_lowercase() {
            symbol.push(chars[index]);
            index += 1;
        }

        while index < chars.len() && chars[index].is_whitespace() {
            index += 1;
        }
        let start = index;
        while index < chars.len() && (chars[index].is_ascii_digit() || chars[index] == '.') {
            index += 1;
        }
        let fraction_text = chars[start..index].iter().collect::<String>();
        let fraction = if fraction_text.is_empty() {
            1.0
        } else {
            fraction_text.parse::<f64>().map_err(|_| {
                formula_error(
                    formula,
                    format!("invalid fraction '{fraction_text}' for element {symbol}"),
                )
            })?
        };

        entries.push((symbol, fraction));
    }

    if entries.is_empty() {
        return Err(formula_error(formula, "formula contains no elements".to_string()));
    }

    Ok(entries)
}

fn formula_error(formula: &str, detail: String) -> SrimError {
    SrimError::validation(
        "INPUT.FORMULA",
        format!("malformed chemical formula '{formula}': {detail}"),
    )
}

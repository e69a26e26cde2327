//! Element registry over the bundled periodic table.
//!
//! The table itself is compile-time data; the symbol and name indexes are built
//! on first lookup and shared read-only afterwards.

use super::element_data::{ELEMENT_RECORDS, MAX_ATOMIC_NUMBER};
use crate::domain::{SrimError, SrimResult};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

static REGISTRY: OnceLock<ElementRegistry> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementRecord {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u32,
    pub mass: f64,
}

impl ElementRecord {
    pub(crate) const fn new(
        symbol: &'static str,
        name: &'static str,
        atomic_number: u32,
        mass: f64,
    ) -> Self {
        Self {
            symbol,
            name,
            atomic_number,
            mass,
        }
    }
}

/// Symbol, full name, or atomic number of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementIdentifier {
    Text(String),
    AtomicNumber(i64),
}

impl From<&str> for ElementIdentifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ElementIdentifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ElementIdentifier {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for ElementIdentifier {
    fn from(value: i64) -> Self {
        Self::AtomicNumber(value)
    }
}

impl From<i32> for ElementIdentifier {
    fn from(value: i32) -> Self {
        Self::AtomicNumber(i64::from(value))
    }
}

impl From<u32> for ElementIdentifier {
    fn from(value: u32) -> Self {
        Self::AtomicNumber(i64::from(value))
    }
}

impl Display for ElementIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "'{text}'"),
            Self::AtomicNumber(z) => write!(f, "{z}"),
        }
    }
}

#[derive(Debug)]
struct ElementRegistry {
    by_symbol: HashMap<&'static str, usize>,
    by_name: HashMap<&'static str, usize>,
}

impl ElementRegistry {
    fn build() -> Self {
        let mut by_symbol = HashMap::with_capacity(ELEMENT_RECORDS.len());
        let mut by_name = HashMap::with_capacity(ELEMENT_RECORDS.len());
        for (index, record) in ELEMENT_RECORDS.iter().enumerate() {
            by_symbol.insert(record.symbol, index);
            by_name.insert(record.name, index);
        }
        Self { by_symbol, by_name }
    }
}

fn registry() -> &'static ElementRegistry {
    REGISTRY.get_or_init(ElementRegistry::build)
}

pub fn records() -> &'static [ElementRecord] {
    &ELEMENT_RECORDS
}

pub fn lookup(identifier: impl Into<ElementIdentifier>) -> SrimResult<&'static ElementRecord> {
    match identifier.into() {
        ElementIdentifier::Text(text) => {
            if is_symbol_shaped(&text) {
                lookup_symbol(&text)
            } else if is_name_shaped(&text) {
                lookup_name(&text)
            } else {
                Err(SrimError::invalid_identifier(
                    "LOOKUP.IDENTIFIER",
                    format!(
                        "identifier '{text}' is neither a capitalized symbol nor an element name"
                    ),
                ))
            }
        }
        ElementIdentifier::AtomicNumber(z) => lookup_atomic_number(z),
    }
}

pub fn lookup_symbol(symbol: &str) -> SrimResult<&'static ElementRecord> {
    registry()
        .by_symbol
        .get(symbol)
        .map(|index| &ELEMENT_RECORDS[*index])
        .ok_or_else(|| {
            SrimError::unknown_element(
                "LOOKUP.SYMBOL",
                format!("symbol '{symbol}' does not exist"),
            )
        })
}

pub fn lookup_name(name: &str) -> SrimResult<&'static ElementRecord> {
    registry()
        .by_name
        .get(name)
        .map(|index| &ELEMENT_RECORDS[*index])
        .ok_or_else(|| {
            SrimError::unknown_element("LOOKUP.NAME", format!("name '{name}' does not exist"))
        })
}

pub fn lookup_atomic_number(atomic_number: i64) -> SrimResult<&'static ElementRecord> {
    if atomic_number < 1 || atomic_number > i64::from(MAX_ATOMIC_NUMBER) {
        return Err(SrimError::atomic_number_out_of_range(
            "LOOKUP.ATOMIC_NUMBER",
            format!(
                "atomic number {atomic_number} does not exist (valid range 1..={MAX_ATOMIC_NUMBER})"
            ),
        ));
    }
    Ok(&ELEMENT_RECORDS[(atomic_number - 1) as usize])
}

fn is_symbol_shaped(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), None, None) => first.is_ascii_uppercase(),
        (Some(first), Some(second), None) => {
            first.is_ascii_uppercase() && second.is_ascii_lowercase()
        }
        _ => false,
    }
}

fn is_name_shaped(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_lowercase())
}

//! Reader for the stopping-power summary (`SR_OUTPUT.txt`).
//!
//! Energies are converted to eV and lengths to Angstrom using the unit suffix
//! printed on every row. Stopping columns keep the declared stopping units.

use super::parser::{NUMBER, decode_latin1, pattern_error};
use super::table::is_equals_rule;
use super::traits::OutputReader;
use crate::domain::{OutputKind, SrimError, SrimResult};
use crate::materials::Element;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SrTargetElement {
    pub symbol: String,
    pub atomic_number: u32,
    pub atomic_percent: f64,
    pub mass_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SrTarget {
    /// [g/cm3]
    pub mass_density: f64,
    /// [atoms/cm3]
    pub atom_density: f64,
    pub composition: Vec<SrTargetElement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StoppingTable {
    /// [eV]
    pub energy: Vec<f64>,
    pub electronic: Vec<f64>,
    pub nuclear: Vec<f64>,
    /// [Angstrom]
    pub projected_range: Vec<f64>,
    /// [Angstrom]
    pub longitudinal_straggling: Vec<f64>,
    /// [Angstrom]
    pub lateral_straggling: Vec<f64>,
}

impl StoppingTable {
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SrResults {
    units: String,
    ion: Element,
    target: SrTarget,
    data: StoppingTable,
}

impl SrResults {
    /// Stopping units as printed, with whitespace removed (e.g. `MeV/(mg/cm2)`).
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Projectile with the mass declared in the file.
    pub fn ion(&self) -> &Element {
        &self.ion
    }

    pub fn target(&self) -> &SrTarget {
        &self.target
    }

    pub fn data(&self) -> &StoppingTable {
        &self.data
    }
}

impl OutputReader for SrResults {
    const KIND: OutputKind = OutputKind::StoppingPower;

    fn from_bytes(bytes: &[u8]) -> SrimResult<Self> {
        let text = decode_latin1(bytes);
        let patterns = sr_patterns()?;
        let results = Self {
            units: read_units(&text, patterns)?,
            ion: read_ion(&text, patterns)?,
            target: read_target(&text, patterns)?,
            data: read_stopping_table(&text)?,
        };
        tracing::debug!(rows = results.data.len(), units = %results.units, "parsed stopping table");
        Ok(results)
    }
}

struct SrPatterns {
    units: Regex,
    ion: Regex,
    density: Regex,
}

fn sr_patterns() -> SrimResult<&'static SrPatterns> {
    static PATTERNS: OnceLock<Result<SrPatterns, regex::Error>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            Ok(SrPatterns {
                units: Regex::new(r"Stopping\s+Units\s*=\s*(.+)")?,
                ion: Regex::new(&format!(
                    r"Ion\s*=\s*(.+?)\s*\[(\d+)\]\s*,\s*Mass\s*=\s*({NUMBER})\s*amu"
                ))?,
                density: Regex::new(&format!(
                    r"Target\s+Density\s*=\s*({NUMBER})\s*g/cm3\s*=\s*({NUMBER})\s*atoms/cm3"
                ))?,
            })
        })
        .as_ref()
        .map_err(pattern_error)
}

fn read_units(text: &str, patterns: &SrPatterns) -> SrimResult<String> {
    let captures = patterns
        .units
        .captures(text)
        .ok_or_else(|| SrimError::parse("PARSE.SR_UNITS", "stopping units not found"))?;
    let units: String = captures[1].chars().filter(|c| !c.is_whitespace()).collect();
    if units.is_empty() {
        return Err(SrimError::parse("PARSE.SR_UNITS", "stopping units are empty"));
    }
    Ok(units)
}

fn read_ion(text: &str, patterns: &SrPatterns) -> SrimResult<Element> {
    let captures = patterns
        .ion
        .captures(text)
        .ok_or_else(|| SrimError::parse("PARSE.SR_ION", "ion not found in stopping header"))?;
    let atomic_number = parse_token::<u32>(&captures[2], "PARSE.SR_ION")?;
    let mass = parse_token::<f64>(&captures[3], "PARSE.SR_ION")?;
    let ion = Element::with_mass(atomic_number, mass)?;
    if !ion.name().eq_ignore_ascii_case(captures[1].trim()) {
        tracing::warn!(
            declared = captures[1].trim(),
            resolved = ion.name(),
            "ion name differs from registry name"
        );
    }
    Ok(ion)
}

fn read_target(text: &str, patterns: &SrPatterns) -> SrimResult<SrTarget> {
    let captures = patterns
        .density
        .captures(text)
        .ok_or_else(|| SrimError::parse("PARSE.SR_TARGET", "target density not found"))?;
    let mass_density = parse_token::<f64>(&captures[1], "PARSE.SR_TARGET")?;
    let atom_density = parse_token::<f64>(&captures[2], "PARSE.SR_TARGET")?;

    let lines = text
        .lines()
        .skip_while(|line| !is_composition_title(line))
        .skip(1)
        .skip_while(|line| !is_dash_line(line, 2))
        .skip(1);

    let mut composition = Vec::new();
    for line in lines {
        if line.trim().is_empty() || is_equals_rule(line) {
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [symbol, atomic_number, atomic_percent, mass_percent] = &tokens[..] else {
            return Err(SrimError::parse(
                "PARSE.SR_TARGET",
                format!("malformed composition row '{}'", line.trim()),
            ));
        };
        composition.push(SrTargetElement {
            symbol: symbol.to_string(),
            atomic_number: parse_token(atomic_number, "PARSE.SR_TARGET")?,
            atomic_percent: parse_token(atomic_percent, "PARSE.SR_TARGET")?,
            mass_percent: parse_token(mass_percent, "PARSE.SR_TARGET")?,
        });
    }

    if composition.is_empty() {
        return Err(SrimError::parse(
            "PARSE.SR_TARGET",
            "target composition not found",
        ));
    }
    Ok(SrTarget {
        mass_density,
        atom_density,
        composition,
    })
}

fn read_stopping_table(text: &str) -> SrimResult<StoppingTable> {
    let mut lines = text
        .lines()
        .skip_while(|line| !is_dash_line(line, 6))
        .skip(1)
        .peekable();
    if lines.peek().is_none() {
        return Err(SrimError::parse("PARSE.SR_TABLE", "table not found"));
    }

    let mut table = StoppingTable::default();
    for line in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            break;
        };
        if first.parse::<f64>().is_err() {
            break;
        }
        let [
            energy,
            energy_unit,
            electronic,
            nuclear,
            range,
            range_unit,
            longitudinal,
            longitudinal_unit,
            lateral,
            lateral_unit,
        ] = &tokens[..]
        else {
            return Err(SrimError::parse(
                "PARSE.SR_TABLE",
                format!("expected 10 tokens in row '{}'", line.trim()),
            ));
        };

        table
            .energy
            .push(parse_token::<f64>(energy, "PARSE.SR_TABLE")? * energy_factor(energy_unit)?);
        table
            .electronic
            .push(parse_token(electronic, "PARSE.SR_TABLE")?);
        table.nuclear.push(parse_token(nuclear, "PARSE.SR_TABLE")?);
        table
            .projected_range
            .push(parse_token::<f64>(range, "PARSE.SR_TABLE")? * length_factor(range_unit)?);
        table.longitudinal_straggling.push(
            parse_token::<f64>(longitudinal, "PARSE.SR_TABLE")? * length_factor(longitudinal_unit)?,
        );
        table
            .lateral_straggling
            .push(parse_token::<f64>(lateral, "PARSE.SR_TABLE")? * length_factor(lateral_unit)?);
    }

    if table.is_empty() {
        return Err(SrimError::parse("PARSE.SR_TABLE", "stopping table has no rows"));
    }
    Ok(table)
}

/// eV per unit.
fn energy_factor(unit: &str) -> SrimResult<f64> {
    match unit {
        "eV" => Ok(1.0),
        "keV" => Ok(1.0e3),
        "MeV" => Ok(1.0e6),
        "GeV" => Ok(1.0e9),
        other => Err(SrimError::parse(
            "PARSE.SR_TABLE",
            format!("unknown energy unit '{other}'"),
        )),
    }
}

/// Angstrom per unit.
fn length_factor(unit: &str) -> SrimResult<f64> {
    match unit {
        "A" => Ok(1.0),
        "nm" => Ok(1.0e1),
        "um" => Ok(1.0e4),
        "mm" => Ok(1.0e7),
        "cm" => Ok(1.0e8),
        "m" => Ok(1.0e10),
        "km" => Ok(1.0e13),
        other => Err(SrimError::parse(
            "PARSE.SR_TABLE",
            format!("unknown length unit '{other}'"),
        )),
    }
}

fn is_composition_title(line: &str) -> bool {
    line.split_whitespace()
        .collect::<Vec<_>>()
        .windows(2)
        .any(|pair| pair == ["Target", "Composition"])
}

fn is_dash_line(line: &str, runs: usize) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed.chars().all(|c| c == '-' || c.is_whitespace())
        && trimmed.split_whitespace().count() >= runs
}

fn parse_token<T: std::str::FromStr>(token: &str, code: &'static str) -> SrimResult<T> {
    token
        .parse::<T>()
        .map_err(|_| SrimError::parse(code, format!("malformed token '{token}'")))
}

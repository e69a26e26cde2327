//! Extraction primitives shared by the TRIM output readers.
//!
//! Header fields are matched on raw bytes; tables and composition blocks are
//! matched on the Latin-1 decoded text.

use super::table::{DepthTable, TABLE_ROWS, parse_depth_table};
use crate::common::constants::EV_PER_KEV;
use crate::domain::{SrimError, SrimResult};
use crate::materials::Ion;
use regex::Regex;
use regex::bytes::Regex as BytesRegex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub(crate) const NUMBER: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";

/// Fields every TRIM distribution file carries in its header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputHeader {
    pub ion: Ion,
    pub num_ions: u64,
}

impl OutputHeader {
    pub fn from_bytes(bytes: &[u8]) -> SrimResult<Self> {
        Ok(Self {
            ion: extract_ion(bytes)?,
            num_ions: extract_num_ions(bytes)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementShare {
    pub symbol: String,
    pub atomic_percent: f64,
    pub mass_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LayerComposition {
    pub name: String,
    /// [Angstrom]
    pub width: Option<f64>,
    /// [atoms/cm3]
    pub atom_density: Option<f64>,
    /// [g/cm3]
    pub mass_density: Option<f64>,
    pub elements: Vec<ElementShare>,
}

pub fn read_output_file(path: impl AsRef<Path>) -> SrimResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|error| {
        SrimError::io_system(
            "IO.OUTPUT_READ",
            format!("failed to read output file '{}': {error}", path.display()),
        )
    })
}

/// Every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| byte as char).collect()
}

/// Ion species and energy from `Ion = <Symbol> Energy = <number> keV`, in eV.
pub fn extract_ion(bytes: &[u8]) -> SrimResult<Ion> {
    let captures = ion_header_regex()?
        .captures(bytes)
        .ok_or_else(|| SrimError::parse("PARSE.ION_HEADER", "ion not found in output header"))?;

    let symbol = capture_str(&captures, 1, "PARSE.ION_HEADER")?;
    let energy_kev = capture_f64(&captures, 2, "PARSE.ION_HEADER")?;
    Ion::new(symbol, energy_kev * EV_PER_KEV)
}

/// The engine prints the count as a float; it is floored.
pub fn extract_num_ions(bytes: &[u8]) -> SrimResult<u64> {
    let captures = ion_count_regex()?
        .captures(bytes)
        .ok_or_else(|| SrimError::parse("PARSE.ION_COUNT", "ion count not found in output header"))?;

    let count = capture_f64(&captures, 1, "PARSE.ION_COUNT")?;
    if !(count >= 0.0) {
        return Err(SrimError::parse(
            "PARSE.ION_COUNT",
            format!("ion count {count} is negative"),
        ));
    }
    Ok(count.floor() as u64)
}

pub fn is_kinchin_pease(bytes: &[u8]) -> bool {
    const MARKER: &[u8] = b"Recoil/Damage Calculations made with Kinchin-Pease Estimates";
    bytes.windows(MARKER.len()).any(|window| window == MARKER)
}

pub fn extract_table(bytes: &[u8]) -> SrimResult<DepthTable> {
    parse_depth_table(&decode_latin1(bytes), TABLE_ROWS)
        .map_err(|error| SrimError::parse("PARSE.TABLE", error.to_string()))
}

/// Per-layer composition keyed by the engine's 1-based layer number.
pub fn extract_target_composition(bytes: &[u8]) -> SrimResult<BTreeMap<u32, LayerComposition>> {
    let patterns = composition_patterns()?;
    let text = decode_latin1(bytes);
    let mut layers: BTreeMap<u32, LayerComposition> = BTreeMap::new();
    let mut current = None;

    for line in text.lines() {
        if let Some(captures) = patterns.layer.captures(line) {
            let number = parse_layer_number(&captures[1])?;
            layers.entry(number).or_default().name = captures[2].to_string();
            current = Some(number);
        } else if let Some(captures) = patterns.width.captures(line) {
            if let Some(layer) = current.and_then(|number| layers.get_mut(&number)) {
                layer.width = Some(parse_composition_number(&captures[1])?);
            }
        } else if let Some(captures) = patterns.density.captures(line) {
            let layer = layers.entry(parse_layer_number(&captures[1])?).or_default();
            layer.atom_density = Some(parse_composition_number(&captures[2])?);
            layer.mass_density = Some(parse_composition_number(&captures[3])?);
        } else if let Some(captures) = patterns.element.captures(line) {
            let layer = layers.entry(parse_layer_number(&captures[1])?).or_default();
            layer.elements.push(ElementShare {
                symbol: captures[2].to_string(),
                atomic_percent: parse_composition_number(&captures[3])?,
                mass_percent: parse_composition_number(&captures[4])?,
            });
        }
    }

    if layers.is_empty() {
        return Err(SrimError::parse(
            "PARSE.TARGET",
            "target composition not found in output header",
        ));
    }
    tracing::debug!(layers = layers.len(), "extracted target composition");
    Ok(layers)
}

struct CompositionPatterns {
    layer: Regex,
    width: Regex,
    density: Regex,
    element: Regex,
}

fn composition_patterns() -> SrimResult<&'static CompositionPatterns> {
    static PATTERNS: OnceLock<Result<CompositionPatterns, regex::Error>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            Ok(CompositionPatterns {
                layer: Regex::new(r"^\s*Layer\s+(\d+)\s*:\s*(.*?)\s*$")?,
                width: Regex::new(&format!(r"Layer\s+Width\s*=\s*({NUMBER})\s*A"))?,
                density: Regex::new(&format!(
                    r"Layer\s*#\s*(\d+)\s*-\s*Density\s*=\s*({NUMBER})\s*atoms/cm3\s*=\s*({NUMBER})\s*g/cm3"
                ))?,
                element: Regex::new(&format!(
                    r"Layer\s*#\s*(\d+)\s*-\s*([A-Z][a-z]?)\s*=\s*({NUMBER})\s*Atomic\s+Percent\s*=\s*({NUMBER})\s*Mass\s+Percent"
                ))?,
            })
        })
        .as_ref()
        .map_err(pattern_error)
}

fn ion_header_regex() -> SrimResult<&'static BytesRegex> {
    static REGEX: OnceLock<Result<BytesRegex, regex::Error>> = OnceLock::new();
    REGEX
        .get_or_init(|| {
            BytesRegex::new(&format!(
                r"Ion\s*=\s*([A-Z][a-z]?)\s+Energy\s*=\s*({NUMBER})\s*keV"
            ))
        })
        .as_ref()
        .map_err(pattern_error)
}

fn ion_count_regex() -> SrimResult<&'static BytesRegex> {
    static REGEX: OnceLock<Result<BytesRegex, regex::Error>> = OnceLock::new();
    REGEX
        .get_or_init(|| BytesRegex::new(&format!(r"Total\s+Ions\s+calculated\s*=\s*({NUMBER})")))
        .as_ref()
        .map_err(pattern_error)
}

pub(crate) fn pattern_error(error: &regex::Error) -> SrimError {
    SrimError::parse("PARSE.PATTERN", format!("invalid built-in pattern: {error}"))
}

fn capture_str<'a>(
    captures: &regex::bytes::Captures<'a>,
    index: usize,
    code: &'static str,
) -> SrimResult<&'a str> {
    captures
        .get(index)
        .and_then(|capture| std::str::from_utf8(capture.as_bytes()).ok())
        .ok_or_else(|| SrimError::parse(code, format!("capture group {index} missing")))
}

fn capture_f64(
    captures: &regex::bytes::Captures<'_>,
    index: usize,
    code: &'static str,
) -> SrimResult<f64> {
    let token = capture_str(captures, index, code)?;
    token
        .parse::<f64>()
        .map_err(|_| SrimError::parse(code, format!("malformed number '{token}'")))
}

fn parse_layer_number(token: &str) -> SrimResult<u32> {
    token
        .parse::<u32>()
        .map_err(|_| SrimError::parse("PARSE.TARGET", format!("malformed layer number '{token}'")))
}

fn parse_composition_number(token: &str) -> SrimResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| SrimError::parse("PARSE.TARGET", format!("malformed number '{token}'")))
}

//! Grammar of one per-ion block of the collision log.
//!
//! Collision lines are delimited by `³` (byte 179 in the Latin-1 file). A
//! collision whose last column reads "Start of New Cascade" is followed by a
//! two line sub-header, cascade steps, an `=` rule and an optional totals line.
//! Everything after the last collision is the ion footer.

use super::model::{Cascade, CascadeStep, Collision, CollisionRecord, IonSummary};
use crate::domain::{SrimError, SrimResult};
use crate::output::parser::pattern_error;
use crate::output::table::is_equals_rule;
use regex::Regex;
use std::iter::Peekable;
use std::str::Lines;
use std::sync::OnceLock;

pub const SEPARATOR: char = '\u{b3}';

const CASCADE_MARKER: &str = "Start of New Cascade";
const COLLISION_COLUMNS: usize = 8;

type LineCursor<'a> = Peekable<Lines<'a>>;

pub fn parse_record(text: &str) -> SrimResult<CollisionRecord> {
    let mut lines = text.lines().peekable();
    while lines
        .peek()
        .is_some_and(|line| collision_tokens(line).is_none())
    {
        lines.next();
    }

    let mut collisions = Vec::new();
    while let Some(line) = lines.peek().copied() {
        if line.trim().is_empty() {
            lines.next();
            continue;
        }
        let Some(tokens) = collision_tokens(line) else {
            break;
        };
        lines.next();
        collisions.push(parse_collision(&tokens, &mut lines)?);
    }

    let ion_number = collisions
        .first()
        .map(|collision| collision.ion_number)
        .ok_or_else(|| record_error("no collision lines in ion record"))?;

    let footer = lines.collect::<Vec<_>>().join("\n");
    Ok(CollisionRecord {
        ion_number,
        collisions,
        summary: parse_summary(&footer)?,
    })
}

/// Separator-delimited fields of a collision line, or `None` for any other line.
fn collision_tokens(line: &str) -> Option<Vec<&str>> {
    let trimmed = line.trim();
    if !trimmed.starts_with(SEPARATOR) {
        return None;
    }
    let pieces: Vec<&str> = trimmed.split(SEPARATOR).collect();
    if pieces.len() < 3 {
        return None;
    }
    let tokens: Vec<&str> = pieces[1..pieces.len() - 1]
        .iter()
        .map(|piece| piece.trim())
        .collect();
    if tokens.len() < COLLISION_COLUMNS || tokens[0].parse::<u32>().is_err() {
        return None;
    }
    Some(tokens)
}

fn parse_collision(tokens: &[&str], lines: &mut LineCursor<'_>) -> SrimResult<Collision> {
    let starts_cascade = tokens
        .get(COLLISION_COLUMNS)
        .is_some_and(|token| token.contains(CASCADE_MARKER));

    Ok(Collision {
        ion_number: parse_field(tokens[0], "ion number")?,
        kinetic_energy: parse_field(tokens[1], "kinetic energy")?,
        depth: parse_field(tokens[2], "depth")?,
        lateral_y: parse_field(tokens[3], "lateral y")?,
        lateral_z: parse_field(tokens[4], "lateral z")?,
        stopping_energy: parse_field(tokens[5], "stopping energy")?,
        atom: tokens[6].to_string(),
        recoil_energy: parse_field(tokens[7], "recoil energy")?,
        cascade: if starts_cascade {
            Some(parse_cascade(lines)?)
        } else {
            None
        },
    })
}

fn parse_cascade(lines: &mut LineCursor<'_>) -> SrimResult<Cascade> {
    for _ in 0..2 {
        lines
            .next()
            .ok_or_else(|| record_error("cascade sub-header is truncated"))?;
    }

    let mut steps = Vec::new();
    loop {
        let line = lines
            .next()
            .ok_or_else(|| record_error("cascade is missing its '=' terminator"))?;
        if is_equals_rule(line) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        steps.push(parse_cascade_step(line)?);
    }

    let totals = lines.peek().and_then(|line| cascade_totals(line));
    if totals.is_some() {
        lines.next();
    } else {
        tracing::debug!("cascade totals line missing; totals left unknown");
    }
    let [displacements, vacancies, replacements, interstitials] =
        totals.map_or([None; 4], |values| values.map(Some));

    Ok(Cascade {
        steps,
        displacements,
        vacancies,
        replacements,
        interstitials,
    })
}

fn parse_cascade_step(line: &str) -> SrimResult<CascadeStep> {
    let cleaned = line.replace(SEPARATOR, " ");
    let fields: Vec<&str> = cleaned.split_whitespace().collect();
    if fields.len() < 8 {
        return Err(record_error(format!(
            "cascade step '{}' has {} fields, expected 8",
            line.trim(),
            fields.len()
        )));
    }
    Ok(CascadeStep {
        recoil: parse_field(fields[0], "recoil number")?,
        atom: parse_field(fields[1], "atom number")?,
        recoil_energy: parse_field(fields[2], "recoil energy")?,
        position: [
            parse_field(fields[3], "x")?,
            parse_field(fields[4], "y")?,
            parse_field(fields[5], "z")?,
        ],
        vacancies: parse_field(fields[6], "vacancies")?,
        replacements: parse_field(fields[7], "replacements")?,
    })
}

/// `³ label ³ d ³ v ³ r ³ i ³` with a non-numeric label.
fn cascade_totals(line: &str) -> Option<[u32; 4]> {
    let trimmed = line.trim();
    if !trimmed.starts_with(SEPARATOR) {
        return None;
    }
    let tokens: Vec<&str> = trimmed
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();
    let [label, rest @ ..] = tokens.as_slice() else {
        return None;
    };
    if label.parse::<u32>().is_ok() || rest.len() < 4 {
        return None;
    }
    let counts = &rest[rest.len() - 4..];
    let mut values = [0_u32; 4];
    for (value, token) in values.iter_mut().zip(counts) {
        *value = token.parse().ok()?;
    }
    Some(values)
}

/// Positional read of the first twelve decimal tokens in the footer.
fn parse_summary(footer: &str) -> SrimResult<IonSummary> {
    let values = decimal_regex()?
        .find_iter(footer)
        .map(|found| {
            found
                .as_str()
                .parse::<f64>()
                .map_err(|_| summary_error(format!("malformed number '{}'", found.as_str())))
        })
        .collect::<SrimResult<Vec<_>>>()?;

    if values.len() > IonSummary::FIELD_COUNT {
        tracing::warn!(
            found = values.len(),
            expected = IonSummary::FIELD_COUNT,
            "ion footer has extra numbers; reading the first twelve"
        );
    }
    let found = values.len();
    let fields: [f64; IonSummary::FIELD_COUNT] = values
        .into_iter()
        .take(IonSummary::FIELD_COUNT)
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| {
            summary_error(format!(
                "ion footer has {found} numbers, expected {}",
                IonSummary::FIELD_COUNT
            ))
        })?;
    Ok(IonSummary::from_values(fields))
}

fn decimal_regex() -> SrimResult<&'static Regex> {
    static REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    REGEX
        .get_or_init(|| Regex::new(r"[-+]?\d+\.\d*(?:[eE][-+]?\d+)?"))
        .as_ref()
        .map_err(pattern_error)
}

fn parse_field<T: std::str::FromStr>(token: &str, field: &str) -> SrimResult<T> {
    token
        .trim()
        .parse::<T>()
        .map_err(|_| record_error(format!("malformed {field} '{token}'")))
}

fn record_error(message: impl Into<String>) -> SrimError {
    SrimError::parse("PARSE.COLLISION_RECORD", message)
}

fn summary_error(message: impl Into<String>) -> SrimError {
    SrimError::parse("PARSE.COLLISION_FOOTER", message)
}

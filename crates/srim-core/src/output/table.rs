use serde::Serialize;

/// Depth bins written by TRIM for every distribution table.
pub const TABLE_ROWS: usize = 100;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("table not found")]
    NotFound,
    #[error("table has {actual} rows, expected {expected}")]
    ShortTable { expected: usize, actual: usize },
    #[error("table row {row} has malformed numeric token '{token}'")]
    MalformedToken { row: usize, token: String },
    #[error("table row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("table has {actual} columns, expected at least {minimum}")]
    TooFewColumns { minimum: usize, actual: usize },
}

/// Column-major numeric table; column 0 is always depth [Angstrom].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthTable {
    columns: Vec<Vec<f64>>,
}

impl DepthTable {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    pub fn require_columns(&self, minimum: usize) -> Result<(), TableError> {
        if self.columns.len() < minimum {
            return Err(TableError::TooFewColumns {
                minimum,
                actual: self.columns.len(),
            });
        }
        Ok(())
    }

    pub fn into_columns(self) -> Vec<Vec<f64>> {
        self.columns
    }
}

/// Reads the table following the last dashed column divider that comes after
/// a line carrying a run of `=`, titled or not. Exactly `rows` non-blank lines
/// are consumed.
pub fn parse_depth_table(text: &str, rows: usize) -> Result<DepthTable, TableError> {
    let body = locate_table_body(text).ok_or(TableError::NotFound)?;

    let mut columns: Vec<Vec<f64>> = Vec::new();
    let mut parsed = 0;
    for line in body.lines().filter(|line| !line.trim().is_empty()).take(rows) {
        let values = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| TableError::MalformedToken {
                        row: parsed,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if parsed == 0 {
            columns = vec![Vec::with_capacity(rows); values.len()];
        } else if values.len() != columns.len() {
            return Err(TableError::RaggedRow {
                row: parsed,
                expected: columns.len(),
                actual: values.len(),
            });
        }
        for (column, value) in columns.iter_mut().zip(values) {
            column.push(value);
        }
        parsed += 1;
    }

    if parsed < rows {
        return Err(TableError::ShortTable {
            expected: rows,
            actual: parsed,
        });
    }
    Ok(DepthTable { columns })
}

fn locate_table_body(text: &str) -> Option<&str> {
    let mut seen_rule = false;
    let mut body_start = None;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let end = offset + line.len();
        if has_equals_run(line) {
            seen_rule = true;
        } else if seen_rule && is_column_divider(line) {
            body_start = Some(end);
        }
        offset = end;
    }
    body_start.map(|start| &text[start..])
}

pub(crate) fn is_equals_rule(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '=')
}

fn has_equals_run(line: &str) -> bool {
    line.contains("===")
}

fn is_column_divider(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c == '-' || c.is_whitespace()) {
        return false;
    }
    trimmed.split_whitespace().count() >= 2
}

#[cfg(test)]
mod tests {
    use super::{TableError, parse_depth_table};

    fn table_text(rows: usize) -> String {
        let mut text = String::from(
            " ======= header =======\r\n  DEPTH   IONS   RECOILS\r\n-----------  ----------  ----------\r\n",
        );
        for row in 0..rows {
            text.push_str(&format!(
                "{:.2}   {:.4E}  .{}E-01\r\n",
                (row + 1) as f64 * 10.0,
                row as f64 * 0.5,
                row + 1
            ));
        }
        text
    }

    #[test]
    fn reads_requested_rows_as_columns() {
        let table = parse_depth_table(&table_text(100), 100).expect("table");
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 100);
        assert_eq!(table.column(0).expect("depth")[0], 10.0);
        assert_eq!(table.column(1).expect("ions")[2], 1.0);
        assert!((table.column(2).expect("recoils")[0] - 0.01).abs() < 1.0e-12);
    }

    #[test]
    fn trailing_text_after_rows_is_ignored() {
        let mut text = table_text(100);
        text.push_str("\r\n To convert to Energy Lost - multiply by Average Binding Energy\r\n");
        assert!(parse_depth_table(&text, 100).is_ok());
    }

    #[test]
    fn short_table_is_rejected() {
        let error = parse_depth_table(&table_text(99), 100).expect_err("short table");
        assert_eq!(
            error,
            TableError::ShortTable {
                expected: 100,
                actual: 99
            }
        );
    }

    #[test]
    fn titled_rule_precedes_table() {
        let text = " ==== Recoil/Damage Calculations made with Full Cascades ====\r\n\
                    -----  -----\r\n1.0 2.0\r\n";
        let table = parse_depth_table(text, 1).expect("titled rule starts the header");
        assert_eq!(table.column(1).expect("values"), [2.0]);
        assert!(!super::is_equals_rule(" ======= header ======="));
    }

    #[test]
    fn missing_divider_is_not_found() {
        let text = "no header here\r\n1.0 2.0\r\n";
        assert_eq!(
            parse_depth_table(text, 1).expect_err("no divider"),
            TableError::NotFound
        );
        let no_rule = "-----  -----\r\n1.0 2.0\r\n";
        assert_eq!(
            parse_depth_table(no_rule, 1).expect_err("divider without rule"),
            TableError::NotFound
        );
    }

    #[test]
    fn malformed_and_ragged_rows_are_rejected() {
        let base = " =====\r\n-----  -----\r\n";
        let malformed = format!("{base}1.0 abc\r\n");
        assert!(matches!(
            parse_depth_table(&malformed, 1),
            Err(TableError::MalformedToken { row: 0, .. })
        ));

        let ragged = format!("{base}1.0 2.0\r\n3.0\r\n");
        assert!(matches!(
            parse_depth_table(&ragged, 2),
            Err(TableError::RaggedRow { row: 1, .. })
        ));
    }
}

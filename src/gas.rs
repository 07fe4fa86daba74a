use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::*;

/// Specific heat used when a gas is not in the table (cal/(g·°C), air).
pub const FALLBACK_SPECIFIC_HEAT: f64 = 0.240;
/// Correction factor used when a gas is not in the table.
pub const FALLBACK_CORRECTION_FACTOR: f64 = 1.030;

const COL_NAME: &str = "Gas Name";
const COL_SYMBOL: &str = "Symbol";
const COL_SPECIFIC_HEAT: &str = "Specific Heat";
const COL_CORRECTION_FACTOR: &str = "Correction Factor";

const BUNDLED_GAS_DATA: &str = include_str!("../data/gas_data.csv");

// ── Records ─────────────────────────────────────────────────────────

/// Properties of a single gas as listed in the MFC gas table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasRecord {
    pub name: String,
    pub symbol: String,
    /// Specific heat at 0 °C (cal/(g·°C))
    pub specific_heat: f64,
    /// MFC correction factor relative to the calibration gas
    pub correction_factor: f64,
}

impl GasRecord {
    /// Record used when a lookup misses.  `name` is kept for reporting.
    pub fn fallback(name: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: String::new(),
            specific_heat: FALLBACK_SPECIFIC_HEAT,
            correction_factor: FALLBACK_CORRECTION_FACTOR,
        }
    }

    /// Case-insensitive match against the name or the symbol.  Empty
    /// fields and empty identifiers never match.
    pub fn matches(&self, identifier: &str) -> bool {
        if identifier.is_empty() {
            return false;
        }
        [&self.name, &self.symbol]
            .into_iter()
            .any(|key| !key.is_empty() && key.eq_ignore_ascii_case(identifier))
    }
}

impl std::fmt::Display for GasRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.symbol.is_empty() {
            write!(f, "{}", self.name)?;
        } else {
            write!(f, "{} ({})", self.name, self.symbol)?;
        }
        write!(f, " cp={:.4} cal/(g·°C) cf={:.3}", self.specific_heat, self.correction_factor)
    }
}

/// Outcome of [`GasTable::lookup`].  A miss still carries a usable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasLookup {
    pub record: GasRecord,
    pub found: bool,
}

// ── Table ───────────────────────────────────────────────────────────

/// Read-only table of gas properties, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GasTable {
    records: Vec<GasRecord>,
}

impl GasTable {
    /// Load a table from a delimited text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FlowError::DataLoad(format!(
                "{} does not exist",
                path.display()
            )));
        }
        let text = fs::read_to_string(path)
            .map_err(|e| FlowError::DataLoad(format!("{}: {e}", path.display())))?;
        let table = Self::parse(&text)
            .map_err(|e| match e {
                FlowError::DataLoad(msg) => FlowError::DataLoad(format!("{}: {msg}", path.display())),
                other => other,
            })?;
        debug!(path = %path.display(), gases = table.len(), "loaded gas table");
        Ok(table)
    }

    /// The reference table shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_GAS_DATA)
    }

    /// Parse comma-separated text whose header names the four gas columns.
    ///
    /// Columns may appear in any order and extra columns are ignored.
    /// Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_start_matches('\u{feff}')))
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| FlowError::DataLoad("source is empty (no header row)".into()))?;
        let header = split_fields(header);
        let columns = Columns::locate(&header)?;

        let mut records = Vec::new();
        for (line_no, line) in lines {
            let fields = split_fields(line);
            records.push(columns.record(&fields, line_no)?);
        }
        Ok(Self { records })
    }

    /// Resolve a gas by name or symbol, falling back to default properties.
    pub fn lookup(&self, identifier: &str) -> GasLookup {
        let identifier = identifier.trim();
        match self.get(identifier) {
            Some(record) => GasLookup {
                record: record.clone(),
                found: true,
            },
            None => {
                debug!(identifier, "gas not in table, using fallback properties");
                GasLookup {
                    record: GasRecord::fallback(identifier),
                    found: false,
                }
            }
        }
    }

    /// First record whose name or symbol matches, ignoring ASCII case.
    pub fn get(&self, identifier: &str) -> Option<&GasRecord> {
        let identifier = identifier.trim();
        self.records.iter().find(|r| r.matches(identifier))
    }

    pub fn iter(&self) -> impl Iterator<Item = &GasRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Parsing helpers ─────────────────────────────────────────────────

/// Positions of the required columns within a row.
struct Columns {
    name: usize,
    symbol: usize,
    specific_heat: usize,
    correction_factor: usize,
}

impl Columns {
    fn locate(header: &[String]) -> Result<Self> {
        let required = [COL_NAME, COL_SYMBOL, COL_SPECIFIC_HEAT, COL_CORRECTION_FACTOR];
        let positions =
            required.map(|wanted| header.iter().position(|h| h.eq_ignore_ascii_case(wanted)));

        if let [Some(name), Some(symbol), Some(specific_heat), Some(correction_factor)] = positions {
            return Ok(Self {
                name,
                symbol,
                specific_heat,
                correction_factor,
            });
        }

        let missing: Vec<&str> = required
            .iter()
            .zip(positions)
            .filter(|(_, pos)| pos.is_none())
            .map(|(col, _)| *col)
            .collect();
        Err(FlowError::DataLoad(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )))
    }

    fn record(&self, fields: &[String], line_no: usize) -> Result<GasRecord> {
        let field = |idx: usize, col: &str| {
            fields.get(idx).ok_or_else(|| {
                FlowError::DataLoad(format!("line {line_no}: missing value for '{col}'"))
            })
        };
        let number = |idx: usize, col: &str| -> Result<f64> {
            let raw = field(idx, col)?;
            let value: f64 = raw.parse().map_err(|_| {
                FlowError::DataLoad(format!("line {line_no}: '{col}' is not a number: {raw:?}"))
            })?;
            if !value.is_finite() {
                return Err(FlowError::DataLoad(format!(
                    "line {line_no}: '{col}' must be finite, got {value}"
                )));
            }
            Ok(value)
        };

        let name = field(self.name, COL_NAME)?;
        if name.trim().is_empty() {
            return Err(FlowError::DataLoad(format!(
                "line {line_no}: '{COL_NAME}' is empty"
            )));
        }

        Ok(GasRecord {
            name: name.clone(),
            symbol: field(self.symbol, COL_SYMBOL)?.clone(),
            specific_heat: number(self.specific_heat, COL_SPECIFIC_HEAT)?,
            correction_factor: number(self.correction_factor, COL_CORRECTION_FACTOR)?,
        })
    }
}

/// Split one comma-separated line.  Double-quoted fields may contain
/// commas, and `""` inside quotes is a literal quote.  Unquoted fields are
/// trimmed.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
                quoted = true;
            }
            ',' if !in_quotes => {
                fields.push(finish_field(&mut current, quoted));
                quoted = false;
            }
            _ => current.push(c),
        }
    }
    fields.push(finish_field(&mut current, quoted));
    fields
}

fn finish_field(current: &mut String, quoted: bool) -> String {
    let field = std::mem::take(current);
    if quoted { field } else { field.trim().to_string() }
}

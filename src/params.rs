//! Operator parameters: documented defaults, valid ranges and the
//! validate-or-default rule applied to raw text input.
//!
//! Nothing here fails.  Blank, unparsable or out-of-range input falls back
//! to the parameter's default and the [`Resolved`] variant says why, so
//! the caller can warn.

use crate::gas::{GasLookup, GasTable};

/// Gas used when none is given.
pub const DEFAULT_GAS: &str = "air";

/// A numeric parameter with its default and optional bounds (inclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub unit: &'static str,
    pub example: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub default: f64,
}

pub const TEMPERATURE: ParamSpec = ParamSpec {
    name: "temperature",
    unit: "°C",
    example: "10 for 10 degrees C",
    min: Some(0.0),
    max: Some(30.0),
    default: 15.0,
};

pub const HUMIDITY: ParamSpec = ParamSpec {
    name: "humidity",
    unit: "%",
    example: "50 for 50%",
    min: Some(0.0),
    max: Some(100.0),
    default: 50.0,
};

pub const PRESSURE: ParamSpec = ParamSpec {
    name: "pressure",
    unit: "mmHg",
    example: "760 at sea level",
    min: None,
    max: None,
    default: 760.0,
};

pub const DESIRED_FLOW: ParamSpec = ParamSpec {
    name: "desired flow rate",
    unit: "sccm",
    example: "100 sccm",
    min: Some(0.0),
    max: Some(1200.0),
    default: 100.0,
};

/// How a parameter value was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// Parsed and within range.
    Given(f64),
    /// No input, default used.
    Defaulted(f64),
    /// Parsed but outside `[min, max]`, default used.
    OutOfRange { value: f64, default: f64 },
    /// Not a finite number, default used.
    Invalid { input: String, default: f64 },
}

impl Resolved {
    pub fn value(&self) -> f64 {
        match self {
            Resolved::Given(v) | Resolved::Defaulted(v) => *v,
            Resolved::OutOfRange { default, .. } | Resolved::Invalid { default, .. } => *default,
        }
    }

    /// `true` when the operator's input was rejected.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolved::OutOfRange { .. } | Resolved::Invalid { .. })
    }
}

impl ParamSpec {
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// Validate raw text input, substituting the default when needed.
    pub fn resolve(&self, input: Option<&str>) -> Resolved {
        let raw = match input.map(str::trim) {
            None | Some("") => return Resolved::Defaulted(self.default),
            Some(raw) => raw,
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => self.check(value),
            _ => Resolved::Invalid {
                input: raw.to_string(),
                default: self.default,
            },
        }
    }

    /// Range-check an already numeric value.
    pub fn check(&self, value: f64) -> Resolved {
        if !value.is_finite() {
            return Resolved::Invalid {
                input: value.to_string(),
                default: self.default,
            };
        }
        if self.contains(value) {
            Resolved::Given(value)
        } else {
            Resolved::OutOfRange {
                value,
                default: self.default,
            }
        }
    }

    /// Human-readable range, e.g. `[0, 30]`.
    pub fn range(&self) -> String {
        let fmt = |bound: Option<f64>, open: &str| bound.map_or(open.to_string(), |b| b.to_string());
        format!("[{}, {}]", fmt(self.min, "-inf"), fmt(self.max, "inf"))
    }
}

/// Resolve the gas identifier, defaulting to [`DEFAULT_GAS`] on blank
/// input.  Returns the lookup and whether the default was used.
pub fn resolve_gas(table: &GasTable, input: Option<&str>) -> (GasLookup, bool) {
    match input.map(str::trim) {
        None | Some("") => (table.lookup(DEFAULT_GAS), true),
        Some(name) => (table.lookup(name), false),
    }
}

use serde::{Deserialize, Serialize};

use crate::gas::GasRecord;
use crate::params;

// ── Ambient conditions ──────────────────────────────────────────────

/// Ambient conditions at the MFC inlet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentInputs {
    /// Air temperature (°C)
    pub temperature_c: f64,
    /// Relative humidity (%, 0–100)
    pub relative_humidity_pct: f64,
    /// Barometric pressure at sea level (mmHg)
    pub pressure_mmhg: f64,
}

impl Default for EnvironmentInputs {
    fn default() -> Self {
        Self {
            temperature_c: params::TEMPERATURE.default,
            relative_humidity_pct: params::HUMIDITY.default,
            pressure_mmhg: params::PRESSURE.default,
        }
    }
}

impl std::fmt::Display for EnvironmentInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "T={}°C Rh={}% p={}mmHg",
            self.temperature_c, self.relative_humidity_pct, self.pressure_mmhg
        )
    }
}

// ── Pipeline input ──────────────────────────────────────────────────

/// Everything one setpoint calculation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRequest {
    pub gas: GasRecord,
    pub environment: EnvironmentInputs,
    /// Flow the user wants delivered (sccm)
    pub desired_flow_sccm: f64,
}

// ── Pipeline output ─────────────────────────────────────────────────

/// Result of a setpoint calculation.
///
/// | Field                 | Unit          |
/// |-----------------------|---------------|
/// | density               | g/L           |
/// | actual_specific_heat  | cal/(g·°C)    |
/// | gcf                   | dimensionless |
/// | actual_flow_sccm      | sccm          |
/// | corrected_flow_sccm   | sccm          |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    pub density: f64,
    pub actual_specific_heat: f64,
    pub gcf: f64,
    /// Flow the MFC would deliver uncorrected (`gcf · 100`)
    pub actual_flow_sccm: f64,
    /// Setpoint to program into the MFC
    pub corrected_flow_sccm: f64,
}

impl std::fmt::Display for FlowResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "rho    = {:.6} g/L", self.density)?;
        writeln!(f, "cp     = {:.6} cal/(g·°C)", self.actual_specific_heat)?;
        writeln!(f, "GCF    = {:.6}", self.gcf)?;
        writeln!(f, "Q_act  = {:.4} sccm", self.actual_flow_sccm)?;
        write!(f, "Q_set  = {:.4} sccm", self.corrected_flow_sccm)
    }
}

// ── Report ──────────────────────────────────────────────────────────

/// A request paired with its result, as shown to the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowReport {
    pub request: FlowRequest,
    /// `false` when the gas was not in the table and fallback
    /// properties were used
    pub gas_found: bool,
    pub result: FlowResult,
}

impl std::fmt::Display for FlowReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let env = &self.request.environment;
        writeln!(f, "  SET GAS FLOW TO: {:.4} sccm", self.result.corrected_flow_sccm)?;
        writeln!(f)?;
        write!(f, "  Gas name:     {}", self.request.gas.name)?;
        if !self.gas_found {
            write!(f, " (not in table, default properties)")?;
        }
        writeln!(f)?;
        writeln!(f, "  Temperature:  {} °C", env.temperature_c)?;
        writeln!(f, "  Humidity:     {} %", env.relative_humidity_pct)?;
        writeln!(f, "  Pressure:     {} mmHg", env.pressure_mmhg)?;
        writeln!(f, "  Desired flow: {} sccm", self.request.desired_flow_sccm)?;
        writeln!(f, "  Density:      {:.6} g/L", self.result.density)?;
        write!(f, "  GCF:          {:.6}", self.result.gcf)
    }
}

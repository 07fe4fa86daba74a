//! Setpoint correction and the end-to-end calculation pipeline.

use converter::{Converter, UnitSystem};
use tracing::debug;

use crate::correction::{actual_specific_heat, gas_correction_factor};
use crate::error::*;
use crate::gas::GasRecord;
use crate::properties::*;
use crate::psychrometrics::*;

/// Scale from the hPa-based density relation to g/L.
pub const DENSITY_SCALE: f64 = 100.0;

/// Scale from GCF to the flow an uncorrected MFC delivers (sccm).
pub const FLOW_SCALE: f64 = 100.0;

/// Flow the MFC actually delivers for a given GCF (sccm).
pub fn actual_flow(gcf: f64) -> f64 {
    gcf * FLOW_SCALE
}

/// Reflect the desired flow about the actual flow.
///
/// An MFC that over-delivers by Δ is set Δ below the desired flow and vice
/// versa: `2 · desired − actual`.  When both are equal the setpoint is the
/// desired flow.
pub fn corrected_flow(gcf: f64, desired_flow_sccm: f64) -> f64 {
    2.0 * desired_flow_sccm - actual_flow(gcf)
}

/// Run the full pipeline for one gas and set of ambient conditions.
///
/// Temperature in °C, humidity in %, pressure in mmHg, flow in sccm.
pub fn compute_flow(
    gas: &GasRecord,
    temperature_c: f64,
    humidity_pct: f64,
    pressure_mmhg: f64,
    desired_flow_sccm: f64,
) -> Result<FlowResult> {
    ensure_finite("temperature", temperature_c, FlowError::InvalidInput)?;
    ensure_finite("humidity", humidity_pct, FlowError::InvalidInput)?;
    ensure_finite("pressure", pressure_mmhg, FlowError::InvalidInput)?;
    ensure_finite("desired flow", desired_flow_sccm, FlowError::InvalidInput)?;

    let conv = Converter::new(UnitSystem::ambient());
    let temp_k = conv.t_to_model(temperature_c);
    let total_hpa = conv.p_to_model(pressure_mmhg);

    let saturated = saturated_vapor_pressure(temperature_c);
    let vapor = actual_vapor_pressure(saturated, humidity_pct);
    let dry = dry_air_pressure(vapor, total_hpa);

    let density = ensure_finite(
        "density",
        air_density(dry, vapor, temp_k) * DENSITY_SCALE,
        FlowError::Computation,
    )?;
    let cp = ensure_finite(
        "specific heat",
        actual_specific_heat(gas.specific_heat, temperature_c),
        FlowError::Computation,
    )?;
    let gcf = gas_correction_factor(density, cp, gas.correction_factor)?;

    let actual = actual_flow(gcf);
    let corrected = ensure_finite(
        "corrected flow",
        corrected_flow(gcf, desired_flow_sccm),
        FlowError::Computation,
    )?;

    debug!(
        gas = %gas.name,
        saturated_hpa = saturated,
        vapor_hpa = vapor,
        dry_hpa = dry,
        density,
        gcf,
        corrected,
        "computed flow setpoint"
    );

    Ok(FlowResult {
        density,
        actual_specific_heat: cp,
        gcf,
        actual_flow_sccm: actual,
        corrected_flow_sccm: corrected,
    })
}

impl FlowRequest {
    pub fn new(gas: GasRecord, environment: EnvironmentInputs, desired_flow_sccm: f64) -> Self {
        Self {
            gas,
            environment,
            desired_flow_sccm,
        }
    }

    /// Run the pipeline on this request.
    pub fn compute(&self) -> Result<FlowResult> {
        compute_flow(
            &self.gas,
            self.environment.temperature_c,
            self.environment.relative_humidity_pct,
            self.environment.pressure_mmhg,
            self.desired_flow_sccm,
        )
    }
}

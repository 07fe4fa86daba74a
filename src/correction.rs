//! Gas correction factor (GCF) for a thermal MFC.

use crate::error::*;

/// Specific heat drift per °C (cal/(g·°C²)), fitted on air over 0–30 °C.
pub const SPECIFIC_HEAT_SLOPE: f64 = 6.429e-6;

/// Numerator constant of the GCF relation (cal/L·°C, calibration gas).
pub const GCF_REFERENCE: f64 = 0.3106;

/// Specific heat at `temp_c`, starting from the tabulated 0 °C value.
///
/// The linear drift is only fitted for 0–30 °C; outside that range the
/// result is an extrapolation.
pub fn actual_specific_heat(base_specific_heat: f64, temp_c: f64) -> f64 {
    SPECIFIC_HEAT_SLOPE * temp_c + base_specific_heat
}

/// Gas correction factor relative to the calibration gas.
///
/// `GCF = (0.3106 · cf) / (ρ · cp)` with density in g/L and specific heat
/// in cal/(g·°C).
pub fn gas_correction_factor(
    density_g_per_l: f64,
    actual_specific_heat: f64,
    correction_factor: f64,
) -> Result<f64> {
    ensure_finite("density", density_g_per_l, FlowError::Computation)?;
    ensure_finite("specific heat", actual_specific_heat, FlowError::Computation)?;
    ensure_finite("correction factor", correction_factor, FlowError::Computation)?;

    let denominator = density_g_per_l * actual_specific_heat;
    if denominator == 0.0 {
        return Err(FlowError::Computation(format!(
            "division by zero in GCF (density = {density_g_per_l}, specific heat = {actual_specific_heat})"
        )));
    }

    let gcf = (GCF_REFERENCE * correction_factor) / denominator;
    ensure_finite("GCF", gcf, FlowError::Computation)?;
    Ok(gcf)
}

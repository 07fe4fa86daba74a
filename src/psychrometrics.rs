//! Moist-air relations used to estimate the density of the gas stream.
//!
//! Pressures are in **hPa**, temperatures in **°C** unless a name says
//! otherwise.  Range checks belong to the caller.

/// Specific gas constant of dry air (J/(kg·K))
pub const R_DRY_AIR: f64 = 287.058_31;
/// Specific gas constant of water vapor (J/(kg·K))
pub const R_WATER_VAPOR: f64 = 461.496_4;

/// Saturation vapor pressure of water over liquid (hPa), Tetens form.
///
/// `e_s(t) = 6.1078 · 10^(7.5 t / (t + 237.3))`
pub fn saturated_vapor_pressure(temp_c: f64) -> f64 {
    6.1078 * 10f64.powf(7.5 * temp_c / (temp_c + 237.3))
}

/// Partial pressure of water vapor at the given relative humidity (hPa).
pub fn actual_vapor_pressure(saturated_hpa: f64, humidity_pct: f64) -> f64 {
    let relative_humidity = humidity_pct / 100.0;
    saturated_hpa * relative_humidity
}

/// Partial pressure of the dry-air fraction (hPa).
///
/// `total_hpa` must already be in hPa; barometer readings in mmHg go
/// through [`converter::Converter::p_to_model`] first.
pub fn dry_air_pressure(vapor_hpa: f64, total_hpa: f64) -> f64 {
    total_hpa - vapor_hpa
}

/// Density of moist air from its partial pressures.
///
/// With pressures in hPa the result is kg/m³ divided by 100; the flow
/// pipeline rescales it by 100 before use.
pub fn air_density(dry_air_hpa: f64, vapor_hpa: f64, temp_k: f64) -> f64 {
    dry_air_hpa / (R_DRY_AIR * temp_k) + vapor_hpa / (R_WATER_VAPOR * temp_k)
}

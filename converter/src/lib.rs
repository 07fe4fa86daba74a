//! Unit conversion for the flow correction model.
//!
//! The psychrometric formulas work in **K** and **hPa**.  Ambient readings
//! are usually taken in **°C** and **mmHg** (barometer at sea level).  This
//! crate converts between the two so the model never sees mixed units.
//!
//! # Presets
//!
//! | Preset      | T  | P    |
//! |-------------|----|------|
//! | `model()`   | K  | hPa  |
//! | `ambient()` | °C | mmHg |
//!
//! # Builder
//!
//! ```
//! use converter::{UnitSystem, TempUnit, PressUnit};
//!
//! let units = UnitSystem::new()
//!     .temperature(TempUnit::Celsius)
//!     .pressure(PressUnit::MmHg);
//! assert_eq!(units, UnitSystem::ambient());
//! ```

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// hPa per mmHg as used by the flow correction model.
///
/// The exact value is 1.333 224; the model was fitted with the rounded
/// factor, so known-good outputs depend on it.
pub const HPA_PER_MMHG: f64 = 1.333;

// ────────────────────────────────────────────────────────────────────
//  Unit enums
// ────────────────────────────────────────────────────────────────────

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    /// Kelvin (model native)
    Kelvin,
    /// Degrees Celsius
    Celsius,
}

/// Pressure unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressUnit {
    /// Hectopascal (model native, = millibar)
    HPa,
    /// Millimetres of mercury
    MmHg,
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem
// ────────────────────────────────────────────────────────────────────

/// Describes the units ambient readings are given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSystem {
    pub temperature: TempUnit,
    pub pressure:    PressUnit,
}

impl UnitSystem {
    /// Start from model-native units.  Use the builder methods to change
    /// individual quantities.
    pub fn new() -> Self { Self::model() }

    // ── Presets ──────────────────────────────────────────────────────

    /// Model native: K, hPa.
    pub fn model() -> Self {
        Self {
            temperature: TempUnit::Kelvin,
            pressure:    PressUnit::HPa,
        }
    }

    /// Ambient readings: °C, mmHg.
    pub fn ambient() -> Self {
        Self {
            temperature: TempUnit::Celsius,
            pressure:    PressUnit::MmHg,
        }
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn temperature(mut self, u: TempUnit) -> Self { self.temperature = u; self }
    pub fn pressure(mut self, u: PressUnit) -> Self { self.pressure = u; self }
}

impl Default for UnitSystem {
    fn default() -> Self { Self::model() }
}

// ────────────────────────────────────────────────────────────────────
//  Converter
// ────────────────────────────────────────────────────────────────────

/// Converts between a [`UnitSystem`] and the model's K + hPa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    pub units: UnitSystem,
}

impl Converter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    // ── Temperature ─────────────────────────────────────────────────

    /// User → model (K)
    pub fn t_to_model(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Kelvin  => t,
            TempUnit::Celsius => t + KELVIN_OFFSET,
        }
    }

    // ── Pressure ────────────────────────────────────────────────────

    /// User → model (hPa)
    pub fn p_to_model(&self, p: f64) -> f64 {
        match self.units.pressure {
            PressUnit::HPa  => p,
            PressUnit::MmHg => p * HPA_PER_MMHG,
        }
    }
}

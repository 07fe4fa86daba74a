//! # mfc_flow
//!
//! Corrected setpoints for thermal **Mass Flow Controllers** delivering a
//! gas other than the one they were calibrated with, under real ambient
//! conditions.
//!
//! ## Pipeline
//!
//! * **Psychrometrics**: saturation and partial vapor pressures, dry-air
//!   pressure, moist-air density
//! * **Gas correction**: temperature-adjusted specific heat and the gas
//!   correction factor (GCF)
//! * **Flow adjustment**: reflect the desired flow about the flow the MFC
//!   would actually deliver
//! * **Gas table**: name/symbol lookup with a default-gas fallback
//!
//! ## Quick example
//!
//! ```
//! use mfc_flow::{GasTable, compute_flow};
//!
//! let table = GasTable::bundled()?;
//! let chlorine = table.lookup("Cl2");
//! assert!(chlorine.found);
//!
//! // 20 °C, 40 % RH, 755 mmHg, 250 sccm wanted
//! let result = compute_flow(&chlorine.record, 20.0, 40.0, 755.0, 250.0)?;
//! println!("set MFC to {:.1} sccm", result.corrected_flow_sccm);
//! # Ok::<(), mfc_flow::FlowError>(())
//! ```
//!
//! ## Unknown gases
//!
//! A miss is not an error: [`GasTable::lookup`] returns default properties
//! (cp = 0.240, cf = 1.030) with `found == false`.
//!
//! ```
//! use mfc_flow::GasTable;
//!
//! let table = GasTable::bundled()?;
//! let lookup = table.lookup("unobtainium");
//! assert!(!lookup.found);
//! assert_eq!(lookup.record.correction_factor, 1.030);
//! # Ok::<(), mfc_flow::FlowError>(())
//! ```

// ── Modules ──────────────────────────────────────────────────────────
pub mod config;
pub mod correction;
pub mod error;
pub mod flow;
pub mod gas;
pub mod params;
pub mod properties;
pub mod psychrometrics;

// ── Public re-exports ────────────────────────────────────────────────
pub use error::{FlowError, Result};
pub use flow::{actual_flow, compute_flow, corrected_flow};
pub use gas::{GasLookup, GasRecord, GasTable};
pub use properties::{EnvironmentInputs, FlowReport, FlowRequest, FlowResult};

pub use converter::{Converter, PressUnit, TempUnit, UnitSystem};

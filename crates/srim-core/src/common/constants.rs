//! Unit conversions between SI and the units the engine reads and writes.

/// Joules per electron-volt.
pub const EV: f64 = 1.602_18e-19_f64;
/// Kilograms per atomic mass unit.
pub const AMU: f64 = 1.660_54e-27_f64;
/// Electron-volts per kilo-electron-volt.
pub const EV_PER_KEV: f64 = 1_000.0_f64;

pub const DEFAULT_DISPLACEMENT_ENERGY: f64 = 25.0;
pub const DEFAULT_LATTICE_ENERGY: f64 = 0.0;
pub const DEFAULT_SURFACE_ENERGY: f64 = 3.0;

/// Tolerance used for composition and density comparisons.
pub const COMPOSITION_TOLERANCE: f64 = 1.0e-6;

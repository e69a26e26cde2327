//! TRIM and SR calculation options.
//!
//! Every option the engine input recognizes is a named field with a default and a
//! range check in `validate()`; nothing is looked up dynamically.

use crate::domain::{OutputKind, SrimError, SrimResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimSettings {
    pub description: String,
    pub reminders: u8,
    pub autosave: u8,
    /// 0-4 draw plots, 5 runs without graphics.
    pub plot_mode: u8,
    pub plot_xmin: f64,
    pub plot_xmax: f64,
    pub ranges: u8,
    pub backscattered: u8,
    pub transmit: u8,
    pub sputtered: u8,
    /// 0 none, 1 ion collisions only, 2 ions and recoil cascades.
    pub collisions: u8,
    pub exyz: f64,
    /// Degrees from the surface normal, [0, 90).
    pub angle_ions: f64,
    pub bragg_correction: f64,
    /// Seed handed to the engine; the engine picks one when absent.
    pub random_seed: Option<u32>,
    pub version: u8,
}

impl Default for TrimSettings {
    fn default() -> Self {
        Self {
            description: "srim-rs run".to_string(),
            reminders: 0,
            autosave: 0,
            plot_mode: 5,
            plot_xmin: 0.0,
            plot_xmax: 0.0,
            ranges: 0,
            backscattered: 0,
            transmit: 0,
            sputtered: 0,
            collisions: 0,
            exyz: 0.0,
            angle_ions: 0.0,
            bragg_correction: 1.0,
            random_seed: None,
            version: 0,
        }
    }
}

impl TrimSettings {
    pub fn validate(&self) -> SrimResult<()> {
        if self.description.contains('"') {
            return Err(setting_error(
                "INPUT.TRIM_DESCRIPTION",
                format!("description may not contain quotes: {}", self.description),
            ));
        }

        for (name, value) in [
            ("reminders", self.reminders),
            ("autosave", self.autosave),
            ("ranges", self.ranges),
            ("backscattered", self.backscattered),
            ("transmit", self.transmit),
            ("sputtered", self.sputtered),
            ("version", self.version),
        ] {
            check_range("INPUT.TRIM_FLAG", name, value, 0, 1)?;
        }
        check_range("INPUT.TRIM_PLOT_MODE", "plot_mode", self.plot_mode, 0, 5)?;
        check_range("INPUT.TRIM_COLLISIONS", "collisions", self.collisions, 0, 2)?;

        for (name, value) in [
            ("plot_xmin", self.plot_xmin),
            ("plot_xmax", self.plot_xmax),
            ("exyz", self.exyz),
        ] {
            check_non_negative("INPUT.TRIM_VALUE", name, value)?;
        }

        if self.plot_xmin > self.plot_xmax {
            return Err(setting_error(
                "INPUT.TRIM_PLOT_RANGE",
                format!(
                    "plot_xmin {} must be <= plot_xmax {}",
                    self.plot_xmin, self.plot_xmax
                ),
            ));
        }

        if !(0.0..90.0).contains(&self.angle_ions) {
            return Err(setting_error(
                "INPUT.TRIM_ANGLE",
                format!("angle_ions must be in [0, 90), got {}", self.angle_ions),
            ));
        }

        if !self.bragg_correction.is_finite() {
            return Err(setting_error(
                "INPUT.TRIM_BRAGG",
                format!("bragg_correction must be finite, got {}", self.bragg_correction),
            ));
        }

        Ok(())
    }
}

/// Damage calculation type, numbered as the engine numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CalculationMode {
    #[default]
    QuickKinchinPease,
    FullCascades,
    MonolayerSteps,
    TrimDatQuick,
    TrimDatFullCascades,
    NeutronRecoilCascades,
    NeutronMonolayerSteps,
}

impl CalculationMode {
    pub const fn code(self) -> u8 {
        match self {
            Self::QuickKinchinPease => 1,
            Self::FullCascades => 2,
            Self::MonolayerSteps => 3,
            Self::TrimDatQuick => 4,
            Self::TrimDatFullCascades => 5,
            Self::NeutronRecoilCascades => 6,
            Self::NeutronMonolayerSteps => 7,
        }
    }

    /// Damage is estimated with the Kinchin-Pease formula instead of full cascades.
    pub const fn is_kinchin_pease(self) -> bool {
        matches!(self, Self::QuickKinchinPease | Self::TrimDatQuick)
    }
}

impl TryFrom<u8> for CalculationMode {
    type Error = SrimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::QuickKinchinPease),
            2 => Ok(Self::FullCascades),
            3 => Ok(Self::MonolayerSteps),
            4 => Ok(Self::TrimDatQuick),
            5 => Ok(Self::TrimDatFullCascades),
            6 => Ok(Self::NeutronRecoilCascades),
            7 => Ok(Self::NeutronMonolayerSteps),
            other => Err(setting_error(
                "INPUT.TRIM_CALCULATION",
                format!("calculation must be 1..=7, got {other}"),
            )),
        }
    }
}

impl From<CalculationMode> for u8 {
    fn from(value: CalculationMode) -> Self {
        value.code()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimCalculation {
    pub mode: CalculationMode,
    pub number_ions: u32,
    pub settings: TrimSettings,
}

impl Default for TrimCalculation {
    fn default() -> Self {
        Self {
            mode: CalculationMode::QuickKinchinPease,
            number_ions: 1000,
            settings: TrimSettings::default(),
        }
    }
}

impl TrimCalculation {
    pub fn validate(&self) -> SrimResult<()> {
        self.settings.validate()
    }

    /// Output files the engine writes for this calculation.
    pub fn expected_outputs(&self) -> Vec<OutputKind> {
        let mut outputs = vec![
            OutputKind::Ioniz,
            OutputKind::Vacancy,
            OutputKind::EnergyToRecoils,
            OutputKind::Phonons,
            OutputKind::Range,
            OutputKind::Lateral,
            OutputKind::TrimOut,
        ];
        if !self.mode.is_kinchin_pease() {
            outputs.push(OutputKind::NoVacancy);
        }
        let flags = [
            (self.settings.ranges, OutputKind::Range3d),
            (self.settings.backscattered, OutputKind::Backscattered),
            (self.settings.transmit, OutputKind::Transmitted),
            (self.settings.sputtered, OutputKind::Sputtered),
            (self.settings.collisions, OutputKind::Collision),
        ];
        outputs.extend(
            flags
                .into_iter()
                .filter(|(flag, _)| *flag > 0)
                .map(|(_, kind)| kind),
        );
        outputs
    }
}

/// Units of the stopping table in the SR summary, numbered as in the engine input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StoppingUnitKind {
    #[default]
    EvPerAngstrom,
    KevPerMicron,
    MevPerMm,
    KevPerMicrogramCm2,
    MevPerMilligramCm2,
    KevPerMilligramCm2,
    EvPer1e15AtomsCm2,
    LssReduced,
}

impl StoppingUnitKind {
    pub const fn code(self) -> u8 {
        match self {
            Self::EvPerAngstrom => 1,
            Self::KevPerMicron => 2,
            Self::MevPerMm => 3,
            Self::KevPerMicrogramCm2 => 4,
            Self::MevPerMilligramCm2 => 5,
            Self::KevPerMilligramCm2 => 6,
            Self::EvPer1e15AtomsCm2 => 7,
            Self::LssReduced => 8,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EvPerAngstrom => "eV/Angstrom",
            Self::KevPerMicron => "keV/micron",
            Self::MevPerMm => "MeV/mm",
            Self::KevPerMicrogramCm2 => "keV/(ug/cm2)",
            Self::MevPerMilligramCm2 => "MeV/(mg/cm2)",
            Self::KevPerMilligramCm2 => "keV/(mg/cm2)",
            Self::EvPer1e15AtomsCm2 => "eV/(1E15 atoms/cm2)",
            Self::LssReduced => "L.S.S. reduced units",
        }
    }
}

impl TryFrom<u8> for StoppingUnitKind {
    type Error = SrimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::EvPerAngstrom),
            2 => Ok(Self::KevPerMicron),
            3 => Ok(Self::MevPerMm),
            4 => Ok(Self::KevPerMicrogramCm2),
            5 => Ok(Self::MevPerMilligramCm2),
            6 => Ok(Self::KevPerMilligramCm2),
            7 => Ok(Self::EvPer1e15AtomsCm2),
            8 => Ok(Self::LssReduced),
            other => Err(setting_error(
                "INPUT.SR_OUTPUT_TYPE",
                format!("output_type must be 1..=8, got {other}"),
            )),
        }
    }
}

impl From<StoppingUnitKind> for u8 {
    fn from(value: StoppingUnitKind) -> Self {
        value.code()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SrSettings {
    /// Lowest energy of the table [eV].
    pub energy_min: f64,
    pub output_type: StoppingUnitKind,
    pub output_filename: String,
    /// Bragg rule multiplier, 1.0 leaves stopping unchanged.
    pub correction: f64,
}

impl Default for SrSettings {
    fn default() -> Self {
        Self {
            energy_min: 1.0e3,
            output_type: StoppingUnitKind::EvPerAngstrom,
            output_filename: OutputKind::StoppingPower.file_name().to_string(),
            correction: 1.0,
        }
    }
}

impl SrSettings {
    pub fn validate(&self) -> SrimResult<()> {
        check_non_negative("INPUT.SR_VALUE", "energy_min", self.energy_min)?;
        check_non_negative("INPUT.SR_VALUE", "correction", self.correction)?;
        if self.output_filename.trim().is_empty() {
            return Err(setting_error(
                "INPUT.SR_FILENAME",
                "output_filename may not be empty",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsFileError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<SettingsFileError> for SrimError {
    fn from(error: SettingsFileError) -> Self {
        match &error {
            SettingsFileError::Read { .. } => {
                SrimError::io_system("IO.SETTINGS_READ", error.to_string())
            }
            SettingsFileError::Parse { .. } => {
                SrimError::validation("INPUT.SETTINGS_PARSE", error.to_string())
            }
        }
    }
}

pub fn load_trim_calculation(path: impl AsRef<Path>) -> SrimResult<TrimCalculation> {
    let calculation: TrimCalculation = read_json(path.as_ref())?;
    calculation.validate()?;
    Ok(calculation)
}

pub fn load_sr_settings(path: impl AsRef<Path>) -> SrimResult<SrSettings> {
    let settings: SrSettings = read_json(path.as_ref())?;
    settings.validate()?;
    Ok(settings)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SettingsFileError> {
    let source = fs::read_to_string(path).map_err(|source| SettingsFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| SettingsFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn check_range(code: &'static str, name: &str, value: u8, min: u8, max: u8) -> SrimResult<()> {
    if value < min || value > max {
        return Err(setting_error(
            code,
            format!("{name} must be in {min}..={max}, got {value}"),
        ));
    }
    Ok(())
}

fn check_non_negative(code: &'static str, name: &str, value: f64) -> SrimResult<()> {
    if !(value >= 0.0) {
        return Err(setting_error(
            code,
            format!("{name} must be >= 0, got {value}"),
        ));
    }
    Ok(())
}

fn setting_error(code: &'static str, message: impl Into<String>) -> SrimError {
    SrimError::validation(code, message)
}

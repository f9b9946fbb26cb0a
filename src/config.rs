//! Sheet settings, loaded from TOML.

use crate::error::{ColorError, Error, Result};
use crate::interpolation::solver::{AccelerationSolver, DEFAULT_MAX_ITERATIONS};
use crate::utils::color::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pen: PenSettings,
    pub smoothing: SmoothingSettings,
    pub palette: PaletteSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenSettings {
    /// 3 or 4 channel bytes.
    pub color: Vec<i32>,
    /// Stroke width of the curve tool.
    pub line_width: f64,
    /// Halo width relative to the ink width.
    pub outline_scale: f64,
    pub outline_color: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingSettings {
    /// Correction rounds before a segment falls back to a straight line.
    pub max_solver_iterations: usize,
    /// Pointer travel (px) at which the motion filter stops lagging behind.
    pub follow_distance: f64,
    /// Re-issue the last motion event after this long without a new one.
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub rgb: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub colors: Vec<PaletteEntry>,
}

impl Default for PenSettings {
    fn default() -> Self {
        Self {
            color: Color::BLUE.to_bytes(),
            line_width: 2.0,
            outline_scale: 3.0,
            outline_color: Color::WHITE.to_bytes(),
        }
    }
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            max_solver_iterations: DEFAULT_MAX_ITERATIONS,
            follow_distance: 30.0,
            tick_interval_ms: 33,
        }
    }
}

impl Default for PaletteSettings {
    fn default() -> Self {
        let entry = |name: &str, color: Color| PaletteEntry {
            name: name.to_string(),
            rgb: color.to_bytes(),
        };
        Self {
            colors: vec![
                entry("Blue", Color::BLUE),
                entry("Orange", Color::ORANGE),
                entry("Green", Color::GREEN),
            ],
        }
    }
}

impl Settings {
    /// Reject anything that would only fail once a stroke is under way.
    pub fn validate(&self) -> Result<()> {
        self.pen_color()?;
        self.outline_color()?;
        self.palette()?;
        if !(self.pen.line_width > 0.0) {
            return Err(Error::Invalid(format!(
                "line_width must be positive, got {}",
                self.pen.line_width
            )));
        }
        if !(self.pen.outline_scale >= 1.0) {
            return Err(Error::Invalid(format!(
                "outline_scale must be at least 1, got {}",
                self.pen.outline_scale
            )));
        }
        if !(self.smoothing.follow_distance > 0.0) {
            return Err(Error::Invalid(format!(
                "follow_distance must be positive, got {}",
                self.smoothing.follow_distance
            )));
        }
        if self.smoothing.tick_interval_ms == 0 {
            return Err(Error::Invalid("tick_interval_ms must be > 0".to_string()));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&content, path)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(|source| Error::Parse {
            path: PathBuf::from(path),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn pen_color(&self) -> std::result::Result<Color, ColorError> {
        Color::from_bytes(&self.pen.color)
    }

    pub fn outline_color(&self) -> std::result::Result<Color, ColorError> {
        Color::from_bytes(&self.pen.outline_color)
    }

    pub fn palette(&self) -> std::result::Result<Vec<(String, Color)>, ColorError> {
        self.palette
            .colors
            .iter()
            .map(|entry| Ok((entry.name.clone(), Color::from_bytes(&entry.rgb)?)))
            .collect()
    }

    pub fn solver(&self) -> AccelerationSolver {
        AccelerationSolver::new(self.smoothing.max_solver_iterations)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.smoothing.tick_interval_ms)
    }
}

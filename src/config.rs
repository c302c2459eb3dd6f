//! Configuration types shared by the dashboard, the viewer and the generator.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes. The binaries look for an optional `sigview.yaml` in the working
//! directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default config file name looked up by the binaries.
pub const CONFIG_FILE: &str = "sigview.yaml";

// ─────────────────────────────────────────────────────────────────────────────
// Input locations
// ─────────────────────────────────────────────────────────────────────────────

/// Where the loader looks for its three kinds of source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePaths {
    /// Hex-encoded raw/noisy capture.
    pub raw_input: PathBuf,
    /// Hex-encoded clean reference.
    pub clean_input: PathBuf,
    /// Directory of decimal-float processed outputs, one series per file.
    pub processed_dir: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            raw_input: PathBuf::from("input_data.txt"),
            clean_input: PathBuf::from("input_clean.txt"),
            processed_dir: PathBuf::from("files_in"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Controls
// ─────────────────────────────────────────────────────────────────────────────

/// Range and step of the vertical-separation slider. It always starts at 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetSlider {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub title: String,
}

impl Default for OffsetSlider {
    fn default() -> Self {
        Self {
            start: -500.0,
            end: 500.0,
            step: 10.0,
            title: "Vertical Separation (Stack Signals)".to_string(),
        }
    }
}

impl OffsetSlider {
    /// Clamp an offset into the slider range.
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(self.start.min(self.end), self.start.max(self.end))
    }

    /// Clamp, then round to the nearest multiple of `step`. Multiples are
    /// counted from zero so the reset offset is always reachable.
    pub fn snap(&self, offset: f64) -> f64 {
        let v = self.clamp(offset);
        if !(self.step.is_finite() && self.step > 0.0) {
            return v;
        }
        // `+ 0.0` turns a rounded -0.0 into 0.0
        self.clamp((v / self.step).round() * self.step) + 0.0
    }
}

/// Corner of the plot the legend is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendLocation {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    /// Initial state of the "Toggle Legend" control.
    pub visible: bool,
    pub location: LegendLocation,
    pub font_size_pt: f32,
    /// 0.0 is invisible, 1.0 is opaque.
    pub background_alpha: f32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            visible: true,
            location: LegendLocation::BottomRight,
            font_size_pt: 10.0,
            background_alpha: 0.6,
        }
    }
}

/// Stroke parameters shared by every series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub width: f32,
    pub alpha: f32,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            width: 2.0,
            alpha: 0.8,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DashboardConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration of the comparison dashboard.
///
/// | Field     | Purpose |
/// |-----------|---------|
/// | `sources` | Input locations |
/// | `output`  | Path of the generated HTML document |
/// | `slider`  | Stacking offset control |
/// | `legend`  | Legend placement and initial visibility |
/// | `line`    | Stroke width / opacity |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub sources: SourcePaths,
    pub output: PathBuf,
    /// Browser tab / native window title.
    pub page_title: String,
    /// Headline drawn above the plot.
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub slider: OffsetSlider,
    pub legend: LegendConfig,
    pub line: LineConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sources: SourcePaths::default(),
            output: PathBuf::from("signal_dashboard.html"),
            page_title: "Signal Viewer".to_string(),
            title: "FIR Filter Test - Interactive Comparison".to_string(),
            x_axis_label: "Sample Index".to_string(),
            y_axis_label: "Value".to_string(),
            slider: OffsetSlider::default(),
            legend: LegendConfig::default(),
            line: LineConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a YAML config file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        read_yaml(path.as_ref())
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Using config {}", path.display());
            Self::from_yaml_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SynthConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters of the test waveform generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub num_samples: usize,
    pub amplitude: f64,
    /// DC level the waveform is centred on.
    pub offset: f64,
    /// Standard deviation of the additive Gaussian noise.
    pub noise_level: f64,
    /// Largest representable ADC code; samples are clipped to `0..=adc_max`.
    pub adc_max: u32,
    /// Fixed RNG seed for reproducible noise. `None` draws from the OS.
    pub seed: Option<u64>,
    pub noisy_path: PathBuf,
    pub clean_path: PathBuf,
}

impl Default for SynthConfig {
    fn default() -> Self {
        let sources = SourcePaths::default();
        Self {
            num_samples: 100,
            amplitude: 1000.0,
            offset: 2048.0,
            noise_level: 200.0,
            adc_max: 4095,
            seed: None,
            noisy_path: sources.raw_input,
            clean_path: sources.clean_input,
        }
    }
}

impl SynthConfig {
    /// Load the `synth` section of a YAML config if the file exists.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct Wrapper {
            synth: SynthConfig,
        }
        let path = path.as_ref();
        if path.exists() {
            let w: Wrapper = read_yaml(path)?;
            Ok(w.synth)
        } else {
            Ok(Self::default())
        }
    }
}

fn read_yaml<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&text).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

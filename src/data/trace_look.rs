//! TraceLook: visual styling assigned to each registered series.

use egui::Color32;
use egui_plot::LineStyle;

use crate::data::source::SourceKind;

/// A named color token plus its RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor {
    /// CSS color token ("black", "#1f77b4", ...).
    pub token: &'static str,
    pub rgb: [u8; 3],
}

impl SeriesColor {
    pub const BLACK: SeriesColor = SeriesColor::new("black", [0, 0, 0]);
    pub const ORANGE: SeriesColor = SeriesColor::new("orange", [255, 165, 0]);

    pub const fn new(token: &'static str, rgb: [u8; 3]) -> Self {
        Self { token, rgb }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.rgb[0], self.rgb[1], self.rgb[2])
    }

    /// Same color with the given opacity.
    pub fn with_alpha(self, alpha: f32) -> Color32 {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(self.rgb[0], self.rgb[1], self.rgb[2], a)
    }
}

/// Ten-color categorical cycle for processed series.
pub const PALETTE: [SeriesColor; 10] = [
    SeriesColor::new("#1f77b4", [31, 119, 180]),
    SeriesColor::new("#ff7f0e", [255, 127, 14]),
    SeriesColor::new("#2ca02c", [44, 160, 44]),
    SeriesColor::new("#d62728", [214, 39, 40]),
    SeriesColor::new("#9467bd", [148, 103, 189]),
    SeriesColor::new("#8c564b", [140, 86, 75]),
    SeriesColor::new("#e377c2", [227, 119, 194]),
    SeriesColor::new("#7f7f7f", [127, 127, 127]),
    SeriesColor::new("#bcbd22", [188, 189, 34]),
    SeriesColor::new("#17becf", [23, 190, 207]),
];

/// Stroke pattern of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Dashed,
    Solid,
}

impl LineKind {
    pub fn is_dashed(self) -> bool {
        self == LineKind::Dashed
    }

    pub fn to_line_style(self) -> LineStyle {
        match self {
            LineKind::Solid => LineStyle::Solid,
            LineKind::Dashed => LineStyle::Dashed { length: 6.0 },
        }
    }
}

/// The visual presentation of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceLook {
    pub color: SeriesColor,
    pub style: LineKind,
    /// Whether the series is drawn before the user touches the legend.
    pub default_visible: bool,
}

impl TraceLook {
    /// Look for a series of `kind`. `processed_index` counts processed series
    /// only and picks the palette slot.
    pub fn for_source(kind: SourceKind, name: &str, processed_index: usize) -> Self {
        let (color, style) = match kind {
            SourceKind::RawInput => (SeriesColor::BLACK, LineKind::Dashed),
            SourceKind::CleanInput => (SeriesColor::ORANGE, LineKind::Dashed),
            SourceKind::Processed => (Self::alloc_color(processed_index), LineKind::Solid),
        };
        Self {
            color,
            style,
            default_visible: Self::visible_by_default(name),
        }
    }

    /// Palette color for the n-th processed series, wrapping around.
    pub fn alloc_color(index: usize) -> SeriesColor {
        PALETTE[index % PALETTE.len()]
    }

    /// Only reference traces render initially; everything else is opt-in.
    pub fn visible_by_default(name: &str) -> bool {
        let lower = name.to_lowercase();
        lower.contains("noisy") || lower.contains("clean input")
    }
}

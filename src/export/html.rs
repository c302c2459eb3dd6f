//! Self-contained HTML dashboard.
//!
//! The document carries its data as an embedded JSON payload and a small
//! script that applies the same stacking, visibility and reset rules as
//! [`DashboardController`]. It opens without a network connection or any
//! further processing step.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::config::{DashboardConfig, LegendLocation};
use crate::dashboard::DashboardController;
use crate::error::Result;

const TEMPLATE: &str = include_str!("dashboard.html");

#[derive(Debug, Serialize)]
struct Payload<'a> {
    title: &'a str,
    x_axis_label: &'a str,
    y_axis_label: &'a str,
    slider: SliderPayload<'a>,
    legend: LegendPayload,
    line: LinePayload,
    series: Vec<SeriesPayload<'a>>,
}

#[derive(Debug, Serialize)]
struct SliderPayload<'a> {
    start: f64,
    end: f64,
    step: f64,
    value: f64,
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct LegendPayload {
    visible: bool,
    location: LegendLocation,
    font_size_pt: f32,
    background_alpha: f32,
}

#[derive(Debug, Serialize)]
struct LinePayload {
    width: f32,
    alpha: f32,
}

#[derive(Debug, Serialize)]
struct SeriesPayload<'a> {
    name: &'a str,
    color: &'static str,
    dashed: bool,
    visible: bool,
    x: &'a [f64],
    /// Original values; the script derives display values from these.
    y: &'a [f64],
}

/// Renders a [`DashboardController`] into a standalone HTML page.
pub struct HtmlDashboard<'a> {
    controller: &'a DashboardController,
    config: &'a DashboardConfig,
}

impl<'a> HtmlDashboard<'a> {
    pub fn new(controller: &'a DashboardController, config: &'a DashboardConfig) -> Self {
        Self { controller, config }
    }

    fn payload(&self) -> Payload<'a> {
        let c = self.controller;
        let cfg = self.config;
        let series = c
            .registry()
            .iter()
            .zip(c.bindings())
            .map(|(s, b)| SeriesPayload {
                name: s.name(),
                color: s.look.color.token,
                dashed: s.look.style.is_dashed(),
                visible: c.is_visible(s.order),
                x: b.x(),
                y: b.y_original(),
            })
            .collect();
        Payload {
            title: &cfg.title,
            x_axis_label: &cfg.x_axis_label,
            y_axis_label: &cfg.y_axis_label,
            slider: SliderPayload {
                start: c.slider().start,
                end: c.slider().end,
                step: c.slider().step,
                value: c.stack_offset(),
                title: &c.slider().title,
            },
            legend: LegendPayload {
                visible: c.legend_visible(),
                location: cfg.legend.location,
                font_size_pt: cfg.legend.font_size_pt,
                background_alpha: cfg.legend.background_alpha,
            },
            line: LinePayload {
                width: cfg.line.width,
                alpha: cfg.line.alpha,
            },
            series,
        }
    }

    /// The JSON payload, safe to place inside a `<script>` element.
    pub fn payload_json(&self) -> Result<String> {
        let json = serde_json::to_string(&self.payload())?;
        // '<' only occurs inside JSON strings, where < is equivalent
        Ok(json.replace('<', "\\u003c"))
    }

    /// Full document text.
    pub fn render(&self) -> Result<String> {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Ok(TEMPLATE
            .replace("__PAGE_TITLE__", &escape_html(&self.config.page_title))
            .replace("__GENERATED__", &generated)
            .replace("__PAYLOAD__", &self.payload_json()?))
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.render()?.as_bytes())?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut f = std::io::BufWriter::new(std::fs::File::create(path.as_ref())?);
        self.write(&mut f)?;
        f.flush()?;
        log::info!("Wrote {}", path.as_ref().display());
        Ok(())
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

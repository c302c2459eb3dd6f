use crate::config::{DashboardConfig, OffsetSlider};
use crate::data::binding::{BindingBuilder, SeriesBinding};
use crate::data::loader::{LoadReport, SeriesLoader};
use crate::data::registry::{RegisteredSeries, SeriesRegistry};
use crate::data::stack::apply_stack;

use super::{reset_offset, toggle_visibility, DashboardEvent, DashboardState, HoverInfo};

/// Composes registry, bindings and interaction state into one session.
#[derive(Debug, Clone)]
pub struct DashboardController {
    registry: SeriesRegistry,
    state: DashboardState,
    /// Per-series render visibility, indexed like the bindings.
    visible: Vec<bool>,
    slider: OffsetSlider,
    redraw: bool,
}

impl DashboardController {
    pub fn new(registry: SeriesRegistry, slider: OffsetSlider, legend_visible: bool) -> Self {
        let bindings = BindingBuilder::build(&registry);
        let visible = registry.iter().map(|s| s.look.default_visible).collect();
        Self {
            registry,
            state: DashboardState {
                bindings,
                legend_visible,
                stack_offset: reset_offset(),
            },
            visible,
            slider,
            redraw: true,
        }
    }

    /// Load every configured source and build the session from what succeeded.
    pub fn from_config(config: &DashboardConfig) -> (Self, LoadReport) {
        let mut report = SeriesLoader::new(config.sources.clone()).load();
        let registry = SeriesRegistry::register(std::mem::take(&mut report.series));
        let controller = Self::new(registry, config.slider.clone(), config.legend.visible);
        (controller, report)
    }

    pub fn registry(&self) -> &SeriesRegistry {
        &self.registry
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn bindings(&self) -> &[SeriesBinding] {
        &self.state.bindings
    }

    pub fn series(&self, index: usize) -> Option<&RegisteredSeries> {
        self.registry.get(index)
    }

    pub fn slider(&self) -> &OffsetSlider {
        &self.slider
    }

    pub fn stack_offset(&self) -> f64 {
        self.state.stack_offset
    }

    pub fn legend_visible(&self) -> bool {
        self.state.legend_visible
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visibility(&self) -> &[bool] {
        &self.visible
    }

    /// Route one event. Returns `true` if anything changed.
    pub fn dispatch(&mut self, event: DashboardEvent) -> bool {
        match event {
            DashboardEvent::ToggleSeries(i) => self.toggle_series(i),
            DashboardEvent::ToggleLegend => {
                self.toggle_legend();
                true
            }
            DashboardEvent::SetOffset(o) => self.set_offset(o),
            DashboardEvent::Reset => self.reset(),
        }
    }

    pub fn toggle_series(&mut self, index: usize) -> bool {
        let changed = toggle_visibility(&mut self.visible, index);
        self.redraw |= changed;
        changed
    }

    pub fn toggle_legend(&mut self) {
        self.state.legend_visible = !self.state.legend_visible;
        self.redraw = true;
    }

    /// Move the slider. The offset is clamped into the slider range, rounded
    /// to the slider step, and applied to every binding, hidden ones included.
    pub fn set_offset(&mut self, offset: f64) -> bool {
        let offset = self.slider.snap(offset);
        if offset == self.state.stack_offset {
            return false;
        }
        self.state.stack_offset = offset;
        apply_stack(&mut self.state.bindings, offset);
        self.redraw = true;
        true
    }

    /// Reset action: slider back to zero, display values back to original.
    pub fn reset(&mut self) -> bool {
        self.set_offset(reset_offset())
    }

    /// Inspect sample `sample` of series `series`.
    pub fn hover(&self, series: usize, sample: usize) -> Option<HoverInfo> {
        let binding = self.state.bindings.get(series)?;
        // missing samples are not drawn, so there is nothing to inspect
        let value = *binding.y_original().get(sample).filter(|v| v.is_finite())?;
        Some(HoverInfo {
            series: self.registry.get(series)?.name().to_string(),
            index: sample,
            value,
        })
    }

    /// Resolve a cursor position in plot coordinates to the nearest visible
    /// sample, comparing against display values.
    pub fn pick(&self, x: f64, y: f64) -> Option<HoverInfo> {
        if !x.is_finite() || !y.is_finite() || x < -0.5 {
            return None;
        }
        let sample = x.round() as usize;
        let mut best: Option<(usize, f64)> = None;
        for (i, binding) in self.state.bindings.iter().enumerate() {
            if !self.is_visible(i) {
                continue;
            }
            let Some(&yd) = binding.y_display().get(sample).filter(|v| v.is_finite()) else {
                continue;
            };
            let d = (yd - y).abs();
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.and_then(|(i, _)| self.hover(i, sample))
    }

    /// Consume the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

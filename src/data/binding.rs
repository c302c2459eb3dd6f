//! BindingBuilder: renderer-facing data for each registered series.

use crate::data::registry::SeriesRegistry;

/// Original and display values of one series. Only the stacking
/// transform writes `y_display`; `y_original` is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBinding {
    index: usize,
    x: Vec<f64>,
    y_original: Vec<f64>,
    y_display: Vec<f64>,
}

impl SeriesBinding {
    /// Binding at `index` with `x = 0..len` and display equal to original.
    pub fn new(index: usize, values: &[f64]) -> Self {
        Self {
            index,
            x: (0..values.len()).map(|i| i as f64).collect(),
            y_original: values.to_vec(),
            y_display: values.to_vec(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y_original(&self) -> &[f64] {
        &self.y_original
    }

    pub fn y_display(&self) -> &[f64] {
        &self.y_display
    }

    pub fn len(&self) -> usize {
        self.y_original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_original.is_empty()
    }

    /// Display points split into runs of finite samples, so missing values
    /// leave a gap instead of a spike.
    pub fn display_segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();
        for (&x, &y) in self.x.iter().zip(&self.y_display) {
            if y.is_finite() {
                current.push([x, y]);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Both buffers, for the stacking transform.
    pub(crate) fn buffers_mut(&mut self) -> (&[f64], &mut [f64]) {
        (&self.y_original, &mut self.y_display)
    }
}

pub struct BindingBuilder;

impl BindingBuilder {
    /// One binding per registered series, in registry order.
    pub fn build(registry: &SeriesRegistry) -> Vec<SeriesBinding> {
        registry
            .iter()
            .map(|s| SeriesBinding::new(s.order, s.values()))
            .collect()
    }
}

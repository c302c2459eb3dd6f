//! SeriesRegistry: fixes identity, order, color, style and default visibility.
//!
//! Assignment happens once, in loader order. Nothing here changes after
//! construction.

use crate::data::loader::RawSeries;
use crate::data::source::SourceKind;
use crate::data::trace_look::TraceLook;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredSeries {
    pub raw: RawSeries,
    /// 0-based render/legend position.
    pub order: usize,
    pub look: TraceLook,
}

impl RegisteredSeries {
    pub fn name(&self) -> &str {
        &self.raw.name
    }

    pub fn values(&self) -> &[f64] {
        &self.raw.values
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeriesRegistry {
    series: Vec<RegisteredSeries>,
}

impl SeriesRegistry {
    /// Register series in the given order. Empty series are dropped.
    pub fn register(raw: Vec<RawSeries>) -> Self {
        let mut series = Vec::with_capacity(raw.len());
        let mut processed = 0usize;
        for raw in raw.into_iter().filter(|s| !s.values.is_empty()) {
            let look = TraceLook::for_source(raw.kind, &raw.name, processed);
            if raw.kind == SourceKind::Processed {
                processed += 1;
            }
            series.push(RegisteredSeries {
                order: series.len(),
                look,
                raw,
            });
        }
        Self { series }
    }

    pub fn series(&self) -> &[RegisteredSeries] {
        &self.series
    }

    pub fn get(&self, order: usize) -> Option<&RegisteredSeries> {
        self.series.get(order)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegisteredSeries> {
        self.series.iter()
    }
}

impl<'a> IntoIterator for &'a SeriesRegistry {
    type Item = &'a RegisteredSeries;
    type IntoIter = std::slice::Iter<'a, RegisteredSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

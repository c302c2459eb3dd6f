//! StackTransform: vertical separation of overlapping series.
//!
//! `y_display[j] = y_original[j] + index * offset`. Only display values are
//! written; identity, order and color are never touched, so a slider tick
//! costs one pass over the samples.

use crate::data::binding::SeriesBinding;

/// Recompute the display values of one binding for `offset`.
pub fn stack_binding(binding: &mut SeriesBinding, offset: f64) {
    let shift = binding.index() as f64 * offset;
    let (original, display) = binding.buffers_mut();
    if shift == 0.0 {
        display.copy_from_slice(original);
        return;
    }
    for (d, &o) in display.iter_mut().zip(original) {
        *d = o + shift;
    }
}

/// Apply `offset` to every binding, visible or not.
pub fn apply_stack(bindings: &mut [SeriesBinding], offset: f64) {
    for binding in bindings.iter_mut() {
        stack_binding(binding, offset);
    }
}

/// The display value a sample would have under `offset`.
pub fn stacked_value(original: f64, index: usize, offset: f64) -> f64 {
    let shift = index as f64 * offset;
    if shift == 0.0 {
        original
    } else {
        original + shift
    }
}

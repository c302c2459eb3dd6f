//! Interactive dashboard model.
//!
//! [`DashboardController`] owns the bindings for one render session and
//! reacts to [`DashboardEvent`]s coming from whichever front end is in use
//! (the HTML document mirrors the same rules in its script, the native viewer
//! calls the controller directly).

mod controller;

use std::fmt;

pub use controller::DashboardController;

use crate::data::binding::SeriesBinding;

/// Mutable interaction state of a session.
///
/// Series identity, order and color live in the registry and never change;
/// the offset and legend flag are the only knobs the user turns.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub bindings: Vec<SeriesBinding>,
    pub legend_visible: bool,
    pub stack_offset: f64,
}

/// A user interaction, independent of how the front end delivers it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardEvent {
    /// Legend entry clicked: flip that series' visibility.
    ToggleSeries(usize),
    /// "Toggle Legend" control.
    ToggleLegend,
    /// Offset slider moved.
    SetOffset(f64),
    /// View reset: offset back to zero.
    Reset,
}

/// What the hover inspector reports for one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    pub series: String,
    pub index: usize,
    /// Always the untransformed value.
    pub value: f64,
}

impl fmt::Display for HoverInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Signal: {}\nIndex: {}\nValue: {}",
            self.series, self.index, self.value
        )
    }
}

/// Flip the visibility of one series. Returns `false` for an unknown index.
pub fn toggle_visibility(visible: &mut [bool], index: usize) -> bool {
    match visible.get_mut(index) {
        Some(v) => {
            *v = !*v;
            true
        }
        None => false,
    }
}

/// Offset the reset action restores.
pub const fn reset_offset() -> f64 {
    0.0
}

//! Native (eframe) front end.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`viewer`] | [`SignalViewerApp`]: controls, legend, plot, hover, screenshot/CSV export |
//! | [`run`]    | [`run_viewer()`] entry point and icon loading |

mod run;
mod viewer;

pub use run::run_viewer;
pub use viewer::SignalViewerApp;

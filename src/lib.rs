//! sigview crate root: re-exports and module wiring.
//!
//! Compares a signal-processing pipeline's outputs against its reference
//! inputs. Series are loaded from text files, given a fixed identity and
//! color, and handed to an interactive dashboard that can hide series and
//! stack them apart without touching the underlying values.
//!
//! - `data`: loading, registry, bindings and the stacking transform
//! - `dashboard`: interaction state and event handling
//! - `export`: standalone HTML document and CSV output
//! - `app`: native egui viewer over the same controller
//! - `synth`: test waveform generator for the two reference inputs
//! - `config`: shared configuration

pub mod app;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod export;
pub mod synth;

// Public re-exports for a compact external API
pub use app::{run_viewer, SignalViewerApp};
pub use config::{DashboardConfig, OffsetSlider, SourcePaths, SynthConfig};
pub use dashboard::{DashboardController, DashboardEvent, DashboardState, HoverInfo};
pub use data::binding::{BindingBuilder, SeriesBinding};
pub use data::loader::{LoadReport, RawSeries, SeriesLoader};
pub use data::registry::{RegisteredSeries, SeriesRegistry};
pub use data::source::{Encoding, SourceKind};
pub use data::stack::apply_stack;
pub use data::trace_look::{LineKind, SeriesColor, TraceLook, PALETTE};
pub use error::{Error, LoadError, Result};
pub use export::HtmlDashboard;

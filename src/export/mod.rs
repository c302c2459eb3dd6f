pub mod csv;
pub mod html;

pub use csv::{save_display_csv, write_display_csv};
pub use html::HtmlDashboard;

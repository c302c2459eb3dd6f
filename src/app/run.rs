//! Top-level entry point for running the dashboard in a native window.

use crate::config::DashboardConfig;
use crate::dashboard::DashboardController;

use super::viewer::SignalViewerApp;

/// Open `controller` in a native window and block until it is closed.
///
/// `notes` are the loader's operator notes; they are listed under the
/// controls so skipped sources stay visible.
pub fn run_viewer(
    controller: DashboardController,
    config: DashboardConfig,
    notes: Vec<String>,
) -> eframe::Result<()> {
    let title = config.page_title.clone();
    let app = SignalViewerApp::new(controller, config).with_notes(notes);

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1400.0, 900.0));
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            // the fixed reference traces are black
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    )
}

/// Waveform icon shown in the window title bar and task switcher.
const ICON_SVG: &[u8] = include_bytes!("../../icon.svg");

/// Rasterise the embedded waveform icon for the viewer window.
///
/// The SVG is compiled into the binary, so the icon does not depend on the
/// working directory. `None` if it fails to parse or has no drawable size.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let tree = usvg::Tree::from_data(ICON_SVG, &usvg::Options::default()).ok()?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some(egui::IconData {
        width: size.width(),
        height: size.height(),
        rgba: pixmap.take(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_icon_rasterises() {
        let icon = load_app_icon_svg().expect("icon renders");
        assert!(icon.width > 0 && icon.height > 0);
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
        assert!(icon.rgba.chunks(4).any(|px| px[3] > 0), "icon is blank");
    }
}

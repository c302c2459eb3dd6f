//! Native viewer for a [`DashboardController`].
//!
//! Same interaction model as the HTML document: click a legend entry to hide
//! or show a series, drag the slider to stack series apart, "Reset" (or a
//! double-click on the plot) returns the offset to zero, hovering reports the
//! original sample value.

use egui::RichText;
use egui_phosphor::regular::{ARROW_COUNTER_CLOCKWISE, CAMERA, FILE_CSV, LIST};
use egui_plot::{Line, Plot};
use image::{Rgba, RgbaImage};

use crate::config::{DashboardConfig, LegendLocation};
use crate::dashboard::DashboardController;

pub struct SignalViewerApp {
    controller: DashboardController,
    config: DashboardConfig,
    /// Slider widget value, kept in step with the controller.
    offset: f64,
    reset_view: bool,
    request_window_shot: bool,
    notes: Vec<String>,
}

impl SignalViewerApp {
    pub fn new(controller: DashboardController, config: DashboardConfig) -> Self {
        Self {
            offset: controller.stack_offset(),
            controller,
            config,
            reset_view: false,
            request_window_shot: false,
            notes: Vec::new(),
        }
    }

    /// Operator notes from loading, listed under the controls.
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn controller(&self) -> &DashboardController {
        &self.controller
    }

    fn reset(&mut self) {
        self.controller.reset();
        self.offset = self.controller.stack_offset();
        self.reset_view = true;
    }

    fn render_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let s = self.controller.slider();
                let slider = egui::Slider::new(&mut self.offset, s.start..=s.end)
                    .step_by(s.step)
                    .text(s.title.clone());
                if ui.add(slider).changed() {
                    self.controller.set_offset(self.offset);
                    self.offset = self.controller.stack_offset();
                }
                ui.separator();
                let legend_on = self.controller.legend_visible();
                if ui
                    .selectable_label(legend_on, format!("{LIST} Toggle Legend"))
                    .clicked()
                {
                    self.controller.toggle_legend();
                }
                if ui
                    .button(format!("{ARROW_COUNTER_CLOCKWISE} Reset"))
                    .on_hover_text("Reset view and stacking offset")
                    .clicked()
                {
                    self.reset();
                }
                if ui
                    .button(format!("{CAMERA} Save PNG"))
                    .on_hover_text("Take a viewport screenshot")
                    .clicked()
                {
                    self.request_window_shot = true;
                }
                if ui
                    .button(format!("{FILE_CSV} Export CSV"))
                    .on_hover_text("Save the displayed values")
                    .clicked()
                {
                    self.prompt_and_save_csv();
                }
            });
            if !self.notes.is_empty() {
                egui::CollapsingHeader::new(format!("Load notes ({})", self.notes.len()))
                    .default_open(false)
                    .show(ui, |ui| {
                        for n in &self.notes {
                            ui.label(n);
                        }
                    });
            }
        });
    }

    fn render_legend(&mut self, ctx: &egui::Context) {
        if !self.controller.legend_visible() || self.controller.registry().is_empty() {
            return;
        }
        let panel = match self.config.legend.location {
            LegendLocation::TopLeft | LegendLocation::BottomLeft => egui::SidePanel::left("legend"),
            LegendLocation::TopRight | LegendLocation::BottomRight => egui::SidePanel::right("legend"),
        };
        let mut clicked = None;
        panel.resizable(true).show(ctx, |ui| {
            ui.strong("Signals");
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for s in self.controller.registry() {
                    let visible = self.controller.is_visible(s.order);
                    let mut text = RichText::new(s.name())
                        .color(s.look.color.to_color32())
                        .size(self.config.legend.font_size_pt * 4.0 / 3.0);
                    if s.look.style.is_dashed() {
                        text = text.italics();
                    }
                    if !visible {
                        text = text.weak().strikethrough();
                    }
                    if ui
                        .selectable_label(visible, text)
                        .on_hover_text("Click to hide/show")
                        .clicked()
                    {
                        clicked = Some(s.order);
                    }
                }
            });
        });
        if let Some(i) = clicked {
            self.controller.toggle_series(i);
        }
    }

    fn render_plot(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.config.title.as_str());
            let mut plot = Plot::new("signal_plot")
                .allow_scroll(false)
                .allow_zoom(true)
                .allow_boxed_zoom(true)
                .x_axis_label(self.config.x_axis_label.clone())
                .y_axis_label(self.config.y_axis_label.clone());
            if self.reset_view {
                plot = plot.reset();
                self.reset_view = false;
            }
            let line_cfg = &self.config.line;
            let controller = &self.controller;
            let plot_response = plot.show(ui, |plot_ui| {
                for (s, b) in controller.registry().iter().zip(controller.bindings()) {
                    if !controller.is_visible(s.order) {
                        continue;
                    }
                    for points in b.display_segments() {
                        let line = Line::new(s.name(), points)
                            .color(s.look.color.with_alpha(line_cfg.alpha))
                            .width(line_cfg.width)
                            .style(s.look.style.to_line_style());
                        plot_ui.line(line);
                    }
                }
            });

            if plot_response.response.double_clicked() {
                self.reset();
            }
            if let Some(pos) = plot_response.response.hover_pos() {
                let p = plot_response.transform.value_from_position(pos);
                if let Some(info) = self.controller.pick(p.x, p.y) {
                    plot_response.response.on_hover_text(info.to_string());
                }
            }
        });
    }

    fn prompt_and_save_csv(&self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("signal_dashboard.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        {
            if let Err(e) = crate::export::save_display_csv(&path, &self.controller) {
                log::error!("Failed to export CSV: {e}");
            } else {
                log::info!("Saved CSV to {}", path.display());
            }
        }
    }

    /// Request a screenshot when asked and save the next one that arrives.
    fn handle_screenshot_result(&mut self, ctx: &egui::Context) {
        if self.request_window_shot {
            self.request_window_shot = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
        let Some(image_arc) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        }) else {
            return;
        };
        let default_name = format!(
            "signal_dashboard_{}.png",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(&default_name)
            .add_filter("PNG", &["png"])
            .save_file()
        {
            let egui::ColorImage {
                size: [w, h],
                pixels,
                ..
            } = &*image_arc;
            let mut out = RgbaImage::new(*w as u32, *h as u32);
            for y in 0..*h {
                for x in 0..*w {
                    let p = pixels[y * *w + x];
                    out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
                }
            }
            match out.save(&path) {
                Ok(()) => log::info!("Saved screenshot to {}", path.display()),
                Err(e) => log::error!("Failed to save screenshot: {e}"),
            }
        }
    }
}

impl eframe::App for SignalViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_controls(ctx);
        self.render_legend(ctx);
        self.render_plot(ctx);
        self.handle_screenshot_result(ctx);
        // event-driven: egui repaints on input, nothing to poll
        self.controller.take_redraw();
    }
}

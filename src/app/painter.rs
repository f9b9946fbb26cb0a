use super::input_handler::{handle_input, PointerInput};
use super::render_helper::{curve_shapes, marker, paint_layer, stroke_shapes};
use super::sheet::{SheetModel, StrokeCommand};
use super::tools::Tool;
use crate::config::Settings;
use crate::curve::sheet::CurveSheet;
use crate::error::Result;
use crate::utils::{color::Color, vector::Vec2};
use eframe::egui::{self, Color32};
use std::time::{Duration, Instant};

/// The drawing sheet: routes pointer input to the active tool and keeps the
/// composited layers.
pub struct ScratchpadApp {
    pub(crate) tool: Tool,
    pub(crate) sheet: SheetModel,
    pub(crate) curve: CurveSheet,
    pub(crate) pointer: PointerInput,
    pub(crate) palette: Vec<(String, Color)>,
    pub(crate) curve_color: Color,
    pub(crate) line_width: f64,
    pub(crate) tick_interval: Duration,
    // Persistent layers in sheet space; the outline layer is painted first.
    pub(crate) outline: Vec<egui::Shape>,
    pub(crate) ink: Vec<egui::Shape>,
    // Raw samples and presses, painted above everything when enabled.
    pub(crate) debug_overlay: bool,
    pub(crate) debug: Vec<egui::Shape>,
}

impl ScratchpadApp {
    pub fn new(settings: &Settings, tool: Tool) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            tool,
            sheet: SheetModel::from_settings(settings)?,
            curve: CurveSheet::new(),
            pointer: PointerInput::new(
                settings.smoothing.follow_distance,
                settings.tick_interval(),
            ),
            palette: settings.palette()?,
            curve_color: Color::ORANGE,
            line_width: settings.pen.line_width,
            tick_interval: settings.tick_interval(),
            outline: Vec::new(),
            ink: Vec::new(),
            debug_overlay: false,
            debug: Vec::new(),
        })
    }

    pub fn with_debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }

    fn mark(&mut self, pos: Vec2, size: f64, color: Color32) {
        if self.debug_overlay {
            self.debug.push(marker(pos, size, color));
        }
    }

    pub(crate) fn is_pen_down(&self) -> bool {
        self.sheet.pen().is_down() || self.curve.is_down()
    }

    pub(crate) fn press(&mut self, pos: Vec2) {
        self.mark(pos, 4.0, Color32::RED);
        match self.tool {
            Tool::Pen => self.sheet.pen_down(),
            Tool::Curve => self.curve.pen_down(pos),
        }
    }

    /// Lifting the pen feeds the release position first so the stroke reaches it.
    pub(crate) fn release(&mut self, pos: Vec2) {
        self.mark(pos, 4.0, Color32::RED);
        match self.tool {
            Tool::Pen => {
                if !self.sheet.pen().is_down() {
                    return;
                }
                if let Some(cmd) = self.sheet.pen_move(pos.x, pos.y) {
                    self.composite(&cmd);
                }
                self.sheet.pen_up();
            }
            Tool::Curve => self.curve.pen_up(),
        }
    }

    pub(crate) fn motion(&mut self, raw: Vec2, now: Instant) {
        self.mark(raw, 2.0, Color32::GREEN);
        match self.tool {
            Tool::Pen => {
                let pos = self.pointer.motion(raw, now);
                self.pen_move(pos);
            }
            Tool::Curve => {
                self.curve.pen_move(raw);
            }
        }
    }

    pub(crate) fn tick(&mut self, now: Instant) {
        if self.tool != Tool::Pen {
            return;
        }
        if let Some(pos) = self.pointer.tick(now) {
            self.pen_move(pos);
        }
    }

    fn pen_move(&mut self, pos: Vec2) {
        if let Some(cmd) = self.sheet.pen_move(pos.x, pos.y) {
            self.composite(&cmd);
        }
    }

    fn composite(&mut self, cmd: &StrokeCommand) {
        let (outline, ink) = stroke_shapes(cmd);
        self.outline.extend(outline);
        self.ink.extend(ink);
    }

    pub(crate) fn clear(&mut self) {
        log::debug!("clearing sheet");
        self.outline.clear();
        self.ink.clear();
        self.debug.clear();
        self.curve.clear();
    }

    fn set_color(&mut self, color: Color) {
        self.sheet.set_color(color);
        self.curve_color = color;
    }

    fn context_menu(&mut self, response: &egui::Response) {
        if self.is_pen_down() {
            return;
        }
        let palette = self.palette.clone();
        response.context_menu(|ui| {
            if ui.button("Clear").clicked() {
                self.clear();
                ui.close_menu();
            }
            ui.separator();
            for (name, color) in &palette {
                if ui.button(name).clicked() {
                    self.set_color(*color);
                    ui.close_menu();
                }
            }
        });
    }
}

impl eframe::App for ScratchpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tools").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tool in [Tool::Pen, Tool::Curve] {
                    if ui
                        .selectable_label(self.tool == tool, tool.label())
                        .clicked()
                        && !self.is_pen_down()
                    {
                        self.tool = tool;
                    }
                }
                ui.separator();
                ui.label(format!("fallback segments: {}", self.sheet.non_converged()));
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_white_alpha(128)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                handle_input(self, ctx, &response);
                self.context_menu(&response);

                if ui.input(|i| i.key_pressed(egui::Key::C)) && !self.is_pen_down() {
                    self.clear();
                }

                let painter = ui.painter_at(rect);
                paint_layer(&painter, &self.outline, rect.min);
                paint_layer(&painter, &self.ink, rect.min);
                let segments = self.curve.current_curve_points();
                let curve = curve_shapes(&segments, self.curve_color, self.line_width);
                paint_layer(&painter, &curve, rect.min);
                if self.debug_overlay {
                    paint_layer(&painter, &self.debug, rect.min);
                }
            });

        // The tick relay needs frames even when no input arrives.
        ctx.request_repaint_after(self.tick_interval);
    }
}

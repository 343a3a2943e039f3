use crate::controller::Controller;
use crate::logger::ErrorLog;
use eframe::egui;
use std::time::Duration;

const TITLE: &str = "Slang Translator";

struct TranslatorApp {
    controller: Controller,
}

impl TranslatorApp {
    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.controller.dialog.clone() else {
            return;
        };
        egui::Window::new("Input Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.controller.dismiss_dialog();
                    }
                });
            });
    }
}

impl eframe::App for TranslatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();
        if self.controller.is_busy() {
            // Wake up periodically so the worker's answer is picked up without user events
            ctx.request_repaint_after(Duration::from_millis(120));
        }

        let modal_open = self.controller.dialog.is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                ui.label("Enter slang or vernacular text:");
                ui.add(
                    egui::TextEdit::multiline(&mut self.controller.input)
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );
                ui.label("Standard English translation:");
                ui.add(
                    egui::TextEdit::multiline(&mut self.controller.output)
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );
                ui.horizontal(|ui| {
                    let busy = self.controller.is_busy();
                    if ui.add_enabled(!busy, egui::Button::new("Translate")).clicked() {
                        self.controller.click();
                    }
                    if busy {
                        ui.spinner();
                    }
                });
            });
        });

        self.show_dialog(ctx);
    }
}

/// Runs the window's event loop on the calling thread until it is closed.
pub fn run(controller: Controller, log: &ErrorLog) {
    let app = TranslatorApp { controller };
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([640.0, 520.0]),
        ..Default::default()
    };
    if let Err(e) = eframe::run_native(TITLE, native_options, Box::new(|_cc| Box::new(app))) {
        log.error(&format!("UI error: {}", e));
    }
}

use crate::SketchApp;
use crate::components::tool_button::{ToolButton, ToolIcon};
use crate::tools::Tool;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            ui.label("Pen");
            ui.horizontal_wrapped(|ui| {
                for &width in &app.config.stroke_widths {
                    let selected = *app.session.tool_state().tool() == Tool::Pen { width };
                    if ToolButton::new(ToolIcon::Dot(width), selected).show(ui).clicked() {
                        app.session.set_tool(Tool::Pen { width });
                    }
                }
            });

            ui.label("Stamps");
            ui.horizontal_wrapped(|ui| {
                for glyph in app.palette.glyphs() {
                    let selected = matches!(
                        app.session.tool_state().tool(),
                        Tool::Stamp { glyph: active } if active == glyph
                    );
                    if ToolButton::new(ToolIcon::Glyph(glyph), selected).show(ui).clicked() {
                        app.session.set_tool(Tool::Stamp { glyph: glyph.clone() });
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut app.custom_stamp).desired_width(80.0));
                if ui.button("Add stamp").clicked() {
                    app.add_custom_stamp();
                }
            });

            ui.separator();

            let mut param = app.session.tool_state().param();
            let label = match app.session.tool_state().tool() {
                Tool::Pen { .. } => "Hue",
                Tool::Stamp { .. } => "Rotation",
            };
            ui.horizontal(|ui| {
                ui.label(label);
                if ui
                    .add(egui::Slider::new(&mut param, 0.0..=359.0).suffix("°"))
                    .changed()
                {
                    app.session.set_param(param);
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.session.history().can_undo();
                let can_redo = app.session.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.session.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.session.redo();
                }
                if ui.button("Clear").clicked() {
                    app.session.clear();
                }
            });

            if ui.button("Export PNG").clicked() {
                app.export();
            }

            ui.separator();

            let history = app.session.history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.committed().len()));
                ui.label(format!("Redo stack size: {}", history.redo_len()));
            });

            if let Some(status) = &app.status {
                ui.separator();
                ui.label(status);
            }
        });
}

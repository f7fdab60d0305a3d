use eframe::egui;

/// What a tool button shows
pub enum ToolIcon<'a> {
    /// A stamp glyph
    Glyph(&'a str),
    /// A pen tip of the given width
    Dot(f32),
}

/// Square selectable button used for pen widths and stamps
pub struct ToolButton<'a> {
    pub icon: ToolIcon<'a>,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(icon: ToolIcon<'a>, selected: bool) -> Self {
        Self { icon, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(40)
            } else {
                egui::Color32::from_gray(30)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let fg_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            match self.icon {
                ToolIcon::Glyph(glyph) => {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        glyph,
                        egui::FontId::proportional(22.0),
                        fg_color,
                    );
                }
                ToolIcon::Dot(width) => {
                    let radius = (width / 2.0).clamp(1.0, rect.width() / 2.0 - 4.0);
                    ui.painter().circle_filled(rect.center(), radius, fg_color);
                }
            }

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}

use crate::SketchApp;
use crate::input::route_event;
use crate::surface::EguiSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(app.config.canvas_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        for event in app.input.process_input(ctx, canvas_rect) {
            route_event(&event, &mut app.session);
        }

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }

        let mut surface = EguiSurface::new(&painter, canvas_rect, app.config.background_color());
        app.session.render_to(&mut surface);
    });
}

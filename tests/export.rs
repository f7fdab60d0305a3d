mod common;

use common::{draw_stroke, p};
use egui::Color32;
use sketchpad::export::{encode_png, render_export};
use sketchpad::{Session, SketchError, Tool};

fn is_background(color: Option<Color32>) -> bool {
    color == Some(Color32::WHITE)
}

#[test]
fn test_export_renders_committed_only() {
    let mut session = Session::default();
    session.set_tool(Tool::Pen { width: 6.0 });
    draw_stroke(&mut session, &[p(10.0, 20.0), p(90.0, 20.0)]);

    // still in progress when exporting
    session.begin_action(p(10.0, 60.0));
    session.extend_action(p(90.0, 60.0));
    // and a hover ghost would be drawn if this were idle
    assert!(session.is_active());

    let surface = render_export(session.committed(), 100.0, 100.0, 1.0, Color32::WHITE).unwrap();

    assert!(!is_background(surface.pixel(50, 20)));
    assert!(is_background(surface.pixel(50, 60)));
}

#[test]
fn test_export_excludes_preview() {
    let mut session = Session::default();
    session.set_tool(Tool::Pen { width: 20.0 });
    session.extend_action(p(50.0, 50.0));
    assert!(session.preview().is_some());

    let surface = render_export(session.committed(), 100.0, 100.0, 1.0, Color32::WHITE).unwrap();
    assert!(is_background(surface.pixel(50, 50)));
}

#[test]
fn test_export_scales_output() {
    let mut session = Session::default();
    session.set_tool(Tool::Pen { width: 4.0 });
    draw_stroke(&mut session, &[p(10.0, 10.0), p(40.0, 10.0)]);

    let surface = render_export(session.committed(), 50.0, 30.0, 2.0, Color32::WHITE).unwrap();

    assert_eq!((surface.width(), surface.height()), (100, 60));
    assert!(!is_background(surface.pixel(50, 20)));
    // the unscaled location is now empty
    assert!(is_background(surface.pixel(50, 10)));
}

#[test]
fn test_export_background_is_opaque() {
    let surface = render_export(&[], 20.0, 20.0, 1.0, Color32::from_rgb(10, 20, 30)).unwrap();
    let pixel = surface.pixel(3, 3).unwrap();
    assert_eq!(pixel, Color32::from_rgb(10, 20, 30));
    assert_eq!(pixel.a(), 255);
}

#[test]
fn test_export_rejects_bad_scale() {
    let result = render_export(&[], 20.0, 20.0, 0.0, Color32::WHITE);
    assert!(matches!(result, Err(SketchError::InvalidConfig(_))));
}

#[test]
fn test_encode_png_has_signature() {
    let surface = render_export(&[], 8.0, 8.0, 1.0, Color32::WHITE).unwrap();
    let bytes = encode_png(&surface).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

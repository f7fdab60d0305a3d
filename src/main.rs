#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sketchpad::{FALLBACK_MESSAGE, SketchApp, SketchConfig};

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = SketchConfig::from_env();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.canvas_width + 240.0, config.canvas_height + 40.0])
            .with_resizable(false),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Sketchpad",
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchApp::new(cc, config)))),
    );
    if let Err(err) = &result {
        log::error!("Failed to start: {}", err);
        eprintln!("{}", FALLBACK_MESSAGE);
    }
    result
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::error!("No document; not starting");
            return;
        };

        let show_fallback = |details: &str| {
            log::error!("{}", details);
            if let Some(loading_text) = document.get_element_by_id("loading_text") {
                loading_text.set_inner_html(&format!("<p>{}</p>", FALLBACK_MESSAGE));
            }
        };

        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            show_fallback("Missing canvas element the_canvas_id");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(SketchApp::new(cc, SketchConfig::default())))),
            )
            .await;

        match start_result {
            Ok(()) => {
                if let Some(loading_text) = document.get_element_by_id("loading_text") {
                    loading_text.remove();
                }
            }
            Err(err) => show_fallback(&format!("Failed to start eframe: {:?}", err)),
        }
    });
}

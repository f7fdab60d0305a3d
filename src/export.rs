use std::io::Cursor;
use std::path::Path;

use egui::Color32;

use crate::config::SketchConfig;
use crate::drawable::{Command, Drawable};
use crate::error::{SketchError, SketchResult};
use crate::surface::{RasterSurface, Surface};

/// Rasterize committed commands onto a fresh opaque surface.
///
/// The canvas `width`/`height` are in canvas units; the pixel size is
/// scaled by `scale`. Previews and in-progress commands are never passed
/// here, so they cannot leak into an export.
pub fn render_export(
    commands: &[Command],
    width: f32,
    height: f32,
    scale: f32,
    background: Color32,
) -> SketchResult<RasterSurface> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(SketchError::InvalidConfig(format!("invalid export scale {}", scale)));
    }
    let pixel_width = (width * scale).ceil() as u32;
    let pixel_height = (height * scale).ceil() as u32;

    let mut surface = RasterSurface::new(pixel_width, pixel_height)?;
    surface.fill_background(background);
    surface.save();
    surface.scale(scale);
    for command in commands {
        command.render(&mut surface);
    }
    surface.restore();
    Ok(surface)
}

/// Encode a rendered surface as PNG bytes
pub fn encode_png(surface: &RasterSurface) -> SketchResult<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    surface
        .to_rgba_image()
        .write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

fn render_configured(commands: &[Command], config: &SketchConfig) -> SketchResult<RasterSurface> {
    render_export(
        commands,
        config.canvas_width,
        config.canvas_height,
        config.export_scale,
        config.background_color(),
    )
}

/// Render the committed commands with the configured size, scale and background as PNG bytes
pub fn render_png(commands: &[Command], config: &SketchConfig) -> SketchResult<Vec<u8>> {
    encode_png(&render_configured(commands, config)?)
}

/// Render the committed commands with the configured scale and write a PNG file.
///
/// The file is always PNG, whatever extension `path` carries.
pub fn export_png(commands: &[Command], config: &SketchConfig, path: impl AsRef<Path>) -> SketchResult<()> {
    let path = path.as_ref();
    let surface = render_configured(commands, config)?;
    surface
        .to_rgba_image()
        .save_with_format(path, image::ImageFormat::Png)?;
    log::info!(
        "Exported {} drawables to {} ({}x{})",
        commands.len(),
        path.display(),
        surface.width(),
        surface.height()
    );
    Ok(())
}

/// File name offered to the browser for a download
pub fn download_name(config: &SketchConfig) -> String {
    config
        .export_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sketch.png".to_owned())
}

/// Offer the committed drawing to the browser as a PNG download
#[cfg(target_arch = "wasm32")]
pub fn download_png(commands: &[Command], config: &SketchConfig) -> SketchResult<String> {
    use eframe::wasm_bindgen::JsCast as _;

    let bytes = render_png(commands, config)?;
    let browser = |err: eframe::wasm_bindgen::JsValue| SketchError::Download(format!("{:?}", err));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SketchError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(browser)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let name = download_name(config);
    let anchor = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|element| browser(element.into()))?;
    anchor.set_href(&url);
    anchor.set_download(&name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(browser)?;

    log::info!("Offered {} ({} bytes) for download", name, bytes.len());
    Ok(name)
}

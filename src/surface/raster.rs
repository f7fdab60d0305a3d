use std::sync::OnceLock;

use ab_glyph::{Font, FontVec, GlyphId, OutlineCurve, PxScale, ScaleFont};
use egui::{Color32, Pos2};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::{PaintState, Surface};
use crate::error::{SketchError, SketchResult};
use crate::geometry::Point;

/// Fonts used to rasterize stamp glyphs, in egui's proportional fallback order.
fn glyph_fonts() -> &'static [FontVec] {
    static FONTS: OnceLock<Vec<FontVec>> = OnceLock::new();
    FONTS.get_or_init(|| {
        let definitions = egui::FontDefinitions::default();
        let order = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        order
            .iter()
            .filter_map(|name| {
                let data = definitions.font_data.get(name)?;
                match FontVec::try_from_vec_and_index(data.font.to_vec(), data.index) {
                    Ok(font) => Some(font),
                    Err(err) => {
                        log::warn!("Skipping font {}: {}", name, err);
                        None
                    }
                }
            })
            .collect()
    })
}

/// Offscreen RGBA surface backed by a [`tiny_skia::Pixmap`].
///
/// Used for export. Paths are transformed on the CPU as they are recorded
/// and rasterized with an identity transform.
pub struct RasterSurface {
    pixmap: Pixmap,
    state: PaintState,
    saved: Vec<PaintState>,
    subpaths: Vec<Vec<Pos2>>,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("saved", &self.saved.len())
            .finish()
    }
}

impl RasterSurface {
    /// Allocate a transparent surface of the given pixel size
    pub fn new(width: u32, height: u32) -> SketchResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            SketchError::SurfaceUnavailable(format!("cannot allocate {}x{} pixmap", width, height))
        })?;
        Ok(Self {
            pixmap,
            state: PaintState::default(),
            saved: Vec::new(),
            subpaths: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Read back a pixel as straight (non-premultiplied) RGBA
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color32::from_rgba_unmultiplied(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Copy the pixels into an [`image::RgbaImage`] for encoding
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let rgba = self
                .pixel(x, y)
                .map(|c| c.to_srgba_unmultiplied())
                .unwrap_or_default();
            image::Rgba(rgba)
        })
    }

    fn paint(&self, color: Color32) -> Paint<'static> {
        let [r, g, b, a] = self.state.tint(color).to_srgba_unmultiplied();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    fn to_device(&self, p: Point) -> Pos2 {
        self.state.map_point(p)
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn fill_background(&mut self, color: Color32) {
        let [r, g, b, _] = color.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));
    }

    fn save(&mut self) {
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn scale(&mut self, factor: f32) {
        self.state.scale(factor);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.rotate(radians);
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.state.opacity = opacity.clamp(0.0, 1.0);
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, p: Point) {
        let p = self.to_device(p);
        self.subpaths.push(vec![p]);
    }

    fn line_to(&mut self, p: Point) {
        let p = self.to_device(p);
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(p),
            // a line without a current point starts one, like canvas does
            None => self.subpaths.push(vec![p]),
        }
    }

    fn stroke(&mut self, width: f32, color: Color32) {
        let mut builder = PathBuilder::new();
        for subpath in &self.subpaths {
            if let Some((first, rest)) = subpath.split_first() {
                builder.move_to(first.x, first.y);
                for p in rest {
                    builder.line_to(p.x, p.y);
                }
            }
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let stroke = Stroke {
            width: width * self.state.scale_factor(),
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        let paint = self.paint(color);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color32) {
        let center = self.to_device(center);
        let radius = radius * self.state.scale_factor();
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        let paint = self.paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn fill_text(&mut self, text: &str, at: Point, size: f32, color: Color32) {
        let fonts = glyph_fonts();
        let scale = PxScale::from(size);

        let mut placed: Vec<(&FontVec, GlyphId, f32)> = Vec::new();
        let mut advance = 0.0;
        for ch in text.chars() {
            let found = fonts.iter().find_map(|font| {
                let id = font.glyph_id(ch);
                (id.0 != 0).then_some((font, id))
            });
            let Some((font, id)) = found else {
                log::debug!("No font covers {:?}, skipping", ch);
                continue;
            };
            placed.push((font, id, advance));
            advance += font.as_scaled(scale).h_advance(id);
        }

        let left = at.x - advance / 2.0;
        let mut builder = PathBuilder::new();
        for (font, id, x) in placed {
            let Some(outline) = font.outline(id) else {
                continue;
            };
            let scaled = font.as_scaled(scale);
            let (hs, vs) = (scaled.h_scale_factor(), scaled.v_scale_factor());
            // baseline that centers the ascent/descent box on `at`
            let baseline = at.y + (scaled.ascent() + scaled.descent()) / 2.0;
            let map = |p: ab_glyph::Point| {
                self.to_device(Pos2::new(left + x + p.x * hs, baseline - p.y * vs))
            };

            let mut last: Option<Pos2> = None;
            for curve in &outline.curves {
                let start = match curve {
                    OutlineCurve::Line(p0, _)
                    | OutlineCurve::Quad(p0, _, _)
                    | OutlineCurve::Cubic(p0, _, _, _) => map(*p0),
                };
                if last != Some(start) {
                    builder.move_to(start.x, start.y);
                }
                let end = match curve {
                    OutlineCurve::Line(_, p1) => {
                        let p1 = map(*p1);
                        builder.line_to(p1.x, p1.y);
                        p1
                    }
                    OutlineCurve::Quad(_, c, p2) => {
                        let (c, p2) = (map(*c), map(*p2));
                        builder.quad_to(c.x, c.y, p2.x, p2.y);
                        p2
                    }
                    OutlineCurve::Cubic(_, c1, c2, p3) => {
                        let (c1, c2, p3) = (map(*c1), map(*c2), map(*p3));
                        builder.cubic_to(c1.x, c1.y, c2.x, c2.y, p3.x, p3.y);
                        p3
                    }
                };
                last = Some(end);
            }
        }

        let Some(path) = builder.finish() else {
            return;
        };
        let paint = self.paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_surface_is_unavailable() {
        let result = RasterSurface::new(0, 10);
        assert!(matches!(result, Err(SketchError::SurfaceUnavailable(_))));
    }

    #[test]
    fn test_background_is_opaque() {
        let mut surface = RasterSurface::new(4, 4).unwrap();
        surface.fill_background(Color32::WHITE);
        assert_eq!(surface.pixel(2, 2), Some(Color32::WHITE));
    }

    #[test]
    fn test_stroke_covers_path() {
        let mut surface = RasterSurface::new(40, 40).unwrap();
        surface.fill_background(Color32::WHITE);
        surface.begin_path();
        surface.move_to(Pos2::new(5.0, 20.0));
        surface.line_to(Pos2::new(35.0, 20.0));
        surface.stroke(6.0, Color32::BLACK);

        assert_eq!(surface.pixel(20, 20), Some(Color32::BLACK));
        assert_eq!(surface.pixel(20, 5), Some(Color32::WHITE));
    }

    #[test]
    fn test_restore_undoes_scale() {
        let mut surface = RasterSurface::new(40, 40).unwrap();
        surface.fill_background(Color32::WHITE);
        surface.save();
        surface.scale(4.0);
        surface.restore();
        surface.fill_circle(Pos2::new(5.0, 5.0), 3.0, Color32::BLACK);

        assert_eq!(surface.pixel(5, 5), Some(Color32::BLACK));
        assert_eq!(surface.pixel(20, 20), Some(Color32::WHITE));
    }

    #[test]
    fn test_text_leaves_ink_near_center() {
        let mut surface = RasterSurface::new(64, 64).unwrap();
        surface.fill_background(Color32::WHITE);
        surface.fill_text("W", Pos2::new(32.0, 32.0), 40.0, Color32::BLACK);

        let inked = (16..48)
            .flat_map(|y| (16..48).map(move |x| (x, y)))
            .any(|(x, y)| surface.pixel(x, y) != Some(Color32::WHITE));
        assert!(inked);
    }
}

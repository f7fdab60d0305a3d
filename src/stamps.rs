use crate::error::{SketchError, SketchResult};

/// Stamp glyphs offered to the user, including custom ones added at runtime
#[derive(Debug, Clone, Default)]
pub struct StampPalette {
    glyphs: Vec<String>,
}

impl StampPalette {
    pub fn new(defaults: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut palette = Self::default();
        for glyph in defaults {
            let glyph: String = glyph.into();
            if let Err(err) = palette.register(&glyph) {
                log::warn!("Skipping default stamp {:?}: {}", glyph, err);
            }
        }
        palette
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// Add a custom glyph. Input is trimmed; blank input is rejected and
    /// leaves the palette untouched. Returns the stored glyph.
    pub fn register(&mut self, text: &str) -> SketchResult<&str> {
        let glyph = text.trim();
        if glyph.is_empty() {
            return Err(SketchError::BlankGlyph);
        }

        let index = match self.glyphs.iter().position(|g| g == glyph) {
            Some(index) => index,
            None => {
                log::info!("Registered stamp {:?}", glyph);
                self.glyphs.push(glyph.to_owned());
                self.glyphs.len() - 1
            }
        };
        Ok(self.glyphs[index].as_str())
    }
}

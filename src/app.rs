use crate::config::SketchConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::session::Session;
use crate::stamps::StampPalette;
use crate::tools::Tool;

/// Shown instead of the app when no drawing surface can be created
pub const FALLBACK_MESSAGE: &str =
    "Sketchpad needs a canvas to draw on, and none could be created in this environment.";

/// The egui application: a tool panel beside a fixed-size canvas.
///
/// Drawing state is not saved between runs.
pub struct SketchApp {
    pub(crate) config: SketchConfig,
    pub(crate) session: Session,
    pub(crate) palette: StampPalette,
    pub(crate) input: InputHandler,
    /// Text typed into the custom stamp field
    pub(crate) custom_stamp: String,
    /// Last user-facing message (export result, rejected stamp)
    pub(crate) status: Option<String>,
    last_revision: u64,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: SketchConfig) -> Self {
        let palette = StampPalette::new(config.stamps.iter().cloned());
        Self {
            session: Session::from_config(&config),
            palette,
            input: InputHandler::new(),
            custom_stamp: String::new(),
            status: None,
            last_revision: 0,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn palette(&self) -> &StampPalette {
        &self.palette
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_custom_stamp_text(&mut self, text: impl Into<String>) {
        self.custom_stamp = text.into();
    }

    /// Register the typed glyph and switch to it. Blank text is rejected.
    pub fn add_custom_stamp(&mut self) {
        match self.palette.register(&self.custom_stamp) {
            Ok(glyph) => {
                let glyph = glyph.to_owned();
                self.session.set_tool(Tool::Stamp { glyph });
                self.custom_stamp.clear();
                self.status = None;
            }
            Err(err) => {
                log::warn!("Rejected custom stamp: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    /// Write the committed drawing to the configured export path
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export(&mut self) {
        let path = self.config.export_path.clone();
        self.status = Some(
            match crate::export::export_png(self.session.committed(), &self.config, &path) {
                Ok(()) => format!("Saved {}", path.display()),
                Err(err) => {
                    log::error!("Export failed: {}", err);
                    format!("Export failed: {}", err)
                }
            },
        );
    }

    /// Offer the committed drawing to the browser as a PNG download
    #[cfg(target_arch = "wasm32")]
    pub fn export(&mut self) {
        self.status = Some(
            match crate::export::download_png(self.session.committed(), &self.config) {
                Ok(name) => format!("Downloaded {}", name),
                Err(err) => {
                    log::error!("Export failed: {}", err);
                    format!("Export failed: {}", err)
                }
            },
        );
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, KeyboardShortcut, Modifiers};

        let redo = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
        let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

        // check the more specific shortcut first
        if ctx.input_mut(|i| i.consume_shortcut(&redo)) {
            self.session.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&undo)) {
            self.session.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);

        if self.session.revision() != self.last_revision {
            self.last_revision = self.session.revision();
            ctx.request_repaint();
        }
    }
}

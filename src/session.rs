use crate::config::SketchConfig;
use crate::drawable::{Command, Drawable, Preview};
use crate::geometry::Point;
use crate::history::CommandHistory;
use crate::surface::Surface;
use crate::tools::{Tool, ToolState};

/// The sketch core: tool state, history, the in-progress slot and the preview.
///
/// All input arrives as plain synchronous calls. The session is idle when
/// `in_progress` is empty and active otherwise. Every call is total: requests
/// that make no sense in the current state do nothing.
///
/// Each mutation bumps [`Session::revision`], which hosts poll to know when to
/// repaint.
#[derive(Debug)]
pub struct Session {
    tools: ToolState,
    history: CommandHistory,
    in_progress: Option<Command>,
    preview: Option<Preview>,
    stamp_size: f32,
    preview_opacity: f32,
    revision: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

impl Session {
    pub fn new(tools: ToolState, stamp_size: f32, preview_opacity: f32) -> Self {
        Self {
            tools,
            history: CommandHistory::new(),
            in_progress: None,
            preview: None,
            stamp_size,
            preview_opacity,
            revision: 0,
        }
    }

    /// Start with the first configured pen width and hue 0
    pub fn from_config(config: &SketchConfig) -> Self {
        let width = config.stroke_widths.first().copied().unwrap_or(2.0);
        Self::new(
            ToolState::new(Tool::Pen { width }, 0.0),
            config.stamp_size,
            config.preview_opacity,
        )
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Pointer pressed: start a new command at `point`.
    ///
    /// Starting a new action invalidates redo history.
    pub fn begin_action(&mut self, point: Point) {
        if self.in_progress.is_some() {
            // a press without a release; finish the old action first
            self.end_action();
        }
        self.preview = None;
        self.history.invalidate_redo();
        let command = self.tools.new_command(point, self.stamp_size);
        log::debug!("Begin {} at {:?}", command.kind(), point);
        self.in_progress = Some(command);
        self.touch();
    }

    /// Pointer moved: extend the active command, or move the preview when idle
    pub fn extend_action(&mut self, point: Point) {
        match self.in_progress.as_mut() {
            Some(command) => command.extend(point),
            None => {
                self.preview = Some(self.tools.new_preview(point, self.stamp_size, self.preview_opacity));
            }
        }
        self.touch();
    }

    /// Pointer released: commit the active command if it is committable
    pub fn end_action(&mut self) {
        let Some(command) = self.in_progress.take() else {
            return;
        };
        if let Err(discarded) = self.history.commit(command) {
            log::debug!("Discarded {} {}", discarded.kind(), discarded.id());
        }
        self.touch();
    }

    /// Pointer left the canvas: ends the action like a release and hides the preview
    pub fn pointer_leave(&mut self) {
        self.end_action();
        if self.preview.take().is_some() {
            self.touch();
        }
    }

    /// Select a tool for later commands. Existing drawables are untouched.
    pub fn set_tool(&mut self, tool: Tool) {
        log::info!("Tool changed to {:?}", tool);
        self.tools.set_tool(tool);
        self.refresh_preview();
        self.touch();
    }

    /// Set the shared hue/rotation parameter, in degrees
    pub fn set_param(&mut self, degrees: f32) {
        self.tools.set_param(degrees);
        self.refresh_preview();
        self.touch();
    }

    fn refresh_preview(&mut self) {
        if let Some(position) = self.preview.as_ref().map(Preview::position) {
            self.preview = Some(self.tools.new_preview(position, self.stamp_size, self.preview_opacity));
        }
    }

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.touch();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.touch();
        }
    }

    /// Empty both the committed list and the redo stack
    pub fn clear(&mut self) {
        self.history.clear();
        self.touch();
    }

    /// Repaint everything: committed oldest to newest, then the
    /// in-progress command, then the preview when nothing is in progress.
    ///
    /// Safe to call any number of times; it only paints.
    pub fn render_to(&self, surface: &mut dyn Surface) {
        surface.clear();
        self.render_committed(surface);
        match &self.in_progress {
            Some(command) => command.render(surface),
            None => {
                if let Some(preview) = &self.preview {
                    preview.render(surface);
                }
            }
        }
    }

    /// Paint only the committed drawables, without clearing
    pub fn render_committed(&self, surface: &mut dyn Surface) {
        for command in self.history.committed() {
            command.render(surface);
        }
    }

    pub fn committed(&self) -> &[Command] {
        self.history.committed()
    }

    /// Undone commands, most recently undone first
    pub fn redo_stack(&self) -> impl Iterator<Item = &Command> {
        self.history.redo_stack()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn in_progress(&self) -> Option<&Command> {
        self.in_progress.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tools
    }

    pub fn is_active(&self) -> bool {
        self.in_progress.is_some()
    }

    /// Increments on every state change
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

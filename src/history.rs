use crate::drawable::Command;

/// Undo/redo history of committed drawables.
///
/// `committed` is chronological, oldest first. `redo_stack` is a LIFO whose
/// top is the most recently undone command. A command lives in at most one
/// of the two; operations only move whole commands between them.
#[derive(Debug, Default)]
pub struct CommandHistory {
    committed: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished command.
    ///
    /// A command that fails the commit gate (a stroke with fewer than two
    /// points) is handed back unstored.
    pub fn commit(&mut self, command: Command) -> Result<(), Command> {
        if !command.is_committable() {
            return Err(command);
        }
        log::debug!("Committed {} {}", command.kind(), command.id());
        self.committed.push(command);
        Ok(())
    }

    /// Drop redo history; called when a new action starts
    pub fn invalidate_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Move the newest committed command onto the redo stack.
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(command) => {
                log::debug!("Undo {} {}", command.kind(), command.id());
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone command back. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                log::debug!("Redo {} {}", command.kind(), command.id());
                self.committed.push(command);
                true
            }
            None => false,
        }
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_stack.clear();
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Committed commands, oldest first
    pub fn committed(&self) -> &[Command] {
        &self.committed
    }

    /// Undone commands, most recently undone first
    pub fn redo_stack(&self) -> impl Iterator<Item = &Command> {
        self.redo_stack.iter().rev()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::{StampCommand, StrokeCommand};
    use egui::{Color32, Pos2};

    fn stamp(x: f32) -> Command {
        Command::Stamp(StampCommand::new(Pos2::new(x, x), "⭐", 0.0, 32.0, Color32::BLACK))
    }

    #[test]
    fn test_commit_rejects_single_point_stroke() {
        let mut history = CommandHistory::new();
        let dot = Command::Stroke(StrokeCommand::new(Pos2::new(1.0, 1.0), 3.0, Color32::RED));

        let rejected = history.commit(dot);
        assert!(rejected.is_err());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_undo_redo_on_empty_is_noop() {
        let mut history = CommandHistory::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.committed().is_empty());
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_redo_stack_is_most_recent_first() {
        let mut history = CommandHistory::new();
        history.commit(stamp(1.0)).unwrap();
        history.commit(stamp(2.0)).unwrap();
        let ids: Vec<_> = history.committed().iter().map(Command::id).collect();

        history.undo();
        history.undo();

        let redo_ids: Vec<_> = history.redo_stack().map(Command::id).collect();
        assert_eq!(redo_ids, vec![ids[0], ids[1]]);
    }

    #[test]
    fn test_invalidate_redo_keeps_committed() {
        let mut history = CommandHistory::new();
        history.commit(stamp(1.0)).unwrap();
        history.commit(stamp(2.0)).unwrap();
        history.undo();

        history.invalidate_redo();
        assert!(!history.can_redo());
        assert_eq!(history.committed().len(), 1);
    }
}

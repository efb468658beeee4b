//! Keyboard shortcut registry.
//!
//! The registry maps key chords to editor commands; the session executes
//! the commands. Bindings are owned by the session and go away with it, so
//! nothing outlives the editor.

/// Commands the editor session can execute from a key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Undo,
    Redo,
    Copy,
    Cut,
    Paste,
    Duplicate,
    SelectAll,
    Deselect,
    DeleteSelection,
    GroupSelection,
    UngroupSelection,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToggleGrid,
    ToggleGuides,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub command: EditorCommand,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        command: EditorCommand,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            command,
            description,
        }
    }

    /// Format for display (e.g. "Ctrl+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// The set of chords bound while an editor session is alive.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    bindings: Vec<Shortcut>,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ShortcutRegistry {
    /// The standard editor bindings.
    pub fn standard() -> Self {
        Self {
            bindings: vec![
                Shortcut::new("Z", true, false, EditorCommand::Undo, "Undo"),
                Shortcut::new("Z", true, true, EditorCommand::Redo, "Redo"),
                Shortcut::new("Y", true, false, EditorCommand::Redo, "Redo"),
                Shortcut::new("C", true, false, EditorCommand::Copy, "Copy selection"),
                Shortcut::new("X", true, false, EditorCommand::Cut, "Cut selection"),
                Shortcut::new("V", true, false, EditorCommand::Paste, "Paste"),
                Shortcut::new("D", true, false, EditorCommand::Duplicate, "Duplicate selection"),
                Shortcut::new("A", true, false, EditorCommand::SelectAll, "Select all objects"),
                Shortcut::new("Escape", false, false, EditorCommand::Deselect, "Clear selection"),
                Shortcut::new("Delete", false, false, EditorCommand::DeleteSelection, "Delete selection"),
                Shortcut::new("Backspace", false, false, EditorCommand::DeleteSelection, "Delete selection"),
                Shortcut::new("G", true, false, EditorCommand::GroupSelection, "Group selection"),
                Shortcut::new("G", true, true, EditorCommand::UngroupSelection, "Ungroup selection"),
                Shortcut::new("=", true, false, EditorCommand::ZoomIn, "Zoom in"),
                Shortcut::new("-", true, false, EditorCommand::ZoomOut, "Zoom out"),
                Shortcut::new("0", true, false, EditorCommand::ZoomReset, "Reset zoom"),
                Shortcut::new("'", true, false, EditorCommand::ToggleGrid, "Toggle grid"),
                Shortcut::new(";", true, false, EditorCommand::ToggleGuides, "Toggle guides"),
            ],
        }
    }

    /// Look up the command bound to a chord, if any.
    pub fn resolve(&self, key: &str, ctrl: bool, shift: bool) -> Option<EditorCommand> {
        self.bindings
            .iter()
            .find(|s| s.ctrl == ctrl && s.shift == shift && s.key.eq_ignore_ascii_case(key))
            .map(|s| s.command)
    }

    /// All registered shortcuts, for a help overlay.
    pub fn bindings(&self) -> &[Shortcut] {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_standard_chords() {
        let registry = ShortcutRegistry::standard();
        assert_eq!(registry.resolve("z", true, false), Some(EditorCommand::Undo));
        assert_eq!(registry.resolve("Z", true, true), Some(EditorCommand::Redo));
        assert_eq!(registry.resolve("y", true, false), Some(EditorCommand::Redo));
        assert_eq!(
            registry.resolve("Delete", false, false),
            Some(EditorCommand::DeleteSelection)
        );
        assert_eq!(
            registry.resolve("g", true, true),
            Some(EditorCommand::UngroupSelection)
        );
    }

    #[test]
    fn unbound_chords_resolve_to_none() {
        let registry = ShortcutRegistry::standard();
        assert_eq!(registry.resolve("Q", true, false), None);
        // Modifier must match exactly.
        assert_eq!(registry.resolve("Delete", true, false), None);
    }

    #[test]
    fn format_renders_modifiers() {
        let shortcut = Shortcut::new("Z", true, true, EditorCommand::Redo, "Redo");
        assert_eq!(shortcut.format(), "Ctrl+Shift+Z");
    }
}

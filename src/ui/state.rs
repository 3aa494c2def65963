//! UI-only state layered on top of the editor core.
//!
//! Everything here is presentation detail (search boxes, collapsed groups,
//! hover). Graph, viewport and selection live in [`Editor`].

use crate::catalog::Category;
use crate::editor::Editor;
use crate::seed::starter_pipeline;
use crate::types::NodeId;
use std::collections::HashSet;

/// State of the component library sidebar.
#[derive(Debug, Default)]
pub struct LibraryState {
    /// Current search text
    pub search: String,
    /// Categories the user has collapsed
    pub collapsed: HashSet<Category>,
}

impl LibraryState {
    /// Flips a category between expanded and collapsed.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.collapsed.remove(&category) {
            self.collapsed.insert(category);
        }
    }

    /// Whether a category's entries are listed.
    pub fn is_expanded(&self, category: Category) -> bool {
        !self.collapsed.contains(&category)
    }
}

/// State of the add-node popover.
#[derive(Debug, Default)]
pub struct PopoverState {
    /// Current search text
    pub search: String,
    /// Set on the frame the popover opens so the opening click does not close it
    pub just_opened: bool,
}

/// The main application: editor core plus presentation state.
pub struct WorkflowApp {
    /// Graph, viewport, selection and gestures
    pub editor: Editor,
    /// Sidebar search and grouping
    pub library: LibraryState,
    /// Add-node popover
    pub popover: PopoverState,
    /// Node whose "+" buttons are showing
    pub hovered_node: Option<NodeId>,
}

impl Default for WorkflowApp {
    fn default() -> Self {
        Self::with_editor(Editor::with_workflow(starter_pipeline()))
    }
}

impl WorkflowApp {
    /// App around an existing editor.
    pub fn with_editor(editor: Editor) -> Self {
        Self {
            editor,
            library: LibraryState::default(),
            popover: PopoverState::default(),
            hovered_node: None,
        }
    }
}

//! The editor core: application state and every operation that mutates it.
//!
//! [`Editor`] owns the workflow graph, the viewport, the selection, the active
//! pointer gesture and the pending directional add. Presentation code reads
//! from it and calls its methods; it never mutates shared state directly.
//!
//! # Module Organization
//!
//! - `viewport` - Screen/world transform, pan and zoom
//! - `input` - Toolkit-independent input events
//! - `gesture` - Pan/drag state machine driven by input events
//! - `selection` - Single selection and inspector visibility
//! - `placement` - Library drops and directional add with auto-connect

mod gesture;
mod input;
mod placement;
mod selection;
mod viewport;

pub use gesture::Gesture;
pub use input::{HitTarget, InputEvent, PointerButton};
pub use placement::{auto_connection, drop_position, placement_offset, popover_anchor, PendingAdd};
pub use selection::Selection;
pub use viewport::Viewport;

use crate::types::*;
use crate::workflow::Workflow;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light palette
    Light,
    /// Dark palette
    #[default]
    Dark,
}

/// Application state for one editing session.
#[derive(Debug, Clone)]
pub struct Editor {
    workflow: Workflow,
    viewport: Viewport,
    selection: Selection,
    gesture: Gesture,
    pending_add: Option<PendingAdd>,
    theme_mode: ThemeMode,
    sidebar_open: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_workflow(Workflow::new())
    }
}

impl Editor {
    /// Editor over an existing workflow, with default viewport and nothing selected.
    pub fn with_workflow(workflow: Workflow) -> Self {
        Self {
            workflow,
            viewport: Viewport::default(),
            selection: Selection::default(),
            gesture: Gesture::Idle,
            pending_add: None,
            theme_mode: ThemeMode::default(),
            sidebar_open: true,
        }
    }

    /// The graph being edited.
    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    /// Current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable viewport, for programmatic zoom/pan.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected node, if it still exists.
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.selected().and_then(|id| self.workflow.node(id))
    }

    /// Selects a node; the inspector opens even if it was already selected.
    pub fn select_node(&mut self, id: NodeId) {
        self.selection.set(Some(id));
    }

    /// Clears the selection and closes the inspector.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Hides the inspector but keeps the node selected.
    pub fn close_inspector(&mut self) {
        self.selection.close_inspector();
    }

    /// Merges a partial data update into a node. Missing nodes are ignored.
    pub fn update_node_data(&mut self, id: &NodeId, patch: NodeDataPatch) -> bool {
        self.workflow.update_node_data(id, patch)
    }

    /// Deletes a node and its connections, then clears the selection.
    ///
    /// The selection is cleared even when another node was selected. If the
    /// node was being dragged the gesture ends immediately.
    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        if matches!(&self.gesture, Gesture::DraggingNode { node, .. } if node == id) {
            self.release_gesture();
        }
        let removed = self.workflow.remove_node(id);
        self.selection.clear();
        removed
    }

    /// Deletes the selected node, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.selection.selected().cloned() {
            Some(id) => self.delete_node(&id),
            None => false,
        }
    }

    /// Topmost node under a canvas-local screen point. The selected node is
    /// painted last, so it wins ties.
    pub fn node_at_screen(&self, screen: Position) -> Option<&Node> {
        let world = self.viewport.screen_to_world(screen);
        self.selected_node()
            .filter(|n| n.world_rect().contains(world))
            .or_else(|| self.workflow.node_at(world))
    }

    /// Current theme.
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Switches between light and dark.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = match self.theme_mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }

    /// Whether the component library sidebar is expanded.
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Expands or collapses the component library sidebar.
    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::starter_pipeline;

    #[test]
    fn test_delete_always_clears_selection() {
        let mut ed = Editor::with_workflow(starter_pipeline());
        ed.select_node(NodeId::from("2"));

        assert!(ed.delete_node(&NodeId::from("4")));
        assert!(ed.selection().selected().is_none());
        assert!(!ed.selection().inspector_visible());

        ed.select_node(NodeId::from("2"));
        assert!(!ed.delete_node(&NodeId::from("missing")));
        assert!(ed.selection().selected().is_none());
    }

    #[test]
    fn test_delete_is_a_set_difference() {
        let mut ed = Editor::with_workflow(starter_pipeline());
        let before = ed.workflow().clone();
        let victim = NodeId::from("2");

        ed.delete_node(&victim);

        let expected_nodes: Vec<&Node> =
            before.nodes().iter().filter(|n| n.id != victim).collect();
        let expected_conns: Vec<&Connection> = before
            .connections()
            .iter()
            .filter(|c| !c.touches(&victim))
            .collect();
        assert_eq!(ed.workflow().nodes().iter().collect::<Vec<_>>(), expected_nodes);
        assert_eq!(
            ed.workflow().connections().iter().collect::<Vec<_>>(),
            expected_conns
        );
        assert_eq!(ed.workflow().connections().len(), 1);
    }

    #[test]
    fn test_delete_selected_uses_selection() {
        let mut ed = Editor::with_workflow(starter_pipeline());
        assert!(!ed.delete_selected());

        ed.select_node(NodeId::from("5"));
        assert!(ed.delete_selected());
        assert!(ed.workflow().node(&NodeId::from("5")).is_none());
    }

    #[test]
    fn test_update_node_data_through_editor() {
        let mut ed = Editor::with_workflow(starter_pipeline());
        assert!(ed.update_node_data(&NodeId::from("3"), NodeDataPatch::status(NodeStatus::Running)));
        assert_eq!(
            ed.workflow().node(&NodeId::from("3")).unwrap().data.status,
            Some(NodeStatus::Running)
        );
        assert!(!ed.update_node_data(&NodeId::from("9"), NodeDataPatch::label("x")));
    }

    #[test]
    fn test_node_at_screen_respects_viewport_and_selection() {
        let mut ed = Editor::with_workflow(starter_pipeline());
        ed.viewport_mut().pan_by(pos(50.0, 0.0));
        ed.viewport_mut().set_scale(0.5);

        // Node 1 spans world (100..340, 300..420) -> screen (100..220, 150..210).
        assert_eq!(ed.node_at_screen(pos(110.0, 160.0)).unwrap().id.as_str(), "1");
        assert!(ed.node_at_screen(pos(10.0, 10.0)).is_none());

        // Node 3 spans screen (450..570, 100..160).
        ed.select_node(NodeId::from("5"));
        assert_eq!(ed.node_at_screen(pos(460.0, 110.0)).unwrap().id.as_str(), "3");
    }

    #[test]
    fn test_theme_toggle() {
        let mut ed = Editor::default();
        assert_eq!(ed.theme_mode(), ThemeMode::Dark);
        ed.toggle_theme();
        assert_eq!(ed.theme_mode(), ThemeMode::Light);
        ed.toggle_theme();
        assert_eq!(ed.theme_mode(), ThemeMode::Dark);
    }
}

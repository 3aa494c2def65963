//! Single-node selection and the inspector visibility derived from it.

use crate::types::NodeId;

/// Selected node plus the inspector's open flag.
///
/// Every selection change recomputes `inspector_open` from the new selection.
/// The user may close the inspector while keeping the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<NodeId>,
    inspector_open: bool,
}

impl Selection {
    /// The selected node, if any.
    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// Whether `id` is the selected node.
    pub fn is_selected(&self, id: &NodeId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Sets (or clears) the selection and reopens/closes the inspector accordingly.
    pub fn set(&mut self, id: Option<NodeId>) {
        self.inspector_open = id.is_some();
        self.selected = id;
    }

    /// Clears the selection, which always closes the inspector.
    pub fn clear(&mut self) {
        self.set(None);
    }

    /// Closes the inspector without touching the selection.
    pub fn close_inspector(&mut self) {
        self.inspector_open = false;
    }

    /// Whether the inspector panel should be shown.
    pub fn inspector_visible(&self) -> bool {
        self.inspector_open && self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_selection_keeps_inspector_open() {
        let mut sel = Selection::default();
        assert!(!sel.inspector_visible());

        sel.set(Some(NodeId::from("a")));
        assert!(sel.inspector_visible());
        sel.set(Some(NodeId::from("b")));
        assert!(sel.inspector_visible());
        assert!(sel.is_selected(&NodeId::from("b")));

        sel.set(None);
        assert!(!sel.inspector_visible());
        assert!(sel.selected().is_none());
    }

    #[test]
    fn test_closing_inspector_keeps_selection_until_reselect() {
        let mut sel = Selection::default();
        sel.set(Some(NodeId::from("a")));
        sel.close_inspector();

        assert!(!sel.inspector_visible());
        assert!(sel.is_selected(&NodeId::from("a")));

        sel.set(Some(NodeId::from("a")));
        assert!(sel.inspector_visible());
    }
}

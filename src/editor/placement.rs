//! Where new nodes go and how they are wired.
//!
//! Covers both entry points for creating nodes: dropping a library entry on the
//! canvas, and the directional "+" buttons that spawn a connected neighbour.

use super::Editor;
use crate::constants::*;
use crate::types::*;

/// An add-button click waiting for the user to pick a node type.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAdd {
    /// Node whose button was clicked
    pub source: NodeId,
    /// Edge the button sits on
    pub direction: Direction,
    /// Window-space top-left corner for the popover
    pub popover_anchor: Position,
}

/// World-space offset from the source node for a node added in `direction`.
pub fn placement_offset(direction: Direction) -> Position {
    match direction {
        Direction::Right => pos(PLACEMENT_OFFSET_X, 0.0),
        Direction::Left => pos(-PLACEMENT_OFFSET_X, 0.0),
        Direction::Bottom => pos(0.0, PLACEMENT_OFFSET_Y),
        Direction::Top => pos(0.0, -PLACEMENT_OFFSET_Y),
    }
}

/// Popover position next to the clicked button.
pub fn popover_anchor(button: Rect, direction: Direction) -> Position {
    let mut anchor = pos(button.right() + POPOVER_GAP, button.top());
    match direction {
        Direction::Left => anchor.x = button.left() - POPOVER_WIDTH,
        Direction::Top => anchor.y = button.top() - POPOVER_RAISE,
        Direction::Bottom => anchor.y = button.bottom() + POPOVER_GAP,
        Direction::Right => {}
    }
    anchor
}

/// World position for a node dropped at a window-space point.
pub fn drop_position(window: Position) -> Position {
    window - pos(DROP_CHROME_OFFSET.0, DROP_CHROME_OFFSET.1)
}

/// Connection wiring a new node to its source according to `direction`.
///
/// Nodes added to the right/bottom consume the source's output; nodes added to
/// the left/top feed the source's input.
pub fn auto_connection(source: &NodeId, new_node: &NodeId, direction: Direction) -> Connection {
    let (from, to) = if direction.is_downstream() {
        (source.clone(), new_node.clone())
    } else {
        (new_node.clone(), source.clone())
    };
    Connection::new(
        ConnectionId::generate(),
        (from, DEFAULT_OUTPUT_PORT),
        (to, DEFAULT_INPUT_PORT),
    )
}

impl Editor {
    /// Creates a node from a library drop. Unknown payloads are ignored.
    ///
    /// # Arguments
    ///
    /// * `payload` - Node type key carried by the drag (e.g. `"detection"`)
    /// * `window_pos` - Drop position in window coordinates
    ///
    /// # Returns
    ///
    /// The id of the created node, or `None` if the payload was not a node type.
    pub fn drop_from_library(&mut self, payload: &str, window_pos: Position) -> Option<NodeId> {
        let node_type = match payload.parse::<NodeType>() {
            Ok(t) => t,
            Err(err) => {
                log::debug!("ignoring drop: {err}");
                return None;
            }
        };

        let node = Node::new(
            NodeId::generate(),
            node_type,
            drop_position(window_pos),
            NodeData::labeled(format!("New {node_type}"))
                .with_description("Configure this node")
                .with_status(NodeStatus::Idle),
        );
        Some(self.workflow.add_node(node))
    }

    /// Records an add-button click and opens the library popover next to the button.
    pub fn begin_directional_add(&mut self, source: NodeId, direction: Direction, button: Rect) {
        log::debug!("pending add {direction} of {source}");
        self.pending_add = Some(PendingAdd {
            source,
            direction,
            popover_anchor: popover_anchor(button, direction),
        });
    }

    /// The add waiting for a popover choice.
    pub fn pending_add(&self) -> Option<&PendingAdd> {
        self.pending_add.as_ref()
    }

    /// Closes the popover without creating anything.
    pub fn cancel_pending_add(&mut self) {
        if self.pending_add.take().is_some() {
            log::debug!("pending add cancelled");
        }
    }

    /// Completes a pending add with the chosen type.
    ///
    /// The pending add is always cleared. If there was none, or its source node
    /// has been deleted meanwhile, nothing is created.
    ///
    /// # Returns
    ///
    /// The id of the new node.
    pub fn complete_directional_add(&mut self, node_type: NodeType) -> Option<NodeId> {
        let pending = self.pending_add.take()?;
        let source_position = match self.workflow.node(&pending.source) {
            Some(source) => source.position,
            None => {
                log::debug!("source {} vanished; add aborted", pending.source);
                return None;
            }
        };

        let node = Node::new(
            NodeId::generate(),
            node_type,
            source_position + placement_offset(pending.direction),
            NodeData::labeled(format!("New {node_type}"))
                .with_description("Newly added node")
                .with_status(NodeStatus::Idle),
        );
        let connection = auto_connection(&pending.source, &node.id, pending.direction);
        Some(self.workflow.insert_linked(node, connection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Workflow;

    fn editor_with_source(at: Position) -> Editor {
        let mut wf = Workflow::new();
        wf.add_node(Node::new(
            NodeId::from("S"),
            NodeType::Tracking,
            at,
            NodeData::labeled("ByteTrack"),
        ));
        Editor::with_workflow(wf)
    }

    fn add(editor: &mut Editor, direction: Direction) -> (Node, Connection) {
        editor.begin_directional_add(NodeId::from("S"), direction, Rect::default());
        let id = editor
            .complete_directional_add(NodeType::Logic)
            .expect("node created");
        let node = editor.workflow().node(&id).cloned().unwrap();
        let conn = editor
            .workflow()
            .connections()
            .iter()
            .find(|c| c.touches(&id))
            .cloned()
            .unwrap();
        (node, conn)
    }

    #[test]
    fn test_all_four_directions_place_and_wire() {
        let source = NodeId::from("S");
        let cases = [
            (Direction::Right, pos(1150.0, 200.0), true),
            (Direction::Left, pos(450.0, 200.0), false),
            (Direction::Top, pos(800.0, 0.0), false),
            (Direction::Bottom, pos(800.0, 400.0), true),
        ];

        for (direction, expected, downstream) in cases {
            let mut editor = editor_with_source(pos(800.0, 200.0));
            let (node, conn) = add(&mut editor, direction);

            assert_eq!(node.position, expected, "{direction}");
            assert_eq!(node.inputs, vec!["in-1".to_string()]);
            assert_eq!(node.outputs, vec!["out-1".to_string()]);
            assert_eq!(node.data.status, Some(NodeStatus::Idle));
            assert_eq!(conn.source_port, "out-1");
            assert_eq!(conn.target_port, "in-1");
            if downstream {
                assert_eq!(conn.source_node_id, source, "{direction}");
                assert_eq!(conn.target_node_id, node.id, "{direction}");
            } else {
                assert_eq!(conn.source_node_id, node.id, "{direction}");
                assert_eq!(conn.target_node_id, source, "{direction}");
            }
            assert_eq!(editor.workflow().connections().len(), 1);
            assert!(editor.pending_add().is_none());
        }
    }

    #[test]
    fn test_missing_source_aborts_and_clears_pending() {
        let mut editor = editor_with_source(pos(0.0, 0.0));
        editor.begin_directional_add(NodeId::from("S"), Direction::Right, Rect::default());
        editor.delete_node(&NodeId::from("S"));

        assert!(editor.pending_add().is_some());
        assert!(editor.complete_directional_add(NodeType::Output).is_none());
        assert!(editor.pending_add().is_none());
        assert!(editor.workflow().nodes().is_empty());
        assert!(editor.workflow().connections().is_empty());
    }

    #[test]
    fn test_complete_without_pending_does_nothing() {
        let mut editor = editor_with_source(pos(0.0, 0.0));
        assert!(editor.complete_directional_add(NodeType::Pose).is_none());
        assert_eq!(editor.workflow().nodes().len(), 1);
    }

    #[test]
    fn test_cancel_clears_pending() {
        let mut editor = editor_with_source(pos(0.0, 0.0));
        editor.begin_directional_add(NodeId::from("S"), Direction::Top, Rect::default());
        editor.cancel_pending_add();
        assert!(editor.pending_add().is_none());
        assert!(editor.complete_directional_add(NodeType::Pose).is_none());
    }

    #[test]
    fn test_popover_anchor_per_direction() {
        let button = Rect::from_min_size(pos(100.0, 50.0), pos(20.0, 20.0));

        assert_eq!(popover_anchor(button, Direction::Right), pos(130.0, 50.0));
        assert_eq!(popover_anchor(button, Direction::Left), pos(-170.0, 50.0));
        assert_eq!(popover_anchor(button, Direction::Top), pos(130.0, -150.0));
        assert_eq!(popover_anchor(button, Direction::Bottom), pos(130.0, 80.0));
    }

    #[test]
    fn test_drop_creates_unconnected_node_at_corrected_position() {
        let mut editor = editor_with_source(pos(0.0, 0.0));
        let id = editor
            .drop_from_library("classifier", pos(700.0, 400.0))
            .unwrap();

        let node = editor.workflow().node(&id).unwrap();
        assert_eq!(node.node_type, NodeType::Classifier);
        assert_eq!(node.position, pos(400.0, 300.0));
        assert_eq!(node.data.label, "New classifier");
        assert_eq!(node.data.description.as_deref(), Some("Configure this node"));
        assert!(editor.workflow().connections().is_empty());
    }

    #[test]
    fn test_drop_with_unknown_payload_is_ignored() {
        let mut editor = editor_with_source(pos(0.0, 0.0));
        assert!(editor.drop_from_library("text/plain", pos(1.0, 1.0)).is_none());
        assert!(editor.drop_from_library("", pos(1.0, 1.0)).is_none());
        assert_eq!(editor.workflow().nodes().len(), 1);
    }
}

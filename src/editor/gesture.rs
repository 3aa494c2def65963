//! Canvas interaction state machine: panning, node dragging and wheel zoom.
//!
//! A gesture starts on a pointer press over the canvas and holds the pointer
//! capture until the button is released or the pointer is lost. While captured,
//! moves are honoured even when the pointer leaves the canvas.

use super::input::{HitTarget, InputEvent, PointerButton};
use super::Editor;
use crate::types::{NodeId, Position};

/// The active pointer gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    /// No button held
    #[default]
    Idle,
    /// Dragging empty canvas; the offset follows the pointer incrementally.
    PanningCanvas {
        /// Pointer position at the previous move
        last: Position,
    },
    /// Dragging a node; its position is recomputed from the anchor on every move.
    DraggingNode {
        /// Node being dragged
        node: NodeId,
        /// Pointer position at press time
        pointer_start: Position,
        /// Node position at press time
        node_start: Position,
    },
}

impl Editor {
    /// The current gesture.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Whether pointer moves/releases outside the canvas must still reach the editor.
    pub fn is_capturing_pointer(&self) -> bool {
        !matches!(self.gesture, Gesture::Idle)
    }

    /// Feeds one input event through the interaction state machine.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos, button, target } => self.pointer_down(pos, button, target),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp { .. } | InputEvent::PointerLost => self.release_gesture(),
            InputEvent::Wheel { delta, zoom } => {
                if zoom {
                    self.viewport.zoom_step(delta.y);
                } else {
                    self.viewport.scroll_by(delta);
                }
            }
        }
    }

    fn pointer_down(&mut self, pos: Position, button: PointerButton, target: HitTarget) {
        if self.is_capturing_pointer() {
            return;
        }

        match (button, target) {
            (PointerButton::Middle, _) | (PointerButton::Primary, HitTarget::Background) => {
                log::debug!("gesture: idle -> panning");
                self.gesture = Gesture::PanningCanvas { last: pos };
                self.selection.clear();
            }
            (PointerButton::Primary, HitTarget::Node(id)) => {
                let Some(node_start) = self.workflow.node(&id).map(|n| n.position) else {
                    return;
                };
                log::debug!("gesture: idle -> dragging {id}");
                self.selection.set(Some(id.clone()));
                self.gesture = Gesture::DraggingNode {
                    node: id,
                    pointer_start: pos,
                    node_start,
                };
            }
            (PointerButton::Secondary, _) => {}
        }
    }

    fn pointer_move(&mut self, pos: Position) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::PanningCanvas { last } => {
                let delta = pos - *last;
                *last = pos;
                self.viewport.pan_by(delta);
            }
            Gesture::DraggingNode {
                node,
                pointer_start,
                node_start,
            } => {
                let target = *node_start + (pos - *pointer_start) / self.viewport.scale();
                if !self.workflow.move_node(node, target) {
                    self.release_gesture();
                }
            }
        }
    }

    /// Ends any active gesture and releases the pointer capture.
    pub(super) fn release_gesture(&mut self) {
        if self.is_capturing_pointer() {
            log::debug!("gesture: -> idle");
        }
        self.gesture = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::input::HitTarget;
    use crate::types::*;
    use crate::workflow::Workflow;

    fn editor() -> Editor {
        let mut wf = Workflow::new();
        wf.add_node(Node::new(
            NodeId::from("n"),
            NodeType::Detection,
            pos(100.0, 100.0),
            NodeData::labeled("YOLO"),
        ));
        wf.add_node(Node::new(
            NodeId::from("m"),
            NodeType::Output,
            pos(500.0, 100.0),
            NodeData::labeled("Sink"),
        ));
        Editor::with_workflow(wf)
    }

    fn press(editor: &mut Editor, at: Position, button: PointerButton, target: HitTarget) {
        editor.handle_input(InputEvent::PointerDown {
            pos: at,
            button,
            target,
        });
    }

    fn move_to(editor: &mut Editor, at: Position) {
        editor.handle_input(InputEvent::PointerMove { pos: at });
    }

    fn node_pos(editor: &Editor, id: &str) -> Position {
        editor.workflow().node(&NodeId::from(id)).unwrap().position
    }

    #[test]
    fn test_background_press_pans_incrementally_and_clears_selection() {
        let mut ed = editor();
        ed.select_node(NodeId::from("n"));

        press(&mut ed, pos(0.0, 0.0), PointerButton::Primary, HitTarget::Background);
        assert!(matches!(ed.gesture(), Gesture::PanningCanvas { .. }));
        assert!(ed.selection().selected().is_none());
        assert!(!ed.selection().inspector_visible());

        move_to(&mut ed, pos(10.0, 10.0));
        move_to(&mut ed, pos(6.0, 16.0));
        assert_eq!(ed.viewport().offset(), pos(6.0, 16.0));

        ed.handle_input(InputEvent::PointerUp { pos: pos(6.0, 16.0) });
        assert_eq!(ed.gesture(), &Gesture::Idle);
        assert!(!ed.is_capturing_pointer());

        move_to(&mut ed, pos(100.0, 100.0));
        assert_eq!(ed.viewport().offset(), pos(6.0, 16.0));
    }

    #[test]
    fn test_middle_press_pans_even_over_a_node() {
        let mut ed = editor();
        press(
            &mut ed,
            pos(150.0, 150.0),
            PointerButton::Middle,
            HitTarget::Node(NodeId::from("n")),
        );
        assert!(matches!(ed.gesture(), Gesture::PanningCanvas { .. }));
        move_to(&mut ed, pos(160.0, 140.0));
        assert_eq!(node_pos(&ed, "n"), pos(100.0, 100.0));
        assert_eq!(ed.viewport().offset(), pos(10.0, -10.0));
    }

    #[test]
    fn test_node_press_selects_and_drags_without_panning() {
        let mut ed = editor();
        press(
            &mut ed,
            pos(150.0, 150.0),
            PointerButton::Primary,
            HitTarget::Node(NodeId::from("n")),
        );

        assert!(ed.selection().is_selected(&NodeId::from("n")));
        assert!(ed.selection().inspector_visible());
        assert!(ed.is_capturing_pointer());

        move_to(&mut ed, pos(170.0, 140.0));
        assert_eq!(node_pos(&ed, "n"), pos(120.0, 90.0));
        assert_eq!(ed.viewport().offset(), Position::ZERO);
    }

    #[test]
    fn test_drag_divides_total_delta_by_scale_regardless_of_granularity() {
        let mut coarse = editor();
        let mut fine = editor();
        for ed in [&mut coarse, &mut fine] {
            ed.viewport_mut().set_scale(2.0);
            press(
                ed,
                pos(300.0, 300.0),
                PointerButton::Primary,
                HitTarget::Node(NodeId::from("n")),
            );
        }

        move_to(&mut coarse, pos(340.0, 260.0));
        for i in 1..=40 {
            let step = i as f32;
            move_to(&mut fine, pos(300.0 + step, 300.0 - step));
        }

        assert_eq!(node_pos(&coarse, "n"), pos(120.0, 80.0));
        assert_eq!(node_pos(&fine, "n"), node_pos(&coarse, "n"));
    }

    #[test]
    fn test_second_press_during_gesture_is_ignored() {
        let mut ed = editor();
        press(
            &mut ed,
            pos(0.0, 0.0),
            PointerButton::Primary,
            HitTarget::Node(NodeId::from("n")),
        );
        press(
            &mut ed,
            pos(0.0, 0.0),
            PointerButton::Middle,
            HitTarget::Node(NodeId::from("m")),
        );
        assert!(matches!(
            ed.gesture(),
            Gesture::DraggingNode { node, .. } if node.as_str() == "n"
        ));
    }

    #[test]
    fn test_secondary_and_stale_presses_do_nothing() {
        let mut ed = editor();
        press(&mut ed, pos(0.0, 0.0), PointerButton::Secondary, HitTarget::Background);
        assert_eq!(ed.gesture(), &Gesture::Idle);

        press(
            &mut ed,
            pos(0.0, 0.0),
            PointerButton::Primary,
            HitTarget::Node(NodeId::from("ghost")),
        );
        assert_eq!(ed.gesture(), &Gesture::Idle);
        assert!(ed.selection().selected().is_none());
    }

    #[test]
    fn test_pointer_lost_ends_gesture() {
        let mut ed = editor();
        press(&mut ed, pos(0.0, 0.0), PointerButton::Primary, HitTarget::Background);
        ed.handle_input(InputEvent::PointerLost);
        assert_eq!(ed.gesture(), &Gesture::Idle);
    }

    #[test]
    fn test_deleting_dragged_node_returns_to_idle() {
        let mut ed = editor();
        press(
            &mut ed,
            pos(0.0, 0.0),
            PointerButton::Primary,
            HitTarget::Node(NodeId::from("n")),
        );
        ed.delete_node(&NodeId::from("n"));

        assert_eq!(ed.gesture(), &Gesture::Idle);
        move_to(&mut ed, pos(50.0, 50.0));
        assert!(ed.workflow().node(&NodeId::from("n")).is_none());
    }

    #[test]
    fn test_wheel_zooms_with_modifier_and_pans_without() {
        let mut ed = editor();
        ed.handle_input(InputEvent::Wheel {
            delta: pos(0.0, -100.0),
            zoom: true,
        });
        assert!((ed.viewport().scale() - 1.05).abs() < 1e-6);

        ed.handle_input(InputEvent::Wheel {
            delta: pos(4.0, 20.0),
            zoom: false,
        });
        assert_eq!(ed.viewport().offset(), pos(-4.0, -20.0));
    }
}

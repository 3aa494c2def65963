//! # FlowVision
//!
//! A visual editor for media/AI processing pipelines. Node templates (video
//! sources, detectors, trackers, pose estimators, classifiers, logic gates and
//! sinks) are dragged from a library onto a pannable, zoomable canvas, wired
//! together and configured in an inspector panel.
//!
//! ## Features
//! - Canvas panning (drag empty space or middle button, wheel scroll) and zooming (Ctrl/Cmd + wheel)
//! - Node dragging with drift-free positioning at any zoom level
//! - Drag-and-drop from the component library
//! - Directional "+" buttons that add and auto-connect a neighbouring node
//! - Inspector panel for labels, descriptions, status and per-type parameters
//! - Light and dark themes
//!
//! The editing rules live in [`editor::Editor`], which is driven by
//! toolkit-independent [`editor::InputEvent`]s; the egui front end only
//! translates input and paints.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod constants;
pub mod editor;
pub mod seed;
mod types;
mod ui;
pub mod workflow;

pub use types::*;
use ui::WorkflowApp;

/// Runs the editor with default window settings.
///
/// # Returns
///
/// Returns `Ok(())` when the window is closed, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// fn main() -> Result<(), eframe::Error> {
///     flow_vision::run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("FlowVision")
            .with_inner_size([1440.0, 900.0]),
        ..Default::default()
    };
    log::info!("starting FlowVision editor");
    eframe::run_native(
        "FlowVision",
        options,
        Box::new(|_cc| Ok(Box::new(WorkflowApp::default()))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor::{Editor, HitTarget, InputEvent, PointerButton};

    #[test]
    fn test_add_detection_to_the_right_of_the_source() {
        let mut wf = workflow::Workflow::new();
        wf.add_node(Node::new(
            NodeId::from("1"),
            NodeType::Input,
            pos(100.0, 300.0),
            NodeData::labeled("Video Source"),
        ));
        let mut ed = Editor::with_workflow(wf);

        ed.begin_directional_add(
            NodeId::from("1"),
            Direction::Right,
            types::Rect::from_min_size(pos(330.0, 350.0), pos(20.0, 20.0)),
        );
        assert!(ed.pending_add().is_some());
        let new_id = ed.complete_directional_add(NodeType::Detection).unwrap();

        let new_node = ed.workflow().node(&new_id).unwrap();
        assert_eq!(new_node.position, pos(450.0, 300.0));
        assert_eq!(new_node.node_type, NodeType::Detection);
        assert_eq!(ed.workflow().connections().len(), 1);
        let conn = &ed.workflow().connections()[0];
        assert_eq!(conn.source_node_id, NodeId::from("1"));
        assert_eq!(conn.source_port, "out-1");
        assert_eq!(conn.target_node_id, new_id);
        assert_eq!(conn.target_port, "in-1");
        assert!(ed.pending_add().is_none());
    }

    #[test]
    fn test_pan_then_drag_on_starter_pipeline() {
        let mut ed = Editor::with_workflow(seed::starter_pipeline());

        ed.handle_input(InputEvent::PointerDown {
            pos: pos(5.0, 5.0),
            button: PointerButton::Primary,
            target: HitTarget::Background,
        });
        ed.handle_input(InputEvent::PointerMove { pos: pos(15.0, 15.0) });
        ed.handle_input(InputEvent::PointerMove { pos: pos(11.0, 21.0) });
        ed.handle_input(InputEvent::PointerUp { pos: pos(11.0, 21.0) });
        assert_eq!(ed.viewport().offset(), pos(6.0, 16.0));

        ed.handle_input(InputEvent::Wheel {
            delta: pos(0.0, -1.0),
            zoom: true,
        });
        let screen = ed
            .viewport()
            .world_to_screen(ed.workflow().node(&NodeId::from("3")).unwrap().position);
        let hit = ed.node_at_screen(screen + pos(1.0, 1.0)).map(|n| n.id.clone());
        assert_eq!(hit, Some(NodeId::from("3")));

        ed.handle_input(InputEvent::PointerDown {
            pos: screen,
            button: PointerButton::Primary,
            target: HitTarget::Node(NodeId::from("3")),
        });
        ed.handle_input(InputEvent::PointerMove {
            pos: screen + pos(21.0, 42.0),
        });
        ed.handle_input(InputEvent::PointerUp { pos: screen });

        let moved = ed.workflow().node(&NodeId::from("3")).unwrap().position;
        assert!((moved.x - 820.0).abs() < 1e-3);
        assert!((moved.y - 240.0).abs() < 1e-3);
        assert!(ed.selection().inspector_visible());
    }
}

//! Toolkit-independent input events consumed by the canvas controller.
//!
//! Positions are canvas-local screen coordinates. Any UI layer (egui, a test,
//! a web shell) can drive the editor by producing these values.

use crate::types::{NodeId, Position};

/// Mouse button of a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button
    Primary,
    /// Wheel button
    Middle,
    /// Right button
    Secondary,
}

/// What was under the pointer when a button went down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas
    Background,
    /// The body of a node
    Node(NodeId),
}

/// One input event delivered to [`Editor::handle_input`](super::Editor::handle_input).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A button was pressed over the canvas.
    PointerDown {
        /// Pointer position
        pos: Position,
        /// Button pressed
        button: PointerButton,
        /// Element under the pointer
        target: HitTarget,
    },
    /// The pointer moved (anywhere, while a gesture holds the capture).
    PointerMove {
        /// Pointer position
        pos: Position,
    },
    /// A button was released anywhere.
    PointerUp {
        /// Pointer position
        pos: Position,
    },
    /// The pointer was lost (left the window, focus change). Ends any gesture.
    PointerLost,
    /// A wheel or trackpad scroll, in browser convention (positive y scrolls down).
    Wheel {
        /// Scroll delta in screen pixels
        delta: Position,
        /// Whether the zoom modifier (Ctrl/Cmd) was held
        zoom: bool,
    },
}

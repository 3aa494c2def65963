//! Shared application-wide constants.
//! Centralizes tweakable values used across the editor core and the canvas renderer.

// Viewport
/// Smallest allowed zoom scale.
pub const MIN_SCALE: f32 = 0.2;
/// Largest allowed zoom scale.
pub const MAX_SCALE: f32 = 3.0;
/// Scale change applied per discrete zoom event.
pub const ZOOM_STEP: f32 = 0.05;
/// Pixels represented by one wheel "line" when the platform reports line units.
pub const WHEEL_LINE_HEIGHT: f32 = 40.0;

// Node geometry (world units)
/// Nominal node width; also the x offset of the output port anchor.
pub const NODE_WIDTH: f32 = 240.0;
/// Nominal node height used for hit testing and painting.
pub const NODE_HEIGHT: f32 = 120.0;
/// Vertical offset of both port anchors from the node's top edge.
pub const PORT_ANCHOR_Y: f32 = 60.0;
/// Minimum horizontal control-point offset for connection curves.
pub const CONNECTION_MIN_CONTROL: f32 = 50.0;

// Placement
/// Horizontal distance between a source node and a node added to its left/right.
pub const PLACEMENT_OFFSET_X: f32 = 350.0;
/// Vertical distance between a source node and a node added above/below it.
pub const PLACEMENT_OFFSET_Y: f32 = 200.0;
/// Correction subtracted from the window-space drop position (sidebar + navbar chrome).
pub const DROP_CHROME_OFFSET: (f32, f32) = (300.0, 100.0);
/// Default input port id given to newly created nodes.
pub const DEFAULT_INPUT_PORT: &str = "in-1";
/// Default output port id given to newly created nodes.
pub const DEFAULT_OUTPUT_PORT: &str = "out-1";

// Popover
/// Gap between the add button and the popover.
pub const POPOVER_GAP: f32 = 10.0;
/// Approximate popover width, used to mirror it to the left of a button.
pub const POPOVER_WIDTH: f32 = 270.0;
/// Vertical shift applied when the popover opens above a button.
pub const POPOVER_RAISE: f32 = 200.0;

// Canvas drawing (screen pixels unless noted)
/// Spacing between background dots in world units.
pub const DOT_SPACING: f32 = 24.0;
/// Radius of background dots.
pub const DOT_RADIUS: f32 = 1.2;
/// Radius of the hover "+" buttons on node edges.
pub const ADD_BUTTON_RADIUS: f32 = 10.0;
/// Corner radius of node cards, in world units.
pub const NODE_CORNER_RADIUS: f32 = 12.0;

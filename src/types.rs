//! Core data types for the workflow editor.
//!
//! This module defines the node and connection records that make up a pipeline
//! graph, together with the small geometry types shared by the editor core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};
use std::str::FromStr;
use uuid::Uuid;

use crate::constants::{DEFAULT_INPUT_PORT, DEFAULT_OUTPUT_PORT, NODE_HEIGHT, NODE_WIDTH};

/// Identifier of a port on a node (e.g. `"in-1"`).
pub type PortId = String;

/// Unique identifier for workflow nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Generates a fresh, collision-free node id.
    pub fn generate() -> Self {
        Self(format!("node-{}", Uuid::new_v4()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for connections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Generates a fresh, collision-free connection id.
    pub fn generate() -> Self {
        Self(format!("c-{}", Uuid::new_v4()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConnectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A 2D point or displacement. Used for both world and screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

/// Shorthand constructor for [`Position`].
pub const fn pos(x: f32, y: f32) -> Position {
    Position { x, y }
}

impl Position {
    /// The origin.
    pub const ZERO: Position = pos(0.0, 0.0);
}

impl Add for Position {
    type Output = Position;
    fn add(self, rhs: Position) -> Position {
        pos(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Position {
    type Output = Position;
    fn sub(self, rhs: Position) -> Position {
        pos(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Position {
    type Output = Position;
    fn mul(self, rhs: f32) -> Position {
        pos(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Position {
    type Output = Position;
    fn div(self, rhs: f32) -> Position {
        pos(self.x / rhs, self.y / rhs)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner
    pub min: Position,
    /// Bottom-right corner
    pub max: Position,
}

impl Rect {
    /// Builds a rectangle from its top-left corner and size.
    pub fn from_min_size(min: Position, size: Position) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Left edge.
    pub fn left(&self) -> f32 {
        self.min.x
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.max.x
    }

    /// Top edge.
    pub fn top(&self) -> f32 {
        self.min.y
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Whether `p` lies inside the rectangle (edges inclusive).
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// The fixed set of pipeline stage kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Video source (camera, RTSP stream, file)
    Input,
    /// Object detection model
    Detection,
    /// Multi-object tracker
    Tracking,
    /// Pose estimation model
    Pose,
    /// Image classifier
    Classifier,
    /// Filtering / routing logic
    Logic,
    /// Output sink
    Output,
}

impl NodeType {
    /// Every node type, in catalog order.
    pub const ALL: [NodeType; 7] = [
        NodeType::Input,
        NodeType::Detection,
        NodeType::Tracking,
        NodeType::Pose,
        NodeType::Classifier,
        NodeType::Logic,
        NodeType::Output,
    ];

    /// Lowercase key used in drag-and-drop payloads and labels.
    pub fn key(self) -> &'static str {
        match self {
            NodeType::Input => "input",
            NodeType::Detection => "detection",
            NodeType::Tracking => "tracking",
            NodeType::Pose => "pose",
            NodeType::Classifier => "classifier",
            NodeType::Logic => "logic",
            NodeType::Output => "output",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name a known [`NodeType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNodeTypeError(String);

impl fmt::Display for ParseNodeTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown node type `{}`", self.0)
    }
}

impl std::error::Error for ParseNodeTypeError {}

impl FromStr for NodeType {
    type Err = ParseNodeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| ParseNodeTypeError(s.to_string()))
    }
}

/// Cosmetic run state shown on a node. Nothing in the editor executes nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Not running
    Idle,
    /// Marked as active
    Running,
    /// Finished
    Completed,
    /// Failed
    Error,
}

impl NodeStatus {
    /// Upper-case badge text.
    pub fn label(self) -> &'static str {
        match self {
            NodeStatus::Idle => "IDLE",
            NodeStatus::Running => "RUNNING",
            NodeStatus::Completed => "COMPLETED",
            NodeStatus::Error => "ERROR",
        }
    }
}

/// Per-type configuration of a node.
///
/// Known node kinds get typed fields; everything else falls back to an opaque
/// JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeProperties {
    /// Video source settings (`input` nodes)
    Source {
        /// Frame resolution label, e.g. `"1080p"`
        resolution: String,
        /// Frames per second
        fps: u32,
    },
    /// Detector/tracker thresholds (`detection` and `tracking` nodes)
    Detector {
        /// Minimum detection confidence, 0..=1
        confidence_threshold: f32,
        /// Intersection-over-union threshold, 0..=1
        iou_threshold: f32,
    },
    /// Free-form key/value settings
    Custom(serde_json::Map<String, serde_json::Value>),
}

impl NodeProperties {
    /// Default properties shown for a node type that has none set yet.
    pub fn defaults_for(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Input => NodeProperties::Source {
                resolution: "1080p".to_string(),
                fps: 30,
            },
            NodeType::Detection | NodeType::Tracking => NodeProperties::Detector {
                confidence_threshold: 0.65,
                iou_threshold: 0.45,
            },
            _ => NodeProperties::Custom(serde_json::Map::new()),
        }
    }
}

/// Editable data record carried by every node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Display label
    pub label: String,
    /// Optional one-line description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cosmetic status; `None` renders as idle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NodeStatus>,
    /// Per-type configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<NodeProperties>,
    /// Reference to a preview image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
}

impl NodeData {
    /// Data with just a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Builder-style description setter.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder-style status setter.
    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Status to display, treating a missing status as idle.
    pub fn effective_status(&self) -> NodeStatus {
        self.status.unwrap_or(NodeStatus::Idle)
    }
}

/// A partial update of [`NodeData`]. Present fields overwrite, absent fields are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeDataPatch {
    /// New label
    pub label: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New status
    pub status: Option<NodeStatus>,
    /// New properties
    pub properties: Option<NodeProperties>,
    /// New preview image reference
    pub preview_image: Option<String>,
}

impl NodeDataPatch {
    /// Patch that only changes the label.
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Patch that only changes the description.
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    /// Patch that only changes the status.
    pub fn status(status: NodeStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Patch that only changes the properties.
    pub fn properties(properties: NodeProperties) -> Self {
        Self {
            properties: Some(properties),
            ..Default::default()
        }
    }

    /// Merges this patch into `data`.
    pub fn apply_to(self, data: &mut NodeData) {
        if let Some(label) = self.label {
            data.label = label;
        }
        if let Some(description) = self.description {
            data.description = Some(description);
        }
        if let Some(status) = self.status {
            data.status = Some(status);
        }
        if let Some(properties) = self.properties {
            data.properties = Some(properties);
        }
        if let Some(preview_image) = self.preview_image {
            data.preview_image = Some(preview_image);
        }
    }
}

/// A single pipeline stage placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Stage kind
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Top-left corner in world space
    pub position: Position,
    /// Editable data
    pub data: NodeData,
    /// Input port ids, in order
    pub inputs: Vec<PortId>,
    /// Output port ids, in order
    pub outputs: Vec<PortId>,
}

impl Node {
    /// Creates a node with the default `in-1` / `out-1` ports.
    pub fn new(id: NodeId, node_type: NodeType, position: Position, data: NodeData) -> Self {
        Self {
            id,
            node_type,
            position,
            data,
            inputs: vec![DEFAULT_INPUT_PORT.to_string()],
            outputs: vec![DEFAULT_OUTPUT_PORT.to_string()],
        }
    }

    /// Replaces the port lists.
    pub fn with_ports(mut self, inputs: &[&str], outputs: &[&str]) -> Self {
        self.inputs = inputs.iter().map(|p| p.to_string()).collect();
        self.outputs = outputs.iter().map(|p| p.to_string()).collect();
        self
    }

    /// World-space bounds used for hit testing and painting.
    pub fn world_rect(&self) -> Rect {
        Rect::from_min_size(self.position, pos(NODE_WIDTH, NODE_HEIGHT))
    }
}

/// A directed edge from an output port to an input port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Unique identifier
    pub id: ConnectionId,
    /// Producing node
    pub source_node_id: NodeId,
    /// Output port on the producing node
    #[serde(rename = "sourceHandle")]
    pub source_port: PortId,
    /// Consuming node
    pub target_node_id: NodeId,
    /// Input port on the consuming node
    #[serde(rename = "targetHandle")]
    pub target_port: PortId,
}

impl Connection {
    /// Creates a connection between two ports.
    pub fn new(
        id: ConnectionId,
        source: (NodeId, &str),
        target: (NodeId, &str),
    ) -> Self {
        Self {
            id,
            source_node_id: source.0,
            source_port: source.1.to_string(),
            target_node_id: target.0,
            target_port: target.1.to_string(),
        }
    }

    /// Whether either endpoint is `node_id`.
    pub fn touches(&self, node_id: &NodeId) -> bool {
        self.source_node_id == *node_id || self.target_node_id == *node_id
    }
}

/// Edge of a node on which an add button sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Above the node
    Top,
    /// To the right of the node
    Right,
    /// Below the node
    Bottom,
    /// To the left of the node
    Left,
}

impl Direction {
    /// Whether a node added in this direction consumes the source's output.
    pub fn is_downstream(self) -> bool {
        matches!(self, Direction::Right | Direction::Bottom)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        })
    }
}

//! Light/dark palettes and the per-type accent and icon lookups.

use crate::editor::ThemeMode;
use crate::types::NodeType;
use eframe::egui::{self, Color32};

/// The five accent colours nodes are tinted with.
#[derive(Debug, Clone, Copy)]
pub struct NodeAccents {
    /// Sources and logic gates
    pub blue: Color32,
    /// Tracking and output sinks
    pub orange: Color32,
    /// Detection
    pub purple: Color32,
    /// Pose estimation
    pub teal: Color32,
    /// Classification
    pub green: Color32,
}

/// Colours used by every panel and the canvas.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Connection dashes and "+" buttons
    pub primary: Color32,
    /// Version badge
    pub secondary: Color32,
    /// Canvas fill
    pub background: Color32,
    /// Panels, node cards and the popover
    pub surface: Color32,
    /// Library cards and text field backgrounds
    pub surface_highlight: Color32,
    /// Borders and grid dots
    pub stroke: Color32,
    /// Primary text
    pub text: Color32,
    /// Field labels and hints
    pub text_secondary: Color32,
    /// Per-type accents
    pub node: NodeAccents,
}

/// Light theme.
pub const LIGHT: Palette = Palette {
    primary: Color32::from_rgb(0x4A, 0x74, 0xFF),
    secondary: Color32::from_rgb(0x8A, 0xA8, 0xFF),
    background: Color32::from_rgb(0xF5, 0xF7, 0xFB),
    surface: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    surface_highlight: Color32::from_rgb(0xF0, 0xF2, 0xF5),
    stroke: Color32::from_rgb(0xDC, 0xE1, 0xEB),
    text: Color32::from_rgb(0x11, 0x18, 0x27),
    text_secondary: Color32::from_rgb(0x6B, 0x72, 0x80),
    node: NodeAccents {
        blue: Color32::from_rgb(0x3B, 0x82, 0xF6),
        orange: Color32::from_rgb(0xF9, 0x73, 0x16),
        purple: Color32::from_rgb(0x8B, 0x5C, 0xF6),
        teal: Color32::from_rgb(0x14, 0xB8, 0xA6),
        green: Color32::from_rgb(0x10, 0xB9, 0x81),
    },
};

/// Dark theme.
pub const DARK: Palette = Palette {
    primary: Color32::from_rgb(0x6E, 0x8C, 0xFF),
    secondary: Color32::from_rgb(0xA9, 0xB8, 0xFF),
    background: Color32::from_rgb(0x0F, 0x12, 0x1A),
    surface: Color32::from_rgb(0x1A, 0x1F, 0x2B),
    surface_highlight: Color32::from_rgb(0x23, 0x29, 0x36),
    stroke: Color32::from_rgb(0x2E, 0x34, 0x43),
    text: Color32::from_rgb(0xF3, 0xF4, 0xF6),
    text_secondary: Color32::from_rgb(0x9C, 0xA3, 0xAF),
    node: NodeAccents {
        blue: Color32::from_rgb(0x60, 0xA5, 0xFA),
        orange: Color32::from_rgb(0xFB, 0x92, 0x3C),
        purple: Color32::from_rgb(0xA7, 0x8B, 0xFA),
        teal: Color32::from_rgb(0x2D, 0xD4, 0xBF),
        green: Color32::from_rgb(0x34, 0xD3, 0x99),
    },
};

impl Palette {
    /// Palette for a theme mode.
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    /// Accent colour of a node type.
    pub fn accent(&self, node_type: NodeType) -> Color32 {
        match node_type {
            NodeType::Input | NodeType::Logic => self.node.blue,
            NodeType::Detection => self.node.purple,
            NodeType::Tracking | NodeType::Output => self.node.orange,
            NodeType::Pose => self.node.teal,
            NodeType::Classifier => self.node.green,
        }
    }

    /// egui visuals matching this palette.
    pub fn visuals(&self, mode: ThemeMode) -> egui::Visuals {
        let mut visuals = match mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };
        visuals.panel_fill = self.surface;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.surface_highlight;
        visuals.override_text_color = Some(self.text);
        visuals.selection.bg_fill = self.primary;
        visuals.widgets.noninteractive.bg_stroke.color = self.stroke;
        visuals
    }
}

/// Icon glyph drawn in a node's badge and next to library entries.
pub fn icon(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Input => "📹",
        NodeType::Detection => "🔍",
        NodeType::Tracking => "🎯",
        NodeType::Pose => "🏃",
        NodeType::Classifier => "🏷",
        NodeType::Logic => "🔀",
        NodeType::Output => "💾",
    }
}

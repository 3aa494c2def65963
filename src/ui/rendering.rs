//! Canvas painting: dot grid, connection curves, node cards and overlays.
//!
//! Everything is drawn in layers: background and grid first, then connections,
//! then nodes (selected node last), then the hover buttons and zoom badge.

use super::canvas::add_button_centers;
use super::state::WorkflowApp;
use super::theme::{icon, Palette};
use crate::constants::*;
use crate::types::{pos, Node, NodeStatus};
use crate::workflow::{input_anchor, output_anchor};
use eframe::egui;
use eframe::epaint::{CubicBezierShape, StrokeKind};

impl WorkflowApp {
    /// Paints the whole canvas.
    ///
    /// # Arguments
    ///
    /// * `painter` - Painter clipped to the canvas
    /// * `canvas_rect` - Screen-space rectangle of the canvas
    /// * `palette` - Active theme colours
    pub(super) fn render_workflow(
        &self,
        painter: &egui::Painter,
        canvas_rect: egui::Rect,
        palette: &Palette,
    ) {
        painter.rect_filled(canvas_rect, 0.0, palette.background);
        self.draw_dot_grid(painter, canvas_rect, palette);

        for (_, source, target) in self.editor.workflow().renderable_connections() {
            self.draw_connection(painter, canvas_rect, palette, source, target);
        }

        let selected = self.editor.selection().selected();
        for node in self.editor.workflow().nodes() {
            if Some(&node.id) != selected {
                self.draw_node(painter, canvas_rect, palette, node, false);
            }
        }
        if let Some(node) = self.editor.selected_node() {
            self.draw_node(painter, canvas_rect, palette, node, true);
        }

        if let Some(node) = self
            .hovered_node
            .as_ref()
            .and_then(|id| self.editor.workflow().node(id))
        {
            self.draw_add_buttons(painter, canvas_rect, palette, node);
        }

        self.draw_zoom_badge(painter, canvas_rect, palette);
    }

    /// Dot grid that follows pan and zoom. Dots are thinned out when zoomed far out.
    fn draw_dot_grid(&self, painter: &egui::Painter, canvas_rect: egui::Rect, palette: &Palette) {
        let viewport = self.editor.viewport();
        let mut step = DOT_SPACING * viewport.scale();
        while step < 12.0 {
            step *= 2.0;
        }

        let offset = viewport.offset();
        let start_x = canvas_rect.left() + offset.x.rem_euclid(step);
        let start_y = canvas_rect.top() + offset.y.rem_euclid(step);

        let mut y = start_y;
        while y < canvas_rect.bottom() {
            let mut x = start_x;
            while x < canvas_rect.right() {
                painter.circle_filled(egui::pos2(x, y), DOT_RADIUS, palette.stroke);
                x += step;
            }
            y += step;
        }
    }

    /// Bezier from the source's output anchor to the target's input anchor.
    fn draw_connection(
        &self,
        painter: &egui::Painter,
        canvas_rect: egui::Rect,
        palette: &Palette,
        source: &Node,
        target: &Node,
    ) {
        let start = output_anchor(source);
        let end = input_anchor(target);
        let control = ((end.x - start.x).abs() * 0.5).max(CONNECTION_MIN_CONTROL);

        let points = [
            start,
            start + pos(control, 0.0),
            end - pos(control, 0.0),
            end,
        ]
        .map(|p| self.world_to_canvas(p, canvas_rect));

        let scale = self.editor.viewport().scale();
        let base = CubicBezierShape::from_points_stroke(
            points,
            false,
            egui::Color32::TRANSPARENT,
            egui::Stroke::new(2.0 * scale, palette.stroke),
        );
        let path = base.flatten(None);
        painter.add(base);
        painter.extend(egui::Shape::dashed_line(
            &path,
            egui::Stroke::new(2.0 * scale, palette.primary),
            8.0 * scale,
            8.0 * scale,
        ));
    }

    /// Node card: accent strip, icon badge, label, type, description, status and handles.
    fn draw_node(
        &self,
        painter: &egui::Painter,
        canvas_rect: egui::Rect,
        palette: &Palette,
        node: &Node,
        selected: bool,
    ) {
        let scale = self.editor.viewport().scale();
        let rect = self.node_screen_rect(node, canvas_rect);
        if !rect.expand(8.0).intersects(canvas_rect) {
            return;
        }
        let accent = palette.accent(node.node_type);
        let radius = NODE_CORNER_RADIUS * scale;

        if selected {
            painter.rect_filled(rect.expand(4.0 * scale), radius, accent.gamma_multiply(0.25));
        }
        painter.rect_filled(rect, radius, palette.surface);
        let border = if selected {
            egui::Stroke::new(1.5, accent)
        } else {
            egui::Stroke::new(1.0, palette.stroke)
        };
        painter.rect_stroke(rect, radius, border, StrokeKind::Inside);

        // Accent strip
        let strip_y = rect.top() + 2.0 * scale;
        painter.line_segment(
            [
                egui::pos2(rect.left() + radius, strip_y),
                egui::pos2(rect.right() - radius, strip_y),
            ],
            egui::Stroke::new(4.0 * scale, accent),
        );

        let text = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
        let at = |x: f32, y: f32| rect.min + egui::vec2(x, y) * scale;

        let badge = egui::Rect::from_min_size(at(16.0, 16.0), egui::vec2(40.0, 40.0) * scale);
        text.rect_filled(badge, 8.0 * scale, accent.gamma_multiply(0.15));
        text.text(
            badge.center(),
            egui::Align2::CENTER_CENTER,
            icon(node.node_type),
            egui::FontId::proportional(18.0 * scale),
            accent,
        );

        text.text(
            at(68.0, 18.0),
            egui::Align2::LEFT_TOP,
            &node.data.label,
            egui::FontId::proportional(14.0 * scale),
            palette.text,
        );
        text.text(
            at(68.0, 38.0),
            egui::Align2::LEFT_TOP,
            node.node_type.key().to_uppercase(),
            egui::FontId::proportional(11.0 * scale),
            accent,
        );
        if let Some(description) = &node.data.description {
            text.text(
                at(16.0, 68.0),
                egui::Align2::LEFT_TOP,
                description,
                egui::FontId::proportional(11.0 * scale),
                palette.text_secondary,
            );
        }

        let status = node.data.effective_status();
        let dot = if status == NodeStatus::Running {
            palette.node.green
        } else {
            palette.stroke
        };
        text.circle_filled(at(20.0, 100.0), 4.0 * scale, dot);
        text.text(
            at(30.0, 100.0),
            egui::Align2::LEFT_CENTER,
            status.label(),
            egui::FontId::proportional(10.0 * scale),
            palette.text_secondary,
        );

        let handle_stroke = egui::Stroke::new(
            2.0 * scale,
            if selected { accent } else { palette.stroke },
        );
        if !node.inputs.is_empty() {
            let c = self.world_to_canvas(input_anchor(node), canvas_rect);
            painter.circle(c, 6.0 * scale, palette.background, handle_stroke);
        }
        if !node.outputs.is_empty() {
            let c = self.world_to_canvas(output_anchor(node), canvas_rect);
            painter.circle(c, 6.0 * scale, palette.background, handle_stroke);
        }
    }

    /// The four "+" buttons of the hovered node. Drawn at a fixed screen size.
    fn draw_add_buttons(
        &self,
        painter: &egui::Painter,
        canvas_rect: egui::Rect,
        palette: &Palette,
        node: &Node,
    ) {
        let rect = self.node_screen_rect(node, canvas_rect);
        let pointer = painter.ctx().input(|i| i.pointer.hover_pos());
        for (_, center) in add_button_centers(rect) {
            let hot = pointer.is_some_and(|p| p.distance(center) <= ADD_BUTTON_RADIUS);
            let r = if hot {
                ADD_BUTTON_RADIUS * 1.25
            } else {
                ADD_BUTTON_RADIUS
            };
            painter.circle_filled(center, r, palette.primary);
            let arm = r * 0.5;
            let plus = egui::Stroke::new(2.0, egui::Color32::WHITE);
            painter.line_segment([center - egui::vec2(arm, 0.0), center + egui::vec2(arm, 0.0)], plus);
            painter.line_segment([center - egui::vec2(0.0, arm), center + egui::vec2(0.0, arm)], plus);
        }
    }

    /// Zoom percentage in the bottom-right corner.
    fn draw_zoom_badge(&self, painter: &egui::Painter, canvas_rect: egui::Rect, palette: &Palette) {
        let label = format!("{}%", self.editor.viewport().zoom_percent());
        let badge = egui::Rect::from_min_size(
            canvas_rect.right_bottom() - egui::vec2(76.0, 44.0),
            egui::vec2(60.0, 28.0),
        );
        painter.rect_filled(badge, 6.0, palette.surface);
        painter.rect_stroke(badge, 6.0, egui::Stroke::new(1.0, palette.stroke), StrokeKind::Inside);
        painter.text(
            badge.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::monospace(12.0),
            palette.text_secondary,
        );
    }
}

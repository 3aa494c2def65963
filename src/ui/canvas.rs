//! Canvas input: translates egui events into editor input and handles drops.
//!
//! Pointer positions are converted to canvas-local coordinates before they
//! reach the editor, so the core never sees panel or window chrome.

use super::state::WorkflowApp;
use super::theme::Palette;
use crate::constants::{ADD_BUTTON_RADIUS, NODE_HEIGHT, NODE_WIDTH, WHEEL_LINE_HEIGHT};
use crate::editor::{HitTarget, InputEvent, PointerButton};
use crate::types::{self, pos, Direction, Node, NodeId, Position};
use eframe::egui;

/// Drag-and-drop payload carried from the library to the canvas: a node type key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryPayload(pub &'static str);

pub(super) fn to_position(p: egui::Pos2) -> Position {
    pos(p.x, p.y)
}

pub(super) fn to_pos2(p: Position) -> egui::Pos2 {
    egui::pos2(p.x, p.y)
}

fn to_core_rect(rect: egui::Rect) -> types::Rect {
    types::Rect {
        min: to_position(rect.min),
        max: to_position(rect.max),
    }
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// Centres of the four "+" buttons around a node's screen rectangle.
pub(super) fn add_button_centers(rect: egui::Rect) -> [(Direction, egui::Pos2); 4] {
    [
        (Direction::Top, rect.center_top()),
        (Direction::Right, rect.right_center()),
        (Direction::Bottom, rect.center_bottom()),
        (Direction::Left, rect.left_center()),
    ]
}

impl WorkflowApp {
    /// Renders the canvas and feeds this frame's input to the editor.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub(super) fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        self.handle_library_drop(ui, &response);
        self.forward_pointer_events(ui, canvas_rect);
        self.update_hovered_node(ui, canvas_rect);

        let palette = *Palette::for_mode(self.editor.theme_mode());
        self.render_workflow(&painter, canvas_rect, &palette);

        if self.editor.is_capturing_pointer() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if self.hovered_node.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }

    /// Canvas-space screen position of a world point.
    pub(super) fn world_to_canvas(&self, world: Position, canvas_rect: egui::Rect) -> egui::Pos2 {
        let screen = self.editor.viewport().world_to_screen(world);
        canvas_rect.min + egui::vec2(screen.x, screen.y)
    }

    /// Screen rectangle a node occupies at the current zoom.
    pub(super) fn node_screen_rect(&self, node: &Node, canvas_rect: egui::Rect) -> egui::Rect {
        let scale = self.editor.viewport().scale();
        egui::Rect::from_min_size(
            self.world_to_canvas(node.position, canvas_rect),
            egui::vec2(NODE_WIDTH, NODE_HEIGHT) * scale,
        )
    }

    /// Whether a press at `p` belongs to the canvas rather than something drawn above it.
    fn accepts_pointer_at(&self, ui: &egui::Ui, canvas_rect: egui::Rect, p: egui::Pos2) -> bool {
        canvas_rect.contains(p)
            && ui
                .ctx()
                .layer_id_at(p)
                .map_or(true, |layer| layer == ui.layer_id())
    }

    fn forward_pointer_events(&mut self, ui: &egui::Ui, canvas_rect: egui::Rect) {
        let events = ui.input(|i| i.events.clone());
        let origin = canvas_rect.min;
        let local = |p: egui::Pos2| to_position(egui::Pos2::ZERO + (p - origin));

        for event in events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => {
                    // While the popover is open a press only dismisses it.
                    if self.editor.pending_add().is_some()
                        || !self.accepts_pointer_at(ui, canvas_rect, pos)
                    {
                        continue;
                    }
                    let Some(button) = map_button(button) else {
                        continue;
                    };
                    if button == PointerButton::Primary && self.open_add_popover_at(pos, canvas_rect)
                    {
                        continue;
                    }
                    let target = match self.editor.node_at_screen(local(pos)) {
                        Some(node) => HitTarget::Node(node.id.clone()),
                        None => HitTarget::Background,
                    };
                    self.editor.handle_input(InputEvent::PointerDown {
                        pos: local(pos),
                        button,
                        target,
                    });
                }
                egui::Event::PointerButton {
                    pos,
                    pressed: false,
                    ..
                } => {
                    self.editor
                        .handle_input(InputEvent::PointerUp { pos: local(pos) });
                }
                egui::Event::PointerMoved(pos) => {
                    self.editor
                        .handle_input(InputEvent::PointerMove { pos: local(pos) });
                }
                // PointerGone fires when the cursor crosses the window edge; a held
                // drag keeps going there, so only a focus loss ends the gesture.
                egui::Event::WindowFocused(false) => {
                    self.editor.handle_input(InputEvent::PointerLost);
                }
                egui::Event::MouseWheel {
                    unit,
                    delta,
                    modifiers,
                    ..
                } => {
                    let over_canvas = ui
                        .input(|i| i.pointer.hover_pos())
                        .is_some_and(|p| self.accepts_pointer_at(ui, canvas_rect, p));
                    if !over_canvas {
                        continue;
                    }
                    let per_unit = match unit {
                        egui::MouseWheelUnit::Point => 1.0,
                        egui::MouseWheelUnit::Line => WHEEL_LINE_HEIGHT,
                        egui::MouseWheelUnit::Page => canvas_rect.height(),
                    };
                    // egui reports "scroll up" as positive y; the editor expects the opposite.
                    self.editor.handle_input(InputEvent::Wheel {
                        delta: pos(-delta.x * per_unit, -delta.y * per_unit),
                        zoom: modifiers.ctrl || modifiers.command,
                    });
                }
                egui::Event::Zoom(factor) if factor != 1.0 => {
                    let over_canvas = ui
                        .input(|i| i.pointer.hover_pos())
                        .is_some_and(|p| self.accepts_pointer_at(ui, canvas_rect, p));
                    if over_canvas {
                        let direction = if factor > 1.0 { -1.0 } else { 1.0 };
                        self.editor.handle_input(InputEvent::Wheel {
                            delta: pos(0.0, direction),
                            zoom: true,
                        });
                    }
                }
                _ => {}
            }
        }
    }

    /// Opens the add-node popover if `p` hits a "+" button of the hovered node.
    fn open_add_popover_at(&mut self, p: egui::Pos2, canvas_rect: egui::Rect) -> bool {
        let Some(node) = self
            .hovered_node
            .as_ref()
            .and_then(|id| self.editor.workflow().node(id))
        else {
            return false;
        };
        let rect = self.node_screen_rect(node, canvas_rect);
        let hit = add_button_centers(rect)
            .into_iter()
            .find(|(_, center)| center.distance(p) <= ADD_BUTTON_RADIUS);
        let Some((direction, center)) = hit else {
            return false;
        };

        let source = node.id.clone();
        let button = egui::Rect::from_center_size(center, egui::Vec2::splat(ADD_BUTTON_RADIUS * 2.0));
        self.editor
            .begin_directional_add(source, direction, to_core_rect(button));
        self.popover.search.clear();
        self.popover.just_opened = true;
        true
    }

    /// Tracks which node shows its "+" buttons. The buttons sit on the node's
    /// edges, so the hover zone extends by one button radius.
    fn update_hovered_node(&mut self, ui: &egui::Ui, canvas_rect: egui::Rect) {
        if self.editor.is_capturing_pointer() || self.editor.pending_add().is_some() {
            self.hovered_node = None;
            return;
        }
        let hover = ui
            .input(|i| i.pointer.hover_pos())
            .filter(|p| self.accepts_pointer_at(ui, canvas_rect, *p));
        self.hovered_node = hover.and_then(|p| self.hovered_node_at(p, canvas_rect));
    }

    fn hovered_node_at(&self, p: egui::Pos2, canvas_rect: egui::Rect) -> Option<NodeId> {
        let hit = |node: &&Node| {
            self.node_screen_rect(node, canvas_rect)
                .expand(ADD_BUTTON_RADIUS)
                .contains(p)
        };
        self.editor
            .selected_node()
            .filter(hit)
            .or_else(|| self.editor.workflow().nodes().iter().rev().find(hit))
            .map(|node| node.id.clone())
    }

    /// Creates a node when a library entry is released over the canvas.
    fn handle_library_drop(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let Some(payload) = response.dnd_release_payload::<LibraryPayload>() else {
            return;
        };
        let Some(window_pos) = ui.input(|i| i.pointer.interact_pos()) else {
            return;
        };
        if let Some(id) = self
            .editor
            .drop_from_library(payload.0, to_position(window_pos))
        {
            log::info!("dropped {} as node {id}", payload.0);
        }
    }
}

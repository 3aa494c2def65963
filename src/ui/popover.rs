//! Add-node popover opened by the "+" buttons on a node's edges.

use super::canvas::to_pos2;
use super::state::WorkflowApp;
use super::theme::{icon, Palette};
use crate::catalog;
use crate::constants::POPOVER_WIDTH;
use eframe::egui::{self, RichText};

impl WorkflowApp {
    /// Shows the popover for the pending add, if any.
    ///
    /// Picking an entry completes the add. A press outside the popover cancels
    /// it, except on the frame the popover was opened.
    pub(super) fn draw_add_popover(&mut self, ctx: &egui::Context, palette: &Palette) {
        let Some(anchor) = self.editor.pending_add().map(|p| p.popover_anchor) else {
            self.popover.just_opened = false;
            return;
        };

        let area = egui::Area::new(egui::Id::new("add_node_popover"))
            .order(egui::Order::Foreground)
            .fixed_pos(to_pos2(anchor))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(palette.surface)
                    .stroke(egui::Stroke::new(1.0, palette.stroke))
                    .show(ui, |ui| {
                        ui.set_width(POPOVER_WIDTH - 24.0);
                        let search = ui.add(
                            egui::TextEdit::singleline(&mut self.popover.search)
                                .hint_text("Search...")
                                .desired_width(f32::INFINITY),
                        );
                        if self.popover.just_opened {
                            search.request_focus();
                        }
                        ui.add_space(4.0);

                        let results = catalog::search(&self.popover.search);
                        if results.is_empty() {
                            ui.label(
                                RichText::new("No nodes found")
                                    .small()
                                    .color(palette.text_secondary),
                            );
                            return None;
                        }

                        let mut chosen = None;
                        egui::ScrollArea::vertical()
                            .max_height(280.0)
                            .show(ui, |ui| {
                                for (category, entries) in catalog::grouped(&results) {
                                    ui.label(
                                        RichText::new(category.label().to_uppercase())
                                            .small()
                                            .strong()
                                            .color(palette.text_secondary),
                                    );
                                    for entry in entries {
                                        let text = RichText::new(format!(
                                            "{}  {}",
                                            icon(entry.node_type),
                                            entry.label
                                        ))
                                        .color(palette.text);
                                        let button = egui::Button::new(text)
                                            .frame(false)
                                            .min_size(egui::vec2(ui.available_width(), 24.0));
                                        if ui.add(button).clicked() {
                                            chosen = Some(entry.node_type);
                                        }
                                    }
                                }
                            });
                        chosen
                    })
                    .inner
            });

        if let Some(node_type) = area.inner {
            self.editor.complete_directional_add(node_type);
            self.popover.search.clear();
        } else if !self.popover.just_opened && ctx.input(|i| i.pointer.any_pressed()) {
            let outside = ctx
                .input(|i| i.pointer.interact_pos())
                .is_some_and(|p| !area.response.rect.contains(p));
            if outside {
                self.editor.cancel_pending_add();
                self.popover.search.clear();
            }
        }

        self.popover.just_opened = false;
    }
}

//! Navbar, component library sidebar and inspector panel.

use super::canvas::LibraryPayload;
use super::state::WorkflowApp;
use super::theme::{icon, Palette};
use crate::catalog::{self, LibraryEntry};
use crate::editor::ThemeMode;
use crate::types::*;
use eframe::egui::{self, RichText};

const RESOLUTIONS: [&str; 4] = ["480p", "720p", "1080p", "4K"];

impl WorkflowApp {
    /// Top bar with the brand, project badge and theme toggle.
    pub(super) fn draw_navbar(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("◆").size(20.0).color(palette.node.purple));
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(RichText::new("Flow").size(18.0).strong().color(palette.text));
            ui.label(RichText::new("Vision").size(18.0).strong().color(palette.node.blue));
            ui.spacing_mut().item_spacing.x = 8.0;
            ui.add_space(8.0);
            ui.label(
                RichText::new("Project Alpha")
                    .small()
                    .color(palette.text_secondary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (glyph, hint) = match self.editor.theme_mode() {
                    ThemeMode::Dark => ("☀", "Switch to light theme"),
                    ThemeMode::Light => ("🌙", "Switch to dark theme"),
                };
                if ui.button(glyph).on_hover_text(hint).clicked() {
                    self.editor.toggle_theme();
                }
            });
        });
    }

    /// Component library: search, collapsible categories and draggable entries.
    pub(super) fn draw_sidebar(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Component Library").strong());
            ui.label(
                RichText::new("V2.4")
                    .monospace()
                    .small()
                    .color(palette.secondary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button("«")
                    .on_hover_text("Collapse library")
                    .clicked()
                {
                    self.editor.set_sidebar_open(false);
                }
            });
        });
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut self.library.search)
                .hint_text("Search nodes...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let results = catalog::search(&self.library.search);
        egui::ScrollArea::vertical().show(ui, |ui| {
            if results.is_empty() {
                ui.label(RichText::new("No nodes found").color(palette.text_secondary));
                return;
            }
            for (category, entries) in catalog::grouped(&results) {
                let expanded = self.library.is_expanded(category);
                let header = format!(
                    "{} {}",
                    if expanded { "▾" } else { "▸" },
                    category.label().to_uppercase()
                );
                let header = ui.add(
                    egui::Label::new(
                        RichText::new(header)
                            .small()
                            .strong()
                            .color(palette.text_secondary),
                    )
                    .sense(egui::Sense::click()),
                );
                if header.clicked() {
                    self.library.toggle_category(category);
                }
                if expanded {
                    for entry in entries {
                        draw_library_entry(ui, entry, palette);
                    }
                }
                ui.add_space(8.0);
            }
        });
    }

    /// Floating button that reopens the collapsed library.
    pub(super) fn draw_reopen_library_button(&mut self, ctx: &egui::Context, at: egui::Pos2) {
        egui::Area::new(egui::Id::new("reopen_library"))
            .fixed_pos(at)
            .show(ctx, |ui| {
                if ui.button("➕ Add Node").clicked() {
                    self.editor.set_sidebar_open(true);
                }
            });
    }

    /// Inspector for the selected node.
    pub(super) fn draw_inspector(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let Some(node) = self.editor.selected_node().cloned() else {
            return;
        };

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.heading("Configuration");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✕").on_hover_text("Close").clicked() {
                    self.editor.close_inspector();
                }
                if ui.button("🗑").on_hover_text("Delete node").clicked() {
                    self.editor.delete_node(&node.id);
                }
            });
        });
        ui.separator();

        if !self.editor.workflow().contains_node(&node.id) {
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            field_label(ui, "Node ID", palette);
            ui.label(RichText::new(node.id.as_str()).monospace().small());
            ui.add_space(8.0);

            field_label(ui, "Label", palette);
            let mut label = node.data.label.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut label).desired_width(f32::INFINITY))
                .changed()
            {
                self.editor
                    .update_node_data(&node.id, NodeDataPatch::label(label));
            }
            ui.add_space(8.0);

            field_label(ui, "Description", palette);
            let mut description = node.data.description.clone().unwrap_or_default();
            if ui
                .add(
                    egui::TextEdit::multiline(&mut description)
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                )
                .changed()
            {
                self.editor
                    .update_node_data(&node.id, NodeDataPatch::description(description));
            }
            ui.add_space(12.0);

            field_label(ui, "Parameters", palette);
            let status = node.data.effective_status();
            let mut running = status == NodeStatus::Running;
            ui.horizontal(|ui| {
                if ui.checkbox(&mut running, "Active State").changed() {
                    let next = if running {
                        NodeStatus::Running
                    } else {
                        NodeStatus::Idle
                    };
                    self.editor
                        .update_node_data(&node.id, NodeDataPatch::status(next));
                }
                ui.label(
                    RichText::new(status.label())
                        .small()
                        .color(palette.text_secondary),
                );
            });
            ui.add_space(8.0);

            let properties = node
                .data
                .properties
                .clone()
                .unwrap_or_else(|| NodeProperties::defaults_for(node.node_type));
            if let Some(updated) = properties_editor(ui, properties, palette) {
                self.editor
                    .update_node_data(&node.id, NodeDataPatch::properties(updated));
            }
        });
    }
}

fn field_label(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.label(
        RichText::new(text.to_uppercase())
            .small()
            .strong()
            .color(palette.text_secondary),
    );
}

/// One draggable library card. The drag carries the node type key.
fn draw_library_entry(ui: &mut egui::Ui, entry: &LibraryEntry, palette: &Palette) {
    let accent = palette.accent(entry.node_type);
    let id = egui::Id::new(("library_entry", entry.node_type.key()));
    ui.dnd_drag_source(id, LibraryPayload(entry.node_type.key()), |ui| {
        egui::Frame::group(ui.style())
            .fill(palette.surface_highlight)
            .stroke(egui::Stroke::new(1.0, palette.stroke))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon(entry.node_type)).size(18.0).color(accent));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(entry.label).strong());
                        ui.label(
                            RichText::new(entry.description)
                                .small()
                                .color(palette.text_secondary),
                        );
                    });
                });
            });
    });
    ui.add_space(4.0);
}

/// Typed editors for node properties.
///
/// # Returns
///
/// The edited properties if anything changed this frame.
fn properties_editor(
    ui: &mut egui::Ui,
    mut properties: NodeProperties,
    palette: &Palette,
) -> Option<NodeProperties> {
    let mut changed = false;
    match &mut properties {
        NodeProperties::Source { resolution, fps } => {
            egui::Grid::new("source_properties")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Resolution");
                    egui::ComboBox::from_id_salt("resolution")
                        .selected_text(resolution.as_str())
                        .show_ui(ui, |ui| {
                            for option in RESOLUTIONS {
                                changed |= ui
                                    .selectable_value(resolution, option.to_string(), option)
                                    .changed();
                            }
                        });
                    ui.end_row();

                    ui.label("FPS");
                    changed |= ui
                        .add(egui::DragValue::new(fps).range(1..=240))
                        .changed();
                    ui.end_row();
                });
        }
        NodeProperties::Detector {
            confidence_threshold,
            iou_threshold,
        } => {
            ui.label("Confidence Threshold");
            changed |= ui
                .add(egui::Slider::new(confidence_threshold, 0.0..=1.0).fixed_decimals(2))
                .changed();
            ui.label("IOU Threshold");
            changed |= ui
                .add(egui::Slider::new(iou_threshold, 0.0..=1.0).fixed_decimals(2))
                .changed();
        }
        NodeProperties::Custom(map) if map.is_empty() => {
            ui.label(
                RichText::new("No parameters for this node type")
                    .small()
                    .color(palette.text_secondary),
            );
        }
        NodeProperties::Custom(map) => {
            egui::Grid::new("custom_properties")
                .num_columns(2)
                .show(ui, |ui| {
                    for (key, value) in map.iter() {
                        ui.label(key);
                        ui.label(RichText::new(value.to_string()).monospace());
                        ui.end_row();
                    }
                });
        }
    }
    changed.then_some(properties)
}

//! User interface for the workflow editor.
//!
//! The UI is a thin egui layer over [`crate::editor::Editor`]: it translates
//! egui input into editor input events, calls editor operations from widgets,
//! and paints the editor's state.
//!
//! # Module Organization
//!
//! - `state` - The main `WorkflowApp` and UI-only state
//! - `theme` - Light/dark palettes, node accents and icons
//! - `canvas` - Canvas input translation, hover and library drops
//! - `rendering` - Drawing the grid, connections, nodes and overlays
//! - `panels` - Navbar, component library and inspector
//! - `popover` - The add-node popover

mod canvas;
mod panels;
mod popover;
mod rendering;
mod state;
mod theme;

pub use state::WorkflowApp;

use theme::Palette;
use eframe::egui;

impl eframe::App for WorkflowApp {
    /// Main update function called by egui for each frame.
    ///
    /// Lays out the navbar, library sidebar, inspector and canvas, then the
    /// add-node popover on top.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl WorkflowApp {
    /// Builds one frame of the whole UI.
    pub fn show(&mut self, ctx: &egui::Context) {
        let mode = self.editor.theme_mode();
        let palette = *Palette::for_mode(mode);
        ctx.set_visuals(palette.visuals(mode));

        self.handle_escape_key(ctx);
        self.handle_delete_key(ctx);

        egui::TopBottomPanel::top("navbar")
            .exact_height(56.0)
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(palette.surface))
            .show(ctx, |ui| self.draw_navbar(ui, &palette));

        egui::SidePanel::left("component_library")
            .resizable(false)
            .exact_width(300.0)
            .show_animated(ctx, self.editor.sidebar_open(), |ui| {
                self.draw_sidebar(ui, &palette)
            });

        egui::SidePanel::right("inspector")
            .resizable(false)
            .exact_width(320.0)
            .show_animated(ctx, self.editor.selection().inspector_visible(), |ui| {
                self.draw_inspector(ui, &palette)
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(palette.background))
            .show(ctx, |ui| {
                let top_left = ui.max_rect().min;
                self.draw_canvas(ui);
                if !self.editor.sidebar_open() {
                    self.draw_reopen_library_button(ui.ctx(), top_left + egui::vec2(16.0, 16.0));
                }
            });

        self.draw_add_popover(ctx, &palette);
    }

    /// Escape closes the add-node popover.
    fn handle_escape_key(&mut self, ctx: &egui::Context) {
        if self.editor.pending_add().is_some() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.editor.cancel_pending_add();
            self.popover.search.clear();
        }
    }

    /// Delete removes the selected node unless a text field has focus.
    fn handle_delete_key(&mut self, ctx: &egui::Context) {
        let is_editing_text = ctx.wants_keyboard_input();
        if !is_editing_text
            && ctx.input(|i| i.key_pressed(egui::Key::Delete))
            && self.editor.delete_selected()
        {
            log::info!("deleted selected node");
        }
    }
}

//! Main application for the Gobang GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::render::RenderAdapter;
use crate::{GameSession, Stone};

use super::canvas_view::CanvasView;
use super::list_view::ListView;
use super::theme::*;

/// Main Gobang application
pub struct GobangApp {
    session: GameSession,
    canvas_view: CanvasView,
    list_view: ListView,
    use_canvas: bool,
}

impl Default for GobangApp {
    fn default() -> Self {
        Self {
            session: GameSession::new(),
            canvas_view: CanvasView::default(),
            list_view: ListView::default(),
            use_canvas: true,
        }
    }
}

impl GobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Feed queued render commands to both views so the runtime toggle
    /// never desyncs them
    fn sync_views(&mut self) {
        for cmd in self.session.take_commands() {
            self.canvas_view.apply(&cmd);
            self.list_view.apply(&cmd);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(self.session.can_undo(), egui::Button::new("Regret (U)"))
                        .clicked()
                    {
                        self.session.undo();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.session.can_redo(), egui::Button::new("Undo Regret (R)"))
                        .clicked()
                    {
                        self.session.redo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.radio_value(&mut self.use_canvas, true, "Canvas board");
                    ui.radio_value(&mut self.use_canvas, false, "Widget board (M)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode = if self.use_canvas { "Canvas" } else { "Widgets" };
                    ui.label(format!("Render: {}", mode));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.session.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("五子棋").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.session.next_mover() == Stone::Black;
            let (stone_char, color_name, accent) = if is_black {
                ("●", "BLACK", BLACK_STONE)
            } else {
                ("○", "WHITE", WHITE_STONE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    if is_black { TEXT_PRIMARY } else { BLACK_STONE },
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));
                    let status = if self.session.is_game_over() {
                        ("Winner", WIN_HIGHLIGHT)
                    } else {
                        ("To move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.session.can_undo(), egui::Button::new("↩ Regret"))
                    .clicked()
                {
                    self.session.undo();
                }
                if ui
                    .add_enabled(self.session.can_redo(), egui::Button::new("↪ Undo Regret"))
                    .clicked()
                {
                    self.session.redo();
                }
            });

            ui.add_space(6.0);
            if ui.button("↺ Reset").clicked() {
                self.session.reset();
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.moves().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        // The turn flag stays with the winner when the game ends
        let winner = self.session.next_mover();
        let (name, symbol) = if winner == Stone::Black {
            ("BLACK", "●")
        } else {
            ("WHITE", "○")
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 50.0);
                        ui.label(RichText::new(symbol).size(28.0).color(TEXT_PRIMARY));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.session.reset();
                    }
                });
            });
    }

    /// Render the active board view
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let next_mover = self.session.next_mover();
            let last_move = self.session.last_move();
            let game_over = self.session.is_game_over();

            let clicked = if self.use_canvas {
                self.canvas_view.show(ui, next_mover, last_move, game_over)
            } else {
                self.list_view.show(ui, next_mover, last_move, game_over)
            };

            if let Some(pos) = clicked {
                self.session.place(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }
            if i.key_pressed(egui::Key::R) {
                self.session.redo();
            }
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
            if i.key_pressed(egui::Key::M) {
                self.use_canvas = !self.use_canvas;
            }
        });
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.sync_views();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Interactions above may have queued commands; apply them so the
        // next repaint is already current
        self.sync_views();
    }
}

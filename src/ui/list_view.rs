//! List-style board rendering (one widget per cell)
//!
//! The declarative counterpart to [`super::canvas_view::CanvasView`]: a
//! retained per-cell occupancy table rendered as a grid of clickable
//! widgets, the way the original game rendered its board as a list of DOM
//! nodes. Both views sit behind the same [`RenderAdapter`] interface, so
//! the session never knows which one is active.

use egui::{Sense, Stroke, Vec2};

use crate::board::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::render::{RenderAdapter, CELL_SIZE};

use super::theme::*;

pub struct ListView {
    /// Occupancy per cell, indexed by `Pos::to_index`
    cells: [Option<Stone>; TOTAL_CELLS],
    rows: usize,
    cell_size: f32,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
            rows: BOARD_SIZE,
            cell_size: CELL_SIZE,
        }
    }
}

impl RenderAdapter for ListView {
    fn draw_stone(&mut self, pos: Pos, color: Stone) {
        self.cells[pos.to_index()] = Some(color);
    }

    fn remove_stone(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = None;
    }

    fn clear_all(&mut self) {
        self.cells = [None; TOTAL_CELLS];
    }

    fn draw_grid(&mut self, rows: usize, cell_size: f32) {
        self.rows = rows;
        self.cell_size = cell_size;
    }
}

impl ListView {
    /// Render the cell grid and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        next_mover: Stone,
        last_move: Option<Pos>,
        game_over: bool,
    ) -> Option<Pos> {
        let mut clicked = None;

        ui.spacing_mut().item_spacing = Vec2::ZERO;
        for row in 0..self.rows {
            ui.horizontal(|ui| {
                for col in 0..self.rows {
                    let pos = Pos::new(row as u8, col as u8);
                    if self.show_cell(ui, pos, next_mover, last_move, game_over) {
                        clicked = Some(pos);
                    }
                }
            });
        }
        clicked
    }

    /// One clickable cell widget; returns true when it was clicked while
    /// playable
    fn show_cell(
        &self,
        ui: &mut egui::Ui,
        pos: Pos,
        next_mover: Stone,
        last_move: Option<Pos>,
        game_over: bool,
    ) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::splat(self.cell_size), Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, egui::CornerRadius::ZERO, BOARD_BG);
        painter.rect_stroke(
            rect,
            egui::CornerRadius::ZERO,
            Stroke::new(GRID_LINE_WIDTH, GRID_LINE),
            egui::StrokeKind::Inside,
        );

        let radius = self.cell_size * STONE_RADIUS_RATIO;
        match self.cells[pos.to_index()] {
            Some(Stone::Black) => {
                painter.circle_filled(rect.center(), radius, BLACK_STONE);
            }
            Some(Stone::White) => {
                painter.circle_filled(rect.center(), radius, WHITE_STONE);
            }
            Some(Stone::Empty) | None => {
                if !game_over && response.hovered() {
                    painter.circle_filled(
                        rect.center(),
                        radius,
                        hover_preview(next_mover == Stone::Black),
                    );
                }
            }
        }

        if last_move == Some(pos) {
            painter.circle_filled(rect.center(), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        !game_over && self.cells[pos.to_index()].is_none() && response.clicked()
    }
}

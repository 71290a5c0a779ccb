//! Canvas-style board rendering (immediate painter)
//!
//! Retains the stone display list fed through [`RenderAdapter`] and
//! repaints it with `egui::Painter` each frame, the moral equivalent of
//! the two-layer canvas the game originally shipped with.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Pos, Stone, BOARD_SIZE};
use crate::render::{RenderAdapter, CELL_SIZE};

use super::theme::*;

pub struct CanvasView {
    /// Stones currently drawn, in draw order
    stones: Vec<(Pos, Stone)>,
    rows: usize,
    cell_size: f32,
    board_rect: Rect,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self {
            stones: Vec::new(),
            rows: BOARD_SIZE,
            cell_size: CELL_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl RenderAdapter for CanvasView {
    fn draw_stone(&mut self, pos: Pos, color: Stone) {
        self.stones.push((pos, color));
    }

    fn remove_stone(&mut self, pos: Pos) {
        self.stones.retain(|&(p, _)| p != pos);
    }

    fn clear_all(&mut self) {
        self.stones.clear();
    }

    fn draw_grid(&mut self, rows: usize, cell_size: f32) {
        self.rows = rows;
        self.cell_size = cell_size;
    }
}

impl CanvasView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        next_mover: Stone,
        last_move: Option<Pos>,
        game_over: bool,
    ) -> Option<Pos> {
        let side = self.rows as f32 * self.cell_size;
        let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.paint_grid(&painter);
        self.paint_star_points(&painter);

        for &(pos, stone) in &self.stones {
            self.paint_stone(&painter, pos, stone);
        }

        if let Some(pos) = last_move {
            painter.circle_filled(
                self.cell_center(pos),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }

        // Hover preview and click
        let mut clicked = None;
        if !game_over {
            if let Some(pointer) = response.hover_pos() {
                if let Some(pos) = self.screen_to_cell(pointer) {
                    let occupied = self.stones.iter().any(|&(p, _)| p == pos);
                    if !occupied {
                        painter.circle_filled(
                            self.cell_center(pos),
                            self.cell_size * STONE_RADIUS_RATIO,
                            hover_preview(next_mover == Stone::Black),
                        );
                        if response.clicked() {
                            clicked = Some(pos);
                        }
                    }
                }
            }
        }
        clicked
    }

    /// Grid lines run between half-cell margins, one per row and column
    fn paint_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let border = self.cell_size / 2.0;
        let span = self.rows as f32 * self.cell_size - border;

        for i in 0..self.rows {
            let offset = self.cell_size * i as f32 + border;

            let start = self.board_rect.min + Vec2::new(offset, border);
            let end = self.board_rect.min + Vec2::new(offset, span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(border, offset);
            let end = self.board_rect.min + Vec2::new(span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn paint_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.cell_center(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    fn paint_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + Vec2::new(1.5, 1.5),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + Vec2::new(1.5, 1.5),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    /// Cell center: the stone sits mid-cell, on the grid intersection
    fn cell_center(&self, pos: Pos) -> Pos2 {
        let border = self.cell_size / 2.0;
        Pos2::new(
            self.board_rect.min.x + pos.col as f32 * self.cell_size + border,
            self.board_rect.min.y + pos.row as f32 * self.cell_size + border,
        )
    }

    /// Pixel offsets map to cells by flooring the division by cell size
    fn screen_to_cell(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

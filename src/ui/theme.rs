//! Theme constants for the Gobang GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(51, 51, 51);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(90, 90, 95);
pub const WHITE_STONE: Color32 = Color32::from_rgb(230, 210, 213);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(185, 165, 168);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_preview(is_black: bool) -> Color32 {
    if is_black {
        Color32::from_rgba_unmultiplied(20, 20, 20, 80)
    } else {
        Color32::from_rgba_unmultiplied(240, 240, 240, 80)
    }
}

// Sizes
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 3.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

// Star point positions (0-indexed, 15x15 layout)
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];

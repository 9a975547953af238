use eframe::egui::Color32;

pub const LIGHT_CELL: Color32 = Color32::from_rgb(0x86, 0xBB, 0x1F);
pub const DARK_CELL: Color32 = Color32::from_rgb(0xF5, 0xD1, 0x63);
pub const SNAKE_BODY: Color32 = Color32::from_rgb(0x80, 0x00, 0x80);
pub const DEAD_SNAKE_BODY: Color32 = Color32::from_rgb(0x5A, 0x3A, 0x5A);
pub const APPLE: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);
pub const GAME_OVER_TEXT: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);

/// Checkerboard background of the field.
pub fn cell_color(x: usize, y: usize) -> Color32 {
    if (x + y) % 2 == 0 {
        LIGHT_CELL
    } else {
        DARK_CELL
    }
}

//! GUI-specific constants for layout and colors

/// Widget window dimensions
pub const WINDOW_WIDTH: f32 = 480.0;
pub const WINDOW_HEIGHT: f32 = 340.0;
pub const WINDOW_MIN_WIDTH: f32 = 340.0;
pub const WINDOW_MIN_HEIGHT: f32 = 220.0;

/// Layout spacing
pub const PANEL_MARGIN: i8 = 32;
pub const PANEL_RADIUS: u8 = 32;
pub const PANEL_BORDER_WIDTH: f32 = 2.0;
pub const SECTION_SPACING: f32 = 18.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const BOX_MARGIN: i8 = 8;
pub const BOX_RADIUS: u8 = 16;
pub const BUTTON_RADIUS: u8 = 10;
pub const GRIP_SIZE: f32 = 12.0;
pub const GRIP_RADIUS: f32 = 6.0;

/// Font sizes
pub const TITLE_SIZE: f32 = 28.0;
pub const DATE_SIZE: f32 = 14.0;
pub const NUMBER_SIZE: f32 = 30.0;
pub const CAPTION_SIZE: f32 = 14.0;

/// Palette
pub const BACKGROUND: egui::Color32 = egui::Color32::WHITE;
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(0xe6, 0xe8, 0xec);
pub const TITLE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x23, 0x27, 0x2f);
pub const DATE_COLOR: egui::Color32 = egui::Color32::BLACK;
pub const NUMBER_COLOR: egui::Color32 = egui::Color32::from_rgb(0x22, 0x22, 0x3b);
pub const CAPTION_COLOR: egui::Color32 = egui::Color32::from_rgb(0x7d, 0x85, 0x97);
pub const BOX_FILL: egui::Color32 = egui::Color32::from_rgb(0xf0, 0xf1, 0xf3);
pub const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(0xf6, 0xf8, 0xfa);
pub const GRIP_COLOR: egui::Color32 = egui::Color32::from_rgb(0xb0, 0xb8, 0xc1);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

/// Dialog
pub const DIALOG_MIN_WIDTH: f32 = 320.0;

/// Field captions in display order
pub const FIELD_LABELS: [&str; 4] = ["Days", "Hours", "Minutes", "Seconds"];

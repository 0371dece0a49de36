use sdl2::pixels::Color;
use std::time::Duration;

pub use dotboy::ppu::{GB_HEIGHT, GB_WIDTH};

// --- Timing ---
pub const TARGET_FPS: u32 = 60;
pub const TARGET_FRAME_DURATION: Duration =
    Duration::from_nanos(1_000_000_000u64 / TARGET_FPS as u64);

// --- Screen & Scaling ---
pub const GB_SCALE_FACTOR: u32 = 3;
pub const GB_SCREEN_WIDTH: u32 = GB_WIDTH as u32 * GB_SCALE_FACTOR;
pub const GB_SCREEN_HEIGHT: u32 = GB_HEIGHT as u32 * GB_SCALE_FACTOR;

// --- FPS Overlay ---
pub const FONT_PATH: &str = "assets/fonts/Roboto-Regular.ttf";
pub const OVERLAY_FONT_SIZE: u16 = 14;
pub const OVERLAY_TEXT_COLOR: Color = Color::RGB(255, 64, 64);

// --- Palette (classic DMG greens) ---
pub const PALETTE: [Color; 4] = [
    Color::RGB(0x9B, 0xBC, 0x0F), // Lightest Green (Color 0 / White)
    Color::RGB(0x8B, 0xAC, 0x0F), // Light Green   (Color 1 / Light Gray)
    Color::RGB(0x30, 0x62, 0x30), // Dark Green    (Color 2 / Dark Gray)
    Color::RGB(0x0F, 0x38, 0x0F), // Darkest Green (Color 3 / Black)
];

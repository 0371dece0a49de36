use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

use crate::constants;

/// Renders text to the canvas (used by the FPS overlay).
pub fn render_text(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
) -> Result<(), String> {
    if text.is_empty() {
        return Ok(());
    }
    let surface = font
        .render(text)
        .blended(color)
        .map_err(|e| e.to_string())?;
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;

    let texture_query = texture.query();
    let text_rect = Rect::new(x, y, texture_query.width, texture_query.height);

    canvas.copy(&texture, None, Some(text_rect))?;
    Ok(())
}

/// Draws the 160x144 palette-indexed framebuffer as scaled rectangles.
pub fn draw_gb_screen(canvas: &mut Canvas<Window>, frame_buffer: &[u8]) {
    for y in 0..constants::GB_HEIGHT {
        for x in 0..constants::GB_WIDTH {
            let index = y * constants::GB_WIDTH + x;
            let shade_index = frame_buffer.get(index).copied().unwrap_or(0) % 4;
            canvas.set_draw_color(constants::PALETTE[shade_index as usize]);
            let rect = Rect::new(
                (x as u32 * constants::GB_SCALE_FACTOR) as i32,
                (y as u32 * constants::GB_SCALE_FACTOR) as i32,
                constants::GB_SCALE_FACTOR,
                constants::GB_SCALE_FACTOR,
            );
            canvas
                .fill_rect(rect)
                .unwrap_or_else(|e| eprintln!("Failed to draw GB pixel: {}", e));
        }
    }
}

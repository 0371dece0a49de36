use sdl2::ttf::Font;
use std::{
    env,
    path::Path,
    thread,
    time::{Duration, Instant},
};

// Declare modules located within the src/app/ directory
mod constants;
mod drawing;
mod emulator;
mod input;
mod sdl_setup;

use emulator::Emulator;

fn main() -> Result<(), String> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    let mut rom_arg: Option<&str> = None;
    let mut overlay = false;
    for arg in &args[1..] {
        match arg.as_str() {
            "--overlay" => overlay = true,
            other => rom_arg = Some(other),
        }
    }
    let Some(rom_arg) = rom_arg else {
        eprintln!("Usage: {} [--overlay] <rom_path>", args[0]);
        std::process::exit(1);
    };

    let rom_path = Path::new(rom_arg);
    let rom_filename = rom_path.file_name().unwrap_or_default().to_string_lossy();
    let window_title = format!("dotboy - {}", rom_filename);

    // --- Setup SDL Context ---
    let mut sdl_context = sdl_setup::init_sdl(&window_title)?;

    // --- Load Font (only needed for the FPS overlay) ---
    let font: Option<Font> = if overlay {
        let font_path = Path::new(constants::FONT_PATH);
        if !font_path.exists() {
            return Err(format!("Font file not found: {}", constants::FONT_PATH));
        }
        Some(
            sdl_context
                .ttf_context
                .load_font(font_path, constants::OVERLAY_FONT_SIZE)?,
        )
    } else {
        None
    };

    // --- Setup Emulator ---
    let mut emulator = Emulator::new(rom_path)?;

    // --- FPS Counter ---
    let mut frames_drawn = 0u32;
    let mut fps = 0u32;
    let mut fps_window_start = Instant::now();

    // --- Main Loop ---
    'main_loop: loop {
        let frame_start_time = Instant::now();

        // 1. Input: keyboard adapter toggles bits in the shared button mask
        if input::handle_input(&mut sdl_context.event_pump, &emulator.buttons) {
            break 'main_loop;
        }

        // 2. Emulate one frame
        emulator.run_frame();

        // 3. Drawing
        drawing::draw_gb_screen(&mut sdl_context.canvas, emulator.ppu.frame_buffer());

        frames_drawn += 1;
        if fps_window_start.elapsed() >= Duration::from_secs(1) {
            fps = frames_drawn;
            frames_drawn = 0;
            fps_window_start = Instant::now();
        }
        if let Some(font) = &font {
            drawing::render_text(
                &mut sdl_context.canvas,
                &sdl_context.texture_creator,
                font,
                &format!("FPS: {}", fps),
                4,
                4,
                constants::OVERLAY_TEXT_COLOR,
            )?;
        }

        sdl_context.canvas.present();

        // 4. Frame Timing
        let elapsed_time = frame_start_time.elapsed();
        if elapsed_time < constants::TARGET_FRAME_DURATION {
            let sleep_duration =
                constants::TARGET_FRAME_DURATION.saturating_sub(elapsed_time);
            if sleep_duration > Duration::from_millis(1) {
                thread::sleep(sleep_duration.saturating_sub(Duration::from_millis(1)));
            }
            while Instant::now() < frame_start_time + constants::TARGET_FRAME_DURATION {
                thread::yield_now();
            }
        }
    }

    Ok(())
}

use super::LineParams;
use super::constants::*;
use crate::memory_map::*;
use crate::mmu::Mmu;

/// Rasterizes one frame: composes the full 256x256 background, samples it
/// into the framebuffer with each line's captured scroll, then paints the
/// sprites on top.
pub(super) fn draw_frame(
    frame_buffer: &mut [u8; FRAME_BUFFER_SIZE],
    background: &mut [u8; BG_BUFFER_SIZE],
    line_params: &[LineParams; GB_HEIGHT],
    mmu: &Mmu,
) {
    compose_background(background, mmu);
    sample_background(frame_buffer, background, line_params);
    draw_sprites(frame_buffer, mmu);
}

/// Paints all 32x32 background tiles into the 256x256 composite, with the
/// BG palette already applied.
fn compose_background(background: &mut [u8; BG_BUFFER_SIZE], mmu: &Mmu) {
    let palette = mmu.read_byte(BGP_ADDR);
    for ty in 0..32u8 {
        for tx in 0..32u8 {
            let tile_addr = mmu.get_bg_tile(tx, ty);
            draw_bg_tile(
                background,
                mmu,
                tile_addr,
                tx as usize * 8,
                ty as usize * 8,
                palette,
            );
        }
    }
}

/// Decodes one 16-byte two-bitplane tile into the composite.
fn draw_bg_tile(
    background: &mut [u8; BG_BUFFER_SIZE],
    mmu: &Mmu,
    tile_addr: u16,
    start_x: usize,
    start_y: usize,
    palette: u8,
) {
    for y in 0..8u16 {
        let plane_high = mmu.read_byte(tile_addr.wrapping_add(y * 2));
        let plane_low = mmu.read_byte(tile_addr.wrapping_add(y * 2 + 1));
        for x in 0..8 {
            let index =
                ((plane_high >> (7 - x)) & 1) << 1 | ((plane_low >> (7 - x)) & 1);
            let shade = palette >> (index * 2) & 3;
            background[(start_y + y as usize) * BG_DIM + start_x + x] = shade;
        }
    }
}

/// Fills the framebuffer from the composite, using the scroll registers
/// captured for each line. Coordinates wrap modulo 256.
fn sample_background(
    frame_buffer: &mut [u8; FRAME_BUFFER_SIZE],
    background: &[u8; BG_BUFFER_SIZE],
    line_params: &[LineParams; GB_HEIGHT],
) {
    for y in 0..GB_HEIGHT {
        let params = line_params[y];
        let bg_y = (y + params.scy as usize) % BG_DIM;
        for x in 0..GB_WIDTH {
            let bg_x = (x + params.scx as usize) % BG_DIM;
            frame_buffer[y * GB_WIDTH + x] = background[bg_y * BG_DIM + bg_x];
        }
    }
}

/// Walks the 40 OAM entries and paints 8x8 sprites over the framebuffer.
/// Tiles are addressed unsigned from 0x8000; pixel value 0 is transparent.
fn draw_sprites(frame_buffer: &mut [u8; FRAME_BUFFER_SIZE], mmu: &Mmu) {
    let palette = mmu.read_byte(OBP0_ADDR);

    for entry in 0..40u16 {
        let base = OAM_START + entry * 4;
        let y = mmu.read_byte(base) as i32 - 16;
        let x = mmu.read_byte(base + 1) as i32 - 8;
        let tile = mmu.read_byte(base + 2);
        let attributes = mmu.read_byte(base + 3);

        if y < 0 || y > GB_HEIGHT as i32 || x < 0 || x > GB_WIDTH as i32 {
            continue;
        }

        let x_flip = attributes >> OAM_X_FLIP & 1 == 1;
        let y_flip = attributes >> OAM_Y_FLIP & 1 == 1;
        let tile_addr = VRAM_START + tile as u16 * 16;

        for py in 0..8 {
            let screen_y = y + py;
            if screen_y >= GB_HEIGHT as i32 {
                break;
            }
            let row = (if y_flip { 7 - py } else { py }) as u16;
            let plane_high = mmu.read_byte(tile_addr + row * 2);
            let plane_low = mmu.read_byte(tile_addr + row * 2 + 1);

            for px in 0..8 {
                let screen_x = x + px;
                if screen_x >= GB_WIDTH as i32 {
                    break;
                }
                let column = if x_flip { 7 - px } else { px };
                let index = ((plane_high >> (7 - column)) & 1) << 1
                    | ((plane_low >> (7 - column)) & 1);
                if index == 0 {
                    continue; // transparent
                }
                let shade = palette >> (index * 2) & 3;
                frame_buffer[screen_y as usize * GB_WIDTH + screen_x as usize] =
                    shade;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joypad::Buttons;
    use crate::mbc::Mbc;

    const IDENTITY_PALETTE: u8 = 0b1110_0100; // shade i for index i

    fn test_mmu() -> Mmu {
        let rom = vec![0u8; 0x8000];
        let mut mmu = Mmu::new(Mbc::new(rom).unwrap(), Buttons::new());
        // Unsigned tile data, 0x9800 map.
        mmu.write_byte(LCDC_ADDR, 1 << LCDC_TILE_DATA_AREA);
        mmu.write_byte(BGP_ADDR, IDENTITY_PALETTE);
        mmu.write_byte(OBP0_ADDR, IDENTITY_PALETTE);
        mmu
    }

    /// Tile with every pixel at index 3 (both planes solid).
    fn write_solid_tile(mmu: &mut Mmu, tile: u16) {
        for i in 0..16 {
            mmu.write_byte(0x8000 + tile * 16 + i, 0xFF);
        }
    }

    #[test]
    fn bitplane_decode_orders_pixels_left_to_right() {
        let mut mmu = test_mmu();
        // Row 0: plane_high = 0b1000_0000, plane_low = 0b0000_0001
        // -> leftmost pixel index 2, rightmost index 1.
        mmu.write_byte(0x8000, 0x80);
        mmu.write_byte(0x8001, 0x01);
        let mut background = Box::new([0u8; BG_BUFFER_SIZE]);
        compose_background(&mut background, &mmu);
        assert_eq!(background[0], 2);
        assert_eq!(background[7], 1);
        assert_eq!(background[1], 0);
    }

    #[test]
    fn palette_remaps_indices() {
        let mut mmu = test_mmu();
        write_solid_tile(&mut mmu, 0);
        // Map index 3 to shade 1.
        mmu.write_byte(BGP_ADDR, 0b0100_0000);
        let mut background = Box::new([0u8; BG_BUFFER_SIZE]);
        compose_background(&mut background, &mmu);
        assert_eq!(background[0], 1);
    }

    #[test]
    fn tiles_land_at_their_map_position() {
        let mut mmu = test_mmu();
        write_solid_tile(&mut mmu, 1);
        // Map slot (tx=2, ty=1) points at the solid tile.
        mmu.write_byte(0x9800 + 32 + 2, 1);
        let mut background = Box::new([0u8; BG_BUFFER_SIZE]);
        compose_background(&mut background, &mmu);
        assert_eq!(background[8 * BG_DIM + 16], 3);
        assert_eq!(background[0], 0);
    }

    #[test]
    fn per_line_scroll_samples_with_wraparound() {
        let mut background = Box::new([0u8; BG_BUFFER_SIZE]);
        // A vertical stripe at background x=4.
        for y in 0..BG_DIM {
            background[y * BG_DIM + 4] = 3;
        }
        let mut params = [LineParams::default(); GB_HEIGHT];
        params[10].scx = 4; // line 10 scrolled so the stripe lands at x=0
        params[20].scx = 200;
        let mut frame_buffer = Box::new([0u8; FRAME_BUFFER_SIZE]);
        sample_background(&mut frame_buffer, &background, &params);

        assert_eq!(frame_buffer[0 * GB_WIDTH + 4], 3);
        assert_eq!(frame_buffer[10 * GB_WIDTH + 0], 3);
        assert_eq!(frame_buffer[10 * GB_WIDTH + 4], 0);
        // 200 + 60 wraps to 4.
        assert_eq!(frame_buffer[20 * GB_WIDTH + 60], 3);
    }

    #[test]
    fn vertical_scroll_uses_captured_scy() {
        let mut background = Box::new([0u8; BG_BUFFER_SIZE]);
        background[50 * BG_DIM] = 2; // pixel at (x=0, y=50)
        let mut params = [LineParams::default(); GB_HEIGHT];
        params[0].scy = 50;
        let mut frame_buffer = Box::new([0u8; FRAME_BUFFER_SIZE]);
        sample_background(&mut frame_buffer, &background, &params);
        assert_eq!(frame_buffer[0], 2);
    }

    #[test]
    fn sprite_is_positioned_with_oam_offsets() {
        let mut mmu = test_mmu();
        write_solid_tile(&mut mmu, 2);
        // OAM entry 0: screen position (8, 0) after the (-8, -16) offsets.
        mmu.write_byte(OAM_START, 16);
        mmu.write_byte(OAM_START + 1, 16);
        mmu.write_byte(OAM_START + 2, 2);
        mmu.write_byte(OAM_START + 3, 0);
        let mut frame_buffer = Box::new([0u8; FRAME_BUFFER_SIZE]);
        draw_sprites(&mut frame_buffer, &mmu);
        assert_eq!(frame_buffer[8], 3);
        assert_eq!(frame_buffer[15], 3);
        assert_eq!(frame_buffer[16], 0);
        assert_eq!(frame_buffer[7 * GB_WIDTH + 8], 3);
    }

    #[test]
    fn sprite_pixel_zero_is_transparent() {
        let mut mmu = test_mmu();
        // Row 0 has only its leftmost pixel set (index 2).
        mmu.write_byte(0x8000, 0x80);
        mmu.write_byte(OAM_START, 16);
        mmu.write_byte(OAM_START + 1, 8); // screen x = 0
        let mut frame_buffer = Box::new([1u8; FRAME_BUFFER_SIZE]);
        draw_sprites(&mut frame_buffer, &mmu);
        assert_eq!(frame_buffer[0], 2);
        // The transparent neighbors left the framebuffer alone.
        assert_eq!(frame_buffer[1], 1);
        assert_eq!(frame_buffer[GB_WIDTH], 1);
    }

    #[test]
    fn sprite_x_flip_mirrors_the_row() {
        let mut mmu = test_mmu();
        mmu.write_byte(0x8000, 0x80); // leftmost pixel of row 0
        mmu.write_byte(OAM_START, 16);
        mmu.write_byte(OAM_START + 1, 8);
        mmu.write_byte(OAM_START + 3, 1 << OAM_X_FLIP);
        let mut frame_buffer = Box::new([0u8; FRAME_BUFFER_SIZE]);
        draw_sprites(&mut frame_buffer, &mmu);
        assert_eq!(frame_buffer[0], 0);
        assert_eq!(frame_buffer[7], 2);
    }

    #[test]
    fn sprite_y_flip_mirrors_the_column() {
        let mut mmu = test_mmu();
        mmu.write_byte(0x8000, 0x80); // top row only
        mmu.write_byte(OAM_START, 16);
        mmu.write_byte(OAM_START + 1, 8);
        mmu.write_byte(OAM_START + 3, 1 << OAM_Y_FLIP);
        let mut frame_buffer = Box::new([0u8; FRAME_BUFFER_SIZE]);
        draw_sprites(&mut frame_buffer, &mmu);
        assert_eq!(frame_buffer[0], 0);
        assert_eq!(frame_buffer[7 * GB_WIDTH], 2);
    }

    #[test]
    fn offscreen_sprites_are_skipped() {
        let mut mmu = test_mmu();
        write_solid_tile(&mut mmu, 0);
        // OAM y = 0 puts the sprite at screen y = -16.
        mmu.write_byte(OAM_START, 0);
        mmu.write_byte(OAM_START + 1, 16);
        let mut frame_buffer = Box::new([0u8; FRAME_BUFFER_SIZE]);
        draw_sprites(&mut frame_buffer, &mmu);
        assert!(frame_buffer.iter().all(|&p| p == 0));
    }

    #[test]
    fn partially_offscreen_sprite_rows_are_clipped() {
        let mut mmu = test_mmu();
        write_solid_tile(&mut mmu, 0);
        // Bottom edge: screen y = 140, rows past 143 must clip.
        mmu.write_byte(OAM_START, 156);
        mmu.write_byte(OAM_START + 1, 8);
        let mut frame_buffer = Box::new([0u8; FRAME_BUFFER_SIZE]);
        draw_sprites(&mut frame_buffer, &mmu);
        assert_eq!(frame_buffer[143 * GB_WIDTH], 3);
        assert_eq!(frame_buffer[140 * GB_WIDTH], 3);
    }
}

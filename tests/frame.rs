//! End-to-end frames: a small program on a synthetic cartridge sets up the
//! video state, then the frame sequencer runs it and rasterizes.

use dotboy::cpu::Cpu;
use dotboy::joypad::Buttons;
use dotboy::mbc::Mbc;
use dotboy::mmu::Mmu;
use dotboy::ppu::{GB_HEIGHT, GB_WIDTH, Ppu};

fn machine(program: &[u8]) -> (Cpu, Mmu, Ppu) {
    let mut rom = vec![0u8; 0x8000];
    rom[..program.len()].copy_from_slice(program);
    let mmu = Mmu::new(Mbc::new(rom).unwrap(), Buttons::new());
    (Cpu::new(), mmu, Ppu::new())
}

#[test]
fn program_paints_a_solid_background() {
    // Fill tile 0 with solid index-3 pixels, program the palette, switch the
    // LCD on, then spin.
    let program = [
        0x31, 0xFE, 0xFF, // LD SP,0xFFFE
        0x21, 0x00, 0x80, // LD HL,0x8000
        0x3E, 0xFF, //       LD A,0xFF
        0x06, 0x10, //       LD B,16
        0x22, //             LD (HL+),A      <- loop head
        0x05, //             DEC B
        0x20, 0xFC, //       JR NZ,-4
        0x3E, 0xE4, //       LD A,0xE4
        0xE0, 0x47, //       LDH (0x47),A    ; BGP
        0x3E, 0x91, //       LD A,0x91
        0xE0, 0x40, //       LDH (0x40),A    ; LCDC: LCD on, unsigned tiles
        0x18, 0xFE, //       JR -2
    ];
    let (mut cpu, mut mmu, mut ppu) = machine(&program);

    // First frame: the LCD is still off at the frame boundary, so the
    // sequencer idles while the program performs its setup.
    ppu.run_frame(&mut cpu, &mut mmu);
    assert!(mmu.lcd_display_enable());
    assert!(ppu.frame_buffer().iter().all(|&p| p == 0));

    // Second frame renders: every map entry points at the solid tile and the
    // palette maps index 3 to shade 3.
    ppu.run_frame(&mut cpu, &mut mmu);
    assert_eq!(ppu.frame_buffer().len(), GB_WIDTH * GB_HEIGHT);
    assert!(ppu.frame_buffer().iter().all(|&p| p == 3));

    // VBlank was raised and the frame ended inside it.
    assert_eq!(mmu.read_byte(0xFF0F) & 0x01, 0x01);
    assert_eq!(mmu.read_byte(0xFF44), 152);
    assert_eq!(mmu.read_byte(0xFF41) & 0x03, 1);
}

#[test]
fn lyc_coincidence_interrupt_reaches_the_handler() {
    let mut program = vec![0u8; 0x100];
    // Interrupt handler at the LCD STAT vector (0x48): mark WRAM, return.
    program[0x48..0x4E].copy_from_slice(&[
        0x3E, 0x01, //       LD A,1
        0xEA, 0x00, 0xC0, // LD (0xC000),A
        0xD9, //             RETI
    ]);
    let setup = [
        0x31, 0xFE, 0xFF, // LD SP,0xFFFE
        0x3E, 0x28, //       LD A,40
        0xE0, 0x45, //       LDH (0x45),A    ; LYC = 40
        0x3E, 0x40, //       LD A,0x40
        0xE0, 0x41, //       LDH (0x41),A    ; STAT coincidence IE
        0x3E, 0x02, //       LD A,0x02
        0xE0, 0xFF, //       LDH (0xFF),A    ; IE = LCD STAT only
        0x3E, 0x80, //       LD A,0x80
        0xE0, 0x40, //       LDH (0x40),A    ; LCD on
        0xFB, //             EI
        0x18, 0xFE, //       JR -2
    ];
    program[..setup.len()].copy_from_slice(&setup);
    let (mut cpu, mut mmu, mut ppu) = machine(&program);

    // Setup happens during the idle first frame.
    ppu.run_frame(&mut cpu, &mut mmu);
    assert_eq!(mmu.read_byte(0xC000), 0);

    // The second frame walks LY through 40 and fires the handler.
    ppu.run_frame(&mut cpu, &mut mmu);
    assert_eq!(mmu.read_byte(0xC000), 1);
    // The interrupt was acknowledged and RETI restored IME.
    assert_eq!(mmu.read_byte(0xFF0F) & 0x02, 0);
    assert!(cpu.ime());
}

#[test]
fn horizontal_scroll_shifts_the_sampled_background() {
    // Tile 1 is solid and sits only in map slot (1, 0), so the background
    // holds an 8x8 block at (8, 0). SCX=8 slides it to the screen origin.
    let program = [
        0x31, 0xFE, 0xFF, // LD SP,0xFFFE
        0x21, 0x10, 0x80, // LD HL,0x8010    ; tile 1 data
        0x3E, 0xFF, //       LD A,0xFF
        0x06, 0x10, //       LD B,16
        0x22, //             LD (HL+),A
        0x05, //             DEC B
        0x20, 0xFC, //       JR NZ,-4
        0x3E, 0x01, //       LD A,1
        0xEA, 0x01, 0x98, // LD (0x9801),A   ; map slot (1,0) -> tile 1
        0x3E, 0xE4, //       LD A,0xE4
        0xE0, 0x47, //       LDH (0x47),A    ; BGP
        0x3E, 0x08, //       LD A,8
        0xE0, 0x43, //       LDH (0x43),A    ; SCX = 8
        0x3E, 0x91, //       LD A,0x91
        0xE0, 0x40, //       LDH (0x40),A    ; LCD on
        0x18, 0xFE, //       JR -2
    ];
    let (mut cpu, mut mmu, mut ppu) = machine(&program);
    ppu.run_frame(&mut cpu, &mut mmu);
    ppu.run_frame(&mut cpu, &mut mmu);

    let frame = ppu.frame_buffer();
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(frame[y * GB_WIDTH + x], 3, "pixel ({x},{y})");
        }
        assert_eq!(frame[y * GB_WIDTH + 8], 0);
    }
    assert!(frame[8 * GB_WIDTH..].iter().all(|&p| p == 0));
}

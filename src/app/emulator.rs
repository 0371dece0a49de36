use dotboy::cpu::Cpu;
use dotboy::joypad::Buttons;
use dotboy::mbc::Mbc;
use dotboy::mmu::Mmu;
use dotboy::ppu::Ppu;
use std::fs;
use std::path::Path;

/// Composition root: owns every core component and threads the non-owning
/// references through per-frame calls.
pub struct Emulator {
    pub cpu: Cpu,
    pub mmu: Mmu,
    pub ppu: Ppu,
    pub buttons: Buttons,
}

impl Emulator {
    /// Loads the cartridge and wires up the core. Only I/O and an
    /// undersized image can fail here.
    pub fn new(rom_path: &Path) -> Result<Self, String> {
        let rom_data = fs::read(rom_path)
            .map_err(|e| format!("Failed to read ROM '{}': {}", rom_path.display(), e))?;
        let mbc = Mbc::new(rom_data)?;

        let buttons = Buttons::new();
        let mmu = Mmu::new(mbc, buttons.clone());

        Ok(Emulator {
            cpu: Cpu::new(),
            mmu,
            ppu: Ppu::new(),
            buttons,
        })
    }

    /// Runs one full frame; afterwards `self.ppu.frame_buffer()` holds the
    /// frame to present.
    pub fn run_frame(&mut self) {
        self.ppu.run_frame(&mut self.cpu, &mut self.mmu);
    }
}

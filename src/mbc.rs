use crate::memory_map::*;

/// Cartridge memory bank controller.
///
/// Owns the raw cartridge image and the bank-select registers latched by
/// writes into ROM space. Only type-0 ("ROM only") and MBC1-style bank
/// registers are honored; other cartridge types load fine but their extra
/// hardware is ignored.
#[derive(Debug, Clone)]
pub struct Mbc {
    rom: Vec<u8>,

    // Header fields, informational only.
    title: String,
    cartridge_type: u8,
    rom_size_code: u8,
    ram_size_code: u8,

    // Bank-select registers.
    rom_bank_number: u8, // 7 bits, effective bank floors at 1
    ram_bank_number: u8, // 2 bits
    rom_ram_select: u8,  // 1 bit
}

impl Mbc {
    /// Wraps a cartridge image. The image must at least cover the two
    /// directly-mapped 16 KiB banks; a malformed header is not an error.
    pub fn new(rom: Vec<u8>) -> Result<Self, String> {
        if rom.len() < 2 * ROM_BANK_SIZE {
            return Err(format!(
                "cartridge image too small: {} bytes, need at least {}",
                rom.len(),
                2 * ROM_BANK_SIZE
            ));
        }

        let title: String = rom[HEADER_TITLE_START..=HEADER_TITLE_END]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| b as char)
            .collect();

        let mbc = Mbc {
            title,
            cartridge_type: rom[HEADER_CART_TYPE],
            rom_size_code: rom[HEADER_ROM_SIZE],
            ram_size_code: rom[HEADER_RAM_SIZE],
            rom,
            rom_bank_number: 1,
            ram_bank_number: 0,
            rom_ram_select: 0,
        };

        log::info!(
            "Loaded cartridge \"{}\": type {:#04X}, ROM size code {:#04X}, RAM size code {:#04X} ({} bytes)",
            mbc.title,
            mbc.cartridge_type,
            mbc.rom_size_code,
            mbc.ram_size_code,
            mbc.rom.len()
        );

        Ok(mbc)
    }

    /// Serves CPU reads below 0x8000. Bank 0 is fixed; 0x4000-0x7FFF maps the
    /// switchable bank. Reads past the end of the image return 0xFF.
    pub fn read(&self, addr: u16) -> u8 {
        let offset = match addr {
            ROM_BANK_0_START..=ROM_BANK_0_END => addr as usize,
            ROM_BANK_N_START..=ROM_BANK_N_END => {
                (self.effective_rom_bank() - 1) * ROM_BANK_SIZE + addr as usize
            }
            _ => return 0xFF,
        };
        self.rom.get(offset).copied().unwrap_or(0xFF)
    }

    /// Latches bank-control writes. Writes outside the three register windows
    /// have no effect.
    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x2000..=0x3FFF => self.rom_bank_number = (value & 0x7F).max(1),
            0x4000..=0x5FFF => self.ram_bank_number = value & 0x03,
            0x6000..=0x7FFF => self.rom_ram_select = value & 0x01,
            _ => {}
        }
    }

    #[inline(always)]
    fn effective_rom_bank(&self) -> usize {
        self.rom_bank_number.max(1) as usize
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cartridge_type(&self) -> u8 {
        self.cartridge_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 4 * ROM_BANK_SIZE];
        for (i, b) in "DOTBOY TEST".bytes().enumerate() {
            rom[HEADER_TITLE_START + i] = b;
        }
        rom[HEADER_CART_TYPE] = 0x00;
        // Tag each bank so reads are distinguishable.
        for bank in 0..4 {
            rom[bank * ROM_BANK_SIZE] = 0xB0 | bank as u8;
        }
        rom
    }

    #[test]
    fn rejects_undersized_image() {
        assert!(Mbc::new(vec![0u8; 0x4000]).is_err());
    }

    #[test]
    fn parses_header_title() {
        let mbc = Mbc::new(test_rom()).unwrap();
        assert_eq!(mbc.title(), "DOTBOY TEST");
        assert_eq!(mbc.cartridge_type(), 0x00);
    }

    #[test]
    fn bank_zero_is_fixed() {
        let mut mbc = Mbc::new(test_rom()).unwrap();
        assert_eq!(mbc.read(0x0000), 0xB0);
        mbc.write(0x2000, 0x03);
        assert_eq!(mbc.read(0x0000), 0xB0);
    }

    #[test]
    fn switchable_window_follows_bank_register() {
        let mut mbc = Mbc::new(test_rom()).unwrap();
        // Power-on bank is 1.
        assert_eq!(mbc.read(0x4000), 0xB1);
        mbc.write(0x2000, 0x02);
        assert_eq!(mbc.read(0x4000), 0xB2);
        mbc.write(0x2000, 0x03);
        assert_eq!(mbc.read(0x4000), 0xB3);
    }

    #[test]
    fn bank_zero_select_floors_to_one() {
        let mut mbc = Mbc::new(test_rom()).unwrap();
        mbc.write(0x2000, 0x00);
        assert_eq!(mbc.read(0x4000), 0xB1);
    }

    #[test]
    fn bank_register_masks_to_seven_bits() {
        let mut mbc = Mbc::new(test_rom()).unwrap();
        // 0x82 & 0x7F == 0x02
        mbc.write(0x2000, 0x82);
        assert_eq!(mbc.read(0x4000), 0xB2);
    }

    #[test]
    fn out_of_range_bank_reads_open_bus() {
        let mut mbc = Mbc::new(test_rom()).unwrap();
        mbc.write(0x2000, 0x7F);
        assert_eq!(mbc.read(0x4000), 0xFF);
    }

    #[test]
    fn writes_outside_register_windows_are_ignored() {
        let mut mbc = Mbc::new(test_rom()).unwrap();
        mbc.write(0x0000, 0x0A);
        mbc.write(0x1FFF, 0x0A);
        assert_eq!(mbc.read(0x4000), 0xB1);
    }
}

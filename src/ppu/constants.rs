// --- Screen Dimensions ---
pub const GB_WIDTH: usize = 160;
pub const GB_HEIGHT: usize = 144;
pub const FRAME_BUFFER_SIZE: usize = GB_WIDTH * GB_HEIGHT;

// --- Background Composite ---
// 32x32 tiles of 8x8 pixels.
pub const BG_DIM: usize = 256;
pub const BG_BUFFER_SIZE: usize = BG_DIM * BG_DIM;

// --- Timing (in T-cycles) ---
pub const DOTS_PER_SCANLINE: u32 = 456;
pub const SCANLINES_PER_FRAME: u32 = 154; // 144 visible + 10 VBlank

// Per-phase CPU budgets for a visible scanline; they sum to a full line.
pub const MODE2_OAM_SCAN_DOTS: u32 = 80;
pub const MODE3_TRANSFER_DOTS: u32 = 172;
pub const MODE0_HBLANK_DOTS: u32 = 204;

// --- PPU Modes (Values for STAT register bits 0-1) ---
pub const HBLANK_MODE: u8 = 0;
pub const VBLANK_MODE: u8 = 1;
pub const OAM_SCAN_MODE: u8 = 2;
pub const TRANSFER_MODE: u8 = 3;

// --- OAM Attribute Flags (Bit positions in OAM byte 3) ---
pub const OAM_X_FLIP: u8 = 5; // Horizontal Flip (0=Normal, 1=Flipped)
pub const OAM_Y_FLIP: u8 = 6; // Vertical Flip (0=Normal, 1=Flipped)

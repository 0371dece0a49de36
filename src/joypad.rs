use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// The eight Game Boy buttons, named by their bit position in the shared mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Right = 0,
    Left = 1,
    Up = 2,
    Down = 3,
    A = 4,
    B = 5,
    Select = 6,
    Start = 7,
}

impl Button {
    #[inline(always)]
    pub fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Shared 8-bit button mask. A bit is 0 while the button is held and 1 while
/// released; all bits start released (0xFF).
///
/// The input adapter may live on another thread; the MMU only ever takes a
/// one-byte snapshot from its 0xFF00 handler, so a single atomic is all the
/// coordination needed.
#[derive(Clone, Debug)]
pub struct Buttons {
    mask: Arc<AtomicU8>,
}

impl Buttons {
    pub fn new() -> Self {
        Buttons {
            mask: Arc::new(AtomicU8::new(0xFF)),
        }
    }

    pub fn press(&self, button: Button) {
        self.mask.fetch_and(!button.mask(), Ordering::Relaxed);
    }

    pub fn release(&self, button: Button) {
        self.mask.fetch_or(button.mask(), Ordering::Relaxed);
    }

    /// Current mask value, as sampled by the MMU's joypad register handler.
    #[inline(always)]
    pub fn snapshot(&self) -> u8 {
        self.mask.load(Ordering::Relaxed)
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Buttons::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_starts_released() {
        let buttons = Buttons::new();
        assert_eq!(buttons.snapshot(), 0xFF);
    }

    #[test]
    fn press_clears_bit_release_restores_it() {
        let buttons = Buttons::new();
        buttons.press(Button::Start);
        assert_eq!(buttons.snapshot(), 0x7F);
        buttons.press(Button::Right);
        assert_eq!(buttons.snapshot(), 0x7E);
        buttons.release(Button::Start);
        assert_eq!(buttons.snapshot(), 0xFE);
        buttons.release(Button::Right);
        assert_eq!(buttons.snapshot(), 0xFF);
    }

    #[test]
    fn clones_share_one_mask() {
        let buttons = Buttons::new();
        let adapter = buttons.clone();
        adapter.press(Button::A);
        assert_eq!(buttons.snapshot(), 0xEF);
    }
}

use super::{Cpu, constants::FLAG_Z};
use crate::mmu::Mmu;

// --- Accumulator rotates (non-CB encodings) ---
// Unlike their CB counterparts these always leave Z clear.
impl Cpu {
    pub fn op_rlca(&mut self, _mmu: &mut Mmu) {
        self.a = self.rlc(self.a);
        self.set_flag(FLAG_Z, false);
    }
    pub fn op_rrca(&mut self, _mmu: &mut Mmu) {
        self.a = self.rrc(self.a);
        self.set_flag(FLAG_Z, false);
    }
    pub fn op_rla(&mut self, _mmu: &mut Mmu) {
        self.a = self.rl(self.a);
        self.set_flag(FLAG_Z, false);
    }
    pub fn op_rra(&mut self, _mmu: &mut Mmu) {
        self.a = self.rr(self.a);
        self.set_flag(FLAG_Z, false);
    }
}

use super::{Cpu, constants::*};
use crate::mmu::Mmu;

// --- Control Flow Implementations ---
impl Cpu {
    // NOP (also stands in for the eleven unassigned opcodes)
    pub fn op_nop(&mut self, _mmu: &mut Mmu) {}

    // JP a16 / JP HL / JP cc, a16
    fn conditional_jp_a16(&mut self, condition: bool, mmu: &Mmu) {
        let addr = self.read_d16(mmu);
        if condition {
            self.pc = addr;
        }
    }
    pub fn op_jp_a16(&mut self, mmu: &mut Mmu) {
        self.pc = self.read_d16(mmu);
    }
    pub fn op_jp_hl(&mut self, _mmu: &mut Mmu) {
        self.pc = self.get_hl();
    }
    pub fn op_jp_nz_a16(&mut self, mmu: &mut Mmu) {
        self.conditional_jp_a16(!self.get_flag(FLAG_Z), mmu);
    }
    pub fn op_jp_z_a16(&mut self, mmu: &mut Mmu) {
        self.conditional_jp_a16(self.get_flag(FLAG_Z), mmu);
    }
    pub fn op_jp_nc_a16(&mut self, mmu: &mut Mmu) {
        self.conditional_jp_a16(!self.get_flag(FLAG_C), mmu);
    }
    pub fn op_jp_c_a16(&mut self, mmu: &mut Mmu) {
        self.conditional_jp_a16(self.get_flag(FLAG_C), mmu);
    }

    // JR r8 / JR cc, r8
    fn conditional_jr(&mut self, condition: bool, mmu: &Mmu) {
        let offset = self.read_r8(mmu);
        if condition {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
        }
    }
    pub fn op_jr_r8(&mut self, mmu: &mut Mmu) {
        self.conditional_jr(true, mmu);
    }
    pub fn op_jr_nz_r8(&mut self, mmu: &mut Mmu) {
        self.conditional_jr(!self.get_flag(FLAG_Z), mmu);
    }
    pub fn op_jr_z_r8(&mut self, mmu: &mut Mmu) {
        self.conditional_jr(self.get_flag(FLAG_Z), mmu);
    }
    pub fn op_jr_nc_r8(&mut self, mmu: &mut Mmu) {
        self.conditional_jr(!self.get_flag(FLAG_C), mmu);
    }
    pub fn op_jr_c_r8(&mut self, mmu: &mut Mmu) {
        self.conditional_jr(self.get_flag(FLAG_C), mmu);
    }

    // CALL a16 / CALL cc, a16
    fn conditional_call_a16(&mut self, condition: bool, mmu: &mut Mmu) {
        let addr = self.read_d16(mmu);
        if condition {
            self.push_word(self.pc, mmu); // Push address *after* CALL
            self.pc = addr;
        }
    }
    pub fn op_call_a16(&mut self, mmu: &mut Mmu) {
        self.conditional_call_a16(true, mmu);
    }
    pub fn op_call_nz_a16(&mut self, mmu: &mut Mmu) {
        self.conditional_call_a16(!self.get_flag(FLAG_Z), mmu);
    }
    pub fn op_call_z_a16(&mut self, mmu: &mut Mmu) {
        self.conditional_call_a16(self.get_flag(FLAG_Z), mmu);
    }
    pub fn op_call_nc_a16(&mut self, mmu: &mut Mmu) {
        self.conditional_call_a16(!self.get_flag(FLAG_C), mmu);
    }
    pub fn op_call_c_a16(&mut self, mmu: &mut Mmu) {
        self.conditional_call_a16(self.get_flag(FLAG_C), mmu);
    }

    // RET / RET cc / RETI
    fn conditional_ret(&mut self, condition: bool, mmu: &mut Mmu) {
        if condition {
            self.pc = self.pop_word(mmu);
        }
    }
    pub fn op_ret(&mut self, mmu: &mut Mmu) {
        self.conditional_ret(true, mmu);
    }
    pub fn op_ret_nz(&mut self, mmu: &mut Mmu) {
        self.conditional_ret(!self.get_flag(FLAG_Z), mmu);
    }
    pub fn op_ret_z(&mut self, mmu: &mut Mmu) {
        self.conditional_ret(self.get_flag(FLAG_Z), mmu);
    }
    pub fn op_ret_nc(&mut self, mmu: &mut Mmu) {
        self.conditional_ret(!self.get_flag(FLAG_C), mmu);
    }
    pub fn op_ret_c(&mut self, mmu: &mut Mmu) {
        self.conditional_ret(self.get_flag(FLAG_C), mmu);
    }
    pub fn op_reti(&mut self, mmu: &mut Mmu) {
        self.pc = self.pop_word(mmu);
        self.ime = true;
    }

    // RST n
    fn rst(&mut self, vector: u16, mmu: &mut Mmu) {
        self.push_word(self.pc, mmu);
        self.pc = vector;
    }
    pub fn op_rst_00h(&mut self, mmu: &mut Mmu) {
        self.rst(0x0000, mmu);
    }
    pub fn op_rst_08h(&mut self, mmu: &mut Mmu) {
        self.rst(0x0008, mmu);
    }
    pub fn op_rst_10h(&mut self, mmu: &mut Mmu) {
        self.rst(0x0010, mmu);
    }
    pub fn op_rst_18h(&mut self, mmu: &mut Mmu) {
        self.rst(0x0018, mmu);
    }
    pub fn op_rst_20h(&mut self, mmu: &mut Mmu) {
        self.rst(0x0020, mmu);
    }
    pub fn op_rst_28h(&mut self, mmu: &mut Mmu) {
        self.rst(0x0028, mmu);
    }
    pub fn op_rst_30h(&mut self, mmu: &mut Mmu) {
        self.rst(0x0030, mmu);
    }
    pub fn op_rst_38h(&mut self, mmu: &mut Mmu) {
        self.rst(0x0038, mmu);
    }

    // Misc Control
    pub fn op_di(&mut self, _mmu: &mut Mmu) {
        self.ime = false;
    }
    pub fn op_ei(&mut self, _mmu: &mut Mmu) {
        self.ime = true;
    }
    pub fn op_halt(&mut self, _mmu: &mut Mmu) {
        // Low-power wait is not modeled; games halting for an interrupt
        // spin until it fires.
    }
    pub fn op_stop(&mut self, _mmu: &mut Mmu) {
        log::warn!(
            "STOP executed at PC={:#06X}; low-power state not modeled",
            self.instruction_pc
        );
    }

    // Flags
    pub fn op_scf(&mut self, _mmu: &mut Mmu) {
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, true);
    }
    pub fn op_ccf(&mut self, _mmu: &mut Mmu) {
        let current_c = self.get_flag(FLAG_C);
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, !current_c);
    }

    // Misc ALU/Data
    pub fn op_cpl(&mut self, _mmu: &mut Mmu) {
        self.a = !self.a;
        self.set_flag(FLAG_N | FLAG_H, true);
    }
    pub fn op_daa(&mut self, _mmu: &mut Mmu) {
        self.daa();
    }
}

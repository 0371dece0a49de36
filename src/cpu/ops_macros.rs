// --- LD Macros ---
macro_rules! ld_r_r {
    ($name:ident, $r1:ident, $r2:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _mmu: &mut crate::mmu::Mmu) {
            self.$r1 = self.$r2;
        }
    };
}
macro_rules! ld_r_hlp {
    ($name:ident, $r1:ident) => {
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            self.$r1 = mmu.read_byte(self.get_hl());
        }
    };
}
macro_rules! ld_hlp_r {
    ($name:ident, $r2:ident) => {
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            mmu.write_byte(self.get_hl(), self.$r2);
        }
    };
}
macro_rules! ld_r_d8 {
    ($name:ident, $r1:ident) => {
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            self.$r1 = self.read_d8(mmu);
        }
    };
}

// --- ALU Macros ---
macro_rules! alu_a_r {
    ($name:ident, $op:ident, $r2:ident) => { // No carry version
        #[inline(always)]
        pub fn $name(&mut self, _mmu: &mut crate::mmu::Mmu) {
            self.$op(self.$r2, false);
        }
    };
    ($name:ident, $op:ident, $r2:ident, carry) => { // With carry version
        #[inline(always)]
        pub fn $name(&mut self, _mmu: &mut crate::mmu::Mmu) {
            self.$op(self.$r2, true);
        }
    };
}
macro_rules! alu_a_hlp {
    ($name:ident, $op:ident) => { // No carry version
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            let val = mmu.read_byte(self.get_hl());
            self.$op(val, false);
        }
    };
    ($name:ident, $op:ident, carry) => { // With carry version
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            let val = mmu.read_byte(self.get_hl());
            self.$op(val, true);
        }
    };
}
macro_rules! alu_a_d8 {
    ($name:ident, $op:ident) => { // No carry version
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            let val = self.read_d8(mmu);
            self.$op(val, false);
        }
    };
    ($name:ident, $op:ident, carry) => { // With carry version
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            let val = self.read_d8(mmu);
            self.$op(val, true);
        }
    };
}

// --- CB Macros ---
macro_rules! cb_reg_op {
    ($name:ident, $op:ident, $reg:ident) => { // Rotate/shift op
        #[inline(always)]
        pub fn $name(&mut self, _mmu: &mut crate::mmu::Mmu) {
            self.$reg = self.$op(self.$reg);
        }
    };
    ($name:ident, bit, $bit:expr, $reg:ident) => { // BIT op
        #[inline(always)]
        pub fn $name(&mut self, _mmu: &mut crate::mmu::Mmu) {
            self.op_bit($bit, self.$reg);
        }
    };
    ($name:ident, res, $bit:expr, $reg:ident) => { // RES op
        #[inline(always)]
        pub fn $name(&mut self, _mmu: &mut crate::mmu::Mmu) {
            self.$reg &= !(1 << $bit);
        }
    };
    ($name:ident, set, $bit:expr, $reg:ident) => { // SET op
        #[inline(always)]
        pub fn $name(&mut self, _mmu: &mut crate::mmu::Mmu) {
            self.$reg |= 1 << $bit;
        }
    };
}
macro_rules! cb_hlp_op {
    ($name:ident, $op:ident) => { // Rotate/shift op on (HL)
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            let addr = self.get_hl();
            let value = mmu.read_byte(addr);
            let result = self.$op(value);
            mmu.write_byte(addr, result);
        }
    };
    ($name:ident, bit, $bit:expr) => { // BIT op on (HL)
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            let value = mmu.read_byte(self.get_hl());
            self.op_bit($bit, value);
        }
    };
    ($name:ident, res, $bit:expr) => { // RES op on (HL)
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            let addr = self.get_hl();
            let value = mmu.read_byte(addr);
            mmu.write_byte(addr, value & !(1 << $bit));
        }
    };
    ($name:ident, set, $bit:expr) => { // SET op on (HL)
        pub fn $name(&mut self, mmu: &mut crate::mmu::Mmu) {
            let addr = self.get_hl();
            let value = mmu.read_byte(addr);
            mmu.write_byte(addr, value | (1 << $bit));
        }
    };
}

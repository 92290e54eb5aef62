mod alu;
mod bcd;
mod branch;
mod load_store;
mod shift;
mod stack;
mod unary;

use crate::core::{Bus, BusMaster};
use crate::cpu::{
    Cpu,
    state::{CpuStateTrait, M65C02State},
};

#[repr(u8)]
#[derive(Copy, Clone, Debug)]
pub enum StatusFlag {
    C = 0x01, // Carry
    Z = 0x02, // Zero
    I = 0x04, // Interrupt disable
    D = 0x08, // Decimal
    B = 0x10, // Break (only meaningful in the pushed copy)
    U = 0x20, // Constant — always reads 1
    V = 0x40, // Overflow
    N = 0x80, // Sign
}

/// 65C02 instruction-accurate, cycle-counted interpreter.
///
/// Unlike a per-clock-tick state machine, `step` dispatches and runs a
/// whole instruction in one call and charges its total cost (base +
/// addressing/branch penalties) to `cycles` at the end.
pub struct M65C02 {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub sp: u8,
    pub p: u8,

    /// Monotonic cycle counter. Wraps at 2^32 per the data model.
    pub cycles: u32,
    pub instructions: u64,

    /// Set by WAI, cleared by irq()/nmi().
    waiting: bool,
    /// Set by STP; only a reset clears it (modeled as a permanent wait).
    stopped: bool,
    /// Previous NMI line state, for edge detection.
    nmi_prev: bool,
}

impl Default for M65C02 {
    fn default() -> Self {
        Self::new()
    }
}

impl M65C02 {
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0xFD,
            p: 0x24, // I=1, constant=1
            cycles: 0,
            instructions: 0,
            waiting: false,
            stopped: false,
            nmi_prev: false,
        }
    }

    #[inline]
    pub fn flag(&self, flag: StatusFlag) -> bool {
        self.p & (flag as u8) != 0
    }

    #[inline]
    pub(crate) fn set_flag(&mut self, flag: StatusFlag, set: bool) {
        if set {
            self.p |= flag as u8;
        } else {
            self.p &= !(flag as u8);
        }
    }

    #[inline]
    pub(crate) fn set_nz(&mut self, result: u8) {
        self.set_flag(StatusFlag::N, result & 0x80 != 0);
        self.set_flag(StatusFlag::Z, result == 0);
    }

    // ---- Fetch / addressing-mode helpers shared by every op_* module ----

    #[inline]
    pub(crate) fn fetch_u8(&mut self, bus: &mut dyn Bus) -> u8 {
        let v = bus.read(BusMaster::Cpu, self.pc);
        self.pc = self.pc.wrapping_add(1);
        v
    }

    #[inline]
    pub(crate) fn fetch_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.fetch_u8(bus);
        let hi = self.fetch_u8(bus);
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn addr_zp(&mut self, bus: &mut dyn Bus) -> u16 {
        self.fetch_u8(bus) as u16
    }

    pub(crate) fn addr_zp_x(&mut self, bus: &mut dyn Bus) -> u16 {
        self.fetch_u8(bus).wrapping_add(self.x) as u16
    }

    pub(crate) fn addr_zp_y(&mut self, bus: &mut dyn Bus) -> u16 {
        self.fetch_u8(bus).wrapping_add(self.y) as u16
    }

    pub(crate) fn addr_abs(&mut self, bus: &mut dyn Bus) -> u16 {
        self.fetch_u16(bus)
    }

    /// Returns (effective address, true if indexing crossed a page).
    pub(crate) fn addr_abs_x(&mut self, bus: &mut dyn Bus) -> (u16, bool) {
        let base = self.fetch_u16(bus);
        let addr = base.wrapping_add(self.x as u16);
        (addr, (base & 0xFF00) != (addr & 0xFF00))
    }

    pub(crate) fn addr_abs_y(&mut self, bus: &mut dyn Bus) -> (u16, bool) {
        let base = self.fetch_u16(bus);
        let addr = base.wrapping_add(self.y as u16);
        (addr, (base & 0xFF00) != (addr & 0xFF00))
    }

    /// (zp,X) — indexed indirect.
    pub(crate) fn addr_ind_x(&mut self, bus: &mut dyn Bus) -> u16 {
        let zp = self.fetch_u8(bus).wrapping_add(self.x);
        let lo = bus.read(BusMaster::Cpu, zp as u16);
        let hi = bus.read(BusMaster::Cpu, zp.wrapping_add(1) as u16);
        u16::from_le_bytes([lo, hi])
    }

    /// (zp),Y — indirect indexed. Returns (effective address, page-crossed).
    pub(crate) fn addr_ind_y(&mut self, bus: &mut dyn Bus) -> (u16, bool) {
        let zp = self.fetch_u8(bus);
        let lo = bus.read(BusMaster::Cpu, zp as u16);
        let hi = bus.read(BusMaster::Cpu, zp.wrapping_add(1) as u16);
        let base = u16::from_le_bytes([lo, hi]);
        let addr = base.wrapping_add(self.y as u16);
        (addr, (base & 0xFF00) != (addr & 0xFF00))
    }

    /// (zp) — the 65C02 addition: indirect zero-page, no index.
    pub(crate) fn addr_ind_zp(&mut self, bus: &mut dyn Bus) -> u16 {
        let zp = self.fetch_u8(bus);
        let lo = bus.read(BusMaster::Cpu, zp as u16);
        let hi = bus.read(BusMaster::Cpu, zp.wrapping_add(1) as u16);
        u16::from_le_bytes([lo, hi])
    }

    /// Read-modify-write a memory operand. Real 65C02 RMW cycles write the
    /// unmodified value back before the modified one; memory-mapped
    /// devices (VERA's data port in particular) can be sensitive to this.
    pub(crate) fn rmw(&mut self, bus: &mut dyn Bus, addr: u16, f: impl FnOnce(&mut Self, u8) -> u8) -> u8 {
        let old = bus.read(BusMaster::Cpu, addr);
        bus.write(BusMaster::Cpu, addr, old);
        let new = f(self, old);
        bus.write(BusMaster::Cpu, addr, new);
        new
    }

    // ---- Interrupt sequences ----

    fn push(&mut self, bus: &mut dyn Bus, value: u8) {
        bus.write(BusMaster::Cpu, 0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pull(&mut self, bus: &mut dyn Bus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(BusMaster::Cpu, 0x0100 | self.sp as u16)
    }

    fn vector(&mut self, bus: &mut dyn Bus, addr: u16) {
        let lo = bus.read(BusMaster::Cpu, addr);
        let hi = bus.read(BusMaster::Cpu, addr.wrapping_add(1));
        self.pc = u16::from_le_bytes([lo, hi]);
    }

    fn service_irq(&mut self, bus: &mut dyn Bus) -> u32 {
        self.push(bus, (self.pc >> 8) as u8);
        self.push(bus, self.pc as u8);
        self.push(bus, (self.p & !(StatusFlag::B as u8)) | StatusFlag::U as u8);
        self.set_flag(StatusFlag::I, true);
        self.set_flag(StatusFlag::D, false);
        self.vector(bus, 0xFFFE);
        self.waiting = false;
        7
    }

    fn service_nmi(&mut self, bus: &mut dyn Bus) -> u32 {
        self.push(bus, (self.pc >> 8) as u8);
        self.push(bus, self.pc as u8);
        self.push(bus, (self.p & !(StatusFlag::B as u8)) | StatusFlag::U as u8);
        self.set_flag(StatusFlag::I, true);
        self.set_flag(StatusFlag::D, false);
        self.vector(bus, 0xFFFA);
        self.waiting = false;
        7
    }

    fn op_brk(&mut self, bus: &mut dyn Bus) -> u32 {
        self.fetch_u8(bus); // BRK's padding byte, discarded
        self.push(bus, (self.pc >> 8) as u8);
        self.push(bus, self.pc as u8);
        self.push(bus, self.p | StatusFlag::B as u8 | StatusFlag::U as u8);
        self.set_flag(StatusFlag::I, true);
        self.set_flag(StatusFlag::D, false);
        self.vector(bus, 0xFFFE);
        7
    }

    fn op_wai(&mut self) -> u32 {
        self.waiting = true;
        3
    }

    fn op_stp(&mut self) -> u32 {
        self.stopped = true;
        3
    }

    fn op_nop_undoc(&mut self) -> u32 {
        2
    }

    fn execute(&mut self, opcode: u8, bus: &mut dyn Bus) -> u32 {
        match opcode {
            0x00 => self.op_brk(bus),

            // ---- Load/store ----
            0xA9 => self.op_lda_imm(bus),
            0xA5 => self.op_lda_zp(bus),
            0xB5 => self.op_lda_zp_x(bus),
            0xAD => self.op_lda_abs(bus),
            0xBD => self.op_lda_abs_x(bus),
            0xB9 => self.op_lda_abs_y(bus),
            0xA1 => self.op_lda_ind_x(bus),
            0xB1 => self.op_lda_ind_y(bus),
            0xB2 => self.op_lda_ind_zp(bus),

            0xA2 => self.op_ldx_imm(bus),
            0xA6 => self.op_ldx_zp(bus),
            0xB6 => self.op_ldx_zp_y(bus),
            0xAE => self.op_ldx_abs(bus),
            0xBE => self.op_ldx_abs_y(bus),

            0xA0 => self.op_ldy_imm(bus),
            0xA4 => self.op_ldy_zp(bus),
            0xB4 => self.op_ldy_zp_x(bus),
            0xAC => self.op_ldy_abs(bus),
            0xBC => self.op_ldy_abs_x(bus),

            0x85 => self.op_sta_zp(bus),
            0x95 => self.op_sta_zp_x(bus),
            0x8D => self.op_sta_abs(bus),
            0x9D => self.op_sta_abs_x(bus),
            0x99 => self.op_sta_abs_y(bus),
            0x81 => self.op_sta_ind_x(bus),
            0x91 => self.op_sta_ind_y(bus),
            0x92 => self.op_sta_ind_zp(bus),

            0x86 => self.op_stx_zp(bus),
            0x96 => self.op_stx_zp_y(bus),
            0x8E => self.op_stx_abs(bus),

            0x84 => self.op_sty_zp(bus),
            0x94 => self.op_sty_zp_x(bus),
            0x8C => self.op_sty_abs(bus),

            0x64 => self.op_stz_zp(bus),
            0x74 => self.op_stz_zp_x(bus),
            0x9C => self.op_stz_abs(bus),
            0x9E => self.op_stz_abs_x(bus),

            // ---- ALU ----
            0x69 => self.op_adc_imm(bus),
            0x65 => self.op_adc_zp(bus),
            0x75 => self.op_adc_zp_x(bus),
            0x6D => self.op_adc_abs(bus),
            0x7D => self.op_adc_abs_x(bus),
            0x79 => self.op_adc_abs_y(bus),
            0x61 => self.op_adc_ind_x(bus),
            0x71 => self.op_adc_ind_y(bus),
            0x72 => self.op_adc_ind_zp(bus),

            0xE9 => self.op_sbc_imm(bus),
            0xE5 => self.op_sbc_zp(bus),
            0xF5 => self.op_sbc_zp_x(bus),
            0xED => self.op_sbc_abs(bus),
            0xFD => self.op_sbc_abs_x(bus),
            0xF9 => self.op_sbc_abs_y(bus),
            0xE1 => self.op_sbc_ind_x(bus),
            0xF1 => self.op_sbc_ind_y(bus),
            0xF2 => self.op_sbc_ind_zp(bus),

            0x29 => self.op_and_imm(bus),
            0x25 => self.op_and_zp(bus),
            0x35 => self.op_and_zp_x(bus),
            0x2D => self.op_and_abs(bus),
            0x3D => self.op_and_abs_x(bus),
            0x39 => self.op_and_abs_y(bus),
            0x21 => self.op_and_ind_x(bus),
            0x31 => self.op_and_ind_y(bus),
            0x32 => self.op_and_ind_zp(bus),

            0x09 => self.op_ora_imm(bus),
            0x05 => self.op_ora_zp(bus),
            0x15 => self.op_ora_zp_x(bus),
            0x0D => self.op_ora_abs(bus),
            0x1D => self.op_ora_abs_x(bus),
            0x19 => self.op_ora_abs_y(bus),
            0x01 => self.op_ora_ind_x(bus),
            0x11 => self.op_ora_ind_y(bus),
            0x12 => self.op_ora_ind_zp(bus),

            0x49 => self.op_eor_imm(bus),
            0x45 => self.op_eor_zp(bus),
            0x55 => self.op_eor_zp_x(bus),
            0x4D => self.op_eor_abs(bus),
            0x5D => self.op_eor_abs_x(bus),
            0x59 => self.op_eor_abs_y(bus),
            0x41 => self.op_eor_ind_x(bus),
            0x51 => self.op_eor_ind_y(bus),
            0x52 => self.op_eor_ind_zp(bus),

            0xC9 => self.op_cmp_imm(bus),
            0xC5 => self.op_cmp_zp(bus),
            0xD5 => self.op_cmp_zp_x(bus),
            0xCD => self.op_cmp_abs(bus),
            0xDD => self.op_cmp_abs_x(bus),
            0xD9 => self.op_cmp_abs_y(bus),
            0xC1 => self.op_cmp_ind_x(bus),
            0xD1 => self.op_cmp_ind_y(bus),
            0xD2 => self.op_cmp_ind_zp(bus),

            0xE0 => self.op_cpx_imm(bus),
            0xE4 => self.op_cpx_zp(bus),
            0xEC => self.op_cpx_abs(bus),

            0xC0 => self.op_cpy_imm(bus),
            0xC4 => self.op_cpy_zp(bus),
            0xCC => self.op_cpy_abs(bus),

            0x89 => self.op_bit_imm(bus),
            0x24 => self.op_bit_zp(bus),
            0x34 => self.op_bit_zp_x(bus),
            0x2C => self.op_bit_abs(bus),
            0x3C => self.op_bit_abs_x(bus),

            0x04 => self.op_tsb_zp(bus),
            0x0C => self.op_tsb_abs(bus),
            0x14 => self.op_trb_zp(bus),
            0x1C => self.op_trb_abs(bus),

            // ---- Shift/rotate/inc/dec (memory) ----
            0x0A => self.op_asl_acc(),
            0x06 => self.op_asl_zp(bus),
            0x16 => self.op_asl_zp_x(bus),
            0x0E => self.op_asl_abs(bus),
            0x1E => self.op_asl_abs_x(bus),

            0x4A => self.op_lsr_acc(),
            0x46 => self.op_lsr_zp(bus),
            0x56 => self.op_lsr_zp_x(bus),
            0x4E => self.op_lsr_abs(bus),
            0x5E => self.op_lsr_abs_x(bus),

            0x2A => self.op_rol_acc(),
            0x26 => self.op_rol_zp(bus),
            0x36 => self.op_rol_zp_x(bus),
            0x2E => self.op_rol_abs(bus),
            0x3E => self.op_rol_abs_x(bus),

            0x6A => self.op_ror_acc(),
            0x66 => self.op_ror_zp(bus),
            0x76 => self.op_ror_zp_x(bus),
            0x6E => self.op_ror_abs(bus),
            0x7E => self.op_ror_abs_x(bus),

            0xE6 => self.op_inc_zp(bus),
            0xF6 => self.op_inc_zp_x(bus),
            0xEE => self.op_inc_abs(bus),
            0xFE => self.op_inc_abs_x(bus),
            0x1A => self.op_inc_acc(),

            0xC6 => self.op_dec_zp(bus),
            0xD6 => self.op_dec_zp_x(bus),
            0xCE => self.op_dec_abs(bus),
            0xDE => self.op_dec_abs_x(bus),
            0x3A => self.op_dec_acc(),

            0x07 | 0x17 | 0x27 | 0x37 | 0x47 | 0x57 | 0x67 | 0x77 => {
                self.op_rmb(bus, (opcode >> 4) & 0x07)
            }
            0x87 | 0x97 | 0xA7 | 0xB7 | 0xC7 | 0xD7 | 0xE7 | 0xF7 => {
                self.op_smb(bus, (opcode >> 4) & 0x07)
            }

            // ---- Branch/jump/subroutine ----
            0x10 => self.op_bpl(bus),
            0x30 => self.op_bmi(bus),
            0x50 => self.op_bvc(bus),
            0x70 => self.op_bvs(bus),
            0x90 => self.op_bcc(bus),
            0xB0 => self.op_bcs(bus),
            0xD0 => self.op_bne(bus),
            0xF0 => self.op_beq(bus),
            0x80 => self.op_bra(bus),

            0x0F | 0x1F | 0x2F | 0x3F | 0x4F | 0x5F | 0x6F | 0x7F => {
                self.op_bbr(bus, (opcode >> 4) & 0x07)
            }
            0x8F | 0x9F | 0xAF | 0xBF | 0xCF | 0xDF | 0xEF | 0xFF => {
                self.op_bbs(bus, (opcode >> 4) & 0x07)
            }

            0x4C => self.op_jmp_abs(bus),
            0x6C => self.op_jmp_ind(bus),
            0x7C => self.op_jmp_ind_abs_x(bus),
            0x20 => self.op_jsr(bus),
            0x60 => self.op_rts(bus),
            0x40 => self.op_rti(bus),

            // ---- Stack / flags / transfers ----
            0x48 => self.op_pha(bus),
            0x68 => self.op_pla(bus),
            0x08 => self.op_php(bus),
            0x28 => self.op_plp(bus),
            0xDA => self.op_phx(bus),
            0xFA => self.op_plx(bus),
            0x5A => self.op_phy(bus),
            0x7A => self.op_ply(bus),

            0xAA => self.op_tax(),
            0x8A => self.op_txa(),
            0xA8 => self.op_tay(),
            0x98 => self.op_tya(),
            0x9A => self.op_txs(),
            0xBA => self.op_tsx(),

            0xE8 => self.op_inx(),
            0xC8 => self.op_iny(),
            0xCA => self.op_dex(),
            0x88 => self.op_dey(),

            0x18 => self.op_clc(),
            0x38 => self.op_sec(),
            0x58 => self.op_cli(),
            0x78 => self.op_sei(),
            0xB8 => self.op_clv(),
            0xD8 => self.op_cld(),
            0xF8 => self.op_sed(),

            0xEA => self.op_nop(),
            0xCB => self.op_wai(),
            0xDB => self.op_stp(),

            _ => self.op_nop_undoc(),
        }
    }

    fn pending_interrupt(&mut self, bus: &dyn Bus) -> Option<bool> {
        let ints = bus.check_interrupts();
        let nmi_edge = ints.nmi && !self.nmi_prev;
        self.nmi_prev = ints.nmi;
        if nmi_edge {
            return Some(true); // NMI
        }
        if ints.irq && !self.flag(StatusFlag::I) {
            return Some(false); // IRQ
        }
        None
    }
}

impl CpuStateTrait for M65C02 {
    type Snapshot = M65C02State;

    fn snapshot(&self) -> M65C02State {
        M65C02State {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            sp: self.sp,
            p: self.p,
            cycles: self.cycles,
            instructions: self.instructions,
            waiting: self.waiting,
        }
    }
}

impl Cpu for M65C02 {
    fn reset(&mut self, bus: &mut dyn Bus) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.p = 0x24;
        self.waiting = false;
        self.stopped = false;
        self.nmi_prev = false;
        self.vector(bus, 0xFFFC);
    }

    fn step(&mut self, bus: &mut dyn Bus) -> u32 {
        if let Some(is_nmi) = self.pending_interrupt(bus) {
            let cost = if is_nmi {
                self.service_nmi(bus)
            } else {
                self.service_irq(bus)
            };
            self.cycles = self.cycles.wrapping_add(cost);
            self.instructions += 1;
            return cost;
        }

        if self.waiting || self.stopped {
            self.cycles = self.cycles.wrapping_add(1);
            return 1;
        }

        let opcode = self.fetch_u8(bus);
        let cost = self.execute(opcode, bus);
        self.cycles = self.cycles.wrapping_add(cost);
        self.instructions += 1;
        cost
    }

    fn exec(&mut self, bus: &mut dyn Bus, budget: u32) {
        let start = self.cycles;
        loop {
            let elapsed = self.cycles.wrapping_sub(start);
            if elapsed >= budget {
                break;
            }
            if (self.waiting || self.stopped) && self.pending_interrupt(bus).is_none() {
                self.cycles = self.cycles.wrapping_add(budget - elapsed);
                break;
            }
            self.step(bus);
        }
    }

    fn irq(&mut self, bus: &mut dyn Bus) {
        let cost = self.service_irq(bus);
        self.cycles = self.cycles.wrapping_add(cost);
    }

    fn nmi(&mut self, bus: &mut dyn Bus) {
        let cost = self.service_nmi(bus);
        self.cycles = self.cycles.wrapping_add(cost);
    }

    fn is_sleeping(&self) -> bool {
        self.waiting || self.stopped
    }
}

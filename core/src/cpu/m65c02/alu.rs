use super::{M65C02, StatusFlag};
use crate::core::{Bus, BusMaster};

impl M65C02 {
    #[inline]
    pub(crate) fn perform_and(&mut self, operand: u8) {
        self.a &= operand;
        self.set_nz(self.a);
    }

    #[inline]
    pub(crate) fn perform_ora(&mut self, operand: u8) {
        self.a |= operand;
        self.set_nz(self.a);
    }

    #[inline]
    pub(crate) fn perform_eor(&mut self, operand: u8) {
        self.a ^= operand;
        self.set_nz(self.a);
    }

    #[inline]
    pub(crate) fn perform_compare(&mut self, register: u8, operand: u8) {
        let result = register.wrapping_sub(operand);
        self.set_flag(StatusFlag::C, register >= operand);
        self.set_nz(result);
    }

    /// BIT against memory: N = bit 7, V = bit 6, Z = (A & M) == 0.
    #[inline]
    pub(crate) fn perform_bit(&mut self, operand: u8) {
        self.set_flag(StatusFlag::N, operand & 0x80 != 0);
        self.set_flag(StatusFlag::V, operand & 0x40 != 0);
        self.set_flag(StatusFlag::Z, (self.a & operand) == 0);
    }

    /// BIT immediate (65C02 addition): only Z is affected.
    #[inline]
    pub(crate) fn perform_bit_imm(&mut self, operand: u8) {
        self.set_flag(StatusFlag::Z, (self.a & operand) == 0);
    }

    // ---- ADC ----

    pub(crate) fn op_adc_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.adc(v);
        2 + self.decimal_penalty()
    }
    pub(crate) fn op_adc_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.adc(v);
        3 + self.decimal_penalty()
    }
    pub(crate) fn op_adc_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.adc(v);
        4 + self.decimal_penalty()
    }
    pub(crate) fn op_adc_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.adc(v);
        4 + self.decimal_penalty()
    }
    pub(crate) fn op_adc_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.adc(v);
        4 + crossed as u32 + self.decimal_penalty()
    }
    pub(crate) fn op_adc_abs_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.adc(v);
        4 + crossed as u32 + self.decimal_penalty()
    }
    pub(crate) fn op_adc_ind_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.adc(v);
        6 + self.decimal_penalty()
    }
    pub(crate) fn op_adc_ind_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_ind_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.adc(v);
        5 + crossed as u32 + self.decimal_penalty()
    }
    pub(crate) fn op_adc_ind_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.adc(v);
        5 + self.decimal_penalty()
    }

    // ---- SBC ----

    pub(crate) fn op_sbc_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.sbc(v);
        2 + self.decimal_penalty()
    }
    pub(crate) fn op_sbc_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.sbc(v);
        3 + self.decimal_penalty()
    }
    pub(crate) fn op_sbc_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.sbc(v);
        4 + self.decimal_penalty()
    }
    pub(crate) fn op_sbc_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.sbc(v);
        4 + self.decimal_penalty()
    }
    pub(crate) fn op_sbc_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.sbc(v);
        4 + crossed as u32 + self.decimal_penalty()
    }
    pub(crate) fn op_sbc_abs_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.sbc(v);
        4 + crossed as u32 + self.decimal_penalty()
    }
    pub(crate) fn op_sbc_ind_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.sbc(v);
        6 + self.decimal_penalty()
    }
    pub(crate) fn op_sbc_ind_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_ind_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.sbc(v);
        5 + crossed as u32 + self.decimal_penalty()
    }
    pub(crate) fn op_sbc_ind_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.sbc(v);
        5 + self.decimal_penalty()
    }

    // ---- AND ----

    pub(crate) fn op_and_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.perform_and(v);
        2
    }
    pub(crate) fn op_and_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_and(v);
        3
    }
    pub(crate) fn op_and_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_and(v);
        4
    }
    pub(crate) fn op_and_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_and(v);
        4
    }
    pub(crate) fn op_and_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_and(v);
        4 + crossed as u32
    }
    pub(crate) fn op_and_abs_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_and(v);
        4 + crossed as u32
    }
    pub(crate) fn op_and_ind_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_and(v);
        6
    }
    pub(crate) fn op_and_ind_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_ind_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_and(v);
        5 + crossed as u32
    }
    pub(crate) fn op_and_ind_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_and(v);
        5
    }

    // ---- ORA ----

    pub(crate) fn op_ora_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.perform_ora(v);
        2
    }
    pub(crate) fn op_ora_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_ora(v);
        3
    }
    pub(crate) fn op_ora_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_ora(v);
        4
    }
    pub(crate) fn op_ora_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_ora(v);
        4
    }
    pub(crate) fn op_ora_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_ora(v);
        4 + crossed as u32
    }
    pub(crate) fn op_ora_abs_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_ora(v);
        4 + crossed as u32
    }
    pub(crate) fn op_ora_ind_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_ora(v);
        6
    }
    pub(crate) fn op_ora_ind_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_ind_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_ora(v);
        5 + crossed as u32
    }
    pub(crate) fn op_ora_ind_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_ora(v);
        5
    }

    // ---- EOR ----

    pub(crate) fn op_eor_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.perform_eor(v);
        2
    }
    pub(crate) fn op_eor_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_eor(v);
        3
    }
    pub(crate) fn op_eor_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_eor(v);
        4
    }
    pub(crate) fn op_eor_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_eor(v);
        4
    }
    pub(crate) fn op_eor_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_eor(v);
        4 + crossed as u32
    }
    pub(crate) fn op_eor_abs_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_eor(v);
        4 + crossed as u32
    }
    pub(crate) fn op_eor_ind_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_eor(v);
        6
    }
    pub(crate) fn op_eor_ind_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_ind_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_eor(v);
        5 + crossed as u32
    }
    pub(crate) fn op_eor_ind_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_eor(v);
        5
    }

    // ---- CMP ----

    pub(crate) fn op_cmp_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.perform_compare(self.a, v);
        2
    }
    pub(crate) fn op_cmp_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.a, v);
        3
    }
    pub(crate) fn op_cmp_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.a, v);
        4
    }
    pub(crate) fn op_cmp_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.a, v);
        4
    }
    pub(crate) fn op_cmp_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.a, v);
        4 + crossed as u32
    }
    pub(crate) fn op_cmp_abs_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.a, v);
        4 + crossed as u32
    }
    pub(crate) fn op_cmp_ind_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.a, v);
        6
    }
    pub(crate) fn op_cmp_ind_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_ind_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.a, v);
        5 + crossed as u32
    }
    pub(crate) fn op_cmp_ind_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.a, v);
        5
    }

    // ---- CPX / CPY ----

    pub(crate) fn op_cpx_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.perform_compare(self.x, v);
        2
    }
    pub(crate) fn op_cpx_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.x, v);
        3
    }
    pub(crate) fn op_cpx_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.x, v);
        4
    }

    pub(crate) fn op_cpy_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.perform_compare(self.y, v);
        2
    }
    pub(crate) fn op_cpy_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.y, v);
        3
    }
    pub(crate) fn op_cpy_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_compare(self.y, v);
        4
    }

    // ---- BIT ----

    pub(crate) fn op_bit_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.perform_bit_imm(v);
        2
    }
    pub(crate) fn op_bit_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_bit(v);
        3
    }
    pub(crate) fn op_bit_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_bit(v);
        4
    }
    pub(crate) fn op_bit_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_bit(v);
        4
    }
    pub(crate) fn op_bit_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.perform_bit(v);
        4 + crossed as u32
    }

    // ---- TSB / TRB (test-and-set/reset bits, 65C02 additions) ----

    pub(crate) fn op_tsb_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        self.rmw(bus, addr, |cpu, v| {
            cpu.set_flag(StatusFlag::Z, (cpu.a & v) == 0);
            v | cpu.a
        });
        5
    }
    pub(crate) fn op_tsb_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        self.rmw(bus, addr, |cpu, v| {
            cpu.set_flag(StatusFlag::Z, (cpu.a & v) == 0);
            v | cpu.a
        });
        6
    }
    pub(crate) fn op_trb_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        self.rmw(bus, addr, |cpu, v| {
            cpu.set_flag(StatusFlag::Z, (cpu.a & v) == 0);
            v & !cpu.a
        });
        5
    }
    pub(crate) fn op_trb_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        self.rmw(bus, addr, |cpu, v| {
            cpu.set_flag(StatusFlag::Z, (cpu.a & v) == 0);
            v & !cpu.a
        });
        6
    }
}

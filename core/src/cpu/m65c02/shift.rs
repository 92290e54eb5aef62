use super::{M65C02, StatusFlag};
use crate::core::Bus;

impl M65C02 {
    #[inline]
    fn perform_asl(&mut self, val: u8) -> u8 {
        let result = val << 1;
        self.set_flag(StatusFlag::C, val & 0x80 != 0);
        self.set_nz(result);
        result
    }

    #[inline]
    fn perform_lsr(&mut self, val: u8) -> u8 {
        let result = val >> 1;
        self.set_flag(StatusFlag::C, val & 0x01 != 0);
        self.set_nz(result);
        result
    }

    #[inline]
    fn perform_rol(&mut self, val: u8) -> u8 {
        let carry_in = self.flag(StatusFlag::C) as u8;
        let result = (val << 1) | carry_in;
        self.set_flag(StatusFlag::C, val & 0x80 != 0);
        self.set_nz(result);
        result
    }

    #[inline]
    fn perform_ror(&mut self, val: u8) -> u8 {
        let carry_in = self.flag(StatusFlag::C) as u8;
        let result = (val >> 1) | (carry_in << 7);
        self.set_flag(StatusFlag::C, val & 0x01 != 0);
        self.set_nz(result);
        result
    }

    // ---- ASL ----

    pub(crate) fn op_asl_acc(&mut self) -> u32 {
        self.a = self.perform_asl(self.a);
        2
    }
    pub(crate) fn op_asl_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_asl(v));
        5
    }
    pub(crate) fn op_asl_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_asl(v));
        6
    }
    pub(crate) fn op_asl_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_asl(v));
        6
    }
    pub(crate) fn op_asl_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, _) = self.addr_abs_x(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_asl(v));
        6
    }

    // ---- LSR ----

    pub(crate) fn op_lsr_acc(&mut self) -> u32 {
        self.a = self.perform_lsr(self.a);
        2
    }
    pub(crate) fn op_lsr_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_lsr(v));
        5
    }
    pub(crate) fn op_lsr_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_lsr(v));
        6
    }
    pub(crate) fn op_lsr_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_lsr(v));
        6
    }
    pub(crate) fn op_lsr_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, _) = self.addr_abs_x(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_lsr(v));
        6
    }

    // ---- ROL ----

    pub(crate) fn op_rol_acc(&mut self) -> u32 {
        self.a = self.perform_rol(self.a);
        2
    }
    pub(crate) fn op_rol_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_rol(v));
        5
    }
    pub(crate) fn op_rol_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_rol(v));
        6
    }
    pub(crate) fn op_rol_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_rol(v));
        6
    }
    pub(crate) fn op_rol_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, _) = self.addr_abs_x(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_rol(v));
        6
    }

    // ---- ROR ----

    pub(crate) fn op_ror_acc(&mut self) -> u32 {
        self.a = self.perform_ror(self.a);
        2
    }
    pub(crate) fn op_ror_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_ror(v));
        5
    }
    pub(crate) fn op_ror_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_ror(v));
        6
    }
    pub(crate) fn op_ror_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_ror(v));
        6
    }
    pub(crate) fn op_ror_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, _) = self.addr_abs_x(bus);
        self.rmw(bus, addr, |cpu, v| cpu.perform_ror(v));
        6
    }

    // ---- RMB/SMB (65C02 additions: reset/set a single zero-page bit) ----

    pub(crate) fn op_rmb(&mut self, bus: &mut dyn Bus, bit: u8) -> u32 {
        let addr = self.addr_zp(bus);
        self.rmw(bus, addr, |_, v| v & !(1 << bit));
        5
    }

    pub(crate) fn op_smb(&mut self, bus: &mut dyn Bus, bit: u8) -> u32 {
        let addr = self.addr_zp(bus);
        self.rmw(bus, addr, |_, v| v | (1 << bit));
        5
    }
}

use super::M65C02;
use crate::core::Bus;

impl M65C02 {
    // ---- INC (memory and, as a 65C02 addition, accumulator) ----

    pub(crate) fn op_inc_acc(&mut self) -> u32 {
        self.a = self.a.wrapping_add(1);
        self.set_nz(self.a);
        2
    }
    pub(crate) fn op_inc_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        self.rmw(bus, addr, |cpu, v| {
            let r = v.wrapping_add(1);
            cpu.set_nz(r);
            r
        });
        5
    }
    pub(crate) fn op_inc_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        self.rmw(bus, addr, |cpu, v| {
            let r = v.wrapping_add(1);
            cpu.set_nz(r);
            r
        });
        6
    }
    pub(crate) fn op_inc_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        self.rmw(bus, addr, |cpu, v| {
            let r = v.wrapping_add(1);
            cpu.set_nz(r);
            r
        });
        6
    }
    pub(crate) fn op_inc_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, _) = self.addr_abs_x(bus);
        self.rmw(bus, addr, |cpu, v| {
            let r = v.wrapping_add(1);
            cpu.set_nz(r);
            r
        });
        6
    }

    // ---- DEC (memory and, as a 65C02 addition, accumulator) ----

    pub(crate) fn op_dec_acc(&mut self) -> u32 {
        self.a = self.a.wrapping_sub(1);
        self.set_nz(self.a);
        2
    }
    pub(crate) fn op_dec_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        self.rmw(bus, addr, |cpu, v| {
            let r = v.wrapping_sub(1);
            cpu.set_nz(r);
            r
        });
        5
    }
    pub(crate) fn op_dec_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        self.rmw(bus, addr, |cpu, v| {
            let r = v.wrapping_sub(1);
            cpu.set_nz(r);
            r
        });
        6
    }
    pub(crate) fn op_dec_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        self.rmw(bus, addr, |cpu, v| {
            let r = v.wrapping_sub(1);
            cpu.set_nz(r);
            r
        });
        6
    }
    pub(crate) fn op_dec_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, _) = self.addr_abs_x(bus);
        self.rmw(bus, addr, |cpu, v| {
            let r = v.wrapping_sub(1);
            cpu.set_nz(r);
            r
        });
        6
    }
}

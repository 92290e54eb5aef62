use super::M65C02;
use crate::core::{Bus, BusMaster};

impl M65C02 {
    // ---- LDA ----

    pub(crate) fn op_lda_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.a = v;
        self.set_nz(v);
        2
    }
    pub(crate) fn op_lda_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.a = v;
        self.set_nz(v);
        3
    }
    pub(crate) fn op_lda_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.a = v;
        self.set_nz(v);
        4
    }
    pub(crate) fn op_lda_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.a = v;
        self.set_nz(v);
        4
    }
    pub(crate) fn op_lda_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.a = v;
        self.set_nz(v);
        4 + crossed as u32
    }
    pub(crate) fn op_lda_abs_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.a = v;
        self.set_nz(v);
        4 + crossed as u32
    }
    pub(crate) fn op_lda_ind_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.a = v;
        self.set_nz(v);
        6
    }
    pub(crate) fn op_lda_ind_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_ind_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.a = v;
        self.set_nz(v);
        5 + crossed as u32
    }
    pub(crate) fn op_lda_ind_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.a = v;
        self.set_nz(v);
        5
    }

    // ---- LDX ----

    pub(crate) fn op_ldx_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.x = v;
        self.set_nz(v);
        2
    }
    pub(crate) fn op_ldx_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.x = v;
        self.set_nz(v);
        3
    }
    pub(crate) fn op_ldx_zp_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.x = v;
        self.set_nz(v);
        4
    }
    pub(crate) fn op_ldx_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.x = v;
        self.set_nz(v);
        4
    }
    pub(crate) fn op_ldx_abs_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_y(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.x = v;
        self.set_nz(v);
        4 + crossed as u32
    }

    // ---- LDY ----

    pub(crate) fn op_ldy_imm(&mut self, bus: &mut dyn Bus) -> u32 {
        let v = self.fetch_u8(bus);
        self.y = v;
        self.set_nz(v);
        2
    }
    pub(crate) fn op_ldy_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.y = v;
        self.set_nz(v);
        3
    }
    pub(crate) fn op_ldy_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.y = v;
        self.set_nz(v);
        4
    }
    pub(crate) fn op_ldy_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.y = v;
        self.set_nz(v);
        4
    }
    pub(crate) fn op_ldy_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, crossed) = self.addr_abs_x(bus);
        let v = bus.read(BusMaster::Cpu, addr);
        self.y = v;
        self.set_nz(v);
        4 + crossed as u32
    }

    // ---- STA ----

    pub(crate) fn op_sta_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        bus.write(BusMaster::Cpu, addr, self.a);
        3
    }
    pub(crate) fn op_sta_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        bus.write(BusMaster::Cpu, addr, self.a);
        4
    }
    pub(crate) fn op_sta_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        bus.write(BusMaster::Cpu, addr, self.a);
        4
    }
    pub(crate) fn op_sta_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, _) = self.addr_abs_x(bus);
        bus.write(BusMaster::Cpu, addr, self.a);
        5
    }
    pub(crate) fn op_sta_abs_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, _) = self.addr_abs_y(bus);
        bus.write(BusMaster::Cpu, addr, self.a);
        5
    }
    pub(crate) fn op_sta_ind_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_x(bus);
        bus.write(BusMaster::Cpu, addr, self.a);
        6
    }
    pub(crate) fn op_sta_ind_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, _) = self.addr_ind_y(bus);
        bus.write(BusMaster::Cpu, addr, self.a);
        6
    }
    pub(crate) fn op_sta_ind_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_ind_zp(bus);
        bus.write(BusMaster::Cpu, addr, self.a);
        5
    }

    // ---- STX / STY ----

    pub(crate) fn op_stx_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        bus.write(BusMaster::Cpu, addr, self.x);
        3
    }
    pub(crate) fn op_stx_zp_y(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_y(bus);
        bus.write(BusMaster::Cpu, addr, self.x);
        4
    }
    pub(crate) fn op_stx_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        bus.write(BusMaster::Cpu, addr, self.x);
        4
    }

    pub(crate) fn op_sty_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        bus.write(BusMaster::Cpu, addr, self.y);
        3
    }
    pub(crate) fn op_sty_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        bus.write(BusMaster::Cpu, addr, self.y);
        4
    }
    pub(crate) fn op_sty_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        bus.write(BusMaster::Cpu, addr, self.y);
        4
    }

    // ---- STZ (65C02 addition: store zero without touching A) ----

    pub(crate) fn op_stz_zp(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp(bus);
        bus.write(BusMaster::Cpu, addr, 0);
        3
    }
    pub(crate) fn op_stz_zp_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_zp_x(bus);
        bus.write(BusMaster::Cpu, addr, 0);
        4
    }
    pub(crate) fn op_stz_abs(&mut self, bus: &mut dyn Bus) -> u32 {
        let addr = self.addr_abs(bus);
        bus.write(BusMaster::Cpu, addr, 0);
        4
    }
    pub(crate) fn op_stz_abs_x(&mut self, bus: &mut dyn Bus) -> u32 {
        let (addr, _) = self.addr_abs_x(bus);
        bus.write(BusMaster::Cpu, addr, 0);
        5
    }
}

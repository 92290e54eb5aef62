use super::{M65C02, StatusFlag};
use crate::core::Bus;

impl M65C02 {
    // ---- Stack push/pull ----

    pub(crate) fn op_pha(&mut self, bus: &mut dyn Bus) -> u32 {
        let a = self.a;
        self.push(bus, a);
        3
    }
    pub(crate) fn op_pla(&mut self, bus: &mut dyn Bus) -> u32 {
        self.a = self.pull(bus);
        self.set_nz(self.a);
        4
    }
    pub(crate) fn op_php(&mut self, bus: &mut dyn Bus) -> u32 {
        let pushed = self.p | StatusFlag::B as u8 | StatusFlag::U as u8;
        self.push(bus, pushed);
        3
    }
    pub(crate) fn op_plp(&mut self, bus: &mut dyn Bus) -> u32 {
        let pulled = self.pull(bus);
        self.p = (pulled | StatusFlag::U as u8) & !(StatusFlag::B as u8);
        4
    }

    /// PHX/PLX/PHY/PLY: 65C02 additions mirroring PHA/PLA for X and Y.
    pub(crate) fn op_phx(&mut self, bus: &mut dyn Bus) -> u32 {
        let x = self.x;
        self.push(bus, x);
        3
    }
    pub(crate) fn op_plx(&mut self, bus: &mut dyn Bus) -> u32 {
        self.x = self.pull(bus);
        self.set_nz(self.x);
        4
    }
    pub(crate) fn op_phy(&mut self, bus: &mut dyn Bus) -> u32 {
        let y = self.y;
        self.push(bus, y);
        3
    }
    pub(crate) fn op_ply(&mut self, bus: &mut dyn Bus) -> u32 {
        self.y = self.pull(bus);
        self.set_nz(self.y);
        4
    }

    // ---- Register transfers ----

    pub(crate) fn op_tax(&mut self) -> u32 {
        self.x = self.a;
        self.set_nz(self.x);
        2
    }
    pub(crate) fn op_txa(&mut self) -> u32 {
        self.a = self.x;
        self.set_nz(self.a);
        2
    }
    pub(crate) fn op_tay(&mut self) -> u32 {
        self.y = self.a;
        self.set_nz(self.y);
        2
    }
    pub(crate) fn op_tya(&mut self) -> u32 {
        self.a = self.y;
        self.set_nz(self.a);
        2
    }
    pub(crate) fn op_txs(&mut self) -> u32 {
        self.sp = self.x;
        2
    }
    pub(crate) fn op_tsx(&mut self) -> u32 {
        self.x = self.sp;
        self.set_nz(self.x);
        2
    }

    // ---- Register increment/decrement ----

    pub(crate) fn op_inx(&mut self) -> u32 {
        self.x = self.x.wrapping_add(1);
        self.set_nz(self.x);
        2
    }
    pub(crate) fn op_iny(&mut self) -> u32 {
        self.y = self.y.wrapping_add(1);
        self.set_nz(self.y);
        2
    }
    pub(crate) fn op_dex(&mut self) -> u32 {
        self.x = self.x.wrapping_sub(1);
        self.set_nz(self.x);
        2
    }
    pub(crate) fn op_dey(&mut self) -> u32 {
        self.y = self.y.wrapping_sub(1);
        self.set_nz(self.y);
        2
    }

    // ---- Flag instructions ----

    pub(crate) fn op_clc(&mut self) -> u32 {
        self.set_flag(StatusFlag::C, false);
        2
    }
    pub(crate) fn op_sec(&mut self) -> u32 {
        self.set_flag(StatusFlag::C, true);
        2
    }
    pub(crate) fn op_cli(&mut self) -> u32 {
        self.set_flag(StatusFlag::I, false);
        2
    }
    pub(crate) fn op_sei(&mut self) -> u32 {
        self.set_flag(StatusFlag::I, true);
        2
    }
    pub(crate) fn op_clv(&mut self) -> u32 {
        self.set_flag(StatusFlag::V, false);
        2
    }
    pub(crate) fn op_cld(&mut self) -> u32 {
        self.set_flag(StatusFlag::D, false);
        2
    }
    pub(crate) fn op_sed(&mut self) -> u32 {
        self.set_flag(StatusFlag::D, true);
        2
    }

    pub(crate) fn op_nop(&mut self) -> u32 {
        2
    }
}

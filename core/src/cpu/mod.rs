use crate::core::Bus;

/// Generic CPU interface: reset, execute one instruction, execute a cycle
/// budget, and service the two hardware interrupt lines.
pub trait Cpu: CpuStateTrait {
    /// Load PC from the reset vector and put the CPU in its power-on state.
    fn reset(&mut self, bus: &mut dyn Bus);

    /// Execute exactly one instruction (servicing a pending interrupt first
    /// if one is unmasked). Returns the number of cycles charged.
    fn step(&mut self, bus: &mut dyn Bus) -> u32;

    /// Execute instructions until at least `budget` cycles have elapsed
    /// since the call began. If the CPU is in WAI, the whole budget is
    /// charged to the cycle counter without stepping, unless an unmasked
    /// interrupt is already pending.
    fn exec(&mut self, bus: &mut dyn Bus, budget: u32);

    /// Force an IRQ sequence (push PC/status, vector through $FFFE/$FFFF).
    fn irq(&mut self, bus: &mut dyn Bus);

    /// Force an NMI sequence (push PC/status, vector through $FFFA/$FFFB).
    fn nmi(&mut self, bus: &mut dyn Bus);

    /// True while halted on WAI, waiting for an interrupt.
    fn is_sleeping(&self) -> bool;
}

pub mod state;
pub use state::{CpuStateTrait, M65C02State};

pub mod m65c02;
pub use m65c02::M65C02;

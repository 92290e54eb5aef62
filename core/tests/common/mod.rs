use retrocore::core::{Bus, BusMaster, InterruptState};

/// Minimal bus for CPU unit tests: flat 64 KiB read/write memory, no
/// peripherals, interrupt lines driven manually by the test.
pub struct TestBus {
    pub memory: [u8; 0x10000],
    pub irq: bool,
    pub nmi: bool,
}

impl TestBus {
    pub fn new() -> Self {
        Self { memory: [0; 0x10000], irq: false, nmi: false }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }
}

impl Bus for TestBus {
    fn read(&mut self, _master: BusMaster, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write(&mut self, _master: BusMaster, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
    }

    fn check_interrupts(&self) -> InterruptState {
        InterruptState { irq: self.irq, nmi: self.nmi }
    }
}

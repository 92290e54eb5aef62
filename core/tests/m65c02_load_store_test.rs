use retrocore::cpu::{Cpu, M65C02};
use retrocore::cpu::m65c02::StatusFlag;

mod common;
use common::TestBus;

#[test]
fn lda_immediate_sets_nz() {
    let mut cpu = M65C02::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0xA9, 0x42]);

    let cycles = cpu.step(&mut bus);

    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.pc, 2);
    assert_eq!(cycles, 2);
    assert!(!cpu.flag(StatusFlag::Z));
    assert!(!cpu.flag(StatusFlag::N));
}

#[test]
fn lda_immediate_zero_sets_z_flag() {
    let mut cpu = M65C02::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0xA9, 0x00]);

    cpu.step(&mut bus);

    assert!(cpu.flag(StatusFlag::Z));
    assert!(!cpu.flag(StatusFlag::N));
}

#[test]
fn lda_absolute_indexed_x_crosses_page() {
    let mut cpu = M65C02::new();
    let mut bus = TestBus::new();
    cpu.x = 0xFF;
    bus.load(0, &[0xBD, 0x01, 0x00]); // LDA $0001,X -> $0100
    bus.load(0x0100, &[0x99]);

    let cycles = cpu.step(&mut bus);

    assert_eq!(cpu.a, 0x99);
    assert_eq!(cycles, 5); // base 4 + 1 for page cross
}

#[test]
fn sta_indirect_zp_is_65c02_addressing_mode() {
    let mut cpu = M65C02::new();
    let mut bus = TestBus::new();
    bus.load(0x10, &[0x00, 0x03]); // pointer at $0010 -> $0300
    cpu.a = 0x7E;
    bus.load(0, &[0x92, 0x10]); // STA ($10)

    cpu.step(&mut bus);

    assert_eq!(bus.memory[0x0300], 0x7E);
}

#[test]
fn stz_zeroes_memory_without_touching_flags() {
    let mut cpu = M65C02::new();
    let mut bus = TestBus::new();
    bus.memory[0x20] = 0xFF;
    cpu.p = 0;
    bus.load(0, &[0x64, 0x20]); // STZ $20

    cpu.step(&mut bus);

    assert_eq!(bus.memory[0x20], 0);
    assert_eq!(cpu.p, 0);
}

#[test]
fn ldx_ldy_set_independent_nz() {
    let mut cpu = M65C02::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0xA2, 0x80, 0xA0, 0x00]); // LDX #$80 ; LDY #$00

    cpu.step(&mut bus);
    assert!(cpu.flag(StatusFlag::N));
    assert!(!cpu.flag(StatusFlag::Z));

    cpu.step(&mut bus);
    assert!(!cpu.flag(StatusFlag::N));
    assert!(cpu.flag(StatusFlag::Z));
}

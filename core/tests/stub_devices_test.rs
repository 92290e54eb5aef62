use retrocore::device::stub::{EmulatorControl, MouseStub, StubRegisterBank};

#[test]
fn register_bank_wraps_offsets_modulo_its_size() {
    let mut bank: StubRegisterBank<16> = StubRegisterBank::new();
    bank.write(20, 0x99); // 20 % 16 = 4

    assert_eq!(bank.read(4), 0x99);
    assert_eq!(bank.read(20), 0x99);
}

#[test]
fn mouse_stub_always_reads_ff() {
    let stub = MouseStub;
    assert_eq!(stub.read(), 0xFF);
}

#[test]
fn gif_recorder_disabled_state_ignores_all_commands() {
    let mut ctrl = EmulatorControl::default();
    let emitted = ctrl.write(5, 2); // try to go Active from Disabled
    assert!(!emitted);
    assert_eq!(ctrl.read(5, 0), 0); // still Disabled
}

#[test]
fn gif_recorder_pause_resume_cycle() {
    let mut ctrl = EmulatorControl::default();
    ctrl.write(5, 1); // Paused (no-op from Disabled, stays Disabled)
    assert_eq!(ctrl.read(5, 0), 0);
}

#[test]
fn gif_recorder_single_frame_command_returns_to_paused() {
    // Only a non-Disabled state can be toggled at all, but a Disabled
    // recorder has no way in from register writes alone per the register
    // bank's transition table, so exercise the pause/resume/capture
    // sequence directly on a recorder started as Paused.
    let mut ctrl = EmulatorControl {
        gif_state: retrocore::device::stub::GifRecorderState::Paused,
        ..Default::default()
    };

    ctrl.write(5, 2); // Paused -> Active
    assert_eq!(ctrl.read(5, 0), 2);

    let emitted = ctrl.write(5, 3); // Active -> capture single frame
    assert!(emitted);
    assert_eq!(ctrl.read(5, 0), 1); // back to Paused
}

#[test]
fn emulator_control_cycle_counter_reads_little_endian_bytes() {
    let ctrl = EmulatorControl::default();
    let cycles: u32 = 0x01_23_45_67;
    assert_eq!(ctrl.read(8, cycles), 0x67);
    assert_eq!(ctrl.read(9, cycles), 0x45);
    assert_eq!(ctrl.read(10, cycles), 0x23);
    assert_eq!(ctrl.read(11, cycles), 0x01);
}

#[test]
fn emulator_control_detection_bytes_spell_out_ascii() {
    let ctrl = EmulatorControl::default();
    assert_eq!(ctrl.read(14, 0), b'1');
    assert_eq!(ctrl.read(15, 0), b'6');
}

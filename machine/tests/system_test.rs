use retrocore::core::{Bus, BusMaster, Machine};
use retrocore::cpu::Cpu;
use retrocore::cpu::m65c02::StatusFlag;
use retromachine::System;
use retromachine::system::VideoMode;

fn rom_offset(addr: u16) -> usize {
    (addr - 0xC000) as usize
}

#[test]
fn s1_reset_vector_drives_pc_into_banked_rom() {
    let mut system = System::new(1, 1);
    {
        let rom = system.rom_mut();
        rom[rom_offset(0xFFFC)] = 0x00;
        rom[rom_offset(0xFFFD)] = 0xC0; // reset vector -> $C000
        rom[rom_offset(0xC000)] = 0xEA; // NOP marker at the reset target
    }

    system.reset();

    assert_eq!(system.cpu.pc, 0xC000);
}

#[test]
fn s2_self_modifying_code_executes_the_freshly_written_opcode() {
    let mut system = System::new(1, 1);
    {
        let rom = system.rom_mut();
        rom[rom_offset(0xFFFC)] = 0x00;
        rom[rom_offset(0xFFFD)] = 0xC0;
    }
    system.reset();

    // LDA #$EA ; STA $0004 ; (byte at $0004 starts as $00/BRK, overwritten
    // with $EA/NOP by the STA before the CPU ever fetches it).
    system.write(BusMaster::Cpu, 0x0000, 0xA9);
    system.write(BusMaster::Cpu, 0x0001, 0xEA);
    system.write(BusMaster::Cpu, 0x0002, 0x85);
    system.write(BusMaster::Cpu, 0x0003, 0x04);
    system.write(BusMaster::Cpu, 0x0004, 0x00);
    system.cpu.pc = 0x0000;

    step_cpu(&mut system); // LDA #$EA
    step_cpu(&mut system); // STA $0004
    assert_eq!(system.debug_read(0, 0x0004), 0xEA);
    step_cpu(&mut system); // now executes as NOP

    assert_eq!(system.cpu.pc, 0x0005);
}

/// Drives one CPU instruction against the system's own bus, reborrowed
/// through a raw pointer exactly as `System::run_frame` does internally
/// (the CPU and the bus it talks to are the same struct).
fn step_cpu(system: &mut System) -> u32 {
    let ptr: *mut System = system;
    unsafe { (*ptr).cpu.step(&mut *ptr) }
}

#[test]
fn s3_line_interrupt_vectors_into_the_handler() {
    let mut system = System::new(1, 1);
    {
        let rom = system.rom_mut();
        rom[..0x4000].fill(0xEA); // fill with NOP so the main stream idles
        rom[rom_offset(0xFFFC)] = 0x00;
        rom[rom_offset(0xFFFD)] = 0xC0; // reset -> $C000
        rom[rom_offset(0xFFFE)] = 0x00;
        rom[rom_offset(0xFFFF)] = 0xC1; // IRQ vector -> $C100
        rom[rom_offset(0xC100)] = 0xA9; // LDA #$42
        rom[rom_offset(0xC101)] = 0x42;
        rom[rom_offset(0xC102)] = 0x85; // STA $00
        rom[rom_offset(0xC103)] = 0x00;
        rom[rom_offset(0xC104)] = 0x40; // RTI
    }
    system.reset();
    system.cpu.p &= !(StatusFlag::I as u8); // unmask IRQ

    system.write(BusMaster::Cpu, 0x9F26, 0x02); // VERA ien |= LINE
    system.write(BusMaster::Cpu, 0x9F28, 0x05); // raster compare = line 5

    system.run_frame();

    assert_eq!(system.debug_read(0, 0x0000), 0x42);
}

#[test]
fn s4_large_mouse_delta_splits_across_ps2_packets() {
    let mut system = System::new(1, 1);

    system.mouse_move(300, 0);

    // Two packets of 3 bytes each: clamped +255 then the +45 remainder.
    assert_eq!(system.ps2_port(1).queued_len(), 6);
}

#[test]
fn s5_ram_and_rom_bank_switches_are_isolated() {
    let mut system = System::new(2, 2);
    system.set_ram_bank(0);
    system.write(BusMaster::Cpu, 0xA000, 0x11);
    system.set_ram_bank(1);
    system.write(BusMaster::Cpu, 0xA000, 0x22);

    system.set_ram_bank(0);
    assert_eq!(system.read(BusMaster::Cpu, 0xA000), 0x11);
    system.set_ram_bank(1);
    assert_eq!(system.read(BusMaster::Cpu, 0xA000), 0x22);

    {
        let rom = system.rom_mut();
        rom[0x0000] = 0xAA; // bank 0, $C000
        rom[0x4000] = 0xBB; // bank 1, $C000
    }
    system.set_rom_bank(0);
    assert_eq!(system.read(BusMaster::Cpu, 0xC000), 0xAA);
    system.set_rom_bank(1);
    assert_eq!(system.read(BusMaster::Cpu, 0xC000), 0xBB);
}

#[test]
fn s5_rom_bank_register_wraps_to_five_bits() {
    let mut system = System::new(1, 1);
    system.set_rom_bank(0xFF); // only the low 5 bits are wired
    // 0xFF & 0x1F = 0x1F = 31, but only 1 bank exists so it wraps mod 1 = 0.
    {
        let rom = system.rom_mut();
        rom[0x0000] = 0x7E;
    }
    assert_eq!(system.read(BusMaster::Cpu, 0xC000), 0x7E);
}

/// Writes one sprite's 8-byte attribute record through the data-port
/// register mechanism ($9F23/$9F24), the only path a CPU program has into
/// the sprite-attribute table aliased at $1FC00-$1FFFF.
fn write_sprite_attrs(vera: &mut retrocore::device::vera::Vera, sprite_index: u32, attrs: [u8; 8]) {
    let addr = 0x1FC00 + sprite_index * 8;
    vera.write_reg(0, (addr & 0xFF) as u8);
    vera.write_reg(1, ((addr >> 8) & 0xFF) as u8);
    vera.write_reg(2, (((addr >> 16) & 0x01) as u8) | (2 << 3)); // step code 2 => +1
    for b in attrs {
        vera.write_reg(3, b);
    }
}

#[test]
fn s6_overlapping_sprites_raise_the_collision_flag() {
    let mut system = System::new(1, 1);
    for addr in 0..64u32 {
        system.vera.vram_write(addr, 0xFF);
    }
    let sprite0: [u8; 8] = [0, 0x80, 10, 0x04, 10, 0, 0x01, 0];
    let sprite1: [u8; 8] = [0, 0x80, 12, 0x04, 10, 0, 0x01, 0];
    write_sprite_attrs(&mut system.vera, 0, sprite0);
    write_sprite_attrs(&mut system.vera, 1, sprite1);
    system.vera.write_reg(9, 0x40); // sprite composition enabled

    for _ in 0..10 {
        system.vera.step(800.0);
    }

    assert_eq!(system.vera.sprite_collisions & 0x01, 0x01);
}

#[test]
fn snapshot_round_trip_restores_ram_and_video_state() {
    let mut system = System::new(2, 1);
    system.write(BusMaster::Cpu, 0x1234, 0x77);
    system.set_ram_bank(1);
    system.write(BusMaster::Cpu, 0xA000, 0x55);
    system.vera.vram_write(0x100, 0x99);

    let snapshot = system.save_snapshot();

    let mut restored = System::new(2, 1);
    restored.load_snapshot(&snapshot).unwrap();

    assert_eq!(restored.read(BusMaster::Cpu, 0x1234), 0x77);
    restored.set_ram_bank(1);
    assert_eq!(restored.read(BusMaster::Cpu, 0xA000), 0x55);
    assert_eq!(restored.vera.vram_read(0x100), 0x99);
}

#[test]
fn snapshot_rejects_wrong_sized_input() {
    let mut system = System::new(1, 1);
    let err = system.load_snapshot(&[0u8; 4]).unwrap_err();
    assert!(matches!(err, retromachine::SnapshotError::Truncated { got: 4, .. }));
}

#[test]
fn video_mode_pixel_ratio_changes_frame_pacing() {
    let mut vga = System::new(1, 1);
    vga.set_video_mode(VideoMode::Vga);
    {
        let rom = vga.rom_mut();
        rom[..0x4000].fill(0xEA);
        rom[rom_offset(0xFFFC)] = 0x00;
        rom[rom_offset(0xFFFD)] = 0xC0;
    }
    vga.reset();
    vga.run_frame();

    assert_eq!(vga.display_size(), (640, 480));
}

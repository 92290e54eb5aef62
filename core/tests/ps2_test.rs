use retrocore::device::ps2::{MouseState, Ps2Port};

#[test]
fn frame_matches_byte_5a_with_odd_parity() {
    // $5A = 0101_1010: bits 0,1,0,1,1,0,1,0 (LSB first), 4 set bits -> odd
    // parity bit is 1 to keep the total count of set bits odd.
    let mut port = Ps2Port::new();
    port.enqueue(0x5A);
    port.step(true, true); // idle lines -> dequeue and start shifting

    // Sample every bit cell: clock low half, then high half, mirroring a
    // real PS/2 host polling on the falling edge.
    let mut bits = Vec::new();
    for _ in 0..11 {
        for _ in 0..60 {
            port.step(true, true);
        }
        bits.push(port.data);
    }

    assert!(!bits[0]); // start bit
    assert!(!bits[1]); // bit0 of $5A = 0
    assert!(bits[2]); // bit1 = 1
    assert!(!bits[3]); // bit2 = 0
    assert!(bits[4]); // bit3 = 1
    assert!(bits[5]); // bit4 = 1
    assert!(!bits[6]); // bit5 = 0
    assert!(bits[7]); // bit6 = 1
    assert!(!bits[8]); // bit7 = 0
    assert!(bits[9]); // odd parity
    assert!(bits[10]); // stop bit
}

#[test]
fn host_inhibit_forces_idle_and_zero_output() {
    let mut port = Ps2Port::new();
    port.enqueue(0x42);
    port.step(true, true);

    port.step(false, true); // data=1, clk=0: inhibit

    assert!(port.is_idle());
    assert!(!port.data);
}

#[test]
fn queue_drains_in_fifo_order() {
    let mut port = Ps2Port::new();
    port.enqueue(0x01);
    port.enqueue(0x02);

    // Drain the first byte's full frame (11 bits * 60 cycles) then let the
    // second begin.
    for _ in 0..(11 * 60 + 1) {
        port.step(true, true);
    }
    assert!(!port.is_idle()); // second byte now shifting
}

#[test]
fn mouse_move_within_range_emits_a_single_packet() {
    let mouse = MouseState { buttons: 0 };
    let packets = mouse.move_packets(10, -5);

    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0][1], 10);
    assert_eq!(packets[0][2], (-5i32 as u8));
    assert_eq!(packets[0][0] & 0x08, 0x08); // bit 3 always set
    assert_eq!(packets[0][0] & 0x20, 0x20); // sign-y set (negative)
    assert_eq!(packets[0][0] & 0x10, 0); // sign-x clear (positive)
}

#[test]
fn mouse_move_beyond_clamp_range_splits_across_packets() {
    // A delta of +300 exceeds the representable +255, so it must split
    // into a clamped first packet and a remainder packet.
    let mouse = MouseState { buttons: 0 };
    let packets = mouse.move_packets(300, 0);

    assert_eq!(packets.len(), 2);
    assert_eq!(packets[0][1], 255);
    assert_eq!(packets[1][1], 45);
    assert_eq!(packets[0][0] & 0x10, 0); // still positive, no sign bit
}

#[test]
fn mouse_buttons_propagate_into_packet_byte0() {
    let mouse = MouseState { buttons: 0x05 }; // left + right
    let packets = mouse.move_packets(0, 0);

    assert_eq!(packets[0][0] & 0x07, 0x05);
}

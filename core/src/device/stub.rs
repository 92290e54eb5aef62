//! Opaque register banks for the audio synthesis chips, character-LCD,
//! VIAs, RTC, and mouse port: out-of-scope devices the CPU can still
//! address, modeled with plain read/write-back register semantics.

/// A fixed-size bank of registers with no behavior beyond storing the last
/// value written. Used for the audio chips, character-LCD, RTC, and the two
/// VIA peripherals, none of which this core emulates beyond bus contact.
pub struct StubRegisterBank<const N: usize> {
    regs: [u8; N],
}

impl<const N: usize> Default for StubRegisterBank<N> {
    fn default() -> Self {
        Self { regs: [0; N] }
    }
}

impl<const N: usize> StubRegisterBank<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, offset: u8) -> u8 {
        self.regs[offset as usize % N]
    }

    pub fn write(&mut self, offset: u8, value: u8) {
        self.regs[offset as usize % N] = value;
    }
}

/// Mouse register stub at $9FA0-$9FAF: reads always return $FF. Mouse
/// state reaches the CPU exclusively via the PS/2 port 1 byte queue.
pub struct MouseStub;

impl MouseStub {
    pub fn read(&self) -> u8 {
        0xFF
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GifRecorderState {
    Disabled,
    Paused,
    Active,
}

/// Emulator-control register bank at $9FB0-$9FBF (spec section 6).
pub struct EmulatorControl {
    pub debugger_enabled: bool,
    pub video_log: bool,
    pub keyboard_log: bool,
    pub echo_mode: u8,
    pub save_on_exit: bool,
    pub gif_state: GifRecorderState,
    pub keymap: u8,
    pub led_status: bool,
}

impl Default for EmulatorControl {
    fn default() -> Self {
        Self {
            debugger_enabled: false,
            video_log: false,
            keyboard_log: false,
            echo_mode: 0,
            save_on_exit: false,
            gif_state: GifRecorderState::Disabled,
            keymap: 0,
            led_status: false,
        }
    }
}

impl EmulatorControl {
    pub fn read(&self, offset: u8, cycles: u32) -> u8 {
        match offset {
            0 => self.debugger_enabled as u8,
            1 => self.video_log as u8,
            2 => self.keyboard_log as u8,
            3 => self.echo_mode,
            4 => self.save_on_exit as u8,
            5 => match self.gif_state {
                GifRecorderState::Disabled => 0,
                GifRecorderState::Paused => 1,
                GifRecorderState::Active => 2,
            },
            8 => (cycles & 0xFF) as u8,
            9 => ((cycles >> 8) & 0xFF) as u8,
            10 => ((cycles >> 16) & 0xFF) as u8,
            11 => ((cycles >> 24) & 0xFF) as u8,
            13 => self.keymap,
            14 => b'1',
            15 => b'6',
            _ => 0,
        }
    }

    /// `command` selects: 0=disabled no-op, 1=pause, 2=resume, 3=single-frame
    /// snapshot. Returns true if a GIF frame should be emitted this write
    /// (single-frame command, any prior state).
    pub fn write(&mut self, offset: u8, value: u8) -> bool {
        let mut emit_frame = false;
        match offset {
            0 => self.debugger_enabled = value != 0,
            1 => self.video_log = value != 0,
            2 => self.keyboard_log = value != 0,
            3 => self.echo_mode = value,
            4 => self.save_on_exit = value != 0,
            5 => {
                self.gif_state = match (self.gif_state, value) {
                    (GifRecorderState::Disabled, _) => GifRecorderState::Disabled,
                    (_, 1) => GifRecorderState::Paused,
                    (_, 2) => GifRecorderState::Active,
                    (state, 3) => {
                        emit_frame = true;
                        let _ = state;
                        GifRecorderState::Paused
                    }
                    (state, _) => state,
                };
            }
            13 => self.keymap = value,
            15 => self.led_status = value != 0,
            _ => {}
        }
        emit_frame
    }
}

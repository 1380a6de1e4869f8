/// A DMG button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    /// Bit within its group's low nibble of P1.
    fn bit(self) -> u8 {
        match self {
            Button::Right | Button::A => 0x01,
            Button::Left | Button::B => 0x02,
            Button::Up | Button::Select => 0x04,
            Button::Down | Button::Start => 0x08,
        }
    }

    fn is_dpad(self) -> bool {
        matches!(self, Button::Right | Button::Left | Button::Up | Button::Down)
    }
}

/// Input latch behind P1 ($FF00).
///
/// Selection bits 4 (d-pad) and 5 (buttons) are active-low. The button
/// masks use bit=1 for "pressed".
#[derive(Clone, Debug)]
pub struct Joypad {
    select: u8,
    buttons: u8,
    dpad: u8,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            // No group selected.
            select: 0x30,
            buttons: 0,
            dpad: 0,
        }
    }
}

impl Joypad {
    pub fn read(&self) -> u8 {
        // Bits 7-6 always read as 1.
        let mut low = 0x0F;
        if self.select & 0x10 == 0 {
            low &= !self.dpad;
        }
        if self.select & 0x20 == 0 {
            low &= !self.buttons;
        }
        0xC0 | self.select | (low & 0x0F)
    }

    /// Only the two selection bits are writable.
    pub fn write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    /// Update one button. Returns `true` on a released-to-pressed edge, which
    /// is what requests the joypad interrupt.
    pub fn set_pressed(&mut self, button: Button, pressed: bool) -> bool {
        let group = if button.is_dpad() {
            &mut self.dpad
        } else {
            &mut self.buttons
        };
        let mask = button.bit();
        let was_pressed = *group & mask != 0;
        if pressed {
            *group |= mask;
        } else {
            *group &= !mask;
        }
        pressed && !was_pressed
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        let group = if button.is_dpad() { self.dpad } else { self.buttons };
        group & button.bit() != 0
    }
}

//! Movement domain: raw input sampling and intent resolution.

use std::ops::BitOr;

/// A single resolved player action for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Punch,
    Jump,
    EnterZone,
    MoveLeft,
    MoveRight,
    None,
}

/// Per-intent button state for one device, or several devices OR-combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawInput {
    pub punch: bool,
    pub jump: bool,
    pub enter_zone: bool,
    pub move_left: bool,
    pub move_right: bool,
}

impl BitOr for RawInput {
    type Output = RawInput;

    fn bitor(self, rhs: RawInput) -> RawInput {
        RawInput {
            punch: self.punch || rhs.punch,
            jump: self.jump || rhs.jump,
            enter_zone: self.enter_zone || rhs.enter_zone,
            move_left: self.move_left || rhs.move_left,
            move_right: self.move_right || rhs.move_right,
        }
    }
}

/// Something that can be sampled for raw input.
///
/// Controllers only call `poll` on ticks where they accept input.
pub trait InputSource {
    fn poll(&mut self) -> RawInput;
}

impl InputSource for RawInput {
    fn poll(&mut self) -> RawInput {
        *self
    }
}

/// First match wins: Punch > Jump > EnterZone > MoveLeft > MoveRight.
pub fn resolve_intent(input: &RawInput) -> Intent {
    if input.punch {
        Intent::Punch
    } else if input.jump {
        Intent::Jump
    } else if input.enter_zone {
        Intent::EnterZone
    } else if input.move_left {
        Intent::MoveLeft
    } else if input.move_right {
        Intent::MoveRight
    } else {
        Intent::None
    }
}

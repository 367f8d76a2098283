//! Movement domain: keyboard and gamepad sampling.

use bevy::prelude::*;

use crate::movement::{Binding, InputBindings, InputSource, RawInput};

/// Reads the bound keys and buttons on demand.
pub(crate) struct DeviceInput<'a> {
    pub keyboard: &'a ButtonInput<KeyCode>,
    /// The first connected gamepad, if any.
    pub gamepad: Option<&'a Gamepad>,
    pub bindings: &'a InputBindings,
}

impl DeviceInput<'_> {
    fn keyboard_state(&self) -> RawInput {
        let down = |binding: &Binding| self.keyboard.pressed(binding.key);
        sample(self.bindings, down)
    }

    fn gamepad_state(&self) -> RawInput {
        let Some(gamepad) = self.gamepad else {
            return RawInput::default();
        };
        let down = |binding: &Binding| gamepad.pressed(binding.button);
        sample(self.bindings, down)
    }
}

impl InputSource for DeviceInput<'_> {
    fn poll(&mut self) -> RawInput {
        self.keyboard_state() | self.gamepad_state()
    }
}

fn sample(bindings: &InputBindings, down: impl Fn(&Binding) -> bool) -> RawInput {
    RawInput {
        punch: down(&bindings.punch),
        jump: down(&bindings.jump),
        enter_zone: down(&bindings.enter_zone),
        move_left: down(&bindings.move_left),
        move_right: down(&bindings.move_right),
    }
}

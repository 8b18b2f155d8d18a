/// Input device built from platform backends.
///
/// Maps each key slot to its configured key code and reads the exit key,
/// producing one [`DeviceSample`] per call.
use ivory_config::{KEYCODE_UNASSIGNED, PianoConfig};
use ivory_model::KEY_SLOT_COUNT;

use crate::device::{DeviceSample, InputDevice};
use crate::keyboard::KeyboardBackend;
use crate::pointer::PointerBackend;

pub struct BackendDevice<K, P> {
    keyboard: K,
    pointer: P,
    /// Key code per slot; `KEYCODE_UNASSIGNED` never reads as held.
    key_codes: [i32; KEY_SLOT_COUNT],
    exit_key: i32,
}

impl<K: KeyboardBackend, P: PointerBackend> BackendDevice<K, P> {
    pub fn new(keyboard: K, pointer: P, config: &PianoConfig) -> Self {
        let mut key_codes = [KEYCODE_UNASSIGNED; KEY_SLOT_COUNT];
        for (slot, code) in key_codes.iter_mut().enumerate() {
            if let Some(c) = config.key_code(slot) {
                *code = c;
            }
        }
        Self {
            keyboard,
            pointer,
            key_codes,
            exit_key: config.exit_key,
        }
    }

    pub fn keyboard_mut(&mut self) -> &mut K {
        &mut self.keyboard
    }

    pub fn pointer_mut(&mut self) -> &mut P {
        &mut self.pointer
    }
}

impl<K: KeyboardBackend, P: PointerBackend> InputDevice for BackendDevice<K, P> {
    fn sample(&mut self) -> DeviceSample {
        let mut keys = [false; KEY_SLOT_COUNT];
        for (held, &code) in keys.iter_mut().zip(&self.key_codes) {
            *held = code != KEYCODE_UNASSIGNED && self.keyboard.is_key_pressed(code);
        }
        DeviceSample {
            keys,
            pointer: self.pointer.next_event(),
            exit_requested: self.exit_key != KEYCODE_UNASSIGNED
                && self.keyboard.is_key_pressed(self.exit_key),
        }
    }
}

// Piano layout configuration (note names, key bindings, mode buttons)

pub mod piano_config;

pub use piano_config::{
    DEFAULT_KEY_CODES, KEYCODE_ESCAPE, KEYCODE_UNASSIGNED, ModeButton, PianoConfig,
};

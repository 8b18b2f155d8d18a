/// Device sampling types.
///
/// A device is polled once per tick and yields a [`DeviceSample`]: which key
/// slots are held, an optional pointer event, and whether exit was requested.
use ivory_model::{KEY_SLOT_COUNT, KeyStates};
use serde::{Deserialize, Serialize};

/// Pointer button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PointerEventKind {
    #[default]
    ButtonDown,
    ButtonUp,
    Move,
}

/// A single pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    #[serde(default)]
    pub button: PointerButton,
    #[serde(default)]
    pub kind: PointerEventKind,
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    /// Primary (left) button press at `(x, y)`.
    pub fn primary_down(x: i32, y: i32) -> Self {
        Self {
            button: PointerButton::Left,
            kind: PointerEventKind::ButtonDown,
            x,
            y,
        }
    }

    /// Whether this event can select a mode.
    pub fn is_primary_down(&self) -> bool {
        self.button == PointerButton::Left && self.kind == PointerEventKind::ButtonDown
    }
}

/// Everything read from the devices in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceSample {
    pub keys: KeyStates,
    pub pointer: Option<PointerEvent>,
    pub exit_requested: bool,
}

impl DeviceSample {
    /// Sample with the given slots held and nothing else.
    pub fn holding(slots: &[usize]) -> Self {
        let mut keys = [false; KEY_SLOT_COUNT];
        for &slot in slots {
            if let Some(k) = keys.get_mut(slot) {
                *k = true;
            }
        }
        Self {
            keys,
            ..Default::default()
        }
    }

    pub fn with_pointer(mut self, event: PointerEvent) -> Self {
        self.pointer = Some(event);
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit_requested = true;
        self
    }
}

/// Source of per-tick device samples.
pub trait InputDevice {
    /// Read the current device state. Called at most once per tick.
    fn sample(&mut self) -> DeviceSample;
}

// Piano input handling: device sampling, key edge detection, mode selection,
// and the per-tick session that ties them together.

pub mod backend_device;
pub mod device;
pub mod error;
pub mod key_edge;
pub mod keyboard;
pub mod mode_selector;
pub mod pointer;
pub mod scripted;
pub mod session;

pub use backend_device::BackendDevice;
pub use device::{DeviceSample, InputDevice, PointerButton, PointerEvent, PointerEventKind};
pub use error::InputError;
pub use key_edge::KeyEdgeTracker;
pub use keyboard::{KeyboardBackend, VirtualKeyboardBackend};
pub use mode_selector::ModeSelector;
pub use pointer::{PointerBackend, VirtualPointerBackend};
pub use scripted::{ScriptStep, ScriptedDevice};
pub use session::InputSession;

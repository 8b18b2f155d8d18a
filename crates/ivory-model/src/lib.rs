// Core piano model types (key slots, note sets, note name table, mode regions)

pub mod error;
pub mod mode_region;
pub mod note_name;
pub mod note_set;

pub use error::ModelError;
pub use mode_region::ModeRegion;
pub use note_name::{DEFAULT_NOTE_NAMES, NoteNameTable};
pub use note_set::{KEY_SLOT_COUNT, KeyStates, NoteSet};

// Song notation parsing (single notes and bracketed chords)

pub mod parser;
pub mod source;

pub use parser::{SongNotationParser, Steps};
pub use source::open_song;

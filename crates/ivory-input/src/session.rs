/// Per-tick input session.
///
/// Owns the key edge tracker, the mode selector and the current song step.
/// The interaction loop feeds it one device sample per tick and renderers
/// and audio read copies of its state back out.
use std::io::{self, BufRead};

use ivory_config::PianoConfig;
use ivory_model::{KeyStates, ModeRegion, NoteSet};
use ivory_song::SongNotationParser;
use tracing::debug;

use crate::device::{DeviceSample, InputDevice, PointerEvent};
use crate::error::InputError;
use crate::key_edge::KeyEdgeTracker;
use crate::mode_selector::ModeSelector;

#[derive(Debug, Clone)]
pub struct InputSession {
    keys: KeyEdgeTracker,
    selector: ModeSelector,
    /// Notes the song wants played at the current step.
    song_notes: NoteSet,
    /// Set when the last tick's click selected a mode.
    mode_changed: bool,
    /// Sticky once the exit key has been seen.
    exit_requested: bool,
}

impl InputSession {
    pub fn new(config: &PianoConfig) -> Result<Self, InputError> {
        let selector = ModeSelector::new(config.mode_regions(), config.initial_mode)?;
        Ok(Self::with_selector(selector))
    }

    pub fn with_selector(selector: ModeSelector) -> Self {
        Self {
            keys: KeyEdgeTracker::new(),
            selector,
            song_notes: NoteSet::new(),
            mode_changed: false,
            exit_requested: false,
        }
    }

    /// Advance one tick with raw key states and an optional pointer event.
    pub fn tick(&mut self, keys: &KeyStates, pointer: Option<&PointerEvent>) {
        self.keys.sample(keys);

        self.mode_changed = false;
        if let Some(event) = pointer.filter(|e| e.is_primary_down()) {
            self.mode_changed = self.selector.apply_click(event.x, event.y);
        }
    }

    /// Advance one tick from a full device sample, including the exit key.
    pub fn ingest(&mut self, sample: &DeviceSample) {
        self.tick(&sample.keys, sample.pointer.as_ref());
        if sample.exit_requested && !self.exit_requested {
            debug!("exit requested");
            self.exit_requested = true;
        }
    }

    /// Sample `device` once and report whether the user did anything.
    ///
    /// Returns `true` as soon as any just-pressed flag differs from the
    /// previous tick. Otherwise the previous just-pressed snapshot is kept
    /// and the result is whether a mode changed or exit was requested.
    pub fn poll_user_input(&mut self, device: &mut dyn InputDevice) -> bool {
        let previous = self.keys.just_pressed_snapshot();

        let sample = device.sample();
        self.ingest(&sample);

        if self.keys.just_pressed_snapshot() != previous {
            return true;
        }
        self.keys.restore_just_pressed(previous);

        self.mode_changed || self.exit_requested
    }

    /// Load the next song step from `stream` into the song notes.
    ///
    /// Returns `Ok(false)` at the end of the song.
    pub fn load_next_song_line<R: BufRead + ?Sized>(
        &mut self,
        parser: &mut SongNotationParser,
        stream: &mut R,
    ) -> io::Result<bool> {
        self.song_notes.clear();
        parser.read_line(stream, &mut self.song_notes)
    }

    pub fn song_notes(&self) -> NoteSet {
        self.song_notes
    }

    /// Notes the user started pressing this tick (to be sounded).
    pub fn user_notes_to_play(&self) -> NoteSet {
        self.keys.just_pressed_snapshot()
    }

    /// Notes the user is holding (to be drawn).
    pub fn user_notes_held(&self) -> NoteSet {
        self.keys.held_snapshot()
    }

    pub fn reset_user_notes(&mut self) {
        debug!("user notes reset");
        self.keys.reset();
    }

    pub fn reset_song_notes(&mut self) {
        self.song_notes.clear();
    }

    pub fn current_mode(&self) -> usize {
        self.selector.current()
    }

    pub fn set_mode(&mut self, mode: usize) -> Result<(), InputError> {
        self.selector.set_mode(mode)?;
        self.mode_changed = true;
        Ok(())
    }

    pub fn mode_count(&self) -> usize {
        self.selector.mode_count()
    }

    pub fn mode_regions(&self) -> Vec<ModeRegion> {
        self.selector.regions().to_vec()
    }

    pub fn region_for(&self, mode: usize) -> Result<ModeRegion, InputError> {
        self.selector.region_for(mode)
    }

    pub fn mode_changed(&self) -> bool {
        self.mode_changed
    }

    pub fn clear_mode_changed(&mut self) {
        self.mode_changed = false;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Two-row text view of user input: held slots as `1`/`0`, then `*`
    /// under each slot pressed this tick.
    pub fn format_user_input(&self) -> String {
        let held = self.user_notes_held();
        let pressed = self.user_notes_to_play();
        let marks: String = pressed
            .states()
            .iter()
            .map(|&p| if p { '*' } else { ' ' })
            .collect();
        format!("{held}\n{marks}")
    }
}

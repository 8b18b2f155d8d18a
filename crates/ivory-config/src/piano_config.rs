use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use ivory_model::{DEFAULT_NOTE_NAMES, KEY_SLOT_COUNT, ModeRegion, NoteNameTable};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Key code value marking a slot with no binding.
pub const KEYCODE_UNASSIGNED: i32 = -1;

/// Escape key code (default exit key).
pub const KEYCODE_ESCAPE: i32 = 27;

/// Default computer-key bindings, one per slot (ASCII upper-case codes).
///
/// Home row plays the naturals, the row above plays the sharps.
pub const DEFAULT_KEY_CODES: [i32; KEY_SLOT_COUNT] = [
    'A' as i32, // C4
    'W' as i32, // C#4
    'S' as i32, // D4
    'E' as i32, // D#4
    'D' as i32, // E4
    'F' as i32, // F4
    'T' as i32, // F#4
    'G' as i32, // G4
    'Y' as i32, // G#4
    'H' as i32, // A4
    'U' as i32, // A#4
    'J' as i32, // B4
    'K' as i32, // C5
    'O' as i32, // C#5
    'L' as i32, // D5
];

const RADIUS_MIN: i32 = 1;
const RADIUS_MAX: i32 = 4096;
const DEFAULT_RADIUS: i32 = 30;

/// Center of one mode selector button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModeButton {
    pub x: i32,
    pub y: i32,
    pub label: String,
}

impl ModeButton {
    pub fn new(x: i32, y: i32, label: &str) -> Self {
        Self {
            x,
            y,
            label: label.to_string(),
        }
    }
}

fn default_mode_buttons() -> Vec<ModeButton> {
    vec![
        ModeButton::new(100, 60, "Free Play"),
        ModeButton::new(200, 60, "Listen"),
        ModeButton::new(300, 60, "Play Along"),
    ]
}

fn default_note_names() -> Vec<String> {
    DEFAULT_NOTE_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Piano layout configuration (ivory.json).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct PianoConfig {
    pub note_names: Vec<String>,
    pub key_codes: Vec<i32>,
    pub exit_key: i32,
    pub mode_buttons: Vec<ModeButton>,
    pub mode_button_radius: i32,
    pub initial_mode: usize,
}

impl Default for PianoConfig {
    fn default() -> Self {
        Self {
            note_names: default_note_names(),
            key_codes: DEFAULT_KEY_CODES.to_vec(),
            exit_key: KEYCODE_ESCAPE,
            mode_buttons: default_mode_buttons(),
            mode_button_radius: DEFAULT_RADIUS,
            initial_mode: 0,
        }
    }
}

impl PianoConfig {
    /// Repair invalid values in place.
    pub fn validate(&mut self) {
        if let Err(e) = NoteNameTable::new(self.note_names.iter().cloned()) {
            warn!("Invalid note names ({}), using defaults", e);
            self.note_names = default_note_names();
        }

        if self.key_codes.len() != KEY_SLOT_COUNT {
            warn!(
                "Expected {} key codes, got {}; padding/truncating",
                KEY_SLOT_COUNT,
                self.key_codes.len()
            );
            self.key_codes.resize(KEY_SLOT_COUNT, KEYCODE_UNASSIGNED);
        }
        for code in &mut self.key_codes {
            if *code < KEYCODE_UNASSIGNED {
                *code = KEYCODE_UNASSIGNED;
            }
        }

        if self.mode_buttons.is_empty() {
            warn!("No mode buttons configured, using defaults");
            self.mode_buttons = default_mode_buttons();
        }

        let radius = self.mode_button_radius.clamp(RADIUS_MIN, RADIUS_MAX);
        if radius != self.mode_button_radius {
            warn!(
                "Mode button radius {} out of range, clamped to {}",
                self.mode_button_radius, radius
            );
            self.mode_button_radius = radius;
        }

        if self.initial_mode >= self.mode_buttons.len() {
            warn!(
                "Initial mode {} out of range, using 0",
                self.initial_mode
            );
            self.initial_mode = 0;
        }

        // Legal but ambiguous; reported, not repaired.
        if self.has_overlapping_modes() {
            warn!("Mode buttons overlap; clicks in the shared area select the later mode");
        }
        if self.has_duplicate_key_codes() {
            warn!("A key code is bound to more than one slot");
        }
    }

    /// Build the note name table. Call after [`validate`](Self::validate).
    pub fn note_name_table(&self) -> NoteNameTable {
        NoteNameTable::new(self.note_names.iter().cloned()).unwrap_or_default()
    }

    /// Hit-test regions in ascending mode order.
    pub fn mode_regions(&self) -> Vec<ModeRegion> {
        self.mode_buttons
            .iter()
            .map(|b| ModeRegion::new(b.x, b.y, self.mode_button_radius))
            .collect()
    }

    /// Key code bound to a slot, if any.
    pub fn key_code(&self, slot: usize) -> Option<i32> {
        self.key_codes
            .get(slot)
            .copied()
            .filter(|&code| code != KEYCODE_UNASSIGNED)
    }

    /// Whether two mode regions overlap. Overlap is allowed but makes
    /// clicks in the shared area select the later mode.
    pub fn has_overlapping_modes(&self) -> bool {
        let regions = self.mode_regions();
        regions.iter().enumerate().any(|(i, a)| {
            regions[i + 1..].iter().any(|b| {
                let reach = i128::from(a.radius) + i128::from(b.radius);
                a.distance_squared(b.center_x, b.center_y) < reach * reach
            })
        })
    }

    /// Whether the same key code is bound to more than one slot.
    pub fn has_duplicate_key_codes(&self) -> bool {
        let mut seen = HashSet::new();
        self.key_codes
            .iter()
            .filter(|&&c| c != KEYCODE_UNASSIGNED)
            .any(|c| !seen.insert(*c))
    }

    /// Read config from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: PianoConfig = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate();
        Ok(config)
    }

    /// Write config to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }
}

/// Press-edge detection for the fixed set of key slots.
///
/// Each [`sample`](KeyEdgeTracker::sample) shifts the current held state into
/// the previous one and derives `just_pressed = !previous && now`.
use ivory_model::{KEY_SLOT_COUNT, KeyStates, NoteSet};

#[derive(Debug, Clone, Default)]
pub struct KeyEdgeTracker {
    held_now: KeyStates,
    held_previously: KeyStates,
    just_pressed: KeyStates,
}

impl KeyEdgeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one tick of raw held states.
    pub fn sample(&mut self, raw: &KeyStates) {
        for i in 0..KEY_SLOT_COUNT {
            self.held_previously[i] = self.held_now[i];
            self.held_now[i] = raw[i];
            self.just_pressed[i] = !self.held_previously[i] && self.held_now[i];
        }
    }

    /// Copy of the slots held this tick.
    pub fn held_snapshot(&self) -> NoteSet {
        NoteSet::from_states(self.held_now)
    }

    /// Copy of the slots that went from released to held this tick.
    pub fn just_pressed_snapshot(&self) -> NoteSet {
        NoteSet::from_states(self.just_pressed)
    }

    /// Overwrite the just-pressed flags with an earlier snapshot.
    pub(crate) fn restore_just_pressed(&mut self, snapshot: NoteSet) {
        self.just_pressed = snapshot.states();
    }

    /// Clear held and just-pressed state, e.g. when a new song starts.
    pub fn reset(&mut self) {
        self.held_now.fill(false);
        self.held_previously.fill(false);
        self.just_pressed.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(slots: &[usize]) -> KeyStates {
        let mut keys = [false; KEY_SLOT_COUNT];
        for &s in slots {
            keys[s] = true;
        }
        keys
    }

    #[test]
    fn new_tracker_is_idle() {
        let tracker = KeyEdgeTracker::new();
        assert!(tracker.held_snapshot().is_empty());
        assert!(tracker.just_pressed_snapshot().is_empty());
    }

    #[test]
    fn press_is_reported_once() {
        let mut tracker = KeyEdgeTracker::new();

        tracker.sample(&raw(&[3]));
        assert!(tracker.held_snapshot().contains(3));
        assert!(tracker.just_pressed_snapshot().contains(3));

        tracker.sample(&raw(&[3]));
        assert!(tracker.held_snapshot().contains(3));
        assert!(tracker.just_pressed_snapshot().is_empty());
    }

    #[test]
    fn release_is_not_a_press() {
        let mut tracker = KeyEdgeTracker::new();
        tracker.sample(&raw(&[1]));
        tracker.sample(&raw(&[]));
        assert!(tracker.held_snapshot().is_empty());
        assert!(tracker.just_pressed_snapshot().is_empty());
    }

    #[test]
    fn repress_after_release() {
        let mut tracker = KeyEdgeTracker::new();
        tracker.sample(&raw(&[5]));
        tracker.sample(&raw(&[]));
        tracker.sample(&raw(&[5]));
        assert!(tracker.just_pressed_snapshot().contains(5));
    }

    #[test]
    fn slots_are_independent() {
        let mut tracker = KeyEdgeTracker::new();
        tracker.sample(&raw(&[0]));
        tracker.sample(&raw(&[0, 14]));
        assert_eq!(tracker.just_pressed_snapshot().iter().collect::<Vec<_>>(), vec![14]);
        assert_eq!(tracker.held_snapshot().iter().collect::<Vec<_>>(), vec![0, 14]);
    }

    #[test]
    fn reset_then_idle_sample_is_all_false() {
        let mut tracker = KeyEdgeTracker::new();
        tracker.sample(&raw(&[2, 9]));
        tracker.reset();
        tracker.sample(&raw(&[]));
        assert!(tracker.held_snapshot().is_empty());
        assert!(tracker.just_pressed_snapshot().is_empty());
    }

    #[test]
    fn reset_makes_held_key_press_again() {
        let mut tracker = KeyEdgeTracker::new();
        tracker.sample(&raw(&[4]));
        tracker.reset();
        tracker.sample(&raw(&[4]));
        assert!(tracker.just_pressed_snapshot().contains(4));
    }

    #[test]
    fn snapshots_do_not_alias_state() {
        let mut tracker = KeyEdgeTracker::new();
        tracker.sample(&raw(&[6]));
        let held = tracker.held_snapshot();
        tracker.sample(&raw(&[]));
        assert!(held.contains(6));
        assert!(!tracker.held_snapshot().contains(6));
    }

    proptest! {
        #[test]
        fn just_pressed_matches_rising_edges(
            ticks in proptest::collection::vec(any::<[bool; KEY_SLOT_COUNT]>(), 1..32)
        ) {
            let mut tracker = KeyEdgeTracker::new();
            let mut previous = [false; KEY_SLOT_COUNT];
            for tick in &ticks {
                tracker.sample(tick);
                let pressed = tracker.just_pressed_snapshot();
                for i in 0..KEY_SLOT_COUNT {
                    prop_assert_eq!(pressed.contains(i), !previous[i] && tick[i]);
                }
                prop_assert_eq!(tracker.held_snapshot().states(), *tick);
                previous = *tick;
            }
        }
    }
}

/// Mode selection by clicking circular screen regions.
///
/// Regions are checked in ascending mode order. When regions overlap, the
/// last region containing the click wins.
use ivory_model::ModeRegion;
use tracing::debug;

use crate::error::InputError;

#[derive(Debug, Clone)]
pub struct ModeSelector {
    regions: Vec<ModeRegion>,
    current: usize,
}

impl ModeSelector {
    pub fn new(regions: Vec<ModeRegion>, initial: usize) -> Result<Self, InputError> {
        if regions.is_empty() {
            return Err(InputError::NoModes);
        }
        if initial >= regions.len() {
            return Err(InputError::ModeOutOfRange {
                mode: initial,
                count: regions.len(),
            });
        }
        Ok(Self {
            regions,
            current: initial,
        })
    }

    pub fn mode_count(&self) -> usize {
        self.regions.len()
    }

    pub fn regions(&self) -> &[ModeRegion] {
        &self.regions
    }

    pub fn region_for(&self, mode: usize) -> Result<ModeRegion, InputError> {
        self.regions
            .get(mode)
            .copied()
            .ok_or(InputError::ModeOutOfRange {
                mode,
                count: self.regions.len(),
            })
    }

    /// Mode whose region strictly contains the click, if any.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        let mut hit = None;
        for (mode, region) in self.regions.iter().enumerate() {
            if region.contains(x, y) {
                hit = Some(mode);
            }
        }
        hit
    }

    /// Switch to the clicked mode. Returns `true` if a region was hit, even
    /// when it is the mode already selected.
    pub fn apply_click(&mut self, x: i32, y: i32) -> bool {
        match self.hit_test(x, y) {
            Some(mode) => {
                debug!(from = self.current, to = mode, "mode selected");
                self.current = mode;
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn set_mode(&mut self, mode: usize) -> Result<(), InputError> {
        if mode >= self.regions.len() {
            return Err(InputError::ModeOutOfRange {
                mode,
                count: self.regions.len(),
            });
        }
        self.current = mode;
        Ok(())
    }
}

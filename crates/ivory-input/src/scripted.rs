use std::collections::VecDeque;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::device::{DeviceSample, InputDevice, PointerEvent};

/// One tick of scripted input as written in a JSON script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScriptStep {
    /// Slots held during this tick.
    pub held: Vec<usize>,
    pub pointer: Option<PointerEvent>,
    pub exit: bool,
}

impl From<&ScriptStep> for DeviceSample {
    fn from(step: &ScriptStep) -> Self {
        let mut sample = DeviceSample::holding(&step.held);
        sample.pointer = step.pointer;
        sample.exit_requested = step.exit;
        sample
    }
}

/// Device that replays a fixed sequence of samples.
///
/// Once the script runs out every sample reads as idle.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDevice {
    samples: VecDeque<DeviceSample>,
}

impl ScriptedDevice {
    pub fn new<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = DeviceSample>,
    {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    pub fn from_steps(steps: &[ScriptStep]) -> Self {
        Self::new(steps.iter().map(DeviceSample::from))
    }

    /// Parse a JSON array of [`ScriptStep`]s.
    pub fn from_json(json: &str) -> Result<Self> {
        let steps: Vec<ScriptStep> =
            serde_json::from_str(json).context("invalid input script")?;
        Ok(Self::from_steps(&steps))
    }

    pub fn push(&mut self, sample: DeviceSample) {
        self.samples.push_back(sample);
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }

    pub fn is_finished(&self) -> bool {
        self.samples.is_empty()
    }
}

impl InputDevice for ScriptedDevice {
    fn sample(&mut self) -> DeviceSample {
        self.samples.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_idles() {
        let mut dev = ScriptedDevice::new([DeviceSample::holding(&[2])]);
        assert_eq!(dev.remaining(), 1);

        assert!(dev.sample().keys[2]);
        assert!(dev.is_finished());
        assert_eq!(dev.sample(), DeviceSample::default());
    }

    #[test]
    fn parses_json_script() {
        let json = r#"[
            {"held": [0, 4]},
            {"pointer": {"x": 200, "y": 60}},
            {},
            {"exit": true}
        ]"#;
        let mut dev = ScriptedDevice::from_json(json).unwrap();
        assert_eq!(dev.remaining(), 4);

        let first = dev.sample();
        assert!(first.keys[0] && first.keys[4]);

        let second = dev.sample();
        assert_eq!(second.pointer, Some(PointerEvent::primary_down(200, 60)));

        assert_eq!(dev.sample(), DeviceSample::default());
        assert!(dev.sample().exit_requested);
    }

    #[test]
    fn rejects_malformed_script() {
        assert!(ScriptedDevice::from_json("{not json").is_err());
        assert!(ScriptedDevice::from_json(r#"{"held": []}"#).is_err());
    }
}

//! Scripted `DeterministicRng` implementations for tests.

use connect_four_core::rng::DeterministicRng;

/// Always answers the low end of the requested range, so strategies pick
/// the first valid column.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// Replays a fixed list of values, one per call.
///
/// Each value is clamped into the requested range, so a script written for
/// an empty board still yields a legal index once columns fill up.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` replaying `values` in order.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// True once every scripted value has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.values.len()
    }
}

impl DeterministicRng for SequenceRng {
    /// # Panics
    ///
    /// Panics when asked for more values than were scripted.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        let Some(&value) = self.values.get(self.index) else {
            panic!(
                "SequenceRng exhausted after {} value(s); the code under test drew more randomness than scripted",
                self.values.len()
            );
        };
        self.index += 1;
        value.clamp(min, max)
    }
}

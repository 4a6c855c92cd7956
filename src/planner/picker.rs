//! Randomness seam for food selection
//!
//! The meal allocator never touches ambient randomness: it asks a
//! [`FoodPicker`] for an index. Any `rand::Rng` is a picker (uniform choice);
//! [`ScriptedPicker`] replays fixed indices for reproducible plans.

use rand::Rng;

/// Chooses one index out of `len` candidates
pub trait FoodPicker {
    /// Must return a value `< len` when `len > 0`. Not called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> FoodPicker for R {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices (wrapped modulo the candidate count),
/// cycling when exhausted. An empty script always picks the first candidate.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    indices: Vec<usize>,
    pos: usize,
}

impl ScriptedPicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, pos: 0 }
    }

    /// Always picks the first candidate
    pub fn first() -> Self {
        Self::default()
    }
}

impl FoodPicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 || self.indices.is_empty() {
            return 0;
        }
        let idx = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        idx % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_picker_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..20 {
            assert!(rng.pick(len) < len);
        }
    }

    #[test]
    fn test_scripted_picker_wraps_and_cycles() {
        let mut picker = ScriptedPicker::new(vec![1, 5]);
        assert_eq!(picker.pick(3), 1);
        assert_eq!(picker.pick(3), 2);
        assert_eq!(picker.pick(3), 1);
        assert_eq!(ScriptedPicker::first().pick(9), 0);
    }
}

use crate::random::RandomSource;
use std::collections::VecDeque;

/// Plays back prepared draws. Once a script runs dry it answers 0.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<u32>,
    reals: VecDeque<f32>,
    bounds: Vec<u32>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ints(mut self, ints: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(ints);
        self
    }

    pub fn with_reals(mut self, reals: impl IntoIterator<Item = f32>) -> Self {
        self.reals.extend(reals);
        self
    }

    /// The `n` of every `uniform_int` call so far.
    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, n: u32) -> u32 {
        self.bounds.push(n);
        let value = self.ints.pop_front().unwrap_or(0);
        if n == 0 {
            0
        } else {
            value % n
        }
    }

    fn uniform_real01(&mut self) -> f32 {
        self.reals.pop_front().unwrap_or(0.0)
    }
}

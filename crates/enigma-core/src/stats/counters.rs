/// Per-session counters; cleared by `Engine::reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Letters that went through the pipeline.
    pub encoded: u64,
    /// Non-letters dropped from the input.
    pub skipped: u64,
    /// Rotor steps per slot, left to right.
    pub advances: [u64; 3],
}

//! Shared contract of the incrementally steppable engines.
//!
//! An engine does work only inside `next_step`; every call is one complete logical step.
//! Between calls all accessors are read-only and stable. Once terminal, further calls
//! are no-ops that keep returning `true`.

/// Resumable algorithm driven one step at a time by an external loop.
pub trait Stepper: Sized {
    /// Construction input (flat coordinate buffers).
    type Input: ?Sized;
    /// Owned copy of every trace buffer the engine exposes.
    type Snapshot;

    fn construct(input: &Self::Input) -> Self;

    /// Advance by one logical step. Returns `true` once the engine is terminal.
    fn next_step(&mut self) -> bool;

    fn is_done(&self) -> bool;

    fn snapshot(&self) -> Self::Snapshot;

    /// Step until terminal; returns the number of `next_step` calls made.
    fn run_to_completion(&mut self) -> usize {
        let mut steps = 0;
        if self.is_done() {
            return steps;
        }
        loop {
            steps += 1;
            if self.next_step() {
                return steps;
            }
        }
    }

    /// Like [`Stepper::run_to_completion`], but gives up after `max_steps` calls.
    /// `None` means the budget ran out before the engine became terminal.
    fn run_bounded(&mut self, max_steps: usize) -> Option<usize> {
        if self.is_done() {
            return Some(0);
        }
        for steps in 1..=max_steps {
            if self.next_step() {
                return Some(steps);
            }
        }
        None
    }
}

//! Derived per-step presentation state.
//!
//! Kept outside the reducer: everything here is computable from the flow
//! state, and storing it would only invite divergence.

use crate::types::{Completed, Step};

/// Tri-state presentation status of one stepper entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepState {
    /// The wizard currently shows this step.
    pub active: bool,
    /// This step's validation has passed.
    pub done: bool,
    /// Navigation to this step is gated by incomplete prerequisites.
    pub disabled: bool,
}

/// Compute the presentation state of `target` given the current step and the
/// completion flags. Step one is never disabled; step two requires step one
/// completed; step three requires steps one and two.
pub fn step_state(target: Step, current: Step, completed: Completed) -> StepState {
    let prev_done = match target {
        Step::One => true,
        Step::Two => completed.done(Step::One),
        Step::Three => completed.done(Step::One) && completed.done(Step::Two),
    };

    StepState {
        active: current == target,
        done: completed.done(target),
        disabled: !prev_done,
    }
}

//! Flow state transitions — a reducer over a closed action set.
//!
//! [`reduce`] is a pure function `(state, action) -> state`; callers never
//! observe in-place mutation. No action validates field values: validation
//! belongs to the controller, the store only records outcomes. In particular
//! [`Action::Goto`] performs no gating — the caller checks the derived
//! disabled state (see [`crate::stepper`]) before dispatching.

use crate::types::{DonationType, FlowState, PhoneCountry, PresetAmount, Step, SubmitStatus};

/// Every transition the flow state supports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Advance one step, saturating at step three.
    Next,
    /// Go back one step, saturating at step one.
    Back,
    /// Jump to a step directly. Ungated; the affordance layer gates.
    Goto(Step),
    SetDonationType(DonationType),
    SetPresetAmount(Option<PresetAmount>),
    SetPhoneCountry(PhoneCountry),
    SetSubmitStatus(SubmitStatus),
    /// Record a step's validation outcome.
    MarkStepDone { step: Step, done: bool },
    /// Restore the initial state (fresh wizard session).
    ResetFlow,
}

/// Apply `action` to `state`, returning the successor state.
pub fn reduce(state: &FlowState, action: Action) -> FlowState {
    let mut next = state.clone();
    match action {
        Action::Next => next.step = state.step.next(),
        Action::Back => next.step = state.step.back(),
        Action::Goto(step) => next.step = step,
        Action::SetDonationType(donation_type) => next.donation_type = donation_type,
        Action::SetPresetAmount(preset_amount) => next.preset_amount = preset_amount,
        Action::SetPhoneCountry(phone_country) => next.phone_country = phone_country,
        Action::SetSubmitStatus(submit_status) => next.submit_status = submit_status,
        Action::MarkStepDone { step, done } => next.completed.set(step, done),
        Action::ResetFlow => next = FlowState::initial(),
    }
    next
}

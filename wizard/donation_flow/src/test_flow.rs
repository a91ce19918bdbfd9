use crate::invariants;
use crate::reducer::{reduce, Action};
use crate::types::{
    DonationType, FlowState, PhoneCountry, PresetAmount, Step, SubmitStatus,
};

fn apply(state: FlowState, actions: impl IntoIterator<Item = Action>) -> FlowState {
    actions
        .into_iter()
        .fold(state, |state, action| reduce(&state, action))
}

#[test]
fn initial_state_shape() {
    invariants::assert_initial(&FlowState::initial());
    invariants::assert_initial(&FlowState::default());
}

#[test]
fn next_saturates_at_step_three() {
    let state = apply(
        FlowState::initial(),
        [Action::Next, Action::Next, Action::Next, Action::Next],
    );
    assert_eq!(state.step, Step::Three);
}

#[test]
fn back_saturates_at_step_one() {
    let state = apply(FlowState::initial(), [Action::Back, Action::Back]);
    assert_eq!(state.step, Step::One);

    let state = apply(state, [Action::Next, Action::Next, Action::Back]);
    assert_eq!(state.step, Step::Two);
}

#[test]
fn goto_is_ungated_in_the_store() {
    // The store applies Goto without checking completion; gating is the
    // affordance layer's job and is tested at the controller boundary.
    let state = reduce(&FlowState::initial(), Action::Goto(Step::Three));
    assert_eq!(state.step, Step::Three);
    assert!(!state.completed.done(Step::One));
    assert!(!state.completed.done(Step::Two));
}

#[test]
fn mark_step_done_touches_only_that_step() {
    let state = reduce(
        &FlowState::initial(),
        Action::MarkStepDone {
            step: Step::Two,
            done: true,
        },
    );
    assert!(!state.completed.done(Step::One));
    assert!(state.completed.done(Step::Two));
    assert!(!state.completed.done(Step::Three));

    let state = reduce(
        &state,
        Action::MarkStepDone {
            step: Step::Two,
            done: false,
        },
    );
    assert!(!state.completed.done(Step::Two));
}

#[test]
fn selection_actions_update_only_their_field() {
    let initial = FlowState::initial();
    let state = apply(
        initial.clone(),
        [
            Action::SetDonationType(DonationType::Shelter),
            Action::SetPresetAmount(Some(PresetAmount::Custom)),
            Action::SetPhoneCountry(PhoneCountry::Plus420),
            Action::SetSubmitStatus(SubmitStatus::Loading),
        ],
    );

    assert_eq!(state.donation_type, DonationType::Shelter);
    assert_eq!(state.preset_amount, Some(PresetAmount::Custom));
    assert_eq!(state.phone_country, PhoneCountry::Plus420);
    assert_eq!(state.submit_status, SubmitStatus::Loading);
    assert_eq!(state.step, initial.step);
    assert_eq!(state.completed, initial.completed);
}

#[test]
fn reset_restores_initial_state_from_anywhere() {
    let state = apply(
        FlowState::initial(),
        [
            Action::Next,
            Action::SetDonationType(DonationType::Shelter),
            Action::SetPresetAmount(None),
            Action::SetSubmitStatus(SubmitStatus::Error),
            Action::MarkStepDone {
                step: Step::One,
                done: true,
            },
            Action::ResetFlow,
        ],
    );
    invariants::assert_initial(&state);
}

#[test]
fn reducer_does_not_mutate_its_input() {
    let before = FlowState::initial();
    let snapshot = before.clone();
    let _ = reduce(&before, Action::Next);
    assert_eq!(before, snapshot);
}

// ─────────────────────────────────────────────────────────
// Deterministic action-sequence fuzz
// ─────────────────────────────────────────────────────────

fn lcg(seed: &mut u64) -> u64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *seed >> 33
}

fn arbitrary_step(r: u64) -> Step {
    Step::ALL[(r % 3) as usize]
}

fn arbitrary_action(r: u64) -> Action {
    match r % 9 {
        0 => Action::Next,
        1 => Action::Back,
        2 => Action::Goto(arbitrary_step(r / 9)),
        3 => Action::SetDonationType(if r / 9 % 2 == 0 {
            DonationType::Foundation
        } else {
            DonationType::Shelter
        }),
        4 => Action::SetPresetAmount(match r / 9 % 3 {
            0 => None,
            1 => Some(PresetAmount::Custom),
            _ => Some(PresetAmount::Fixed(crate::types::PRESET_AMOUNTS[(r / 27 % 6) as usize])),
        }),
        5 => Action::SetPhoneCountry(if r / 9 % 2 == 0 {
            PhoneCountry::Plus421
        } else {
            PhoneCountry::Plus420
        }),
        6 => Action::SetSubmitStatus(match r / 9 % 4 {
            0 => SubmitStatus::Idle,
            1 => SubmitStatus::Loading,
            2 => SubmitStatus::Success,
            _ => SubmitStatus::Error,
        }),
        7 => Action::MarkStepDone {
            step: arbitrary_step(r / 9),
            done: r / 27 % 2 == 0,
        },
        _ => Action::ResetFlow,
    }
}

#[test]
fn arbitrary_sequences_preserve_invariants() {
    let mut seed = 0x5EED_CAFE;
    let mut state = FlowState::initial();

    for _ in 0..2_000 {
        let action = arbitrary_action(lcg(&mut seed));
        invariants::assert_reduce_pure(&state, action.clone());
        state = reduce(&state, action);
        invariants::assert_step_in_range(&state);
        invariants::assert_gating_consistent(state.step, state.completed);
    }
}

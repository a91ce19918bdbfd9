//! # Donation Wizard Core
//!
//! Pure, synchronous state for the three-step donation wizard. The wizard
//! collects a donation target and amount (step 1), donor contact details
//! (step 2), and a confirmation with consent (step 3) before a contribution
//! is submitted to the remote API.
//!
//! | Concern                                   | Module         |
//! |-------------------------------------------|----------------|
//! | Flow/value types, initial state           | [`types`]      |
//! | Flow transitions (reducer over actions)   | [`reducer`]    |
//! | Derived per-step presentation state       | [`stepper`]    |
//! | Field and step validation                 | [`schema`]     |
//! | Contribution payload mapping              | [`contribute`] |
//!
//! ## Architecture
//!
//! Everything here is side-effect free: the reducer is a pure function over
//! a closed action set, validation returns a structured issue list keyed by
//! translation keys (never display text), and the stepper state is derived
//! on demand rather than stored. Network submission, localization, and the
//! controller that glues them together live in the client crate.

mod contribute;
mod reducer;
mod schema;
mod stepper;
mod types;

#[cfg(test)]
mod test_contribute;
#[cfg(test)]
mod test_flow;

pub use contribute::{to_contribute_request, ContributeRequest, Contributor};
pub use reducer::{reduce, Action};
pub use schema::{keys, validate, validate_step, Field, Issue};
pub use stepper::{step_state, StepState};
pub use types::{
    Completed, DonationFormValues, DonationType, FlowState, PhoneCountry, PresetAmount, Step,
    SubmitStatus, PRESET_AMOUNTS,
};

//! # Types
//!
//! Shared data structures for the donation wizard.
//!
//! ## Design decisions
//!
//! ### Flow state / form values split
//!
//! The wizard's state is held in two separate records:
//!
//! - [`FlowState`] — navigation and selection state (current step, donation
//!   type, preset highlighting, submit lifecycle, per-step completion).
//!   Mutated only through the reducer in [`crate::reducer`].
//! - [`DonationFormValues`] — the authoritative field values the donor
//!   entered. Owned by the controller; the flow state's `preset_amount` and
//!   `phone_country` are convenience mirrors for UI highlighting, while the
//!   form field is what validation and submission read.
//!
//! ### Step as a closed range
//!
//! [`Step`] is a three-variant enum rather than an integer, so the clamp
//! invariant (`step ∈ {1,2,3}` after any transition sequence) is carried by
//! the type: [`Step::next`] and [`Step::back`] saturate at the ends.
//!
//! ### Submit lifecycle as a Finite-State Machine
//!
//! [`SubmitStatus`] tracks the one-shot submission:
//!
//! ```text
//! Idle ──► Loading ──► Success
//!              └──────► Error ──► Loading (retry)
//! ```
//!
//! A failed submission keeps every entered value; only the status flips.

/// Wizard step index.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Step {
    /// Donation target and amount.
    One,
    /// Donor contact details.
    Two,
    /// Summary, consent, submission.
    Three,
}

impl Step {
    /// All steps in wizard order.
    pub const ALL: [Step; 3] = [Step::One, Step::Two, Step::Three];

    /// 1-based index as presented to the user.
    pub fn index(self) -> u8 {
        match self {
            Step::One => 1,
            Step::Two => 2,
            Step::Three => 3,
        }
    }

    /// The following step; saturates at step three.
    pub fn next(self) -> Step {
        match self {
            Step::One => Step::Two,
            Step::Two | Step::Three => Step::Three,
        }
    }

    /// The preceding step; saturates at step one.
    pub fn back(self) -> Step {
        match self {
            Step::One | Step::Two => Step::One,
            Step::Three => Step::Two,
        }
    }
}

/// Who the contribution supports.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DonationType {
    /// The foundation as a whole.
    Foundation,
    /// One specific shelter, selected by id.
    Shelter,
}

/// Dialling prefixes the form offers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PhoneCountry {
    /// Slovakia.
    Plus421,
    /// Czech Republic.
    Plus420,
}

impl PhoneCountry {
    /// The prefix as it appears in the submitted phone number.
    pub fn prefix(self) -> &'static str {
        match self {
            PhoneCountry::Plus421 => "+421",
            PhoneCountry::Plus420 => "+420",
        }
    }
}

/// Suggested donation values offered as one-tap presets, in euros.
pub const PRESET_AMOUNTS: [u32; 6] = [5, 10, 20, 30, 50, 100];

/// Which amount affordance the donor last used.
///
/// `Fixed` carries one of [`PRESET_AMOUNTS`]; `Custom` marks a free-typed
/// value. Stored as `Option<PresetAmount>` in [`FlowState`] so "nothing
/// chosen yet" is representable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PresetAmount {
    Fixed(u32),
    Custom,
}

/// Lifecycle of the one-shot contribution submission.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Per-step completion flags.
///
/// A step is marked done only as a side effect of its validation passing;
/// completing a later step never implies the earlier ones.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Completed([bool; 3]);

impl Completed {
    pub fn done(self, step: Step) -> bool {
        self.0[usize::from(step.index() - 1)]
    }

    pub fn set(&mut self, step: Step, done: bool) {
        self.0[usize::from(step.index() - 1)] = done;
    }
}

/// Navigation and selection state for one wizard session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlowState {
    /// Currently shown step.
    pub step: Step,
    /// Selected donation target kind.
    pub donation_type: DonationType,
    /// Last used amount affordance, for preset highlighting.
    pub preset_amount: Option<PresetAmount>,
    /// Selected dialling prefix, mirrored from the form field.
    pub phone_country: PhoneCountry,
    /// Submission lifecycle status.
    pub submit_status: SubmitStatus,
    /// Per-step completion flags.
    pub completed: Completed,
}

impl FlowState {
    /// State of a freshly opened wizard: step one, foundation, the 50 €
    /// preset, +421, idle, nothing completed.
    pub fn initial() -> FlowState {
        FlowState {
            step: Step::One,
            donation_type: DonationType::Foundation,
            preset_amount: Some(PresetAmount::Fixed(50)),
            phone_country: PhoneCountry::Plus421,
            submit_status: SubmitStatus::Idle,
            completed: Completed::default(),
        }
    }
}

impl Default for FlowState {
    fn default() -> Self {
        FlowState::initial()
    }
}

/// The donor-entered field values, owned by the controller.
///
/// `amount` and the flow state's `preset_amount` must agree when the summary
/// is read; the controller writes both in the same operation, so they cannot
/// diverge through the public surface.
#[derive(Clone, Debug, PartialEq)]
pub struct DonationFormValues {
    pub donation_type: DonationType,
    /// Required exactly when `donation_type` is [`DonationType::Shelter`].
    pub shelter_id: Option<String>,
    /// Donation amount in euros; must be positive to validate.
    pub amount: f64,
    /// Optional; 2–20 characters when present.
    pub first_name: String,
    /// Required; 2–30 characters.
    pub last_name: String,
    pub email: String,
    pub phone_country: PhoneCountry,
    /// 6–20 characters, digits and spaces only.
    pub phone_number: String,
    /// Must be `true` before a submission is attempted.
    pub gdpr_consent: bool,
}

impl Default for DonationFormValues {
    fn default() -> Self {
        DonationFormValues {
            donation_type: DonationType::Foundation,
            shelter_id: None,
            amount: 50.0,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_country: PhoneCountry::Plus421,
            phone_number: String::new(),
            gdpr_consent: false,
        }
    }
}

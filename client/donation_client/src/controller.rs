//! Validation & submission controller.
//!
//! Owns the form-field values and the flow state, gates forward progress on
//! validation, and drives the one-shot submission against the API
//! collaborator. Field mutators mirror the UI events one-to-one; navigation
//! to a gated step is refused here, at the affordance boundary — the store
//! itself stays permissive (see [`donation_flow::reduce`]).

use std::collections::BTreeMap;

use tracing::{debug, error, info};

use donation_flow::{
    reduce, step_state, to_contribute_request, validate, validate_step, Action,
    DonationFormValues, DonationType, Field, FlowState, Issue, PhoneCountry, PresetAmount, Step,
    StepState, SubmitStatus,
};

use crate::api::{ContributeApi, Shelter};
use crate::errors::ClientError;
use crate::i18n::Catalog;

/// Result of a [`DonationController::submit`] attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing was sent: validation failed or a submission is in flight.
    Rejected,
    /// The API accepted the contribution; the wizard has been reset.
    Accepted { acknowledgment: String },
    /// The API call failed; entered values are preserved for a retry.
    Failed { error: ClientError },
}

/// Step-3 summary data, derived from the current values.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationSummary {
    /// Translated help-type label (foundation vs. shelter).
    pub help_type: String,
    /// Display name of the selected shelter, when known.
    pub shelter: Option<String>,
    /// Amount in euros.
    pub amount: f64,
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Dialling prefix and number, as entered.
    pub phone: Option<String>,
}

pub struct DonationController<A> {
    api: A,
    catalog: Catalog,
    flow: FlowState,
    values: DonationFormValues,
    errors: BTreeMap<Field, String>,
}

impl<A: ContributeApi> DonationController<A> {
    pub fn new(api: A, catalog: Catalog) -> Self {
        DonationController {
            api,
            catalog,
            flow: FlowState::initial(),
            values: DonationFormValues::default(),
            errors: BTreeMap::new(),
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.flow = reduce(&self.flow, action);
    }

    // ─────────────────────────────────────────────────────────
    // Read surface
    // ─────────────────────────────────────────────────────────

    pub fn flow(&self) -> &FlowState {
        &self.flow
    }

    pub fn values(&self) -> &DonationFormValues {
        &self.values
    }

    /// Translated error message for `field`, if its last validation failed.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Translated banner message while the last submission stands failed.
    pub fn banner_error(&self) -> Option<String> {
        (self.flow.submit_status == SubmitStatus::Error)
            .then(|| self.catalog.translate("donation.errors.submitFailed"))
    }

    /// Presentation state of all three stepper entries, in order.
    pub fn step_states(&self) -> [StepState; 3] {
        Step::ALL.map(|step| step_state(step, self.flow.step, self.flow.completed))
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Whether the stepper affordance for `target` is enabled.
    pub fn can_goto(&self, target: Step) -> bool {
        !step_state(target, self.flow.step, self.flow.completed).disabled
    }

    /// Jump to `target` if its prerequisites are complete; otherwise a no-op.
    pub fn goto(&mut self, target: Step) {
        if !self.can_goto(target) {
            debug!("Ignoring navigation to gated step {}", target.index());
            return;
        }
        self.dispatch(Action::Goto(target));
    }

    pub fn back(&mut self) {
        self.dispatch(Action::Back);
    }

    /// Validate the current step; on pass, mark it done and move forward.
    pub fn advance(&mut self) {
        let current = self.flow.step;
        if !self.validate_step(current) {
            return;
        }
        self.dispatch(Action::MarkStepDone {
            step: current,
            done: true,
        });
        self.dispatch(Action::Next);
        self.errors.clear();
    }

    // ─────────────────────────────────────────────────────────
    // Field mutators (one per UI event)
    // ─────────────────────────────────────────────────────────

    pub fn set_donation_type(&mut self, donation_type: DonationType) {
        self.dispatch(Action::SetDonationType(donation_type));
        self.values.donation_type = donation_type;
        if donation_type == DonationType::Foundation {
            // A foundation donation drops any lingering shelter selection.
            self.values.shelter_id = None;
        }
    }

    pub fn select_shelter(&mut self, shelter_id: Option<String>) {
        self.values.shelter_id = shelter_id.filter(|id| !id.is_empty());
    }

    /// Pick one of the preset amounts; writes the marker and the
    /// authoritative amount in one operation so they cannot diverge.
    pub fn select_preset(&mut self, amount: u32) {
        self.dispatch(Action::SetPresetAmount(Some(PresetAmount::Fixed(amount))));
        self.values.amount = f64::from(amount);
    }

    /// Free-typed amount. Marks the preset custom; empty or unparsable input
    /// leaves the previous amount in place, as the form field does.
    pub fn enter_amount(&mut self, raw: &str) {
        self.dispatch(Action::SetPresetAmount(Some(PresetAmount::Custom)));
        if raw.is_empty() {
            return;
        }
        let Ok(amount) = raw.trim().parse::<f64>() else {
            return;
        };
        if !amount.is_finite() {
            return;
        }
        self.values.amount = amount;
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.values.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.values.last_name = last_name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.values.email = email.into();
    }

    pub fn set_phone_country(&mut self, country: PhoneCountry) {
        self.dispatch(Action::SetPhoneCountry(country));
        self.values.phone_country = country;
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.values.phone_number = phone_number.into();
    }

    pub fn set_gdpr_consent(&mut self, consent: bool) {
        self.values.gdpr_consent = consent;
    }

    // ─────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────

    /// Validate the fields relevant to `step`.
    ///
    /// Clears previous messages, applies the full-schema pass so every
    /// current problem is visible, then the step subset decides pass/fail.
    pub fn validate_step(&mut self, step: Step) -> bool {
        self.errors.clear();

        let all = validate(&self.values);
        self.apply_issues(&all);

        let subset = validate_step(step, &self.values);
        self.apply_issues(&subset);
        subset.is_empty()
    }

    /// Fold issues into the per-field message map; a later issue for the
    /// same field wins.
    fn apply_issues(&mut self, issues: &[Issue]) {
        for issue in issues {
            self.errors
                .insert(issue.field, self.catalog.translate(issue.message));
        }
    }

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────

    /// `false` while a submission is in flight; the submit affordance is
    /// disabled to prevent a duplicate request.
    pub fn can_submit(&self) -> bool {
        self.flow.submit_status != SubmitStatus::Loading
    }

    /// Validate the full form and, on pass, submit the contribution.
    ///
    /// Success resets the wizard (values and flow) and yields a translated
    /// acknowledgment. Failure flips only the submit status — values and
    /// completion flags stay untouched so the user can retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::Rejected;
        }
        if !self.validate_step(Step::Three) {
            return SubmitOutcome::Rejected;
        }

        self.dispatch(Action::MarkStepDone {
            step: Step::Three,
            done: true,
        });
        let body = to_contribute_request(&self.values);

        self.dispatch(Action::SetSubmitStatus(SubmitStatus::Loading));
        match self.api.submit_contribution(&body).await {
            Ok(response) => {
                info!(
                    "Contribution accepted ({} message(s) from the API)",
                    response.messages.len()
                );
                self.dispatch(Action::SetSubmitStatus(SubmitStatus::Success));
                let acknowledgment = self.catalog.translate("donation.success");
                self.values = DonationFormValues::default();
                self.errors.clear();
                self.dispatch(Action::ResetFlow);
                SubmitOutcome::Accepted { acknowledgment }
            }
            Err(error) => {
                error!("Contribution submission failed: {error}");
                self.dispatch(Action::SetSubmitStatus(SubmitStatus::Error));
                SubmitOutcome::Failed { error }
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Summary
    // ─────────────────────────────────────────────────────────

    /// Derive the step-3 summary; the shelter name comes from the supplied
    /// directory snapshot.
    pub fn summary(&self, shelters: &[Shelter]) -> DonationSummary {
        let help_type = self.catalog.translate(match self.values.donation_type {
            DonationType::Foundation => "donation.summary.helpTypeFoundation",
            DonationType::Shelter => "donation.summary.helpTypeShelter",
        });

        let shelter = self.values.shelter_id.as_deref().and_then(|id| {
            shelters
                .iter()
                .find(|shelter| shelter.id == id)
                .map(|shelter| shelter.name.clone())
        });

        let parts: Vec<&str> = [self.values.first_name.trim(), self.values.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        let full_name = (!parts.is_empty()).then(|| parts.join(" "));

        let email = (!self.values.email.is_empty()).then(|| self.values.email.clone());
        let phone = (!self.values.phone_number.is_empty()).then(|| {
            format!(
                "{} {}",
                self.values.phone_country.prefix(),
                self.values.phone_number
            )
        });

        DonationSummary {
            help_type,
            shelter,
            amount: self.values.amount,
            full_name,
            email,
            phone,
        }
    }
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────

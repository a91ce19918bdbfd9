//! Field and step validation.
//!
//! Validation never throws and never produces display text: it returns a
//! structured list of [`Issue`]s, each carrying the affected [`Field`] and a
//! translation key from [`keys`]. The full-schema pass and the step-scoped
//! subsets share the same underlying field rules, so the two can't diverge.
//!
//! A field may report more than one issue (the phone number rules, for
//! instance); consumers that fold issues into a per-field message map apply
//! them in order, so the later rule for a field wins.

use crate::types::{DonationFormValues, DonationType, Step};

/// Translation keys for every validation failure.
pub mod keys {
    pub const AMOUNT_POSITIVE: &str = "errors.amountPositive";
    pub const FIRST_NAME_MIN: &str = "errors.firstNameMin";
    pub const FIRST_NAME_MAX: &str = "errors.firstNameMax";
    pub const LAST_NAME_MIN: &str = "errors.lastNameMin";
    pub const LAST_NAME_MAX: &str = "errors.lastNameMax";
    pub const EMAIL_INVALID: &str = "errors.emailInvalid";
    pub const PHONE_INVALID: &str = "errors.phoneInvalid";
    pub const PHONE_DIGITS_ONLY: &str = "errors.phoneDigitsOnly";
    pub const GDPR_REQUIRED: &str = "errors.gdprRequired";
    pub const PICK_SHELTER: &str = "errors.pickShelter";
}

/// Form fields a validation issue can attach to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Field {
    DonationType,
    ShelterId,
    Amount,
    FirstName,
    LastName,
    Email,
    PhoneCountry,
    PhoneNumber,
    GdprConsent,
}

/// One validation failure: the field it concerns and a translation key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Issue {
    pub field: Field,
    pub message: &'static str,
}

impl Issue {
    fn new(field: Field, message: &'static str) -> Issue {
        Issue { field, message }
    }
}

/// Run the full schema over `values`. Empty result means valid.
pub fn validate(values: &DonationFormValues) -> Vec<Issue> {
    let mut issues = Vec::new();
    check_amount(values, &mut issues);
    check_first_name(values, &mut issues);
    check_last_name(values, &mut issues);
    check_email(values, &mut issues);
    check_phone_number(values, &mut issues);
    check_gdpr_consent(values, &mut issues);
    check_shelter_choice(values, &mut issues);
    issues
}

/// Run only the rules relevant to `step`.
///
/// Step one covers the donation target and amount (including the cross-field
/// shelter rule); step two covers the contact details; step three is the full
/// schema.
pub fn validate_step(step: Step, values: &DonationFormValues) -> Vec<Issue> {
    match step {
        Step::One => {
            let mut issues = Vec::new();
            check_amount(values, &mut issues);
            check_shelter_choice(values, &mut issues);
            issues
        }
        Step::Two => {
            let mut issues = Vec::new();
            check_first_name(values, &mut issues);
            check_last_name(values, &mut issues);
            check_email(values, &mut issues);
            check_phone_number(values, &mut issues);
            issues
        }
        Step::Three => validate(values),
    }
}

// ─────────────────────────────────────────────────────────
// Field rules
// ─────────────────────────────────────────────────────────

fn check_amount(values: &DonationFormValues, out: &mut Vec<Issue>) {
    if !(values.amount.is_finite() && values.amount > 0.0) {
        out.push(Issue::new(Field::Amount, keys::AMOUNT_POSITIVE));
    }
}

fn check_first_name(values: &DonationFormValues, out: &mut Vec<Issue>) {
    let name = values.first_name.trim();
    if name.is_empty() {
        // Optional field; absent is fine.
        return;
    }
    let len = name.chars().count();
    if len < 2 {
        out.push(Issue::new(Field::FirstName, keys::FIRST_NAME_MIN));
    } else if len > 20 {
        out.push(Issue::new(Field::FirstName, keys::FIRST_NAME_MAX));
    }
}

fn check_last_name(values: &DonationFormValues, out: &mut Vec<Issue>) {
    let len = values.last_name.trim().chars().count();
    if len < 2 {
        out.push(Issue::new(Field::LastName, keys::LAST_NAME_MIN));
    } else if len > 30 {
        out.push(Issue::new(Field::LastName, keys::LAST_NAME_MAX));
    }
}

fn check_email(values: &DonationFormValues, out: &mut Vec<Issue>) {
    if !is_valid_email(values.email.trim()) {
        out.push(Issue::new(Field::Email, keys::EMAIL_INVALID));
    }
}

fn check_phone_number(values: &DonationFormValues, out: &mut Vec<Issue>) {
    let phone = values.phone_number.trim();
    let len = phone.chars().count();
    if !(6..=20).contains(&len) {
        out.push(Issue::new(Field::PhoneNumber, keys::PHONE_INVALID));
    }
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit() || c == ' ') {
        out.push(Issue::new(Field::PhoneNumber, keys::PHONE_DIGITS_ONLY));
    }
}

fn check_gdpr_consent(values: &DonationFormValues, out: &mut Vec<Issue>) {
    if !values.gdpr_consent {
        out.push(Issue::new(Field::GdprConsent, keys::GDPR_REQUIRED));
    }
}

/// Cross-field rule: a shelter donation needs a selected shelter.
fn check_shelter_choice(values: &DonationFormValues, out: &mut Vec<Issue>) {
    if values.donation_type == DonationType::Shelter
        && values.shelter_id.as_deref().map_or(true, str::is_empty)
    {
        out.push(Issue::new(Field::ShelterId, keys::PICK_SHELTER));
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain with
/// non-empty labels, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

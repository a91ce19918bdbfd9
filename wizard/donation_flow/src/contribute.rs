//! Contribution payload mapping.
//!
//! Builds the request body for `POST /shelters/contribute` from validated
//! form values. The payload is created once at submit time and not retained.

use serde::{Deserialize, Serialize};

use crate::types::{DonationFormValues, DonationType};

/// One donor entry in the contribution payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    /// Omitted from the wire entirely when the donor left it blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    pub last_name: String,
    pub email: String,
    /// Dialling prefix and number joined with a single space.
    pub phone: String,
}

/// Request body for `POST /shelters/contribute`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContributeRequest {
    pub contributors: Vec<Contributor>,
    /// Donation amount in euros.
    pub value: f64,
    /// Present only for shelter donations with a numeric shelter id.
    #[serde(rename = "shelterID", default, skip_serializing_if = "Option::is_none")]
    pub shelter_id: Option<u32>,
}

/// Map form values to the outbound payload.
///
/// Text fields are trimmed; internal phone whitespace collapses to single
/// spaces before the dialling prefix is prepended.
pub fn to_contribute_request(values: &DonationFormValues) -> ContributeRequest {
    let first_name = values.first_name.trim();

    let phone_number = values
        .phone_number
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let phone = format!("{} {}", values.phone_country.prefix(), phone_number)
        .trim()
        .to_string();

    let shelter_id = match (values.donation_type, values.shelter_id.as_deref()) {
        (DonationType::Shelter, Some(id)) if !id.is_empty() => id.trim().parse().ok(),
        _ => None,
    };

    ContributeRequest {
        contributors: vec![Contributor {
            first_name: (!first_name.is_empty()).then(|| first_name.to_string()),
            last_name: values.last_name.trim().to_string(),
            email: values.email.trim().to_string(),
            phone,
        }],
        value: values.amount,
        shelter_id,
    }
}

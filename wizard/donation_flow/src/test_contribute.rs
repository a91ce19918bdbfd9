use crate::contribute::{to_contribute_request, ContributeRequest, Contributor};
use crate::types::{DonationFormValues, DonationType, PhoneCountry};

fn shelter_values() -> DonationFormValues {
    DonationFormValues {
        donation_type: DonationType::Shelter,
        shelter_id: Some("7".to_string()),
        amount: 25.0,
        first_name: String::new(),
        last_name: "Nowak".to_string(),
        email: "a@b.co".to_string(),
        phone_country: PhoneCountry::Plus421,
        phone_number: "900 123 456".to_string(),
        gdpr_consent: true,
    }
}

#[test]
fn shelter_donation_round_trip() {
    let body = to_contribute_request(&shelter_values());
    assert_eq!(
        body,
        ContributeRequest {
            contributors: vec![Contributor {
                first_name: None,
                last_name: "Nowak".to_string(),
                email: "a@b.co".to_string(),
                phone: "+421 900 123 456".to_string(),
            }],
            value: 25.0,
            shelter_id: Some(7),
        }
    );
}

#[test]
fn blank_first_name_is_omitted_from_json() {
    let json = serde_json::to_value(to_contribute_request(&shelter_values())).unwrap();

    let contributor = &json["contributors"][0];
    assert!(contributor.get("firstName").is_none());
    assert_eq!(contributor["lastName"], "Nowak");
    assert_eq!(contributor["phone"], "+421 900 123 456");
    assert_eq!(json["value"], 25.0);
    assert_eq!(json["shelterID"], 7);
}

#[test]
fn present_first_name_is_trimmed_and_kept() {
    let values = DonationFormValues {
        first_name: "  Jana  ".to_string(),
        ..shelter_values()
    };
    let body = to_contribute_request(&values);
    assert_eq!(body.contributors[0].first_name.as_deref(), Some("Jana"));

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["contributors"][0]["firstName"], "Jana");
}

#[test]
fn phone_whitespace_collapses_to_single_spaces() {
    let values = DonationFormValues {
        phone_number: "  900\t 123   456 ".to_string(),
        phone_country: PhoneCountry::Plus420,
        ..shelter_values()
    };
    let body = to_contribute_request(&values);
    assert_eq!(body.contributors[0].phone, "+420 900 123 456");
}

#[test]
fn foundation_donation_carries_no_shelter_id() {
    // Even a lingering selection is dropped once the target is the foundation.
    let values = DonationFormValues {
        donation_type: DonationType::Foundation,
        ..shelter_values()
    };
    let body = to_contribute_request(&values);
    assert_eq!(body.shelter_id, None);

    let json = serde_json::to_value(&body).unwrap();
    assert!(json.get("shelterID").is_none());
}

#[test]
fn non_numeric_shelter_id_is_omitted() {
    let values = DonationFormValues {
        shelter_id: Some("not-a-number".to_string()),
        ..shelter_values()
    };
    assert_eq!(to_contribute_request(&values).shelter_id, None);
}

#[test]
fn names_and_email_are_trimmed() {
    let values = DonationFormValues {
        last_name: " Nowak ".to_string(),
        email: " a@b.co ".to_string(),
        ..shelter_values()
    };
    let body = to_contribute_request(&values);
    assert_eq!(body.contributors[0].last_name, "Nowak");
    assert_eq!(body.contributors[0].email, "a@b.co");
}

#[test]
fn payload_deserializes_back() {
    let body = to_contribute_request(&shelter_values());
    let json = serde_json::to_string(&body).unwrap();
    let parsed: ContributeRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, body);
}

//! Donation client — the collaborators around the pure wizard core.
//!
//! Pairs the [`donation_flow`] state machine with everything that touches
//! the outside world: the remote donation API (shelter directory, aggregate
//! results, contribution submission), the localization catalogs, the
//! environment-driven configuration, and the controller that gates step
//! navigation and drives the submit lifecycle.
//!
//! A typical embedding builds a [`Config`], an [`ApiClient`] and a
//! [`Catalog`], spawns the [`shelters`] refresh task, and feeds UI events
//! into a [`DonationController`].

mod api;
mod config;
mod controller;
mod errors;
mod i18n;
pub mod shelters;

pub use api::{
    ApiClient, ApiMessage, ContributeApi, ContributeResponse, MessageKind, Shelter, ShelterResults,
};
pub use config::{Config, DEFAULT_API_BASE_URL};
pub use controller::{DonationController, DonationSummary, SubmitOutcome};
pub use errors::{ClientError, Result};
pub use i18n::{Catalog, FALLBACK_LOCALE};
pub use shelters::{RefreshState, SheltersCache};

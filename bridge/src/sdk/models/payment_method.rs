//! Payment methods and the card details attached to them.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub card_details: Option<CardDetails>,
    pub card_present_details: Option<CardPresentDetails>,
    pub interac_present_details: Option<CardPresentDetails>,
    pub customer: Option<String>,
    pub livemode: bool,
    pub metadata: Option<HashMap<String, String>>,
}

/// Card details as returned by the SDK.
///
/// `brand` and `funding` are raw lowercase strings (`"visa"`, `"credit"`, ...)
/// rather than enums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub brand: Option<String>,
    pub country: Option<String>,
    pub exp_month: i32,
    pub exp_year: i32,
    pub fingerprint: Option<String>,
    pub funding: Option<String>,
    pub generated_from: Option<GeneratedFrom>,
    pub last4: Option<String>,
}

/// Origin of a card saved from a card-present charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFrom {
    pub charge: Option<String>,
    pub payment_method_details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPresentDetails {
    pub brand: Option<String>,
    pub cardholder_name: Option<String>,
    pub country: Option<String>,
    pub exp_month: i32,
    pub exp_year: i32,
    pub fingerprint: Option<String>,
    pub funding: Option<String>,
    pub last4: Option<String>,
    pub read_method: Option<String>,
}

//! Payment intents and their lifecycle status.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::payment_method::PaymentMethod;
use super::terminal::ApiError;

/// A payment in progress or completed, as tracked by the SDK.
///
/// Amounts are integers in the currency's smallest unit. Timestamps are
/// seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub id: String,
    pub amount: i64,
    pub amount_capturable: i64,
    pub amount_details: Option<AmountDetails>,
    pub amount_received: i64,
    pub amount_tip: Option<i64>,
    pub application: Option<String>,
    pub application_fee_amount: i64,
    pub canceled_at: i64,
    pub cancellation_reason: Option<String>,
    pub capture_method: Option<String>,
    pub client_secret: Option<String>,
    pub confirmation_method: Option<String>,
    pub created: i64,
    pub currency: Option<String>,
    pub customer: Option<String>,
    pub description: Option<String>,
    pub invoice: Option<String>,
    pub last_payment_error: Option<ApiError>,
    pub livemode: bool,
    pub metadata: Option<HashMap<String, String>>,
    pub offline_behavior: Option<OfflineBehavior>,
    pub on_behalf_of: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub payment_method_id: Option<String>,
    pub receipt_email: Option<String>,
    pub review: Option<String>,
    pub setup_future_usage: Option<String>,
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_suffix: Option<String>,
    pub status: Option<PaymentIntentStatus>,
    pub stripe_account_id: Option<String>,
    pub transfer_group: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentIntentStatus {
    Canceled,
    Processing,
    RequiresCapture,
    RequiresConfirmation,
    RequiresPaymentMethod,
    Succeeded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountDetails {
    pub tip_amount: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfflineBehavior {
    PreferOnline,
    RequireOnline,
    ForceOffline,
}

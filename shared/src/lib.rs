//! Plain serializable types exchanged with the plugin host.
//!
//! Everything in this crate crosses the plugin boundary, where the far side
//! decodes by name. Field names are camelCase and enum constants use the exact
//! spellings below. Optional values serialize as `null` rather than being
//! skipped, so every key is always present.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Free-form key/value metadata attached to SDK records.
pub type MetadataApi = HashMap<String, String>;

/// A card reader as seen by the client application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderApi {
    pub location_status: Option<LocationStatusApi>,
    /// Battery level in `0.0..=1.0`, or `-1.0` when the reader does not report one
    pub battery_level: f64,
    pub device_type: Option<DeviceTypeApi>,
    pub simulated: bool,
    /// True when a firmware update is waiting to be installed
    pub available_update: bool,
    pub location_id: Option<String>,
    pub label: Option<String>,
    pub serial_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationStatusApi {
    Set,
    NotSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceTypeApi {
    #[serde(rename = "CHIPPER1_X")]
    Chipper1X,
    #[serde(rename = "CHIPPER2_X")]
    Chipper2X,
    #[serde(rename = "STRIPE_M2")]
    StripeM2,
    #[serde(rename = "COTS_DEVICE")]
    CotsDevice,
    #[serde(rename = "VERIFONE_P400")]
    VerifoneP400,
    #[serde(rename = "WISE_CUBE")]
    WiseCube,
    #[serde(rename = "WISE_PAD3")]
    WisePad3,
    #[serde(rename = "WISE_PAD3S")]
    WisePad3S,
    #[serde(rename = "WISE_POS_E")]
    WisePosE,
    #[serde(rename = "WISE_POS_E_DEVKIT")]
    WisePosEDevkit,
    #[serde(rename = "ETNA")]
    Etna,
    #[serde(rename = "STRIPE_S700")]
    StripeS700,
    #[serde(rename = "STRIPE_S700_DEVKIT")]
    StripeS700Devkit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatusApi {
    NotConnected,
    Connecting,
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatusApi {
    NotReady,
    Ready,
    WaitingForInput,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReaderEventApi {
    CardInserted,
    CardRemoved,
}

/// Prompt the reader wants shown to the cardholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReaderDisplayMessageApi {
    CheckMobileDevice,
    RetryCard,
    InsertCard,
    InsertOrSwipeCard,
    SwipeCard,
    RemoveCard,
    MultipleContactlessCardsDetected,
    TryAnotherReadMethod,
    TryAnotherCard,
    CardRemovedTooEarly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReaderInputOptionApi {
    InsertCard,
    SwipeCard,
    TapCard,
    ManualEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatteryStatusApi {
    Critical,
    Low,
    Nominal,
}

/// Software update available for a reader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderSoftwareUpdateApi {
    pub components: Vec<UpdateComponentApi>,
    pub key_profile_name: Option<String>,
    pub only_install_required_updates: bool,
    /// Milliseconds since the Unix epoch
    pub required_at: i64,
    pub settings_version: Option<String>,
    pub time_estimate: UpdateTimeEstimateApi,
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateComponentApi {
    Incremental,
    Firmware,
    Config,
    Keys,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateTimeEstimateApi {
    LessThanOneMinute,
    OneToTwoMinutes,
    TwoToFiveMinutes,
    FiveToFifteenMinutes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationApi {
    pub address: Option<AddressApi>,
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub livemode: bool,
    pub metadata: MetadataApi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressApi {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
}

/// Tokenized means of payment. Present-card details are not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodApi {
    pub card_details: Option<CardDetailsApi>,
    pub customer: Option<String>,
    pub id: String,
    pub livemode: bool,
    pub metadata: MetadataApi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetailsApi {
    pub brand: Option<CardBrandApi>,
    pub country: Option<String>,
    pub exp_month: i64,
    pub exp_year: i64,
    pub fingerprint: Option<String>,
    pub funding: Option<CardFundingTypeApi>,
    pub last4: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardBrandApi {
    Amex,
    DinersClub,
    Discover,
    Jcb,
    MasterCard,
    UnionPay,
    Visa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardFundingTypeApi {
    Credit,
    Debit,
    Prepaid,
}

/// Projection of an SDK payment intent.
///
/// Amounts are in the currency's smallest unit, widened to `f64`.
/// Timestamps (`canceledAt`, `created`) are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentApi {
    pub amount: f64,
    pub amount_capturable: f64,
    pub amount_received: f64,
    pub application: Option<String>,
    pub application_fee_amount: f64,
    pub canceled_at: i64,
    pub cancellation_reason: Option<String>,
    pub capture_method: Option<String>,
    pub client_secret: Option<String>,
    pub confirmation_method: Option<String>,
    pub created: i64,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub id: String,
    pub invoice: Option<String>,
    pub livemode: bool,
    pub metadata: MetadataApi,
    pub on_behalf_of: Option<String>,
    pub payment_method_id: Option<String>,
    pub receipt_email: Option<String>,
    pub review: Option<String>,
    pub setup_future_usage: Option<String>,
    pub status: Option<PaymentIntentStatusApi>,
    pub transfer_group: Option<String>,
    pub customer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentIntentStatusApi {
    Canceled,
    Processing,
    RequiresCapture,
    RequiresConfirmation,
    RequiresPaymentMethod,
    Succeeded,
}

/// Error reported by the SDK, flattened for the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalExceptionApi {
    /// Name of the SDK error code constant, e.g. `NOT_CONNECTED_TO_READER`
    pub raw_code: String,
    pub message: String,
    pub details: Option<String>,
}

//! Card readers and the events and prompts they emit.
use serde::{Deserialize, Serialize};

use super::location::Location;
use super::software_update::ReaderSoftwareUpdate;

/// A physical reader discovered or connected through the SDK.
///
/// `serial_number` is always populated by the SDK for discovered readers, but the
/// vendor type leaves it nullable, so it is modelled as an `Option` here and the
/// mapper enforces its presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reader {
    pub id: Option<String>,
    pub serial_number: Option<String>,
    pub label: Option<String>,
    pub device_type: DeviceType,
    pub is_simulated: bool,
    /// Battery charge in `0.0..=1.0`, absent for mains-powered readers
    pub battery_level: Option<f32>,
    pub battery_status: BatteryStatus,
    pub is_charging: Option<bool>,
    pub software_version: Option<String>,
    pub ip_address: Option<String>,
    pub location: Option<Location>,
    pub location_status: LocationStatus,
    pub available_update: Option<ReaderSoftwareUpdate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationStatus {
    Unknown,
    Set,
    NotSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    #[serde(rename = "CHIPPER_1X")]
    Chipper1X,
    #[serde(rename = "CHIPPER_2X")]
    Chipper2X,
    #[serde(rename = "STRIPE_M2")]
    StripeM2,
    #[serde(rename = "COTS_DEVICE")]
    CotsDevice,
    #[serde(rename = "VERIFONE_P400")]
    VerifoneP400,
    #[serde(rename = "WISECUBE")]
    Wisecube,
    #[serde(rename = "WISEPAD_3")]
    Wisepad3,
    #[serde(rename = "WISEPAD_3S")]
    Wisepad3S,
    #[serde(rename = "WISEPOS_E")]
    WiseposE,
    #[serde(rename = "WISEPOS_E_DEVKIT")]
    WiseposEDevkit,
    #[serde(rename = "ETNA")]
    Etna,
    #[serde(rename = "STRIPE_S700")]
    StripeS700,
    #[serde(rename = "STRIPE_S700_DEVKIT")]
    StripeS700Devkit,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl DeviceType {
    pub const ALL: [DeviceType; 14] = [
        DeviceType::Chipper1X,
        DeviceType::Chipper2X,
        DeviceType::StripeM2,
        DeviceType::CotsDevice,
        DeviceType::VerifoneP400,
        DeviceType::Wisecube,
        DeviceType::Wisepad3,
        DeviceType::Wisepad3S,
        DeviceType::WiseposE,
        DeviceType::WiseposEDevkit,
        DeviceType::Etna,
        DeviceType::StripeS700,
        DeviceType::StripeS700Devkit,
        DeviceType::Unknown,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatteryStatus {
    Unknown,
    Critical,
    Low,
    Nominal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReaderEvent {
    CardInserted,
    CardRemoved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReaderDisplayMessage {
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

impl ReaderDisplayMessage {
    pub const ALL: [ReaderDisplayMessage; 10] = [
        ReaderDisplayMessage::CheckMobileDevice,
        ReaderDisplayMessage::RetryCard,
        ReaderDisplayMessage::InsertCard,
        ReaderDisplayMessage::InsertOrSwipeCard,
        ReaderDisplayMessage::SwipeCard,
        ReaderDisplayMessage::RemoveCard,
        ReaderDisplayMessage::MultipleContactlessCardsDetected,
        ReaderDisplayMessage::TryAnotherReadMethod,
        ReaderDisplayMessage::TryAnotherCard,
        ReaderDisplayMessage::CardRemovedTooEarly,
    ];
}

/// A single way the reader can accept a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReaderInputOption {
    None,
    Insert,
    Swipe,
    Tap,
    ManualEntry,
}

/// The set of input options the reader is currently offering, in SDK order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderInputOptions {
    pub options: Vec<ReaderInputOption>,
}

impl ReaderInputOptions {
    pub fn new(options: Vec<ReaderInputOption>) -> Self {
        Self { options }
    }
}

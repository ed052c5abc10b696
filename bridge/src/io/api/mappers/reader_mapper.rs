//! bridge/src/io/api/mappers/reader_mapper.rs

use crate::error::MappingError;
use crate::sdk::models::reader::{
    BatteryStatus, DeviceType, LocationStatus, Reader, ReaderDisplayMessage, ReaderEvent,
    ReaderInputOption, ReaderInputOptions,
};
use shared::{
    BatteryStatusApi, DeviceTypeApi, LocationStatusApi, ReaderApi, ReaderDisplayMessageApi,
    ReaderEventApi, ReaderInputOptionApi,
};
use tracing::{debug, warn};

/// Battery level reported for readers that do not expose one
pub const BATTERY_LEVEL_NOT_REPORTED: f64 = -1.0;

/// Mapper from SDK readers and reader-level enums to API types.
pub struct ReaderMapper;

impl ReaderMapper {
    /// Converts an SDK reader.
    ///
    /// Fails when the reader has no serial number, which the SDK guarantees for
    /// every discovered reader.
    pub fn to_api(reader: Reader) -> Result<ReaderApi, MappingError> {
        let Some(serial_number) = reader.serial_number else {
            warn!(reader_id = ?reader.id, "Reader has no serial number");
            return Err(MappingError::MissingRequiredField {
                entity: "Reader",
                field: "serialNumber",
            });
        };

        Ok(ReaderApi {
            location_status: Self::location_status_to_api(reader.location_status),
            battery_level: reader
                .battery_level
                .map(f64::from)
                .unwrap_or(BATTERY_LEVEL_NOT_REPORTED),
            device_type: Self::device_type_to_api(reader.device_type),
            simulated: reader.is_simulated,
            available_update: reader
                .available_update
                .as_ref()
                .is_some_and(|update| update.has_firmware_update()),
            location_id: reader.location.and_then(|location| location.id),
            label: reader.label,
            serial_number,
        })
    }

    /// Converts discovered readers in order, failing on the first invalid one
    pub fn to_api_list(readers: Vec<Reader>) -> Result<Vec<ReaderApi>, MappingError> {
        readers.into_iter().map(Self::to_api).collect()
    }

    pub fn location_status_to_api(status: LocationStatus) -> Option<LocationStatusApi> {
        match status {
            LocationStatus::Unknown => None,
            LocationStatus::Set => Some(LocationStatusApi::Set),
            LocationStatus::NotSet => Some(LocationStatusApi::NotSet),
        }
    }

    pub fn device_type_to_api(device_type: DeviceType) -> Option<DeviceTypeApi> {
        let api = match device_type {
            DeviceType::Chipper1X => DeviceTypeApi::Chipper1X,
            DeviceType::Chipper2X => DeviceTypeApi::Chipper2X,
            DeviceType::StripeM2 => DeviceTypeApi::StripeM2,
            DeviceType::CotsDevice => DeviceTypeApi::CotsDevice,
            DeviceType::VerifoneP400 => DeviceTypeApi::VerifoneP400,
            DeviceType::Wisecube => DeviceTypeApi::WiseCube,
            DeviceType::Wisepad3 => DeviceTypeApi::WisePad3,
            DeviceType::Wisepad3S => DeviceTypeApi::WisePad3S,
            DeviceType::WiseposE => DeviceTypeApi::WisePosE,
            DeviceType::WiseposEDevkit => DeviceTypeApi::WisePosEDevkit,
            DeviceType::Etna => DeviceTypeApi::Etna,
            DeviceType::StripeS700 => DeviceTypeApi::StripeS700,
            DeviceType::StripeS700Devkit => DeviceTypeApi::StripeS700Devkit,
            DeviceType::Unknown => {
                debug!("Unknown device type, reporting none");
                return None;
            }
        };
        Some(api)
    }

    pub fn battery_status_to_api(status: BatteryStatus) -> Option<BatteryStatusApi> {
        match status {
            BatteryStatus::Unknown => None,
            BatteryStatus::Critical => Some(BatteryStatusApi::Critical),
            BatteryStatus::Low => Some(BatteryStatusApi::Low),
            BatteryStatus::Nominal => Some(BatteryStatusApi::Nominal),
        }
    }

    pub fn reader_event_to_api(event: ReaderEvent) -> ReaderEventApi {
        match event {
            ReaderEvent::CardInserted => ReaderEventApi::CardInserted,
            ReaderEvent::CardRemoved => ReaderEventApi::CardRemoved,
        }
    }

    pub fn display_message_to_api(message: ReaderDisplayMessage) -> ReaderDisplayMessageApi {
        match message {
            ReaderDisplayMessage::CheckMobileDevice => ReaderDisplayMessageApi::CheckMobileDevice,
            ReaderDisplayMessage::RetryCard => ReaderDisplayMessageApi::RetryCard,
            ReaderDisplayMessage::InsertCard => ReaderDisplayMessageApi::InsertCard,
            ReaderDisplayMessage::InsertOrSwipeCard => ReaderDisplayMessageApi::InsertOrSwipeCard,
            ReaderDisplayMessage::SwipeCard => ReaderDisplayMessageApi::SwipeCard,
            ReaderDisplayMessage::RemoveCard => ReaderDisplayMessageApi::RemoveCard,
            ReaderDisplayMessage::MultipleContactlessCardsDetected => {
                ReaderDisplayMessageApi::MultipleContactlessCardsDetected
            }
            ReaderDisplayMessage::TryAnotherReadMethod => {
                ReaderDisplayMessageApi::TryAnotherReadMethod
            }
            ReaderDisplayMessage::TryAnotherCard => ReaderDisplayMessageApi::TryAnotherCard,
            ReaderDisplayMessage::CardRemovedTooEarly => {
                ReaderDisplayMessageApi::CardRemovedTooEarly
            }
        }
    }

    pub fn input_option_to_api(option: ReaderInputOption) -> Option<ReaderInputOptionApi> {
        match option {
            ReaderInputOption::None => None,
            ReaderInputOption::Insert => Some(ReaderInputOptionApi::InsertCard),
            ReaderInputOption::Swipe => Some(ReaderInputOptionApi::SwipeCard),
            ReaderInputOption::Tap => Some(ReaderInputOptionApi::TapCard),
            ReaderInputOption::ManualEntry => Some(ReaderInputOptionApi::ManualEntry),
        }
    }

    /// Options offered by the reader, in order, without `NONE`
    pub fn input_options_to_api(options: ReaderInputOptions) -> Vec<ReaderInputOptionApi> {
        options
            .options
            .into_iter()
            .filter_map(Self::input_option_to_api)
            .collect()
    }
}

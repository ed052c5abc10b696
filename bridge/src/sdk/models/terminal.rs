//! Terminal-wide state and the SDK's error type.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    NotConnected,
    Connecting,
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    NotReady,
    Ready,
    WaitingForInput,
    Processing,
}

/// Error raised by the SDK for a failed terminal operation.
///
/// The wrapped [`ApiError`], when present, is the Stripe API response that
/// caused the failure and is reported as the error source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{error_message}")]
pub struct TerminalException {
    pub error_code: TerminalErrorCode,
    pub error_message: String,
    #[source]
    pub api_error: Option<ApiError>,
}

impl TerminalException {
    pub fn new(error_code: TerminalErrorCode, error_message: impl Into<String>) -> Self {
        Self {
            error_code,
            error_message: error_message.into(),
            api_error: None,
        }
    }

    pub fn with_api_error(mut self, api_error: ApiError) -> Self {
        self.api_error = Some(api_error);
        self
    }
}

/// Error object returned by the Stripe API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: Option<String>,
    pub decline_code: Option<String>,
    pub message: Option<String>,
    pub param: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stripe API error")?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(decline_code) = &self.decline_code {
            write!(f, " (decline: {})", decline_code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminalErrorCode {
    CancelFailed,
    NotConnectedToReader,
    AlreadyConnectedToReader,
    BluetoothDisabled,
    BluetoothPermissionDenied,
    ConfirmInvalidPaymentIntent,
    InvalidClientSecret,
    InvalidReaderForUpdate,
    UnsupportedOperation,
    UnexpectedOperation,
    UnsupportedSdk,
    UsbPermissionDenied,
    MissingRequiredParameter,
    InvalidRequiredParameter,
    InvalidTipParameter,
    LocalMobileLibraryNotIncluded,
    LocalMobileUnsupportedDevice,
    LocalMobileUnsupportedAndroidVersion,
    LocalMobileDeviceTampered,
    LocalMobileDebugNotSupported,
    OfflineModeUnsupportedAndroidVersion,
    Canceled,
    LocationServicesDisabled,
    BluetoothScanTimedOut,
    BluetoothLowEnergyUnsupported,
    ReaderSoftwareUpdateFailedBatteryLow,
    ReaderSoftwareUpdateFailedInterrupted,
    CardInsertNotRead,
    CardSwipeNotRead,
    CardReadTimedOut,
    CardRemoved,
    CardLeftInReader,
    ReaderBusy,
    IncompatibleReader,
    ReaderCommunicationError,
    BluetoothError,
    BluetoothDisconnected,
    BluetoothReconnectStarted,
    UsbDisconnected,
    UsbReconnectStarted,
    ReaderConnectedToAnotherDevice,
    ReaderSoftwareUpdateFailed,
    ReaderSoftwareUpdateFailedReaderError,
    ReaderSoftwareUpdateFailedServerError,
    NfcDisabled,
    UnsupportedReaderVersion,
    UnexpectedSdkError,
    DeclinedByStripeApi,
    DeclinedByReader,
    NotConnectedToInternet,
    RequestTimedOut,
    StripeApiConnectionError,
    StripeApiError,
    StripeApiResponseDecodingError,
    ConnectionTokenProviderError,
    SessionExpired,
    AndroidApiLevelError,
    AmountExceedsMaxOfflineAmount,
    OfflinePaymentsDatabaseTooLarge,
    ReaderConnectionNotAvailableOffline,
    ReaderConnectionOfflineLocationMismatch,
    NoLastSeenAccount,
    InvalidOfflineCurrency,
    CardSwipeNotAvailable,
    InteracNotSupportedOffline,
    OnlinePinNotSupportedOffline,
    OfflineAndCardExpired,
    OfflineTransactionDeclined,
    OfflineCollectAndConfirmMismatch,
    OfflineTestmodeCardNotSupported,
}

impl TerminalErrorCode {
    /// Name of the SDK constant, as surfaced to the client in `rawCode`
    pub fn name(self) -> &'static str {
        use TerminalErrorCode::*;
        match self {
            CancelFailed => "CANCEL_FAILED",
            NotConnectedToReader => "NOT_CONNECTED_TO_READER",
            AlreadyConnectedToReader => "ALREADY_CONNECTED_TO_READER",
            BluetoothDisabled => "BLUETOOTH_DISABLED",
            BluetoothPermissionDenied => "BLUETOOTH_PERMISSION_DENIED",
            ConfirmInvalidPaymentIntent => "CONFIRM_INVALID_PAYMENT_INTENT",
            InvalidClientSecret => "INVALID_CLIENT_SECRET",
            InvalidReaderForUpdate => "INVALID_READER_FOR_UPDATE",
            UnsupportedOperation => "UNSUPPORTED_OPERATION",
            UnexpectedOperation => "UNEXPECTED_OPERATION",
            UnsupportedSdk => "UNSUPPORTED_SDK",
            UsbPermissionDenied => "USB_PERMISSION_DENIED",
            MissingRequiredParameter => "MISSING_REQUIRED_PARAMETER",
            InvalidRequiredParameter => "INVALID_REQUIRED_PARAMETER",
            InvalidTipParameter => "INVALID_TIP_PARAMETER",
            LocalMobileLibraryNotIncluded => "LOCAL_MOBILE_LIBRARY_NOT_INCLUDED",
            LocalMobileUnsupportedDevice => "LOCAL_MOBILE_UNSUPPORTED_DEVICE",
            LocalMobileUnsupportedAndroidVersion => "LOCAL_MOBILE_UNSUPPORTED_ANDROID_VERSION",
            LocalMobileDeviceTampered => "LOCAL_MOBILE_DEVICE_TAMPERED",
            LocalMobileDebugNotSupported => "LOCAL_MOBILE_DEBUG_NOT_SUPPORTED",
            OfflineModeUnsupportedAndroidVersion => "OFFLINE_MODE_UNSUPPORTED_ANDROID_VERSION",
            Canceled => "CANCELED",
            LocationServicesDisabled => "LOCATION_SERVICES_DISABLED",
            BluetoothScanTimedOut => "BLUETOOTH_SCAN_TIMED_OUT",
            BluetoothLowEnergyUnsupported => "BLUETOOTH_LOW_ENERGY_UNSUPPORTED",
            ReaderSoftwareUpdateFailedBatteryLow => "READER_SOFTWARE_UPDATE_FAILED_BATTERY_LOW",
            ReaderSoftwareUpdateFailedInterrupted => "READER_SOFTWARE_UPDATE_FAILED_INTERRUPTED",
            CardInsertNotRead => "CARD_INSERT_NOT_READ",
            CardSwipeNotRead => "CARD_SWIPE_NOT_READ",
            CardReadTimedOut => "CARD_READ_TIMED_OUT",
            CardRemoved => "CARD_REMOVED",
            CardLeftInReader => "CARD_LEFT_IN_READER",
            ReaderBusy => "READER_BUSY",
            IncompatibleReader => "INCOMPATIBLE_READER",
            ReaderCommunicationError => "READER_COMMUNICATION_ERROR",
            BluetoothError => "BLUETOOTH_ERROR",
            BluetoothDisconnected => "BLUETOOTH_DISCONNECTED",
            BluetoothReconnectStarted => "BLUETOOTH_RECONNECT_STARTED",
            UsbDisconnected => "USB_DISCONNECTED",
            UsbReconnectStarted => "USB_RECONNECT_STARTED",
            ReaderConnectedToAnotherDevice => "READER_CONNECTED_TO_ANOTHER_DEVICE",
            ReaderSoftwareUpdateFailed => "READER_SOFTWARE_UPDATE_FAILED",
            ReaderSoftwareUpdateFailedReaderError => "READER_SOFTWARE_UPDATE_FAILED_READER_ERROR",
            ReaderSoftwareUpdateFailedServerError => "READER_SOFTWARE_UPDATE_FAILED_SERVER_ERROR",
            NfcDisabled => "NFC_DISABLED",
            UnsupportedReaderVersion => "UNSUPPORTED_READER_VERSION",
            UnexpectedSdkError => "UNEXPECTED_SDK_ERROR",
            DeclinedByStripeApi => "DECLINED_BY_STRIPE_API",
            DeclinedByReader => "DECLINED_BY_READER",
            NotConnectedToInternet => "NOT_CONNECTED_TO_INTERNET",
            RequestTimedOut => "REQUEST_TIMED_OUT",
            StripeApiConnectionError => "STRIPE_API_CONNECTION_ERROR",
            StripeApiError => "STRIPE_API_ERROR",
            StripeApiResponseDecodingError => "STRIPE_API_RESPONSE_DECODING_ERROR",
            ConnectionTokenProviderError => "CONNECTION_TOKEN_PROVIDER_ERROR",
            SessionExpired => "SESSION_EXPIRED",
            AndroidApiLevelError => "ANDROID_API_LEVEL_ERROR",
            AmountExceedsMaxOfflineAmount => "AMOUNT_EXCEEDS_MAX_OFFLINE_AMOUNT",
            OfflinePaymentsDatabaseTooLarge => "OFFLINE_PAYMENTS_DATABASE_TOO_LARGE",
            ReaderConnectionNotAvailableOffline => "READER_CONNECTION_NOT_AVAILABLE_OFFLINE",
            ReaderConnectionOfflineLocationMismatch => "READER_CONNECTION_OFFLINE_LOCATION_MISMATCH",
            NoLastSeenAccount => "NO_LAST_SEEN_ACCOUNT",
            InvalidOfflineCurrency => "INVALID_OFFLINE_CURRENCY",
            CardSwipeNotAvailable => "CARD_SWIPE_NOT_AVAILABLE",
            InteracNotSupportedOffline => "INTERAC_NOT_SUPPORTED_OFFLINE",
            OnlinePinNotSupportedOffline => "ONLINE_PIN_NOT_SUPPORTED_OFFLINE",
            OfflineAndCardExpired => "OFFLINE_AND_CARD_EXPIRED",
            OfflineTransactionDeclined => "OFFLINE_TRANSACTION_DECLINED",
            OfflineCollectAndConfirmMismatch => "OFFLINE_COLLECT_AND_CONFIRM_MISMATCH",
            OfflineTestmodeCardNotSupported => "OFFLINE_TESTMODE_CARD_NOT_SUPPORTED",
        }
    }
}

impl fmt::Display for TerminalErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use crate::sdk::models::terminal::{ConnectionStatus, PaymentStatus, TerminalException};
use shared::{ConnectionStatusApi, PaymentStatusApi, TerminalExceptionApi};
use std::error::Error;

/// Mapper for terminal-wide state and SDK errors.
pub struct TerminalMapper;

impl TerminalMapper {
    pub fn connection_status_to_api(status: ConnectionStatus) -> ConnectionStatusApi {
        match status {
            ConnectionStatus::NotConnected => ConnectionStatusApi::NotConnected,
            ConnectionStatus::Connecting => ConnectionStatusApi::Connecting,
            ConnectionStatus::Connected => ConnectionStatusApi::Connected,
        }
    }

    pub fn payment_status_to_api(status: PaymentStatus) -> PaymentStatusApi {
        match status {
            PaymentStatus::NotReady => PaymentStatusApi::NotReady,
            PaymentStatus::Ready => PaymentStatusApi::Ready,
            PaymentStatus::WaitingForInput => PaymentStatusApi::WaitingForInput,
            PaymentStatus::Processing => PaymentStatusApi::Processing,
        }
    }

    /// `details` holds the error followed by each of its causes, one per line
    pub fn exception_to_api(exception: &TerminalException) -> TerminalExceptionApi {
        TerminalExceptionApi {
            raw_code: exception.error_code.name().to_string(),
            message: exception.error_message.clone(),
            details: Some(render_chain(exception)),
        }
    }
}

fn render_chain(error: &dyn Error) -> String {
    let mut rendered = format!("TerminalException: {}", error);
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(&format!("\nCaused by: {}", cause));
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::models::terminal::{ApiError, TerminalErrorCode};

    #[test]
    fn test_connection_statuses() {
        assert_eq!(
            TerminalMapper::connection_status_to_api(ConnectionStatus::NotConnected),
            ConnectionStatusApi::NotConnected
        );
        assert_eq!(
            TerminalMapper::connection_status_to_api(ConnectionStatus::Connecting),
            ConnectionStatusApi::Connecting
        );
        assert_eq!(
            TerminalMapper::connection_status_to_api(ConnectionStatus::Connected),
            ConnectionStatusApi::Connected
        );
    }

    #[test]
    fn test_payment_statuses() {
        assert_eq!(
            TerminalMapper::payment_status_to_api(PaymentStatus::NotReady),
            PaymentStatusApi::NotReady
        );
        assert_eq!(
            TerminalMapper::payment_status_to_api(PaymentStatus::Ready),
            PaymentStatusApi::Ready
        );
        assert_eq!(
            TerminalMapper::payment_status_to_api(PaymentStatus::WaitingForInput),
            PaymentStatusApi::WaitingForInput
        );
        assert_eq!(
            TerminalMapper::payment_status_to_api(PaymentStatus::Processing),
            PaymentStatusApi::Processing
        );
    }

    #[test]
    fn test_exception_to_api() {
        let exception = TerminalException::new(
            TerminalErrorCode::NotConnectedToReader,
            "No reader is connected",
        );

        let api = TerminalMapper::exception_to_api(&exception);
        assert_eq!(api.raw_code, "NOT_CONNECTED_TO_READER");
        assert_eq!(api.message, "No reader is connected");
        assert_eq!(
            api.details.as_deref(),
            Some("TerminalException: No reader is connected")
        );
    }

    #[test]
    fn test_exception_details_include_api_error() {
        let exception = TerminalException::new(TerminalErrorCode::DeclinedByStripeApi, "Declined")
            .with_api_error(ApiError {
                code: Some("card_declined".to_string()),
                message: Some("Your card was declined.".to_string()),
                ..ApiError::default()
            });

        let api = TerminalMapper::exception_to_api(&exception);
        assert_eq!(
            api.details.as_deref(),
            Some(
                "TerminalException: Declined\n\
                 Caused by: Stripe API error [card_declined]: Your card was declined."
            )
        );
    }
}

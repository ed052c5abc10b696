use crate::sdk::models::payment_intent::{PaymentIntent, PaymentIntentStatus};
use shared::{PaymentIntentApi, PaymentIntentStatusApi};

use super::metadata::to_hash_map;

pub struct PaymentIntentMapper;

impl PaymentIntentMapper {
    /// Projects an SDK payment intent onto the API shape.
    ///
    /// Amount details, tips, the last payment error, offline behavior, the
    /// expanded payment method and its options, statement descriptors and the
    /// connected account id are not surfaced.
    pub fn to_api(intent: PaymentIntent) -> PaymentIntentApi {
        PaymentIntentApi {
            amount: intent.amount as f64,
            amount_capturable: intent.amount_capturable as f64,
            amount_received: intent.amount_received as f64,
            application: intent.application,
            application_fee_amount: intent.application_fee_amount as f64,
            canceled_at: intent.canceled_at,
            cancellation_reason: intent.cancellation_reason,
            capture_method: intent.capture_method,
            client_secret: intent.client_secret,
            confirmation_method: intent.confirmation_method,
            created: intent.created,
            currency: intent.currency,
            description: intent.description,
            id: intent.id,
            invoice: intent.invoice,
            livemode: intent.livemode,
            metadata: to_hash_map(intent.metadata),
            on_behalf_of: intent.on_behalf_of,
            payment_method_id: intent.payment_method_id,
            receipt_email: intent.receipt_email,
            review: intent.review,
            setup_future_usage: intent.setup_future_usage,
            status: intent.status.map(Self::status_to_api),
            transfer_group: intent.transfer_group,
            customer: intent.customer,
        }
    }

    pub fn status_to_api(status: PaymentIntentStatus) -> PaymentIntentStatusApi {
        match status {
            PaymentIntentStatus::Canceled => PaymentIntentStatusApi::Canceled,
            PaymentIntentStatus::Processing => PaymentIntentStatusApi::Processing,
            PaymentIntentStatus::RequiresCapture => PaymentIntentStatusApi::RequiresCapture,
            PaymentIntentStatus::RequiresConfirmation => PaymentIntentStatusApi::RequiresConfirmation,
            PaymentIntentStatus::RequiresPaymentMethod => {
                PaymentIntentStatusApi::RequiresPaymentMethod
            }
            PaymentIntentStatus::Succeeded => PaymentIntentStatusApi::Succeeded,
        }
    }
}

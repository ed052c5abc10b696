//! Fixture builders shared by the model and mapper tests
//!
//! Every builder returns a fully populated SDK object so that tests only
//! have to override the fields they care about.
use chrono::{TimeZone, Utc};
use std::collections::HashMap;

use super::models::*;

pub fn sample_metadata() -> HashMap<String, String> {
    HashMap::from([
        ("order_id".to_string(), "ord_42".to_string()),
        ("lane".to_string(), "3".to_string()),
    ])
}

pub fn sample_address() -> Address {
    Address {
        city: Some("San Francisco".to_string()),
        country: Some("US".to_string()),
        line1: Some("354 Oyster Point Blvd".to_string()),
        line2: None,
        postal_code: Some("94080".to_string()),
        state: Some("CA".to_string()),
    }
}

pub fn sample_location() -> Location {
    Location {
        id: Some("tml_FDOtHwxAAdIJOh".to_string()),
        display_name: Some("HQ".to_string()),
        address: Some(sample_address()),
        livemode: false,
        metadata: Some(sample_metadata()),
    }
}

pub fn sample_software_update() -> ReaderSoftwareUpdate {
    ReaderSoftwareUpdate {
        version: "2.13.1.0".to_string(),
        components: vec![UpdateComponent::Firmware, UpdateComponent::Config],
        key_profile_name: Some("prod-keys".to_string()),
        only_install_required_updates: false,
        required_at: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
        settings_version: Some("41".to_string()),
        time_estimate: UpdateTimeEstimate::TwoToFiveMinutes,
    }
}

pub fn sample_reader() -> Reader {
    Reader {
        id: Some("tmr_FDOt2wlRZEdpd7".to_string()),
        serial_number: Some("WSC513105000001".to_string()),
        label: Some("Counter 1".to_string()),
        device_type: DeviceType::Wisepad3,
        is_simulated: false,
        battery_level: Some(0.75),
        battery_status: BatteryStatus::Nominal,
        is_charging: Some(false),
        software_version: Some("2.12.0.0".to_string()),
        ip_address: None,
        location: Some(sample_location()),
        location_status: LocationStatus::Set,
        available_update: Some(sample_software_update()),
    }
}

pub fn sample_card_details() -> CardDetails {
    CardDetails {
        brand: Some("visa".to_string()),
        country: Some("US".to_string()),
        exp_month: 12,
        exp_year: 2030,
        fingerprint: Some("Xt5EWLLDS7FJjR1c".to_string()),
        funding: Some("credit".to_string()),
        generated_from: Some(GeneratedFrom {
            charge: Some("ch_1".to_string()),
            payment_method_details: None,
        }),
        last4: Some("4242".to_string()),
    }
}

pub fn sample_card_present_details() -> CardPresentDetails {
    CardPresentDetails {
        brand: Some("visa".to_string()),
        cardholder_name: Some("JANE DOE".to_string()),
        country: Some("US".to_string()),
        exp_month: 12,
        exp_year: 2030,
        fingerprint: Some("Xt5EWLLDS7FJjR1c".to_string()),
        funding: Some("credit".to_string()),
        last4: Some("4242".to_string()),
        read_method: Some("contact_emv".to_string()),
    }
}

pub fn sample_payment_method() -> PaymentMethod {
    PaymentMethod {
        id: "pm_1Mw3Q2".to_string(),
        card_details: Some(sample_card_details()),
        card_present_details: Some(sample_card_present_details()),
        interac_present_details: None,
        customer: Some("cus_9s6XKzkNRiz8i3".to_string()),
        livemode: false,
        metadata: Some(sample_metadata()),
    }
}

pub fn sample_payment_intent() -> PaymentIntent {
    PaymentIntent {
        id: "pi_3MtwBwLkdIwHu7ix28a3tqPa".to_string(),
        amount: 2000,
        amount_capturable: 2000,
        amount_details: Some(AmountDetails { tip_amount: Some(300) }),
        amount_received: 0,
        amount_tip: Some(300),
        application: None,
        application_fee_amount: 120,
        canceled_at: 0,
        cancellation_reason: None,
        capture_method: Some("manual".to_string()),
        client_secret: Some("pi_3MtwBw_secret_YrKJUKribcBjcG8HVhfZluoGH".to_string()),
        confirmation_method: Some("automatic".to_string()),
        created: 1_680_800_504,
        currency: Some("usd".to_string()),
        customer: Some("cus_9s6XKzkNRiz8i3".to_string()),
        description: Some("Coffee".to_string()),
        invoice: None,
        last_payment_error: Some(ApiError {
            code: Some("card_declined".to_string()),
            decline_code: Some("generic_decline".to_string()),
            message: Some("Your card was declined.".to_string()),
            param: None,
        }),
        livemode: false,
        metadata: Some(sample_metadata()),
        offline_behavior: Some(OfflineBehavior::PreferOnline),
        on_behalf_of: None,
        payment_method: Some(sample_payment_method()),
        payment_method_id: Some("pm_1Mw3Q2".to_string()),
        receipt_email: Some("jane@example.com".to_string()),
        review: None,
        setup_future_usage: None,
        statement_descriptor: Some("COFFEE SHOP".to_string()),
        statement_descriptor_suffix: Some("LANE 3".to_string()),
        status: Some(PaymentIntentStatus::RequiresCapture),
        stripe_account_id: Some("acct_1032D82eZvKYlo2C".to_string()),
        transfer_group: Some("group_pi_3MtwBw".to_string()),
    }
}

//! bridge/src/io/api/mappers/payment_method_mapper.rs

use crate::sdk::models::payment_method::{CardDetails, PaymentMethod};
use shared::{CardBrandApi, CardDetailsApi, CardFundingTypeApi, PaymentMethodApi};
use tracing::debug;

use super::metadata::to_hash_map;

/// Card brand strings the SDK reports, and their API constant.
/// `"unknown"` and anything not listed map to no brand.
pub const CARD_BRANDS: &[(&str, CardBrandApi)] = &[
    ("amex", CardBrandApi::Amex),
    ("diners", CardBrandApi::DinersClub),
    ("discover", CardBrandApi::Discover),
    ("jcb", CardBrandApi::Jcb),
    ("mastercard", CardBrandApi::MasterCard),
    ("unionpay", CardBrandApi::UnionPay),
    ("visa", CardBrandApi::Visa),
];

pub const CARD_FUNDING_TYPES: &[(&str, CardFundingTypeApi)] = &[
    ("credit", CardFundingTypeApi::Credit),
    ("debit", CardFundingTypeApi::Debit),
    ("prepaid", CardFundingTypeApi::Prepaid),
];

const UNKNOWN: &str = "unknown";

pub struct PaymentMethodMapper;

impl PaymentMethodMapper {
    /// Card-present and Interac-present details are not part of the API and are dropped.
    pub fn to_api(payment_method: PaymentMethod) -> PaymentMethodApi {
        PaymentMethodApi {
            card_details: payment_method.card_details.map(Self::card_details_to_api),
            customer: payment_method.customer,
            id: payment_method.id,
            livemode: payment_method.livemode,
            metadata: to_hash_map(payment_method.metadata),
        }
    }

    pub fn card_details_to_api(card: CardDetails) -> CardDetailsApi {
        CardDetailsApi {
            brand: card.brand.as_deref().and_then(Self::card_brand_to_api),
            country: card.country,
            exp_month: i64::from(card.exp_month),
            exp_year: i64::from(card.exp_year),
            fingerprint: card.fingerprint,
            funding: card.funding.as_deref().and_then(Self::card_funding_to_api),
            last4: card.last4,
        }
    }

    pub fn card_brand_to_api(brand: &str) -> Option<CardBrandApi> {
        let api = lookup(CARD_BRANDS, brand);
        if api.is_none() && brand != UNKNOWN {
            debug!(brand, "Unrecognized card brand");
        }
        api
    }

    pub fn card_funding_to_api(funding: &str) -> Option<CardFundingTypeApi> {
        let api = lookup(CARD_FUNDING_TYPES, funding);
        if api.is_none() && funding != UNKNOWN {
            debug!(funding, "Unrecognized card funding type");
        }
        api
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], raw: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == raw)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::test_utils::{sample_card_details, sample_payment_method};
    use serde_json::json;

    #[test]
    fn test_to_api() {
        let api = PaymentMethodMapper::to_api(sample_payment_method());

        assert_eq!(api.id, "pm_1Mw3Q2");
        assert_eq!(api.customer.as_deref(), Some("cus_9s6XKzkNRiz8i3"));
        assert!(!api.livemode);
        assert_eq!(api.metadata.get("order_id").map(String::as_str), Some("ord_42"));

        let card = api.card_details.unwrap();
        assert_eq!(card.brand, Some(CardBrandApi::Visa));
        assert_eq!(card.funding, Some(CardFundingTypeApi::Credit));
        assert_eq!(card.exp_month, 12);
        assert_eq!(card.exp_year, 2030);
        assert_eq!(card.last4.as_deref(), Some("4242"));
    }

    #[test]
    fn test_absent_metadata_is_empty() {
        let mut payment_method = sample_payment_method();
        payment_method.metadata = None;

        let api = PaymentMethodMapper::to_api(payment_method);
        assert!(api.metadata.is_empty());
    }

    #[test]
    fn test_present_details_are_not_exposed() {
        let api = PaymentMethodMapper::to_api(sample_payment_method());
        let value = serde_json::to_value(&api).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();

        assert_eq!(keys.len(), 5);
        assert!(value.get("cardPresentDetails").is_none());
        assert!(value.get("interacPresentDetails").is_none());
    }

    #[test]
    fn test_card_brands() {
        assert_eq!(PaymentMethodMapper::card_brand_to_api("amex"), Some(CardBrandApi::Amex));
        assert_eq!(PaymentMethodMapper::card_brand_to_api("diners"), Some(CardBrandApi::DinersClub));
        assert_eq!(PaymentMethodMapper::card_brand_to_api("discover"), Some(CardBrandApi::Discover));
        assert_eq!(PaymentMethodMapper::card_brand_to_api("jcb"), Some(CardBrandApi::Jcb));
        assert_eq!(PaymentMethodMapper::card_brand_to_api("mastercard"), Some(CardBrandApi::MasterCard));
        assert_eq!(PaymentMethodMapper::card_brand_to_api("unionpay"), Some(CardBrandApi::UnionPay));
        assert_eq!(PaymentMethodMapper::card_brand_to_api("visa"), Some(CardBrandApi::Visa));
        assert_eq!(PaymentMethodMapper::card_brand_to_api("unknown"), None);
        assert_eq!(PaymentMethodMapper::card_brand_to_api("bogus"), None);
        assert_eq!(PaymentMethodMapper::card_brand_to_api(""), None);
        assert_eq!(PaymentMethodMapper::card_brand_to_api("VISA"), None);
    }

    #[test]
    fn test_mastercard_wire_spelling() {
        let brand = PaymentMethodMapper::card_brand_to_api("mastercard");
        assert_eq!(serde_json::to_value(brand).unwrap(), json!("MASTER_CARD"));
    }

    #[test]
    fn test_card_funding_types() {
        assert_eq!(PaymentMethodMapper::card_funding_to_api("credit"), Some(CardFundingTypeApi::Credit));
        assert_eq!(PaymentMethodMapper::card_funding_to_api("debit"), Some(CardFundingTypeApi::Debit));
        assert_eq!(PaymentMethodMapper::card_funding_to_api("prepaid"), Some(CardFundingTypeApi::Prepaid));
        assert_eq!(PaymentMethodMapper::card_funding_to_api("unknown"), None);
        assert_eq!(PaymentMethodMapper::card_funding_to_api("visa"), None);
    }

    #[test]
    fn test_funding_comes_from_funding_field() {
        let mut card = sample_card_details();
        card.brand = Some("mastercard".to_string());
        card.funding = Some("debit".to_string());

        let api = PaymentMethodMapper::card_details_to_api(card);
        assert_eq!(api.brand, Some(CardBrandApi::MasterCard));
        assert_eq!(api.funding, Some(CardFundingTypeApi::Debit));
    }

    #[test]
    fn test_missing_brand_and_funding() {
        let mut card = sample_card_details();
        card.brand = None;
        card.funding = None;

        let api = PaymentMethodMapper::card_details_to_api(card);
        assert!(api.brand.is_none());
        assert!(api.funding.is_none());
    }
}

//! # Order Types
//!
//! The order payload sent to the payment gateway when a payment order is created.
//! The template can be replaced by a TOML file named in `ORDER_TEMPLATE_PATH`.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Longest receipt the gateway accepts
pub const MAX_RECEIPT_LEN: usize = 40;

/// Most note entries the gateway accepts on one order
pub const MAX_NOTES: usize = 15;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    INR,
    USD,
    EUR,
    GBP,
    SGD,
    AED,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::SGD => "SGD",
            Currency::AED => "AED",
        }
    }

    /// Format an amount in the smallest unit for display (e.g. "₹1.00")
    pub fn display_amount(&self, amount: i64) -> String {
        let symbol = match self {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::SGD => "S$",
            Currency::AED => "AED ",
        };
        format!("{}{:.2}", symbol, amount as f64 / 100.0)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::INR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::INR),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "SGD" => Ok(Currency::SGD),
            "AED" => Ok(Currency::AED),
            _ => Err(PaymentError::UnsupportedCurrency {
                currency: s.to_string(),
            }),
        }
    }
}

/// Request body for creating a payment order at the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRequest {
    /// Amount in the smallest currency unit (paise for INR)
    pub amount: i64,

    /// Currency
    pub currency: Currency,

    /// Merchant-side receipt identifier
    pub receipt: String,

    /// Whether the customer may pay the order in parts
    pub partial_payment: bool,

    /// Free-form key/value notes attached to the order
    pub notes: HashMap<String, String>,
}

impl Default for OrderRequest {
    /// The fixed order every payment request creates.
    fn default() -> Self {
        let mut notes = HashMap::new();
        notes.insert("key1".to_string(), "value1".to_string());
        notes.insert("key2".to_string(), "value2".to_string());

        Self {
            amount: 100,
            currency: Currency::INR,
            receipt: "some_receipt_id".to_string(),
            partial_payment: false,
            notes,
        }
    }
}

impl OrderRequest {
    /// Create an order with no notes
    pub fn new(amount: i64, currency: Currency, receipt: impl Into<String>) -> Self {
        Self {
            amount,
            currency,
            receipt: receipt.into(),
            partial_payment: false,
            notes: HashMap::new(),
        }
    }

    /// Builder: attach a note
    pub fn with_note(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.notes.insert(key.into(), value.into());
        self
    }

    /// Builder: allow partial payments
    pub fn with_partial_payment(mut self, partial_payment: bool) -> Self {
        self.partial_payment = partial_payment;
        self
    }

    /// Parse an order template from TOML. Missing fields keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Check the order against the gateway's limits
    pub fn validate(&self) -> PaymentResult<()> {
        if self.amount <= 0 {
            return Err(PaymentError::InvalidRequest(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }

        if self.receipt.is_empty() {
            return Err(PaymentError::InvalidRequest(
                "receipt must not be empty".to_string(),
            ));
        }

        if self.receipt.chars().count() > MAX_RECEIPT_LEN {
            return Err(PaymentError::InvalidRequest(format!(
                "receipt is longer than {} characters",
                MAX_RECEIPT_LEN
            )));
        }

        if self.notes.len() > MAX_NOTES {
            return Err(PaymentError::InvalidRequest(format!(
                "at most {} notes are allowed, got {}",
                MAX_NOTES,
                self.notes.len()
            )));
        }

        Ok(())
    }

    /// Amount formatted for logs
    pub fn display_amount(&self) -> String {
        self.currency.display_amount(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_fixed_payload() {
        let order = OrderRequest::default();
        assert_eq!(order.amount, 100);
        assert_eq!(order.currency, Currency::INR);
        assert_eq!(order.receipt, "some_receipt_id");
        assert!(!order.partial_payment);
        assert_eq!(order.notes.get("key1").map(String::as_str), Some("value1"));
        assert_eq!(order.notes.get("key2").map(String::as_str), Some("value2"));
    }

    #[test]
    fn test_order_serializes_gateway_shape() {
        let json = serde_json::to_value(OrderRequest::default()).unwrap();
        assert_eq!(json["amount"], 100);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["receipt"], "some_receipt_id");
        assert_eq!(json["partial_payment"], false);
        assert_eq!(json["notes"]["key1"], "value1");
    }

    #[test]
    fn test_currency_parsing() {
        assert_eq!("inr".parse::<Currency>().unwrap(), Currency::INR);
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::USD);
        assert!(matches!(
            "XYZ".parse::<Currency>(),
            Err(PaymentError::UnsupportedCurrency { .. })
        ));
    }

    #[test]
    fn test_display_amount() {
        assert_eq!(OrderRequest::default().display_amount(), "₹1.00");
        assert_eq!(Currency::USD.display_amount(2550), "$25.50");
    }

    #[test]
    fn test_from_toml_overrides_fields() {
        let toml_str = r#"
amount = 50000
receipt = "rcpt_42"

[notes]
plan = "pro"
"#;
        let order = OrderRequest::from_toml(toml_str).unwrap();
        assert_eq!(order.amount, 50000);
        assert_eq!(order.receipt, "rcpt_42");
        assert_eq!(order.currency, Currency::INR);
        assert_eq!(order.notes.len(), 1);
        assert_eq!(order.notes.get("plan").map(String::as_str), Some("pro"));
    }

    #[test]
    fn test_from_toml_rejects_unknown_currency() {
        assert!(OrderRequest::from_toml(r#"currency = "XYZ""#).is_err());
    }

    #[test]
    fn test_validation() {
        assert!(OrderRequest::default().validate().is_ok());

        let zero = OrderRequest::new(0, Currency::INR, "r1");
        assert!(zero.validate().is_err());

        let no_receipt = OrderRequest::new(100, Currency::INR, "");
        assert!(no_receipt.validate().is_err());

        let long_receipt = OrderRequest::new(100, Currency::INR, "r".repeat(41));
        assert!(long_receipt.validate().is_err());

        let mut many_notes = OrderRequest::new(100, Currency::INR, "r1");
        for i in 0..16 {
            many_notes = many_notes.with_note(format!("k{}", i), "v");
        }
        assert!(many_notes.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let order = OrderRequest::new(2500, Currency::USD, "rcpt_1")
            .with_note("source", "web")
            .with_partial_payment(true);
        assert!(order.partial_payment);
        assert_eq!(order.notes.len(), 1);
    }
}

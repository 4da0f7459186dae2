//! Response envelopes and the values they carry.
//!
//! Field names follow the API exactly, including its own spellings
//! (`serviceID`, `ServiceName`, `varations`, `contents`). Fields the API
//! documents loosely are kept as a pass-through JSON map so nothing is lost
//! on re-serialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

use crate::code::ResponseCode;

/// A value billers send either quoted or bare, e.g. `"1000"` or `1000`.
///
/// Serializes back in the shape it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    /// Sent as a JSON string.
    Text(String),
    /// Sent as a JSON number.
    Number(Number),
}

impl TextOrNumber {
    /// The string form, if the value was sent quoted.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl PartialEq<str> for TextOrNumber {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Text(text) => text == other,
            Self::Number(number) => number.to_string() == other,
        }
    }
}

impl PartialEq<&str> for TextOrNumber {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl From<&str> for TextOrNumber {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// The part of the envelope shared by every response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse {
    /// Outcome code.
    pub code: ResponseCode,
    /// Free-text description, when the API sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_description: Option<String>,
}

/// A top-level service category, e.g. "airtime" or "electricity-bill".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    /// Category identifier, used to list services.
    pub identifier: String,
    /// Display name.
    pub name: String,
}

/// A billable product, e.g. "ikeja-electric".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service identifier.
    #[serde(rename = "serviceID")]
    pub service_id: String,
    /// Display name.
    pub name: String,
    /// Every other field the API returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A purchasable plan under a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    /// Code passed when paying for this variation.
    pub variation_code: String,
    /// Display name.
    pub name: String,
    /// Price, quoted or bare depending on the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_amount: Option<TextOrNumber>,
    /// `"Yes"` when the price cannot be changed.
    #[serde(rename = "fixedPrice", default, skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<String>,
    /// Every other field the API returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Content of the variation-codes endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceVariations {
    /// Name of the parent service.
    #[serde(rename = "ServiceName")]
    pub service_name: String,
    /// Variations in the order the API listed them.
    #[serde(rename = "varations", alias = "variations", default)]
    pub variations: Vec<Variation>,
    /// Every other field the API returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Account or meter identity returned by a verification call.
///
/// The exact field set depends on the biller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Name registered with the biller.
    #[serde(rename = "Customer_Name", default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Service address.
    #[serde(rename = "Address", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Meter number as echoed by the biller.
    #[serde(rename = "Meter_Number", default, skip_serializing_if = "Option::is_none")]
    pub meter_number: Option<TextOrNumber>,
    /// Outstanding debt on the account.
    #[serde(rename = "Customer_Arrears", default, skip_serializing_if = "Option::is_none")]
    pub customer_arrears: Option<TextOrNumber>,
    /// Smallest amount the biller accepts.
    #[serde(rename = "Minimum_Amount", default, skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<TextOrNumber>,
    /// Account class, e.g. `"NMD"`.
    #[serde(
        rename = "Customer_Account_Type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_account_type: Option<String>,
    /// Every other field the biller returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomerInfo {
    /// Look up a biller-specific field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Wallet balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    /// Available balance.
    pub balance: f64,
}

/// Envelope of the service-categories endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCategoryResponse {
    /// Outcome code.
    pub code: ResponseCode,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_description: Option<String>,
    /// Categories.
    pub content: Vec<ServiceCategory>,
}

/// Envelope of the services endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// Outcome code.
    pub code: ResponseCode,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_description: Option<String>,
    /// Services.
    pub content: Vec<Service>,
}

/// Envelope of the variation-codes endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationResponse {
    /// Outcome code.
    pub code: ResponseCode,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_description: Option<String>,
    /// Parent service and its variations.
    pub content: ServiceVariations,
}

/// Envelope of the merchant-verify endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfoResponse {
    /// Outcome code.
    pub code: ResponseCode,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_description: Option<String>,
    /// Verified identity.
    pub content: CustomerInfo,
}

/// Envelope of the balance endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Outcome code.
    pub code: ResponseCode,
    /// Balance payload.
    pub contents: WalletBalance,
}

//! Core types for the VTpass bill-payment API.
//!
//! This crate holds everything about the API that does not need a network:
//!
//! - **Environments**: `Environment` and the base URL each one maps to
//! - **Credentials**: `Credentials`, `AuthHeaders`
//! - **Response codes**: `ResponseCode` and the error classifier
//! - **Envelopes**: the JSON shapes returned by each endpoint
//! - **Errors**: `ApiError`, `ErrorKind`
//!
//! # Envelopes
//!
//! Every VTpass response carries a `code`. Success responses wrap their
//! payload in `content` (the balance endpoint spells it `contents`), and a
//! handful of business failures come back with HTTP 200 and a failing code.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod code;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod types;

pub use code::{
    classify, ResponseCode, BILLER_CONFIRMED, BILLER_NOT_REACHABLE_AT_THIS_POINT,
    INVALID_ARGUMENTS, PRODUCT_DOES_NOT_EXIST,
};
pub use credentials::{AuthHeaders, Credentials};
pub use environment::{Environment, LIVE_BASE_URL, SANDBOX_BASE_URL};
pub use error::{ApiError, ErrorKind};
pub use types::{
    BalanceResponse, BaseResponse, CustomerInfo, CustomerInfoResponse, Service,
    ServiceCategory, ServiceCategoryResponse, ServiceResponse, ServiceVariations, TextOrNumber,
    Variation, VariationResponse, WalletBalance,
};

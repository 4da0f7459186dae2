//! VTpass Client SDK.
//!
//! An async client for the VTpass bill-payment and utility-vending API:
//! service discovery, variation codes, meter verification and wallet
//! balance.
//!
//! # Example
//!
//! ```no_run
//! use vtpass_client::{Environment, VtpassClient};
//!
//! # async fn example() -> Result<(), vtpass_client::ClientError> {
//! let client = VtpassClient::new("api-key", "PK_xxx", "SK_xxx", Environment::Sandbox);
//!
//! let balance = client.balance().await?;
//! println!("Wallet balance: {}", balance.balance);
//!
//! let meter = client
//!     .verify_meter_number("1111111111111", "prepaid", "ikeja-electric")
//!     .await?;
//! println!("Customer: {:?}", meter.customer_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! A non-200 response becomes [`ClientError::Api`], classified from the
//! envelope's `code`. A 200 response whose payload carries `011` or `012`
//! becomes [`ClientError::InvalidArguments`] or
//! [`ClientError::ProductNotFound`]. Branch on [`ClientError::kind`] rather
//! than on messages, which may be empty.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod transport;

pub use client::{ClientOptions, VtpassClient};
pub use config::ClientConfig;
pub use error::ClientError;
pub use transport::{HttpTransport, RawResponse, Transport, DEFAULT_TIMEOUT_SECONDS};

pub use vtpass_core::{
    ApiError, AuthHeaders, Credentials, CustomerInfo, Environment, ErrorKind, ResponseCode,
    Service, ServiceCategory, ServiceVariations, TextOrNumber, Variation, WalletBalance,
};

//! Typed Rust client for the SMSC.RU HTTP send API.
//!
//! The crate has three layers: a domain layer of strong types, a transport layer for
//! wire-format quirks, and a small client layer issuing one form POST per send.
//!
//! ```rust,no_run
//! use smsc::{Cost, SendOptions, SmscClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsc::SmscError> {
//!     let client = SmscClient::builder("login", "password").build()?;
//!     let result = client
//!         .send("hello", ["79251234567"], SendOptions::new().cost(Cost::CountBalance))
//!         .await?;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, Config, DEFAULT_ENDPOINT, HttpResponse, HttpTransport, ReqwestTransport,
    SmscClient, SmscClientBuilder, SmscError,
};
pub use domain::{
    ApiError, Charset, Cost, ErrorCode, Format, KnownErrorCode, Login, Message, MessageId,
    Password, PhoneNumber, PhoneResult, SendOptions, SendOutcome, SendResult, Sender, Translit,
    ValidationError,
};
pub use transport::TransportError;

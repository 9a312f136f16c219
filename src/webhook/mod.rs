//! Webhook layer for delivering build notifications.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - The JSON body ([`Payload`])
//! - Single-shot delivery ([`Webhook`], [`deliver`])

mod client;
mod delivery;
mod error;
mod http;
mod payload;


pub use client::{ReqwestClient, TlsMode};
pub use delivery::{DeliveryConfig, DeliveryOutcome, Webhook, deliver};
pub use error::{DeliveryError, HttpError};
pub use self::http::{HttpClient, HttpRequest, HttpResponse};
pub use payload::Payload;

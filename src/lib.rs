//! Drone webhook plugin
//!
//! A library for loading CI build metadata from flags, environment variables
//! and env files, and posting it to a webhook endpoint.

pub mod config;
pub mod metadata;
pub mod webhook;

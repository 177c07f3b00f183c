//! Application layer containing the encoding use case.
//!
//! This module defines the `PaymentStringEncoder`, the single entry point every
//! adapter (HTTP, CLI, CSV batch) goes through to validate a request and build
//! its payment string.

pub mod encoder;

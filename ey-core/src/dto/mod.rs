//! Data Transfer Objects for Cloud API calls
//!
//! Request and response bodies exchanged with the Engine Yard Cloud API.
//! These are lightweight representations optimized for network transfer.

pub mod deploy;

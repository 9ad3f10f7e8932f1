//! Core domain types
//!
//! This module contains the entities fetched from the Engine Yard Cloud API.
//! All of them are read-only views: the CLI fetches them per invocation and
//! never persists them locally.

pub mod app;
pub mod environment;
pub mod log;

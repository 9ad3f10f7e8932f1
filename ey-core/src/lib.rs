//! Engine Yard Core
//!
//! Core types shared by the Engine Yard CLI and API client.
//!
//! This crate contains:
//! - Domain types: entities returned by the Cloud API (App, Environment, etc.)
//! - DTOs: request/response bodies for API calls

pub mod domain;
pub mod dto;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into roster use-case APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod roster_service;

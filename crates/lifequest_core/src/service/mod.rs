//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the task store and progression rules into session APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod clock;
pub mod progression_service;

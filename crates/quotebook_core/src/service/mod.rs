//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls and view rendering into use-case level APIs.
//! - Keep front ends decoupled from storage details.

pub mod category_index;
pub mod picker;
pub mod quote_service;
pub mod transfer;

//! Core domain types
//!
//! This module contains the entities the scheduler reads from the patch
//! server and the plan structures built from them on every run. These types
//! are shared between the HTTP client and the CLI.

pub mod errata;
pub mod host;
pub mod organization;
pub mod plan;
pub mod template;

//! Patchplan Core
//!
//! Core types for the patchplan errata scheduling tools.
//!
//! This crate contains:
//! - Domain types: Entities read from the patch server (organizations, hosts,
//!   errata, job templates) and the per-run plan derived from them
//! - DTOs: Request and response payloads for the server's REST API

pub mod domain;
pub mod dto;

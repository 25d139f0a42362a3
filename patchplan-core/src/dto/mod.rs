//! Request and response payloads for the patch server API
//!
//! Lightweight serde mappings of the JSON bodies the server sends and
//! expects. Responses are parsed leniently: fields the run does not need are
//! ignored, and descriptive fields are optional.

pub mod invocation;
pub mod page;

//! Host domain types

use serde::{Deserialize, Serialize};

/// Collection whose members are exempt from patching even when they also
/// belong to the target collection
pub const LOCKED_COLLECTION: &str = "Locked";

/// A host enumerated from the target collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    pub id: u32,
    pub name: String,
}

/// Build the host search filter for a collection
///
/// Matches members of `collection` while excluding every host that is also
/// a member of the reserved `Locked` collection.
pub fn collection_search(collection: &str) -> String {
    format!(
        "host_collection = \"{}\" and !(host_collection = {})",
        collection, LOCKED_COLLECTION
    )
}

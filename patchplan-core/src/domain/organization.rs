//! Organization domain types

use serde::{Deserialize, Serialize};

/// An organization registered on the patch server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: u32,
    pub name: String,
}

impl Organization {
    /// Find an organization by exact name in a server listing
    pub fn find_by_name<'a>(orgs: &'a [Organization], name: &str) -> Option<&'a Organization> {
        orgs.iter().find(|org| org.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orgs() -> Vec<Organization> {
        vec![
            Organization {
                id: 1,
                name: "Default Organization".to_string(),
            },
            Organization {
                id: 7,
                name: "ACME".to_string(),
            },
        ]
    }

    #[test]
    fn test_find_by_name() {
        let orgs = orgs();
        let org = Organization::find_by_name(&orgs, "ACME").unwrap();
        assert_eq!(org.id, 7);
    }

    #[test]
    fn test_find_by_name_missing() {
        let orgs = orgs();
        assert!(Organization::find_by_name(&orgs, "Globex").is_none());
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let orgs = orgs();
        assert!(Organization::find_by_name(&orgs, "ACM").is_none());
        assert!(Organization::find_by_name(&orgs, "acme").is_none());
    }
}

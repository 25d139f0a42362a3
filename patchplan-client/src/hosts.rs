//! Host and errata API endpoints

use crate::SatelliteClient;
use crate::error::Result;
use patchplan_core::domain::errata::Erratum;
use patchplan_core::domain::host::Host;
use patchplan_core::dto::page::{PageParams, Paginated, SearchParams};

impl SatelliteClient {
    /// Search hosts with a server-side filter
    ///
    /// # Arguments
    /// * `search` - Filter in the server's search syntax, e.g. the collection
    ///   filter built by `collection_search`
    ///
    /// # Returns
    /// Matching hosts in server order
    pub async fn search_hosts(&self, search: &str) -> Result<Vec<Host>> {
        let path = "api/hosts";
        let page: Paginated<Host> = self.get_with(path, &SearchParams::new(search)).await?;
        Ok(self.page_results(path, page))
    }

    /// List the pending (applicable) errata for one host
    ///
    /// # Arguments
    /// * `host_id` - The host's server id
    ///
    /// # Returns
    /// Pending errata in server order; empty when the host is fully patched
    pub async fn host_errata(&self, host_id: u32) -> Result<Vec<Erratum>> {
        let path = format!("api/hosts/{}/errata", host_id);
        let page: Paginated<Erratum> = self.get_with(&path, &PageParams::default()).await?;
        Ok(self.page_results(&path, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_hosts_sends_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/hosts")
            .match_body(Matcher::Json(json!({
                "search": "host_collection = \"Prod-Web\" and !(host_collection = Locked)",
                "per_page": 10000,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"total":2,"subtotal":2,"results":[
                    {"id":1,"name":"web01.example.com"},
                    {"id":2,"name":"web02.example.com"}
                ]}"#,
            )
            .create_async()
            .await;

        let client = SatelliteClient::new(server.url(), "admin", "changeme").unwrap();
        let hosts = client
            .search_hosts("host_collection = \"Prod-Web\" and !(host_collection = Locked)")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].name, "web01.example.com");
    }

    #[tokio::test]
    async fn test_host_errata_tolerates_extra_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/hosts/1/errata")
            .match_body(Matcher::Json(json!({"per_page": 10000})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"total":1,"subtotal":1,"results":[
                    {"id":818,"errata_id":"RHSA-2017:3071","reboot_suggested":true,
                     "title":"Important: kernel security update","type":"security",
                     "severity":"Important","issued":"2017-10-19","hosts_applicable_count":4}
                ]}"#,
            )
            .create_async()
            .await;

        let client = SatelliteClient::new(server.url(), "admin", "changeme").unwrap();
        let errata = client.host_errata(1).await.unwrap();

        mock.assert_async().await;
        assert_eq!(errata.len(), 1);
        assert_eq!(errata[0].errata_id, "RHSA-2017:3071");
        assert!(errata[0].reboot_suggested);
    }

    #[tokio::test]
    async fn test_host_errata_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/hosts/2/errata")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"total":0,"subtotal":0,"results":[]}"#)
            .create_async()
            .await;

        let client = SatelliteClient::new(server.url(), "admin", "changeme").unwrap();
        let errata = client.host_errata(2).await.unwrap();

        assert!(errata.is_empty());
    }
}

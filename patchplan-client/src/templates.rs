//! Job template API endpoints

use crate::SatelliteClient;
use crate::error::Result;
use patchplan_core::domain::template::JobTemplate;
use patchplan_core::dto::page::{PageParams, Paginated};

impl SatelliteClient {
    /// List all remote-execution job templates
    ///
    /// Requests an oversized page so template resolution sees the full list.
    ///
    /// # Returns
    /// Job templates in server order
    pub async fn list_job_templates(&self) -> Result<Vec<JobTemplate>> {
        let path = "api/job_templates";
        let page: Paginated<JobTemplate> = self.get_with(path, &PageParams::default()).await?;
        Ok(self.page_results(path, page))
    }
}

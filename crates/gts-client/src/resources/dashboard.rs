use gts_core::responses::{DashboardStats, HealthStatus};

use crate::error::ClientError;
use crate::http::{check_response, data};
use crate::GtsClient;

impl GtsClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        let resp = self.http.get(self.url("/dashboard/stats")).send().await?;
        data(resp).await
    }

    /// Liveness probe. The health body is not enveloped.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let resp = self.http.get(self.url("/health")).send().await?;
        Ok(check_response(resp).await?.json().await?)
    }
}

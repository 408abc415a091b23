//! Dashboard counters.

use gts_core::responses::DashboardStats;

use crate::error::DatabaseError;
use crate::helpers::query_count;
use crate::service::RegistryService;

impl RegistryService {
    /// Row counts of the four top-level tables.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, DatabaseError> {
        let conn = self.db().acquire().await;
        Ok(DashboardStats {
            total_theses: query_count(&conn, "SELECT COUNT(*) FROM thesis", ()).await?,
            total_universities: query_count(&conn, "SELECT COUNT(*) FROM university", ()).await?,
            total_people: query_count(&conn, "SELECT COUNT(*) FROM person", ()).await?,
            total_institutes: query_count(&conn, "SELECT COUNT(*) FROM institute", ()).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{new_thesis, seed_fixture, seed_topic, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn empty_registry_counts_zero() {
        let svc = test_service().await;
        assert_eq!(svc.dashboard_stats().await.unwrap(), DashboardStats::default());
    }

    #[tokio::test]
    async fn counts_top_level_rows() {
        let svc = test_service().await;
        let fx = seed_fixture(&svc).await;
        seed_topic(&svc, "Not counted").await;
        svc.create_thesis(&new_thesis(&fx, "Counted", 2020))
            .await
            .unwrap();

        let stats = svc.dashboard_stats().await.unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                total_theses: 1,
                total_universities: 1,
                total_people: 3,
                total_institutes: 1,
            }
        );
    }
}

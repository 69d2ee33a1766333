//! Per-entity facades tying the HTTP client to a cached view.
//!
//! A collection owns one [`ApiClient`] and one [`CollectionView`];
//! reads go through the view's cache, mutations go straight to the
//! server and then drop the cache so the next read refetches.

use leadhq_core::types::DbId;

use crate::http::{ApiClient, ClientError};
use crate::records::{CampaignDraft, CampaignRecord, CampaignStatsRecord, LeadDraft, LeadRecord};
use crate::view::{CollectionView, FilterSignature};

/// The leads table of a dashboard.
pub struct LeadCollection {
    api: ApiClient,
    view: CollectionView<LeadRecord, ApiClient>,
}

impl LeadCollection {
    pub fn new(api: ApiClient) -> Self {
        Self {
            view: CollectionView::new(api.clone()),
            api,
        }
    }

    /// Rows for the signature, fetching the first page on a cache miss.
    pub async fn rows(&self, signature: &FilterSignature) -> Result<Vec<LeadRecord>, ClientError> {
        self.view.ensure_first_page(signature).await
    }

    /// Append the next page. Returns `Ok(false)` when the last page is
    /// already in hand.
    pub async fn load_more(&self, signature: &FilterSignature) -> Result<bool, ClientError> {
        self.view.load_more(signature).await
    }

    /// Whether more pages exist beyond the cached rows.
    pub async fn has_more(&self, signature: &FilterSignature) -> bool {
        self.view.has_more(signature).await
    }

    /// Toggle a client-side column sort and return the reordered rows.
    pub async fn sort_by(&self, signature: &FilterSignature, column: &str) -> Vec<LeadRecord> {
        self.view.sort_by(signature, column).await
    }

    /// Create a lead, then drop the cached pages so the next read sees
    /// it.
    pub async fn create(&self, draft: &LeadDraft) -> Result<LeadRecord, ClientError> {
        let lead = self.api.create_lead(draft).await?;
        self.view.invalidate_all().await;
        tracing::debug!(lead_id = lead.id, "Created lead, view invalidated");
        Ok(lead)
    }

    /// Update the lead named by `draft.id`, then drop the cached pages.
    pub async fn update(&self, draft: &LeadDraft) -> Result<LeadRecord, ClientError> {
        let lead = self.api.update_lead(draft).await?;
        self.view.invalidate_all().await;
        tracing::debug!(lead_id = lead.id, "Updated lead, view invalidated");
        Ok(lead)
    }

    /// Delete a lead, then drop the cached pages.
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        self.api.delete_lead(id).await?;
        self.view.invalidate_all().await;
        tracing::debug!(lead_id = id, "Deleted lead, view invalidated");
        Ok(())
    }
}

/// The campaigns table of a dashboard.
pub struct CampaignCollection {
    api: ApiClient,
    view: CollectionView<CampaignRecord, ApiClient>,
}

impl CampaignCollection {
    pub fn new(api: ApiClient) -> Self {
        Self {
            view: CollectionView::new(api.clone()),
            api,
        }
    }

    /// Rows for the signature, fetching the first page on a cache miss.
    pub async fn rows(
        &self,
        signature: &FilterSignature,
    ) -> Result<Vec<CampaignRecord>, ClientError> {
        self.view.ensure_first_page(signature).await
    }

    /// Append the next page. Returns `Ok(false)` when the last page is
    /// already in hand.
    pub async fn load_more(&self, signature: &FilterSignature) -> Result<bool, ClientError> {
        self.view.load_more(signature).await
    }

    /// Whether more pages exist beyond the cached rows.
    pub async fn has_more(&self, signature: &FilterSignature) -> bool {
        self.view.has_more(signature).await
    }

    /// Toggle a client-side column sort and return the reordered rows.
    pub async fn sort_by(&self, signature: &FilterSignature, column: &str) -> Vec<CampaignRecord> {
        self.view.sort_by(signature, column).await
    }

    /// Aggregate stats across all campaigns. Always fetched fresh; the
    /// page cache does not apply to aggregates.
    pub async fn stats(&self) -> Result<CampaignStatsRecord, ClientError> {
        self.api.campaign_stats().await
    }

    /// Create a campaign, then drop the cached pages.
    pub async fn create(&self, draft: &CampaignDraft) -> Result<CampaignRecord, ClientError> {
        let campaign = self.api.create_campaign(draft).await?;
        self.view.invalidate_all().await;
        tracing::debug!(campaign_id = campaign.id, "Created campaign, view invalidated");
        Ok(campaign)
    }

    /// Update the campaign named by `draft.id`, then drop the cached
    /// pages.
    pub async fn update(&self, draft: &CampaignDraft) -> Result<CampaignRecord, ClientError> {
        let campaign = self.api.update_campaign(draft).await?;
        self.view.invalidate_all().await;
        tracing::debug!(campaign_id = campaign.id, "Updated campaign, view invalidated");
        Ok(campaign)
    }

    /// Delete a campaign, then drop the cached pages. The server leaves
    /// the campaign's leads in place, so they reappear with no campaign
    /// name on the next fetch.
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        self.api.delete_campaign(id).await?;
        self.view.invalidate_all().await;
        tracing::debug!(campaign_id = id, "Deleted campaign, view invalidated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> ApiClient {
        ApiClient::new("http://localhost:9".to_string(), "test-token")
    }

    #[tokio::test]
    async fn cache_local_calls_need_no_server() {
        // Sorting and has_more only touch the in-memory window.
        let leads = LeadCollection::new(offline_client());
        let signature = FilterSignature::default();

        assert!(leads.sort_by(&signature, "name").await.is_empty());
        assert!(leads.has_more(&signature).await);
    }

    #[tokio::test]
    async fn campaign_facade_shares_one_window_per_signature() {
        let campaigns = CampaignCollection::new(offline_client());
        let signature = FilterSignature {
            status: Some("active".to_string()),
            ..FilterSignature::default()
        };

        assert!(campaigns.sort_by(&signature, "name").await.is_empty());
        assert!(campaigns.has_more(&signature).await);
    }
}

//! REST API client for the LeadHQ HTTP endpoints.
//!
//! Wraps the dashboard API (lead and campaign CRUD, campaign stats)
//! using [`reqwest`]. Every request carries the session cookie the
//! server's auth middleware expects.

use async_trait::async_trait;
use leadhq_core::sessions::SESSION_COOKIE;
use leadhq_core::types::DbId;
use reqwest::header;
use serde::Deserialize;

use crate::records::{
    CampaignDraft, CampaignRecord, CampaignStatsRecord, DataEnvelope, LeadDraft, LeadRecord,
    PageEnvelope,
};
use crate::view::FilterSignature;

/// HTTP client for a single LeadHQ server.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session_cookie: String,
}

/// Errors from the HTTP client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server error message, or the raw body if it was not the
        /// usual `{"error": ...}` shape.
        message: String,
    },
}

/// Server error payloads carry a single `error` field.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn error_message(body: String) -> String {
    serde_json::from_str::<ErrorBody>(&body)
        .map(|parsed| parsed.error)
        .unwrap_or(body)
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://host:3000`.
    /// * `session_token` - Raw session token to send as a cookie.
    pub fn new(base_url: String, session_token: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, session_token)
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple servers).
    pub fn with_client(client: reqwest::Client, base_url: String, session_token: &str) -> Self {
        Self {
            client,
            base_url,
            session_cookie: format!("{SESSION_COOKIE}={session_token}"),
        }
    }

    // ---- leads ----

    /// Fetch one page of leads.
    ///
    /// Sends a `GET /leads` request with the signature's filters as
    /// query parameters.
    pub async fn list_leads(
        &self,
        signature: &FilterSignature,
        page: i64,
    ) -> Result<PageEnvelope<LeadRecord>, ClientError> {
        let response = self
            .client
            .get(format!("{}/leads", self.base_url))
            .header(header::COOKIE, &self.session_cookie)
            .query(&list_query(signature, page))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a lead. Returns the stored record, including the
    /// server-side normalizations (trimmed fields, lowercased email).
    pub async fn create_lead(&self, draft: &LeadDraft) -> Result<LeadRecord, ClientError> {
        let response = self
            .client
            .post(format!("{}/leads", self.base_url))
            .header(header::COOKIE, &self.session_cookie)
            .json(draft)
            .send()
            .await?;

        let envelope: DataEnvelope<LeadRecord> = Self::parse_response(response).await?;
        Ok(envelope.data)
    }

    /// Update a lead. The draft's `id` selects the row; only the filled
    /// fields change.
    pub async fn update_lead(&self, draft: &LeadDraft) -> Result<LeadRecord, ClientError> {
        let response = self
            .client
            .put(format!("{}/leads", self.base_url))
            .header(header::COOKIE, &self.session_cookie)
            .json(draft)
            .send()
            .await?;

        let envelope: DataEnvelope<LeadRecord> = Self::parse_response(response).await?;
        Ok(envelope.data)
    }

    /// Delete a lead by id.
    pub async fn delete_lead(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/leads", self.base_url))
            .header(header::COOKIE, &self.session_cookie)
            .query(&[("id", id.to_string())])
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- campaigns ----

    /// Fetch one page of campaigns.
    pub async fn list_campaigns(
        &self,
        signature: &FilterSignature,
        page: i64,
    ) -> Result<PageEnvelope<CampaignRecord>, ClientError> {
        let response = self
            .client
            .get(format!("{}/campaigns", self.base_url))
            .header(header::COOKIE, &self.session_cookie)
            .query(&list_query(signature, page))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a campaign.
    pub async fn create_campaign(
        &self,
        draft: &CampaignDraft,
    ) -> Result<CampaignRecord, ClientError> {
        let response = self
            .client
            .post(format!("{}/campaigns", self.base_url))
            .header(header::COOKIE, &self.session_cookie)
            .json(draft)
            .send()
            .await?;

        let envelope: DataEnvelope<CampaignRecord> = Self::parse_response(response).await?;
        Ok(envelope.data)
    }

    /// Update a campaign. The server recomputes `response_rate` from
    /// the stored counters, so the returned record may differ from the
    /// draft beyond the fields sent.
    pub async fn update_campaign(
        &self,
        draft: &CampaignDraft,
    ) -> Result<CampaignRecord, ClientError> {
        let response = self
            .client
            .put(format!("{}/campaigns", self.base_url))
            .header(header::COOKIE, &self.session_cookie)
            .json(draft)
            .send()
            .await?;

        let envelope: DataEnvelope<CampaignRecord> = Self::parse_response(response).await?;
        Ok(envelope.data)
    }

    /// Delete a campaign by id. Leads pointing at it are left in place
    /// and simply lose their joined campaign name.
    pub async fn delete_campaign(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/campaigns", self.base_url))
            .header(header::COOKIE, &self.session_cookie)
            .query(&[("id", id.to_string())])
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Fetch the aggregate campaign stats.
    pub async fn campaign_stats(&self) -> Result<CampaignStatsRecord, ClientError> {
        let response = self
            .client
            .get(format!("{}/campaigns/stats", self.base_url))
            .header(header::COOKIE, &self.session_cookie)
            .send()
            .await?;

        let envelope: DataEnvelope<CampaignStatsRecord> = Self::parse_response(response).await?;
        Ok(envelope.data)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ClientError::Api`] carrying
    /// the status and the server's error message on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(body),
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Query parameters for a list request: page and limit always, the
/// optional filters only when set.
fn list_query(signature: &FilterSignature, page: i64) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("page", page.to_string()),
        ("limit", signature.limit.to_string()),
    ];
    if let Some(search) = &signature.search {
        query.push(("search", search.clone()));
    }
    if let Some(status) = &signature.status {
        query.push(("status", status.clone()));
    }
    query
}

// ---------------------------------------------------------------------------
// Page-fetch seam
// ---------------------------------------------------------------------------

/// Paged-fetch seam between the HTTP transport and
/// [`CollectionView`](crate::view::CollectionView).
///
/// [`ApiClient`] implements it once per record type; tests substitute
/// an in-memory fetcher.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Fetch one page of records matching the filter signature.
    async fn fetch_page(
        &self,
        signature: &FilterSignature,
        page: i64,
    ) -> Result<PageEnvelope<T>, ClientError>;
}

#[async_trait]
impl PageFetcher<LeadRecord> for ApiClient {
    async fn fetch_page(
        &self,
        signature: &FilterSignature,
        page: i64,
    ) -> Result<PageEnvelope<LeadRecord>, ClientError> {
        self.list_leads(signature, page).await
    }
}

#[async_trait]
impl PageFetcher<CampaignRecord> for ApiClient {
    async fn fetch_page(
        &self,
        signature: &FilterSignature,
        page: i64,
    ) -> Result<PageEnvelope<CampaignRecord>, ClientError> {
        self.list_campaigns(signature, page).await
    }
}

//! Dashboard-side client for the LeadHQ API.
//!
//! Three layers:
//!
//! - [`records`] -- wire-shape mirrors of the server payloads.
//! - [`http`] -- the reqwest transport ([`http::ApiClient`]) carrying the
//!   session cookie, plus the [`http::PageFetcher`] seam the view uses.
//! - [`view`] -- the cached [`view::CollectionView`]: per-filter page
//!   windows with incremental load-more and client-side column sorting.
//!
//! [`LeadCollection`] and [`CampaignCollection`] tie the layers together
//! for one entity each; their mutations invalidate the cached view so a
//! later read refetches fresh rows.

pub mod collections;
pub mod http;
pub mod records;
pub mod view;

pub use collections::{CampaignCollection, LeadCollection};
pub use http::{ApiClient, ClientError, PageFetcher};
pub use records::{
    CampaignDraft, CampaignRecord, CampaignStatsRecord, LeadDraft, LeadRecord, PageEnvelope,
    SortableRecord,
};
pub use view::{CollectionView, FilterSignature, SortDirection};

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod campaign_repo;
pub mod lead_repo;
pub mod session_repo;

pub use campaign_repo::CampaignRepo;
pub use lead_repo::LeadRepo;
pub use session_repo::SessionRepo;

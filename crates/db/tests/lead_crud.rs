//! Integration tests for the lead repository against a real database:
//! filtered listing with pagination totals, case-insensitive uniqueness,
//! partial updates, deletes, and the campaign-name join.

use leadhq_db::models::campaign::NewCampaign;
use leadhq_db::models::lead::{LeadPatch, NewLead};
use leadhq_db::repositories::{CampaignRepo, LeadRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_lead(name: &str, email: &str, company: &str) -> NewLead {
    NewLead {
        name: name.to_string(),
        email: email.to_string(),
        company: company.to_string(),
        campaign_id: None,
        status: "pending".to_string(),
        source: None,
        last_contacted: None,
        notes: None,
    }
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_and_find_round_trip(pool: PgPool) {
    let created = LeadRepo::create(&pool, &new_lead("Alice", "alice@acme.com", "Acme"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.status, "pending");
    assert_eq!(created.created_at, created.updated_at);

    let found = LeadRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created lead must be findable");
    assert_eq!(found.name, "Alice");
    assert_eq!(found.email, "alice@acme.com");
    assert_eq!(found.company.as_deref(), Some("Acme"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn created_ids_are_unique(pool: PgPool) {
    let a = LeadRepo::create(&pool, &new_lead("A", "a@x.com", "X"))
        .await
        .unwrap();
    let b = LeadRepo::create(&pool, &new_lead("B", "b@x.com", "X"))
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
}

// ---------------------------------------------------------------------------
// Email uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn email_in_use_is_case_insensitive(pool: PgPool) {
    let lead = LeadRepo::create(&pool, &new_lead("Alice", "alice@acme.com", "Acme"))
        .await
        .unwrap();

    assert!(LeadRepo::email_in_use(&pool, "ALICE@ACME.COM", None)
        .await
        .unwrap());
    assert!(!LeadRepo::email_in_use(&pool, "other@acme.com", None)
        .await
        .unwrap());

    // The lead's own row is skipped when excluded (update path).
    assert!(!LeadRepo::email_in_use(&pool, "alice@acme.com", Some(lead.id))
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn unique_index_backstops_duplicate_emails(pool: PgPool) {
    LeadRepo::create(&pool, &new_lead("Alice", "alice@acme.com", "Acme"))
        .await
        .unwrap();

    // Bypassing the email_in_use check must still fail on the index.
    let err = LeadRepo::create(&pool, &new_lead("Imposter", "Alice@Acme.com", "Acme"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_leads_email_lower"));
        }
        other => panic!("expected a unique violation, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn update_patches_only_supplied_fields(pool: PgPool) {
    let created = LeadRepo::create(&pool, &new_lead("Alice", "alice@acme.com", "Acme"))
        .await
        .unwrap();

    let patch = LeadPatch {
        status: Some("converted".to_string()),
        ..LeadPatch::default()
    };
    let updated = LeadRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("lead exists");

    assert_eq!(updated.status, "converted");
    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.email, "alice@acme.com");
    assert_eq!(updated.company.as_deref(), Some("Acme"));
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_unknown_id_returns_none(pool: PgPool) {
    let patch = LeadPatch {
        name: Some("Ghost".to_string()),
        ..LeadPatch::default()
    };
    let result = LeadRepo::update(&pool, 999_999, &patch).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn delete_returns_true_then_false(pool: PgPool) {
    let created = LeadRepo::create(&pool, &new_lead("Alice", "alice@acme.com", "Acme"))
        .await
        .unwrap();

    assert!(LeadRepo::delete(&pool, created.id).await.unwrap());
    // Repeat deletes report the row as already gone, never silent success.
    assert!(!LeadRepo::delete(&pool, created.id).await.unwrap());
    assert!(LeadRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn list_orders_newest_first(pool: PgPool) {
    for (name, email) in [("A", "a@x.com"), ("B", "b@x.com"), ("C", "c@x.com")] {
        LeadRepo::create(&pool, &new_lead(name, email, "X"))
            .await
            .unwrap();
    }

    let (rows, total) = LeadRepo::list(&pool, None, None, 10, 0).await.unwrap();
    assert_eq!(total, 3);

    let ids: Vec<_> = rows.iter().map(|l| l.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted, "ids must be descending (newest first)");
    assert_eq!(rows[0].name, "C");
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_search_matches_name_email_company(pool: PgPool) {
    LeadRepo::create(&pool, &new_lead("Alice", "alice@acme.com", "Acme"))
        .await
        .unwrap();
    LeadRepo::create(&pool, &new_lead("Bob", "bob@globex.io", "Globex"))
        .await
        .unwrap();

    // Company substring, case-insensitive.
    let (rows, total) = LeadRepo::list(&pool, Some("ACME"), None, 10, 0).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].name, "Alice");

    // Email substring.
    let (rows, _) = LeadRepo::list(&pool, Some("bob@"), None, 10, 0).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Bob");

    // Name substring.
    let (rows, _) = LeadRepo::list(&pool, Some("li"), None, 10, 0).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Alice");
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_status_filter_is_exact_match(pool: PgPool) {
    let mut lead = new_lead("Alice", "alice@acme.com", "Acme");
    lead.status = "contacted".to_string();
    LeadRepo::create(&pool, &lead).await.unwrap();
    LeadRepo::create(&pool, &new_lead("Bob", "bob@globex.io", "Globex"))
        .await
        .unwrap();

    let (rows, total) = LeadRepo::list(&pool, None, Some("contacted"), 10, 0)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].name, "Alice");

    // Unknown status matches nothing rather than erroring.
    let (rows, total) = LeadRepo::list(&pool, None, Some("archived"), 10, 0)
        .await
        .unwrap();
    assert!(rows.is_empty());
    assert_eq!(total, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_pagination_returns_filtered_total(pool: PgPool) {
    for i in 0..5 {
        LeadRepo::create(&pool, &new_lead(&format!("L{i}"), &format!("l{i}@x.com"), "X"))
            .await
            .unwrap();
    }

    let (rows, total) = LeadRepo::list(&pool, None, None, 2, 0).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(total, 5);

    let (rows, total) = LeadRepo::list(&pool, None, None, 2, 4).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(total, 5);
}

// ---------------------------------------------------------------------------
// Campaign join
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn list_joins_campaign_name(pool: PgPool) {
    let campaign = CampaignRepo::create(
        &pool,
        &NewCampaign {
            name: "Q3 Outbound".to_string(),
            status: "active".to_string(),
        },
    )
    .await
    .unwrap();

    let mut lead = new_lead("Alice", "alice@acme.com", "Acme");
    lead.campaign_id = Some(campaign.id);
    LeadRepo::create(&pool, &lead).await.unwrap();

    let (rows, _) = LeadRepo::list(&pool, None, None, 10, 0).await.unwrap();
    assert_eq!(rows[0].campaign_name.as_deref(), Some("Q3 Outbound"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleting_campaign_leaves_dangling_lead(pool: PgPool) {
    let campaign = CampaignRepo::create(
        &pool,
        &NewCampaign {
            name: "Doomed".to_string(),
            status: "draft".to_string(),
        },
    )
    .await
    .unwrap();

    let mut lead = new_lead("Alice", "alice@acme.com", "Acme");
    lead.campaign_id = Some(campaign.id);
    let lead = LeadRepo::create(&pool, &lead).await.unwrap();

    assert!(CampaignRepo::delete(&pool, campaign.id).await.unwrap());

    // The lead survives with its reference intact but unresolvable.
    let (rows, total) = LeadRepo::list(&pool, None, None, 10, 0).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].id, lead.id);
    assert_eq!(rows[0].campaign_id, Some(campaign.id));
    assert_eq!(rows[0].campaign_name, None);
}

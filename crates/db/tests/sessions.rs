//! Integration tests for session lookup: only live sessions resolve,
//! and expired rows can be purged.

use chrono::{Duration, Utc};
use leadhq_db::models::session::CreateSession;
use leadhq_db::repositories::SessionRepo;
use sqlx::PgPool;

fn session(user_id: i64, token_hash: &str, ttl: Duration) -> CreateSession {
    CreateSession {
        user_id,
        token_hash: token_hash.to_string(),
        expires_at: Utc::now() + ttl,
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn find_returns_only_live_sessions(pool: PgPool) {
    SessionRepo::create(&pool, &session(1, "live-hash", Duration::hours(1)))
        .await
        .unwrap();
    SessionRepo::create(&pool, &session(2, "dead-hash", Duration::hours(-1)))
        .await
        .unwrap();

    let live = SessionRepo::find_by_token_hash(&pool, "live-hash")
        .await
        .unwrap()
        .expect("unexpired session resolves");
    assert_eq!(live.user_id, 1);

    assert!(SessionRepo::find_by_token_hash(&pool, "dead-hash")
        .await
        .unwrap()
        .is_none());
    assert!(SessionRepo::find_by_token_hash(&pool, "unknown-hash")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn cleanup_removes_only_expired_sessions(pool: PgPool) {
    SessionRepo::create(&pool, &session(1, "live-hash", Duration::hours(1)))
        .await
        .unwrap();
    SessionRepo::create(&pool, &session(2, "dead-hash", Duration::hours(-1)))
        .await
        .unwrap();

    let removed = SessionRepo::cleanup_expired(&pool).await.unwrap();
    assert_eq!(removed, 1);

    assert!(SessionRepo::find_by_token_hash(&pool, "live-hash")
        .await
        .unwrap()
        .is_some());
}

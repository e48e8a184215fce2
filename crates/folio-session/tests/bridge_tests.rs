mod common;

use common::{bare_identity, create_test_pool, full_identity};

use folio_session::{SessionBridge, SessionError};

use folio_auth::{AuthError, ExternalIdentity};
use folio_core::{Role, UserProfile};
use folio_db::AccountRepository;

use googletest::prelude::*;
use sqlx::SqlitePool;

async fn user_doc_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = 'users'")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn given_new_subject_when_establishing_then_account_created_with_student_role() {
    // Given: A fresh store and a first-time login
    let pool = create_test_pool().await;
    let bridge = SessionBridge::new(pool.clone());

    // When: Establishing the session
    let profile = bridge.establish(&full_identity("ext-asha")).await.unwrap();

    // Then: One account document, default role, identity fields copied
    assert_that!(user_doc_count(&pool).await, eq(1));
    assert_that!(profile.role, eq(Role::Student));
    assert_that!(profile.name, some(eq("Asha Rao")));
    assert_that!(profile.email, some(eq("asha.rao@example.com")));
    assert_that!(profile.external_subject_id, some(eq("ext-asha")));
    assert_that!(profile.created_at, eq(profile.last_login_at));
}

#[tokio::test]
async fn given_returning_subject_when_establishing_then_same_account_and_no_second_document() {
    // Given: A subject that has logged in before
    let pool = create_test_pool().await;
    let bridge = SessionBridge::new(pool.clone());
    let first = bridge.establish(&full_identity("ext-asha")).await.unwrap();

    // When: The same subject logs in again
    let second = bridge.establish(&full_identity("ext-asha")).await.unwrap();

    // Then: Same backend id, still exactly one document
    assert_that!(second.id, eq(first.id));
    assert_that!(user_doc_count(&pool).await, eq(1));
}

#[tokio::test]
async fn given_duplicate_tab_first_logins_when_establishing_concurrently_then_one_account() {
    // Given: Two tabs bridging the same never-seen subject at once
    let pool = create_test_pool().await;
    let tab_a = SessionBridge::new(pool.clone());
    let tab_b = SessionBridge::new(pool.clone());
    let identity = full_identity("ext-asha");

    // When: Both establish concurrently
    let (a, b) = tokio::join!(tab_a.establish(&identity), tab_b.establish(&identity));
    let a = a.unwrap();
    let b = b.unwrap();

    // Then: Both land on the same backend id and one document exists
    assert_that!(a.id, eq(b.id));
    assert_that!(user_doc_count(&pool).await, eq(1));
}

#[tokio::test]
async fn given_returning_subject_when_establishing_then_created_at_is_stable() {
    // Given: An account whose stored creation time is in the past
    let pool = create_test_pool().await;
    let bridge = SessionBridge::new(pool.clone());
    let first = bridge.establish(&full_identity("ext-asha")).await.unwrap();

    sqlx::query(
        "UPDATE documents SET body = json_set(body, '$.createdAt', json_extract(body, '$.createdAt') - 3600) \
         WHERE collection = 'users' AND id = ?",
    )
    .bind(first.id.to_string())
    .execute(&pool)
    .await
    .unwrap();
    let accounts = AccountRepository::new(pool.clone());
    let backdated = accounts.find_by_id(first.id).await.unwrap().unwrap();

    // When: The subject logs in again
    let merged = bridge.establish(&full_identity("ext-asha")).await.unwrap();

    // Then: createdAt survives the merge, lastLoginAt moves forward
    assert_that!(merged.created_at, eq(backdated.created_at));
    assert_that!(merged.last_login_at, gt(backdated.created_at));
}

#[tokio::test]
async fn given_manually_promoted_account_when_establishing_then_role_preserved() {
    // Given: An account promoted to club lead out of band
    let pool = create_test_pool().await;
    let bridge = SessionBridge::new(pool.clone());
    let profile = bridge.establish(&full_identity("ext-asha")).await.unwrap();

    let accounts = AccountRepository::new(pool.clone());
    let mut promoted = profile.clone();
    promoted.role = Role::ClubLead;
    accounts.update(&promoted).await.unwrap();

    // When: The subject logs in again
    let merged = bridge.establish(&full_identity("ext-asha")).await.unwrap();

    // Then: The merge did not reset the role
    assert_that!(merged.role, eq(Role::ClubLead));
}

#[tokio::test]
async fn given_login_with_fewer_claims_when_establishing_then_known_fields_survive() {
    // Given: A full first login followed by a sparse one
    let pool = create_test_pool().await;
    let bridge = SessionBridge::new(pool.clone());
    bridge.establish(&full_identity("ext-asha")).await.unwrap();

    // When: The same subject returns with no name or email claims
    let merged = bridge.establish(&bare_identity("ext-asha")).await.unwrap();

    // Then: Previously learned fields are not erased
    assert_that!(merged.name, some(eq("Asha Rao")));
    assert_that!(merged.email, some(eq("asha.rao@example.com")));
}

#[tokio::test]
async fn given_two_subjects_when_establishing_then_separate_accounts() {
    // Given: Two different external subjects
    let pool = create_test_pool().await;
    let bridge = SessionBridge::new(pool.clone());

    // When: Both establish sessions
    let a = bridge.establish(&full_identity("ext-asha")).await.unwrap();
    let b = bridge.establish(&full_identity("ext-ravi")).await.unwrap();

    // Then: Distinct backend accounts
    assert_that!(a.id, not(eq(b.id)));
    assert_that!(user_doc_count(&pool).await, eq(2));
}

#[tokio::test]
async fn given_identity_without_subject_when_establishing_then_missing_identity_error() {
    // Given: A normalized identity that lost its subject claim
    let pool = create_test_pool().await;
    let bridge = SessionBridge::new(pool.clone());
    let identity = ExternalIdentity {
        display_name: Some("Asha Rao".to_string()),
        email: None,
        subject_id: None,
    };

    // When: Establishing
    let result = bridge.establish(&identity).await;

    // Then: Bridging is refused and nothing is written
    assert!(matches!(
        result.unwrap_err(),
        SessionError::Auth(AuthError::MissingIdentity { .. })
    ));
    assert_that!(user_doc_count(&pool).await, eq(0));
}

#[tokio::test]
async fn given_established_account_when_found_by_subject_then_profile_matches() {
    // Given: An established session
    let pool = create_test_pool().await;
    let bridge = SessionBridge::new(pool.clone());
    let profile = bridge.establish(&full_identity("ext-asha")).await.unwrap();

    // When: Looking the account up directly
    let accounts = AccountRepository::new(pool);
    let found: Option<UserProfile> = accounts.find_by_subject("ext-asha").await.unwrap();

    // Then: The stored document matches what the bridge returned
    assert_that!(found, some(eq(&profile)));
}

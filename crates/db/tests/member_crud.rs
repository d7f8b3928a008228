//! Repository-level tests for members: status lifecycle, email
//! uniqueness, listing, and the stats aggregation.

use sqlx::PgPool;

use gbc_db::models::member::{CreateMember, UpdateMember};
use gbc_db::repositories::MemberRepo;

fn new_member(email: &str, name: &str) -> CreateMember {
    CreateMember {
        email: email.to_string(),
        contact_name: name.to_string(),
        organization: Some("Atelier Vert".to_string()),
        phone: None,
        membership_type: Some("corporate".to_string()),
        city: Some("Rabat".to_string()),
        country: Some("MA".to_string()),
    }
}

fn status_update(status: &str) -> UpdateMember {
    UpdateMember {
        contact_name: None,
        organization: None,
        phone: None,
        membership_type: None,
        city: None,
        country: None,
        status: Some(status.to_string()),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_starts_pending(pool: PgPool) {
    let member = MemberRepo::create(&pool, &new_member("a@exemple.org", "Amina"))
        .await
        .unwrap();
    assert_eq!(member.status, "pending");
    assert_eq!(member.email, "a@exemple.org");

    let found = MemberRepo::find_by_email(&pool, "a@exemple.org")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, member.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_violates_constraint(pool: PgPool) {
    MemberRepo::create(&pool, &new_member("dup@exemple.org", "Premier"))
        .await
        .unwrap();

    let err = MemberRepo::create(&pool, &new_member("dup@exemple.org", "Second"))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_members_email"));
        }
        other => panic!("expected unique violation, got {other}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_advances_only_through_update(pool: PgPool) {
    let member = MemberRepo::create(&pool, &new_member("b@exemple.org", "Bilal"))
        .await
        .unwrap();

    let updated = MemberRepo::update(&pool, member.id, &status_update("active"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "active");
    assert!(updated.updated_at >= member.updated_at);

    let missing = MemberRepo::update(&pool, 999_999, &status_update("active"))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_status(pool: PgPool) {
    for i in 0..3 {
        MemberRepo::create(&pool, &new_member(&format!("m{i}@exemple.org"), "Membre"))
            .await
            .unwrap();
    }
    let activated = MemberRepo::create(&pool, &new_member("act@exemple.org", "Actif"))
        .await
        .unwrap();
    MemberRepo::update(&pool, activated.id, &status_update("active"))
        .await
        .unwrap();

    let (pending, pending_total) = MemberRepo::list(&pool, Some("pending"), 1, 10).await.unwrap();
    assert_eq!(pending_total, 3);
    assert!(pending.iter().all(|m| m.status == "pending"));

    let (_, all_total) = MemberRepo::list(&pool, None, 1, 10).await.unwrap();
    assert_eq!(all_total, 4);

    let (page, total) = MemberRepo::list(&pool, None, 2, 3).await.unwrap();
    assert_eq!(total, 4);
    assert_eq!(page.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_member(pool: PgPool) {
    let member = MemberRepo::create(&pool, &new_member("c@exemple.org", "Chafik"))
        .await
        .unwrap();

    assert!(MemberRepo::delete(&pool, member.id).await.unwrap());
    assert!(MemberRepo::find_by_id(&pool, member.id).await.unwrap().is_none());
    assert!(!MemberRepo::delete(&pool, member.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_counts_and_monthly_series(pool: PgPool) {
    for i in 0..2 {
        MemberRepo::create(&pool, &new_member(&format!("p{i}@exemple.org"), "Pending"))
            .await
            .unwrap();
    }
    let a = MemberRepo::create(&pool, &new_member("a1@exemple.org", "Active"))
        .await
        .unwrap();
    MemberRepo::update(&pool, a.id, &status_update("active")).await.unwrap();
    let b = MemberRepo::create(&pool, &new_member("i1@exemple.org", "Inactive"))
        .await
        .unwrap();
    MemberRepo::update(&pool, b.id, &status_update("inactive")).await.unwrap();

    let stats = MemberRepo::stats(&pool).await.unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.inactive, 1);

    // Exactly 12 calendar buckets, zero-filled, ending with the current
    // month which holds all four signups.
    assert_eq!(stats.monthly_new_members.len(), 12);
    let last = stats.monthly_new_members.last().unwrap();
    assert_eq!(last.count, 4);
    assert_eq!(
        stats
            .monthly_new_members
            .iter()
            .map(|m| m.count)
            .sum::<i64>(),
        4
    );
    // Months are formatted as YYYY-MM and strictly increasing.
    for window in stats.monthly_new_members.windows(2) {
        assert!(window[0].month < window[1].month);
        assert_eq!(window[0].month.len(), 7);
    }
}

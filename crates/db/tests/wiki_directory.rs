//! Integration tests for the PostgreSQL wiki directory.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use futures::TryStreamExt;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use wikifarm_core::caller::Caller;
use wikifarm_core::directory::WikiDirectory;
use wikifarm_core::listing::{list_wikis, ListOptions, ResultBudget, WikiPage};
use wikifarm_core::query::{ListWikisParams, ListWikisQuery, TimestampRange, WikiFilter};
use wikifarm_core::types::DbId;
use wikifarm_core::wiki::WikiSetting;
use wikifarm_db::directory::PgWikiDirectory;
use wikifarm_db::repositories::{WikiListRepo, WikiSettingRepo};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2013, 7, d, 0, 0, 0).unwrap()
}

async fn insert_wiki(pool: &PgPool, id: DbId, created: DateTime<Utc>, deleted: bool) {
    sqlx::query("INSERT INTO wiki_list (wl_id, wl_timestamp, wl_deleted) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(created)
        .bind(deleted)
        .execute(pool)
        .await
        .unwrap();
}

async fn set(pool: &PgPool, id: DbId, setting: WikiSetting, value: &str) {
    sqlx::query("INSERT INTO wiki_settings (ws_wiki, ws_setting, ws_value) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(setting.key())
        .bind(value)
        .execute(pool)
        .await
        .unwrap();
}

/// Five wikis: 4 is deleted, 1 and 3 are Finnish, the rest English.
async fn seed(pool: &PgPool) {
    for (id, deleted) in [(1, false), (2, false), (3, false), (4, true), (5, false)] {
        insert_wiki(pool, id, day(id as u32), deleted).await;
    }
    set(pool, 1, WikiSetting::LanguageCode, "fi").await;
    set(pool, 2, WikiSetting::LanguageCode, "en").await;
    set(pool, 3, WikiSetting::LanguageCode, "fi").await;
    set(pool, 4, WikiSetting::LanguageCode, "fi").await;
    set(pool, 5, WikiSetting::LanguageCode, "en").await;
    set(pool, 3, WikiSetting::Sitename, "Kolmas").await;
}

async fn scan_ids(pool: &PgPool, filter: &WikiFilter) -> Vec<DbId> {
    WikiListRepo::scan(pool, filter, 2)
        .map_ok(|row| row.wl_id)
        .try_collect()
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_excludes_deleted_and_orders_by_id(pool: PgPool) {
    seed(&pool).await;

    let ids = scan_ids(&pool, &WikiFilter::default()).await;
    assert_eq!(ids, vec![1, 2, 3, 5]);

    let with_deleted = WikiFilter {
        include_deleted: true,
        ..Default::default()
    };
    assert_eq!(scan_ids(&pool, &with_deleted).await, vec![1, 2, 3, 4, 5]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_applies_id_range_and_language(pool: PgPool) {
    seed(&pool).await;

    let range = WikiFilter {
        from: Some(2),
        to: Some(4),
        include_deleted: true,
        ..Default::default()
    };
    assert_eq!(scan_ids(&pool, &range).await, vec![2, 3, 4]);

    let finnish = WikiFilter {
        lang: Some("fi".into()),
        ..Default::default()
    };
    assert_eq!(scan_ids(&pool, &finnish).await, vec![1, 3]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_applies_timestamp_bounds_inclusively(pool: PgPool) {
    seed(&pool).await;

    let filter = WikiFilter {
        timestamps: TimestampRange {
            lower: Some(day(2)),
            upper: Some(day(3)),
        },
        ..Default::default()
    };
    assert_eq!(scan_ids(&pool, &filter).await, vec![2, 3]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn count_matches_scan(pool: PgPool) {
    seed(&pool).await;

    let finnish = WikiFilter {
        lang: Some("fi".into()),
        include_deleted: true,
        ..Default::default()
    };
    let count = WikiListRepo::count(&pool, &finnish, 101).await.unwrap();
    assert_eq!(count, 3);

    // The cap limits rows of the aggregate, never the count itself.
    let all = WikiListRepo::count(&pool, &WikiFilter::default(), 2)
        .await
        .unwrap();
    assert_eq!(all, 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn count_with_wiki_id(pool: PgPool) {
    seed(&pool).await;

    let present = WikiFilter {
        wiki_id: Some(3),
        ..Default::default()
    };
    assert_eq!(WikiListRepo::count(&pool, &present, 101).await.unwrap(), 1);

    let deleted = WikiFilter {
        wiki_id: Some(4),
        ..Default::default()
    };
    assert_eq!(WikiListRepo::count(&pool, &deleted, 101).await.unwrap(), 0);

    let missing = WikiFilter {
        wiki_id: Some(177),
        ..Default::default()
    };
    assert_eq!(WikiListRepo::count(&pool, &missing, 101).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn setting_lookup(pool: PgPool) {
    seed(&pool).await;

    let name = WikiSettingRepo::get(&pool, 3, WikiSetting::Sitename.key())
        .await
        .unwrap();
    assert_eq!(name.as_deref(), Some("Kolmas"));

    let none = WikiSettingRepo::get(&pool, 2, WikiSetting::Sitename.key())
        .await
        .unwrap();
    assert_eq!(none, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn directory_scan_yields_rows(pool: PgPool) {
    seed(&pool).await;
    let directory = PgWikiDirectory::new(pool.clone());

    let filter = WikiFilter {
        from: Some(3),
        ..Default::default()
    };
    let rows: Vec<_> = directory.scan(&filter).try_collect().await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 3);
    assert_eq!(rows[0].created_at, day(3));
    assert_eq!(rows[1].id, 5);

    let lang = directory
        .setting(3, WikiSetting::LanguageCode)
        .await
        .unwrap();
    assert_eq!(lang.as_deref(), Some("fi"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_crosses_chunk_boundaries(pool: PgPool) {
    seed(&pool).await;

    for chunk in [1, 2, 4, 100] {
        let directory = PgWikiDirectory::new(pool.clone()).with_scan_chunk(chunk);
        let filter = WikiFilter {
            include_deleted: true,
            ..Default::default()
        };
        let ids: Vec<DbId> = directory
            .scan(&filter)
            .map_ok(|row| row.id)
            .try_collect()
            .await
            .unwrap();
        assert_eq!(ids, vec![1, 2, 3, 4, 5], "chunk size {chunk}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn timestamps_are_stored_at_second_precision(pool: PgPool) {
    insert_wiki(&pool, 1, day(1) + chrono::Duration::milliseconds(250), false).await;

    let rows: Vec<_> = PgWikiDirectory::new(pool.clone())
        .scan(&WikiFilter::default())
        .try_collect()
        .await
        .unwrap();
    assert_eq!(rows[0].created_at, day(1));
}

async fn list_page(directory: &PgWikiDirectory, limit: &str) -> Result<WikiPage, sqlx::Error> {
    let caller = Caller::anonymous();
    let params = ListWikisParams {
        limit: Some(limit.into()),
        ..Default::default()
    };
    let query = ListWikisQuery::from_params(&params, &caller, Utc::now()).unwrap();
    let options = ListOptions {
        caller: &caller,
        hosting_domain: "shoutwiki.com",
    };
    list_wikis(directory, &query, options, &mut ResultBudget::default()).await
}

/// Listings look up settings while the scan is in progress; on a
/// single-connection pool that only works if the scan lets go of its
/// connection between chunks.
#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_listings_share_a_single_connection(
    pool_options: PgPoolOptions,
    connect_options: PgConnectOptions,
) {
    let pool = pool_options
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(connect_options)
        .await
        .unwrap();
    seed(&pool).await;
    for id in [1, 2, 3, 5] {
        set(&pool, id, WikiSetting::WikiType, "public").await;
    }

    let directory = PgWikiDirectory::new(pool.clone()).with_scan_chunk(2);
    let (a, b) = tokio::join!(list_page(&directory, "3"), list_page(&directory, "10"));

    let a = a.expect("first listing should not starve the pool");
    let b = b.expect("second listing should not starve the pool");

    let ids = |page: &WikiPage| page.records.iter().map(|r| r.id).collect::<Vec<_>>();
    assert_eq!(ids(&a), vec![1, 2, 3]);
    assert_eq!(a.continue_from, Some(day(5)));
    assert_eq!(ids(&b), vec![1, 2, 3, 5]);
    assert_eq!(b.continue_from, None);
    assert_eq!(b.records[2].sitename.as_deref(), Some("Kolmas"));
}
